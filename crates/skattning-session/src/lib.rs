//! skattning-session
//!
//! The application state object: catalog, recommendation bank, profile
//! selectors, the selected-symptom set and one response map per instrument.
//! Constructed explicitly and passed around — no ambient singletons — so
//! tests and the UI shell can hold isolated instances. Every mutation the
//! UI may perform is a method here; nothing mutates the bank or response
//! maps directly.

pub mod error;

use skattning_core::models::catalog::SymptomCatalog;
use skattning_core::models::profile::{AgeGroup, Diagnosis, Profile, Sex};
use skattning_core::models::recommendation::{Recommendation, RecommendationBank};
use skattning_core::models::responses::{Answer, ResponseMap, YesNoMap};
use skattning_instruments::Instrument;
use skattning_instruments::instruments::cats2::{self, ScreeningResult};
use skattning_instruments::instruments::cbcl::Cbcl;
use skattning_instruments::instruments::ysr::Ysr;
use skattning_instruments::scoring::ClusterSetScores;
use skattning_recommend::{defaults, filter, mutate, narrative};
use skattning_storage::state::{PersistedState, StateStore};

use error::SessionError;

/// The instruments a session holds responses for. Clearing the trauma
/// screen clears both its rating map and its yes/no map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Cats2,
    Ysr,
    Cbcl,
}

pub struct Session {
    catalog: SymptomCatalog,
    bank: RecommendationBank,
    pub age_group: AgeGroup,
    pub sex: Sex,
    pub diagnosis: Diagnosis,
    patient_name: String,
    selected_symptoms: Vec<String>,
    cats_symptoms: ResponseMap,
    cats_events: YesNoMap,
    ysr_responses: ResponseMap,
    cbcl_responses: ResponseMap,
}

impl Session {
    /// A fresh session over the given catalog and bank. Response maps start
    /// empty; the profile starts at child/male with no diagnosis.
    pub fn new(catalog: SymptomCatalog, bank: RecommendationBank) -> Self {
        Session {
            catalog,
            bank,
            age_group: AgeGroup::Child,
            sex: Sex::Male,
            diagnosis: Diagnosis::None,
            patient_name: "Patienten".to_string(),
            selected_symptoms: Vec::new(),
            cats_symptoms: ResponseMap::new(),
            cats_events: YesNoMap::new(),
            ysr_responses: ResponseMap::new(),
            cbcl_responses: ResponseMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let catalog = defaults::default_catalog();
        let bank = defaults::default_bank(&catalog);
        Session::new(catalog, bank)
    }

    /// Restore catalog and bank from the store, falling back to defaults
    /// when the stored document is missing, stale or unreadable.
    pub fn load(store: &StateStore) -> Self {
        let state = store.load_or_default();
        Session::new(state.symptom_categories, state.recommendations)
    }

    /// Persist catalog and bank. Fire-and-forget from the caller's point
    /// of view: in-memory state stays authoritative either way.
    pub fn save(&self, store: &StateStore) -> Result<(), SessionError> {
        let state = PersistedState {
            schema_version: skattning_storage::state::SCHEMA_VERSION,
            symptom_categories: self.catalog.clone(),
            recommendations: self.bank.clone(),
        };
        store.save(&state)?;
        Ok(())
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn bank(&self) -> &RecommendationBank {
        &self.bank
    }

    pub fn profile(&self) -> Profile {
        Profile::new(self.age_group, self.sex)
    }

    pub fn set_patient_name(&mut self, name: impl Into<String>) {
        self.patient_name = name.into();
    }

    pub fn selected_symptoms(&self) -> &[String] {
        &self.selected_symptoms
    }

    /// Select or deselect a symptom, preserving selection order.
    pub fn toggle_symptom(&mut self, symptom_id: &str) {
        if let Some(pos) = self.selected_symptoms.iter().position(|s| s == symptom_id) {
            self.selected_symptoms.remove(pos);
        } else {
            self.selected_symptoms.push(symptom_id.to_string());
        }
    }

    pub fn clear_selected_symptoms(&mut self) {
        self.selected_symptoms.clear();
    }

    pub fn responses(&self, instrument: InstrumentKind) -> &ResponseMap {
        match instrument {
            InstrumentKind::Cats2 => &self.cats_symptoms,
            InstrumentKind::Ysr => &self.ysr_responses,
            InstrumentKind::Cbcl => &self.cbcl_responses,
        }
    }

    pub fn events(&self) -> &YesNoMap {
        &self.cats_events
    }

    pub fn set_rating(&mut self, instrument: InstrumentKind, item_id: &str, rating: u8) {
        let map = match instrument {
            InstrumentKind::Cats2 => &mut self.cats_symptoms,
            InstrumentKind::Ysr => &mut self.ysr_responses,
            InstrumentKind::Cbcl => &mut self.cbcl_responses,
        };
        map.set(item_id, rating);
    }

    pub fn set_event_answer(&mut self, item_id: &str, answer: Answer) {
        self.cats_events.set(item_id, answer);
    }

    /// Clear every response for one instrument. The confirmation step
    /// belongs to the UI; this is the unconditional operation behind it.
    pub fn clear_responses(&mut self, instrument: InstrumentKind) {
        match instrument {
            InstrumentKind::Cats2 => {
                self.cats_symptoms.clear();
                self.cats_events.clear();
            }
            InstrumentKind::Ysr => self.ysr_responses.clear(),
            InstrumentKind::Cbcl => self.cbcl_responses.clear(),
        }
        tracing::debug!(?instrument, "responses cleared");
    }

    /// Recommendations matching the current profile and symptom selection.
    pub fn recommendations(&self) -> Vec<&Recommendation> {
        filter::filter_recommendations(
            &self.bank,
            &self.profile(),
            &self.catalog,
            &self.selected_symptoms,
        )
    }

    /// The rendered diagnosis narrative, `None` when no diagnosis is set.
    pub fn narrative(&self) -> Result<Option<String>, SessionError> {
        Ok(narrative::render_narrative(
            self.diagnosis,
            self.age_group,
            self.sex,
            &self.patient_name,
        )?)
    }

    pub fn narrative_caveat(&self) -> Option<&'static str> {
        narrative::caveat(self.diagnosis, self.age_group)
    }

    /// The full CATS-2 screening: dimensional scores, bands, criteria.
    pub fn screening(&self) -> ScreeningResult {
        cats2::screen(&self.cats_symptoms, &self.cats_events)
    }

    pub fn ysr_scores(&self) -> Vec<ClusterSetScores> {
        Ysr.score_cluster_sets(&self.ysr_responses)
    }

    pub fn cbcl_scores(&self) -> Vec<ClusterSetScores> {
        Cbcl.score_cluster_sets(&self.cbcl_responses)
    }

    pub fn update_recommendation_text(
        &mut self,
        profile: &Profile,
        category_id: &str,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        mutate::update_text(&mut self.bank, profile, category_id, index, text)?;
        Ok(())
    }

    pub fn relink_recommendation(
        &mut self,
        profile: &Profile,
        category_id: &str,
        index: usize,
        symptom_id: &str,
    ) -> Result<(), SessionError> {
        mutate::relink_symptom(
            &mut self.bank,
            &self.catalog,
            profile,
            category_id,
            index,
            symptom_id,
        )?;
        Ok(())
    }

    /// Clipboard text for the recommendation view.
    pub fn export_recommendations(&self) -> Result<String, SessionError> {
        let narrative = self.narrative()?;
        let recommendations = self.recommendations();
        Ok(skattning_export::render::render_recommendations(
            narrative.as_deref(),
            &recommendations,
        ))
    }

    /// Clipboard text for the trauma-screen view.
    pub fn export_screening(&self) -> String {
        skattning_export::render::render_screening(&self.screening())
    }
}
