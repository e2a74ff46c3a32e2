use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::catalog::SymptomCatalog;

/// A free-text recommendation tied to one or more symptoms. The linked set
/// must be non-empty; the current editing surface assigns a single symptom
/// but the model keeps set semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub text: String,
    pub linked_symptoms: Vec<String>,
}

impl Recommendation {
    pub fn new(text: impl Into<String>, linked_symptoms: Vec<String>) -> Self {
        Recommendation {
            text: text.into(),
            linked_symptoms,
        }
    }

    /// True if at least one linked symptom is in the selection.
    pub fn links_any(&self, selected: &[String]) -> bool {
        self.linked_symptoms.iter().any(|id| selected.contains(id))
    }
}

/// Per-category recommendation lists for one patient profile.
pub type ProfileRecommendations = BTreeMap<String, Vec<Recommendation>>;

/// Profile-keyed recommendation bank. Each profile holds its own
/// independently editable copy — lists are duplicated, never derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct RecommendationBank(pub BTreeMap<String, ProfileRecommendations>);

impl RecommendationBank {
    pub fn new() -> Self {
        RecommendationBank(BTreeMap::new())
    }

    pub fn for_profile(&self, profile_key: &str) -> Option<&ProfileRecommendations> {
        self.0.get(profile_key)
    }

    pub fn category(&self, profile_key: &str, category_id: &str) -> Option<&[Recommendation]> {
        self.0
            .get(profile_key)
            .and_then(|p| p.get(category_id))
            .map(Vec::as_slice)
    }

    pub fn category_mut(
        &mut self,
        profile_key: &str,
        category_id: &str,
    ) -> Option<&mut Vec<Recommendation>> {
        self.0.get_mut(profile_key).and_then(|p| p.get_mut(category_id))
    }

    /// Replace one profile/category list, creating the profile entry if
    /// needed. Used by the defaults seeder.
    pub fn set_category(
        &mut self,
        profile_key: impl Into<String>,
        category_id: impl Into<String>,
        entries: Vec<Recommendation>,
    ) {
        self.0
            .entry(profile_key.into())
            .or_default()
            .insert(category_id.into(), entries);
    }

    pub fn profile_keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Check the bank against the catalog: every linked symptom id must
    /// exist in exactly one category, and no linked set may be empty.
    pub fn validate(&self, catalog: &SymptomCatalog) -> Result<(), CoreError> {
        for profile in self.0.values() {
            for entries in profile.values() {
                for rec in entries {
                    if rec.linked_symptoms.is_empty() {
                        return Err(CoreError::EmptyLinkedSymptoms {
                            text: rec.text.clone(),
                        });
                    }
                    for id in &rec.linked_symptoms {
                        match catalog.owner_count(id) {
                            0 => return Err(CoreError::UnknownSymptom(id.clone())),
                            1 => {}
                            _ => return Err(CoreError::DuplicateSymptom(id.clone())),
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
