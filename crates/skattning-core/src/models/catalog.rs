use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single selectable symptom. The id is a stable foreign key referenced
/// by recommendation entries; the label is what the clinician sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub label: String,
}

/// An ordered group of symptoms under one clinical heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomCategory {
    pub id: String,
    pub label: String,
    pub symptoms: Vec<Symptom>,
}

/// The full ordered symptom catalog. Order is meaningful: recommendation
/// filtering returns entries in catalog-category order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct SymptomCatalog(pub Vec<SymptomCategory>);

impl SymptomCatalog {
    pub fn categories(&self) -> &[SymptomCategory] {
        &self.0
    }

    pub fn category(&self, category_id: &str) -> Option<&SymptomCategory> {
        self.0.iter().find(|c| c.id == category_id)
    }

    /// The category a symptom belongs to, if any.
    pub fn category_of(&self, symptom_id: &str) -> Option<&SymptomCategory> {
        self.0
            .iter()
            .find(|c| c.symptoms.iter().any(|s| s.id == symptom_id))
    }

    pub fn contains_symptom(&self, symptom_id: &str) -> bool {
        self.category_of(symptom_id).is_some()
    }

    /// How many categories contain the given symptom id. A well-formed
    /// catalog has exactly one owner per id.
    pub fn owner_count(&self, symptom_id: &str) -> usize {
        self.0
            .iter()
            .filter(|c| c.symptoms.iter().any(|s| s.id == symptom_id))
            .count()
    }
}
