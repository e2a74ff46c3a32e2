//! Explicit edit operations on the recommendation bank. The UI layer must
//! go through these — it never mutates the bank directly.

use skattning_core::models::catalog::SymptomCatalog;
use skattning_core::models::profile::Profile;
use skattning_core::models::recommendation::{Recommendation, RecommendationBank};

use crate::error::RecommendError;

fn entry_mut<'a>(
    bank: &'a mut RecommendationBank,
    profile: &Profile,
    category_id: &str,
    index: usize,
) -> Result<&'a mut Recommendation, RecommendError> {
    let key = profile.key();
    if bank.for_profile(&key).is_none() {
        return Err(RecommendError::UnknownProfile(key));
    }
    let entries = bank
        .category_mut(&key, category_id)
        .ok_or_else(|| RecommendError::UnknownCategory {
            profile: key.clone(),
            category: category_id.to_string(),
        })?;
    entries
        .get_mut(index)
        .ok_or(RecommendError::IndexOutOfRange {
            profile: key,
            category: category_id.to_string(),
            index,
        })
}

/// Rewrite one recommendation's free text.
pub fn update_text(
    bank: &mut RecommendationBank,
    profile: &Profile,
    category_id: &str,
    index: usize,
    text: impl Into<String>,
) -> Result<(), RecommendError> {
    let entry = entry_mut(bank, profile, category_id, index)?;
    entry.text = text.into();
    tracing::debug!(profile = %profile.key(), category = category_id, index, "recommendation text updated");
    Ok(())
}

/// Re-link one recommendation to a single symptom. The linked set keeps
/// set semantics in the model; this operation assigns a one-element set,
/// matching the editing surface.
pub fn relink_symptom(
    bank: &mut RecommendationBank,
    catalog: &SymptomCatalog,
    profile: &Profile,
    category_id: &str,
    index: usize,
    symptom_id: &str,
) -> Result<(), RecommendError> {
    if !catalog.contains_symptom(symptom_id) {
        return Err(RecommendError::UnknownSymptom(symptom_id.to_string()));
    }
    let entry = entry_mut(bank, profile, category_id, index)?;
    entry.linked_symptoms = vec![symptom_id.to_string()];
    tracing::debug!(profile = %profile.key(), category = category_id, index, symptom = symptom_id, "recommendation re-linked");
    Ok(())
}
