use skattning_core::models::catalog::SymptomCatalog;
use skattning_core::models::profile::Profile;
use skattning_core::models::recommendation::{Recommendation, RecommendationBank};

/// Select the recommendations applicable to a profile and symptom selection.
///
/// Concatenates the profile's per-category lists in catalog-category order,
/// preserving within-category insertion order. An empty selection returns
/// the full concatenation; otherwise an entry is kept when at least one of
/// its linked symptoms is selected (OR semantics). Filtering is over
/// entries, so nothing is returned twice even if several of its linked
/// symptoms match. An unknown profile key degrades to an empty list.
pub fn filter_recommendations<'a>(
    bank: &'a RecommendationBank,
    profile: &Profile,
    catalog: &SymptomCatalog,
    selected_symptoms: &[String],
) -> Vec<&'a Recommendation> {
    let key = profile.key();
    let Some(profile_recs) = bank.for_profile(&key) else {
        return Vec::new();
    };

    let mut all: Vec<&Recommendation> = Vec::new();
    for category in catalog.categories() {
        if let Some(entries) = profile_recs.get(&category.id) {
            all.extend(entries.iter());
        }
    }

    if selected_symptoms.is_empty() {
        return all;
    }
    all.into_iter()
        .filter(|rec| rec.links_any(selected_symptoms))
        .collect()
}
