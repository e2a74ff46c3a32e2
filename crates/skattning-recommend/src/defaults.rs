//! Built-in seed data. Used on first start and whenever the persisted
//! document turns out to be stale or unreadable.

use skattning_core::models::catalog::{Symptom, SymptomCatalog, SymptomCategory};
use skattning_core::models::profile::Profile;
use skattning_core::models::recommendation::{Recommendation, RecommendationBank};

fn symptom(id: &str, label: &str) -> Symptom {
    Symptom {
        id: id.to_string(),
        label: label.to_string(),
    }
}

/// The four default symptom categories with their stable symptom ids.
pub fn default_catalog() -> SymptomCatalog {
    SymptomCatalog(vec![
        SymptomCategory {
            id: "difficulties_concentrating".to_string(),
            label: "Koncentrationssvårigheter".to_string(),
            symptoms: vec![
                symptom("concentration_1", "1a"),
                symptom("concentration_2", "1b"),
                symptom("concentration_3", "1c"),
                symptom("concentration_4", "1d"),
                symptom("concentration_5", "1e"),
                symptom("concentration_6", "1f"),
                symptom("concentration_7", "1g"),
                symptom("concentration_8", "1h"),
                symptom("concentration_9", "1i"),
            ],
        },
        SymptomCategory {
            id: "hyperactivity_impulsivity".to_string(),
            label: "Hyperaktivitet".to_string(),
            symptoms: vec![
                symptom("hyperactivity_1", "2a"),
                symptom("hyperactivity_2", "2b"),
                symptom("hyperactivity_3", "2c"),
                symptom("hyperactivity_4", "2d"),
                symptom("hyperactivity_5", "2e"),
                symptom("hyperactivity_6", "2f"),
                symptom("hyperactivity_7", "2g"),
                symptom("hyperactivity_8", "2h"),
                symptom("hyperactivity_9", "2i"),
            ],
        },
        SymptomCategory {
            id: "socio_communicative".to_string(),
            label: "Socio-kommunikativa svårigheter".to_string(),
            symptoms: vec![
                symptom("social_communication_1", "A1"),
                symptom("social_communication_2", "A2"),
                symptom("social_communication_3", "A3"),
            ],
        },
        SymptomCategory {
            id: "limited_repetitive".to_string(),
            label: "Begränsade och repetitiva beteenden".to_string(),
            symptoms: vec![
                symptom("repetitive_behaviour_1", "B1"),
                symptom("repetitive_behaviour_2", "B2"),
                symptom("repetitive_behaviour_3", "B3"),
                symptom("repetitive_behaviour_4", "B4"),
            ],
        },
    ])
}

/// Seed one editable recommendation per symptom, duplicated into every
/// profile. The text is placeholder prose meant to be rewritten in the
/// settings view; the symptom link is what matters.
pub fn default_bank(catalog: &SymptomCatalog) -> RecommendationBank {
    let mut bank = RecommendationBank::new();
    for profile in Profile::all() {
        let key = profile.key();
        for category in catalog.categories() {
            let entries = category
                .symptoms
                .iter()
                .map(|s| {
                    Recommendation::new(
                        format!("Rekommendation för symtom {}.", s.label),
                        vec![s.id.clone()],
                    )
                })
                .collect();
            bank.set_category(key.clone(), category.id.clone(), entries);
        }
    }
    bank
}
