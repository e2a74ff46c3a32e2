use skattning_core::models::profile::{AgeGroup, Profile, Sex};
use skattning_recommend::defaults::{default_bank, default_catalog};
use skattning_recommend::error::RecommendError;
use skattning_recommend::mutate::{relink_symptom, update_text};

fn child_male() -> Profile {
    Profile::new(AgeGroup::Child, Sex::Male)
}

#[test]
fn update_text_rewrites_only_the_addressed_entry() {
    let catalog = default_catalog();
    let mut bank = default_bank(&catalog);

    update_text(
        &mut bank,
        &child_male(),
        "difficulties_concentrating",
        2,
        "Dela upp uppgiften i korta steg.",
    )
    .unwrap();

    let entries = bank
        .category("child_male", "difficulties_concentrating")
        .unwrap();
    assert_eq!(entries[2].text, "Dela upp uppgiften i korta steg.");
    assert_eq!(entries[1].text, "Rekommendation för symtom 1b.");
    // Links are untouched by a text edit.
    assert_eq!(entries[2].linked_symptoms, ["concentration_3"]);
}

#[test]
fn edits_do_not_leak_into_other_profiles() {
    let catalog = default_catalog();
    let mut bank = default_bank(&catalog);

    update_text(
        &mut bank,
        &child_male(),
        "socio_communicative",
        0,
        "Ändrad text.",
    )
    .unwrap();

    let teen = bank.category("teen_male", "socio_communicative").unwrap();
    assert_eq!(teen[0].text, "Rekommendation för symtom A1.");
}

#[test]
fn relink_assigns_a_single_symptom() {
    let catalog = default_catalog();
    let mut bank = default_bank(&catalog);

    relink_symptom(
        &mut bank,
        &catalog,
        &child_male(),
        "difficulties_concentrating",
        0,
        "hyperactivity_5",
    )
    .unwrap();

    let entries = bank
        .category("child_male", "difficulties_concentrating")
        .unwrap();
    // Cross-category links are allowed; the entry stays in its list.
    assert_eq!(entries[0].linked_symptoms, ["hyperactivity_5"]);
    assert!(bank.validate(&catalog).is_ok());
}

#[test]
fn relink_rejects_unknown_symptoms() {
    let catalog = default_catalog();
    let mut bank = default_bank(&catalog);

    let err = relink_symptom(
        &mut bank,
        &catalog,
        &child_male(),
        "difficulties_concentrating",
        0,
        "no_such_symptom",
    )
    .unwrap_err();
    assert!(matches!(err, RecommendError::UnknownSymptom(id) if id == "no_such_symptom"));

    // Nothing was modified.
    let entries = bank
        .category("child_male", "difficulties_concentrating")
        .unwrap();
    assert_eq!(entries[0].linked_symptoms, ["concentration_1"]);
}

#[test]
fn unknown_profile_and_category_are_typed_errors() {
    let catalog = default_catalog();
    let mut bank = default_bank(&catalog);

    let err = update_text(&mut bank, &child_male(), "no_such_category", 0, "x").unwrap_err();
    assert!(matches!(
        err,
        RecommendError::UnknownCategory { ref category, .. } if category == "no_such_category"
    ));

    bank.0.remove("child_male");
    let err = update_text(&mut bank, &child_male(), "socio_communicative", 0, "x").unwrap_err();
    assert!(matches!(err, RecommendError::UnknownProfile(key) if key == "child_male"));
}

#[test]
fn out_of_range_index_is_a_typed_error() {
    let catalog = default_catalog();
    let mut bank = default_bank(&catalog);

    let err = update_text(&mut bank, &child_male(), "socio_communicative", 3, "x").unwrap_err();
    assert!(matches!(
        err,
        RecommendError::IndexOutOfRange { index: 3, .. }
    ));
}
