use skattning_core::models::profile::{AgeGroup, Diagnosis, Sex};
use skattning_recommend::narrative::{
    AUTISM_CHILD_CAVEAT, caveat, pronouns, render_narrative, template,
};

const DIAGNOSED: [Diagnosis; 4] = [
    Diagnosis::Adhd,
    Diagnosis::Autism,
    Diagnosis::Both,
    Diagnosis::IntellectualDisability,
];

#[test]
fn no_diagnosis_renders_nothing() {
    for age in AgeGroup::ALL {
        for sex in Sex::ALL {
            let rendered = render_narrative(Diagnosis::None, age, sex, "Kim").unwrap();
            assert_eq!(rendered, None);
        }
    }
}

#[test]
fn every_diagnosed_combination_has_a_template() {
    for diagnosis in DIAGNOSED {
        for age in AgeGroup::ALL {
            assert!(template(diagnosis, age).is_some(), "{diagnosis:?} {age:?}");
        }
    }
}

#[test]
fn age_groups_get_materially_different_texts() {
    for diagnosis in DIAGNOSED {
        let child = template(diagnosis, AgeGroup::Child).unwrap();
        let teen = template(diagnosis, AgeGroup::Teen).unwrap();
        assert_ne!(child, teen, "{diagnosis:?}");
    }
}

#[test]
fn patient_name_is_substituted() {
    let rendered = render_narrative(Diagnosis::Adhd, AgeGroup::Child, Sex::Female, "Alva")
        .unwrap()
        .unwrap();
    assert!(rendered.starts_with("Alva uppfyller de diagnostiska kriterierna för ADHD."));
    assert!(!rendered.contains("{{"));
}

#[test]
fn pronoun_family_follows_sex() {
    for (sex, subject, possessive) in [
        (Sex::Male, "han har", "hans"),
        (Sex::Female, "hon har", "hennes"),
        (Sex::Nonbinary, "hen har", "hens"),
    ] {
        let rendered = render_narrative(Diagnosis::Adhd, AgeGroup::Child, sex, "Kim")
            .unwrap()
            .unwrap();
        assert!(rendered.contains(subject), "{sex:?}: subject form missing");
        assert!(rendered.contains(possessive), "{sex:?}: possessive form missing");
    }
}

#[test]
fn object_form_is_used_where_the_text_calls_for_it() {
    // The teen ADHD text addresses medication decisions "tillsammans med"
    // the patient, in object form.
    let rendered = render_narrative(Diagnosis::Adhd, AgeGroup::Teen, Sex::Male, "Kim")
        .unwrap()
        .unwrap();
    assert!(rendered.contains("tillsammans med honom"));

    let p = pronouns(Sex::Nonbinary);
    assert_eq!(p.object, "hen");
}

#[test]
fn autism_child_combinations_carry_the_age_caveat() {
    assert_eq!(
        caveat(Diagnosis::Autism, AgeGroup::Child),
        Some(AUTISM_CHILD_CAVEAT)
    );
    assert_eq!(
        caveat(Diagnosis::Both, AgeGroup::Child),
        Some(AUTISM_CHILD_CAVEAT)
    );
    assert_eq!(caveat(Diagnosis::Autism, AgeGroup::Teen), None);
    assert_eq!(caveat(Diagnosis::Adhd, AgeGroup::Child), None);
    assert_eq!(caveat(Diagnosis::None, AgeGroup::Child), None);
}
