use skattning_core::models::responses::{Answer, ResponseMap, YesNoMap};
use skattning_instruments::instruments::cats2::{
    self, Nosology, evaluate, events_marked_yes, functional_impairment_count, screen,
};
use skattning_instruments::scoring::Band;

fn responses(pairs: &[(&str, u8)]) -> ResponseMap {
    pairs.iter().map(|(id, v)| (*id, *v)).collect()
}

fn answers(pairs: &[(&str, Answer)]) -> YesNoMap {
    pairs.iter().map(|(id, a)| (*id, *a)).collect()
}

#[test]
fn partial_cluster_fulfilment_fails_dsm5() {
    // Re-experiencing and avoidance are met, the two remaining clusters
    // stay at zero, so the conjunction fails.
    let r = responses(&[("1", 2), ("3", 3), ("6", 2)]);
    let outcome = evaluate(Nosology::Dsm5Ptsd, &r);

    let by_id = |id: &str| {
        outcome
            .clusters
            .iter()
            .find(|c| c.id == id)
            .unwrap_or_else(|| panic!("missing cluster {id}"))
    };
    let reexperiencing = by_id("reexperiencing");
    assert_eq!(reexperiencing.count, 2);
    assert!(reexperiencing.met);
    let avoidance = by_id("avoidance");
    assert_eq!(avoidance.count, 1);
    assert!(avoidance.met);
    let negative = by_id("negative_thoughts");
    assert_eq!(negative.count, 0);
    assert!(!negative.met);
    assert!(!by_id("arousal").met);

    assert!(!outcome.symptom_clusters_met);
    assert!(!outcome.meets_criteria);
}

#[test]
fn dsm5_met_only_when_all_four_clusters_are() {
    let r = responses(&[
        ("1", 2),  // reexperiencing
        ("6", 2),  // avoidance
        ("8", 2),  // negative_thoughts 1/2
        ("11", 2), // negative_thoughts 2/2
        ("16", 2), // arousal 1/2
        ("17", 3), // arousal 2/2
    ]);
    let outcome = evaluate(Nosology::Dsm5Ptsd, &r);
    assert!(outcome.clusters.iter().all(|c| c.met));
    assert!(outcome.meets_criteria);

    // Dropping the single avoidance item below threshold flips the verdict.
    let mut weakened = r.clone();
    weakened.set("6", 1);
    let outcome = evaluate(Nosology::Dsm5Ptsd, &weakened);
    assert!(!outcome.meets_criteria);
}

#[test]
fn collapse_groups_feed_the_negative_thoughts_cluster() {
    // Three rated worldview variants collapse to a single count.
    let r = responses(&[("9a", 3), ("9b", 2), ("9c", 2)]);
    let outcome = evaluate(Nosology::Dsm5Ptsd, &r);
    let negative = outcome
        .clusters
        .iter()
        .find(|c| c.id == "negative_thoughts")
        .unwrap();
    assert_eq!(negative.count, 1);
    assert!(!negative.met);

    // A blame item from the other collapse group adds the second count.
    let r = responses(&[("9a", 3), ("9b", 2), ("9c", 2), ("10a", 2)]);
    let outcome = evaluate(Nosology::Dsm5Ptsd, &r);
    let negative = outcome
        .clusters
        .iter()
        .find(|c| c.id == "negative_thoughts")
        .unwrap();
    assert_eq!(negative.count, 2);
    assert!(negative.met);
}

#[test]
fn cptsd_verdict_is_gated_on_icd11_ptsd() {
    // All three CPTSD-specific clusters met, no PTSD core symptoms.
    let r = responses(&[("14", 2), ("9d", 2), ("9b", 2)]);
    let outcome = evaluate(Nosology::Icd11Cptsd, &r);
    assert!(outcome.symptom_clusters_met);
    assert!(!outcome.meets_criteria);
    assert!(!evaluate(Nosology::Icd11Ptsd, &r).meets_criteria);

    // Adding one qualifying item per ICD-11 PTSD cluster opens the gate.
    let r = responses(&[
        ("14", 2),
        ("9d", 2),
        ("9b", 2),
        ("2", 2),
        ("6", 2),
        ("17", 2),
    ]);
    assert!(evaluate(Nosology::Icd11Ptsd, &r).meets_criteria);
    let outcome = evaluate(Nosology::Icd11Cptsd, &r);
    assert!(outcome.symptom_clusters_met);
    assert!(outcome.meets_criteria);
}

#[test]
fn cptsd_cluster_detail_is_reported_even_when_gated_off() {
    let r = responses(&[("15a", 3), ("10a", 2), ("13", 2)]);
    let outcome = evaluate(Nosology::Icd11Cptsd, &r);
    assert!(!outcome.meets_criteria);
    assert_eq!(outcome.clusters.len(), 3);
    assert!(outcome.clusters.iter().all(|c| c.met));
}

#[test]
fn events_marked_yes_preserves_questionnaire_order() {
    let e = answers(&[
        ("t12", Answer::Yes),
        ("t1", Answer::Yes),
        ("t3", Answer::No),
        ("t5", Answer::Yes),
    ]);
    let listed = events_marked_yes(&e);
    assert_eq!(listed.len(), 3);
    assert!(listed[0].starts_with("Allvarlig naturkatastrof"));
    assert!(listed[1].starts_with("Attackerad"));
    assert!(listed[2].starts_with("Någon som har stått mig nära"));
}

#[test]
fn functional_impairment_counts_only_yes_answers() {
    let e = answers(&[
        ("f1", Answer::Yes),
        ("f2", Answer::No),
        ("f3", Answer::Yes),
        ("t1", Answer::Yes), // event answers do not leak into the tally
    ]);
    assert_eq!(functional_impairment_count(&e), 2);
}

#[test]
fn dsm5_total_sums_every_sub_item() {
    let r = responses(&[("9a", 1), ("9b", 1), ("9c", 1), ("9d", 1)]);
    let result = screen(&r, &YesNoMap::new());
    let dsm5 = result.scales.iter().find(|s| s.id == "dsm5_ptsd").unwrap();
    assert_eq!(dsm5.total, 4);
}

#[test]
fn screening_collects_scales_criteria_and_events() {
    let r = responses(&[("2", 3), ("3", 2)]);
    let e = answers(&[("t2", Answer::Yes), ("f5", Answer::Yes)]);
    let result = screen(&r, &e);

    assert_eq!(result.events_yes.len(), 1);
    assert!(result.events_yes[0].starts_with("Allvarlig olycka"));
    assert_eq!(result.functional_impairment_count, 1);

    assert_eq!(result.scales.len(), 3);
    let icd11 = result.scales.iter().find(|s| s.id == "icd11_ptsd").unwrap();
    assert_eq!(icd11.total, 5);
    assert_eq!(icd11.band, Band::Moderate);
    assert_eq!(icd11.interpretation, "Måttligt traumarelaterad stress.*");
    let dsm5 = result.scales.iter().find(|s| s.id == "dsm5_ptsd").unwrap();
    assert_eq!(dsm5.total, 5);
    assert_eq!(dsm5.band, Band::Normal);

    assert_eq!(result.criteria.len(), 3);
    assert!(result.criteria.iter().all(|c| !c.meets_criteria));
}

#[test]
fn question_tables_are_complete() {
    assert_eq!(cats2::SYMPTOM_QUESTIONS.len(), 25);
    assert_eq!(cats2::TRAUMA_EVENTS.len(), 15);
    assert_eq!(cats2::FUNCTIONAL_QUESTIONS.len(), 5);
}
