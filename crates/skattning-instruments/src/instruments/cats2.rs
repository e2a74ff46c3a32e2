//! CATS-2: Child and Adolescent Trauma Screen, second revision (7–17 år).
//!
//! Three blocks: 15 yes/no traumatic-event questions, 25 symptom items
//! rated 0–3 over the last four weeks, and 5 yes/no functional-impairment
//! questions. Dimensional totals and categorical criteria are computed per
//! nosology from the tables below; the CPTSD verdict is additionally gated
//! on the ICD-11 PTSD determination.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use skattning_core::models::responses::{ResponseMap, YesNoMap};

use crate::Instrument;
use crate::scoring::{
    Band, ClusterOutcome, CriterionCluster, Item, Scale, evaluate_cluster,
};

/// Symptom items in presentation order. Questions 9, 10 and 15 exist only
/// as lettered sub-items.
pub const SYMPTOM_QUESTIONS: &[(&str, &str)] = &[
    ("1", "Upprörande tankar eller minnen av det som hände dyker upp i mitt huvud."),
    ("2", "Otäcka drömmar som påminner mig om det som hände."),
    ("3", "Får bilder i huvudet av det som hände, och det känns som om det händer igen just nu."),
    ("4", "Känner mig väldigt upprörd vid påminnelser om det som hände."),
    ("5", "Starka reaktioner i kroppen när jag påminns om det som hände (svettigt, hjärtat slår snabbt, orolig mage)."),
    ("6", "Försöker att inte tänka på eller ha känslor om det som hände."),
    ("7", "Försöker att undvika allt som påminner mig om det som hände (människor, platser, saker, situationer, samtal)."),
    ("8", "Kan inte minnas delar av det som hände."),
    ("9a", "Jag kommer inte få ett bra liv."),
    ("9b", "Jag kan inte lita på andra."),
    ("9c", "Världen är farlig."),
    ("9d", "Jag duger inte."),
    ("10a", "Lägger skulden på mig själv för det som hände."),
    ("10b", "Lägger skulden på andra för det som hände även om det inte var deras fel."),
    ("11", "Har upprörda känslor (rädsla, ilska, skuld, skam) en stor del av tiden."),
    ("12", "Vill inte göra saker som jag gjorde tidigare."),
    ("13", "Känner mig inte nära andra."),
    ("14", "Kan inte ha positiva känslor, t ex glädje eller kärlek."),
    ("15a", "Jag har väldigt svårt att lugna ner mig när jag är upprörd."),
    ("15b", "Känner mig väldigt stressad även om det inte går så ut över andra."),
    ("16", "Gör farliga saker."),
    ("17", "Är överdriven försiktig (t ex ser mig omkring för att se vem som är bakom mig)."),
    ("18", "Är lättskrämd."),
    ("19", "Problem att koncentrera mig."),
    ("20", "Svårt att somna eller att sova hela natten."),
];

/// Traumatic-event screening questions, answered JA/NEJ.
pub const TRAUMA_EVENTS: &[(&str, &str)] = &[
    ("t1", "Allvarlig naturkatastrof som översvämning, tromb, orkan, jordbävning eller brand."),
    ("t2", "Allvarlig olycka eller skada såsom en bil- eller cykelolycka, hundbett eller idrottsskada."),
    ("t3", "Hotad, slagen eller allvarligt skadad av någon i min familj."),
    ("t4", "Hotad, slagen eller allvarligt skadad i skolan eller samhället."),
    ("t5", "Attackerad, knivhuggen, beskjuten eller rånad genom hot."),
    ("t6", "Sett någon i min familj bli hotad, slagen eller allvarligt skadad."),
    ("t7", "Sett någon i skolan eller samhället bli hotad, slagen eller allvarligt skadad."),
    ("t8", "Någon har utfört sexuella handlingar mot mig eller fått mig att utföra sexuella handlingar när jag inte kunde säga nej, eller var pressad eller tvingad."),
    ("t9", "Någon har online eller på sociala medier frågat eller pressat mig att göra sexuella handlingar, som att ta eller skicka bilder."),
    ("t10", "Någon har mobbat mig i verkliga livet, sagt mycket elaka saker som skrämmer mig."),
    ("t11", "Någon har mobbat mig online, sagt mycket elaka saker som skrämmer mig."),
    ("t12", "Någon som har stått mig nära har dött plötsligt eller våldsamt."),
    ("t13", "Stressande eller skrämmande medicinsk undersökning eller ingrepp."),
    ("t14", "Varit med om krig."),
    ("t15", "Annan stressande eller skrämmande händelse?"),
];

/// Functional-impairment questions (id, roman numeral, text), answered
/// JA/NEJ about the problems marked above.
pub const FUNCTIONAL_QUESTIONS: &[(&str, &str, &str)] = &[
    ("f1", "I", "Komma överens med andra"),
    ("f2", "II", "Fritidsintressen/ha kul"),
    ("f3", "III", "Skola eller arbete"),
    ("f4", "IV", "Familjerelationer"),
    ("f5", "V", "Glädje"),
];

/// Every symptom item id, sub-items included. The DSM-5 dimensional total
/// sums all of these.
const ALL_SYMPTOM_ITEMS: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9a", "9b", "9c", "9d", "10a", "10b", "11", "12",
    "13", "14", "15a", "15b", "16", "17", "18", "19", "20",
];

const DSM5_SCALE: Scale = Scale {
    id: "dsm5_ptsd",
    name: "DSM-5 PTSD",
    items: ALL_SYMPTOM_ITEMS,
    moderate_from: 15,
    elevated_from: 21,
    interpretations: [
        "Inte kliniskt förhöjd.",
        "Måttligt traumarelaterad stress.",
        "Förhöjd traumarelaterad stress. Screening över klinisk gräns.*",
    ],
};

const ICD11_SCALE: Scale = Scale {
    id: "icd11_ptsd",
    name: "ICD-11 PTSD",
    items: &["2", "3", "6", "7", "17", "18"],
    moderate_from: 5,
    elevated_from: 7,
    interpretations: [
        "Inte kliniskt förhöjd.",
        "Måttligt traumarelaterad stress.*",
        "Förhöjd traumarelaterad stress. Screening över klinisk gräns.*",
    ],
};

const CPTSD_SCALE: Scale = Scale {
    id: "icd11_cptsd",
    name: "ICD-11 CPTSD",
    items: &["2", "3", "6", "7", "9b", "9d", "10a", "13", "14", "15a", "17", "18"],
    moderate_from: 10,
    elevated_from: 13,
    interpretations: [
        "Inte kliniskt förhöjd.*",
        "Måttligt traumarelaterad stress.*",
        "Förhöjd traumarelaterad stress. Screening över klinisk gräns.*",
    ],
};

const DSM5_CLUSTERS: &[CriterionCluster] = &[
    CriterionCluster {
        id: "reexperiencing",
        name: "Återupplevande (Fråga 1-5)",
        members: &["1", "2", "3", "4", "5"],
        collapse_groups: &[],
        threshold: 1,
    },
    CriterionCluster {
        id: "avoidance",
        name: "Undvikande (Fråga 6-7)",
        members: &["6", "7"],
        collapse_groups: &[],
        threshold: 1,
    },
    CriterionCluster {
        id: "negative_thoughts",
        name: "Negativa känslor och tankar (Fråga 8-14)",
        members: &["8", "11", "12", "13", "14"],
        collapse_groups: &[&["9a", "9b", "9c", "9d"], &["10a", "10b"]],
        threshold: 2,
    },
    CriterionCluster {
        id: "arousal",
        name: "Markant förändrade stimulusreaktioner (Fråga 15-20)",
        members: &["16", "17", "18", "19", "20"],
        collapse_groups: &[&["15a", "15b"]],
        threshold: 2,
    },
];

const ICD11_CLUSTERS: &[CriterionCluster] = &[
    CriterionCluster {
        id: "reexperiencing",
        name: "Återupplevande (Fråga 2, 3)",
        members: &["2", "3"],
        collapse_groups: &[],
        threshold: 1,
    },
    CriterionCluster {
        id: "avoidance",
        name: "Undvikande (Fråga 6, 7)",
        members: &["6", "7"],
        collapse_groups: &[],
        threshold: 1,
    },
    CriterionCluster {
        id: "hyperarousal",
        name: "Överspändhet (Fråga 17, 18)",
        members: &["17", "18"],
        collapse_groups: &[],
        threshold: 1,
    },
];

const CPTSD_CLUSTERS: &[CriterionCluster] = &[
    CriterionCluster {
        id: "emotion_regulation",
        name: "Ihållande och allvarliga problem med känsloreglering (Fråga 14, 15a)",
        members: &["14", "15a"],
        collapse_groups: &[],
        threshold: 1,
    },
    CriterionCluster {
        id: "negative_self",
        name: "Ihållande och allvarligt negativ självbild (Fråga 9d, 10a)",
        members: &["9d", "10a"],
        collapse_groups: &[],
        threshold: 1,
    },
    CriterionCluster {
        id: "interpersonal",
        name: "Ihållande och allvarliga interpersonella svårigheter (Fråga 9b, 13)",
        members: &["9b", "13"],
        collapse_groups: &[],
        threshold: 1,
    },
];

/// A diagnostic classification system with its own cluster table, scale and
/// band cutoffs. Adding a nosology means adding a data table, not code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Nosology {
    Dsm5Ptsd,
    Icd11Ptsd,
    Icd11Cptsd,
}

impl Nosology {
    pub const ALL: [Nosology; 3] = [Nosology::Dsm5Ptsd, Nosology::Icd11Ptsd, Nosology::Icd11Cptsd];

    pub fn name(self) -> &'static str {
        self.scale().name
    }

    pub fn scale(self) -> &'static Scale {
        match self {
            Nosology::Dsm5Ptsd => &DSM5_SCALE,
            Nosology::Icd11Ptsd => &ICD11_SCALE,
            Nosology::Icd11Cptsd => &CPTSD_SCALE,
        }
    }

    pub fn clusters(self) -> &'static [CriterionCluster] {
        match self {
            Nosology::Dsm5Ptsd => DSM5_CLUSTERS,
            Nosology::Icd11Ptsd => ICD11_CLUSTERS,
            Nosology::Icd11Cptsd => CPTSD_CLUSTERS,
        }
    }

    /// CPTSD can only be met when the plain ICD-11 PTSD determination is.
    pub fn prerequisite(self) -> Option<Nosology> {
        match self {
            Nosology::Icd11Cptsd => Some(Nosology::Icd11Ptsd),
            _ => None,
        }
    }
}

/// The categorical determination for one nosology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriteriaOutcome {
    pub nosology: Nosology,
    pub name: String,
    pub clusters: Vec<ClusterOutcome>,
    /// AND over this nosology's own clusters, before any gating.
    pub symptom_clusters_met: bool,
    /// Final verdict, prerequisite gate applied.
    pub meets_criteria: bool,
}

/// Evaluate every cluster of a nosology and apply the prerequisite gate.
/// Clusters are always computed, even when the gate already fails — the
/// per-cluster detail is shown regardless of the verdict.
pub fn evaluate(nosology: Nosology, responses: &ResponseMap) -> CriteriaOutcome {
    let clusters: Vec<ClusterOutcome> = nosology
        .clusters()
        .iter()
        .map(|c| evaluate_cluster(responses, c))
        .collect();
    let symptom_clusters_met = clusters.iter().all(|c| c.met);
    let meets_criteria = match nosology.prerequisite() {
        Some(pre) => symptom_clusters_met && evaluate(pre, responses).meets_criteria,
        None => symptom_clusters_met,
    };

    CriteriaOutcome {
        nosology,
        name: nosology.name().to_string(),
        clusters,
        symptom_clusters_met,
        meets_criteria,
    }
}

/// The texts of every traumatic-event question answered JA, in
/// questionnaire order.
pub fn events_marked_yes(events: &YesNoMap) -> Vec<&'static str> {
    TRAUMA_EVENTS
        .iter()
        .filter(|(id, _)| events.is_yes(id))
        .map(|(_, text)| *text)
        .collect()
}

/// How many of the five functional-impairment questions were answered JA.
pub fn functional_impairment_count(events: &YesNoMap) -> u32 {
    FUNCTIONAL_QUESTIONS
        .iter()
        .filter(|(id, _, _)| events.is_yes(id))
        .count() as u32
}

/// Dimensional total and band for one scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleScore {
    pub id: String,
    pub name: String,
    pub total: u32,
    pub band: Band,
    pub interpretation: String,
}

/// Everything the results panel and the clipboard export need, derived in
/// one pass from the two response maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub events_yes: Vec<String>,
    pub functional_impairment_count: u32,
    pub scales: Vec<ScaleScore>,
    pub criteria: Vec<CriteriaOutcome>,
}

/// Score the full trauma screen: dimensional totals with bands, criteria
/// determinations per nosology, event list and impairment tally.
pub fn screen(symptoms: &ResponseMap, events: &YesNoMap) -> ScreeningResult {
    let scales = Nosology::ALL
        .into_iter()
        .map(|n| {
            let scale = n.scale();
            let total = scale.total(symptoms);
            let band = scale.band(total);
            ScaleScore {
                id: scale.id.to_string(),
                name: scale.name.to_string(),
                total,
                band,
                interpretation: scale.interpretation(band).to_string(),
            }
        })
        .collect();
    let criteria = Nosology::ALL
        .into_iter()
        .map(|n| evaluate(n, symptoms))
        .collect();

    ScreeningResult {
        events_yes: events_marked_yes(events)
            .into_iter()
            .map(str::to_string)
            .collect(),
        functional_impairment_count: functional_impairment_count(events),
        scales,
        criteria,
    }
}

pub struct Cats2;

impl Instrument for Cats2 {
    fn id(&self) -> &str {
        "cats2"
    }

    fn name(&self) -> &str {
        "CATS-2"
    }

    fn rating_max(&self) -> u8 {
        3
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            SYMPTOM_QUESTIONS
                .iter()
                .map(|(id, text)| Item {
                    id: id.to_string(),
                    label: id.to_string(),
                    text: text.to_string(),
                })
                .collect()
        });
        &ITEMS
    }
}
