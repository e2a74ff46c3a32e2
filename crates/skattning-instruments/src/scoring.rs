use serde::{Deserialize, Serialize};
use ts_rs::TS;

use skattning_core::models::responses::ResponseMap;

/// A symptom counts toward a criteria cluster when rated at this level or
/// above. Ratings of 1 ("ibland") never count.
pub const SYMPTOMATIC_RATING: u8 = 2;

/// Sum `rating(id)` over the given item ids. Absent items contribute zero.
/// Order-independent and insensitive to whether an id is a plain item or a
/// lettered sub-item — callers choose which ids constitute a scale.
pub fn sum_items<S: AsRef<str>>(responses: &ResponseMap, item_ids: &[S]) -> u32 {
    item_ids
        .iter()
        .map(|id| u32::from(responses.rating(id.as_ref())))
        .sum()
}

/// A single rateable question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub text: String,
}

/// One diagnostic criterion: a named group of items plus a minimum count.
///
/// Items in a collapse group are variants of a single clinical symptom and
/// contribute at most 1 to the count, no matter how many variants qualify.
#[derive(Debug, Clone, Copy)]
pub struct CriterionCluster {
    pub id: &'static str,
    pub name: &'static str,
    /// Plain members, each counting 1 when rated at or above
    /// [`SYMPTOMATIC_RATING`].
    pub members: &'static [&'static str],
    pub collapse_groups: &'static [&'static [&'static str]],
    pub threshold: u32,
}

/// The result of evaluating one criterion cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterOutcome {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub needed: u32,
    pub met: bool,
}

/// Count qualifying symptoms in a cluster and compare against its threshold.
/// Deterministic and stateless — safe to call on every keystroke.
pub fn evaluate_cluster(responses: &ResponseMap, cluster: &CriterionCluster) -> ClusterOutcome {
    let mut count = cluster
        .members
        .iter()
        .filter(|id| responses.rating(id) >= SYMPTOMATIC_RATING)
        .count() as u32;

    for group in cluster.collapse_groups {
        if group
            .iter()
            .any(|id| responses.rating(id) >= SYMPTOMATIC_RATING)
        {
            count += 1;
        }
    }

    ClusterOutcome {
        id: cluster.id.to_string(),
        name: cluster.name.to_string(),
        count,
        needed: cluster.threshold,
        met: count >= cluster.threshold,
    }
}

/// Severity band for a dimensional total. Ordered: a higher total never
/// maps to a lower band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Band {
    Normal,
    Moderate,
    Elevated,
}

/// A dimensional scale: a fixed item set summed into a total, banded by
/// two integer cutoffs. `moderate_from <= elevated_from` so every
/// non-negative total maps to exactly one band.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    pub id: &'static str,
    pub name: &'static str,
    pub items: &'static [&'static str],
    pub moderate_from: u32,
    pub elevated_from: u32,
    /// Interpretation text per band, indexed normal/moderate/elevated.
    pub interpretations: [&'static str; 3],
}

impl Scale {
    pub fn total(&self, responses: &ResponseMap) -> u32 {
        sum_items(responses, self.items)
    }

    pub fn band(&self, total: u32) -> Band {
        if total >= self.elevated_from {
            Band::Elevated
        } else if total >= self.moderate_from {
            Band::Moderate
        } else {
            Band::Normal
        }
    }

    pub fn interpretation(&self, band: Band) -> &'static str {
        match band {
            Band::Normal => self.interpretations[0],
            Band::Moderate => self.interpretations[1],
            Band::Elevated => self.interpretations[2],
        }
    }
}

/// A named cluster scored by plain summation (no threshold logic).
/// `highlight` requests a different visual treatment only — the scoring
/// rule is identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistCluster {
    pub id: String,
    pub name: String,
    pub members: Vec<String>,
    pub highlight: bool,
}

/// A fixed set of checklist clusters (e.g. the DSM-orientation categories,
/// or the syndrome scales) within one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterSet {
    pub id: String,
    pub name: String,
    pub clusters: Vec<ChecklistCluster>,
}

/// The summed total for one checklist cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterScore {
    pub id: String,
    pub name: String,
    pub total: u32,
    pub highlight: bool,
}

/// All cluster totals for one cluster set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClusterSetScores {
    pub id: String,
    pub name: String,
    pub clusters: Vec<ClusterScore>,
}

/// Sum every cluster in a set, preserving definition order.
pub fn score_clusters(responses: &ResponseMap, set: &ClusterSet) -> Vec<ClusterScore> {
    set.clusters
        .iter()
        .map(|c| ClusterScore {
            id: c.id.clone(),
            name: c.name.clone(),
            total: sum_items(responses, &c.members),
            highlight: c.highlight,
        })
        .collect()
}
