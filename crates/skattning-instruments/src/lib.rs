//! skattning-instruments
//!
//! Instrument definitions and the scoring engine. Everything here is pure
//! data plus pure functions over a [`ResponseMap`]: dimensional sums,
//! diagnostic criteria clusters with collapse-group semantics, severity
//! bands, and the checklist category scorers. Scoring never fails — bad
//! input is a caller error, not a runtime condition.

pub mod instruments;
pub mod scoring;

use skattning_core::models::responses::ResponseMap;

use scoring::{ClusterSet, ClusterSetScores, Item, score_clusters};

/// Trait implemented by each rateable instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g. "cats2", "ysr").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "CATS-2", "YSR").
    fn name(&self) -> &str;

    /// Highest valid rating for a single item (3 for the trauma screen,
    /// 2 for the checklists).
    fn rating_max(&self) -> u8;

    /// Every rateable item, in presentation order. Sub-items appear as
    /// their own entries ("56a" … "56h"), never as a parent row.
    fn items(&self) -> &[Item];

    /// Named cluster sets scored by plain summation. Empty for instruments
    /// whose scoring goes through dedicated scale/criteria tables.
    fn cluster_sets(&self) -> &[ClusterSet] {
        &[]
    }

    /// Sum every cluster set over the given responses.
    fn score_cluster_sets(&self, responses: &ResponseMap) -> Vec<ClusterSetScores> {
        self.cluster_sets()
            .iter()
            .map(|set| ClusterSetScores {
                id: set.id.clone(),
                name: set.name.clone(),
                clusters: score_clusters(responses, set),
            })
            .collect()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::cats2::Cats2),
        Box::new(instruments::ysr::Ysr),
        Box::new(instruments::cbcl::Cbcl),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
