use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-item ratings for one instrument. Item ids are strings because
/// instruments mix plain numbers ("7") with lettered sub-items ("9a").
///
/// An unset item is absent from the map: it sums as zero but does not count
/// as answered. The rating domain is instrument-specific (0–3 for the
/// trauma screen, 0–2 for the checklists) and is not validated here —
/// out-of-domain values still sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ResponseMap(BTreeMap<String, u8>);

impl ResponseMap {
    pub fn new() -> Self {
        ResponseMap(BTreeMap::new())
    }

    /// The rating for an item, zero if unanswered.
    pub fn rating(&self, item_id: &str) -> u8 {
        self.0.get(item_id).copied().unwrap_or(0)
    }

    /// Whether the item has been answered at all (a recorded zero counts).
    pub fn is_answered(&self, item_id: &str) -> bool {
        self.0.contains_key(item_id)
    }

    pub fn set(&mut self, item_id: impl Into<String>, rating: u8) {
        self.0.insert(item_id.into(), rating);
    }

    pub fn unset(&mut self, item_id: &str) {
        self.0.remove(item_id);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of answered items.
    pub fn answered(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(id, v)| (id.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, u8)> for ResponseMap {
    fn from_iter<T: IntoIterator<Item = (S, u8)>>(iter: T) -> Self {
        ResponseMap(iter.into_iter().map(|(id, v)| (id.into(), v)).collect())
    }
}

/// A yes/no answer to a trauma-event or functional-impairment question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    Yes,
    No,
}

/// Yes/no answers keyed by item id, one instance per question block.
/// Absent means unanswered, which is distinct from an explicit no.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct YesNoMap(BTreeMap<String, Answer>);

impl YesNoMap {
    pub fn new() -> Self {
        YesNoMap(BTreeMap::new())
    }

    pub fn answer(&self, item_id: &str) -> Option<Answer> {
        self.0.get(item_id).copied()
    }

    pub fn is_yes(&self, item_id: &str) -> bool {
        self.answer(item_id) == Some(Answer::Yes)
    }

    pub fn set(&mut self, item_id: impl Into<String>, answer: Answer) {
        self.0.insert(item_id.into(), answer);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn answered(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Answer)> for YesNoMap {
    fn from_iter<T: IntoIterator<Item = (S, Answer)>>(iter: T) -> Self {
        YesNoMap(iter.into_iter().map(|(id, a)| (id.into(), a)).collect())
    }
}
