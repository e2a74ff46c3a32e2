//! skattning-recommend
//!
//! The recommendation side of the assessment tool: the seeded symptom
//! catalog and profile-keyed recommendation bank, the symptom filter, bank
//! edit operations, and the diagnosis narrative selector.

pub mod defaults;
pub mod error;
pub mod filter;
pub mod mutate;
pub mod narrative;
