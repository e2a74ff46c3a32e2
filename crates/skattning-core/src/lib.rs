//! skattning-core
//!
//! Pure domain types for the clinical assessment tool: patient profiles,
//! the symptom catalog, response maps and the recommendation bank.
//! No I/O — this is the shared vocabulary of the skattning workspace.

pub mod error;
pub mod models;
