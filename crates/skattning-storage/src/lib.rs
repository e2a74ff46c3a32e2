//! skattning-storage
//!
//! Local JSON persistence for the catalog and recommendation bank, with an
//! explicit schema-version tag and sequential migrations. Persistence is a
//! side channel: the in-memory state is the source of truth during a
//! session, and a stale or unreadable document silently falls back to the
//! built-in defaults.

pub mod error;
pub mod state;
