//! skattning-export
//!
//! Plain-text rendering of assessment output for clipboard export. The UI
//! layer owns the clipboard itself; this crate only builds the text.

pub mod render;
