//! Error type for the generation engine.
//!
//! Generators themselves never fail: blank or malformed inputs resolve to
//! fallback defaults. Only the formatter's untyped entry point and section
//! name parsing can reject their input.

use thiserror::Error;

/// Errors surfaced by the section formatter and section lookup.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("section {section:?} has an unrecognized data shape")]
    InvalidSectionShape { section: String },

    #[error(
        "unknown section {0:?} (expected segments, pains, dreams, pillars, ideas, calendar, or offer)"
    )]
    UnknownSection(String),

    #[error("invalid section JSON: {0}")]
    Json(#[from] serde_json::Error),
}
