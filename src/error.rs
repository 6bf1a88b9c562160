//! Error types for acquisition and lexicon construction.
//!
//! The normalizer and the scorer are total functions and define no error
//! cases; everything that can fail lives at the source boundary or in
//! lexicon validation.

use thiserror::Error;

use crate::models::Category;

/// A single source attempt failed. Swallowed and logged at the cascade
/// boundary; never surfaced per-source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network failure, timeout, or a non-2xx response.
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// The payload arrived but could not be turned into usable entries:
    /// unparseable document, or a document with zero usable entries.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Every source in the cascade failed. Carries the last per-source error.
///
/// The caller substitutes the built-in fallback set on this error, so it
/// never crosses further than one layer up.
#[derive(Debug, Error)]
#[error("all {attempted} sources failed for category {category}: {last}")]
pub struct AcquisitionError {
    /// The category that was being acquired.
    pub category: Category,
    /// How many sources were attempted before giving up.
    pub attempted: usize,
    /// The error from the final attempt.
    pub last: SourceError,
}

/// Lexicon construction rejected a term table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    /// A term appears twice across the two tables, which would make its
    /// weight (or its direction) ambiguous.
    #[error("term {0:?} appears more than once across the lexicons")]
    Overlap(String),

    /// Terms are matched against lowercased tokens, so entries must
    /// already be lowercase.
    #[error("term {0:?} must be a lowercase word")]
    NotLowercase(String),

    /// A zero weight would make the entry dead.
    #[error("term {0:?} has zero weight")]
    ZeroWeight(String),
}
