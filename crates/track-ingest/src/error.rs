//! Error types for the track-ingest crate.

use thiserror::Error;

/// Errors that can occur during normalization.
///
/// Only structural decode failures surface here; malformed field content
/// never does (it is coerced, see crate docs).
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to decode table structure: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;
