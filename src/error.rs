//! Error types for ktally.
//!
//! This module provides exhaustive, strongly-typed errors for all operations
//! in the library, enabling precise error handling and informative messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in ktally operations.
#[derive(Debug, Error)]
pub enum KtallyError {
    /// Input file could not be opened.
    #[error("failed to open input file '{path}': {source}")]
    FileOpen {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to read a sequence record from the input.
    #[error("failed to read sequence record: {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
    },

    /// Worker count is outside the valid range.
    #[error(transparent)]
    InvalidWorkerCount(#[from] InvalidWorkerCountError),

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl From<std::io::Error> for KtallyError {
    fn from(source: std::io::Error) -> Self {
        KtallyError::Write { source }
    }
}

impl From<serde_json::Error> for KtallyError {
    fn from(source: serde_json::Error) -> Self {
        KtallyError::Json { source }
    }
}

/// Error for an invalid worker count.
///
/// Raised before any counting work starts; a run with zero workers can never
/// make progress.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid worker count {requested}: must be at least 1")]
pub struct InvalidWorkerCountError {
    /// The invalid worker count that was provided.
    pub requested: usize,
}
