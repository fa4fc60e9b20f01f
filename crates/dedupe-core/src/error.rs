//! Error types for normalization and deduplication.

use thiserror::Error;

/// A method descriptor that cannot be turned into a normalizer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("method descriptor has no '{attribute}' key")]
    MissingAttribute { attribute: &'static str },

    #[error("normalization method '{method}' was not recognised")]
    UnrecognizedMethod { method: String },
}

/// A specified column absent from a row.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("column '{column}' does not exist in the row")]
pub struct MissingColumn {
    pub column: String,
}

/// Errors that abort a deduplication run.
#[derive(Debug, Error)]
pub enum DedupeError {
    /// The descriptor for `column` is invalid.
    #[error("invalid specification for column '{column}'")]
    Resolve {
        column: String,
        #[source]
        source: ResolveError,
    },

    /// Row `row_number` (1-based, header excluded) lacks a specified column.
    #[error("column '{column}' does not exist in data row {row_number}")]
    MissingColumn { column: String, row_number: usize },
}
