//! Error types for input loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading data or specification files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV record or non UTF-8 content.
    #[error("failed to parse CSV {path}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Specification Errors ===
    /// Specification file is not valid JSON.
    #[error("failed to parse specification {path}")]
    SpecParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Specification JSON does not have the expected shape.
    #[error("invalid specification {path}: {reason}")]
    InvalidSpecification { path: PathBuf, reason: String },
}

impl IngestError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/file.csv");
    }

    #[test]
    fn test_open_maps_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            IngestError::open("a.csv", io),
            IngestError::FileNotFound { .. }
        ));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            IngestError::open("a.csv", io),
            IngestError::FileRead { .. }
        ));
    }
}
