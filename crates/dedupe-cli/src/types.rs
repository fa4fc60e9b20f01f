use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use dedupe_model::{KeyMode, NormalizationMethod};

/// Inputs of one deduplication run.
#[derive(Debug, Clone)]
pub struct DedupeRequest {
    pub datafile: PathBuf,
    pub specfile: PathBuf,
    pub output_dir: PathBuf,
    pub key_mode: KeyMode,
    pub dry_run: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupeReport {
    pub datafile: PathBuf,
    /// Written file, absent on a dry run.
    pub output: Option<PathBuf>,
    pub rows_read: usize,
    pub duplicates_removed: usize,
    pub rows_written: usize,
    pub key_mode: KeyMode,
    pub key_columns: Vec<KeyColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyColumn {
    pub column: String,
    pub method: NormalizationMethod,
}
