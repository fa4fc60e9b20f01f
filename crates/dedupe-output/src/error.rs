use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot derive an output name from {path}")]
    InvalidInputName { path: PathBuf },

    #[error("failed to create output file in {dir}")]
    FileCreate {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {path}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to save output file {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
