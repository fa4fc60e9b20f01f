//! Command-line path checks, run before any file is read.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathIssue {
    #[error("the given datafile path ('{}') does not refer to a file", .0.display())]
    DataFileNotFound(PathBuf),

    #[error("the given specification file path ('{}') does not refer to a file", .0.display())]
    SpecFileNotFound(PathBuf),

    #[error("the given output directory path ('{}') does not refer to a directory", .0.display())]
    OutputDirNotFound(PathBuf),
}

/// Returns every violated condition, in argument order.
pub fn validate_paths(datafile: &Path, specfile: &Path, output_dir: &Path) -> Vec<PathIssue> {
    let mut issues = Vec::new();
    if !datafile.is_file() {
        issues.push(PathIssue::DataFileNotFound(datafile.to_path_buf()));
    }
    if !specfile.is_file() {
        issues.push(PathIssue::SpecFileNotFound(specfile.to_path_buf()));
    }
    if !output_dir.is_dir() {
        issues.push(PathIssue::OutputDirNotFound(output_dir.to_path_buf()));
    }
    issues
}
