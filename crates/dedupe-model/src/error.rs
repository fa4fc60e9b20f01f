use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown normalization method: {0}")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
