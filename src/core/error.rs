//! Error types for the linear SVM implementation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvmError {
    #[error("Empty training set")]
    EmptyTrainingSet,

    #[error("Empty model list")]
    EmptyModelList,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),

    #[error("Invalid label: expected -1 or +1, got {0}")]
    InvalidLabel(i32),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Degenerate state: {0}")]
    DegenerateState(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SvmError>;
