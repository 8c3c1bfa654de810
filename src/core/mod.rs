//! Core types and errors

pub mod error;
pub mod types;

pub use error::{Result, SvmError};
pub use types::{LabeledExample, Prediction, RealVector, TrainConfig};
