//! Rust implementation of a linear Support Vector Machine
//!
//! Based on the Pegasos primal estimated sub-gradient solver
//! (Shalev-Shwartz, Singer, Srebro)

pub mod api;
pub mod core;
pub mod data;
pub mod model;
pub mod persistence;
pub mod trainer;

// Re-export main types for convenience
pub use crate::api::{EvaluationMetrics, Svm, TrainedModel};
pub use crate::core::{LabeledExample, Prediction, RealVector, Result, SvmError, TrainConfig};
pub use crate::data::DenseDataset;
pub use crate::model::Classifier;
pub use crate::trainer::PegasosTrainer;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
