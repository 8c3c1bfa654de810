//! Core type definitions for the linear SVM

use crate::core::{Result, SvmError};
use std::fmt;

/// Dense real-valued vector with a fixed dimension
///
/// The dimension is set at creation and never changes; arithmetic between
/// two vectors requires equal dimensions and fails otherwise. In-place
/// mutators return `()` rather than `&mut Self` so callers cannot rely on
/// chained aliasing.
#[derive(Clone, Debug, PartialEq)]
pub struct RealVector {
    values: Vec<f64>,
}

impl RealVector {
    /// Create a vector from its coordinates
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Create a zero vector of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self {
            values: vec![0.0; dim],
        }
    }

    /// Create a vector with every coordinate set to `value`
    pub fn filled(dim: usize, value: f64) -> Self {
        Self {
            values: vec![value; dim],
        }
    }

    /// Number of coordinates
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// Coordinates as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Dot product with another vector of the same dimension
    pub fn dot(&self, other: &RealVector) -> Result<f64> {
        self.check_dim(other)?;
        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// New vector with every coordinate multiplied by `factor`
    pub fn scale(&self, factor: f64) -> RealVector {
        RealVector {
            values: self.values.iter().map(|v| v * factor).collect(),
        }
    }

    /// Multiply every coordinate by `factor` in place
    pub fn scale_mut(&mut self, factor: f64) {
        for v in &mut self.values {
            *v *= factor;
        }
    }

    /// Add another vector of the same dimension coordinate-wise, in place
    pub fn add_assign(&mut self, other: &RealVector) -> Result<()> {
        self.check_dim(other)?;
        for (a, b) in self.values.iter_mut().zip(other.values.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Squared L2 norm
    pub fn norm_squared(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    fn check_dim(&self, other: &RealVector) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(SvmError::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for RealVector {
    /// Renders coordinates whitespace-separated, in order, with no header.
    /// The dimension is implicit in the token count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Training instance: an immutable feature vector with a binary label
#[derive(Clone, Debug)]
pub struct LabeledExample {
    features: RealVector,
    label: i32,
}

impl LabeledExample {
    /// Create a labeled example; the label must be -1 or +1
    pub fn new(features: RealVector, label: i32) -> Result<Self> {
        if label != 1 && label != -1 {
            return Err(SvmError::InvalidLabel(label));
        }
        Ok(Self { features, label })
    }

    pub fn features(&self) -> &RealVector {
        &self.features
    }

    pub fn label(&self) -> i32 {
        self.label
    }

    pub fn feature_count(&self) -> usize {
        self.features.dim()
    }
}

/// Prediction result containing label and decision value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted class label (+1 or -1)
    pub label: i32,
    /// Raw decision function value
    pub decision_value: f64,
}

impl Prediction {
    pub fn new(label: i32, decision_value: f64) -> Self {
        Self {
            label,
            decision_value,
        }
    }

    /// Confidence as absolute value of the decision value
    pub fn confidence(&self) -> f64 {
        self.decision_value.abs()
    }
}

/// Hyperparameters for the sub-gradient trainer
#[derive(Debug, Clone, Copy)]
pub struct TrainConfig {
    /// Regularization strength; also defines the feasible-ball radius
    /// 1/sqrt(lambda) used by the projection step
    pub lambda: f64,
    /// Requested iteration count T; the loop performs T - 1 update steps
    pub iterations: usize,
}

impl TrainConfig {
    pub fn new(lambda: f64, iterations: usize) -> Self {
        Self { lambda, iterations }
    }

    /// Reject lambda <= 0 (or non-finite) and T < 1 before training starts
    pub fn validate(&self) -> Result<()> {
        if !(self.lambda > 0.0) || !self.lambda.is_finite() {
            return Err(SvmError::InvalidHyperparameter(format!(
                "lambda must be positive and finite, got {}",
                self.lambda
            )));
        }
        if self.iterations < 1 {
            return Err(SvmError::InvalidHyperparameter(
                "iteration count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            lambda: 0.01,
            iterations: 100,
        }
    }
}
