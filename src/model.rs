//! The linear SVM model
//!
//! A `Classifier` is nothing but an owned weight vector; the four factory
//! functions cover the construction paths (trained from data, parsed from
//! a flat weight listing, averaged from other classifiers, or wrapping a
//! supplied vector), and classification is a dot product plus a sign.

use crate::core::{LabeledExample, Prediction, RealVector, Result, SvmError, TrainConfig};
use crate::persistence;
use crate::trainer::PegasosTrainer;
use std::fmt;

/// Linear binary classifier holding a trained weight vector
///
/// Immutable after construction; classification never mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct Classifier {
    weights: RealVector,
}

impl Classifier {
    /// Train a classifier on labeled examples with the given hyperparameters
    pub fn train(training_set: &[LabeledExample], config: TrainConfig) -> Result<Self> {
        let weights = PegasosTrainer::new(config).train(training_set)?;
        Ok(Self { weights })
    }

    /// Parse a classifier from a whitespace-separated weight listing
    ///
    /// The dimension is the token count; there is no header or marker.
    pub fn from_weights_text(text: &str) -> Result<Self> {
        let weights = persistence::parse_weights(text)?;
        Ok(Self { weights })
    }

    /// Build a classifier as the coordinate-wise mean of existing classifiers
    ///
    /// All inputs must share one weight dimension.
    pub fn from_average(models: &[Classifier]) -> Result<Self> {
        let first = models.first().ok_or(SvmError::EmptyModelList)?;

        let mut weights = RealVector::zeros(first.dimension());
        for model in models {
            weights.add_assign(&model.weights)?;
        }
        weights.scale_mut(1.0 / models.len() as f64);

        Ok(Self { weights })
    }

    /// Wrap a caller-supplied weight vector as-is
    pub fn from_vector(weights: RealVector) -> Self {
        Self { weights }
    }

    /// Raw decision function value `features . weights`
    pub fn decision_value(&self, features: &RealVector) -> Result<f64> {
        features.dot(&self.weights)
    }

    /// Classify a feature vector: +1 when the decision value is >= 0, else -1
    ///
    /// Ties at exactly zero resolve to +1.
    pub fn classify(&self, features: &RealVector) -> Result<i32> {
        let score = self.decision_value(features)?;
        Ok(if score >= 0.0 { 1 } else { -1 })
    }

    /// Classify a labeled example, returning the prediction with its decision value
    pub fn classify_example(&self, example: &LabeledExample) -> Result<Prediction> {
        let score = self.decision_value(example.features())?;
        let label = if score >= 0.0 { 1 } else { -1 };
        Ok(Prediction::new(label, score))
    }

    /// The learned weight vector
    pub fn weights(&self) -> &RealVector {
        &self.weights
    }

    /// Weight-vector dimension
    pub fn dimension(&self) -> usize {
        self.weights.dim()
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", persistence::render_weights(&self.weights))
    }
}
