//! Sub-gradient descent training for the linear SVM
//!
//! Implements the Pegasos-style primal solver: full-batch hinge-loss
//! sub-gradients with a 1/(t*lambda) learning-rate schedule and a
//! projection of the weight vector onto the ball of radius
//! 1/sqrt(lambda) after every update.

use crate::core::{LabeledExample, RealVector, Result, SvmError, TrainConfig};
use log::{debug, info};

/// Trainer producing a weight vector from labeled examples
///
/// Fully deterministic: no shuffling, no randomness. The same examples in
/// the same order always produce the same weights.
pub struct PegasosTrainer {
    config: TrainConfig,
}

impl PegasosTrainer {
    /// Create a trainer with the given hyperparameters
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Create a trainer with default hyperparameters
    pub fn with_defaults() -> Self {
        Self::new(TrainConfig::default())
    }

    /// Get the trainer configuration
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Train a weight vector on the given examples
    ///
    /// Every coordinate of the initial vector is 1/sqrt(lambda)/sqrt(N),
    /// which places its norm near the feasible radius 1/sqrt(lambda).
    /// A requested iteration count T performs exactly T - 1 update steps;
    /// T = 1 returns the initialization unchanged. Callers observe this
    /// contract, so it is part of the API.
    pub fn train(&self, training_set: &[LabeledExample]) -> Result<RealVector> {
        self.config.validate()?;

        if training_set.is_empty() {
            return Err(SvmError::EmptyTrainingSet);
        }

        let dimension = training_set[0].feature_count();
        for example in training_set {
            if example.feature_count() != dimension {
                return Err(SvmError::DimensionMismatch {
                    expected: dimension,
                    actual: example.feature_count(),
                });
            }
        }

        let lambda = self.config.lambda;
        let n = training_set.len();

        info!(
            "Training on {} examples with {} dimensions (lambda={}, T={})",
            n, dimension, lambda, self.config.iterations
        );

        let initial = 1.0 / lambda.sqrt() / (n as f64).sqrt();
        let mut weights = RealVector::filled(dimension, initial);

        // t starts at 1 so eta is always finite; the loop stops before
        // t = T, preserving the T - 1 update-step contract.
        for t in 1..self.config.iterations {
            let eta = 1.0 / (t as f64) / lambda;
            let sum_factor = eta / n as f64;

            // Regularization sub-gradient, then the hinge contribution of
            // every margin-violating example. Examples with margin >= 1
            // contribute nothing.
            let mut gradient = weights.scale(lambda);
            for example in training_set {
                let x = example.features();
                let y = example.label() as f64;

                if x.dot(&weights)? * y < 1.0 {
                    gradient.add_assign(&x.scale(-y * sum_factor))?;
                }
            }

            weights.add_assign(&gradient.scale(-eta))?;

            // Projection onto the ball of radius 1/sqrt(lambda). A no-op
            // when the weights are already inside the ball; a zero-norm
            // vector yields an infinite cap and the min keeps it a no-op
            // (the zero vector is trivially inside the ball). This happens
            // legitimately at t = 1, where eta*lambda = 1 wipes the
            // regularization term whenever no margin is violated.
            let norm = weights.norm();
            if norm.is_nan() {
                return Err(SvmError::DegenerateState(format!(
                    "weight vector norm is NaN at iteration {t}"
                )));
            }
            let cap = 1.0 / lambda.sqrt() / norm;
            weights.scale_mut(cap.min(1.0));
        }

        debug!("Training finished, final weight norm {}", weights.norm());

        Ok(weights)
    }
}
