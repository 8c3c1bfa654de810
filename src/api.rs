//! High-level API for training and evaluating the linear SVM
//!
//! This module provides a user-friendly interface for common tasks such
//! as training, prediction, and model evaluation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use linear_svm::api::Svm;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Train a model on data
//! let model = Svm::new()
//!     .with_lambda(0.01)
//!     .with_iterations(100)
//!     .train_from_file("train.txt")?;
//!
//! // Evaluate it
//! println!("Accuracy: {:.2}%", model.evaluate_from_file("test.txt")? * 100.0);
//! # Ok(())
//! # }
//! ```

use crate::core::{LabeledExample, Prediction, Result, TrainConfig};
use crate::data::DenseDataset;
use crate::model::Classifier;
use crate::persistence;
use std::path::Path;

/// High-level SVM interface with builder pattern
pub struct Svm {
    config: TrainConfig,
}

impl Svm {
    /// Create a new SVM with default hyperparameters
    pub fn new() -> Self {
        Self {
            config: TrainConfig::default(),
        }
    }

    /// Set the regularization strength lambda
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.config.lambda = lambda;
        self
    }

    /// Set the iteration count T
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Train on a slice of labeled examples
    pub fn train(self, training_set: &[LabeledExample]) -> Result<TrainedModel> {
        let classifier = Classifier::train(training_set, self.config)?;
        Ok(TrainedModel { classifier })
    }

    /// Train on a loaded dataset
    pub fn train_dataset(self, dataset: &DenseDataset) -> Result<TrainedModel> {
        self.train(dataset.examples())
    }

    /// Train from a dense text data file
    pub fn train_from_file<P: AsRef<Path>>(self, path: P) -> Result<TrainedModel> {
        let dataset = DenseDataset::from_file(path)?;
        self.train_dataset(&dataset)
    }
}

impl Default for Svm {
    fn default() -> Self {
        Self::new()
    }
}

/// Trained model with a high-level prediction and evaluation interface
pub struct TrainedModel {
    classifier: Classifier,
}

impl TrainedModel {
    /// Wrap an existing classifier
    pub fn from_classifier(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Load a model from a persisted weight-listing file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let weights = persistence::load_weights(path)?;
        Ok(Self {
            classifier: Classifier::from_vector(weights),
        })
    }

    /// Save the model weights as a flat listing file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persistence::save_weights(self.classifier.weights(), path)
    }

    /// Predict a single example
    pub fn predict(&self, example: &LabeledExample) -> Result<Prediction> {
        self.classifier.classify_example(example)
    }

    /// Predict multiple examples
    pub fn predict_batch(&self, examples: &[LabeledExample]) -> Result<Vec<Prediction>> {
        examples.iter().map(|e| self.predict(e)).collect()
    }

    /// Evaluate accuracy on labeled examples
    ///
    /// An empty slice evaluates to 0.0, the same convention
    /// `EvaluationMetrics::accuracy` uses for a zero total.
    pub fn evaluate(&self, examples: &[LabeledExample]) -> Result<f64> {
        if examples.is_empty() {
            return Ok(0.0);
        }
        let predictions = self.predict_batch(examples)?;
        let correct = predictions
            .iter()
            .zip(examples.iter())
            .filter(|(pred, example)| pred.label == example.label())
            .count();
        Ok(correct as f64 / examples.len() as f64)
    }

    /// Evaluate accuracy on a dense text data file
    pub fn evaluate_from_file<P: AsRef<Path>>(&self, path: P) -> Result<f64> {
        let dataset = DenseDataset::from_file(path)?;
        self.evaluate(dataset.examples())
    }

    /// Detailed evaluation metrics on labeled examples
    pub fn evaluate_detailed(&self, examples: &[LabeledExample]) -> Result<EvaluationMetrics> {
        let predictions = self.predict_batch(examples)?;

        let mut tp = 0; // True positives
        let mut tn = 0; // True negatives
        let mut fp = 0; // False positives
        let mut fn_ = 0; // False negatives

        for (pred, example) in predictions.iter().zip(examples.iter()) {
            match (pred.label > 0, example.label() > 0) {
                (true, true) => tp += 1,
                (false, false) => tn += 1,
                (true, false) => fp += 1,
                (false, true) => fn_ += 1,
            }
        }

        Ok(EvaluationMetrics::new(tp, tn, fp, fn_))
    }

    /// The underlying classifier
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }
}

/// Detailed evaluation metrics
#[derive(Debug, Clone)]
pub struct EvaluationMetrics {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl EvaluationMetrics {
    fn new(tp: usize, tn: usize, fp: usize, fn_: usize) -> Self {
        Self {
            true_positives: tp,
            true_negatives: tn,
            false_positives: fp,
            false_negatives: fn_,
        }
    }

    /// Calculate accuracy: (TP + TN) / (TP + TN + FP + FN)
    pub fn accuracy(&self) -> f64 {
        let total =
            self.true_positives + self.true_negatives + self.false_positives + self.false_negatives;
        if total == 0 {
            0.0
        } else {
            (self.true_positives + self.true_negatives) as f64 / total as f64
        }
    }

    /// Calculate precision: TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        let denominator = self.true_positives + self.false_positives;
        if denominator == 0 {
            0.0
        } else {
            self.true_positives as f64 / denominator as f64
        }
    }

    /// Calculate recall (sensitivity): TP / (TP + FN)
    pub fn recall(&self) -> f64 {
        let denominator = self.true_positives + self.false_negatives;
        if denominator == 0 {
            0.0
        } else {
            self.true_positives as f64 / denominator as f64
        }
    }

    /// Calculate F1 score: 2 * (precision * recall) / (precision + recall)
    pub fn f1_score(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * (p * r) / (p + r)
        }
    }

    /// Calculate specificity: TN / (TN + FP)
    pub fn specificity(&self) -> f64 {
        let denominator = self.true_negatives + self.false_positives;
        if denominator == 0 {
            0.0
        } else {
            self.true_negatives as f64 / denominator as f64
        }
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;

    /// Train on a dense text file with default hyperparameters
    pub fn train_file<P: AsRef<Path>>(path: P) -> Result<TrainedModel> {
        Svm::new().train_from_file(path)
    }

    /// Train with a custom lambda
    pub fn train_file_with_lambda<P: AsRef<Path>>(path: P, lambda: f64) -> Result<TrainedModel> {
        Svm::new().with_lambda(lambda).train_from_file(path)
    }

    /// Train on one file, report accuracy on another
    pub fn evaluate_split<P1: AsRef<Path>, P2: AsRef<Path>>(
        train_path: P1,
        test_path: P2,
    ) -> Result<f64> {
        let model = train_file(train_path)?;
        model.evaluate_from_file(test_path)
    }
}
