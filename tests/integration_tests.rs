//! Integration tests for the linear_svm library
//!
//! These tests verify end-to-end functionality across multiple modules
//! and validate real-world usage scenarios.

use approx::assert_relative_eq;
use linear_svm::api::{quick, Svm, TrainedModel};
use linear_svm::{persistence, Classifier, DenseDataset, LabeledExample, RealVector, TrainConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn example(coords: Vec<f64>, label: i32) -> LabeledExample {
    LabeledExample::new(RealVector::new(coords), label).unwrap()
}

/// Test complete workflow: data loading -> training -> persistence -> evaluation
#[test]
fn test_complete_workflow() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");

    // Linearly separable dataset
    writeln!(temp_file, "+1 2.0 1.0").expect("Failed to write");
    writeln!(temp_file, "+1 1.8 1.1").expect("Failed to write");
    writeln!(temp_file, "+1 2.2 0.9").expect("Failed to write");
    writeln!(temp_file, "-1 -2.0 -1.0").expect("Failed to write");
    writeln!(temp_file, "-1 -1.8 -1.1").expect("Failed to write");
    writeln!(temp_file, "-1 -2.2 -0.9").expect("Failed to write");
    temp_file.flush().expect("Failed to flush");

    let model = Svm::new()
        .with_lambda(0.01)
        .with_iterations(200)
        .train_from_file(temp_file.path())
        .expect("Training should succeed");

    let accuracy = model
        .evaluate_from_file(temp_file.path())
        .expect("Evaluation should succeed");
    assert!(
        accuracy >= 0.8,
        "Accuracy should be at least 80% for linearly separable data, got: {accuracy}"
    );

    // Persist the weights as a flat listing and reload them
    let model_file = NamedTempFile::new().expect("Failed to create temp file");
    model
        .save_to_file(model_file.path())
        .expect("Save should succeed");

    let reloaded = TrainedModel::load_from_file(model_file.path()).expect("Load should succeed");
    assert_eq!(
        reloaded.classifier().dimension(),
        model.classifier().dimension()
    );

    let reloaded_accuracy = reloaded
        .evaluate_from_file(temp_file.path())
        .expect("Evaluation should succeed");
    assert_eq!(accuracy, reloaded_accuracy);

    // Detailed metrics on the training data
    let dataset = DenseDataset::from_file(temp_file.path()).expect("Failed to load dataset");
    let metrics = model.evaluate_detailed(dataset.examples()).unwrap();
    assert!(metrics.accuracy() >= 0.8);

    // Quick helpers
    let split_accuracy = quick::evaluate_split(temp_file.path(), temp_file.path()).unwrap();
    assert_eq!(split_accuracy, accuracy);
}

/// The reference end-to-end case: two opposite-class 2-D points
#[test]
fn test_reference_two_point_problem() {
    let training_set = vec![
        example(vec![1.0, 0.0], 1),
        example(vec![-1.0, 0.0], -1),
    ];

    let model = Classifier::train(&training_set, TrainConfig::new(0.01, 100)).unwrap();

    assert!(
        model.weights().as_slice()[0] > 0.0,
        "First weight coordinate should be positive"
    );
    for ex in &training_set {
        assert_eq!(model.classify(ex.features()).unwrap(), ex.label());
    }
}

/// The weight vector never leaves the feasible ball of radius 1/sqrt(lambda)
#[test]
fn test_projection_invariant_across_configs() {
    let examples = vec![
        example(vec![3.0, 0.5, -1.0], 1),
        example(vec![2.5, 1.0, -0.5], 1),
        example(vec![-3.0, -0.5, 1.0], -1),
        example(vec![-2.5, -1.5, 0.3], -1),
    ];

    for &lambda in &[0.001, 0.01, 0.1, 1.0] {
        for &iterations in &[2, 10, 50] {
            let model =
                Classifier::train(&examples, TrainConfig::new(lambda, iterations)).unwrap();
            let radius = 1.0 / lambda.sqrt();
            let norm = model.weights().norm();
            assert!(
                norm <= radius + 1e-9,
                "lambda={lambda}, T={iterations}: norm {norm} exceeds radius {radius}"
            );
        }
    }
}

/// T = 1 performs zero update steps and returns the initialization exactly
#[test]
fn test_single_iteration_contract() {
    let examples = vec![
        example(vec![5.0, -3.0], 1),
        example(vec![-1.0, 2.0], -1),
        example(vec![0.5, 0.5], 1),
    ];
    let lambda = 0.04;

    let model = Classifier::train(&examples, TrainConfig::new(lambda, 1)).unwrap();

    let expected = 1.0 / lambda.sqrt() / 3.0_f64.sqrt();
    for &w in model.weights().as_slice() {
        assert_relative_eq!(w, expected);
    }
}

/// Model averaging composes with training and persistence
#[test]
fn test_average_of_trained_models() {
    let set_a = vec![
        example(vec![1.0, 0.2], 1),
        example(vec![-1.0, -0.2], -1),
    ];
    let set_b = vec![
        example(vec![0.9, 0.1], 1),
        example(vec![-0.9, -0.1], -1),
    ];

    let config = TrainConfig::new(0.01, 100);
    let model_a = Classifier::train(&set_a, config).unwrap();
    let model_b = Classifier::train(&set_b, config).unwrap();

    let averaged = Classifier::from_average(&[model_a.clone(), model_b.clone()]).unwrap();

    // Coordinate-wise mean of the inputs
    for i in 0..averaged.dimension() {
        let expected =
            (model_a.weights().as_slice()[i] + model_b.weights().as_slice()[i]) / 2.0;
        assert_relative_eq!(averaged.weights().as_slice()[i], expected);
    }

    // The averaged model still separates the combined data
    for ex in set_a.iter().chain(set_b.iter()) {
        assert_eq!(averaged.classify(ex.features()).unwrap(), ex.label());
    }

    // Round-trip the averaged model through the text listing
    let rendered = averaged.to_string();
    let reparsed = Classifier::from_weights_text(&rendered).unwrap();
    assert_eq!(reparsed.dimension(), averaged.dimension());
    for (&a, &b) in averaged
        .weights()
        .as_slice()
        .iter()
        .zip(reparsed.weights().as_slice())
    {
        assert_relative_eq!(a, b);
    }
}

/// Persistence round-trip through an actual file
#[test]
fn test_weight_file_roundtrip() {
    let weights = RealVector::new(vec![0.25, -3.5, 1e-6, 42.0]);

    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    persistence::save_weights(&weights, temp_file.path()).unwrap();

    let loaded = persistence::load_weights(temp_file.path()).unwrap();
    assert_eq!(loaded.dim(), weights.dim());
    for (&a, &b) in weights.as_slice().iter().zip(loaded.as_slice()) {
        assert_relative_eq!(a, b);
    }
}

/// Malformed inputs surface as the right named errors
#[test]
fn test_error_reporting() {
    use linear_svm::SvmError;

    // Empty training set
    let result = Classifier::train(&[], TrainConfig::default());
    assert!(matches!(result, Err(SvmError::EmptyTrainingSet)));

    // Bad hyperparameters
    let examples = vec![example(vec![1.0], 1)];
    let result = Classifier::train(&examples, TrainConfig::new(-0.5, 10));
    assert!(matches!(result, Err(SvmError::InvalidHyperparameter(_))));

    // Bad weight listing token
    let result = Classifier::from_weights_text("1.0 2.0 three");
    assert!(matches!(result, Err(SvmError::ParseError(_))));

    // Malformed data file
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(temp_file, "+1 1.0 2.0").expect("Failed to write");
    writeln!(temp_file, "banana 1.0 2.0").expect("Failed to write");
    temp_file.flush().expect("Failed to flush");

    let result = DenseDataset::from_file(temp_file.path());
    assert!(matches!(result, Err(SvmError::ParseError(_))));
}

/// Training is a pure function of its inputs
#[test]
fn test_reproducibility() {
    let examples = vec![
        example(vec![1.2, -0.3, 0.8], 1),
        example(vec![0.9, 0.1, 1.1], 1),
        example(vec![-1.0, 0.4, -0.9], -1),
        example(vec![-1.3, -0.2, -1.2], -1),
    ];
    let config = TrainConfig::new(0.02, 75);

    let first = Classifier::train(&examples, config).unwrap();
    let second = Classifier::train(&examples, config).unwrap();

    assert_eq!(first.weights(), second.weights());
}
