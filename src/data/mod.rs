//! Dense text dataset loading
//!
//! Supports loading training data in a dense whitespace-separated format:
//! label feature1 feature2 ... featureD
//!
//! Example:
//! +1 0.5 1.2 -0.8
//! -1 0.3 -2.1 0.4
//!
//! The label must be -1 or +1 and every row must carry the same number of
//! features. This loader is plumbing around the trainer, not part of the
//! learning algorithm itself.

use crate::core::{LabeledExample, RealVector, Result, SvmError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Dataset of dense labeled examples sharing one feature dimension
#[derive(Debug, Clone)]
pub struct DenseDataset {
    examples: Vec<LabeledExample>,
    dimensions: usize,
}

impl DenseDataset {
    /// Load a dataset from a dense text file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SvmError::IoError)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Load a dataset from a reader (for testing and flexibility)
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut examples: Vec<LabeledExample> = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(SvmError::IoError)?;
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let expected_dim = examples.first().map(|e| e.feature_count());
            let example = Self::parse_line(line, expected_dim).map_err(|e| {
                SvmError::ParseError(format!("Error parsing line {}: {}", line_num + 1, e))
            })?;
            examples.push(example);
        }

        if examples.is_empty() {
            return Err(SvmError::EmptyTrainingSet);
        }

        let dimensions = examples[0].feature_count();
        Ok(DenseDataset {
            examples,
            dimensions,
        })
    }

    /// Parse one "label f1 f2 ... fd" line
    ///
    /// When `expected_dim` is given, a row with a different feature count
    /// is a `DimensionMismatch`; the caller adds the line number.
    fn parse_line(line: &str, expected_dim: Option<usize>) -> Result<LabeledExample> {
        let mut tokens = line.split_whitespace();

        let label_token = tokens
            .next()
            .ok_or_else(|| SvmError::ParseError("Empty line".to_string()))?;
        let label: i32 = label_token
            .parse()
            .map_err(|_| SvmError::ParseError(format!("Invalid label: {label_token}")))?;

        let mut values = Vec::new();
        for token in tokens {
            let value: f64 = token
                .parse()
                .map_err(|_| SvmError::ParseError(format!("Invalid feature value: {token}")))?;
            values.push(value);
        }

        if values.is_empty() {
            return Err(SvmError::ParseError(format!(
                "Line has no feature values: {line}"
            )));
        }

        if let Some(expected) = expected_dim {
            if values.len() != expected {
                return Err(SvmError::DimensionMismatch {
                    expected,
                    actual: values.len(),
                });
            }
        }

        LabeledExample::new(RealVector::new(values), label)
    }

    /// Number of examples
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether the dataset holds no examples
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Feature dimension shared by every example
    pub fn dim(&self) -> usize {
        self.dimensions
    }

    /// Examples as a slice, in file order
    pub fn examples(&self) -> &[LabeledExample] {
        &self.examples
    }

    /// All labels, in file order
    pub fn labels(&self) -> Vec<i32> {
        self.examples.iter().map(|e| e.label()).collect()
    }
}
