//! Weight-vector persistence
//!
//! The persisted format is a flat whitespace-separated listing of the
//! weight coordinates, in order, with no header or dimension marker; the
//! dimension is implicit in the token count. Rendering and re-parsing a
//! vector reproduces its dimension and coordinates.

use crate::core::{RealVector, Result, SvmError};
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render a weight vector as a whitespace-separated coordinate listing
pub fn render_weights(weights: &RealVector) -> String {
    weights.to_string()
}

/// Parse a whitespace-separated coordinate listing into a weight vector
///
/// Every token must parse as a real number; the first offending token is
/// reported. Input with no tokens at all is rejected, since a
/// zero-dimension classifier cannot classify anything.
pub fn parse_weights(text: &str) -> Result<RealVector> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        let value: f64 = token
            .parse()
            .map_err(|_| SvmError::ParseError(format!("Invalid weight token: {token}")))?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(SvmError::ParseError(
            "Weight listing contains no tokens".to_string(),
        ));
    }

    Ok(RealVector::new(values))
}

/// Save a weight vector to a file as a single listing line
pub fn save_weights<P: AsRef<Path>>(weights: &RealVector, path: P) -> Result<()> {
    let file = File::create(path).map_err(SvmError::IoError)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", render_weights(weights)).map_err(SvmError::IoError)?;
    Ok(())
}

/// Load a weight vector from a weight-listing file
pub fn load_weights<P: AsRef<Path>>(path: P) -> Result<RealVector> {
    let text = fs::read_to_string(path).map_err(SvmError::IoError)?;
    parse_weights(&text)
}
