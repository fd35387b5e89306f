//! # Experimental Comparison Table
//!
//! One row per physical quantity:
//!
//! ```text
//! quantity,predicted_value,experimental_value,experimental_error
//! ```
//!
//! An empty `experimental_value` marks a quantity that has not been measured
//! yet; such rows are carried through loading and skipped by
//! [`verify_agreement`].
//!
//! A prediction agrees with experiment when it lies within
//! [`AGREEMENT_SIGMA`] standard deviations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{io_error, VerifyError};

/// Largest |σ| still counted as agreement.
pub const AGREEMENT_SIGMA: f64 = 2.0;

/// One row of the experimental table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentalRecord {
    pub quantity: String,
    pub predicted_value: f64,
    #[serde(default)]
    pub experimental_value: Option<f64>,
    #[serde(default)]
    pub experimental_error: Option<f64>,
}

/// Outcome of comparing one prediction with its measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgreementStatus {
    Agreement,
    Tension,
}

impl AgreementStatus {
    /// Classify a deviation in units of σ.
    pub fn from_sigma(sigma: f64) -> Self {
        if sigma.abs() <= AGREEMENT_SIGMA {
            Self::Agreement
        } else {
            Self::Tension
        }
    }
}

impl std::fmt::Display for AgreementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Agreement => write!(f, "AGREEMENT"),
            Self::Tension => write!(f, "TENSION"),
        }
    }
}

/// A measured quantity with its deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementResult {
    pub quantity: String,
    pub predicted: f64,
    pub experimental: f64,
    pub sigma: f64,
    pub status: AgreementStatus,
}

/// Parse an experimental table from any reader.
///
/// # Errors
///
/// Returns `VerifyError::Csv` for malformed rows or missing columns.
pub fn read_experimental_values<R: std::io::Read>(
    reader: R,
) -> Result<Vec<ExperimentalRecord>, VerifyError> {
    let mut table = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = table
        .deserialize()
        .collect::<Result<Vec<ExperimentalRecord>, _>>()?;
    Ok(records)
}

/// Load an experimental table from disk.
///
/// # Errors
///
/// Returns `VerifyError::Io` if the file cannot be opened and
/// `VerifyError::Csv` for malformed content.
pub fn load_experimental_values(path: &Path) -> Result<Vec<ExperimentalRecord>, VerifyError> {
    let file = std::fs::File::open(path).map_err(|e| io_error(path, e))?;
    let records = read_experimental_values(file)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "loaded experimental table");
    Ok(records)
}

/// `(predicted − experimental) / error`.
///
/// # Errors
///
/// Returns `VerifyError::NonPositiveError` unless `error > 0`.
pub fn calculate_sigma(
    quantity: &str,
    predicted: f64,
    experimental: f64,
    error: f64,
) -> Result<f64, VerifyError> {
    if error.is_nan() || error <= 0.0 {
        return Err(VerifyError::NonPositiveError {
            quantity: quantity.to_string(),
            error,
        });
    }
    Ok((predicted - experimental) / error)
}

/// Compare every measured row; unmeasured rows are skipped.
///
/// # Errors
///
/// Returns `VerifyError::MissingError` or `VerifyError::NonPositiveError`
/// for a measured row without a usable uncertainty.
pub fn verify_agreement(records: &[ExperimentalRecord]) -> Result<Vec<AgreementResult>, VerifyError> {
    let mut results = Vec::new();
    for record in records {
        let Some(experimental) = record.experimental_value else {
            tracing::debug!(quantity = %record.quantity, "no measurement, skipped");
            continue;
        };
        let error = record
            .experimental_error
            .ok_or_else(|| VerifyError::MissingError {
                quantity: record.quantity.clone(),
            })?;
        let sigma = calculate_sigma(&record.quantity, record.predicted_value, experimental, error)?;
        let status = AgreementStatus::from_sigma(sigma);
        tracing::info!(quantity = %record.quantity, sigma, %status, "compared prediction");
        results.push(AgreementResult {
            quantity: record.quantity.clone(),
            predicted: record.predicted_value,
            experimental,
            sigma,
            status,
        });
    }
    Ok(results)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sigma_scales_inversely_with_error(
            predicted in -1e6f64..1e6,
            experimental in -1e6f64..1e6,
            error in 1e-3f64..1e3,
        ) {
            let one = calculate_sigma("q", predicted, experimental, error).unwrap();
            let two = calculate_sigma("q", predicted, experimental, 2.0 * error).unwrap();
            prop_assert!((one - 2.0 * two).abs() <= 1e-9 * one.abs().max(1.0));
        }
    }
}
