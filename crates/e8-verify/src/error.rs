//! # Verification Errors
//!
//! Failures while loading or interpreting the comparison inputs. A failed
//! consistency check is not an error: it is reported in the
//! [`ValidationReport`](crate::ValidationReport) as a failed check.

use thiserror::Error;

/// Error while loading or evaluating verification inputs.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// An input file could not be read.
    #[error("io error reading '{path}': {source}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The experimental table is not valid CSV for the expected columns.
    #[error("experimental table: {0}")]
    Csv(#[from] csv::Error),

    /// The representation table is not valid JSON for the expected shape.
    #[error("representation table: {0}")]
    Json(#[from] serde_json::Error),

    /// A measured row carries no usable uncertainty.
    #[error("quantity '{quantity}' has non-positive experimental error {error}")]
    NonPositiveError {
        /// Name of the offending row.
        quantity: String,
        /// The rejected uncertainty.
        error: f64,
    },

    /// A measured row has no uncertainty column value.
    #[error("quantity '{quantity}' has an experimental value but no experimental error")]
    MissingError {
        /// Name of the offending row.
        quantity: String,
    },

    /// A required entry of the representation table is absent or malformed.
    #[error("representation table: {0}")]
    Representation(String),
}

pub(crate) fn io_error(path: &std::path::Path, source: std::io::Error) -> VerifyError {
    VerifyError::Io {
        path: path.display().to_string(),
        source,
    }
}
