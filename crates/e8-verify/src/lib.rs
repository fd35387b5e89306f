//! # e8-verify — Prediction Verification
//!
//! Reads the two inputs of a verification run and reports on them:
//!
//! - **Records** (`records.rs`): the experimental table; deviations in units
//!   of the experimental error and the AGREEMENT / TENSION classification.
//!
//! - **Representations** (`representations.rs`): the representation table;
//!   exact-match checks of the adjoint dimension and its branching, and a
//!   tolerance check of the anomaly coefficient.
//!
//! - **Report** (`report.rs`): the combined summary, as text or JSON.
//!
//! The inputs are read-only. Nothing here evaluates a series; predictions
//! arrive as numbers in the table.

pub mod error;
pub mod records;
pub mod report;
pub mod representations;

pub use error::VerifyError;
pub use records::{
    calculate_sigma, load_experimental_values, read_experimental_values, verify_agreement,
    AgreementResult, AgreementStatus, ExperimentalRecord, AGREEMENT_SIGMA,
};
pub use report::{OverallStatus, ValidationReport, EXPERIMENTAL_VALUES_FILE, REPRESENTATIONS_FILE};
pub use representations::{check_consistency, ConsistencyCheck, RepresentationTable};
