//! # Validation Report
//!
//! Combines the experimental comparison and the representation-table
//! consistency checks into one summary, in the manner of a validation
//! harness: every check is recorded with its observed and expected value,
//! and the overall status is derived from the recorded outcomes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;
use crate::records::{
    load_experimental_values, verify_agreement, AgreementResult, AgreementStatus,
    ExperimentalRecord,
};
use crate::representations::{check_consistency, ConsistencyCheck, RepresentationTable};

/// Default file name of the experimental table.
pub const EXPERIMENTAL_VALUES_FILE: &str = "experimental_values.csv";

/// Default file name of the representation table.
pub const REPRESENTATIONS_FILE: &str = "e8_representations.json";

/// Overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    /// Every measured prediction agrees and every consistency check passes.
    FullValidation,
    /// At least one tension or failed consistency check.
    PartialValidation,
}

/// Summary of one verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub agreements: Vec<AgreementResult>,
    pub consistency: Vec<ConsistencyCheck>,
    pub agreement_count: usize,
    pub measured_count: usize,
    pub consistency_passed: bool,
    pub overall: OverallStatus,
}

impl ValidationReport {
    /// Build the report from already loaded inputs.
    ///
    /// # Errors
    ///
    /// Propagates row errors from [`verify_agreement`] and unreadable table
    /// entries from [`check_consistency`].
    pub fn generate(
        records: &[ExperimentalRecord],
        table: &RepresentationTable,
    ) -> Result<Self, VerifyError> {
        let agreements = verify_agreement(records)?;
        let consistency = check_consistency(table)?;

        let agreement_count = agreements
            .iter()
            .filter(|r| r.status == AgreementStatus::Agreement)
            .count();
        let measured_count = agreements.len();
        let consistency_passed = consistency.iter().all(|c| c.passed);
        let overall = if agreement_count == measured_count && consistency_passed {
            OverallStatus::FullValidation
        } else {
            OverallStatus::PartialValidation
        };

        tracing::info!(
            agreement_count,
            measured_count,
            consistency_passed,
            ?overall,
            "validation report generated"
        );
        Ok(Self {
            agreements,
            consistency,
            agreement_count,
            measured_count,
            consistency_passed,
            overall,
        })
    }

    /// Load `experimental_values.csv` and `e8_representations.json` from
    /// `dir` and build the report.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Io` if either file is missing, plus any parse
    /// or row error.
    pub fn from_dir(dir: &Path) -> Result<Self, VerifyError> {
        let records = load_experimental_values(&dir.join(EXPERIMENTAL_VALUES_FILE))?;
        let table = RepresentationTable::load(&dir.join(REPRESENTATIONS_FILE))?;
        Self::generate(&records, &table)
    }

    /// Percentage of measured predictions in agreement, if any were measured.
    pub fn agreement_percentage(&self) -> Option<f64> {
        (self.measured_count > 0)
            .then(|| self.agreement_count as f64 / self.measured_count as f64 * 100.0)
    }

    pub fn is_full_validation(&self) -> bool {
        self.overall == OverallStatus::FullValidation
    }

    /// Machine-readable form.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, VerifyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PREDICTION VERIFICATION")?;
        for r in &self.agreements {
            writeln!(f, "{:30} {:6.2}σ {}", r.quantity, r.sigma, r.status)?;
        }
        writeln!(f)?;
        writeln!(f, "MATHEMATICAL CONSISTENCY")?;
        for c in &self.consistency {
            let mark = if c.passed { "PASS" } else { "FAIL" };
            writeln!(f, "{mark} {}: {} (expected {})", c.label, c.observed, c.expected)?;
        }
        writeln!(f)?;
        match self.agreement_percentage() {
            Some(pct) => writeln!(
                f,
                "Experimental agreements: {}/{} ({pct:.1}%)",
                self.agreement_count, self.measured_count
            )?,
            None => writeln!(f, "Experimental agreements: none measured")?,
        }
        writeln!(
            f,
            "Mathematical consistency: {}",
            if self.consistency_passed { "PASS" } else { "FAIL" }
        )?;
        let overall = match self.overall {
            OverallStatus::FullValidation => "FULL VALIDATION SUCCESS",
            OverallStatus::PartialValidation => "PARTIAL VALIDATION - REVIEW NEEDED",
        };
        write!(f, "OVERALL STATUS: {overall}")
    }
}
