//! # Representation-Theory Table
//!
//! A JSON document describing E8 representation data:
//!
//! ```json
//! {
//!   "fundamental_representations": [{ "name": "adjoint", "dimension": 248 }],
//!   "branching_to_standard_model": {
//!     "branching_248": ["(78,1)", "(1,8)", "(27,3)", "(27bar,3bar)"]
//!   },
//!   "mathematical_constants": { "anomaly_coefficient": 1.6666666666666667 }
//! }
//! ```
//!
//! Branching components are either labels whose parenthesised factors are
//! dimensions (`"(27,3)"` has dimension 81) or objects with an explicit
//! `dimension` and optional `multiplicity`.
//!
//! [`check_consistency`] compares the table with the canonical E8 constants.
//! A mismatch is a failed [`ConsistencyCheck`], never a silent pass.

use std::path::Path;

use serde::{Deserialize, Serialize};

use e8_core::E8Constants;

use crate::error::{io_error, VerifyError};

/// Allowed deviation of the anomaly coefficient from 5/3.
pub const ANOMALY_TOLERANCE: f64 = 1e-10;

/// The representation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentationTable {
    pub fundamental_representations: Vec<Representation>,
    pub branching_to_standard_model: Branching,
    pub mathematical_constants: MathematicalConstants,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Representation {
    #[serde(default)]
    pub name: Option<String>,
    pub dimension: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branching {
    pub branching_248: Vec<BranchingComponent>,
}

/// One summand in the decomposition of the adjoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BranchingComponent {
    Detailed {
        #[serde(default)]
        label: Option<String>,
        dimension: u64,
        #[serde(default = "one")]
        multiplicity: u64,
    },
    Label(String),
}

fn one() -> u64 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathematicalConstants {
    pub anomaly_coefficient: f64,
}

impl BranchingComponent {
    /// Total dimension this summand contributes.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Representation` for a label without a
    /// parenthesised list of dimensions, or a dimension past `u64::MAX`.
    pub fn dimension(&self) -> Result<u64, VerifyError> {
        match self {
            Self::Detailed {
                label,
                dimension,
                multiplicity,
            } => dimension.checked_mul(*multiplicity).ok_or_else(|| {
                overflow(label.as_deref().unwrap_or("unlabelled component"))
            }),
            Self::Label(label) => label_dimension(label),
        }
    }
}

/// Product of the factor dimensions in a label such as `(27bar,3)_1/3`.
fn label_dimension(label: &str) -> Result<u64, VerifyError> {
    let malformed = || VerifyError::Representation(format!("cannot read dimensions from '{label}'"));
    let open = label.find('(').ok_or_else(malformed)?;
    let close = label[open..].find(')').ok_or_else(malformed)? + open;
    label[open + 1..close]
        .split(',')
        .try_fold(1u64, |product, factor| {
            let digits: String = factor.chars().filter(char::is_ascii_digit).collect();
            let factor = digits.parse::<u64>().map_err(|_| malformed())?;
            product.checked_mul(factor).ok_or_else(|| overflow(label))
        })
}

fn overflow(what: &str) -> VerifyError {
    VerifyError::Representation(format!("dimension of '{what}' overflows u64"))
}

impl RepresentationTable {
    /// Parse from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Json` for malformed documents.
    pub fn from_json_str(doc: &str) -> Result<Self, VerifyError> {
        Ok(serde_json::from_str(doc)?)
    }

    /// Load from disk.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Io` or `VerifyError::Json`.
    pub fn load(path: &Path) -> Result<Self, VerifyError> {
        let doc = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        Self::from_json_str(&doc)
    }

    /// Dimension of the first fundamental representation (the adjoint).
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Representation` when the list is empty.
    pub fn adjoint_dimension(&self) -> Result<u64, VerifyError> {
        self.fundamental_representations
            .first()
            .map(|r| r.dimension)
            .ok_or_else(|| VerifyError::Representation("no fundamental representations".to_string()))
    }

    /// Sum of the dimensions in the branching of the adjoint.
    ///
    /// # Errors
    ///
    /// Returns `VerifyError::Representation` for an unreadable component or
    /// a sum past `u64::MAX`.
    pub fn branching_sum(&self) -> Result<u64, VerifyError> {
        self.branching_to_standard_model
            .branching_248
            .iter()
            .try_fold(0u64, |total, component| {
                total
                    .checked_add(component.dimension()?)
                    .ok_or_else(|| overflow("branching_248"))
            })
    }
}

/// One exact-match or tolerance check against the canonical constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyCheck {
    pub label: String,
    pub passed: bool,
    pub observed: f64,
    pub expected: f64,
    pub tolerance: f64,
}

/// Adjoint dimension, branching sum and anomaly coefficient, in that order.
///
/// # Errors
///
/// Returns `VerifyError::Representation` when a value cannot be read at
/// all. Readable but wrong values produce failed checks.
pub fn check_consistency(table: &RepresentationTable) -> Result<Vec<ConsistencyCheck>, VerifyError> {
    let canonical = E8Constants::CANONICAL;
    let adjoint = f64::from(canonical.adjoint_dimension);
    let anomaly = canonical.anomaly_coefficient_f64();

    let exact = |label: &str, observed: u64| ConsistencyCheck {
        label: label.to_string(),
        passed: observed == u64::from(canonical.adjoint_dimension),
        observed: observed as f64,
        expected: adjoint,
        tolerance: 0.0,
    };

    let observed_anomaly = table.mathematical_constants.anomaly_coefficient;
    let checks = vec![
        exact("adjoint dimension", table.adjoint_dimension()?),
        exact("branching of the adjoint", table.branching_sum()?),
        ConsistencyCheck {
            label: "anomaly coefficient".to_string(),
            passed: (observed_anomaly - anomaly).abs() < ANOMALY_TOLERANCE,
            observed: observed_anomaly,
            expected: anomaly,
            tolerance: ANOMALY_TOLERANCE,
        },
    ];
    for check in checks.iter().filter(|c| !c.passed) {
        tracing::warn!(
            check = %check.label,
            observed = check.observed,
            expected = check.expected,
            "consistency check failed"
        );
    }
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{
        "fundamental_representations": [
            { "name": "adjoint", "dimension": 248 },
            { "name": "3875", "dimension": 3875 }
        ],
        "branching_to_standard_model": {
            "branching_248": ["(78,1)", "(1,8)", "(27,3)", "(27bar,3bar)"]
        },
        "mathematical_constants": { "anomaly_coefficient": 1.6666666666666667 }
    }"#;

    #[test]
    fn canonical_table_is_consistent() {
        let table = RepresentationTable::from_json_str(TABLE).unwrap();
        assert_eq!(table.adjoint_dimension().unwrap(), 248);
        assert_eq!(table.branching_sum().unwrap(), 248);
        let checks = check_consistency(&table).unwrap();
        assert_eq!(checks.len(), 3);
        assert!(checks.iter().all(|c| c.passed));
    }

    #[test]
    fn label_dimensions() {
        assert_eq!(label_dimension("(27,3)").unwrap(), 81);
        assert_eq!(label_dimension("(3,2)_1/6").unwrap(), 6);
        assert_eq!(label_dimension("(27bar,3bar)").unwrap(), 81);
        assert!(label_dimension("27").is_err());
        assert!(label_dimension("(x,3)").is_err());
    }

    #[test]
    fn detailed_components_use_multiplicity() {
        let doc = TABLE.replace(
            r#"["(78,1)", "(1,8)", "(27,3)", "(27bar,3bar)"]"#,
            r#"[{"label": "(78,1)", "dimension": 78}, {"dimension": 8},
                {"label": "(27,3)+c.c.", "dimension": 81, "multiplicity": 2}]"#,
        );
        let table = RepresentationTable::from_json_str(&doc).unwrap();
        assert_eq!(table.branching_sum().unwrap(), 248);
    }

    #[test]
    fn wrong_adjoint_fails_check() {
        let doc = TABLE.replacen("248", "247", 1);
        let table = RepresentationTable::from_json_str(&doc).unwrap();
        let checks = check_consistency(&table).unwrap();
        assert!(!checks[0].passed);
        assert!(checks[1].passed);
    }

    #[test]
    fn incomplete_branching_fails_check() {
        let doc = TABLE.replace(r#", "(27bar,3bar)""#, "");
        let table = RepresentationTable::from_json_str(&doc).unwrap();
        assert_eq!(table.branching_sum().unwrap(), 167);
        assert!(!check_consistency(&table).unwrap()[1].passed);
    }

    #[test]
    fn rounded_anomaly_fails_check() {
        let doc = TABLE.replace("1.6666666666666667", "1.6667");
        let table = RepresentationTable::from_json_str(&doc).unwrap();
        assert!(!check_consistency(&table).unwrap()[2].passed);
    }

    #[test]
    fn wrapping_multiplicity_is_rejected() {
        // 2 · (2^63 + 124) wraps to exactly 248 in u64.
        let doc = TABLE.replace(
            r#"["(78,1)", "(1,8)", "(27,3)", "(27bar,3bar)"]"#,
            r#"[{"dimension": 9223372036854775932, "multiplicity": 2}]"#,
        );
        let table = RepresentationTable::from_json_str(&doc).unwrap();
        assert!(matches!(
            check_consistency(&table),
            Err(VerifyError::Representation(_))
        ));
    }

    #[test]
    fn wrapping_sum_and_label_are_rejected() {
        let doc = TABLE.replace(
            r#"["(78,1)", "(1,8)", "(27,3)", "(27bar,3bar)"]"#,
            r#"[{"dimension": 18446744073709551615}, "(1,8)"]"#,
        );
        let table = RepresentationTable::from_json_str(&doc).unwrap();
        assert!(matches!(
            table.branching_sum(),
            Err(VerifyError::Representation(_))
        ));
        assert!(label_dimension("(4294967296,4294967296)").is_err());
    }

    #[test]
    fn empty_fundamentals_is_an_error() {
        let doc = r#"{
            "fundamental_representations": [],
            "branching_to_standard_model": { "branching_248": [] },
            "mathematical_constants": { "anomaly_coefficient": 1.0 }
        }"#;
        let table = RepresentationTable::from_json_str(doc).unwrap();
        assert!(matches!(
            check_consistency(&table),
            Err(VerifyError::Representation(_))
        ));
    }
}
