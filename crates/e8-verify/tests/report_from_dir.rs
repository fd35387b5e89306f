//! Integration test: a verification run over files on disk.
//!
//! Writes both inputs into a temporary directory, builds the report the way
//! the `e8 verify` command does, and checks the shipped data set in `data/`.

use std::path::PathBuf;

use e8_verify::{OverallStatus, ValidationReport, VerifyError};

const REPRESENTATIONS: &str = r#"{
    "fundamental_representations": [{ "name": "adjoint", "dimension": 248 }],
    "branching_to_standard_model": {
        "branching_248": ["(78,1)", "(1,8)", "(27,3)", "(27bar,3bar)"]
    },
    "mathematical_constants": { "anomaly_coefficient": 1.6666666666666667 }
}"#;

fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

#[test]
fn report_from_temporary_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("experimental_values.csv"),
        "quantity,predicted_value,experimental_value,experimental_error\n\
         alpha,1.00,1.05,0.05\n\
         beta,3.0,2.0,0.1\n\
         gamma,7.0,,\n",
    )
    .expect("write csv");
    std::fs::write(dir.path().join("e8_representations.json"), REPRESENTATIONS)
        .expect("write json");

    let report = ValidationReport::from_dir(dir.path()).expect("report");
    assert_eq!(report.measured_count, 2);
    assert_eq!(report.agreement_count, 1);
    assert!(report.consistency_passed);
    assert_eq!(report.overall, OverallStatus::PartialValidation);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("e8_representations.json"), REPRESENTATIONS)
        .expect("write json");
    let err = ValidationReport::from_dir(dir.path()).expect_err("no csv");
    assert!(matches!(err, VerifyError::Io { .. }));
    assert!(err.to_string().contains("experimental_values.csv"));
}

#[test]
fn shipped_data_set_is_consistent() {
    let report = ValidationReport::from_dir(&repo_root().join("data")).expect("report");
    assert!(report.consistency_passed);
    assert_eq!(report.measured_count, 5);
}
