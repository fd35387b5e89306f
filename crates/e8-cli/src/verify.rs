//! # Verify Subcommand
//!
//! Compares predictions with measurements and checks the representation
//! table. Reads `experimental_values.csv` and `e8_representations.json`
//! from `--data-dir` unless the files are named individually.
//!
//! Exit code 0 on full validation, 2 on partial validation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use e8_verify::{
    load_experimental_values, RepresentationTable, ValidationReport, EXPERIMENTAL_VALUES_FILE,
    REPRESENTATIONS_FILE,
};

/// Arguments for `verify`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct VerifyArgs {
    /// Directory holding both input files.
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Experimental table (defaults to `<data-dir>/experimental_values.csv`).
    #[arg(long)]
    pub experimental: Option<PathBuf>,

    /// Representation table (defaults to `<data-dir>/e8_representations.json`).
    #[arg(long)]
    pub representations: Option<PathBuf>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl VerifyArgs {
    fn experimental_path(&self) -> PathBuf {
        self.experimental
            .clone()
            .unwrap_or_else(|| self.data_dir.join(EXPERIMENTAL_VALUES_FILE))
    }

    fn representations_path(&self) -> PathBuf {
        self.representations
            .clone()
            .unwrap_or_else(|| self.data_dir.join(REPRESENTATIONS_FILE))
    }
}

/// Build the report from the configured files.
///
/// # Errors
///
/// Fails if either file cannot be loaded or a measured row is unusable.
pub fn build_report(args: &VerifyArgs) -> Result<ValidationReport> {
    let experimental = args.experimental_path();
    let representations = args.representations_path();
    let records = load_experimental_values(&experimental)
        .with_context(|| format!("loading {}", experimental.display()))?;
    let table = RepresentationTable::load(&representations)
        .with_context(|| format!("loading {}", representations.display()))?;
    Ok(ValidationReport::generate(&records, &table)?)
}

/// Execute `verify`.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let report = build_report(args)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(if report.is_full_validation() { 0 } else { 2 })
}
