//! # Series Subcommands
//!
//! `theta`, `eta`, `discriminant` and `invariance`: the modular-form
//! evaluations of [`ModularForms`] at a point τ given as `--re` / `--im`.
//!
//! ## Usage
//!
//! ```bash
//! e8 theta --im 1
//! e8 --precision 80 eta --re 0.25 --im 0.5
//! e8 invariance --canonical --tolerance 1e-20
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use e8_core::{BigComplex, BigFloat, EngineConfig};
use e8_modular::{InvarianceSummary, ModularForms};

use crate::output::{print_json, ComplexValue};

/// A point in the upper half-plane.
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct TauArgs {
    /// Real part of τ.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub re: f64,

    /// Imaginary part of τ (must be positive).
    #[arg(long, allow_hyphen_values = true)]
    pub im: f64,
}

impl TauArgs {
    pub fn tau(&self) -> BigComplex {
        BigComplex::from_f64(self.re, self.im)
    }
}

/// Arguments for `theta`.
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct ThetaArgs {
    #[command(flatten)]
    pub tau: TauArgs,

    /// Keep only series indices up to this value instead of the configured
    /// truncation.
    #[arg(long)]
    pub truncate: Option<u32>,
}

/// Which q-series to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Theta,
    Eta,
    Discriminant,
}

impl Series {
    fn name(self) -> &'static str {
        match self {
            Self::Theta => "theta_e8",
            Self::Eta => "dedekind_eta",
            Self::Discriminant => "e8_modular_discriminant",
        }
    }
}

/// Arguments for `invariance`.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct InvarianceArgs {
    /// Check the point given by `--re` / `--im`.
    #[arg(long, allow_hyphen_values = true, requires = "im")]
    pub re: Option<f64>,

    /// Imaginary part of τ.
    #[arg(long, allow_hyphen_values = true)]
    pub im: Option<f64>,

    /// Check every canonical test point instead.
    #[arg(long, conflicts_with_all = ["re", "im"])]
    pub canonical: bool,

    /// Fail (exit code 2) if any relative error reaches this tolerance.
    /// `theory` uses the heuristic bound 4 · 2^(−digits/2).
    #[arg(long)]
    pub tolerance: Option<String>,
}

#[derive(Debug, Serialize)]
struct SeriesOutput {
    operation: &'static str,
    tau: ComplexValue,
    precision_digits: u32,
    series_terms: u32,
    value: ComplexValue,
}

#[derive(Debug, Serialize)]
struct InvarianceOutput {
    tau: ComplexValue,
    report: InvarianceSummary,
    passed: Option<bool>,
}

fn forms(config: &EngineConfig) -> Result<ModularForms> {
    let ctx = config.context()?;
    Ok(ModularForms::with_terms(ctx, config.series_terms)?)
}

/// Evaluate one series at τ.
///
/// # Errors
///
/// Fails for τ outside the upper half-plane.
pub fn evaluate_series(
    series: Series,
    tau_args: &TauArgs,
    truncate: Option<u32>,
    config: &EngineConfig,
) -> Result<serde_json::Value> {
    let forms = forms(config)?;
    let tau = tau_args.tau();
    let terms = truncate.unwrap_or(config.series_terms);
    let value = match series {
        Series::Theta => forms.theta_e8_truncated(&tau, terms),
        Series::Eta => forms.dedekind_eta(&tau),
        Series::Discriminant => forms.e8_modular_discriminant(&tau),
    }
    .with_context(|| format!("evaluating {}", series.name()))?;

    let output = SeriesOutput {
        operation: series.name(),
        tau: ComplexValue::from(&tau),
        precision_digits: config.precision_digits,
        series_terms: terms,
        value: ComplexValue::from(&value),
    };
    Ok(serde_json::to_value(output)?)
}

/// Execute `theta`, `eta` or `discriminant`.
pub fn run_series(
    series: Series,
    tau: &TauArgs,
    truncate: Option<u32>,
    config: &EngineConfig,
) -> Result<u8> {
    print_json(&evaluate_series(series, tau, truncate, config)?)?;
    Ok(0)
}

/// Run the invariance check; the flag is `false` if a tolerance was given
/// and any point failed it.
///
/// # Errors
///
/// Fails for τ outside the upper half-plane or an unparsable tolerance.
pub fn evaluate_invariance(
    args: &InvarianceArgs,
    config: &EngineConfig,
) -> Result<(serde_json::Value, bool)> {
    let forms = forms(config)?;
    let points = match (args.canonical, args.im) {
        (true, _) => forms.canonical_test_points()?,
        (false, Some(im)) => vec![BigComplex::from_f64(args.re.unwrap_or(0.0), im)],
        (false, None) => bail!("give --im (and optionally --re), or --canonical"),
    };
    let tolerance = match args.tolerance.as_deref() {
        None => None,
        Some("theory") => Some(forms.theoretical_error_bound()?),
        Some(raw) => {
            let value: f64 = raw
                .parse()
                .with_context(|| format!("invalid tolerance '{raw}'"))?;
            Some(BigFloat::from_f64(value, e8_core::complex::F64_EXACT_BITS))
        }
    };

    let mut all_passed = true;
    let mut outputs = Vec::with_capacity(points.len());
    for tau in &points {
        let report = forms
            .modular_invariance_check(tau)
            .with_context(|| format!("checking invariance at tau = {tau}"))?;
        let passed = tolerance.as_ref().map(|tol| report.passes(tol));
        if passed == Some(false) {
            tracing::warn!(tau = %tau, relative_error = %report.relative_error, "invariance tolerance exceeded");
            all_passed = false;
        }
        outputs.push(InvarianceOutput {
            tau: ComplexValue::from(tau),
            report: report.summary(),
            passed,
        });
    }
    Ok((serde_json::to_value(outputs)?, all_passed))
}

/// Execute `invariance`. Exit code 2 when a tolerance check fails.
pub fn run_invariance(args: &InvarianceArgs, config: &EngineConfig) -> Result<u8> {
    let (output, passed) = evaluate_invariance(args, config)?;
    print_json(&output)?;
    Ok(if passed { 0 } else { 2 })
}
