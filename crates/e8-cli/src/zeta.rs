//! # Zeta Subcommands
//!
//! `multiplicity` prints the number of E8 lattice vectors of a squared
//! norm; `zeta` evaluates the spectral zeta function, continued through the
//! functional equation unless `--direct` asks for the raw shell sum.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use e8_core::{BigComplex, EngineConfig};
use e8_zeta::SpectralZeta;

use crate::output::{print_json, ComplexValue};

/// Arguments for `multiplicity`.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplicityArgs {
    /// Squared norm m.
    #[arg(allow_hyphen_values = true)]
    pub norm: i64,
}

/// Arguments for `zeta`.
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct ZetaArgs {
    /// Real part of s.
    #[arg(long, allow_hyphen_values = true)]
    pub re: f64,

    /// Imaginary part of s.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub im: f64,

    /// Sum the shells directly, without continuation.
    #[arg(long)]
    pub direct: bool,
}

#[derive(Debug, Serialize)]
struct ZetaOutput {
    operation: &'static str,
    s: ComplexValue,
    precision_digits: u32,
    zeta_bound: u32,
    value: ComplexValue,
}

pub(crate) fn spectral(config: &EngineConfig) -> Result<SpectralZeta> {
    let ctx = config.context()?;
    Ok(SpectralZeta::with_bound(ctx, config.zeta_bound)?)
}

/// Execute `multiplicity`.
pub fn run_multiplicity(args: &MultiplicityArgs, config: &EngineConfig) -> Result<u8> {
    let count = spectral(config)?.root_multiplicity(args.norm)?;
    print_json(&serde_json::json!({
        "norm_squared": args.norm,
        "multiplicity": count.to_string(),
    }))?;
    Ok(0)
}

/// Evaluate ζ_E8(s).
///
/// # Errors
///
/// Fails at Γ poles and where the continuation does not reach.
pub fn evaluate_zeta(args: &ZetaArgs, config: &EngineConfig) -> Result<serde_json::Value> {
    let zeta = spectral(config)?;
    let s = BigComplex::from_f64(args.re, args.im);
    let (operation, value) = if args.direct {
        ("zeta_via_theta", zeta.zeta_via_theta(&s))
    } else {
        ("zeta_analytic", zeta.zeta_analytic(&s))
    };
    let value = value.with_context(|| format!("evaluating {operation} at s = {s}"))?;
    Ok(serde_json::to_value(ZetaOutput {
        operation,
        s: ComplexValue::from(&s),
        precision_digits: config.precision_digits,
        zeta_bound: zeta.bound(),
        value: ComplexValue::from(&value),
    })?)
}

/// Execute `zeta`.
pub fn run_zeta(args: &ZetaArgs, config: &EngineConfig) -> Result<u8> {
    print_json(&evaluate_zeta(args, config)?)?;
    Ok(0)
}
