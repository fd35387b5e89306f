//! # Derive Subcommand
//!
//! Prints φ_E8, the gravitational coupling estimate and the Planck-ratio
//! estimate with the provenance of every fixed input.

use anyhow::{Context, Result};

use e8_core::EngineConfig;

use crate::output::print_json;
use crate::zeta::spectral;

/// Execute `derive`.
pub fn run_derive(config: &EngineConfig) -> Result<u8> {
    let derived = spectral(config)?
        .derived_constants()
        .context("computing derived constants")?;
    print_json(&derived)?;
    Ok(0)
}
