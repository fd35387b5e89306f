//! # e8-cli — Command-Line Interface for E8 Lattice Numerics
//!
//! ## Subcommands
//!
//! - `theta`, `eta`, `discriminant`: q-series at a point τ
//! - `invariance`: weight-4 transformation check, optionally against a
//!   tolerance
//! - `multiplicity`: lattice vectors of a squared norm
//! - `zeta`: spectral zeta function, continued or direct
//! - `derive`: derived constants with provenance
//! - `verify`: prediction verification report
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from evaluation: each subcommand has an
//!   `evaluate_*`/`build_*` function returning data and a `run_*` function
//!   that prints it and returns the exit code.
//! - Numeric output is JSON with decimal strings; nothing is narrowed to
//!   `f64` on the way out.

pub mod config;
pub mod derive;
pub mod output;
pub mod series;
pub mod verify;
pub mod zeta;
