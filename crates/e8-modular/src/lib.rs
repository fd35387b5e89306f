//! # e8-modular — Theta Series Engine & Modular Invariance
//!
//! Truncated q-series for the modular forms attached to the E8 lattice:
//!
//! - **Theta** (`theta.rs`): `θ_E8(τ) = 1 + 240 · Σ σ₃(n) qⁿ`, the generating
//!   function of E8 lattice vectors by squared norm.
//!
//! - **Eta** (`eta.rs`): the Dedekind η function on the principal branch of
//!   `q^{1/24}`, and the discriminant `Δ = η^24`.
//!
//! - **Invariance** (`invariance.rs`): compares `θ(−1/τ)` with `τ⁴ · θ(τ)`
//!   and reports the discrepancy.
//!
//! All operations are methods of [`ModularForms`], which holds the numeric
//! context, the fixed series truncation, and a σ₃ cache.
//!
//! ## Truncation
//!
//! Series are cut at a fixed index (99 by default) regardless of τ. Results
//! are finite approximations; convergence shortfall near the real axis is
//! logged, never raised.

pub mod engine;
mod eta;
mod invariance;
mod theta;

pub use engine::{ModularForms, SLOW_CONVERGENCE_IM};
pub use eta::DISCRIMINANT_POWER;
pub use invariance::{InvarianceReport, InvarianceSummary, HERMITE_FACTOR};
