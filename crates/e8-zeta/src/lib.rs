//! # e8-zeta — Spectral Zeta Function of the E8 Lattice
//!
//! - **Multiplicity** (`multiplicity.rs`): lattice vectors per squared norm,
//!   `240 · σ₃(n)` for norm `2n`.
//!
//! - **Gamma** (`gamma.rs`): complex Γ at arbitrary precision, with poles
//!   reported as domain errors.
//!
//! - **Spectral** (`spectral.rs`): the direct shell sum with its fixed
//!   truncation, and continuation to Re(s) < 0 through the functional
//!   equation relating s and 8 − s.
//!
//! - **Derived** (`derived.rs`): closed-form constants built from the E8
//!   constant table.
//!
//! ## Continuation Range
//!
//! The functional equation maps Re(s) < 0 into the convergent half-plane
//! Re(s) > 8 in one step. For 0 ≤ Re(s) ≤ 8 neither side converges and the
//! evaluator returns a domain error instead of recursing.

pub mod derived;
pub mod gamma;
pub mod multiplicity;
pub mod spectral;

pub use derived::{DerivedConstants, ParameterProvenance};
pub use gamma::gamma;
pub use multiplicity::e8_root_multiplicity;
pub use spectral::SpectralZeta;
