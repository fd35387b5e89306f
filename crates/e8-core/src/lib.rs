//! # e8-core — Foundational Types for E8 Lattice Numerics
//!
//! This crate is the leaf of the workspace. It defines the numeric context
//! every evaluator is built from, the arbitrary-precision complex type the
//! series engines compute with, exact divisor sums, the E8 constant table,
//! and the error hierarchy.
//!
//! ## Key Design Principles
//!
//! 1. **Precision is a value, not ambient state.** A [`NumericContext`] is
//!    handed to each evaluator at construction and threaded into every
//!    arithmetic call through an [`Arith`] session. Changing precision means
//!    building a new evaluator.
//!
//! 2. **No silent fallback to `f64`.** Transcendental functions, powers and
//!    divisions all run on `astro-float` at the session precision. `f64`
//!    only appears as an exact input conversion.
//!
//! 3. **Exact integers stay exact.** σ_k(n) and lattice multiplicities are
//!    `BigUint` until the moment they enter a series.
//!
//! 4. **Domain errors are values.** Out-of-domain inputs produce
//!    [`DomainError`], never NaN.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `e8-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod complex;
pub mod config;
pub mod constants;
pub mod divisor;
pub mod error;
pub mod precision;

// Re-export primary types for ergonomic imports.
pub use astro_float::BigFloat;
pub use complex::BigComplex;
pub use config::{EngineConfig, DEFAULT_PRECISION_DIGITS};
pub use constants::{zeta_convergence_bound, E8Constants};
pub use divisor::{sigma_k, DivisorSumCache};
pub use error::{ConfigError, DomainError, E8Error, E8Result};
pub use precision::{less_than, Arith, NumericContext, Precision};
