//! # E8 Constant Table
//!
//! Fixed integers of the E8 root system and its representation theory.
//! These are the only structural inputs of the derived-constant formulas;
//! everything else is computed from them at the evaluator's precision.
//!
//! Rational constants are stored as numerator/denominator pairs so they can
//! be divided once at working precision instead of being typed as decimals.

use serde::{Deserialize, Serialize};

/// Number of roots (lattice vectors of squared norm 2).
pub const E8_ROOTS: u32 = 240;

/// Dimension of the adjoint representation.
pub const E8_ADJOINT_DIM: u32 = 248;

/// Dimension of the 3875 irreducible representation.
pub const E8_REP_3875: u32 = 3875;

/// Rank of the Cartan subalgebra.
pub const E8_RANK: u32 = 8;

/// Dimension of the lattice; also the weight-shift of the zeta
/// functional equation (ζ(s) ↔ ζ(8 − s)).
pub const E8_LATTICE_DIM: u32 = 8;

/// Weight of θ_E8 as a modular form.
pub const THETA_WEIGHT: u32 = 4;

/// Anomaly coefficient 5/3 from the branching to the Standard Model.
pub const ANOMALY_COEFFICIENT: (i64, i64) = (5, 3);

/// log2 of the E8 lattice center density (δ = 2^-4).
pub const CENTER_DENSITY_LOG2: i32 = -4;

/// Exponent applied to the golden-ratio scale in the Planck-ratio estimate.
pub const PLANCK_SCALE_EXPONENT: usize = 63;

/// Highest index kept in the theta and eta q-series.
pub const DEFAULT_SERIES_TERMS: u32 = 99;

/// Truncation bound of the direct zeta sum: `1/δ + 240`.
///
/// The combination of center density and root count is carried over as
/// given; it is a fixed bound, never refined against a target error.
pub const fn zeta_convergence_bound() -> u32 {
    (1u32 << CENTER_DENSITY_LOG2.unsigned_abs()) + E8_ROOTS
}

/// The constant table as a value, for consumers that load and compare it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct E8Constants {
    pub root_count: u32,
    pub adjoint_dimension: u32,
    pub representation_dimension: u32,
    pub rank: u32,
    /// Anomaly coefficient as (numerator, denominator).
    pub anomaly_coefficient: (i64, i64),
}

impl E8Constants {
    /// The canonical table.
    pub const CANONICAL: Self = Self {
        root_count: E8_ROOTS,
        adjoint_dimension: E8_ADJOINT_DIM,
        representation_dimension: E8_REP_3875,
        rank: E8_RANK,
        anomaly_coefficient: ANOMALY_COEFFICIENT,
    };

    /// Anomaly coefficient as an `f64`, for comparison against loaded tables.
    pub fn anomaly_coefficient_f64(&self) -> f64 {
        let (num, den) = self.anomaly_coefficient;
        num as f64 / den as f64
    }
}

impl Default for E8Constants {
    fn default() -> Self {
        Self::CANONICAL
    }
}
