//! # Modular Invariance Checker
//!
//! θ_E8 is a weight-4 modular form, so `θ(−1/τ) = τ⁴ · θ(τ)` for every τ in
//! the upper half-plane. [`ModularForms::modular_invariance_check`] evaluates
//! both sides with the configured truncation and reports the discrepancy.
//!
//! The checker is diagnostic only: no tolerance is built in. Callers compare
//! [`InvarianceReport::relative_error`] against a bound of their choosing,
//! for example [`ModularForms::theoretical_error_bound`].
//!
//! ## Fixed Point
//!
//! τ = i is fixed by τ → −1/τ and `i⁴ = 1`. Both sides are computed from the
//! same series at the same argument, so the relative error there is zero up
//! to rounding of the transform itself.

use serde::Serialize;

use e8_core::constants::THETA_WEIGHT;
use e8_core::{less_than, BigComplex, BigFloat, E8Result};

use crate::engine::ModularForms;

/// Hermite-constant factor of the heuristic error bound.
pub const HERMITE_FACTOR: i64 = 4;

/// Both sides of the weight-4 transformation law at one τ.
#[derive(Debug, Clone)]
pub struct InvarianceReport {
    /// θ(−1/τ).
    pub theta_inverse: BigComplex,
    /// τ⁴ · θ(τ).
    pub expected: BigComplex,
    /// `theta_inverse − expected`.
    pub difference: BigComplex,
    /// `|difference / expected|`.
    pub relative_error: BigFloat,
}

/// Decimal rendering of an [`InvarianceReport`], for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvarianceSummary {
    #[serde(rename = "θ(-1/τ)")]
    pub theta_inverse: String,
    #[serde(rename = "τ^4 θ(τ)")]
    pub expected: String,
    pub difference: String,
    pub relative_error: String,
}

impl InvarianceReport {
    /// Whether the relative error is strictly below `tolerance`.
    pub fn passes(&self, tolerance: &BigFloat) -> bool {
        less_than(&self.relative_error, tolerance)
    }

    pub fn summary(&self) -> InvarianceSummary {
        InvarianceSummary {
            theta_inverse: self.theta_inverse.to_string(),
            expected: self.expected.to_string(),
            difference: self.difference.to_string(),
            relative_error: self.relative_error.to_string(),
        }
    }
}

impl ModularForms {
    /// Compare θ(−1/τ) with τ⁴ · θ(τ).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TauNotInUpperHalfPlane` unless Im(τ) > 0, and
    /// `DomainError::DivisionByZero` if τ⁴ · θ(τ) vanishes.
    pub fn modular_invariance_check(&self, tau: &BigComplex) -> E8Result<InvarianceReport> {
        let mut ar = self.context().session()?;
        Self::check_upper_half_plane(tau, &ar)?;

        let minus_one = BigComplex::real(ar.int(-1), &ar);
        let inverse = minus_one.div(tau, &ar)?;
        Self::check_upper_half_plane(&inverse, &ar)?;

        let theta_tau = self.theta_in(tau, self.terms(), &mut ar)?;
        let theta_inverse = self.theta_in(&inverse, self.terms(), &mut ar)?;
        let expected = tau.powi(THETA_WEIGHT, &ar).mul(&theta_tau, &ar);
        let difference = theta_inverse.sub(&expected, &ar);
        let relative_error = difference.div(&expected, &ar)?.abs(&ar);

        tracing::debug!(
            tau = %tau,
            relative_error = %relative_error,
            "modular invariance check"
        );
        Ok(InvarianceReport {
            theta_inverse,
            expected,
            difference,
            relative_error: ar.finite(relative_error, "invariance relative error")?,
        })
    }

    /// Heuristic bound `4 · 2^(−digits/2)` on the invariance discrepancy,
    /// with `digits` the decimal precision of this evaluator.
    ///
    /// # Errors
    ///
    /// Fails only if the arithmetic session cannot be opened.
    pub fn theoretical_error_bound(&self) -> E8Result<BigFloat> {
        let ar = self.context().session()?;
        let digits = self.context().precision().digits();
        let half = ar.powi(&ar.int(2), (digits / 2) as usize);
        let mut bound = ar.div(&ar.int(HERMITE_FACTOR), &half)?;
        if digits % 2 == 1 {
            bound = ar.div(&bound, &ar.sqrt(&ar.int(2)))?;
        }
        Ok(bound)
    }

    /// Test points with a structural role for the transformation law:
    /// i (fixed by τ → −1/τ), 2i and i/2 (swapped by it), (1+i)/2 (a
    /// complex-multiplication point) and √2·i (algebraic of degree 2).
    ///
    /// # Errors
    ///
    /// Fails only if the arithmetic session cannot be opened.
    pub fn canonical_test_points(&self) -> E8Result<Vec<BigComplex>> {
        let ar = self.context().session()?;
        let half = ar.ratio(1, 2)?;
        let on_axis = |im: BigFloat| BigComplex::new(ar.zero(), im);
        Ok(vec![
            on_axis(ar.one()),
            on_axis(ar.int(2)),
            on_axis(half.clone()),
            BigComplex::new(half.clone(), half),
            on_axis(ar.sqrt(&ar.int(2))),
        ])
    }
}
