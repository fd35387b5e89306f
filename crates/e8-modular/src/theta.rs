//! # θ_E8 — Theta Series of the E8 Lattice
//!
//! `θ_E8(τ) = 1 + 240 · Σ_{n=1}^{N} σ₃(n) · qⁿ`, `q = exp(2πiτ)`.
//!
//! The sum is truncated at a fixed `N` (99 unless configured otherwise).
//! The neglected tail is of order `|q|^{N+1} · σ₃(N+1)`: negligible for
//! Im(τ) around 1, dominant as Im(τ) → 0. The truncation is never adapted
//! to the argument.

use e8_core::constants::E8_ROOTS;
use e8_core::{Arith, BigComplex, BigFloat, E8Result};

use crate::engine::ModularForms;

impl ModularForms {
    /// θ_E8(τ) with the configured truncation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TauNotInUpperHalfPlane` unless Im(τ) > 0.
    pub fn theta_e8(&self, tau: &BigComplex) -> E8Result<BigComplex> {
        self.theta_e8_truncated(tau, self.terms())
    }

    /// θ_E8(τ) keeping series indices `1..=terms`.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Config` for `terms == 0` and
    /// `DomainError::TauNotInUpperHalfPlane` unless Im(τ) > 0.
    pub fn theta_e8_truncated(&self, tau: &BigComplex, terms: u32) -> E8Result<BigComplex> {
        Self::require_terms(terms)?;
        let mut ar = self.context().session()?;
        Self::check_upper_half_plane(tau, &ar)?;
        self.theta_in(tau, terms, &mut ar)
    }

    pub(crate) fn theta_in(
        &self,
        tau: &BigComplex,
        terms: u32,
        ar: &mut Arith,
    ) -> E8Result<BigComplex> {
        tracing::debug!(terms, bits = ar.bits(), "evaluating theta_E8 series");
        let q = Self::nome_in(tau, ar)?;
        let roots = ar.int(i64::from(E8_ROOTS));
        let mut q_n = BigComplex::one(ar);
        let mut sum = BigComplex::one(ar);
        for n in 1..=u64::from(terms) {
            q_n = q_n.mul(&q, ar);
            let sigma3 = ar.biguint(&self.divisors().get(n, 3)?);
            let coefficient = ar.mul(&roots, &sigma3);
            sum = sum.add(&q_n.scale(&coefficient, ar), ar);
        }
        sum.finite("theta_E8")
    }

    /// `|θ_fine − θ_coarse| / |θ_fine|`: how much of the value the tail
    /// between two truncations carries.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Config` if either truncation is zero and
    /// `DomainError::TauNotInUpperHalfPlane` unless Im(τ) > 0.
    pub fn truncation_sensitivity(
        &self,
        tau: &BigComplex,
        coarse: u32,
        fine: u32,
    ) -> E8Result<BigFloat> {
        Self::require_terms(coarse)?;
        Self::require_terms(fine)?;
        let mut ar = self.context().session()?;
        Self::check_upper_half_plane(tau, &ar)?;
        let coarse = self.theta_in(tau, coarse, &mut ar)?;
        let fine = self.theta_in(tau, fine, &mut ar)?;
        let change = fine.sub(&coarse, &ar).abs(&ar);
        ar.div(&change, &fine.abs(&ar))
    }
}
