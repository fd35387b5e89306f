//! # Dedekind η and the Modular Discriminant
//!
//! `η(τ) = q^{1/24} · Π_{n=1}^{N} (1 − qⁿ)` with the same fixed truncation
//! as θ_E8. `q^{1/24}` is the principal branch, `exp(Ln(q) / 24)`, which
//! differs from `exp(2πiτ/24)` by a 24th root of unity once |Re τ| > 1/2.
//! It is built from τ rather than from q, as `exp(2πi(τ − k)/24)` with the
//! integer k placing Re(τ − k) in (−1/2, 1/2], so it stays representable
//! after q itself has underflowed to zero.
//!
//! `Δ(τ) = η(τ)^24`. Raising to the 24th power removes the branch choice,
//! since `(q^{1/24})^24 = q` for every branch.

use e8_core::{Arith, BigComplex, E8Result};

use crate::engine::ModularForms;

/// Weight of the eta power that gives the discriminant.
pub const DISCRIMINANT_POWER: u32 = 24;

impl ModularForms {
    /// Dedekind η(τ).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TauNotInUpperHalfPlane` unless Im(τ) > 0.
    pub fn dedekind_eta(&self, tau: &BigComplex) -> E8Result<BigComplex> {
        let mut ar = self.context().session()?;
        Self::check_upper_half_plane(tau, &ar)?;
        self.eta_in(tau, &mut ar)
    }

    /// Modular discriminant Δ(τ) = η(τ)^24.
    ///
    /// Bit-identical to raising [`Self::dedekind_eta`] to the 24th power
    /// with [`BigComplex::powi`] under the same context.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TauNotInUpperHalfPlane` unless Im(τ) > 0.
    pub fn e8_modular_discriminant(&self, tau: &BigComplex) -> E8Result<BigComplex> {
        let mut ar = self.context().session()?;
        Self::check_upper_half_plane(tau, &ar)?;
        let eta = self.eta_in(tau, &mut ar)?;
        eta.powi(DISCRIMINANT_POWER, &ar).finite("discriminant")
    }

    /// `q · Π (1 − qⁿ)^24`, the discriminant without any fractional power.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TauNotInUpperHalfPlane` unless Im(τ) > 0.
    pub fn discriminant_product(&self, tau: &BigComplex) -> E8Result<BigComplex> {
        let mut ar = self.context().session()?;
        Self::check_upper_half_plane(tau, &ar)?;
        let q = Self::nome_in(tau, &mut ar)?;
        let product = self.euler_product(&q, &ar);
        Ok(q.mul(&product.powi(DISCRIMINANT_POWER, &ar), &ar))
    }

    fn eta_in(&self, tau: &BigComplex, ar: &mut Arith) -> E8Result<BigComplex> {
        tracing::debug!(terms = self.terms(), bits = ar.bits(), "evaluating Dedekind eta");
        let q = Self::nome_in(tau, ar)?;
        let root = Self::principal_root(tau, ar)?;
        let product = self.euler_product(&q, ar);
        root.mul(&product, ar).finite("dedekind_eta")
    }

    /// Principal `q^{1/24}`, equal to `exp(Ln(q) / 24)` whenever q ≠ 0.
    fn principal_root(tau: &BigComplex, ar: &mut Arith) -> E8Result<BigComplex> {
        let half = ar.ratio(1, 2)?;
        let k = ar.sub(&tau.re, &half).ceil();
        let shifted = ar.sub(&tau.re, &k);
        let two_pi = ar.tau();
        let power = ar.int(i64::from(DISCRIMINANT_POWER));
        // 2πi(τ − k)/24 = (−2π·Im τ + i·2π·Re(τ − k)) / 24
        let exponent = BigComplex::new(
            ar.neg(&ar.mul(&two_pi, &tau.im)),
            ar.mul(&two_pi, &shifted),
        )
        .div_real(&power, ar)?;
        Ok(exponent.exp(ar))
    }

    /// `Π_{n=1}^{N} (1 − qⁿ)`.
    fn euler_product(&self, q: &BigComplex, ar: &Arith) -> BigComplex {
        let one = BigComplex::one(ar);
        let mut q_n = BigComplex::one(ar);
        let mut product = BigComplex::one(ar);
        for _ in 0..self.terms() {
            q_n = q_n.mul(q, ar);
            product = product.mul(&one.sub(&q_n, ar), ar);
        }
        product
    }
}
