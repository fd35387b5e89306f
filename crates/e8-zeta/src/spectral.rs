//! # Spectral Zeta Function of E8
//!
//! `ζ_E8(s) = Σ_{v ∈ E8, v ≠ 0} |v|^−s = Σ_{n ≥ 1} N(2n) · (2n)^−s/2`, with
//! `N(m)` the number of lattice vectors of squared norm `m`.
//!
//! ## Evaluation
//!
//! - [`SpectralZeta::zeta_via_theta`] sums the first `N` shells directly,
//!   with `N` fixed by [`zeta_convergence_bound`] (256). The bound is taken
//!   as given and never refined against a target error.
//! - [`SpectralZeta::zeta_analytic`] uses the direct sum for Re(s) > 8 and
//!   otherwise the functional equation
//!   `ζ(s) = Γ(4 − s/2) / Γ(s/2) · (2π)^(s − 8) · ζ(8 − s)`,
//!   which needs Re(8 − s) > 8, i.e. Re(s) < 0.
//!
//! ## Failure Modes
//!
//! Checked in this order for Re(s) ≤ 8:
//!
//! 1. `s/2 ∈ {0, −1, −2, …}`: Γ(s/2) has a pole, `DomainError::GammaPole`.
//! 2. `0 ≤ Re(s) ≤ 8`: the reflected point is not in the convergent
//!    half-plane either, `DomainError::OutsideContinuation`.

use num_bigint::BigUint;

use e8_core::{
    less_than, zeta_convergence_bound, Arith, BigComplex, ConfigError, DivisorSumCache,
    DomainError, E8Result, NumericContext,
};

use crate::gamma::{gamma, is_gamma_pole};
use crate::multiplicity::cached_root_multiplicity;

/// Lattice dimension; the functional equation relates s and 8 − s.
const DIMENSION: i64 = e8_core::constants::E8_LATTICE_DIM as i64;

/// Evaluator for the E8 spectral zeta function.
#[derive(Debug)]
pub struct SpectralZeta {
    ctx: NumericContext,
    bound: u32,
    divisors: DivisorSumCache,
}

impl SpectralZeta {
    /// Evaluator with the lattice-density truncation bound.
    pub fn new(ctx: NumericContext) -> Self {
        Self {
            ctx,
            bound: zeta_convergence_bound(),
            divisors: DivisorSumCache::new(),
        }
    }

    /// Evaluator summing shells `1..=bound`.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Config` for `bound == 0`.
    pub fn with_bound(ctx: NumericContext, bound: u32) -> E8Result<Self> {
        if bound == 0 {
            return Err(ConfigError::NotPositive {
                field: "zeta_bound",
                value: "0".to_string(),
            }
            .into());
        }
        Ok(Self {
            bound,
            ..Self::new(ctx)
        })
    }

    pub fn context(&self) -> &NumericContext {
        &self.ctx
    }

    /// Number of shells in the direct sum.
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// Lattice vectors of squared norm `m`, with σ₃ memoized.
    ///
    /// # Errors
    ///
    /// Propagates divisor-sum errors, which valid norms never produce.
    pub fn root_multiplicity(&self, m: i64) -> E8Result<BigUint> {
        cached_root_multiplicity(m, &self.divisors)
    }

    /// Direct sum `Σ_{n=1}^{N} N(2n) · (2n)^−s/2`.
    ///
    /// Defined for every s; only meaningful as an approximation of ζ_E8
    /// when Re(s) > 8.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Arithmetic` if the sum is not finite.
    pub fn zeta_via_theta(&self, s: &BigComplex) -> E8Result<BigComplex> {
        let mut ar = self.ctx.session()?;
        self.direct_sum(s, &mut ar)
    }

    fn direct_sum(&self, s: &BigComplex, ar: &mut Arith) -> E8Result<BigComplex> {
        tracing::debug!(bound = self.bound, bits = ar.bits(), "summing zeta shells");
        let exponent = s.div_real(&ar.int(-2), ar)?;
        let mut total = BigComplex::zero(ar);
        for n in 1..=i64::from(self.bound) {
            let norm = 2 * n;
            let count = ar.biguint(&self.root_multiplicity(norm)?);
            let shell = BigComplex::real_base_pow(&ar.int(norm), &exponent, ar)?;
            total = total.add(&shell.scale(&count, ar), ar);
        }
        total.finite("zeta_via_theta")
    }

    /// ζ_E8(s) with continuation to Re(s) < 0.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GammaPole` for s = 0, −2, −4, … and
    /// `DomainError::OutsideContinuation` for any other s with
    /// 0 ≤ Re(s) ≤ 8.
    pub fn zeta_analytic(&self, s: &BigComplex) -> E8Result<BigComplex> {
        let mut ar = self.ctx.session()?;
        let dimension = ar.int(DIMENSION);
        if less_than(&dimension, &s.re) {
            return self.direct_sum(s, &mut ar);
        }

        let half = s.div_real(&ar.int(2), &ar)?;
        if is_gamma_pole(&half) {
            return Err(DomainError::GammaPole {
                argument: half.to_string(),
            }
            .into());
        }

        let reflected = BigComplex::real(dimension.clone(), &ar).sub(s, &ar);
        if !less_than(&dimension, &reflected.re) {
            return Err(DomainError::OutsideContinuation { s: s.to_string() }.into());
        }

        tracing::debug!(s = %s, "continuing through the functional equation");
        let factor = self.factor_in(s, &mut ar)?;
        let tail = self.direct_sum(&reflected, &mut ar)?;
        factor.mul(&tail, &ar).finite("zeta_analytic")
    }

    /// `Γ(4 − s/2) / Γ(s/2) · (2π)^(s − 8)`, the factor relating ζ(s) to
    /// ζ(8 − s).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GammaPole` when s/2 or 4 − s/2 is a
    /// non-positive integer.
    pub fn functional_equation_factor(&self, s: &BigComplex) -> E8Result<BigComplex> {
        let mut ar = self.ctx.session()?;
        self.factor_in(s, &mut ar)
    }

    fn factor_in(&self, s: &BigComplex, ar: &mut Arith) -> E8Result<BigComplex> {
        let half = s.div_real(&ar.int(2), ar)?;
        let weight = BigComplex::real(ar.int(DIMENSION / 2), ar);
        let upper = gamma(&weight.sub(&half, ar), &self.ctx)?;
        let lower = gamma(&half, &self.ctx)?;
        let shift = s.sub(&BigComplex::real(ar.int(DIMENSION), ar), ar);
        let two_pi = ar.tau();
        let scale = BigComplex::real_base_pow(&two_pi, &shift, ar)?;
        upper.div(&lower, ar)?.mul(&scale, ar).finite("functional equation factor")
    }
}

#[cfg(test)]
mod tests {
    use e8_core::E8Error;

    use super::*;

    fn zeta(digits: u32) -> SpectralZeta {
        SpectralZeta::new(NumericContext::with_digits(digits).unwrap())
    }

    fn real(v: f64) -> BigComplex {
        BigComplex::from_f64(v, 0.0)
    }

    #[test]
    fn default_bound_is_256() {
        assert_eq!(zeta(20).bound(), 256);
    }

    #[test]
    fn zero_bound_rejected() {
        let ctx = NumericContext::with_digits(20).unwrap();
        assert!(matches!(
            SpectralZeta::with_bound(ctx, 0),
            Err(E8Error::Config(_))
        ));
    }

    #[test]
    fn first_shells_in_closed_form() {
        let ctx = NumericContext::with_digits(30).unwrap();
        let ar = ctx.session().unwrap();
        let s = real(4.0);

        // 240 · 2^-2
        let one = SpectralZeta::with_bound(ctx, 1).unwrap();
        let value = one.zeta_via_theta(&s).unwrap();
        assert!(less_than(&ar.sub(&value.re, &ar.int(60)).abs(), &ar.float(1e-25)));

        // + 2160 · 4^-2
        let two = SpectralZeta::with_bound(ctx, 2).unwrap();
        let value = two.zeta_via_theta(&s).unwrap();
        assert!(less_than(&ar.sub(&value.re, &ar.int(195)).abs(), &ar.float(1e-25)));
        assert!(value.im.is_zero());
    }

    #[test]
    fn convergent_half_plane_uses_direct_sum() {
        let z = zeta(30);
        for s in [real(9.0), BigComplex::from_f64(12.5, -3.0)] {
            let analytic = z.zeta_analytic(&s).unwrap();
            let direct = z.zeta_via_theta(&s).unwrap();
            assert!(analytic.bit_eq(&direct), "s = {s}");
        }
    }

    #[test]
    fn gamma_poles_are_reported() {
        let z = zeta(30);
        for v in [0.0, -2.0, -6.0] {
            let err = z.zeta_analytic(&real(v)).unwrap_err();
            assert!(
                matches!(err, E8Error::Domain(DomainError::GammaPole { .. })),
                "s = {v}"
            );
        }
    }

    #[test]
    fn factor_at_zero_is_a_gamma_pole() {
        let err = zeta(30).functional_equation_factor(&real(0.0)).unwrap_err();
        assert!(matches!(err, E8Error::Domain(DomainError::GammaPole { .. })));
    }

    #[test]
    fn critical_strip_is_outside_continuation() {
        let z = zeta(30);
        for s in [real(4.0), real(8.0), real(0.5), BigComplex::from_f64(3.0, 2.0)] {
            let err = z.zeta_analytic(&s).unwrap_err();
            assert!(
                matches!(err, E8Error::Domain(DomainError::OutsideContinuation { .. })),
                "s = {s}"
            );
        }
    }

    #[test]
    fn odd_negative_integers_continue() {
        let z = zeta(30);
        let value = z.zeta_analytic(&real(-1.0)).unwrap();
        assert!(value.is_finite());
        assert!(value.re.is_negative());
    }
}
