//! # Modular Form Evaluator
//!
//! [`ModularForms`] owns the configuration shared by the theta, eta and
//! invariance operations: the numeric context, the fixed series truncation,
//! and a divisor-sum cache. The operations themselves live in sibling
//! modules as further `impl` blocks.
//!
//! ## Domain
//!
//! Every operation takes τ in the upper half-plane. The nome
//! `q = exp(2πiτ)` then has `|q| = exp(−2π·Im τ) < 1` and the q-series
//! converge geometrically.

use e8_core::{less_than, Arith, BigComplex, DivisorSumCache, DomainError, E8Result, NumericContext};

use e8_core::constants::DEFAULT_SERIES_TERMS;

/// Below this Im(τ) the fixed truncation is visibly inaccurate.
pub const SLOW_CONVERGENCE_IM: f64 = 0.1;

/// Evaluator for θ_E8, η and Δ at a fixed precision and truncation.
#[derive(Debug)]
pub struct ModularForms {
    ctx: NumericContext,
    terms: u32,
    divisors: DivisorSumCache,
}

impl ModularForms {
    /// Evaluator with the default truncation (n ≤ 99).
    pub fn new(ctx: NumericContext) -> Self {
        Self {
            ctx,
            terms: DEFAULT_SERIES_TERMS,
            divisors: DivisorSumCache::new(),
        }
    }

    /// Evaluator keeping series indices `1..=terms`.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Config` for `terms == 0`.
    pub fn with_terms(ctx: NumericContext, terms: u32) -> E8Result<Self> {
        Self::require_terms(terms)?;
        Ok(Self {
            terms,
            ..Self::new(ctx)
        })
    }

    pub fn context(&self) -> &NumericContext {
        &self.ctx
    }

    /// Highest series index kept.
    pub fn terms(&self) -> u32 {
        self.terms
    }

    pub(crate) fn divisors(&self) -> &DivisorSumCache {
        &self.divisors
    }

    /// Fail unless Im(τ) > 0.
    /// Every truncation keeps at least one series term.
    pub(crate) fn require_terms(terms: u32) -> E8Result<()> {
        if terms == 0 {
            return Err(e8_core::ConfigError::NotPositive {
                field: "series_terms",
                value: "0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub(crate) fn check_upper_half_plane(tau: &BigComplex, ar: &Arith) -> E8Result<()> {
        if !tau.is_finite() || !tau.im.is_positive() || tau.im.is_zero() {
            return Err(DomainError::TauNotInUpperHalfPlane {
                tau: tau.to_string(),
            }
            .into());
        }
        if less_than(&tau.im, &ar.float(SLOW_CONVERGENCE_IM)) {
            tracing::warn!(
                im = %tau.im,
                "Im(tau) is small; the truncated q-series converges slowly"
            );
        }
        Ok(())
    }

    /// The nome `q = exp(2πiτ)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TauNotInUpperHalfPlane` unless Im(τ) > 0.
    pub fn nome(&self, tau: &BigComplex) -> E8Result<BigComplex> {
        let mut ar = self.ctx.session()?;
        Self::check_upper_half_plane(tau, &ar)?;
        Self::nome_in(tau, &mut ar)
    }

    pub(crate) fn nome_in(tau: &BigComplex, ar: &mut Arith) -> E8Result<BigComplex> {
        let two_pi = ar.tau();
        // 2πiτ = −2π·Im τ + i·2π·Re τ
        let exponent = BigComplex::new(
            ar.neg(&ar.mul(&two_pi, &tau.im)),
            ar.mul(&two_pi, &tau.re),
        );
        exponent.exp(ar).finite("nome")
    }
}
