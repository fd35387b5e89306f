//! # Complex Gamma Function
//!
//! Γ(w) at arbitrary precision for complex `w`, by Spouge's approximation
//! on Re(w) ≥ 1/2 and the reflection formula elsewhere.
//!
//! ## Spouge's Approximation
//!
//! With `x = w − 1` and an integer parameter `a`:
//!
//! ```text
//! Γ(x + 1) = (x + a)^(x + 1/2) · e^−(x + a) · [c₀ + Σ_{k=1}^{a−1} c_k / (x + k)]
//! c₀  = √(2π)
//! c_k = (−1)^(k−1) / (k − 1)! · (a − k)^(k − 1/2) · e^(a − k)
//! ```
//!
//! The relative error is below `(2π)^−(a + 1/2)` for Re(x) > 0, so
//! `a ≈ 0.38 · bits` meets the target precision. The coefficients alternate
//! and cancel, losing roughly `bits` binary digits; the sum is therefore
//! carried at a context widened by that amount and rounded back at the end.
//!
//! ## Poles
//!
//! Γ has simple poles at 0, −1, −2, …. Those arguments return
//! `DomainError::GammaPole`; no other input fails.

use e8_core::{less_than, Arith, BigComplex, BigFloat, DomainError, E8Result, NumericContext};

/// Spouge parameter per target bit.
const SPOUGE_RATE: (usize, usize) = (38, 100);

/// Extra bits beyond the cancellation estimate.
const CANCELLATION_MARGIN: usize = 64;

/// Whether `w` is one of 0, −1, −2, ….
pub fn is_gamma_pole(w: &BigComplex) -> bool {
    // astro-float reports +0 as positive, so zero is tested on its own.
    w.im.is_zero() && (w.re.is_zero() || w.re.is_negative()) && w.re.is_int()
}

/// Γ(w) at the precision of `ctx`.
///
/// # Errors
///
/// Returns `DomainError::GammaPole` when `w` is a non-positive integer.
pub fn gamma(w: &BigComplex, ctx: &NumericContext) -> E8Result<BigComplex> {
    if is_gamma_pole(w) {
        return Err(DomainError::GammaPole {
            argument: w.to_string(),
        }
        .into());
    }
    let target = ctx.bits();
    let mut wide = ctx.widened(target + CANCELLATION_MARGIN).session()?;
    let a = spouge_parameter(target);

    let half = wide.ratio(1, 2)?;
    let value = if less_than(&w.re, &half) {
        reflected(w, a, &mut wide)?
    } else {
        spouge(w, a, &mut wide)?
    };

    let narrow = ctx.session()?;
    let rounded = BigComplex::new(
        narrow.add(&value.re, &narrow.zero()),
        narrow.add(&value.im, &narrow.zero()),
    );
    rounded.finite("gamma")
}

fn spouge_parameter(bits: usize) -> i64 {
    let (num, den) = SPOUGE_RATE;
    let a = (bits * num).div_ceil(den) + 2;
    i64::try_from(a).unwrap_or(i64::MAX)
}

/// Γ(w) for Re(w) ≥ 1/2.
fn spouge(w: &BigComplex, a: i64, ar: &mut Arith) -> E8Result<BigComplex> {
    let one = BigComplex::one(ar);
    let x = w.sub(&one, ar);

    let two_pi = ar.tau();
    let mut series = BigComplex::real(ar.sqrt(&two_pi), ar);
    let mut factorial = ar.one();
    for k in 1..a {
        if k > 1 {
            factorial = ar.mul(&factorial, &ar.int(k - 1));
        }
        let base = ar.int(a - k);
        let power = ar.div(&ar.powi(&base, k as usize), &ar.sqrt(&base))?;
        let growth = ar.exp(&base);
        let mut c_k = ar.div(&ar.mul(&power, &growth), &factorial)?;
        if k % 2 == 0 {
            c_k = ar.neg(&c_k);
        }
        let denominator = x.add(&BigComplex::real(ar.int(k), ar), ar);
        series = series.add(&BigComplex::real(c_k, ar).div(&denominator, ar)?, ar);
    }

    let shifted = x.add(&BigComplex::real(ar.int(a), ar), ar);
    let exponent = x.add(&BigComplex::real(ar.ratio(1, 2)?, ar), ar);
    let power = shifted.pow(&exponent, ar)?;
    let decay = shifted.neg(ar).exp(ar);
    Ok(power.mul(&decay, ar).mul(&series, ar))
}

/// Γ(w) = π / (sin(πw) · Γ(1 − w)) for Re(w) < 1/2.
fn reflected(w: &BigComplex, a: i64, ar: &mut Arith) -> E8Result<BigComplex> {
    let one = BigComplex::one(ar);
    let mirror = spouge(&one.sub(w, ar), a, ar)?;
    let pi = ar.pi();
    let sine = complex_sin(&w.scale(&pi, ar), ar)?;
    BigComplex::real(pi, ar).div(&sine.mul(&mirror, ar), ar)
}

/// `sin(x + iy) = sin x · cosh y + i · cos x · sinh y`.
fn complex_sin(z: &BigComplex, ar: &mut Arith) -> E8Result<BigComplex> {
    let sin = ar.sin(&z.re);
    let cos = ar.cos(&z.re);
    let (cosh, sinh) = cosh_sinh(&z.im, ar)?;
    Ok(BigComplex::new(ar.mul(&sin, &cosh), ar.mul(&cos, &sinh)))
}

fn cosh_sinh(y: &BigFloat, ar: &mut Arith) -> E8Result<(BigFloat, BigFloat)> {
    let up = ar.exp(y);
    let down = ar.div(&ar.one(), &up)?;
    let two = ar.int(2);
    Ok((
        ar.div(&ar.add(&up, &down), &two)?,
        ar.div(&ar.sub(&up, &down), &two)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use e8_core::E8Error;

    fn ctx() -> NumericContext {
        NumericContext::with_digits(30).unwrap()
    }

    fn real(v: f64) -> BigComplex {
        BigComplex::from_f64(v, 0.0)
    }

    fn assert_close(actual: &BigComplex, expected: &BigComplex, tol: f64) {
        let ar = ctx().session().unwrap();
        let err = actual.sub(expected, &ar).abs(&ar);
        let scale = expected.abs(&ar);
        let rel = ar.div(&err, &scale).unwrap();
        assert!(
            less_than(&rel, &ar.float(tol)),
            "got {actual}, expected {expected}"
        );
    }

    #[test]
    fn integer_argument_is_factorial() {
        let ar = ctx().session().unwrap();
        let g = gamma(&real(5.0), &ctx()).unwrap();
        assert_close(&g, &BigComplex::real(ar.int(24), &ar), 1e-28);
        let g = gamma(&real(1.0), &ctx()).unwrap();
        assert_close(&g, &BigComplex::one(&ar), 1e-28);
    }

    #[test]
    fn half_integers() {
        let mut ar = ctx().session().unwrap();
        let pi = ar.pi();
        let sqrt_pi = ar.sqrt(&pi);

        let g = gamma(&real(0.5), &ctx()).unwrap();
        assert_close(&g, &BigComplex::real(sqrt_pi.clone(), &ar), 1e-28);

        // Reflection branch: Γ(−1/2) = −2√π
        let g = gamma(&real(-0.5), &ctx()).unwrap();
        let expected = ar.mul(&ar.int(-2), &sqrt_pi);
        assert_close(&g, &BigComplex::real(expected, &ar), 1e-28);

        // Γ(9/2) = 105√π / 16
        let g = gamma(&real(4.5), &ctx()).unwrap();
        let expected = ar.div(&ar.mul(&ar.int(105), &sqrt_pi), &ar.int(16)).unwrap();
        assert_close(&g, &BigComplex::real(expected, &ar), 1e-28);
    }

    #[test]
    fn modulus_on_the_line_re_one() {
        // |Γ(1 + i)|² = π / sinh π
        let mut ar = ctx().session().unwrap();
        let g = gamma(&BigComplex::from_f64(1.0, 1.0), &ctx()).unwrap();
        let pi = ar.pi();
        let (_, sinh) = cosh_sinh(&pi, &mut ar).unwrap();
        let expected = ar.div(&pi, &sinh).unwrap();
        let rel = ar
            .div(&ar.sub(&g.norm_sqr(&ar), &expected).abs(), &expected)
            .unwrap();
        assert!(less_than(&rel, &ar.float(1e-27)));
    }

    #[test]
    fn conjugate_symmetry() {
        let ar = ctx().session().unwrap();
        let up = gamma(&BigComplex::from_f64(-1.25, 0.75), &ctx()).unwrap();
        let down = gamma(&BigComplex::from_f64(-1.25, -0.75), &ctx()).unwrap();
        let conj = BigComplex::new(down.re.clone(), ar.neg(&down.im));
        assert_close(&up, &conj, 1e-27);
    }

    #[test]
    fn poles_are_domain_errors() {
        for v in [0.0, -1.0, -3.0] {
            let err = gamma(&real(v), &ctx()).unwrap_err();
            assert!(
                matches!(err, E8Error::Domain(DomainError::GammaPole { .. })),
                "w = {v}"
            );
        }
        // Off the real axis there is no pole.
        assert!(gamma(&BigComplex::from_f64(-3.0, 0.5), &ctx()).is_ok());
    }

    #[test]
    fn signed_zero_is_a_pole() {
        assert!(is_gamma_pole(&real(0.0)));
        assert!(is_gamma_pole(&real(-0.0)));
        assert!(is_gamma_pole(&real(-2.0)));
        for v in [0.5, 1.0, 2.0, -0.5] {
            assert!(!is_gamma_pole(&real(v)), "w = {v}");
        }
    }
}
