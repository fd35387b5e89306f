//! # Arbitrary-Precision Complex Numbers
//!
//! `astro-float` provides real arithmetic only. [`BigComplex`] pairs two
//! `BigFloat`s and implements the handful of complex operations the theta,
//! eta and zeta engines need. Every operation takes the [`Arith`] session so
//! precision and rounding are always explicit.
//!
//! Logarithms and non-integer powers use the principal branch
//! (argument in (−π, π]).

use astro_float::BigFloat;

use crate::error::{DomainError, E8Result};
use crate::precision::Arith;

/// Precision that represents every `f64` exactly.
pub const F64_EXACT_BITS: usize = 64;

/// A complex number `re + i·im` with arbitrary-precision parts.
#[derive(Debug, Clone)]
pub struct BigComplex {
    pub re: BigFloat,
    pub im: BigFloat,
}

impl BigComplex {
    pub fn new(re: BigFloat, im: BigFloat) -> Self {
        Self { re, im }
    }

    /// A real value with zero imaginary part.
    pub fn real(re: BigFloat, ar: &Arith) -> Self {
        Self { re, im: ar.zero() }
    }

    pub fn zero(ar: &Arith) -> Self {
        Self::new(ar.zero(), ar.zero())
    }

    pub fn one(ar: &Arith) -> Self {
        Self::new(ar.one(), ar.zero())
    }

    /// The imaginary unit.
    pub fn i(ar: &Arith) -> Self {
        Self::new(ar.zero(), ar.one())
    }

    /// Exact conversion from a pair of `f64`.
    ///
    /// Parts are stored at 64 bits, enough to hold any `f64` exactly; later
    /// operations round to their session precision.
    pub fn from_f64(re: f64, im: f64) -> Self {
        Self::new(
            BigFloat::from_f64(re, F64_EXACT_BITS),
            BigFloat::from_f64(im, F64_EXACT_BITS),
        )
    }

    /// Both parts are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Neither part is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        !(self.re.is_nan() || self.re.is_inf() || self.im.is_nan() || self.im.is_inf())
    }

    /// Exact equality of both parts.
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.re.cmp(&other.re) == Some(0) && self.im.cmp(&other.im) == Some(0)
    }

    pub fn add(&self, o: &Self, ar: &Arith) -> Self {
        Self::new(ar.add(&self.re, &o.re), ar.add(&self.im, &o.im))
    }

    pub fn sub(&self, o: &Self, ar: &Arith) -> Self {
        Self::new(ar.sub(&self.re, &o.re), ar.sub(&self.im, &o.im))
    }

    pub fn neg(&self, ar: &Arith) -> Self {
        Self::new(ar.neg(&self.re), ar.neg(&self.im))
    }

    pub fn mul(&self, o: &Self, ar: &Arith) -> Self {
        let re = ar.sub(&ar.mul(&self.re, &o.re), &ar.mul(&self.im, &o.im));
        let im = ar.add(&ar.mul(&self.re, &o.im), &ar.mul(&self.im, &o.re));
        Self::new(re, im)
    }

    /// Multiply by a real scalar.
    pub fn scale(&self, k: &BigFloat, ar: &Arith) -> Self {
        Self::new(ar.mul(&self.re, k), ar.mul(&self.im, k))
    }

    /// # Errors
    ///
    /// Returns `DomainError::DivisionByZero` when `o` is zero.
    pub fn div(&self, o: &Self, ar: &Arith) -> E8Result<Self> {
        if o.is_zero() {
            return Err(DomainError::DivisionByZero {
                context: "complex division".to_string(),
            }
            .into());
        }
        let den = o.norm_sqr(ar);
        let re = ar.add(&ar.mul(&self.re, &o.re), &ar.mul(&self.im, &o.im));
        let im = ar.sub(&ar.mul(&self.im, &o.re), &ar.mul(&self.re, &o.im));
        Ok(Self::new(ar.div(&re, &den)?, ar.div(&im, &den)?))
    }

    /// Divide by a real scalar.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DivisionByZero` when `k` is zero.
    pub fn div_real(&self, k: &BigFloat, ar: &Arith) -> E8Result<Self> {
        Ok(Self::new(ar.div(&self.re, k)?, ar.div(&self.im, k)?))
    }

    /// `re² + im²`.
    pub fn norm_sqr(&self, ar: &Arith) -> BigFloat {
        ar.add(&ar.mul(&self.re, &self.re), &ar.mul(&self.im, &self.im))
    }

    /// Modulus `|z|`.
    pub fn abs(&self, ar: &Arith) -> BigFloat {
        ar.sqrt(&self.norm_sqr(ar))
    }

    /// Integer power by repeated squaring.
    pub fn powi(&self, n: u32, ar: &Arith) -> Self {
        let mut result = Self::one(ar);
        let mut base = self.clone();
        let mut e = n;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base, ar);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base, ar);
            }
        }
        result
    }

    /// `e^z = e^re · (cos im + i·sin im)`.
    pub fn exp(&self, ar: &mut Arith) -> Self {
        let modulus = ar.exp(&self.re);
        if self.im.is_zero() {
            return Self::real(modulus, ar);
        }
        let cos = ar.cos(&self.im);
        let sin = ar.sin(&self.im);
        Self::new(ar.mul(&modulus, &cos), ar.mul(&modulus, &sin))
    }

    /// Principal argument in (−π, π].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LogarithmOfZero` at the origin.
    pub fn arg(&self, ar: &mut Arith) -> E8Result<BigFloat> {
        if self.is_zero() {
            return Err(DomainError::LogarithmOfZero {
                context: "complex argument".to_string(),
            }
            .into());
        }
        if self.re.is_zero() {
            let pi = ar.pi();
            let half_pi = ar.div(&pi, &ar.int(2))?;
            return Ok(if self.im.is_negative() {
                ar.neg(&half_pi)
            } else {
                half_pi
            });
        }
        let base = ar.div(&self.im, &self.re)?;
        let base = ar.atan(&base);
        if self.re.is_positive() {
            return Ok(base);
        }
        let pi = ar.pi();
        // −0 on the negative real axis still maps to +π.
        Ok(if self.im.is_zero() {
            pi
        } else if self.im.is_negative() {
            ar.sub(&base, &pi)
        } else {
            ar.add(&base, &pi)
        })
    }

    /// Principal logarithm `ln|z| + i·arg z`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LogarithmOfZero` at the origin.
    pub fn ln(&self, ar: &mut Arith) -> E8Result<Self> {
        let arg = self.arg(ar)?;
        let half = ar.ratio(1, 2)?;
        let ln_norm = ar.ln(&self.norm_sqr(ar))?;
        Ok(Self::new(ar.mul(&half, &ln_norm), arg))
    }

    /// Principal power `z^w = e^{w·Ln z}`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LogarithmOfZero` when `z` is zero.
    pub fn pow(&self, w: &Self, ar: &mut Arith) -> E8Result<Self> {
        let ln = self.ln(ar)?;
        Ok(w.mul(&ln, ar).exp(ar))
    }

    /// `x^z` for a positive real base: `e^{z·ln x}`.
    ///
    /// # Errors
    ///
    /// Fails when `x` is not positive.
    pub fn real_base_pow(x: &BigFloat, z: &Self, ar: &mut Arith) -> E8Result<Self> {
        let ln_x = ar.ln(x)?;
        Ok(z.scale(&ln_x, ar).exp(ar))
    }

    /// Reject NaN and infinite parts.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Arithmetic` naming `what`.
    pub fn finite(self, what: &str) -> E8Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(crate::error::E8Error::Arithmetic(format!(
                "{what} is not finite"
            )))
        }
    }
}

impl std::fmt::Display for BigComplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im.is_negative() {
            write!(f, "{} - {}i", self.re, self.im.abs())
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::{less_than, NumericContext};

    fn session() -> Arith {
        NumericContext::with_digits(40).unwrap().session().unwrap()
    }

    fn close(a: &BigComplex, b: &BigComplex, tol: f64, ar: &Arith) -> bool {
        less_than(&a.sub(b, ar).abs(ar), &ar.float(tol))
    }

    #[test]
    fn i_squared_is_minus_one_exactly() {
        let ar = session();
        let i = BigComplex::i(&ar);
        let sq = i.powi(2, &ar);
        assert!(sq.bit_eq(&BigComplex::real(ar.int(-1), &ar)));
        assert!(i.powi(4, &ar).bit_eq(&BigComplex::one(&ar)));
    }

    #[test]
    fn minus_one_over_i_is_i() {
        let ar = session();
        let i = BigComplex::i(&ar);
        let minus_one = BigComplex::real(ar.int(-1), &ar);
        let inv = minus_one.div(&i, &ar).unwrap();
        assert!(inv.re.is_zero());
        assert_eq!(inv.im.cmp(&ar.one()), Some(0));
    }

    #[test]
    fn division_by_zero_rejected() {
        let ar = session();
        let one = BigComplex::one(&ar);
        assert!(one.div(&BigComplex::zero(&ar), &ar).is_err());
    }

    #[test]
    fn euler_identity() {
        let mut ar = session();
        let pi = ar.pi();
        let z = BigComplex::new(ar.zero(), pi);
        let e = z.exp(&mut ar);
        let minus_one = BigComplex::real(ar.int(-1), &ar);
        assert!(close(&e, &minus_one, 1e-35, &ar));
    }

    #[test]
    fn principal_argument_quadrants() {
        let mut ar = session();
        let pi = ar.pi();
        let third = BigComplex::from_f64(-1.0, -1.0).arg(&mut ar).unwrap();
        let expected = ar.neg(&ar.mul(&pi, &ar.ratio(3, 4).unwrap()));
        assert!(less_than(&ar.sub(&third, &expected).abs(), &ar.float(1e-35)));

        let negative_real = BigComplex::from_f64(-2.0, 0.0).arg(&mut ar).unwrap();
        assert!(less_than(&ar.sub(&negative_real, &pi).abs(), &ar.float(1e-35)));
    }

    #[test]
    fn negative_zero_imaginary_part_stays_on_upper_edge() {
        let mut ar = session();
        let pi = ar.pi();
        let z = BigComplex::new(ar.int(-2), BigFloat::from_f64(-0.0, 64));
        assert!(z.im.is_zero());
        assert_eq!(z.arg(&mut ar).unwrap().cmp(&pi), Some(0));
        let ln = z.ln(&mut ar).unwrap();
        assert_eq!(ln.im.cmp(&pi), Some(0));
    }

    #[test]
    fn ln_inverts_exp() {
        let mut ar = session();
        let z = BigComplex::from_f64(0.75, -1.25);
        let back = z.exp(&mut ar).ln(&mut ar).unwrap();
        assert!(close(&back, &z, 1e-35, &ar));
    }

    #[test]
    fn ln_of_zero_rejected() {
        let mut ar = session();
        assert!(BigComplex::zero(&ar).ln(&mut ar).is_err());
    }

    #[test]
    fn pow_matches_powi_for_integer_exponent() {
        let mut ar = session();
        let z = BigComplex::from_f64(0.3, 0.9);
        let w = BigComplex::real(ar.int(5), &ar);
        let general = z.pow(&w, &mut ar).unwrap();
        assert!(close(&general, &z.powi(5, &ar), 1e-35, &ar));
    }
}
