//! # Working Precision — Explicit, Instance-Scoped
//!
//! Every arbitrary-precision value in the workspace is produced under a
//! [`NumericContext`] that the evaluator received at construction. There is
//! no process-wide precision setting: two evaluators built with different
//! precisions can run side by side on different threads without observing
//! each other.
//!
//! ## Sessions
//!
//! `astro-float` keeps a cache of mathematical constants (π, ln 2, …) that
//! must be borrowed mutably by transcendental functions. [`NumericContext`]
//! itself is `Copy` and immutable; each computation opens its own
//! [`Arith`] session through [`NumericContext::session`], which owns a fresh
//! constant cache. Sessions are never shared between computations.

use astro_float::{BigFloat, Consts, RoundingMode};
use num_bigint::BigUint;

use crate::error::{DomainError, E8Error, E8Result};

/// Guard bits added on top of the requested decimal digits.
pub const GUARD_BITS: usize = 32;

/// Lower bound on the binary precision of any session.
pub const MIN_BITS: usize = 64;

/// A positive number of significant decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision(u32);

impl Precision {
    /// Validate a digit count.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Precision` for zero digits.
    pub fn new(digits: u32) -> E8Result<Self> {
        if digits == 0 {
            return Err(E8Error::Precision(
                "precision must be at least one decimal digit".to_string(),
            ));
        }
        Ok(Self(digits))
    }

    /// Significant decimal digits.
    pub fn digits(&self) -> u32 {
        self.0
    }

    /// Binary precision: `ceil(digits · log2 10)` plus guard bits.
    pub fn bits(&self) -> usize {
        // log2(10) ≈ 3.3220, rounded up so the decimal target is always met.
        let mantissa = (self.0 as usize * 33_220).div_ceil(10_000);
        (mantissa + GUARD_BITS).max(MIN_BITS)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} digits", self.0)
    }
}

/// Precision and rounding mode shared by every operation of one evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericContext {
    precision: Precision,
    bits: usize,
    rounding: RoundingMode,
}

impl NumericContext {
    /// Context at the given precision with round-half-to-even.
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            bits: precision.bits(),
            rounding: RoundingMode::ToEven,
        }
    }

    /// Context for a digit count.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Precision` for zero digits.
    pub fn with_digits(digits: u32) -> E8Result<Self> {
        Ok(Self::new(Precision::new(digits)?))
    }

    /// The decimal precision this context was built from.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Binary precision used for every operation.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// A context with `extra` additional bits, for algorithms that lose
    /// precision to cancellation internally.
    pub fn widened(&self, extra: usize) -> Self {
        Self {
            bits: self.bits + extra,
            ..*self
        }
    }

    /// Open an arithmetic session.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Arithmetic` if the constant cache cannot be built.
    pub fn session(&self) -> E8Result<Arith> {
        let cc = Consts::new().map_err(|e| {
            E8Error::Arithmetic(format!("constant cache initialization failed: {e:?}"))
        })?;
        Ok(Arith {
            p: self.bits,
            rm: self.rounding,
            cc,
        })
    }
}

/// One computation's view of the arbitrary-precision backend.
///
/// All arithmetic goes through these methods so the precision and rounding
/// mode can never be omitted.
pub struct Arith {
    p: usize,
    rm: RoundingMode,
    cc: Consts,
}

impl std::fmt::Debug for Arith {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arith")
            .field("bits", &self.p)
            .field("rounding", &self.rm)
            .finish()
    }
}

impl Arith {
    /// Binary precision of this session.
    pub fn bits(&self) -> usize {
        self.p
    }

    pub fn zero(&self) -> BigFloat {
        BigFloat::from_u64(0, self.p)
    }

    pub fn one(&self) -> BigFloat {
        BigFloat::from_u64(1, self.p)
    }

    /// An exact integer.
    pub fn int(&self, v: i64) -> BigFloat {
        BigFloat::from_i64(v, self.p)
    }

    /// An `f64`, converted exactly.
    pub fn float(&self, v: f64) -> BigFloat {
        BigFloat::from_f64(v, self.p)
    }

    /// `num / den` rounded once at session precision.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DivisionByZero` when `den == 0`.
    pub fn ratio(&self, num: i64, den: i64) -> E8Result<BigFloat> {
        self.div(&self.int(num), &self.int(den))
    }

    /// Lift an exact integer, one 64-bit limb at a time.
    pub fn biguint(&self, n: &BigUint) -> BigFloat {
        let radix = self.mul(
            &BigFloat::from_u64(1 << 32, self.p),
            &BigFloat::from_u64(1 << 32, self.p),
        );
        n.to_u64_digits()
            .iter()
            .rev()
            .fold(self.zero(), |acc, limb| {
                self.add(
                    &self.mul(&acc, &radix),
                    &BigFloat::from_u64(*limb, self.p),
                )
            })
    }

    pub fn pi(&mut self) -> BigFloat {
        self.cc.pi(self.p, self.rm)
    }

    /// 2π.
    pub fn tau(&mut self) -> BigFloat {
        let pi = self.pi();
        self.mul(&self.int(2), &pi)
    }

    pub fn add(&self, a: &BigFloat, b: &BigFloat) -> BigFloat {
        a.add(b, self.p, self.rm)
    }

    pub fn sub(&self, a: &BigFloat, b: &BigFloat) -> BigFloat {
        a.sub(b, self.p, self.rm)
    }

    pub fn mul(&self, a: &BigFloat, b: &BigFloat) -> BigFloat {
        a.mul(b, self.p, self.rm)
    }

    /// # Errors
    ///
    /// Returns `DomainError::DivisionByZero` when `b` is zero.
    pub fn div(&self, a: &BigFloat, b: &BigFloat) -> E8Result<BigFloat> {
        if b.is_zero() {
            return Err(DomainError::DivisionByZero {
                context: "real division".to_string(),
            }
            .into());
        }
        Ok(a.div(b, self.p, self.rm))
    }

    pub fn neg(&self, a: &BigFloat) -> BigFloat {
        self.sub(&self.zero(), a)
    }

    pub fn sqrt(&self, a: &BigFloat) -> BigFloat {
        a.sqrt(self.p, self.rm)
    }

    pub fn powi(&self, a: &BigFloat, n: usize) -> BigFloat {
        a.powi(n, self.p, self.rm)
    }

    pub fn exp(&mut self, a: &BigFloat) -> BigFloat {
        a.exp(self.p, self.rm, &mut self.cc)
    }

    /// Natural logarithm of a positive real.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LogarithmOfZero` for zero and
    /// `E8Error::Arithmetic` for negative arguments.
    pub fn ln(&mut self, a: &BigFloat) -> E8Result<BigFloat> {
        if a.is_zero() {
            return Err(DomainError::LogarithmOfZero {
                context: "real logarithm".to_string(),
            }
            .into());
        }
        if a.is_negative() {
            return Err(E8Error::Arithmetic(format!(
                "real logarithm of negative value {a}"
            )));
        }
        Ok(a.ln(self.p, self.rm, &mut self.cc))
    }

    pub fn sin(&mut self, a: &BigFloat) -> BigFloat {
        a.sin(self.p, self.rm, &mut self.cc)
    }

    pub fn cos(&mut self, a: &BigFloat) -> BigFloat {
        a.cos(self.p, self.rm, &mut self.cc)
    }

    pub fn atan(&mut self, a: &BigFloat) -> BigFloat {
        a.atan(self.p, self.rm, &mut self.cc)
    }

    /// Reject NaN and infinities produced by the backend.
    ///
    /// # Errors
    ///
    /// Returns `E8Error::Arithmetic` naming `what`.
    pub fn finite(&self, value: BigFloat, what: &str) -> E8Result<BigFloat> {
        if value.is_nan() || value.is_inf() {
            return Err(E8Error::Arithmetic(format!("{what} is not finite")));
        }
        Ok(value)
    }
}

/// `true` when `a < b`. NaN compares as not-less.
pub fn less_than(a: &BigFloat, b: &BigFloat) -> bool {
    matches!(a.cmp(b), Some(ord) if ord < 0)
}
