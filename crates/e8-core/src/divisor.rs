//! # Divisor Sums — σ_k(n)
//!
//! `σ_k(n) = Σ_{d | n} d^k`, computed exactly with `BigUint`. Values grow
//! like n^k, so fixed-width integers overflow quickly for the exponents
//! used by the theta and zeta engines.
//!
//! Divisors are enumerated by trial division over `1..=n`, one modulus test
//! per candidate. [`DivisorSumCache`] memoizes results per `(n, k)` for
//! engines that evaluate the same coefficients on every call.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::Zero;
use parking_lot::Mutex;

use crate::error::{DomainError, E8Result};

/// σ_k(n) by trial division.
///
/// # Errors
///
/// Returns `DomainError::NonPositiveDivisorArgument` for `n == 0`.
pub fn sigma_k(n: u64, k: u32) -> E8Result<BigUint> {
    if n == 0 {
        return Err(DomainError::NonPositiveDivisorArgument(0).into());
    }
    let mut total = BigUint::zero();
    for d in 1..=n {
        if n % d == 0 {
            total += BigUint::from(d).pow(k);
        }
    }
    Ok(total)
}

/// Memoizing front end to [`sigma_k`].
///
/// Cached values are the exact `BigUint` that direct evaluation returns.
/// The cache is guarded by a mutex so an evaluator holding one stays
/// `Sync`.
#[derive(Debug, Default)]
pub struct DivisorSumCache {
    entries: Mutex<HashMap<(u64, u32), BigUint>>,
}

impl DivisorSumCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// σ_k(n), computed once per `(n, k)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NonPositiveDivisorArgument` for `n == 0`.
    pub fn get(&self, n: u64, k: u32) -> E8Result<BigUint> {
        if let Some(hit) = self.entries.lock().get(&(n, k)) {
            return Ok(hit.clone());
        }
        let value = sigma_k(n, k)?;
        self.entries.lock().insert((n, k), value.clone());
        Ok(value)
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::E8Error;

    #[test]
    fn sigma3_literal_values() {
        assert_eq!(sigma_k(1, 3).unwrap(), BigUint::from(1u32));
        assert_eq!(sigma_k(2, 3).unwrap(), BigUint::from(9u32));
        assert_eq!(sigma_k(3, 3).unwrap(), BigUint::from(28u32));
        // 1 + 8 + 27 + 64 + 216 + 1728
        assert_eq!(sigma_k(12, 3).unwrap(), BigUint::from(2044u32));
    }

    #[test]
    fn sigma0_counts_divisors() {
        assert_eq!(sigma_k(12, 0).unwrap(), BigUint::from(6u32));
        assert_eq!(sigma_k(97, 0).unwrap(), BigUint::from(2u32));
    }

    #[test]
    fn zero_argument_rejected() {
        assert_eq!(
            sigma_k(0, 3).unwrap_err(),
            E8Error::Domain(DomainError::NonPositiveDivisorArgument(0))
        );
        assert!(DivisorSumCache::new().get(0, 1).is_err());
    }

    #[test]
    fn large_exponent_exceeds_u64() {
        // σ_30(2) = 1 + 2^30 fits, σ_30(10) does not fit in u64.
        let big = sigma_k(10, 30).unwrap();
        assert!(big > BigUint::from(u64::MAX));
        assert_eq!(
            big,
            BigUint::from(1u32)
                + BigUint::from(2u32).pow(30)
                + BigUint::from(5u32).pow(30)
                + BigUint::from(10u32).pow(30)
        );
    }

    #[test]
    fn cache_memoizes() {
        let cache = DivisorSumCache::new();
        assert!(cache.is_empty());
        let first = cache.get(24, 3).unwrap();
        let second = cache.get(24, 3).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }
}
