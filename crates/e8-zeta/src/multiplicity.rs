//! # Lattice Vector Multiplicities
//!
//! The number of E8 lattice vectors of squared norm `m`. E8 is even, so odd
//! norms have no vectors; for `m = 2n` the count is the θ_E8 coefficient
//! `240 · σ₃(n)`.

use num_bigint::BigUint;
use num_traits::Zero;

use e8_core::constants::E8_ROOTS;
use e8_core::{sigma_k, DivisorSumCache, E8Result};

/// Vectors of squared norm `m`: `240 · σ₃(m/2)` for even `m ≥ 2`, zero
/// otherwise. `m = 2` gives the 240 roots.
///
/// # Errors
///
/// Never fails for any `m`; the `Result` carries divisor-sum errors, which
/// cannot occur because `m/2 ≥ 1` whenever σ₃ is evaluated.
pub fn e8_root_multiplicity(m: i64) -> E8Result<BigUint> {
    multiplicity_with(m, |n| sigma_k(n, 3))
}

/// [`e8_root_multiplicity`] with σ₃ drawn from a cache.
///
/// # Errors
///
/// As [`e8_root_multiplicity`].
pub fn cached_root_multiplicity(m: i64, cache: &DivisorSumCache) -> E8Result<BigUint> {
    multiplicity_with(m, |n| cache.get(n, 3))
}

fn multiplicity_with(
    m: i64,
    sigma3: impl FnOnce(u64) -> E8Result<BigUint>,
) -> E8Result<BigUint> {
    if m == 2 {
        return Ok(BigUint::from(E8_ROOTS));
    }
    if m <= 0 || m % 2 != 0 {
        return Ok(BigUint::zero());
    }
    let n = (m / 2).unsigned_abs();
    Ok(sigma3(n)? * E8_ROOTS)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn odd_norms_are_empty(k in 0i64..10_000) {
            prop_assert!(e8_root_multiplicity(2 * k + 1).unwrap().is_zero());
        }

        #[test]
        fn even_norms_are_multiples_of_240(n in 1i64..2_000) {
            let m = e8_root_multiplicity(2 * n).unwrap();
            prop_assert!(!m.is_zero());
            prop_assert!((m % 240u32).is_zero());
        }
    }
}
