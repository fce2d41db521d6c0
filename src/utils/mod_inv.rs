/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Multiplicative inverses modulo 2⁶⁴.
//!
//! The units of ℤ/2⁶⁴ℤ are exactly the odd integers, and every odd `a` has a
//! unique odd inverse. We compute it by Newton's iteration
//!
//! > *x*ᵢ₊₁ = *x*ᵢ (2 − *a* *x*ᵢ),
//!
//! which doubles the number of correct low bits at each step. Since *a*² ≡ 1
//! (mod 8) for every odd *a*, the starting value *x*₀ = *a* is correct on 3
//! bits, so five iterations (3 → 6 → 12 → 24 → 48 → 96) are enough.

/// Returns the multiplicative inverse of `a` modulo 2⁶⁴.
///
/// This is a `const fn`, so it can be used to derive constants at compile
/// time; in that case, an even argument is a compilation error.
///
/// # Panics
///
/// If `a` is even, as even numbers are not invertible modulo 2⁶⁴.
///
/// # Examples
///
/// ```rust
/// use hash6432::utils::mod_inverse;
///
/// let inv = mod_inverse(21);
/// assert_eq!(21_u64.wrapping_mul(inv), 1);
/// ```
#[must_use]
pub const fn mod_inverse(a: u64) -> u64 {
    assert!(a & 1 == 1, "only odd numbers are invertible modulo 2^64");
    let mut x = a;
    let mut i = 0;
    while i < 5 {
        x = x.wrapping_mul(2_u64.wrapping_sub(a.wrapping_mul(x)));
        i += 1;
    }
    x
}

/// Returns the multiplicative inverse of `a` modulo 2⁶⁴, or `None` if `a` is
/// even.
#[must_use]
pub const fn checked_mod_inverse(a: u64) -> Option<u64> {
    if a & 1 == 0 {
        None
    } else {
        Some(mod_inverse(a))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_small() {
        assert_eq!(mod_inverse(1), 1);
        assert_eq!(mod_inverse(u64::MAX), u64::MAX);
        for a in (1..10_000_u64).step_by(2) {
            assert_eq!(a.wrapping_mul(mod_inverse(a)), 1, "a = {}", a);
        }
    }

    #[test]
    fn test_random() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100_000 {
            let a = rng.random::<u64>() | 1;
            let inv = mod_inverse(a);
            assert_eq!(a.wrapping_mul(inv), 1);
            assert_eq!(inv.wrapping_mul(a), 1);
            assert_eq!(mod_inverse(inv), a);
        }
    }

    #[test]
    fn test_even() {
        assert_eq!(checked_mod_inverse(0), None);
        assert_eq!(checked_mod_inverse(64), None);
        assert_eq!(checked_mod_inverse(65), Some(mod_inverse(65)));
    }

    #[test]
    #[should_panic]
    fn test_even_panics() {
        let _ = mod_inverse(262144);
    }
}
