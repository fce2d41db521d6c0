/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Right XOR-shifts and their inverses on words of a given bit width.

/// Returns `x ^ (x >> shift)`.
///
/// `shift` must be smaller than 64.
#[inline(always)]
#[must_use]
pub const fn xor_shift(x: u64, shift: u32) -> u64 {
    x ^ (x >> shift)
}

/// Inverts [`xor_shift`] on values of `width` bits.
///
/// If *y* = *x* ⊕ (*x* ≫ *s*), then *y* ⊕ (*y* ≫ *s*) = *x* ⊕ (*x* ≫ 2*s*),
/// so XOR-shifting again by *s*, 2*s*, 4*s*, … pushes the unknown term out
/// of the word. We stop as soon as the shift reaches `width`, since at that
/// point the shifted value is zero.
///
/// For 64-bit words this amounts to shifts 11, 22, 44 for *s* = 11, to
/// shifts 22, 44 for *s* = 22, and to shifts 31, 62 for *s* = 31.
///
/// # Panics
///
/// If `shift` is zero or `width` is larger than 64.
///
/// # Examples
///
/// ```rust
/// use hash6432::utils::{xor_shift, xor_unshift};
///
/// let x = 0x0123_4567_89AB_CDEF;
/// assert_eq!(xor_unshift(xor_shift(x, 11), 11, 64), x);
/// ```
#[inline(always)]
#[must_use]
pub const fn xor_unshift(mut x: u64, shift: u32, width: u32) -> u64 {
    assert!(shift != 0);
    assert!(width <= 64);
    let mut s = shift;
    while s < width {
        x ^= x >> s;
        s *= 2;
    }
    x
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_unshift() {
        let mut rng = SmallRng::seed_from_u64(0);
        for shift in 1..64 {
            for _ in 0..1000 {
                let x = rng.random::<u64>();
                assert_eq!(xor_unshift(xor_shift(x, shift), shift, 64), x);
                assert_eq!(xor_shift(xor_unshift(x, shift, 64), shift), x);
            }
        }
    }

    #[test]
    fn test_narrow() {
        for width in 1..=12 {
            for shift in 1..16 {
                for x in 0..1_u64 << width {
                    let y = xor_shift(x, shift);
                    assert!(y < 1 << width);
                    assert_eq!(xor_unshift(y, shift, width), x);
                }
            }
        }
    }
}
