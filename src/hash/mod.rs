/*
 *
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The 64-to-32-bit shift hash and the inverse of its mixing stage.
//!
//! The hash (see <https://gist.github.com/badboy/6267743>) is the composition
//! of a *mixer*, a bijection of the 64-bit words made of six invertible steps,
//! and of a *truncation* to the lower 32 bits. The mixer can be inverted in
//! closed form ([`unmix`]), so all the information lost by the hash is in the
//! 32 bits discarded by truncation.
//!
//! All functions are also available on reduced widths through [`HashWidth`]:
//! the same steps, computed modulo 2^`key_bits`, are still a bijection, and
//! small widths make exhaustive checks possible.

use core::fmt;

mod inverse;
mod mixer;

pub use inverse::*;
pub use mixer::*;

/// The widths of a key and of its hash.
///
/// Keys have [`key_bits`](HashWidth::key_bits) bits, and hashes are the
/// lower [`hash_bits`](HashWidth::hash_bits) bits of the mixed key. The
/// remaining [`trunc_bits`](HashWidth::trunc_bits) bits are those discarded
/// by truncation.
///
/// The actual hash uses [`HashWidth::FULL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashWidth {
    key_bits: u32,
    hash_bits: u32,
    key_mask: u64,
}

impl HashWidth {
    /// 64-bit keys, 32-bit hashes.
    pub const FULL: Self = Self::new(64, 32);

    /// Creates a new width.
    ///
    /// # Panics
    ///
    /// If `key_bits` is not in [1..64], if `hash_bits` is larger than 32 or
    /// than `key_bits`, or if more than 32 bits are discarded by truncation.
    pub const fn new(key_bits: u32, hash_bits: u32) -> Self {
        assert!(key_bits >= 1 && key_bits <= 64, "key bits must be in [1..64]");
        assert!(hash_bits <= 32, "hash bits must be at most 32");
        assert!(
            hash_bits <= key_bits,
            "hash bits must be at most the key bits"
        );
        assert!(
            key_bits - hash_bits <= 32,
            "at most 32 bits can be discarded by truncation"
        );
        Self {
            key_bits,
            hash_bits,
            key_mask: u64::MAX >> (64 - key_bits),
        }
    }

    /// Returns the number of bits of a key.
    #[inline(always)]
    pub const fn key_bits(&self) -> u32 {
        self.key_bits
    }

    /// Returns the number of bits of a hash.
    #[inline(always)]
    pub const fn hash_bits(&self) -> u32 {
        self.hash_bits
    }

    /// Returns the number of bits discarded by truncation.
    #[inline(always)]
    pub const fn trunc_bits(&self) -> u32 {
        self.key_bits - self.hash_bits
    }

    /// Returns a mask with the lower [`key_bits`](HashWidth::key_bits) bits
    /// set.
    #[inline(always)]
    pub const fn key_mask(&self) -> u64 {
        self.key_mask
    }

    /// Returns the number of possible values of the bits discarded by
    /// truncation, which is also the number of preimages of every hash.
    #[inline(always)]
    pub const fn num_trunc_values(&self) -> u64 {
        1 << self.trunc_bits()
    }

    /// Returns the lower [`hash_bits`](HashWidth::hash_bits) bits of `x`.
    #[inline(always)]
    #[must_use]
    pub const fn truncate(&self, x: u64) -> u32 {
        (x & ((1 << self.hash_bits) - 1)) as u32
    }

    /// Returns the hash of `key`, that is, the truncation of its mix.
    #[inline(always)]
    #[must_use]
    pub const fn hash(&self, key: u64) -> u32 {
        self.truncate(self.mix(key))
    }

    /// Returns the mixed value whose lower bits are `hash` and whose upper
    /// bits (those discarded by truncation) are `trunc`.
    #[inline(always)]
    #[must_use]
    pub const fn compose(&self, hash: u32, trunc: u32) -> u64 {
        (hash as u64 | ((trunc as u64) << self.hash_bits)) & self.key_mask
    }

    /// Splits a mixed value into its hash and its bits discarded by
    /// truncation.
    ///
    /// This is the inverse of [`compose`](HashWidth::compose).
    #[inline(always)]
    #[must_use]
    pub const fn split(&self, x: u64) -> (u32, u32) {
        let x = x & self.key_mask;
        (self.truncate(x), (x >> self.hash_bits) as u32)
    }
}

impl Default for HashWidth {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for HashWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-to-{}-bit shift hash", self.key_bits, self.hash_bits)
    }
}

/// Mixes a 64-bit key.
///
/// This is a bijection of the 64-bit words; its inverse is [`unmix`].
#[inline(always)]
#[must_use]
pub const fn mix(key: u64) -> u64 {
    HashWidth::FULL.mix(key)
}

/// Inverts [`mix`].
#[inline(always)]
#[must_use]
pub const fn unmix(x: u64) -> u64 {
    HashWidth::FULL.unmix(x)
}

/// Returns the lower 32 bits of `x`.
#[inline(always)]
#[must_use]
pub const fn truncate(x: u64) -> u32 {
    x as u32
}

/// Hashes a 64-bit key to 32 bits.
///
/// # Examples
///
/// ```rust
/// use hash6432::hash::{hash, mix, truncate};
///
/// assert_eq!(hash(0), 0x2aea_a2ab);
/// assert_eq!(hash(42), truncate(mix(42)));
/// ```
#[inline(always)]
#[must_use]
pub const fn hash(key: u64) -> u32 {
    truncate(mix(key))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_width() {
        let w = HashWidth::FULL;
        assert_eq!(w.key_bits(), 64);
        assert_eq!(w.hash_bits(), 32);
        assert_eq!(w.trunc_bits(), 32);
        assert_eq!(w.key_mask(), u64::MAX);
        assert_eq!(w.num_trunc_values(), 1 << 32);

        let w = HashWidth::new(16, 8);
        assert_eq!(w.key_mask(), 0xFFFF);
        assert_eq!(w.num_trunc_values(), 256);
        assert_eq!(w.truncate(0x1234), 0x34);
        assert_eq!(w.compose(0x34, 0x12), 0x1234);
        assert_eq!(w.split(0x1234), (0x34, 0x12));
        assert_eq!(w.to_string(), "16-to-8-bit shift hash");
    }

    #[test]
    fn test_compose_full() {
        let w = HashWidth::FULL;
        assert_eq!(w.compose(0x89AB_CDEF, 0x0123_4567), 0x0123_4567_89AB_CDEF);
        assert_eq!(w.split(0x0123_4567_89AB_CDEF), (0x89AB_CDEF, 0x0123_4567));
        assert_eq!(w.truncate(0x0123_4567_89AB_CDEF), truncate(0x0123_4567_89AB_CDEF));
    }

    #[test]
    #[should_panic]
    fn test_too_many_trunc_bits() {
        let _ = HashWidth::new(64, 16);
    }

    #[test]
    #[should_panic]
    fn test_too_many_hash_bits() {
        let _ = HashWidth::new(48, 33);
    }
}
