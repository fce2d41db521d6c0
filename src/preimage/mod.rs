/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Enumeration of the preimages of a hash.
//!
//! Since the mixer is a bijection, a hash *h* determines a mixed value once
//! we fix the bits discarded by truncation; inverting the mixer then yields
//! the unique key with that mixed value. Enumerating all possible values of
//! the discarded bits yields thus exactly all the preimages of *h*: 2³² keys
//! for the actual hash.
//!
//! Every candidate is checked by hashing it again. A mismatch can only be
//! caused by an incorrect inversion, and it is reported as a
//! [`PreimageError::InverseMismatch`].
//!
//! # Examples
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use hash6432::prelude::*;
//!
//! let key = 0x0123_4567_89AB_CDEF;
//! let set = PreimageSet::new(hash(key));
//! // The discarded bits of the mixed key tell us where to look
//! let trunc = mix(key) >> 32;
//! for preimage in set.iter_range(trunc..trunc + 1) {
//!     assert_eq!(preimage?, key);
//! }
//! # Ok(())
//! # }
//! ```

use crate::hash::HashWidth;
use core::iter::FusedIterator;
use core::ops::Range;

#[cfg(feature = "rayon")]
mod par;
#[cfg(feature = "rayon")]
pub use par::*;

/// Errors detected during the enumeration of preimages.
///
/// These errors are never expected: they signal a defect in the inversion of
/// the mixer, and enumeration cannot continue.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreimageError {
    #[error(
        "H({candidate:016x}) = {actual:08x}, but expected {expected:08x} (trunc={trunc:08x})"
    )]
    /// The candidate obtained by inversion does not hash to the target.
    InverseMismatch {
        /// The bits discarded by truncation used to build the candidate.
        trunc: u32,
        /// The candidate key.
        candidate: u64,
        /// The target hash.
        expected: u32,
        /// The hash of the candidate.
        actual: u32,
    },
}

/// The set of preimages of a hash.
///
/// This structure is just a description of the set: preimages are computed
/// lazily by the iterators returned by [`iter`](PreimageSet::iter) and
/// [`iter_range`](PreimageSet::iter_range), or visited in parallel by a
/// [`ParPreimages`] visitor. Iteration can be restarted at will and abandoned
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreimageSet {
    width: HashWidth,
    hash: u32,
}

impl PreimageSet {
    /// Creates the set of preimages of `hash` under the actual hash.
    pub fn new(hash: u32) -> Self {
        Self::with_width(HashWidth::FULL, hash)
    }

    /// Creates the set of preimages of `hash` for a given width.
    ///
    /// # Panics
    ///
    /// If `hash` does not fit the hash bits of `width`.
    pub fn with_width(width: HashWidth, hash: u32) -> Self {
        assert_eq!(
            width.truncate(hash as u64),
            hash,
            "hash {:x} does not fit in {} bits",
            hash,
            width.hash_bits()
        );
        Self { width, hash }
    }

    /// Creates a set whose hash might not fit `width`: candidates then do
    /// not hash to the target, as with a broken inversion.
    #[cfg(test)]
    pub(crate) fn with_width_unchecked(width: HashWidth, hash: u32) -> Self {
        Self { width, hash }
    }

    /// Returns the width of keys and hashes.
    pub fn width(&self) -> HashWidth {
        self.width
    }

    /// Returns the hash whose preimages are enumerated.
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// Returns the number of candidates, which, since the mixer is a
    /// bijection, is also the number of preimages.
    pub fn num_candidates(&self) -> u64 {
        self.width.num_trunc_values()
    }

    /// Returns the preimage whose mixed value has the given discarded bits.
    ///
    /// # Errors
    ///
    /// [`PreimageError::InverseMismatch`] if the candidate does not hash to
    /// the target hash.
    #[inline]
    pub fn candidate(&self, trunc: u32) -> Result<u64, PreimageError> {
        let candidate = self.width.unmix(self.width.compose(self.hash, trunc));
        let actual = self.width.hash(candidate);
        if actual != self.hash {
            return Err(PreimageError::InverseMismatch {
                trunc,
                candidate,
                expected: self.hash,
                actual,
            });
        }
        Ok(candidate)
    }

    /// Returns an iterator over all the preimages, in increasing order of the
    /// discarded bits of their mixed value.
    pub fn iter(&self) -> Preimages {
        self.iter_range(0..self.num_candidates())
    }

    /// Returns an iterator over the preimages whose mixed value has the
    /// discarded bits in `range`.
    ///
    /// # Panics
    ///
    /// If `range.end` is larger than
    /// [`num_candidates`](PreimageSet::num_candidates). As with [`Range`],
    /// a range whose start is not smaller than its end is empty.
    pub fn iter_range(&self, range: Range<u64>) -> Preimages {
        assert!(
            range.end <= self.num_candidates(),
            "range end {} is larger than the number of candidates {}",
            range.end,
            self.num_candidates()
        );
        Preimages {
            set: *self,
            trunc: range,
            failed: false,
        }
    }
}

impl HashWidth {
    /// Returns the set of preimages of `hash` for this width.
    ///
    /// # Panics
    ///
    /// If `hash` does not fit the hash bits.
    pub fn preimages(&self, hash: u32) -> PreimageSet {
        PreimageSet::with_width(*self, hash)
    }
}

impl IntoIterator for PreimageSet {
    type Item = Result<u64, PreimageError>;
    type IntoIter = Preimages;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PreimageSet {
    type Item = Result<u64, PreimageError>;
    type IntoIter = Preimages;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over (a subset of) the preimages of a hash.
///
/// See [`PreimageSet::iter`]. After returning an error the iterator is
/// exhausted.
#[derive(Debug, Clone)]
pub struct Preimages {
    set: PreimageSet,
    trunc: Range<u64>,
    failed: bool,
}

impl Preimages {
    /// Returns the number of candidates yet to be examined.
    pub fn remaining(&self) -> u64 {
        if self.failed {
            0
        } else {
            self.trunc.end.saturating_sub(self.trunc.start)
        }
    }
}

impl Iterator for Preimages {
    type Item = Result<u64, PreimageError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let trunc = self.trunc.next()?;
        let result = self.set.candidate(trunc as u32);
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).ok();
        // An error ends the iteration, so only one more item is certain
        (remaining.map_or(0, |r| r.min(1)), remaining)
    }
}

impl FusedIterator for Preimages {}
