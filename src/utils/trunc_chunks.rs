/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::ops::Range;

/// An iterator over contiguous ranges of approximately the same length
/// covering `0..n`.
///
/// At most `2^log2_chunks` ranges are returned; all of them have length
/// ⌈*n* / 2^`log2_chunks`⌉ except possibly the last one, and none of them is
/// empty. If *n* is zero, no range is returned.
///
/// # Example
///
/// ```rust
/// use hash6432::utils::TruncChunks;
///
/// assert_eq!(
///     TruncChunks::new(10, 2).collect::<Vec<_>>(),
///     vec![0..3, 3..6, 6..9, 9..10],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TruncChunks {
    /// The length of each chunk (but possibly the last one).
    step: u64,
    /// The start of the next chunk.
    start: u64,
    /// The end of the covered range.
    end: u64,
}

impl TruncChunks {
    /// Creates a new iterator splitting `0..n` into at most
    /// `2^log2_chunks` ranges.
    ///
    /// # Panics
    ///
    /// If `log2_chunks` is larger than 63.
    pub fn new(n: u64, log2_chunks: u32) -> Self {
        assert!(log2_chunks < 64, "too many chunks: 2^{}", log2_chunks);
        Self {
            step: n.div_ceil(1 << log2_chunks).max(1),
            start: 0,
            end: n,
        }
    }
}

impl Iterator for TruncChunks {
    type Item = Range<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let start = self.start;
        self.start = self.end.min(start.saturating_add(self.step));
        Some(start..self.start)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.end - self.start).div_ceil(self.step) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for TruncChunks {}

impl core::iter::FusedIterator for TruncChunks {}
