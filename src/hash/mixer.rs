/*
 *
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::HashWidth;
use crate::utils::xor_shift;

/// The multiplier equivalent to the first step, `!x + (x << 18)`, up to the
/// subtraction of one: 2¹⁸ − 1.
pub const MUL_NOT_SHL: u64 = (1 << 18) - 1;
/// The multiplier of the third step.
pub const MUL: u64 = 21;
/// The multiplier equivalent to the fifth step, `x + (x << 6)`: 2⁶ + 1.
pub const MUL_ADD_SHL: u64 = (1 << 6) + 1;

/// The shift of the second step.
pub const SHIFT_0: u32 = 31;
/// The shift of the fourth step.
pub const SHIFT_1: u32 = 11;
/// The shift of the sixth step.
pub const SHIFT_2: u32 = 22;

impl HashWidth {
    /// Mixes a key.
    ///
    /// Bits of `key` above [`key_bits`](HashWidth::key_bits) are ignored.
    /// All arithmetic is modulo 2^`key_bits`, and every step is invertible,
    /// so this is a bijection of the keys; its inverse is
    /// [`unmix`](HashWidth::unmix).
    #[inline(always)]
    #[must_use]
    pub const fn mix(&self, key: u64) -> u64 {
        let m = self.key_mask;
        let mut x = key & m;
        x = (!x).wrapping_add(x << 18) & m;
        x = xor_shift(x, SHIFT_0);
        x = x.wrapping_mul(MUL) & m;
        x = xor_shift(x, SHIFT_1);
        x = x.wrapping_add(x << 6) & m;
        x = xor_shift(x, SHIFT_2);
        x
    }
}
