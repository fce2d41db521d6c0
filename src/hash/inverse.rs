/*
 *
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::mixer::*;
use super::HashWidth;
use crate::utils::{mod_inverse, xor_unshift};

/// The inverse of [`MUL_NOT_SHL`] modulo 2⁶⁴.
pub const INV_MUL_NOT_SHL: u64 = mod_inverse(MUL_NOT_SHL);
/// The inverse of [`MUL`] modulo 2⁶⁴.
pub const INV_MUL: u64 = mod_inverse(MUL);
/// The inverse of [`MUL_ADD_SHL`] modulo 2⁶⁴.
pub const INV_MUL_ADD_SHL: u64 = mod_inverse(MUL_ADD_SHL);

const _: () = assert!(MUL_NOT_SHL.wrapping_mul(INV_MUL_NOT_SHL) == 1);
const _: () = assert!(MUL.wrapping_mul(INV_MUL) == 1);
const _: () = assert!(MUL_ADD_SHL.wrapping_mul(INV_MUL_ADD_SHL) == 1);

impl HashWidth {
    /// Inverts [`mix`](HashWidth::mix).
    ///
    /// The steps of the mixer are undone in reverse order: XOR-shifts are
    /// inverted by [`xor_unshift`], and multiplications by odd constants are
    /// inverted by multiplying by their inverse. Since inverses modulo 2⁶⁴
    /// are also inverses modulo every smaller power of two, the same
    /// constants work for every width.
    ///
    /// Bits of `x` above [`key_bits`](HashWidth::key_bits) are ignored.
    #[inline(always)]
    #[must_use]
    pub const fn unmix(&self, x: u64) -> u64 {
        let m = self.key_mask;
        let w = self.key_bits;
        let mut x = x & m;
        x = xor_unshift(x, SHIFT_2, w);
        x = x.wrapping_mul(INV_MUL_ADD_SHL) & m;
        x = xor_unshift(x, SHIFT_1, w);
        x = x.wrapping_mul(INV_MUL) & m;
        x = xor_unshift(x, SHIFT_0, w);
        // !x + (x << 18) = x * MUL_NOT_SHL - 1
        x = x.wrapping_add(1).wrapping_mul(INV_MUL_NOT_SHL) & m;
        x
    }
}
