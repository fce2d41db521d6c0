/*
 *
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Utility functions and iterators.

*/

pub mod mod_inv;
pub mod trunc_chunks;
pub mod xor_shift;
pub use crate::utils::mod_inv::*;
pub use crate::utils::trunc_chunks::*;
pub use crate::utils::xor_shift::*;
