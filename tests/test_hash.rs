/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use hash6432::hash::*;
use hash6432::utils::{mod_inverse, xor_shift, xor_unshift};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_bijectivity() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..1_000_000 {
        let x = rng.random::<u64>();
        assert_eq!(unmix(mix(x)), x);
        assert_eq!(mix(unmix(x)), x);
    }
}

#[test]
fn test_bijectivity_small_values() {
    for x in 0..100_000 {
        assert_eq!(unmix(mix(x)), x);
        assert_eq!(mix(unmix(x)), x);
        assert_eq!(unmix(mix(!x)), !x);
    }
}

#[test]
fn test_exhaustive_reduced_widths() {
    for key_bits in [8, 13, 16, 20] {
        let width = HashWidth::new(key_bits, key_bits / 2);
        let mut seen = vec![false; 1 << key_bits];
        for key in 0..1_u64 << key_bits {
            let x = width.mix(key);
            assert!(!seen[x as usize], "{}: {:x} is mixed twice", width, x);
            seen[x as usize] = true;
            assert_eq!(width.unmix(x), key);
        }
        assert!(seen.iter().all(|&b| b));
    }
}

#[test]
fn test_inverse_constants() {
    assert_eq!(MUL_ADD_SHL.wrapping_mul(INV_MUL_ADD_SHL), 1);
    assert_eq!(MUL.wrapping_mul(INV_MUL), 1);
    assert_eq!(MUL_NOT_SHL.wrapping_mul(INV_MUL_NOT_SHL), 1);
    assert_eq!(65_u64.wrapping_mul(mod_inverse(65)), 1);
    assert_eq!(21_u64.wrapping_mul(mod_inverse(21)), 1);
    assert_eq!(262143_u64.wrapping_mul(mod_inverse(262143)), 1);
}

#[test]
fn test_xor_unshift_steps() {
    let mut rng = SmallRng::seed_from_u64(1);
    for shift in [SHIFT_0, SHIFT_1, SHIFT_2] {
        for _ in 0..100_000 {
            let x = rng.random::<u64>();
            assert_eq!(xor_unshift(xor_shift(x, shift), shift, 64), x);
        }
    }
}

#[test]
fn test_golden() {
    assert_eq!(mix(0), 0xf7e0_0977_2aea_a2ab);
    assert_eq!(truncate(mix(0)), 0x2aea_a2ab);
    assert_eq!(hash(0), 0x2aea_a2ab);
    assert_eq!(hash(0x0123_4567_89AB_CDEF), 0xadfa_ddd7);
    assert_eq!(unmix(0xf7e0_0977_2aea_a2ab), 0);
}

#[test]
fn test_full_width_matches_free_functions() {
    let mut rng = SmallRng::seed_from_u64(2);
    let width = HashWidth::default();
    assert_eq!(width, HashWidth::FULL);
    for _ in 0..10_000 {
        let x = rng.random::<u64>();
        assert_eq!(width.mix(x), mix(x));
        assert_eq!(width.unmix(x), unmix(x));
        assert_eq!(width.hash(x), hash(x));
        assert_eq!(width.truncate(x), truncate(x));
    }
}
