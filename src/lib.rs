/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unconditional_recursion)]

pub mod hash;
pub mod preimage;
pub mod utils;

pub mod prelude {
    pub use crate::hash::{hash, mix, truncate, unmix, HashWidth};
    pub use crate::preimage::*;
}

/// Initializes the `env_logger` logger with a custom format including
/// timestamps with elapsed time since initialization.
///
/// The default level is `info`; it can be changed with the `RUST_LOG`
/// environment variable.
pub fn init_env_logger() -> anyhow::Result<()> {
    use std::io::Write;
    use std::time::Instant;

    let start = Instant::now();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let elapsed = start.elapsed();
            writeln!(
                buf,
                "[{}.{:03}s {} {}] {}",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}
