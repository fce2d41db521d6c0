/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::io::{BufWriter, Write};
use std::num::ParseIntError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::*;
use hash6432::{init_env_logger, prelude::*};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(about = "Enumerates all 64-bit keys having the same 64-to-32-bit shift hash as a given (or random) key.", long_about = None)]
struct Args {
    /// Use this key (in hexadecimal) instead of a random one.
    #[arg(short, long, value_parser = parse_u64)]
    key: Option<u64>,
    /// Enumerate the preimages of this hash (in hexadecimal) instead of the
    /// preimages of the hash of a key.
    #[arg(long, value_parser = parse_u32, conflicts_with = "key")]
    hash: Option<u32>,
    /// A 64-bit seed for the pseudorandom number generator.
    #[arg(long, conflicts_with_all = ["key", "hash"])]
    seed: Option<u64>,
    /// Use this number of threads; preimages will be printed in no
    /// particular order.
    #[arg(short, long)]
    threads: Option<usize>,
    /// Stop after printing this number of preimages.
    #[arg(short, long)]
    limit: Option<u64>,
    /// Print just the number of preimages.
    #[arg(short, long, conflicts_with = "limit")]
    count: bool,
}

fn parse_u64(s: &str) -> Result<u64, ParseIntError> {
    u64::from_str_radix(s.trim_start_matches("0x"), 16)
}

fn parse_u32(s: &str) -> Result<u32, ParseIntError> {
    u32::from_str_radix(s.trim_start_matches("0x"), 16)
}

/// Why a parallel visit stopped early.
#[derive(Debug)]
enum Stop {
    Limit,
    Io(std::io::Error),
}

impl std::fmt::Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stop::Limit => write!(f, "limit reached"),
            Stop::Io(e) => write!(f, "{}", e),
        }
    }
}

fn fail(out: &mut impl Write, err: PreimageError) -> ! {
    let _ = out.flush();
    eprintln!("FAIL: {}", err);
    std::process::exit(1);
}

fn main() -> Result<()> {
    init_env_logger()?;

    let args = Args::parse();

    let (key, target) = match (args.hash, args.key) {
        (Some(target), _) => (None, target),
        (None, Some(key)) => (Some(key), hash(key)),
        (None, None) => {
            let mut rng = match args.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            let key = rng.random::<u64>();
            (Some(key), hash(key))
        }
    };
    let set = PreimageSet::new(target);

    let mut pl = ProgressLogger::default();

    if args.count {
        let count = match args.threads {
            Some(threads) => {
                match ParPreimages::default()
                    .max_num_threads(threads)
                    .count(&set, &mut pl)
                {
                    Ok(count) => count,
                    Err(ParError::Preimage(err)) => fail(&mut std::io::stdout(), err),
                    Err(err) => return Err(err.into()),
                }
            }
            None => {
                pl.item_name("candidate")
                    .expected_updates(usize::try_from(set.num_candidates()).ok())
                    .start(format!("Counting preimages of {:08x}...", target));
                let mut count = 0_u64;
                for preimage in &set {
                    if let Err(err) = preimage {
                        fail(&mut std::io::stdout(), err);
                    }
                    count += 1;
                    pl.light_update();
                }
                pl.done();
                count
            }
        };
        println!("{}", count);
        return Ok(());
    }

    let mut out = BufWriter::new(std::io::stdout());
    writeln!(out, "Target:")?;
    match key {
        Some(key) => writeln!(out, "{:016x} -> {:08x}\n", key, target)?,
        None => writeln!(out, "{:08x}\n", target)?,
    }
    writeln!(out, "Preimages:")?;

    let limit = args.limit.unwrap_or(u64::MAX);

    match args.threads {
        None => {
            pl.item_name("preimage")
                .expected_updates(usize::try_from(set.num_candidates().min(limit)).ok())
                .start(format!("Enumerating preimages of {:08x}...", target));
            for preimage in set.iter().take(usize::try_from(limit).unwrap_or(usize::MAX)) {
                match preimage {
                    Ok(preimage) => writeln!(out, "{:016x} -> {:08x}", preimage, hash(preimage))?,
                    Err(err) => fail(&mut out, err),
                }
                pl.light_update();
            }
            pl.done();
            out.flush()?;
        }
        Some(threads) => {
            let printed = AtomicU64::new(0);
            let out = Mutex::new(out);
            let result = ParPreimages::default().max_num_threads(threads).try_for_each(
                &set,
                |preimage| {
                    if printed.fetch_add(1, Ordering::Relaxed) >= limit {
                        return Err(Stop::Limit);
                    }
                    let mut out = out.lock().unwrap_or_else(|e| e.into_inner());
                    writeln!(out, "{:016x} -> {:08x}", preimage, hash(preimage)).map_err(Stop::Io)
                },
                &mut pl,
            );
            let mut out = out.into_inner().unwrap_or_else(|e| e.into_inner());
            match result {
                Ok(()) | Err(ParError::Visitor(Stop::Limit)) => out.flush()?,
                Err(ParError::Preimage(err)) => fail(&mut out, err),
                Err(ParError::Visitor(Stop::Io(err))) => return Err(err.into()),
                Err(ParError::ThreadPool(err)) => return Err(err.into()),
            }
        }
    }

    Ok(())
}
