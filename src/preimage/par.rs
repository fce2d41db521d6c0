/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{PreimageError, PreimageSet};
use crate::utils::TruncChunks;
use derivative::Derivative;
use derive_setters::*;
use dsi_progress_logger::*;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// A parallel visitor of the preimages of a hash.
///
/// The candidates (i.e., the possible values of the bits discarded by
/// truncation) are split into at most `2^log2_chunks` ranges of equal length
/// (see [`TruncChunks`]), which
/// are enumerated in parallel by a dedicated thread pool. No order is
/// guaranteed on the preimages.
///
/// # Examples
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use dsi_progress_logger::no_logging;
/// use hash6432::prelude::*;
///
/// let set = PreimageSet::with_width(HashWidth::new(40, 20), 0xBEEF);
/// let count = ParPreimages::default()
///     .max_num_threads(4)
///     .count(&set, no_logging![])?;
/// assert_eq!(count, 1 << 20);
/// #     Ok(())
/// # }
/// ```
#[derive(Setters, Debug, Derivative)]
#[derivative(Default)]
#[setters(generate = false)]
pub struct ParPreimages {
    /// The maximum number of parallel threads to use. The default is 8.
    #[setters(generate = true)]
    #[derivative(Default(value = "8"))]
    max_num_threads: usize,

    /// The base-2 logarithm of the number of ranges of candidates. The
    /// default is 10.
    ///
    /// Each range is the unit of work of a thread, and the progress logger
    /// is updated once per range.
    #[setters(generate = true)]
    #[derivative(Default(value = "10"))]
    log2_chunks: u32,
}

/// Errors of a parallel visit.
#[derive(thiserror::Error, Debug)]
pub enum ParError<E> {
    #[error(transparent)]
    /// A candidate did not hash to the target.
    Preimage(#[from] PreimageError),
    #[error("Visit interrupted: {0}")]
    /// The visitor returned an error.
    Visitor(E),
    #[error(transparent)]
    /// The thread pool could not be built.
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ParPreimages {
    /// Visits in parallel all the preimages in `set`.
    ///
    /// The visit stops as soon as possible if a candidate fails verification
    /// or if `visitor` returns an error; in both cases, the first error is
    /// returned.
    ///
    /// # Arguments
    ///
    /// * `set`: the set of preimages to visit.
    ///
    /// * `visitor`: a function that will be called on each preimage.
    ///
    /// * `pl`: a progress logger; a concurrent version of it will be updated
    ///   with the number of candidates examined.
    pub fn try_for_each<E: Send, P: ProgressLog>(
        &self,
        set: &PreimageSet,
        visitor: impl Fn(u64) -> Result<(), E> + Send + Sync,
        pl: &mut P,
    ) -> Result<(), ParError<E>>
    where
        P::Concurrent: Send + Sync,
    {
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(self.max_num_threads)
            .build()?;

        pl.info(format_args!(
            "{}, {} candidates, number of threads: {}",
            set.width(),
            set.num_candidates(),
            thread_pool.current_num_threads()
        ));

        let mut main_pl = pl.concurrent();
        main_pl
            .item_name("candidate")
            .expected_updates(usize::try_from(set.num_candidates()).ok())
            .start(format!("Enumerating preimages of {:08x}...", set.hash()));

        let stop = AtomicBool::new(false);
        let chunks = TruncChunks::new(set.num_candidates(), self.log2_chunks).collect::<Vec<_>>();
        log::debug!(
            "{} ranges of at most {} candidates",
            chunks.len(),
            chunks.first().map_or(0, |r| r.end - r.start)
        );

        let result = thread_pool.install(|| {
            chunks.into_par_iter().try_for_each_with(
                main_pl.clone(),
                |main_pl, range| -> Result<(), ParError<E>> {
                    let len = range.end - range.start;
                    for candidate in set.iter_range(range) {
                        if stop.load(Ordering::Relaxed) {
                            // Someone else is returning an error
                            return Ok(());
                        }
                        let key =
                            candidate.inspect_err(|_| stop.store(true, Ordering::Relaxed))?;
                        visitor(key).map_err(|e| {
                            stop.store(true, Ordering::Relaxed);
                            ParError::Visitor(e)
                        })?;
                    }
                    main_pl.update_with_count(len as usize);
                    Ok(())
                },
            )
        });

        main_pl.done();
        result
    }

    /// Counts in parallel the preimages in `set`.
    ///
    /// Since every candidate is verified, the result is the number of
    /// candidates unless an error is returned.
    pub fn count<P: ProgressLog>(
        &self,
        set: &PreimageSet,
        pl: &mut P,
    ) -> Result<u64, ParError<Infallible>>
    where
        P::Concurrent: Send + Sync,
    {
        let count = AtomicU64::new(0);
        self.try_for_each(
            set,
            |_| {
                count.fetch_add(1, Ordering::Relaxed);
                Ok::<_, Infallible>(())
            },
            pl,
        )?;
        Ok(count.into_inner())
    }
}
