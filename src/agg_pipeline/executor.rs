// In: src/agg_pipeline/executor.rs

//! The fan-out/fan-in executor for the parallel aggregation path.
//!
//! The executor owns exactly one concern: run a kernel once per planned
//! chunk, each invocation on its own unit of concurrency, and hand the
//! partial results back in chunk-index order. Completion order is never
//! allowed to leak into result order. The merge reducer's offset correction
//! is positional, so an executor that collected "fastest first" would
//! produce values that look plausible and are silently wrong.
//!
//! Two backends satisfy the same contract:
//! 1. [`ExecutorKind::ScopedThreads`]: one scoped OS thread per chunk, each
//!    writing into a uniquely owned result slot.
//! 2. [`ExecutorKind::RayonPool`]: the chunk list mapped over rayon's global
//!    work-stealing pool; the indexed collect supplies the ordering.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

use rayon::prelude::*;

use crate::agg_pipeline::partition::ChunkRange;
use crate::config::ExecutorKind;
use crate::error::ParfoldError;

//==================================================================================
// 1. Public Entry Point
//==================================================================================

/// Runs `kernel` once per range and returns the partial results in
/// chunk-index order: `results[i]` is the kernel's output for `ranges[i]`.
///
/// This is a full fan-out/fan-in barrier. The call returns only after every
/// worker has finished, and a panicking kernel poisons the whole pass: it
/// surfaces as [`ParfoldError::WorkerPanic`] and no partial results escape.
pub fn run_ordered<T, R, F>(
    kind: ExecutorKind,
    data: &[T],
    ranges: &[ChunkRange],
    kernel: F,
) -> Result<Vec<R>, ParfoldError>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync,
{
    check_ranges(data.len(), ranges)?;
    log::debug!(
        "fanning out {} chunks on the {:?} backend",
        ranges.len(),
        kind
    );
    match kind {
        ExecutorKind::ScopedThreads => run_scoped(data, ranges, &kernel),
        ExecutorKind::RayonPool => run_pooled(data, ranges, &kernel),
    }
}

/// Ranges come from the planner, but the executor re-checks them against the
/// slice it was actually given. A stale or foreign plan is a logic bug, not
/// a worker crash.
fn check_ranges(length: usize, ranges: &[ChunkRange]) -> Result<(), ParfoldError> {
    for (chunk, range) in ranges.iter().enumerate() {
        if range.start > range.end || range.end >= length {
            return Err(ParfoldError::InternalError(format!(
                "chunk {} range {}..={} does not fit a sequence of length {}",
                chunk, range.start, range.end, length
            )));
        }
    }
    Ok(())
}

//==================================================================================
// 2. Backend: One Scoped Thread Per Chunk
//==================================================================================

/// The literal reading of "one concurrency unit per chunk": every chunk gets
/// its own scoped thread and a `&mut` into exactly one result slot, so the
/// slot index, not the finish time, decides where a partial result lands.
fn run_scoped<T, R, F>(
    data: &[T],
    ranges: &[ChunkRange],
    kernel: &F,
) -> Result<Vec<R>, ParfoldError>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync,
{
    let mut slots: Vec<Option<R>> = Vec::with_capacity(ranges.len());
    slots.resize_with(ranges.len(), || None);

    let mut panicked: Option<usize> = None;
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(ranges.len());
        for (range, slot) in ranges.iter().zip(slots.iter_mut()) {
            handles.push(scope.spawn(move || {
                *slot = Some(kernel(&data[range.start..=range.end]));
            }));
        }
        // Join every worker before reporting anything, so the barrier holds
        // even when a chunk fails. The lowest-indexed panic wins.
        for (chunk, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(chunk);
            }
        }
    });
    if let Some(chunk) = panicked {
        return Err(ParfoldError::WorkerPanic { chunk });
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(chunk, slot)| {
            slot.ok_or_else(|| {
                ParfoldError::InternalError(format!("result slot {} was never written", chunk))
            })
        })
        .collect()
}

//==================================================================================
// 3. Backend: Rayon Work-Stealing Pool
//==================================================================================

/// Chunk tasks on rayon's global pool. `par_iter` over the range list is
/// indexed, so the collected vector is in chunk order no matter which worker
/// ran which task. Panics are caught per task and converted into the same
/// typed error as the scoped backend; when several chunks panic, which one
/// gets named is unspecified.
fn run_pooled<T, R, F>(
    data: &[T],
    ranges: &[ChunkRange],
    kernel: &F,
) -> Result<Vec<R>, ParfoldError>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync,
{
    ranges
        .par_iter()
        .enumerate()
        .map(|(chunk, range)| {
            catch_unwind(AssertUnwindSafe(|| kernel(&data[range.start..=range.end])))
                .map_err(|_| ParfoldError::WorkerPanic { chunk })
        })
        .collect()
}
