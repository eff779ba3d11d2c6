// In: src/agg_pipeline/partition.rs

//! The deterministic partition planner for parfold.
//!
//! This module is the "dumb" front half of the parallel path: it turns a
//! sequence length and a chunk count into an ordered cover of equal,
//! contiguous, non-overlapping index ranges. It operates on lengths only and
//! never touches element data, which keeps planning trivially cheap and
//! makes its output independent of everything except `(length, partitions)`.
//!
//! Equal-split is a hard precondition, not a preference: a length that does
//! not divide exactly is rejected outright rather than rounded, because the
//! merge reducer's offset correction assumes every chunk has the same length.

use crate::error::ParfoldError;

//==================================================================================
// 1. Plan Data Model
//==================================================================================

/// One contiguous span of the sequence's index space, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub start: usize,
    pub end: usize,
}

impl ChunkRange {
    /// Number of indices covered by the range.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Inclusive bounds cannot express an empty span.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// The planner's output: the ordered chunk cover plus the common chunk length.
///
/// `ranges[i]` is chunk `i`; the vector's order is the positional order the
/// executor and merge reducer both rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    /// Length shared by every chunk (`length / partitions`).
    pub chunk_len: usize,
    /// Ascending, gap-free, non-overlapping cover of `0..length`.
    pub ranges: Vec<ChunkRange>,
}

impl PartitionPlan {
    pub fn partitions(&self) -> usize {
        self.ranges.len()
    }
}

//==================================================================================
// 2. Planning
//==================================================================================

/// Splits the index space `0..length` into `partitions` equal contiguous
/// inclusive ranges.
///
/// Preconditions: `length >= 1`, `partitions >= 1`, and
/// `length % partitions == 0`. Violations are [`ParfoldError::InvalidPartitioning`];
/// the planner never produces a partial or rounded plan.
pub fn plan_partitions(length: usize, partitions: usize) -> Result<PartitionPlan, ParfoldError> {
    if length == 0 || partitions == 0 || length % partitions != 0 {
        return Err(ParfoldError::InvalidPartitioning { length, partitions });
    }

    let chunk_len = length / partitions;
    let mut ranges = Vec::with_capacity(partitions);
    for chunk in 0..partitions {
        ranges.push(ChunkRange {
            start: chunk * chunk_len,
            end: (chunk + 1) * chunk_len - 1,
        });
    }

    log::debug!(
        "planned {} chunks of {} elements over length {}",
        partitions,
        chunk_len,
        length
    );
    Ok(PartitionPlan { chunk_len, ranges })
}
