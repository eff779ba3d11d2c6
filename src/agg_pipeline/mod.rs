// In: src/agg_pipeline/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Aggregation Pipeline
// ====================================================================================
//
// This module is the computational core of parfold. It produces one aggregate
// two different ways and exposes both as pure functions over `&[T]`:
//
//   Linear path:    data ----------------------------> kernel --> aggregate
//
//   Parallel path:  data --> partition planner --> fan-out executor
//                              (K equal chunks)     (kernel per chunk)
//                                                        |
//                                     ordered partials   v
//                              merge reducer <-- [R_0, R_1, .., R_{K-1}]
//                                    |
//                                    v
//                                 aggregate
//
// The linear path is the trusted reference: one kernel invocation over the
// whole sequence. The parallel path must land on the bit-identical value,
// and everything in this module is arranged to make that provable: the
// planner's cover is exact, the executor's output is chunk-ordered, and the
// merge fold re-creates the positional context the kernels never saw.
//
// Nothing here measures, compares, or prints. That belongs to the harness
// layer, which drives both paths and judges the results.
// ====================================================================================

pub mod executor;
pub mod merge;
pub mod partition;


use crate::config::ExecutorKind;
use crate::error::ParfoldError;
use crate::kernels::scan_sum::{scan_sum, PrefixAggregate};
use crate::kernels::total::total;
use crate::traits::AggElement;

//==================================================================================
// 1. Linear Reference Path
//==================================================================================

/// The compound aggregate of the whole sequence in one sequential pass.
pub fn linear_scan_sum<T: AggElement>(data: &[T]) -> PrefixAggregate {
    scan_sum(data)
}

/// The element sum of the whole sequence in one sequential pass.
pub fn linear_total<T: AggElement>(data: &[T]) -> i64 {
    total(data)
}

//==================================================================================
// 2. Partitioned Parallel Path
//==================================================================================

/// The compound aggregate via plan, fan-out, and offset-corrected merge.
///
/// `partitions` must divide `data.len()` exactly; the planner rejects
/// anything else before a single worker starts.
pub fn parallel_scan_sum<T: AggElement>(
    data: &[T],
    partitions: usize,
    kind: ExecutorKind,
) -> Result<PrefixAggregate, ParfoldError> {
    let plan = partition::plan_partitions(data.len(), partitions)?;
    let partials = executor::run_ordered(kind, data, &plan.ranges, scan_sum)?;
    Ok(merge::merge_scan_sums(&partials, plan.chunk_len))
}

/// The element sum via the same plan and fan-out, merged by plain addition.
pub fn parallel_total<T: AggElement>(
    data: &[T],
    partitions: usize,
    kind: ExecutorKind,
) -> Result<i64, ParfoldError> {
    let plan = partition::plan_partitions(data.len(), partitions)?;
    let partials = executor::run_ordered(kind, data, &plan.ranges, total)?;
    Ok(merge::merge_totals(&partials))
}
