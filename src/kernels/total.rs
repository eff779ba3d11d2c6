//! This module contains the pure, stateless kernel for the scalar-sum
//! aggregate.
//!
//! This is the degenerate case of the aggregation pipeline: a chunk's partial
//! result is a single widened sum, and partials merge by plain addition with
//! no positional correction. It exists alongside the compound kernel to show
//! the same machinery at both extremes of merge complexity.

use num_traits::AsPrimitive;

use crate::traits::AggElement;

/// Sums a chunk of elements into a widened `i64` accumulator.
///
/// The slice is treated as self-contained: its position inside any larger
/// sequence is irrelevant to the result. An empty slice sums to zero.
pub fn total<T: AggElement>(chunk: &[T]) -> i64 {
    let mut sum: i64 = 0;
    for &value in chunk {
        sum += value.as_();
    }
    sum
}
