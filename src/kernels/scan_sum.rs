//! This module contains the pure, stateless kernel for the compound
//! prefix-scan aggregate.
//!
//! For a chunk `a_0, .., a_{n-1}` with running prefix sums
//! `p_i = a_0 + .. + a_i`, the kernel produces `sum = p_{n-1}` together with
//! `scan_sum = p_0 + p_1 + .. + p_{n-1}`. Both are computed as if the chunk
//! started at global offset zero; restoring positional context is the merge
//! reducer's job, never the kernel's. That separation is what lets the same
//! kernel serve the linear path (one whole-sequence chunk) and every worker
//! of the parallel path.

use num_traits::AsPrimitive;

use crate::traits::AggElement;

/// The compound aggregate of one chunk.
///
/// `sum` is the plain element sum; `scan_sum` is the sum of the chunk's
/// running prefix sums. Equality of two aggregates means equality of both
/// fields, which is exactly the comparison the verification oracle performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixAggregate {
    pub sum: i64,
    pub scan_sum: i64,
}

/// Runs the compound scan over one chunk.
///
/// After each element the running element sum is folded into the running
/// scan-sum, so an element at local index `i` contributes `n - i` times to
/// `scan_sum` for a chunk of length `n`. An empty slice yields the zero
/// aggregate.
pub fn scan_sum<T: AggElement>(chunk: &[T]) -> PrefixAggregate {
    let mut agg = PrefixAggregate::default();
    for &value in chunk {
        agg.sum += value.as_();
        agg.scan_sum += agg.sum;
    }
    agg
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_sum_ascending_chunk() {
        // Prefix sums of [1, 2, 3, 4] are [1, 3, 6, 10]; their sum is 20.
        let data: Vec<i32> = vec![1, 2, 3, 4];
        assert_eq!(
            scan_sum(&data),
            PrefixAggregate { sum: 10, scan_sum: 20 }
        );
    }

    #[test]
    fn test_scan_sum_tracks_both_accumulators_stepwise() {
        let data: Vec<i16> = vec![3, -1, 4];
        // Step 1: sum 3, scan 3. Step 2: sum 2, scan 5. Step 3: sum 6, scan 11.
        assert_eq!(
            scan_sum(&data),
            PrefixAggregate { sum: 6, scan_sum: 11 }
        );
    }

    #[test]
    fn test_scan_sum_empty_slice() {
        let data: Vec<i64> = vec![];
        assert_eq!(scan_sum(&data), PrefixAggregate::default());
    }

    #[test]
    fn test_scan_sum_single_element() {
        let data: Vec<i8> = vec![5];
        assert_eq!(scan_sum(&data), PrefixAggregate { sum: 5, scan_sum: 5 });
    }

    #[test]
    fn test_scan_sum_cancelling_elements_still_scan() {
        // Elements cancel to zero, but the intermediate prefix sums do not.
        let data: Vec<i32> = vec![10, -10, 10, -10];
        assert_eq!(
            scan_sum(&data),
            PrefixAggregate { sum: 0, scan_sum: 20 }
        );
    }
}
