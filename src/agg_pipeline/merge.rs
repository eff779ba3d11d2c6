// In: src/agg_pipeline/merge.rs

//! The merge reducers: sequential folds from chunk-ordered partial results
//! to the global aggregate.
//!
//! Merging is deliberately cheap and single-threaded. The fan-out already
//! paid the parallel cost; what remains is a K-step fold whose only subtlety
//! is positional. Every kernel computed its chunk as if the world started at
//! its own first element, so the compound merge has to re-introduce the
//! context each chunk was blind to: the element sum of everything before it.

use crate::kernels::scan_sum::PrefixAggregate;

/// Merges scalar-sum partials. Addition is associative and commutative, so
/// this is the degenerate fold with no ordering requirement.
pub fn merge_totals(partials: &[i64]) -> i64 {
    partials.iter().sum()
}

/// Merges compound partials computed over equal-length chunks.
///
/// Chunk `i` produced its local `scan_sum` assuming a running element sum of
/// zero at its start; globally that running sum is `X`, the element total of
/// chunks `0..i`. Shifting the start by `X` shifts each of the chunk's
/// `chunk_len` prefix sums by `X`, so the chunk's true contribution is
/// `scan_sum + X * chunk_len`.
///
/// The fold walks chunks strictly in ascending index order and corrects with
/// the running sum *before* folding the chunk's own `sum` into it. Either
/// reordering the walk or swapping those two updates yields a stable but
/// wrong global aggregate.
pub fn merge_scan_sums(partials: &[PrefixAggregate], chunk_len: usize) -> PrefixAggregate {
    let mut global = PrefixAggregate::default();
    for partial in partials {
        global.scan_sum += partial.scan_sum + global.sum * chunk_len as i64;
        global.sum += partial.sum;
    }
    global
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scan_sum::scan_sum;

    #[test]
    fn test_merge_totals_is_plain_addition() {
        assert_eq!(merge_totals(&[3, -1, 4, 0]), 6);
        assert_eq!(merge_totals(&[]), 0);
    }

    #[test]
    fn test_merge_scan_sums_restores_global_offsets() {
        // [1, 2] -> (3, 4) and [3, 4] -> (7, 10) locally. The second chunk's
        // prefix sums are each short by 3, so the merge adds 3 * 2 = 6:
        // scan_sum = 4 + 10 + 6 = 20, matching the whole-sequence scan.
        let partials = [
            PrefixAggregate { sum: 3, scan_sum: 4 },
            PrefixAggregate { sum: 7, scan_sum: 10 },
        ];
        assert_eq!(
            merge_scan_sums(&partials, 2),
            PrefixAggregate { sum: 10, scan_sum: 20 }
        );
    }

    #[test]
    fn test_merge_single_partial_is_identity() {
        let partial = PrefixAggregate { sum: 42, scan_sum: 17 };
        assert_eq!(merge_scan_sums(&[partial], 8), partial);
    }

    #[test]
    fn test_merge_empty_partials_is_zero() {
        assert_eq!(merge_scan_sums(&[], 4), PrefixAggregate::default());
    }

    #[test]
    fn test_merge_matches_unpartitioned_scan() {
        let data: Vec<i32> = (1..=24).map(|v| if v % 3 == 0 { -v } else { v }).collect();
        let whole = scan_sum(&data);
        for chunks in [1usize, 2, 3, 4, 6, 8, 12, 24] {
            let chunk_len = data.len() / chunks;
            let partials: Vec<PrefixAggregate> =
                data.chunks(chunk_len).map(scan_sum).collect();
            assert_eq!(
                merge_scan_sums(&partials, chunk_len),
                whole,
                "split into {} chunks",
                chunks
            );
        }
    }

    #[test]
    fn test_merge_is_order_sensitive() {
        let data: Vec<i32> = vec![5, 1, -2, 7, 0, 3];
        let chunk_len = 2;
        let mut partials: Vec<PrefixAggregate> =
            data.chunks(chunk_len).map(scan_sum).collect();
        let ordered = merge_scan_sums(&partials, chunk_len);

        partials.swap(0, 2);
        let shuffled = merge_scan_sums(&partials, chunk_len);
        assert_ne!(
            ordered.scan_sum, shuffled.scan_sum,
            "swapping unequal chunks must change the offset-corrected scan"
        );
    }
}
