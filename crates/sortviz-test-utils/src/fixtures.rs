//! Hand-traced expectations for the regression input `[5, 3, 8, 1]`.
//!
//! Each row was derived by stepping the algorithm by hand under the
//! counting rules of the metrics engine:
//!
//! - **Bubble**: passes of 3, 2, 1 comparisons; swaps 5↔3, 8↔1, 5↔1, 3↔1.
//! - **Quick**: partition(0..=3) scans 3 elements, none below pivot 1,
//!   then places the pivot; partition(1..=3) scans 2, one self-swap of 3,
//!   places pivot 5. Nesting reaches 2.
//! - **Merge**: merges of [5]+[3], [8]+[1], [3,5]+[1,8] compare 1, 1, 3
//!   times and write 2, 2, 4 values. Nesting reaches 2.
//! - **Heap**: build sifts index 1 (1 comparison) and index 0
//!   (2 comparisons, 1 swap); extractions at 3, 2, 1 then sift with
//!   2, 1, 0 comparisons and 1, 1, 0 swaps.

use sortviz_core::Algorithm;

/// The regression input shared by engine tests.
pub const HAND_TRACED_INPUT: [i64; 4] = [5, 3, 8, 1];

/// Expected engine output for [`HAND_TRACED_INPUT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandTraced {
    pub algorithm: Algorithm,
    pub operations: u64,
    pub swaps: u64,
    pub max_recursion_depth: u32,
    /// Step records including the leading "Initial array" record.
    pub trace_len: usize,
}

/// One row per algorithm, in [`Algorithm::ALL`] order.
pub fn hand_traced() -> [HandTraced; 4] {
    [
        HandTraced {
            algorithm: Algorithm::QuickSort,
            operations: 5,
            swaps: 3,
            max_recursion_depth: 2,
            // 5 compares + 5 outcomes + 2 pivot placements
            trace_len: 1 + 12,
        },
        HandTraced {
            algorithm: Algorithm::MergeSort,
            operations: 5,
            swaps: 8,
            max_recursion_depth: 2,
            // 5 compares + 8 copies
            trace_len: 1 + 13,
        },
        HandTraced {
            algorithm: Algorithm::HeapSort,
            operations: 6,
            swaps: 6,
            max_recursion_depth: 0,
            // 6 compares + 6 outcomes + 3 sift swaps + 5 settles + 3 extractions
            trace_len: 1 + 23,
        },
        HandTraced {
            algorithm: Algorithm::BubbleSort,
            operations: 6,
            swaps: 4,
            max_recursion_depth: 0,
            // 6 compares + 6 outcomes
            trace_len: 1 + 12,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_algorithm_in_order() {
        let rows = hand_traced();
        let algos: Vec<Algorithm> = rows.iter().map(|r| r.algorithm).collect();
        assert_eq!(algos, Algorithm::ALL);
    }
}
