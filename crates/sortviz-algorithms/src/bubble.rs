//! Bubble sort.
//!
//! Pass `i` in `0..n-1` walks `j` in `0..n-i-1`, comparing `a[j]` with
//! `a[j+1]` and swapping when the left element is greater. There is no
//! early exit on a swap-free pass, so the comparison count is always
//! `n(n-1)/2`.

use sortviz_core::{Probe, SortEvent, SortValue};

/// Sort `data` ascending, reporting each comparison and its outcome.
pub fn bubble_sort<T, P>(data: &mut [T], probe: &mut P)
where
    T: SortValue,
    P: Probe<T> + ?Sized,
{
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            let (left, right) = (j, j + 1);
            probe.record(data, SortEvent::CompareAdjacent { left, right });
            if data[left] > data[right] {
                data.swap(left, right);
                probe.record(data, SortEvent::AdjacentSwapped { left, right });
            } else {
                probe.record(data, SortEvent::AdjacentInOrder { left, right });
            }
        }
    }
}
