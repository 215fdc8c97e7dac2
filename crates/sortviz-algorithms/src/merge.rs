//! Top-down merge sort.
//!
//! `start..=end` splits at `mid = (start + end) / 2`. Merging copies both
//! runs out, compares their heads while both are non-exhausted (left wins
//! ties, so the sort is stable), and writes every output value back,
//! tails included. Each write is one move.

use sortviz_core::{Probe, RunSide, SortEvent, SortValue};

/// Sort `data` ascending, bracketing each split call with
/// `enter()`/`leave()`.
pub fn merge_sort<T, P>(data: &mut [T], probe: &mut P)
where
    T: SortValue,
    P: Probe<T> + ?Sized,
{
    if data.len() < 2 {
        return;
    }
    let end = data.len() - 1;
    merge_range(data, 0, end, probe);
}

fn merge_range<T, P>(data: &mut [T], start: usize, end: usize, probe: &mut P)
where
    T: SortValue,
    P: Probe<T> + ?Sized,
{
    if start >= end {
        return;
    }
    probe.enter();
    let mid = start + (end - start) / 2;
    merge_range(data, start, mid, probe);
    merge_range(data, mid + 1, end, probe);
    merge(data, start, mid, end, probe);
    probe.leave();
}

fn merge<T, P>(data: &mut [T], start: usize, mid: usize, end: usize, probe: &mut P)
where
    T: SortValue,
    P: Probe<T> + ?Sized,
{
    let left = data[start..=mid].to_vec();
    let right = data[mid + 1..=end].to_vec();
    let (mut i, mut j) = (0, 0);
    let mut dest = start;

    while i < left.len() && j < right.len() {
        probe.record(
            data,
            SortEvent::CompareRuns {
                left: left[i],
                right: right[j],
            },
        );
        let (value, from) = if left[i] <= right[j] {
            i += 1;
            (left[i - 1], RunSide::Left)
        } else {
            j += 1;
            (right[j - 1], RunSide::Right)
        };
        data[dest] = value;
        probe.record(data, SortEvent::Copied { value, from, dest });
        dest += 1;
    }

    for (tail, from) in [(&left[i..], RunSide::Left), (&right[j..], RunSide::Right)] {
        for &value in tail {
            data[dest] = value;
            probe.record(data, SortEvent::Copied { value, from, dest });
            dest += 1;
        }
    }
}
