//! Quick sort with Lomuto partitioning.
//!
//! The pivot is the last element of the subrange. Every element in
//! `low..high` is compared against it; elements below the pivot are
//! swapped into the store slot (a self-swap when the slot already holds
//! them still counts), and the pivot is finally swapped into place.
//!
//! Nesting goes as deep as the partition is unbalanced: `n - 1` levels on
//! already-sorted input or on a run of equal values. The nesting is kept
//! on an explicit heap-allocated work stack, so thread stack use stays
//! constant however degenerate the input.

use sortviz_core::{Probe, SortEvent, SortValue};

/// Sort `data` ascending, bracketing each partition of a subrange with
/// two or more elements with `enter()`/`leave()`.
pub fn quick_sort<T, P>(data: &mut [T], probe: &mut P)
where
    T: SortValue,
    P: Probe<T> + ?Sized,
{
    if data.len() < 2 {
        return;
    }
    let mut work = vec![Frame::Range {
        low: 0,
        high: data.len() - 1,
    }];
    while let Some(frame) = work.pop() {
        match frame {
            Frame::Range { low, high } => {
                if low >= high {
                    continue;
                }
                probe.enter();
                let pivot_slot = partition(data, low, high, probe);
                // Popped in reverse: left subrange, right subrange, leave.
                work.push(Frame::Leave);
                work.push(Frame::Range {
                    low: pivot_slot + 1,
                    high,
                });
                if pivot_slot > low {
                    work.push(Frame::Range {
                        low,
                        high: pivot_slot - 1,
                    });
                }
            }
            Frame::Leave => probe.leave(),
        }
    }
}

/// One pending unit of work.
enum Frame {
    /// Partition `low..=high` and schedule both sides.
    Range { low: usize, high: usize },
    /// Close the subrange opened by the matching `enter()`.
    Leave,
}

/// Partition `data[low..=high]` around `data[high]`; returns the pivot's
/// final index.
fn partition<T, P>(data: &mut [T], low: usize, high: usize, probe: &mut P) -> usize
where
    T: SortValue,
    P: Probe<T> + ?Sized,
{
    let pivot = data[high];
    let mut store = low;

    for index in low..high {
        let value = data[index];
        probe.record(
            data,
            SortEvent::ComparePivot {
                index,
                value,
                pivot,
            },
        );
        if value < pivot {
            data.swap(store, index);
            probe.record(
                data,
                SortEvent::PartitionSwapped {
                    store,
                    index,
                    pivot,
                },
            );
            store += 1;
        } else {
            probe.record(
                data,
                SortEvent::PartitionKept {
                    index,
                    value,
                    pivot,
                },
            );
        }
    }

    data.swap(store, high);
    probe.record(
        data,
        SortEvent::PivotPlaced {
            slot: store,
            from: high,
        },
    );
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::StepKind;
    use sortviz_test_utils::RecordingProbe;

    #[test]
    fn hand_traced_input() {
        let mut data = [5i64, 3, 8, 1];
        let mut probe = RecordingProbe::new();
        quick_sort(&mut data, &mut probe);
        assert_eq!(data, [1, 3, 5, 8]);
        assert_eq!(probe.count(StepKind::Compare), 5);
        assert_eq!(probe.count(StepKind::Swap), 3);
        assert_eq!(probe.max_depth(), 2);
        assert_eq!(probe.depth(), 0);
    }

    #[test]
    fn first_partition_places_smallest_pivot_at_front() {
        let mut data = [5i64, 3, 8, 1];
        let mut probe = RecordingProbe::new();
        quick_sort(&mut data, &mut probe);
        assert_eq!(
            probe.events[6],
            SortEvent::PivotPlaced { slot: 0, from: 3 },
            "three scans (compare + kept each) precede the first placement"
        );
    }

    #[test]
    fn sorted_input_nests_linearly_and_counts_self_swaps() {
        let mut data = [1i64, 2, 3, 4];
        let mut probe = RecordingProbe::new();
        quick_sort(&mut data, &mut probe);
        assert_eq!(data, [1, 2, 3, 4]);
        assert_eq!(probe.max_depth(), 3);
        assert_eq!(probe.count(StepKind::Compare), 3 + 2 + 1);
        // Every scanned element is below the pivot (self-swap), plus one
        // pivot placement per partition.
        assert_eq!(probe.count(StepKind::Swap), (3 + 1) + (2 + 1) + (1 + 1));
    }

    #[test]
    fn equal_elements_are_never_below_pivot() {
        let mut data = [7i64; 5];
        let mut probe = RecordingProbe::new();
        quick_sort(&mut data, &mut probe);
        assert_eq!(probe.count(StepKind::NoSwap), probe.count(StepKind::Compare));
        assert_eq!(
            probe.count(StepKind::Swap),
            probe.enters(),
            "only pivot placements relocate"
        );
    }

    #[test]
    fn enter_and_leave_bracket_each_partition() {
        let mut data = [5i64, 3, 8, 1];
        let mut probe = RecordingProbe::new();
        quick_sort(&mut data, &mut probe);
        // Root partition, then the right side [3, 8, 5] nested inside it.
        assert_eq!(probe.enters(), 2);
        assert_eq!(probe.depth(), 0);
        assert_eq!(probe.max_depth(), 2);
    }

    #[test]
    fn two_elements() {
        let mut data = [2.0f64, 1.0];
        let mut probe = RecordingProbe::new();
        quick_sort(&mut data, &mut probe);
        assert_eq!(data, [1.0, 2.0]);
        assert_eq!(probe.max_depth(), 1);
        assert_eq!(probe.count(StepKind::Compare), 1);
        assert_eq!(probe.count(StepKind::Swap), 1);
    }
}
