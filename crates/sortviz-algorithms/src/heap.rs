//! Heap sort over an implicit max-heap.
//!
//! Build: sift down every internal node from `n/2 - 1` to `0`.
//! Extract: for `end` in `n-1..=1`, swap the root behind the heap and sift
//! the new root down within `0..end`.
//!
//! Sift-down compares the left child, then the right child, against the
//! current largest candidate. Each comparison is followed by either a
//! promotion or a "not larger" outcome, and each sift step ends in
//! either a swap (and another step one level down) or a settle. The loop
//! is iterative and never calls `enter()`, so heap sort reports a
//! recursion depth of zero.

use sortviz_core::{ChildSide, Probe, SortEvent, SortValue};

/// Sort `data` ascending.
pub fn heap_sort<T, P>(data: &mut [T], probe: &mut P)
where
    T: SortValue,
    P: Probe<T> + ?Sized,
{
    let n = data.len();
    if n < 2 {
        return;
    }

    for node in (0..n / 2).rev() {
        sift_down(data, n, node, probe);
    }

    for end in (1..n).rev() {
        data.swap(0, end);
        probe.record(data, SortEvent::RootExtracted { end });
        sift_down(data, end, 0, probe);
    }
}

/// Restore the max-heap property below `node` within `data[..heap_len]`.
fn sift_down<T, P>(data: &mut [T], heap_len: usize, mut node: usize, probe: &mut P)
where
    T: SortValue,
    P: Probe<T> + ?Sized,
{
    loop {
        let mut largest = node;

        for (child, side) in [
            (2 * node + 1, ChildSide::Left),
            (2 * node + 2, ChildSide::Right),
        ] {
            if child >= heap_len {
                continue;
            }
            let candidate = largest;
            let candidate_value = data[candidate];
            let child_value = data[child];
            probe.record(
                data,
                SortEvent::CompareChild {
                    parent: node,
                    candidate,
                    candidate_value,
                    child,
                    child_value,
                    side,
                },
            );
            if child_value > candidate_value {
                largest = child;
                probe.record(
                    data,
                    SortEvent::ChildPromoted {
                        candidate,
                        candidate_value,
                        child,
                        child_value,
                        side,
                    },
                );
            } else {
                probe.record(
                    data,
                    SortEvent::ChildNotLarger {
                        candidate,
                        candidate_value,
                        child,
                        child_value,
                        side,
                    },
                );
            }
        }

        if largest == node {
            probe.record(data, SortEvent::HeapSettled { index: node });
            return;
        }

        let (lowered, raised) = (data[node], data[largest]);
        data.swap(node, largest);
        probe.record(
            data,
            SortEvent::HeapSwapped {
                parent: node,
                child: largest,
                lowered,
                raised,
            },
        );
        node = largest;
    }
}
