//! The event vocabulary emitted by the instrumented algorithm bodies.
//!
//! Every comparison, exchange and copy an algorithm performs is reported
//! as one [`SortEvent`], *after* the event has been applied to the array.
//! Each event knows its [`StepKind`], the indices it concerns and a
//! human-readable description, so a probe never needs to know which
//! algorithm is running.
//!
//! | Algorithm | Events |
//! |-----------|--------|
//! | bubble | `CompareAdjacent` → `AdjacentSwapped` \| `AdjacentInOrder` |
//! | quick | `ComparePivot` → `PartitionSwapped` \| `PartitionKept`, then `PivotPlaced` |
//! | merge | `CompareRuns` → `Copied`, tail `Copied` |
//! | heap | `CompareChild` → `ChildPromoted` \| `ChildNotLarger`, then `HeapSwapped` \| `HeapSettled`; `RootExtracted` |

use std::fmt;

use crate::operation::{Highlights, StepKind};
use crate::value::SortValue;

/// Which copied-out run a merge write came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunSide {
    /// The lower half `start..=mid`.
    Left,
    /// The upper half `mid+1..=end`.
    Right,
}

impl fmt::Display for RunSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Which child of a heap node is being examined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildSide {
    /// Index `2i + 1`.
    Left,
    /// Index `2i + 2`.
    Right,
}

impl ChildSide {
    fn capitalized(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for ChildSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// One discrete algorithmic event.
///
/// Values carried by a variant are the values *as compared or moved*, so
/// the description stays correct even though the snapshot handed to the
/// probe already reflects the event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortEvent<T> {
    /// Bubble sort compares `a[left]` with `a[right]` (`right == left + 1`).
    CompareAdjacent {
        /// Lower index.
        left: usize,
        /// Upper index.
        right: usize,
    },
    /// Bubble sort exchanged an out-of-order adjacent pair.
    AdjacentSwapped {
        /// Lower index.
        left: usize,
        /// Upper index.
        right: usize,
    },
    /// Bubble sort left an in-order adjacent pair alone.
    AdjacentInOrder {
        /// Lower index.
        left: usize,
        /// Upper index.
        right: usize,
    },
    /// Quick sort partition scans `a[index]` against the pivot.
    ComparePivot {
        /// Scanned index.
        index: usize,
        /// Scanned value.
        value: T,
        /// Pivot value (last element of the subrange).
        pivot: T,
    },
    /// The scanned element was below the pivot and moved to the store slot.
    PartitionSwapped {
        /// Store index `i` before it advanced.
        store: usize,
        /// Scanned index `j`.
        index: usize,
        /// Pivot value.
        pivot: T,
    },
    /// The scanned element was not below the pivot and stays put.
    PartitionKept {
        /// Scanned index.
        index: usize,
        /// Scanned value.
        value: T,
        /// Pivot value.
        pivot: T,
    },
    /// The pivot moved from the end of the subrange to its final slot.
    PivotPlaced {
        /// Final pivot index.
        slot: usize,
        /// Former pivot index (`high`).
        from: usize,
    },
    /// Merge compares the heads of the two copied-out runs.
    CompareRuns {
        /// Head of the left run.
        left: T,
        /// Head of the right run.
        right: T,
    },
    /// Merge wrote one value into the output range.
    Copied {
        /// Value written.
        value: T,
        /// Run it was taken from.
        from: RunSide,
        /// Destination index.
        dest: usize,
    },
    /// Heap sift-down compares a child against the current largest
    /// candidate (the parent, or the left child once it has won).
    CompareChild {
        /// Node being sifted.
        parent: usize,
        /// Index of the current largest candidate.
        candidate: usize,
        /// Value of the current largest candidate.
        candidate_value: T,
        /// Child index.
        child: usize,
        /// Child value.
        child_value: T,
        /// Which child.
        side: ChildSide,
    },
    /// The child exceeded the candidate and became the new candidate.
    ChildPromoted {
        /// Previous candidate index.
        candidate: usize,
        /// Previous candidate value.
        candidate_value: T,
        /// Child index.
        child: usize,
        /// Child value.
        child_value: T,
        /// Which child.
        side: ChildSide,
    },
    /// The child did not exceed the candidate.
    ChildNotLarger {
        /// Candidate index.
        candidate: usize,
        /// Candidate value.
        candidate_value: T,
        /// Child index.
        child: usize,
        /// Child value.
        child_value: T,
        /// Which child.
        side: ChildSide,
    },
    /// Sift-down exchanged a node with its largest child.
    HeapSwapped {
        /// Node index.
        parent: usize,
        /// Child index the node moved down to.
        child: usize,
        /// Value that moved down.
        lowered: T,
        /// Value that moved up.
        raised: T,
    },
    /// Sift-down stopped: the node already dominates its children (or
    /// has none).
    HeapSettled {
        /// Node index.
        index: usize,
    },
    /// Extraction moved the heap root behind the shrinking heap.
    RootExtracted {
        /// Destination of the root, which is also the new heap size.
        end: usize,
    },
}

impl<T: SortValue> SortEvent<T> {
    /// Classify the event for counting and replay.
    pub fn kind(&self) -> StepKind {
        match self {
            Self::CompareAdjacent { .. }
            | Self::ComparePivot { .. }
            | Self::CompareRuns { .. }
            | Self::CompareChild { .. } => StepKind::Compare,
            Self::AdjacentSwapped { .. }
            | Self::PartitionSwapped { .. }
            | Self::PivotPlaced { .. }
            | Self::HeapSwapped { .. }
            | Self::RootExtracted { .. } => StepKind::Swap,
            Self::Copied { .. } => StepKind::Move,
            Self::AdjacentInOrder { .. }
            | Self::PartitionKept { .. }
            | Self::ChildNotLarger { .. } => StepKind::NoSwap,
            Self::ChildPromoted { .. } => StepKind::Select,
            Self::HeapSettled { .. } => StepKind::Settle,
        }
    }

    /// The one or two array positions the event concerns.
    ///
    /// Merge comparisons concern run heads rather than array slots and
    /// highlight nothing.
    pub fn highlights(&self) -> Highlights {
        let mut out = Highlights::new();
        match *self {
            Self::CompareAdjacent { left, right }
            | Self::AdjacentSwapped { left, right }
            | Self::AdjacentInOrder { left, right } => {
                out.push(left);
                out.push(right);
            }
            Self::ComparePivot { index, .. } | Self::PartitionKept { index, .. } => {
                out.push(index);
            }
            Self::PartitionSwapped { store, index, .. } => {
                out.push(store);
                out.push(index);
            }
            Self::PivotPlaced { slot, from } => {
                out.push(slot);
                out.push(from);
            }
            Self::CompareRuns { .. } => {}
            Self::Copied { dest, .. } => out.push(dest),
            Self::CompareChild {
                candidate, child, ..
            }
            | Self::ChildPromoted {
                candidate, child, ..
            }
            | Self::ChildNotLarger {
                candidate, child, ..
            } => {
                out.push(candidate);
                out.push(child);
            }
            Self::HeapSwapped { parent, child, .. } => {
                out.push(parent);
                out.push(child);
            }
            Self::HeapSettled { index } => out.push(index),
            Self::RootExtracted { end } => {
                out.push(0);
                out.push(end);
            }
        }
        out
    }
}

impl<T: SortValue> fmt::Display for SortEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompareAdjacent { left, right } => {
                write!(f, "Comparing indices {left} and {right}")
            }
            Self::AdjacentSwapped { left, right } => {
                write!(f, "Swapped elements at indices {left} and {right}")
            }
            Self::AdjacentInOrder { left, right } => {
                write!(f, "No swap needed for indices {left} and {right}")
            }
            Self::ComparePivot {
                index,
                value,
                pivot,
            } => write!(
                f,
                "Comparing element at index {index} ({value}) with pivot ({pivot})"
            ),
            Self::PartitionSwapped {
                store,
                index,
                pivot,
            } => write!(
                f,
                "Swapped elements at indices {store} and {index} (pivot = {pivot})"
            ),
            Self::PartitionKept {
                index,
                value,
                pivot,
            } => write!(
                f,
                "No swap: element at index {index} ({value}) >= pivot ({pivot})"
            ),
            Self::PivotPlaced { slot, .. } => write!(f, "Moved pivot to index {slot}"),
            Self::CompareRuns { left, right } => {
                write!(f, "Comparing {left} (left) with {right} (right)")
            }
            Self::Copied { value, from, dest } => {
                write!(f, "Copied {value} from {from} to index {dest}")
            }
            Self::CompareChild {
                parent,
                candidate,
                candidate_value,
                child_value,
                side,
                ..
            } => {
                if candidate == parent {
                    write!(
                        f,
                        "Comparing parent {candidate_value} with {side} child {child_value}"
                    )
                } else {
                    write!(
                        f,
                        "Comparing left child {candidate_value} with {side} child {child_value}"
                    )
                }
            }
            Self::ChildPromoted {
                candidate_value,
                child_value,
                side,
                ..
            } => write!(
                f,
                "{} child {child_value} is larger than {candidate_value}",
                side.capitalized()
            ),
            Self::ChildNotLarger {
                candidate_value,
                child_value,
                side,
                ..
            } => write!(
                f,
                "No swap: {candidate_value} is larger than or equal to {side} child {child_value}"
            ),
            Self::HeapSwapped {
                lowered, raised, ..
            } => write!(f, "Swapped {lowered} and {raised} (heapify)"),
            Self::HeapSettled { index } => write!(f, "No swap needed for index {index}"),
            Self::RootExtracted { end } => write!(f, "Swapped root with index {end}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_classify_as_compare() {
        let events: [SortEvent<i64>; 4] = [
            SortEvent::CompareAdjacent { left: 0, right: 1 },
            SortEvent::ComparePivot {
                index: 2,
                value: 4,
                pivot: 9,
            },
            SortEvent::CompareRuns { left: 1, right: 2 },
            SortEvent::CompareChild {
                parent: 0,
                candidate: 0,
                candidate_value: 5,
                child: 1,
                child_value: 3,
                side: ChildSide::Left,
            },
        ];
        for e in events {
            assert_eq!(e.kind(), StepKind::Compare, "{e:?}");
        }
    }

    #[test]
    fn relocations_classify_as_swap_or_move() {
        let swap: SortEvent<i64> = SortEvent::RootExtracted { end: 3 };
        let mv: SortEvent<i64> = SortEvent::Copied {
            value: 7,
            from: RunSide::Right,
            dest: 2,
        };
        assert!(swap.kind().is_relocation());
        assert!(mv.kind().is_relocation());
        assert_eq!(mv.kind(), StepKind::Move);
    }

    #[test]
    fn bubble_descriptions() {
        let e: SortEvent<i64> = SortEvent::CompareAdjacent { left: 1, right: 2 };
        assert_eq!(e.to_string(), "Comparing indices 1 and 2");
        assert_eq!(e.highlights().as_slice(), &[1, 2]);
        let e: SortEvent<i64> = SortEvent::AdjacentInOrder { left: 0, right: 1 };
        assert_eq!(e.to_string(), "No swap needed for indices 0 and 1");
    }

    #[test]
    fn quick_descriptions() {
        let e = SortEvent::PartitionKept {
            index: 3,
            value: 8i64,
            pivot: 5,
        };
        assert_eq!(e.to_string(), "No swap: element at index 3 (8) >= pivot (5)");
        assert_eq!(e.highlights().as_slice(), &[3]);
        let e: SortEvent<i64> = SortEvent::PivotPlaced { slot: 1, from: 4 };
        assert_eq!(e.to_string(), "Moved pivot to index 1");
        assert_eq!(e.highlights().as_slice(), &[1, 4]);
    }

    #[test]
    fn merge_comparison_highlights_nothing() {
        let e = SortEvent::CompareRuns {
            left: 2.5f64,
            right: 1.0,
        };
        assert!(e.highlights().is_empty());
        assert_eq!(e.to_string(), "Comparing 2.5 (left) with 1 (right)");
    }

    #[test]
    fn heap_comparison_names_the_actual_candidate() {
        let from_parent = SortEvent::CompareChild {
            parent: 0,
            candidate: 0,
            candidate_value: 5i64,
            child: 2,
            child_value: 8,
            side: ChildSide::Right,
        };
        assert_eq!(
            from_parent.to_string(),
            "Comparing parent 5 with right child 8"
        );
        let from_left = SortEvent::CompareChild {
            parent: 0,
            candidate: 1,
            candidate_value: 6i64,
            child: 2,
            child_value: 8,
            side: ChildSide::Right,
        };
        assert_eq!(
            from_left.to_string(),
            "Comparing left child 6 with right child 8"
        );
        assert_eq!(from_left.highlights().as_slice(), &[1, 2]);
    }

    #[test]
    fn heap_outcome_descriptions() {
        let promoted = SortEvent::ChildPromoted {
            candidate: 0,
            candidate_value: 5i64,
            child: 2,
            child_value: 8,
            side: ChildSide::Right,
        };
        assert_eq!(promoted.to_string(), "Right child 8 is larger than 5");
        assert_eq!(promoted.kind(), StepKind::Select);
        let swapped = SortEvent::HeapSwapped {
            parent: 0,
            child: 2,
            lowered: 5i64,
            raised: 8,
        };
        assert_eq!(swapped.to_string(), "Swapped 5 and 8 (heapify)");
        let settled: SortEvent<i64> = SortEvent::HeapSettled { index: 4 };
        assert_eq!(settled.to_string(), "No swap needed for index 4");
        assert_eq!(settled.kind(), StepKind::Settle);
    }
}
