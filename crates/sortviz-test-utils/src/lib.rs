//! Test utilities and recording probes for sortviz development.
//!
//! Provides a [`RecordingProbe`] that keeps every event an algorithm
//! emits, order/multiset checks, and the hand-traced fixtures the engine
//! regression tests are pinned to.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{hand_traced, HandTraced, HAND_TRACED_INPUT};

use proptest::prelude::*;
use sortviz_core::{Probe, SortEvent, SortValue, StepKind};

/// Probe that keeps the full event stream plus recursion bookkeeping.
///
/// Panics if `leave()` is called more often than `enter()`, which would
/// mean an algorithm body mis-bracketed a recursive call.
pub struct RecordingProbe<T> {
    pub events: Vec<SortEvent<T>>,
    depth: u32,
    max_depth: u32,
    enters: usize,
}

impl<T: SortValue> RecordingProbe<T> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            depth: 0,
            max_depth: 0,
            enters: 0,
        }
    }

    /// Number of recorded events of `kind`.
    pub fn count(&self, kind: StepKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Number of recorded relocation events (swaps and moves).
    pub fn relocations(&self) -> usize {
        self.events.iter().filter(|e| e.kind().is_relocation()).count()
    }

    /// Deepest nesting seen between `enter()`/`leave()` pairs.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Current nesting; zero once an algorithm has returned.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Total `enter()` calls.
    pub fn enters(&self) -> usize {
        self.enters
    }
}

impl<T: SortValue> Default for RecordingProbe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SortValue> Probe<T> for RecordingProbe<T> {
    fn record(&mut self, _data: &[T], event: SortEvent<T>) {
        self.events.push(event);
    }

    fn enter(&mut self) {
        self.enters += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn leave(&mut self) {
        assert!(self.depth > 0, "leave() without matching enter()");
        self.depth -= 1;
    }
}

/// Whether `values` is in non-decreasing order.
pub fn is_sorted_ascending<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Reference ascending sort of `values` via the standard library.
pub fn reference_sorted<T: SortValue>(values: &[T]) -> Vec<T> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).expect("fixtures never contain NaN"));
    out
}

/// Whether `a` and `b` hold the same multiset of values.
pub fn is_permutation<T: SortValue>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && reference_sorted(a) == reference_sorted(b)
}

/// Integer inputs for property tests: short enough for bubble sort,
/// narrow enough range to produce plenty of duplicates.
pub fn int_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..48)
}

/// Finite float inputs for property tests.
pub fn float_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 0..48)
}
