//! Per-run accumulator threaded through the algorithm bodies.

use sortviz_core::{Probe, SortEvent, SortValue, StepKind};

/// Tracks current and maximum nesting of counted recursive calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepthGauge {
    current: u32,
    max: u32,
}

impl DepthGauge {
    /// Record entry into a counted call.
    pub fn enter(&mut self) {
        self.current += 1;
        self.max = self.max.max(self.current);
    }

    /// Record return from a counted call.
    pub fn leave(&mut self) {
        debug_assert!(self.current > 0, "leave() without matching enter()");
        self.current = self.current.saturating_sub(1);
    }

    /// Live nesting right now.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Deepest nesting seen so far.
    pub fn max(&self) -> u32 {
        self.max
    }
}

/// Counters for a single run.
///
/// Owned by the top-level call and lent to the algorithm body as its
/// [`Probe`]; discarded once the run's
/// [`DetailedMetrics`](sortviz_core::DetailedMetrics) is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Comparisons seen.
    pub operations: u64,
    /// Relocations seen (swaps, or moves for merge sort).
    pub swaps: u64,
    /// Recursion bookkeeping.
    pub depth: DepthGauge,
}

impl SortStats {
    /// Zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: SortValue> Probe<T> for SortStats {
    #[inline]
    fn record(&mut self, _data: &[T], event: SortEvent<T>) {
        match event.kind() {
            StepKind::Compare => self.operations += 1,
            StepKind::Swap | StepKind::Move => self.swaps += 1,
            StepKind::Initial | StepKind::NoSwap | StepKind::Select | StepKind::Settle => {}
        }
    }

    #[inline]
    fn enter(&mut self) {
        self.depth.enter();
    }

    #[inline]
    fn leave(&mut self) {
        self.depth.leave();
    }
}
