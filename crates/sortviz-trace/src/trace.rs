//! The ordered step log produced by one trace-engine run.

use std::mem;
use std::slice;

use sortviz_core::{Algorithm, SortOperation, SortValue, StepKind};

/// Every step of one sort run, in order.
///
/// Record 0 is the untouched input ("Initial array"); each later record
/// holds a full copy of the array right after one event. Memory is
/// therefore `O(steps × n)`: roughly `n²/2` snapshots for bubble sort, so
/// tracing inputs beyond a few hundred elements gets expensive quickly.
///
/// Immutable once built. `Send + Sync` whenever `T` is.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace<T> {
    algorithm: Algorithm,
    steps: Vec<SortOperation<T>>,
}

impl<T: SortValue> Trace<T> {
    /// Wrap an already-recorded step list.
    ///
    /// Returns `None` unless record 0 is a [`StepKind::Initial`] record,
    /// which every trace starts with.
    pub fn from_steps(algorithm: Algorithm, steps: Vec<SortOperation<T>>) -> Option<Self> {
        match steps.first() {
            Some(first) if first.kind == StepKind::Initial => Some(Self { algorithm, steps }),
            _ => None,
        }
    }

    /// Caller guarantees `steps` starts with the initial record.
    pub(crate) fn from_recorded(algorithm: Algorithm, steps: Vec<SortOperation<T>>) -> Self {
        debug_assert!(steps.first().is_some_and(|s| s.kind == StepKind::Initial));
        Self { algorithm, steps }
    }

    /// The algorithm that produced this trace.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// All step records.
    pub fn steps(&self) -> &[SortOperation<T>] {
        &self.steps
    }

    /// Number of step records, initial record included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&SortOperation<T>> {
        self.steps.get(index)
    }

    /// The "Initial array" record.
    pub fn initial(&self) -> &SortOperation<T> {
        &self.steps[0]
    }

    /// The last record; its snapshot is the sorted array.
    pub fn last(&self) -> &SortOperation<T> {
        &self.steps[self.steps.len() - 1]
    }

    /// Array contents after the final step.
    pub fn final_array(&self) -> &[T] {
        &self.last().array
    }

    /// Number of records of `kind`.
    pub fn count(&self, kind: StepKind) -> u64 {
        self.steps.iter().filter(|s| s.kind == kind).count() as u64
    }

    /// Number of compare records. Matches the metrics engine's
    /// `operations` for the same input.
    pub fn comparison_count(&self) -> u64 {
        self.count(StepKind::Compare)
    }

    /// Number of swap and move records. Matches the metrics engine's
    /// `swaps` for the same input.
    pub fn relocation_count(&self) -> u64 {
        self.steps.iter().filter(|s| s.kind.is_relocation()).count() as u64
    }

    /// Iterate over the step records.
    pub fn iter(&self) -> slice::Iter<'_, SortOperation<T>> {
        self.steps.iter()
    }

    /// Consume the trace, yielding its step records.
    pub fn into_steps(self) -> Vec<SortOperation<T>> {
        self.steps
    }

    /// Bytes held by all snapshots (element payload only).
    pub fn snapshot_bytes(&self) -> usize {
        self.steps.iter().map(|s| s.array.len()).sum::<usize>() * mem::size_of::<T>()
    }
}

impl<'a, T: SortValue> IntoIterator for &'a Trace<T> {
    type Item = &'a SortOperation<T>;
    type IntoIter = slice::Iter<'a, SortOperation<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
