//! Snapshot-recording probe and the trace-engine entry point.

use sortviz_algorithms::sort_with;
use sortviz_core::{Algorithm, Probe, SortEvent, SortOperation, SortValue};

use crate::trace::Trace;

/// Probe that appends one [`SortOperation`] per event, each with its own
/// copy of the array.
#[derive(Clone, Debug)]
pub struct TraceRecorder<T> {
    steps: Vec<SortOperation<T>>,
}

impl<T: SortValue> TraceRecorder<T> {
    /// A recorder seeded with the "Initial array" record for `input`.
    pub fn new(input: &[T]) -> Self {
        Self {
            steps: vec![SortOperation::initial(input)],
        }
    }

    /// Records captured so far, initial record included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`: the initial record is present from construction.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Finish recording.
    pub fn finish(self, algorithm: Algorithm) -> Trace<T> {
        Trace::from_recorded(algorithm, self.steps)
    }
}

impl<T: SortValue> Probe<T> for TraceRecorder<T> {
    fn record(&mut self, data: &[T], event: SortEvent<T>) {
        self.steps.push(SortOperation {
            array: data.to_vec(),
            highlights: event.highlights(),
            description: event.to_string(),
            kind: event.kind(),
        });
    }
}

/// Sort a private copy of `values` with `algorithm`, recording every step.
///
/// The trace performs exactly the comparisons and relocations the metrics
/// engine counts for the same input.
///
/// ```
/// use sortviz_core::Algorithm;
/// use sortviz_trace::run_trace;
///
/// let trace = run_trace(Algorithm::QuickSort, &[5, 3, 8, 1]);
/// assert_eq!(trace.len(), 13);
/// assert_eq!(trace.initial().description, "Initial array");
/// assert_eq!(trace.final_array(), [1, 3, 5, 8]);
/// ```
pub fn run_trace<T: SortValue>(algorithm: Algorithm, values: &[T]) -> Trace<T> {
    let mut data = values.to_vec();
    let mut recorder = TraceRecorder::new(values);
    sort_with(algorithm, &mut data, &mut recorder);
    let trace = recorder.finish(algorithm);
    tracing::debug!(
        algorithm = algorithm.name(),
        input_size = values.len(),
        steps = trace.len(),
        "trace_run_completed"
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::StepKind;
    use sortviz_test_utils::{hand_traced, HAND_TRACED_INPUT};

    #[test]
    fn hand_traced_lengths() {
        for row in hand_traced() {
            let trace = run_trace(row.algorithm, &HAND_TRACED_INPUT);
            assert_eq!(trace.len(), row.trace_len, "{}", row.algorithm);
            assert_eq!(trace.comparison_count(), row.operations);
            assert_eq!(trace.relocation_count(), row.swaps);
            assert_eq!(trace.final_array(), [1, 3, 5, 8]);
        }
    }

    #[test]
    fn singleton_trace_is_initial_only() {
        for algo in Algorithm::ALL {
            let trace = run_trace(algo, &[1i64]);
            assert_eq!(trace.len(), 1);
            let only = trace.initial();
            assert_eq!(only.description, "Initial array");
            assert_eq!(only.kind, StepKind::Initial);
            assert!(only.highlights.is_empty());
            assert_eq!(only.array, [1]);
        }
    }

    #[test]
    fn empty_input_still_has_initial_record() {
        let trace = run_trace::<f64>(Algorithm::MergeSort, &[]);
        assert_eq!(trace.len(), 1);
        assert!(trace.final_array().is_empty());
    }

    #[test]
    fn bubble_steps_on_two_elements() {
        let trace = run_trace(Algorithm::BubbleSort, &[2i64, 1]);
        let descriptions: Vec<&str> = trace.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions,
            [
                "Initial array",
                "Comparing indices 0 and 1",
                "Swapped elements at indices 0 and 1",
            ]
        );
        // Compare snapshot is taken before the swap, swap snapshot after.
        assert_eq!(trace.steps()[1].array, [2, 1]);
        assert_eq!(trace.steps()[2].array, [1, 2]);
        assert_eq!(trace.steps()[2].highlights.as_slice(), [0, 1]);
    }

    #[test]
    fn snapshots_are_independent() {
        let mut trace = run_trace(Algorithm::HeapSort, &[3i64, 1, 2]).into_steps();
        trace[0].array[0] = 99;
        assert_ne!(trace[1].array[0], 99);
    }

    #[test]
    fn recorder_starts_non_empty() {
        let recorder = TraceRecorder::new(&[4u8, 2]);
        assert_eq!(recorder.len(), 1);
        assert!(!recorder.is_empty());
    }
}
