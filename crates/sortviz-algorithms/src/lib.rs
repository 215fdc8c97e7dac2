//! Probe-instrumented sorting algorithm bodies.
//!
//! Each algorithm is written once, generic over the element type and over
//! a [`Probe`]. The metrics engine and the trace engine drive the same
//! bodies with different probes, so they can never disagree about the
//! order of events, the number of comparisons, or the number of
//! relocations.
//!
//! Every body sorts ascending in place and returns immediately for inputs
//! of fewer than two elements without emitting any event.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bubble;
pub mod heap;
pub mod merge;
pub mod quick;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

use sortviz_core::{Algorithm, NullProbe, Probe, SortValue};

/// Run `algorithm` over `data`, reporting every event to `probe`.
pub fn sort_with<T, P>(algorithm: Algorithm, data: &mut [T], probe: &mut P)
where
    T: SortValue,
    P: Probe<T> + ?Sized,
{
    match algorithm {
        Algorithm::QuickSort => quick_sort(data, probe),
        Algorithm::MergeSort => merge_sort(data, probe),
        Algorithm::HeapSort => heap_sort(data, probe),
        Algorithm::BubbleSort => bubble_sort(data, probe),
    }
}

/// Run `algorithm` over `data` without instrumentation.
pub fn sort<T: SortValue>(algorithm: Algorithm, data: &mut [T]) {
    sort_with(algorithm, data, &mut NullProbe);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_test_utils::{is_sorted_ascending, RecordingProbe};

    #[test]
    fn dispatch_sorts_with_every_algorithm() {
        for algo in Algorithm::ALL {
            let mut data = vec![9i64, -2, 7, 7, 0, 3];
            sort(algo, &mut data);
            assert_eq!(data, [-2, 0, 3, 7, 7, 9], "{algo}");
        }
    }

    #[test]
    fn trivial_inputs_emit_nothing() {
        for algo in Algorithm::ALL {
            for input in [vec![], vec![42i64]] {
                let mut data = input.clone();
                let mut probe = RecordingProbe::new();
                sort_with(algo, &mut data, &mut probe);
                assert_eq!(data, input);
                assert!(probe.events.is_empty(), "{algo}");
                assert_eq!(probe.enters(), 0);
            }
        }
    }

    #[test]
    fn dispatch_accepts_dyn_probe() {
        let mut probe = RecordingProbe::<f64>::new();
        let dyn_probe: &mut dyn Probe<f64> = &mut probe;
        let mut data = vec![2.5, -1.0, 0.5];
        sort_with(Algorithm::MergeSort, &mut data, dyn_probe);
        assert!(is_sorted_ascending(&data));
        assert!(!probe.events.is_empty());
    }
}
