//! Replay determinism: recording the same input twice yields identical
//! traces, and the comparison framework pins down any divergence.

use proptest::prelude::*;
use sortviz_core::Algorithm;
use sortviz_test_utils::int_values;
use sortviz_trace::{compare_traces, run_trace, trace_hash, DivergenceKind, Trace, TraceCursor};

#[test]
fn recorded_and_replayed_runs_match() {
    let input: Vec<f64> = vec![0.5, -3.25, 9.0, 9.0, 1e-3, -0.0, 0.0];
    for algo in Algorithm::ALL {
        let recorded = run_trace(algo, &input);
        let replayed = run_trace(algo, &input);
        assert_eq!(trace_hash(&recorded), trace_hash(&replayed));
        assert!(compare_traces(&recorded, &replayed).is_none(), "{algo}");
    }
}

#[test]
fn perturbed_input_diverges_at_initial_record() {
    let recorded = run_trace(Algorithm::MergeSort, &[4i64, 2, 7, 1]);
    let replayed = run_trace(Algorithm::MergeSort, &[4i64, 2, 7, 0]);
    let report = compare_traces(&recorded, &replayed).unwrap();
    assert_eq!(report.step, 0);
    assert_eq!(report.kind, DivergenceKind::Snapshot { index: 3 });
}

#[test]
fn step_through_matches_indexed_access() {
    let trace = run_trace(Algorithm::QuickSort, &[5i64, 3, 8, 1]);
    let mut cursor = TraceCursor::new(&trace);
    let mut index = 0;
    loop {
        assert_eq!(cursor.current(), &trace.steps()[index]);
        if !cursor.advance() {
            break;
        }
        index += 1;
    }
    assert_eq!(index, trace.len() - 1);
    while cursor.retreat() {
        index -= 1;
        assert_eq!(cursor.position(), index);
    }
    assert_eq!(index, 0);
}

#[test]
fn rebuilt_trace_compares_equal() {
    let trace = run_trace(Algorithm::HeapSort, &[9i64, 4, 6, 1, 3]);
    let rebuilt = Trace::from_steps(trace.algorithm(), trace.clone().into_steps()).unwrap();
    assert!(compare_traces(&trace, &rebuilt).is_none());
}

proptest! {
    #[test]
    fn repeated_runs_hash_identically(input in int_values()) {
        for algo in Algorithm::ALL {
            let a = run_trace(algo, &input);
            let b = run_trace(algo, &input);
            prop_assert_eq!(trace_hash(&a), trace_hash(&b));
            prop_assert_eq!(a, b);
        }
    }
}
