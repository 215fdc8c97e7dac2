//! Metrics-engine entry points.

use std::time::Instant;

use sortviz_algorithms::sort_with;
use sortviz_core::{Algorithm, DetailedMetrics, SortValue};

use crate::stats::SortStats;

/// Sort a private copy of `values` with `algorithm` and report its
/// counters. The caller's slice is never touched.
///
/// ```
/// use sortviz_core::Algorithm;
/// use sortviz_metrics::run_metrics;
///
/// let m = run_metrics(Algorithm::BubbleSort, &[5, 3, 8, 1]);
/// assert_eq!(m.operations(), 6);
/// assert_eq!(m.swaps(), 4);
/// assert_eq!(m.max_recursion_depth(), 0);
/// ```
pub fn run_metrics<T: SortValue>(algorithm: Algorithm, values: &[T]) -> DetailedMetrics {
    let mut data = values.to_vec();
    let mut stats = SortStats::new();

    let start = Instant::now();
    sort_with(algorithm, &mut data, &mut stats);
    let elapsed = start.elapsed();

    debug_assert_eq!(stats.depth.current(), 0);
    let metrics = DetailedMetrics::new(
        algorithm,
        values.len(),
        elapsed,
        stats.operations,
        stats.swaps,
        stats.depth.max(),
    );
    tracing::debug!(
        algorithm = algorithm.name(),
        input_size = metrics.input_size(),
        operations = metrics.operations(),
        swaps = metrics.swaps(),
        max_recursion_depth = metrics.max_recursion_depth(),
        elapsed_us = metrics.elapsed().as_micros() as u64,
        "metrics_run_completed"
    );
    metrics
}

/// A metrics runner bound to one algorithm.
///
/// Stateless between runs; one runner can serve any number of inputs of
/// any [`SortValue`] type, from any thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricsRunner {
    algorithm: Algorithm,
}

impl MetricsRunner {
    /// Runner for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// One runner per algorithm, in [`Algorithm::ALL`] order.
    pub fn all() -> [MetricsRunner; 4] {
        Algorithm::ALL.map(MetricsRunner::new)
    }

    /// The bound algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// See [`run_metrics`].
    pub fn run<T: SortValue>(&self, values: &[T]) -> DetailedMetrics {
        run_metrics(self.algorithm, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_test_utils::{hand_traced, HAND_TRACED_INPUT};

    #[test]
    fn hand_traced_counts() {
        for row in hand_traced() {
            let m = run_metrics(row.algorithm, &HAND_TRACED_INPUT);
            assert_eq!(m.algorithm(), row.algorithm);
            assert_eq!(m.input_size(), 4);
            assert_eq!(m.operations(), row.operations, "{}", row.algorithm);
            assert_eq!(m.swaps(), row.swaps, "{}", row.algorithm);
            assert_eq!(
                m.max_recursion_depth(),
                row.max_recursion_depth,
                "{}",
                row.algorithm
            );
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![3.5f64, -1.0, 2.25];
        for algo in Algorithm::ALL {
            let _ = run_metrics(algo, &input);
            assert_eq!(input, [3.5, -1.0, 2.25]);
        }
    }

    #[test]
    fn runner_matches_free_function() {
        for runner in MetricsRunner::all() {
            let a = runner.run(&HAND_TRACED_INPUT);
            let b = run_metrics(runner.algorithm(), &HAND_TRACED_INPUT);
            assert_eq!(a.operations(), b.operations());
            assert_eq!(a.swaps(), b.swaps());
            assert_eq!(a.max_recursion_depth(), b.max_recursion_depth());
        }
    }
}
