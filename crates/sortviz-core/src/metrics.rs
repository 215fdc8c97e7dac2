//! Aggregate performance record for one sort run.
//!
//! [`DetailedMetrics`] is produced once per metrics-engine run and never
//! changes afterwards. A results collector can hold many of them across
//! threads without coordination.

use std::fmt;
use std::time::Duration;

use crate::algorithm::Algorithm;

/// Counters and timing collected for one run of one algorithm.
///
/// The `swaps` counter counts value relocations. For merge sort those are
/// output writes ("moves"), not pairwise exchanges; the accessor keeps the
/// historical name so all four algorithms share one column.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailedMetrics {
    algorithm: Algorithm,
    input_size: usize,
    elapsed: Duration,
    operations: u64,
    swaps: u64,
    max_recursion_depth: u32,
}

impl DetailedMetrics {
    /// Assemble a record. Called by the metrics engine after the sort
    /// returns.
    pub fn new(
        algorithm: Algorithm,
        input_size: usize,
        elapsed: Duration,
        operations: u64,
        swaps: u64,
        max_recursion_depth: u32,
    ) -> Self {
        Self {
            algorithm,
            input_size,
            elapsed,
            operations,
            swaps,
            max_recursion_depth,
        }
    }

    /// Which algorithm produced this record.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of elements sorted.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Wall-clock duration of the sort call alone.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// [`elapsed`](Self::elapsed) as fractional seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Element comparisons performed.
    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Value relocations performed (swaps, or moves for merge sort).
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Alias of [`swaps`](Self::swaps) that reads better for merge sort.
    pub fn moves(&self) -> u64 {
        self.swaps
    }

    /// Deepest simultaneous nesting of counted recursive calls.
    /// Always 0 for bubble and heap sort.
    pub fn max_recursion_depth(&self) -> u32 {
        self.max_recursion_depth
    }
}

/// One table row: `algorithm size time ops swaps depth`.
impl fmt::Display for DetailedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:>6} {:>10.6} {:>10} {:>10} {:>6}",
            self.algorithm.name(),
            self.input_size,
            self.elapsed_seconds(),
            self.operations,
            self.swaps,
            self.max_recursion_depth
        )
    }
}
