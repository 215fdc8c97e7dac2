//! Metrics engine for the sortviz instrumented sorts.
//!
//! Runs one algorithm to completion on a private copy of the input and
//! reports a [`DetailedMetrics`] record: comparisons, relocations,
//! maximum recursion depth and wall-clock time of the sort call.
//!
//! # Counting rules
//!
//! | Algorithm | operations | swaps | depth |
//! |-----------|------------|-------|-------|
//! | bubble | each `(i, j)` comparison | each adjacent exchange | 0 |
//! | quick | each element scanned against the pivot | each scan swap + one pivot swap per partition | nesting of `low < high` calls |
//! | merge | each head-to-head comparison | each output write (moves) | nesting of `start < end` calls |
//! | heap | each child compared | each root extraction + each sift swap | 0 |
//!
//! Inputs with fewer than two elements report all-zero counters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod runner;
pub mod stats;

pub use runner::{run_metrics, MetricsRunner};
pub use sortviz_core::DetailedMetrics;
pub use stats::{DepthGauge, SortStats};
