//! sortviz: instrumented sorting engines for visualizing and comparing
//! classic sorts.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sortviz sub-crates. For most users, adding `sortviz` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sortviz::prelude::*;
//!
//! let input = [5, 3, 8, 1];
//!
//! // Aggregate counters.
//! let metrics = run_metrics(Algorithm::QuickSort, &input);
//! assert_eq!(metrics.operations(), 5);
//! assert_eq!(metrics.swaps(), 3);
//! assert_eq!(metrics.max_recursion_depth(), 2);
//!
//! // Full replayable trace of the same run.
//! let trace = run_trace(Algorithm::QuickSort, &input);
//! assert_eq!(trace.initial().description, "Initial array");
//! assert_eq!(trace.final_array(), [1, 3, 5, 8]);
//! check_agreement(&metrics, &trace).unwrap();
//!
//! // Step through it.
//! let mut cursor = TraceCursor::new(&trace);
//! cursor.advance();
//! assert_eq!(
//!     cursor.current().description,
//!     "Comparing element at index 0 (5) with pivot (1)"
//! );
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortviz-core` | `Algorithm`, `SortValue`, records, event model, `Probe` |
//! | [`algorithms`] | `sortviz-algorithms` | The four probe-instrumented algorithm bodies |
//! | [`metrics`] | `sortviz-metrics` | Metrics engine and counter probe |
//! | [`trace`] | `sortviz-trace` | Trace engine, cursor, hashing and divergence checks |
//! | [`bench`] | `sortviz-bench` | Sample data generators and the comparison sweep |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits and records (`sortviz-core`).
///
/// Contains [`types::Algorithm`], the [`types::SortValue`] element trait,
/// the [`types::SortEvent`] vocabulary and the [`types::Probe`]
/// instrumentation trait.
pub use sortviz_core as types;

/// The algorithm bodies (`sortviz-algorithms`).
///
/// Drive them directly with a custom [`types::Probe`] via
/// [`algorithms::sort_with`].
pub use sortviz_algorithms as algorithms;

/// Metrics engine (`sortviz-metrics`).
///
/// [`metrics::run_metrics`] returns one [`types::DetailedMetrics`] per run.
pub use sortviz_metrics as metrics;

/// Trace engine (`sortviz-trace`).
///
/// [`trace::run_trace`] records every step; [`trace::compare_traces`] and
/// [`trace::check_agreement`] verify determinism and cross-engine
/// agreement.
pub use sortviz_trace as trace;

/// Sample data and the comparison sweep (`sortviz-bench`).
///
/// [`bench::run_sweep`] runs every algorithm over several sizes on a
/// worker pool.
pub use sortviz_bench as bench;

/// Common imports for typical sortviz usage.
///
/// ```rust
/// use sortviz::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use sortviz_core::{
        parse_values, Algorithm, DetailedMetrics, SortOperation, SortValue, StepKind,
    };

    // Errors
    pub use sortviz_bench::ConfigError;
    pub use sortviz_core::UnknownAlgorithm;
    pub use sortviz_trace::AgreementError;

    // Engines
    pub use sortviz_metrics::{run_metrics, MetricsRunner};
    pub use sortviz_trace::{check_agreement, compare_traces, run_trace, Trace, TraceCursor};

    // Sweep
    pub use sortviz_bench::{run_sweep, ElementKind, SweepConfig, SweepReport};
}
