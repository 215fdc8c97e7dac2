//! Trace engine for the sortviz instrumented sorts.
//!
//! Records every step of a sort as an independent snapshot so the run can
//! be replayed one step at a time, and provides hashing and comparison
//! utilities for checking that two traces (or a trace and a metrics
//! record) agree.
//!
//! # Architecture
//!
//! - [`run_trace`] drives an algorithm body with a [`TraceRecorder`] and
//!   returns a [`Trace`]
//! - [`TraceCursor`] steps forwards and backwards through a trace
//! - [`trace_hash`] and [`compare_traces`] verify replay determinism
//! - [`check_agreement`] cross-checks a trace against the metrics engine
//!
//! # Layout
//!
//! ```text
//! [Initial array] [event 1] [event 2] ... [event N]
//! ```
//!
//! Record 0 is always the untouched input, so a trace is never empty.
//! Memory grows as `steps × n`; see [`Trace::snapshot_bytes`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agreement;
pub mod compare;
pub mod cursor;
pub mod error;
pub mod hash;
pub mod recorder;
pub mod trace;

pub use agreement::check_agreement;
pub use compare::{compare_traces, DivergenceKind, DivergenceReport};
pub use cursor::TraceCursor;
pub use error::AgreementError;
pub use hash::trace_hash;
pub use recorder::{run_trace, TraceRecorder};
pub use sortviz_core::{SortOperation, StepKind};
pub use trace::Trace;
