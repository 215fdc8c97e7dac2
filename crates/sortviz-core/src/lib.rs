//! Core types and traits for the sortviz instrumented sorting engines.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the sortviz workspace:
//! the algorithm identifier, the element trait, the event model emitted
//! by the algorithm bodies, the [`Probe`] instrumentation trait, and the
//! result records produced by the metrics and trace engines.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod error;
pub mod event;
pub mod input;
pub mod metrics;
pub mod operation;
pub mod probe;
pub mod value;

pub use algorithm::Algorithm;
pub use error::UnknownAlgorithm;
pub use event::{ChildSide, RunSide, SortEvent};
pub use input::parse_values;
pub use metrics::DetailedMetrics;
pub use operation::{Highlights, SortOperation, StepKind};
pub use probe::{NullProbe, Probe};
pub use value::SortValue;
