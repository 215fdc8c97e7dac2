//! Sample data, comparison sweeps and benchmark utilities for the sortviz
//! engines.
//!
//! - [`sample`]: seeded random arrays ([`random_ints`], [`random_floats`],
//!   [`random_array`])
//! - [`SweepConfig`] / [`run_sweep`]: every algorithm over every size, for
//!   both element types, on a worker pool
//! - [`SweepReport::by_algorithm`]: results grouped into per-algorithm
//!   series

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod sample;
pub mod sweep;

pub use config::{ConfigError, SweepConfig};
pub use sample::{
    random_array, random_floats, random_ints, seeded_rng, DEFAULT_FLOAT_RANGE,
    DEFAULT_INT_RANGE, SAMPLE_RANGE,
};
pub use sweep::{run_sweep, ElementKind, SweepReport};
