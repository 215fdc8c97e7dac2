//! Sweep configuration, validation, and error types.
//!
//! [`SweepConfig`] is the input to [`run_sweep`](crate::run_sweep).
//! [`validate()`](SweepConfig::validate) checks it up front so a sweep
//! never fails halfway through.

use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;

use sortviz_core::Algorithm;

use crate::sample::{DEFAULT_FLOAT_RANGE, DEFAULT_INT_RANGE};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`SweepConfig::validate()`] or while starting a
/// sweep.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// No input sizes configured.
    NoSizes,
    /// No algorithms configured.
    NoAlgorithms,
    /// An algorithm appears more than once.
    DuplicateAlgorithm {
        /// The repeated algorithm.
        algorithm: Algorithm,
    },
    /// Integer range has `start > end`.
    InvalidIntRange {
        /// Configured lower bound.
        start: i64,
        /// Configured upper bound.
        end: i64,
    },
    /// Float range is inverted, has a non-finite bound, or is too wide
    /// for its width to be finite.
    InvalidFloatRange {
        /// Configured lower bound.
        start: f64,
        /// Configured upper bound.
        end: f64,
    },
    /// `worker_count` was explicitly set to zero.
    ZeroWorkers,
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSizes => write!(f, "no input sizes configured"),
            Self::NoAlgorithms => write!(f, "no algorithms configured"),
            Self::DuplicateAlgorithm { algorithm } => {
                write!(f, "algorithm {algorithm} listed more than once")
            }
            Self::InvalidIntRange { start, end } => {
                write!(f, "int_range {start}..={end} is empty")
            }
            Self::InvalidFloatRange { start, end } => {
                write!(
                    f,
                    "float_range {start}..={end} must be ordered with finite bounds and width"
                )
            }
            Self::ZeroWorkers => write!(f, "worker_count must be at least 1"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SweepConfig ────────────────────────────────────────────────────

/// Multi-size comparison run over a set of algorithms.
///
/// For each size one integer array and one float array are generated and
/// shared by every algorithm at that size, so the algorithms are compared
/// on identical data.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Input sizes, in report order. Default: `[50, 100, 500, 1000]`.
    pub sizes: Vec<usize>,
    /// Algorithms, in report order. Default: [`Algorithm::ALL`].
    pub algorithms: Vec<Algorithm>,
    /// Integer value range. Default: [`DEFAULT_INT_RANGE`].
    pub int_range: RangeInclusive<i64>,
    /// Float value range. Default: [`DEFAULT_FLOAT_RANGE`].
    pub float_range: RangeInclusive<f64>,
    /// RNG seed. `None` draws a fresh seed, which the report records.
    pub seed: Option<u64>,
    /// Worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![50, 100, 500, 1000],
            algorithms: Algorithm::ALL.to_vec(),
            int_range: DEFAULT_INT_RANGE,
            float_range: DEFAULT_FLOAT_RANGE,
            seed: None,
            worker_count: None,
        }
    }
}

impl SweepConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }
        for (i, &algorithm) in self.algorithms.iter().enumerate() {
            if self.algorithms[..i].contains(&algorithm) {
                return Err(ConfigError::DuplicateAlgorithm { algorithm });
            }
        }

        let (start, end) = (*self.int_range.start(), *self.int_range.end());
        if start > end {
            return Err(ConfigError::InvalidIntRange { start, end });
        }

        let (start, end) = (*self.float_range.start(), *self.float_range.end());
        let width = end - start;
        if !start.is_finite() || !end.is_finite() || start > end || !width.is_finite() {
            return Err(ConfigError::InvalidFloatRange { start, end });
        }

        if self.worker_count == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = SweepConfig::default();
        assert_eq!(cfg.sizes, [50, 100, 500, 1000]);
        assert_eq!(cfg.algorithms, Algorithm::ALL);
        assert_eq!(cfg.int_range, 0..=10_000);
        assert!(cfg.seed.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_lists_fail() {
        let cfg = SweepConfig {
            sizes: vec![],
            ..SweepConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoSizes));

        let cfg = SweepConfig {
            algorithms: vec![],
            ..SweepConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoAlgorithms));
    }

    #[test]
    fn duplicate_algorithm_fails() {
        let cfg = SweepConfig {
            algorithms: vec![Algorithm::HeapSort, Algorithm::QuickSort, Algorithm::HeapSort],
            ..SweepConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DuplicateAlgorithm {
                algorithm: Algorithm::HeapSort
            })
        );
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn bad_ranges_fail() {
        let cfg = SweepConfig {
            int_range: 10..=1,
            ..SweepConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidIntRange { start: 10, end: 1 })
        );

        for float_range in [
            2.0..=1.0,
            f64::NEG_INFINITY..=0.0,
            0.0..=f64::NAN,
            f64::MIN..=f64::MAX,
        ] {
            let cfg = SweepConfig {
                float_range,
                ..SweepConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidFloatRange { .. })
            ));
        }

        let widest = SweepConfig {
            float_range: f64::MIN / 2.0..=f64::MAX / 2.0,
            ..SweepConfig::default()
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn zero_workers_fails_and_auto_is_bounded() {
        let cfg = SweepConfig {
            worker_count: Some(0),
            ..SweepConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWorkers));

        let auto = SweepConfig::default().resolved_worker_count();
        assert!((1..=16).contains(&auto));

        let explicit = SweepConfig {
            worker_count: Some(1000),
            ..SweepConfig::default()
        };
        assert_eq!(explicit.resolved_worker_count(), 64);
    }

    #[test]
    fn errors_display() {
        assert_eq!(
            ConfigError::ZeroWorkers.to_string(),
            "worker_count must be at least 1"
        );
        assert_eq!(
            ConfigError::InvalidIntRange { start: 3, end: 1 }.to_string(),
            "int_range 3..=1 is empty"
        );
    }
}
