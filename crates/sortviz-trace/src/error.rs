//! Error types for the trace engine.

use std::fmt;

use sortviz_core::Algorithm;

/// A trace and a metrics record that should describe the same run but
/// do not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgreementError {
    /// The two records come from different algorithms.
    AlgorithmMismatch {
        /// Algorithm named by the metrics record.
        metrics: Algorithm,
        /// Algorithm named by the trace.
        trace: Algorithm,
    },
    /// The two records were produced from inputs of different lengths.
    InputSizeMismatch {
        /// Input size reported by the metrics record.
        metrics: usize,
        /// Length of the trace's initial snapshot.
        trace: usize,
    },
    /// The comparison counter differs from the number of compare steps.
    OperationMismatch {
        /// `operations` from the metrics record.
        operations: u64,
        /// Compare steps in the trace.
        compare_steps: u64,
    },
    /// The relocation counter differs from the number of swap/move steps.
    SwapMismatch {
        /// `swaps` from the metrics record.
        swaps: u64,
        /// Swap and move steps in the trace.
        relocation_steps: u64,
    },
}

impl fmt::Display for AgreementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlgorithmMismatch { metrics, trace } => {
                write!(f, "algorithm mismatch: metrics={metrics}, trace={trace}")
            }
            Self::InputSizeMismatch { metrics, trace } => {
                write!(f, "input size mismatch: metrics={metrics}, trace={trace}")
            }
            Self::OperationMismatch {
                operations,
                compare_steps,
            } => write!(
                f,
                "operation count mismatch: metrics={operations}, compare steps={compare_steps}"
            ),
            Self::SwapMismatch {
                swaps,
                relocation_steps,
            } => write!(
                f,
                "swap count mismatch: metrics={swaps}, relocation steps={relocation_steps}"
            ),
        }
    }
}

impl std::error::Error for AgreementError {}
