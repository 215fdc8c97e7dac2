//! Cross-check between the two engines.

use sortviz_core::{DetailedMetrics, SortValue};

use crate::error::AgreementError;
use crate::trace::Trace;

/// Verify that `metrics` and `trace` describe the same run.
///
/// Checks, in order: same algorithm, same input size, `operations`
/// equal to the number of compare steps, `swaps` equal to the number of
/// swap and move steps. Returns the first failure.
pub fn check_agreement<T: SortValue>(
    metrics: &DetailedMetrics,
    trace: &Trace<T>,
) -> Result<(), AgreementError> {
    if metrics.algorithm() != trace.algorithm() {
        return Err(AgreementError::AlgorithmMismatch {
            metrics: metrics.algorithm(),
            trace: trace.algorithm(),
        });
    }

    let traced_size = trace.initial().array.len();
    if metrics.input_size() != traced_size {
        return Err(AgreementError::InputSizeMismatch {
            metrics: metrics.input_size(),
            trace: traced_size,
        });
    }

    let compare_steps = trace.comparison_count();
    if metrics.operations() != compare_steps {
        return Err(AgreementError::OperationMismatch {
            operations: metrics.operations(),
            compare_steps,
        });
    }

    let relocation_steps = trace.relocation_count();
    if metrics.swaps() != relocation_steps {
        return Err(AgreementError::SwapMismatch {
            swaps: metrics.swaps(),
            relocation_steps,
        });
    }

    Ok(())
}
