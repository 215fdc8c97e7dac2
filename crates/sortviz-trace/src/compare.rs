//! Trace comparison and replay verification.
//!
//! Hash-first comparison (fast path) with a step-by-step fallback on
//! mismatch that locates the first diverging record.

use std::fmt;

use sortviz_core::{SortOperation, SortValue, StepKind};

use crate::hash::trace_hash;
use crate::trace::Trace;

/// What differs at the first diverging step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// One trace ended while the other continued.
    Length {
        /// Records in the recorded trace.
        recorded: usize,
        /// Records in the replayed trace.
        replayed: usize,
    },
    /// The step kinds differ.
    Kind {
        /// Kind in the recorded trace.
        recorded: StepKind,
        /// Kind in the replayed trace.
        replayed: StepKind,
    },
    /// The snapshots differ, first at array position `index`. A length
    /// difference reports the shorter length.
    Snapshot {
        /// First differing array position.
        index: usize,
    },
    /// The highlighted positions differ.
    Highlights,
    /// The descriptions differ.
    Description,
}

/// Where and how two traces first disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Index of the first diverging record.
    pub step: usize,
    /// What differs there.
    pub kind: DivergenceKind,
    /// [`trace_hash`] of the recorded trace.
    pub recorded_hash: u64,
    /// [`trace_hash`] of the replayed trace.
    pub replayed_hash: u64,
}

impl fmt::Display for DivergenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "traces diverge at step {}: ", self.step)?;
        match &self.kind {
            DivergenceKind::Length { recorded, replayed } => {
                write!(f, "length recorded={recorded}, replayed={replayed}")?
            }
            DivergenceKind::Kind { recorded, replayed } => {
                write!(f, "kind recorded={recorded:?}, replayed={replayed:?}")?
            }
            DivergenceKind::Snapshot { index } => write!(f, "snapshot at index {index}")?,
            DivergenceKind::Highlights => f.write_str("highlights")?,
            DivergenceKind::Description => f.write_str("description")?,
        }
        write!(
            f,
            " (recorded={:#018x}, replayed={:#018x})",
            self.recorded_hash, self.replayed_hash
        )
    }
}

/// Compare a replayed trace against a recorded one.
///
/// Fast path: hash both traces. If the hashes match, returns `None`.
/// On mismatch, walks the records in order and reports the first one that
/// differs. Values are compared bit-exactly, so `0.0` and `-0.0` differ.
pub fn compare_traces<T: SortValue>(
    recorded: &Trace<T>,
    replayed: &Trace<T>,
) -> Option<DivergenceReport> {
    let recorded_hash = trace_hash(recorded);
    let replayed_hash = trace_hash(replayed);

    if recorded_hash == replayed_hash {
        return None;
    }

    let (step, kind) = first_divergence(recorded, replayed)?;
    Some(DivergenceReport {
        step,
        kind,
        recorded_hash,
        replayed_hash,
    })
}

fn first_divergence<T: SortValue>(
    recorded: &Trace<T>,
    replayed: &Trace<T>,
) -> Option<(usize, DivergenceKind)> {
    for (step, (rec, rep)) in recorded.iter().zip(replayed.iter()).enumerate() {
        if let Some(kind) = step_divergence(rec, rep) {
            return Some((step, kind));
        }
    }

    if recorded.len() != replayed.len() {
        return Some((
            recorded.len().min(replayed.len()),
            DivergenceKind::Length {
                recorded: recorded.len(),
                replayed: replayed.len(),
            },
        ));
    }

    None
}

fn step_divergence<T: SortValue>(
    rec: &SortOperation<T>,
    rep: &SortOperation<T>,
) -> Option<DivergenceKind> {
    if rec.kind != rep.kind {
        return Some(DivergenceKind::Kind {
            recorded: rec.kind,
            replayed: rep.kind,
        });
    }

    let differing = rec
        .array
        .iter()
        .zip(rep.array.iter())
        .position(|(&a, &b)| a.hash_bits() != b.hash_bits());
    if let Some(index) = differing {
        return Some(DivergenceKind::Snapshot { index });
    }
    if rec.array.len() != rep.array.len() {
        return Some(DivergenceKind::Snapshot {
            index: rec.array.len().min(rep.array.len()),
        });
    }

    if rec.highlights != rep.highlights {
        return Some(DivergenceKind::Highlights);
    }
    if rec.description != rep.description {
        return Some(DivergenceKind::Description);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::run_trace;
    use sortviz_core::Algorithm;

    fn edited(trace: &Trace<i64>, edit: impl FnOnce(&mut Vec<SortOperation<i64>>)) -> Trace<i64> {
        let mut steps = trace.clone().into_steps();
        edit(&mut steps);
        Trace::from_steps(trace.algorithm(), steps).unwrap()
    }

    #[test]
    fn identical_traces_return_none() {
        let a = run_trace(Algorithm::HeapSort, &[5i64, 3, 8, 1]);
        let b = run_trace(Algorithm::HeapSort, &[5i64, 3, 8, 1]);
        assert!(compare_traces(&a, &b).is_none());
    }

    #[test]
    fn snapshot_divergence_names_position() {
        let a = run_trace(Algorithm::BubbleSort, &[5i64, 3, 8, 1]);
        let b = edited(&a, |s| s[4].array[2] = 42);
        let report = compare_traces(&a, &b).unwrap();
        assert_eq!(report.step, 4);
        assert_eq!(report.kind, DivergenceKind::Snapshot { index: 2 });
        assert_ne!(report.recorded_hash, report.replayed_hash);
    }

    #[test]
    fn truncated_replay_reports_length() {
        let a = run_trace(Algorithm::MergeSort, &[5i64, 3, 8, 1]);
        let b = edited(&a, |s| s.truncate(9));
        let report = compare_traces(&a, &b).unwrap();
        assert_eq!(report.step, 9);
        assert_eq!(
            report.kind,
            DivergenceKind::Length {
                recorded: 14,
                replayed: 9
            }
        );
    }

    #[test]
    fn kind_highlight_and_description_divergences() {
        let a = run_trace(Algorithm::QuickSort, &[5i64, 3, 8, 1]);

        let b = edited(&a, |s| s[1].kind = StepKind::Settle);
        let report = compare_traces(&a, &b).unwrap();
        assert_eq!(report.step, 1);
        assert_eq!(
            report.kind,
            DivergenceKind::Kind {
                recorded: StepKind::Compare,
                replayed: StepKind::Settle
            }
        );

        let b = edited(&a, |s| s[2].highlights.push(3));
        assert_eq!(
            compare_traces(&a, &b).unwrap().kind,
            DivergenceKind::Highlights
        );

        let b = edited(&a, |s| s[3].description.clear());
        let report = compare_traces(&a, &b).unwrap();
        assert_eq!(report.step, 3);
        assert_eq!(report.kind, DivergenceKind::Description);
    }

    #[test]
    fn report_display_includes_step_and_hashes() {
        let a = run_trace(Algorithm::BubbleSort, &[2i64, 1]);
        let b = edited(&a, |s| s[2].description.clear());
        let text = compare_traces(&a, &b).unwrap().to_string();
        assert!(text.starts_with("traces diverge at step 2: description"));
        assert!(text.contains("recorded=0x"));
    }
}
