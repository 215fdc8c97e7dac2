//! Step records: one instant of a sort trace.

use smallvec::SmallVec;

/// Highlighted positions of a step. At most two indices, so never spills.
pub type Highlights = SmallVec<[usize; 2]>;

/// Classification of a step record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// The untouched input, always the first record.
    Initial,
    /// Two elements were compared.
    Compare,
    /// Two positions exchanged values.
    Swap,
    /// One value was written into the output range (merge sort).
    Move,
    /// A comparison concluded without relocating anything.
    NoSwap,
    /// A heap child became the new largest candidate.
    Select,
    /// A heap sift-down ended without a swap.
    Settle,
}

impl StepKind {
    /// Whether the step relocated a value. The number of relocation steps
    /// in a trace equals the metrics engine's `swaps` counter.
    pub fn is_relocation(self) -> bool {
        matches!(self, Self::Swap | Self::Move)
    }

    /// Stable one-byte tag, used for trace hashing.
    pub fn tag(self) -> u8 {
        match self {
            Self::Initial => 0,
            Self::Compare => 1,
            Self::Swap => 2,
            Self::Move => 3,
            Self::NoSwap => 4,
            Self::Select => 5,
            Self::Settle => 6,
        }
    }
}

/// One step of a trace: an independent snapshot of the array, the
/// positions the step concerns, and what happened.
///
/// Snapshots never alias each other; each record owns its own `Vec`.
#[derive(Clone, Debug, PartialEq)]
pub struct SortOperation<T> {
    /// Array contents right after the step.
    pub array: Vec<T>,
    /// Positions to highlight, possibly empty.
    pub highlights: Highlights,
    /// Human-readable summary.
    pub description: String,
    /// What kind of step this is.
    pub kind: StepKind,
}

impl<T: Clone> SortOperation<T> {
    /// The leading "Initial array" record for `input`.
    pub fn initial(input: &[T]) -> Self {
        Self {
            array: input.to_vec(),
            highlights: Highlights::new(),
            description: "Initial array".to_string(),
            kind: StepKind::Initial,
        }
    }
}

impl<T> SortOperation<T> {
    /// Whether `index` is highlighted in this step.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlights.contains(&index)
    }
}
