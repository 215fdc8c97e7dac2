//! Error types for the core data model.
//!
//! The engines themselves are infallible; the only fallible core
//! operation is resolving an algorithm from its textual name.

use std::error::Error;
use std::fmt;

/// Returned by [`Algorithm::from_str`](crate::Algorithm) when the name
/// matches none of the four algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm {
    /// The name as supplied by the caller.
    pub name: String,
}

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected QuickSort, MergeSort, HeapSort or BubbleSort)",
            self.name
        )
    }
}

impl Error for UnknownAlgorithm {}
