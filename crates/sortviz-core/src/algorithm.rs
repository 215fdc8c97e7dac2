//! The closed set of instrumented algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownAlgorithm;

/// One of the four instrumented comparison sorts.
///
/// The [`name`](Algorithm::name) strings are stable: consumers key chart
/// series and picker entries on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Lomuto-partition quick sort, pivot = last element of the subrange.
    QuickSort,
    /// Top-down merge sort with copied-out runs.
    MergeSort,
    /// Max-heap sort with sift-down.
    HeapSort,
    /// Classic adjacent-swap bubble sort without early exit.
    BubbleSort,
}

impl Algorithm {
    /// All algorithms, in the order the comparison sweep runs them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::HeapSort,
        Algorithm::BubbleSort,
    ];

    /// Stable identifier, e.g. `"QuickSort"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::QuickSort => "QuickSort",
            Self::MergeSort => "MergeSort",
            Self::HeapSort => "HeapSort",
            Self::BubbleSort => "BubbleSort",
        }
    }

    /// Whether the metrics engine reports a recursion depth for this
    /// algorithm. Heap sort's sift-down is counted as iterative.
    pub fn is_recursive(self) -> bool {
        matches!(self, Self::QuickSort | Self::MergeSort)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        for algo in Self::ALL {
            let short = &algo.name()[..algo.name().len() - "Sort".len()];
            if needle.eq_ignore_ascii_case(algo.name()) || needle.eq_ignore_ascii_case(short) {
                return Ok(algo);
            }
        }
        Err(UnknownAlgorithm {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["QuickSort", "MergeSort", "HeapSort", "BubbleSort"]);
    }

    #[test]
    fn display_matches_name() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string(), algo.name());
        }
    }

    #[test]
    fn parses_full_and_short_names() {
        assert_eq!("QuickSort".parse::<Algorithm>(), Ok(Algorithm::QuickSort));
        assert_eq!("mergesort".parse::<Algorithm>(), Ok(Algorithm::MergeSort));
        assert_eq!(" heap ".parse::<Algorithm>(), Ok(Algorithm::HeapSort));
        assert_eq!("BUBBLE".parse::<Algorithm>(), Ok(Algorithm::BubbleSort));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "shellsort".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.name, "shellsort");
        assert!("".parse::<Algorithm>().is_err());
        assert!("sort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn only_quick_and_merge_report_depth() {
        assert!(Algorithm::QuickSort.is_recursive());
        assert!(Algorithm::MergeSort.is_recursive());
        assert!(!Algorithm::HeapSort.is_recursive());
        assert!(!Algorithm::BubbleSort.is_recursive());
    }
}
