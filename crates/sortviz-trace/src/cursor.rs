//! Step-by-step navigation over a recorded trace.

use sortviz_core::{SortOperation, SortValue};

use crate::trace::Trace;

/// A position in a [`Trace`], always within `0..trace.len()`.
///
/// Moving past either end is a no-op; [`advance`](Self::advance) and
/// [`retreat`](Self::retreat) report whether they moved.
#[derive(Clone, Copy, Debug)]
pub struct TraceCursor<'a, T> {
    trace: &'a Trace<T>,
    position: usize,
}

impl<'a, T: SortValue> TraceCursor<'a, T> {
    /// A cursor on the initial record.
    pub fn new(trace: &'a Trace<T>) -> Self {
        Self { trace, position: 0 }
    }

    /// The record under the cursor.
    pub fn current(&self) -> &'a SortOperation<T> {
        &self.trace.steps()[self.position]
    }

    /// Index of the record under the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The trace being navigated.
    pub fn trace(&self) -> &'a Trace<T> {
        self.trace
    }

    /// Step forward. Returns `false` on the last record.
    pub fn advance(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Step back. Returns `false` on the initial record.
    pub fn retreat(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Jump to `index`, clamped to the last record.
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.trace.len() - 1);
    }

    /// Jump back to the initial record.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Whether the cursor is on the initial record.
    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    /// Whether the cursor is on the last record.
    pub fn is_at_end(&self) -> bool {
        self.position + 1 == self.trace.len()
    }
}
