//! The instrumentation seam between algorithm bodies and engines.

use crate::event::SortEvent;

/// Receives every event an algorithm body performs.
///
/// The metrics engine implements this with plain counters; the trace
/// engine snapshots `data` into a step record. Both see exactly the same
/// event stream, which is what keeps their counts in agreement.
pub trait Probe<T> {
    /// Called once per event, after the event has been applied to `data`.
    fn record(&mut self, data: &[T], event: SortEvent<T>);

    /// Called on entry to a counted recursive call (quick and merge sort,
    /// only when the subrange holds at least two elements).
    fn enter(&mut self) {}

    /// Paired with [`enter`](Probe::enter) on return from that call.
    fn leave(&mut self) {}
}

impl<T, P: Probe<T> + ?Sized> Probe<T> for &mut P {
    fn record(&mut self, data: &[T], event: SortEvent<T>) {
        (**self).record(data, event);
    }

    fn enter(&mut self) {
        (**self).enter();
    }

    fn leave(&mut self) {
        (**self).leave();
    }
}

/// A probe that ignores everything; runs an algorithm uninstrumented.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProbe;

impl<T> Probe<T> for NullProbe {
    #[inline]
    fn record(&mut self, _data: &[T], _event: SortEvent<T>) {}
}
