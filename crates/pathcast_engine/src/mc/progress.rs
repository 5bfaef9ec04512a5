//! Completion reporting for long simulation runs.
//!
//! Progress is informational only. Observers are called from worker threads
//! in completion order, which need not match simulation index order.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Receives one event per finished simulation.
pub trait ProgressObserver: Sync {
    /// Called after simulation `index` finishes.
    ///
    /// `completed` counts finished simulations including this one; `total`
    /// is the requested simulation count.
    fn on_simulation_complete(&self, index: usize, completed: usize, total: usize);
}

/// Observer that ignores all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    #[inline]
    fn on_simulation_complete(&self, _index: usize, _completed: usize, _total: usize) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(usize, usize, usize) + Sync,
{
    #[inline]
    fn on_simulation_complete(&self, index: usize, completed: usize, total: usize) {
        self(index, completed, total)
    }
}

/// Shared completion counter used by the engine while a run is in flight.
#[derive(Debug)]
pub(crate) struct CompletionCounter {
    completed: AtomicUsize,
    total: usize,
}

impl CompletionCounter {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
        }
    }

    /// Records one completion and notifies the observer.
    pub(crate) fn record<P: ProgressObserver + ?Sized>(&self, index: usize, observer: &P) {
        let completed = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        observer.on_simulation_complete(index, completed, self.total);
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }
}
