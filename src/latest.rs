//! A one-slot mailbox for render results where only the newest request
//! counts.  Starting a render supersedes every render before it; a
//! superseded result is dropped on arrival, never merged, and never
//! handed out.
//!
//! The renderer itself is one-shot and never needs this.  It is for
//! callers that re-render on every parameter change, such as an
//! interactive front end running renders on worker threads, and want
//! the newest frame without waiting out the old ones.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Proof of which render request a result belongs to.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket(usize);

/// Holds at most one result: the one for the newest ticket.
#[derive(Debug)]
pub struct LatestFrame<T> {
    generation: AtomicUsize,
    slot: Mutex<Option<(usize, T)>>,
}

impl<T> Default for LatestFrame<T> {
    fn default() -> Self {
        LatestFrame::new()
    }
}

impl<T> LatestFrame<T> {
    /// An empty slot with no render in flight.
    pub fn new() -> Self {
        LatestFrame {
            generation: AtomicUsize::new(0),
            slot: Mutex::new(None),
        }
    }

    /// Start a new render.  Every ticket handed out before this one is
    /// stale from now on.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the newest.  A long render may check
    /// this to give up early.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Deliver a finished result.  Returns false, dropping `value`, if
    /// a newer render has been started since `ticket` was issued.
    pub fn offer(&self, ticket: Ticket, value: T) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !self.is_current(&ticket) {
            trace!("dropping stale result {}", ticket.0);
            return false;
        }
        *slot = Some((ticket.0, value));
        true
    }

    /// Take the result of the newest render, if it has arrived.  A
    /// result overtaken by a later `begin` is discarded here.
    pub fn take(&self) -> Option<T> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match slot.take() {
            Some((generation, value)) if generation == self.generation.load(Ordering::SeqCst) => Some(value),
            _ => None,
        }
    }
}
