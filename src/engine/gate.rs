//! Idle / search-in-flight control.
//!
//! The search itself is a plain synchronous call. Whoever drives it (a game
//! loop polled every frame, a UI thread) uses a gate to make sure at most one
//! search runs against the shared board at a time.

use parking_lot::Mutex;

/// State of a [`SearchGate`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Idle,
    Searching,
}

/// Two-state busy flag guarding a shared board.
#[derive(Debug, Default)]
pub struct SearchGate {
    state: Mutex<GateState>,
}

impl SearchGate {
    #[must_use]
    pub fn new() -> Self {
        SearchGate {
            state: Mutex::new(GateState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        *self.state.lock()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state() == GateState::Idle
    }

    /// Move to `Searching` if idle. The gate returns to `Idle` when the
    /// ticket is dropped.
    #[must_use]
    pub fn try_begin(&self) -> Option<SearchTicket<'_>> {
        let mut state = self.state.lock();
        if *state == GateState::Searching {
            return None;
        }
        *state = GateState::Searching;
        Some(SearchTicket { gate: self })
    }
}

/// Proof that the holder owns the search slot of a [`SearchGate`].
#[derive(Debug)]
pub struct SearchTicket<'g> {
    gate: &'g SearchGate,
}

impl Drop for SearchTicket<'_> {
    fn drop(&mut self) {
        *self.gate.state.lock() = GateState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn second_begin_is_refused() {
        let gate = SearchGate::new();
        let ticket = gate.try_begin();
        assert!(ticket.is_some());
        assert_eq!(gate.state(), GateState::Searching);
        assert!(gate.try_begin().is_none());
        drop(ticket);
        assert!(gate.is_idle());
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn only_one_thread_gets_in() {
        let gate = Arc::new(SearchGate::new());
        let held = gate.try_begin();
        assert!(held.is_some());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || gate.try_begin().is_some())
            })
            .collect();
        for handle in handles {
            assert!(!handle.join().unwrap());
        }
        drop(held);
        assert!(gate.is_idle());
    }
}
