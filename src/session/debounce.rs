// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounce as a two-state machine driven by caller-supplied instants.
//!
//! ```text
//!            set(q, now)                  poll(now >= deadline)
//!   Idle ──────────────────► Pending(q, now + delay) ──────────────► Idle, emits q
//!                             │   ▲
//!                             └───┘ set(q', now): replace query, restart deadline
//! ```
//!
//! No timers or threads: the owner calls [`Debouncer::poll`] from whatever
//! loop it already runs (a UI tick, an event loop, a test).

use std::time::{Duration, Instant};

use log::trace;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DebounceState {
    #[default]
    Idle,
    Pending { query: String, deadline: Instant },
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    state: DebounceState,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// When the pending query fires, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            DebounceState::Pending { deadline, .. } => Some(*deadline),
            DebounceState::Idle => None,
        }
    }

    /// Record new input. Restarts the quiet period.
    pub fn set(&mut self, query: impl Into<String>, now: Instant) {
        let query = query.into();
        let deadline = now + self.delay;
        trace!("debounce: pending {:?} until +{:?}", query, self.delay);
        self.state = DebounceState::Pending { query, deadline };
    }

    /// Emit the pending query once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = matches!(
            &self.state,
            DebounceState::Pending { deadline, .. } if now >= *deadline
        );
        if !due {
            return None;
        }
        match std::mem::take(&mut self.state) {
            DebounceState::Pending { query, .. } => {
                trace!("debounce: fired {:?}", query);
                Some(query)
            }
            DebounceState::Idle => None,
        }
    }

    /// Drop any pending query.
    pub fn cancel(&mut self) {
        if self.is_pending() {
            trace!("debounce: cancelled");
        }
        self.state = DebounceState::Idle;
    }
}
