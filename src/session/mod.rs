// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type, as the results panel sees it.
//!
//! A [`SearchSession`] owns the debounce state, the latest accepted outcome
//! and the scroll cursor. The caller drives it with explicit instants:
//!
//! ```ignore
//! session.set_query("notebok", now);
//! // ... later, from the UI tick:
//! if let Some(ticket) = session.poll(now) {
//!     let outcome = session.run(&ticket);   // may happen on another thread
//!     session.complete(ticket, outcome);
//! }
//! render(session.visible_items());
//! ```
//!
//! Evaluation is split from acceptance so a caller can run queries off the
//! UI thread. Every ticket carries a generation; an outcome is only accepted
//! if its ticket is still the newest and its query still matches the input.
//! Anything else was superseded and is dropped.

mod debounce;

pub use debounce::*;

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::catalog::CatalogHandle;
use crate::config::{SessionSettings, Tuning};
use crate::search::{advance, product_row_count, window, SearchEngine, SearchOutcome, ViewItem};

/// A debounced query, handed out for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct SearchSession {
    catalog: CatalogHandle,
    tuning: Tuning,
    settings: SessionSettings,
    debouncer: Debouncer,
    input: String,
    generation: u64,
    outcome: SearchOutcome,
    loaded: usize,
}

impl SearchSession {
    pub fn new(catalog: CatalogHandle, tuning: Tuning, settings: SessionSettings) -> Self {
        Self {
            catalog,
            tuning,
            debouncer: Debouncer::new(Duration::from_millis(settings.debounce_ms)),
            settings,
            input: String::new(),
            generation: 0,
            outcome: SearchOutcome::empty(""),
            loaded: settings.batch_size,
        }
    }

    /// The engine for the catalog as it is right now.
    pub fn engine(&self) -> SearchEngine {
        SearchEngine::new(self.catalog.current(), self.tuning)
    }

    /// Current input text, which may not have been evaluated yet.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending query becomes due, for callers that sleep until then.
    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// Update the active query. Evaluation waits for the debounce period.
    pub fn set_query(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.debouncer.set(text.clone(), now);
        self.input = text;
    }

    /// Re-seed the query with a "did you mean" entry.
    pub fn select_suggestion(&mut self, text: &str, now: Instant) {
        self.set_query(text, now);
    }

    /// Re-seed the query with a chip (category or subcategory name).
    pub fn select_chip(&mut self, text: &str, now: Instant) {
        self.set_query(text, now);
    }

    /// The catalog behind the handle changed; evaluate the active query again.
    ///
    /// Any ticket issued before this call is stale once the new one is polled.
    pub fn catalog_refreshed(&mut self, now: Instant) {
        debug!("session: catalog refreshed, re-queueing {:?}", self.input);
        let input = self.input.clone();
        self.debouncer.set(input, now);
    }

    // =========================================================================
    // EVALUATION
    // =========================================================================

    /// Hand out the debounced query once it is due.
    pub fn poll(&mut self, now: Instant) -> Option<QueryTicket> {
        let query = self.debouncer.poll(now)?;
        self.generation += 1;
        Some(QueryTicket {
            generation: self.generation,
            query,
        })
    }

    /// Evaluate a ticket. Pure: does not touch the session.
    pub fn run(&self, ticket: &QueryTicket) -> SearchOutcome {
        self.engine().search(&ticket.query)
    }

    /// Accept an outcome, unless it was superseded.
    ///
    /// Returns whether the visible results changed.
    pub fn complete(&mut self, ticket: QueryTicket, outcome: SearchOutcome) -> bool {
        if ticket.generation != self.generation || ticket.query != self.input {
            warn!(
                "dropping stale result for {:?} (generation {}, latest {})",
                ticket.query, ticket.generation, self.generation
            );
            return false;
        }
        if outcome.query != self.outcome.query {
            self.loaded = self.settings.batch_size;
        }
        debug!(
            "session: showing {:?} ({} rows)",
            outcome.query,
            outcome.product_rows()
        );
        self.outcome = outcome;
        true
    }

    /// Poll, run and complete in one step, for single-threaded callers.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.poll(now) {
            Some(ticket) => {
                let outcome = self.run(&ticket);
                self.complete(ticket, outcome)
            }
            None => false,
        }
    }

    /// Skip the debounce and evaluate the current input now.
    pub fn flush(&mut self) -> bool {
        self.debouncer.cancel();
        self.generation += 1;
        let ticket = QueryTicket {
            generation: self.generation,
            query: self.input.clone(),
        };
        let outcome = self.run(&ticket);
        self.complete(ticket, outcome)
    }

    // =========================================================================
    // READ SIDE
    // =========================================================================

    /// First N category names; independent of the query.
    pub fn quick_categories(&self) -> Vec<String> {
        self.catalog
            .current()
            .quick_categories(self.settings.quick_categories)
    }

    pub fn did_you_mean(&self) -> Vec<String> {
        self.outcome.intent.suggestion_names()
    }

    pub fn visible_items(&self) -> &[ViewItem] {
        window(&self.outcome.view, self.loaded)
    }

    pub fn has_more(&self) -> bool {
        self.loaded < product_row_count(&self.outcome.view)
    }

    /// Reveal one more batch. Returns false when everything is already shown.
    pub fn on_scroll_near_end(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.loaded = advance(self.loaded, self.settings.batch_size);
        true
    }
}
