// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: match, resolve, build, window.
//!
//! ```text
//! query ──► matcher (×3 kinds) ──► intent ──► view ──► window(loaded)
//! ```
//!
//! Every stage is a pure function of the query, the immutable index, and the
//! tuning. Nothing here blocks or mutates shared state, so one
//! `Arc<CatalogIndex>` serves any number of concurrent queries.

pub mod intent;
pub mod matcher;
pub mod view;
pub mod window;

pub use intent::*;
pub use matcher::*;
pub use view::*;
pub use window::*;

use std::sync::Arc;

use serde::Serialize;

use crate::config::Tuning;
use crate::index::CatalogIndex;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Everything one query produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub intent: Intent,
    pub view: Vec<ViewItem>,
}

impl SearchOutcome {
    /// The outcome of a blank query.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            intent: Intent::default(),
            view: Vec::new(),
        }
    }

    pub fn product_rows(&self) -> usize {
        product_row_count(&self.view)
    }
}

/// An index snapshot paired with the tuning to query it with.
///
/// Cheap to clone; clones share the index.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: Arc<CatalogIndex>,
    tuning: Tuning,
}

impl SearchEngine {
    pub fn new(index: Arc<CatalogIndex>, tuning: Tuning) -> Self {
        Self { index, tuning }
    }

    pub fn index(&self) -> &Arc<CatalogIndex> {
        &self.index
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn detect_intent(&self, query: &str) -> Intent {
        detect_intent(query, &self.index, &self.tuning)
    }

    pub fn build_view(&self, query: &str, intent: &Intent) -> Vec<ViewItem> {
        build_view(query, intent, &self.index, &self.tuning)
    }

    /// Run the whole pipeline for one query.
    pub fn search(&self, query: &str) -> SearchOutcome {
        if query_key(query).is_none() {
            return SearchOutcome::empty(query);
        }
        let intent = self.detect_intent(query);
        let view = self.build_view(query, &intent);
        SearchOutcome {
            query: query.to_string(),
            intent,
            view,
        }
    }

    /// Evaluate independent queries, in parallel when the `parallel`
    /// feature is on. Output order matches input order.
    #[cfg(feature = "parallel")]
    pub fn search_many<S: AsRef<str> + Sync>(&self, queries: &[S]) -> Vec<SearchOutcome> {
        queries
            .par_iter()
            .map(|query| self.search(query.as_ref()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    pub fn search_many<S: AsRef<str> + Sync>(&self, queries: &[S]) -> Vec<SearchOutcome> {
        queries
            .iter()
            .map(|query| self.search(query.as_ref()))
            .collect()
    }
}
