// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-K fuzzy matching over one flat index.
//!
//! Linear scan, score everything, keep what clears the bar, stable sort,
//! truncate. Catalogs are thousands of names, not millions, and the full scan
//! keeps the ranking exact: no candidate is missed because a prefilter
//! guessed wrong.
//!
//! **Invariant**: output is sorted by descending score; equal scores keep
//! their flat-index order.

use crate::scoring::ranking::compare_candidates;
use crate::scoring::Scorer;
use crate::types::{ScoredCandidate, Searchable};
use crate::utils::normalize;

/// Normalize a raw query the same way flat-index names were normalized.
///
/// Returns `None` when nothing searchable is left.
pub fn query_key(query: &str) -> Option<String> {
    let key = normalize(query);
    let trimmed = key.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == key.len() {
        Some(key)
    } else {
        Some(trimmed.to_string())
    }
}

/// Best `limit` items scoring at least `min_score` against `query`.
///
/// Returns an empty vector for a blank query. Does not touch `items`.
///
/// # Example
///
/// ```ignore
/// let hits = top_matches(index.subcategories(), "notebok", 0.5, 5);
/// assert_eq!(hits[0].item.name, "Notebooks");
/// ```
pub fn top_matches<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    min_score: f64,
    limit: usize,
) -> Vec<ScoredCandidate<&'a T>> {
    top_matches_with(&Scorer::default(), items, query, min_score, limit)
}

/// [`top_matches`] with an explicit scorer.
pub fn top_matches_with<'a, T: Searchable>(
    scorer: &Scorer,
    items: &'a [T],
    query: &str,
    min_score: f64,
    limit: usize,
) -> Vec<ScoredCandidate<&'a T>> {
    match query_key(query) {
        Some(key) => top_matches_normalized(scorer, items, &key, min_score, limit),
        None => Vec::new(),
    }
}

/// Core loop. `key` must already be a non-empty [`query_key`].
pub(crate) fn top_matches_normalized<'a, T: Searchable>(
    scorer: &Scorer,
    items: &'a [T],
    key: &str,
    min_score: f64,
    limit: usize,
) -> Vec<ScoredCandidate<&'a T>> {
    if limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<ScoredCandidate<&'a T>> = items
        .iter()
        .enumerate()
        .filter_map(|(position, item)| {
            let score = scorer.score_normalized(key, item.search_key());
            (score >= min_score).then_some(ScoredCandidate {
                item,
                position,
                score,
            })
        })
        .collect();

    hits.sort_by(compare_candidates);
    hits.truncate(limit);
    hits
}
