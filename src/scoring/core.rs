// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a single similarity score.
//!
//! Two regimes. If the candidate literally contains the query, the score lands
//! in `[0.8, 1.0]` and grows with how much of the candidate the query covers.
//! Otherwise it is `1 - distance / longer_length`, which for anything short of
//! an exact match tops out below 0.8 on realistic names. So a substring hit
//! beats a typo-tolerant hit almost always, and the ordering is explainable.
//!
//! # Key Invariants
//!
//! ```text
//! 0 ≤ similarity(q, c) ≤ 1
//! similarity(q, "") = similarity("", c) = 0
//! normalize(c) ⊇ normalize(q), q ≠ ""  ⇒  similarity(q, c) ≥ SUBSTRING_BASE_SCORE
//! similarity(q, q) = 1                  (q ≠ "")
//! ```
//!
//! NaN is impossible by construction: every division has a nonzero
//! denominator because empty operands return before any arithmetic.
//!
//! # Constants
//!
//! | Name | Value | Role |
//! |------|-------|------|
//! | `SUBSTRING_BASE_SCORE` | 0.8 | Floor for "candidate contains query" |
//! | `SUBSTRING_COVERAGE_WEIGHT` | 0.2 | Bonus scaled by `len(q) / len(c)` |
//!
//! Both are storefront tuning values. Changing them changes which section a
//! shopper gets steered to, so they are overridable through [`Scorer`] rather
//! than edited in place.

use serde::{Deserialize, Serialize};

use crate::fuzzy::damerau_distance;
use crate::utils::{char_len, normalize};

// =============================================================================
// SIMILARITY CONSTANTS
// =============================================================================

/// Score floor for a candidate that contains the whole query.
pub const SUBSTRING_BASE_SCORE: f64 = 0.8;

/// Extra score for substring hits, scaled by query/candidate length ratio.
pub const SUBSTRING_COVERAGE_WEIGHT: f64 = 0.2;

/// Similarity scorer with overridable substring constants.
///
/// `Scorer::default()` reproduces [`similarity`] exactly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scorer {
    pub substring_base: f64,
    pub substring_weight: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            substring_base: SUBSTRING_BASE_SCORE,
            substring_weight: SUBSTRING_COVERAGE_WEIGHT,
        }
    }
}

impl Scorer {
    /// Score raw strings. Both sides are normalized first.
    pub fn score(&self, query: &str, candidate: &str) -> f64 {
        self.score_normalized(&normalize(query), &normalize(candidate))
    }

    /// Score strings that already went through [`normalize`].
    ///
    /// The flat indexes store normalized names, so the matcher calls this
    /// directly and normalizes the query once per search instead of once per
    /// candidate.
    pub fn score_normalized(&self, query: &str, candidate: &str) -> f64 {
        if query.is_empty() || candidate.is_empty() {
            return 0.0;
        }

        let query_len = char_len(query);
        let candidate_len = char_len(candidate);

        if candidate.contains(query) {
            let coverage = query_len as f64 / candidate_len as f64;
            return (self.substring_base + coverage * self.substring_weight).clamp(0.0, 1.0);
        }

        let distance = damerau_distance(query, candidate);
        let longest = query_len.max(candidate_len);
        (1.0 - distance as f64 / longest as f64).clamp(0.0, 1.0)
    }
}

/// How similar is `candidate` to what the shopper typed in `query`?
///
/// Not symmetric: the substring fast path asks "does the candidate contain the
/// query", never the reverse. Case and diacritics never matter.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    Scorer::default().score(query, candidate)
}
