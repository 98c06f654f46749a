// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate ranking: how scored candidates get sorted.
//!
//! Sort order:
//! 1. **Score** - descending (higher wins)
//! 2. **Index position** - ascending, so ties keep snapshot order
//!
//! The position tiebreaker is what makes "two categories that score the same"
//! resolve to the one the merchant listed first, every time.

use crate::types::ScoredCandidate;
use std::cmp::Ordering;

/// Compare two scored candidates for ranking.
///
/// # Example
///
/// ```ignore
/// let first = ScoredCandidate { item: &mugs, position: 0, score: 0.75 };
/// let second = ScoredCandidate { item: &rugs, position: 1, score: 0.75 };
///
/// assert_eq!(compare_candidates(&first, &second), Ordering::Less);
/// ```
pub fn compare_candidates<T>(a: &ScoredCandidate<T>, b: &ScoredCandidate<T>) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}
