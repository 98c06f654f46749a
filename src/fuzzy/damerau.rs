// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with adjacent transpositions.
//!
//! Insertions, deletions, substitutions and swaps of two neighbouring
//! characters each cost 1. This is the "optimal string alignment" flavour:
//! no substring is edited more than once, so `"ca" → "abc"` costs 3, not 2.
//! That is what people mean by a typo in a search box, and it keeps the
//! recurrence to three rolling rows.
//!
//! Distances are measured in Unicode scalar values, never bytes. Callers
//! normalize first (see [`crate::normalize`]).

/// Restricted Damerau-Levenshtein distance between `a` and `b`.
///
/// Two early exits before the DP:
/// 1. Either side empty: the distance is the other side's length
/// 2. Identical strings: 0
pub fn damerau_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rows i-2, i-1 and i of the (|a|+1) x (|b|+1) table
    let width = b.len() + 1;
    let mut before: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr: Vec<usize> = vec![0; width];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(before[j - 2] + 1);
            }
            curr[j] = best;
        }
        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
