// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for similarity invariants.
//!
//! Scores must be finite, within [0, 1], and exactly 1 for a string against
//! itself. Distances never exceed the longer operand.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vitrine::{char_len, damerau_distance, normalize, similarity};

#[derive(Arbitrary, Debug)]
struct Pair {
    query: String,
    candidate: String,
}

fuzz_target!(|pair: Pair| {
    // Quadratic DP; keep inputs realistic
    if pair.query.len() > 256 || pair.candidate.len() > 256 {
        return;
    }

    let score = similarity(&pair.query, &pair.candidate);
    assert!(score.is_finite(), "non-finite score for {:?}", pair);
    assert!((0.0..=1.0).contains(&score), "score {} out of range for {:?}", score, pair);

    let q = normalize(&pair.query);
    let c = normalize(&pair.candidate);
    assert_eq!(normalize(&q), q, "normalize not idempotent on {:?}", pair.query);

    let distance = damerau_distance(&q, &c);
    assert!(distance <= char_len(&q).max(char_len(&c)));
    assert_eq!(distance, damerau_distance(&c, &q), "distance not symmetric");

    if !q.is_empty() {
        assert_eq!(similarity(&pair.query, &pair.query), 1.0);
    }
});
