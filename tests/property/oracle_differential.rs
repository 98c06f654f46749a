//! Differential tests against a reference edit distance.
//!
//! `strsim::osa_distance` is the independent oracle for the restricted
//! Damerau-Levenshtein distance. The similarity oracle below is the scoring
//! formula written out longhand on top of it.

use proptest::prelude::*;
use strsim::osa_distance;
use vitrine::{char_len, damerau_distance, normalize, similarity};

use super::strategies::{name_strategy, query_strategy};

fn oracle_similarity(query: &str, candidate: &str) -> f64 {
    let query = normalize(query);
    let candidate = normalize(candidate);
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    let (q_len, c_len) = (char_len(&query), char_len(&candidate));
    if candidate.contains(&query) {
        return (0.8 + q_len as f64 / c_len as f64 * 0.2).min(1.0);
    }
    1.0 - osa_distance(&query, &candidate) as f64 / q_len.max(c_len) as f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: distance agrees with the oracle on arbitrary text.
    #[test]
    fn prop_distance_matches_oracle(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(damerau_distance(&a, &b), osa_distance(&a, &b));
    }

    /// Property: distance agrees with the oracle on catalog-like names.
    #[test]
    fn prop_distance_matches_oracle_on_names(a in name_strategy(), b in query_strategy()) {
        let (a, b) = (normalize(&a), normalize(&b));
        prop_assert_eq!(damerau_distance(&a, &b), osa_distance(&a, &b));
    }

    /// Property: adjacent swaps cost exactly one edit.
    #[test]
    fn prop_adjacent_swap_costs_one(word in "[a-z]{2,10}", at in 0usize..9) {
        let mut chars: Vec<char> = word.chars().collect();
        let i = at % (chars.len() - 1);
        prop_assume!(chars[i] != chars[i + 1]);
        chars.swap(i, i + 1);
        let swapped: String = chars.into_iter().collect();
        prop_assert_eq!(damerau_distance(&word, &swapped), 1);
    }

    /// Property: similarity is the documented formula.
    #[test]
    fn prop_similarity_matches_formula(q in query_strategy(), c in name_strategy()) {
        let actual = similarity(&q, &c);
        let expected = oracle_similarity(&q, &c);
        prop_assert!(
            (actual - expected).abs() < 1e-12,
            "similarity({:?}, {:?}) = {}, oracle says {}",
            q, c, actual, expected
        );
    }
}
