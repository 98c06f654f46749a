//! Infinite-scroll windows over real views.

use proptest::prelude::*;
use vitrine::{advance, product_row_count, window};

use super::strategies::catalog_query_strategy;
use crate::common::sample_engine;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: a window shows min(n, total) rows and is a prefix of the view.
    #[test]
    fn prop_window_row_count(query in catalog_query_strategy(), n in 0usize..20) {
        let outcome = sample_engine().search(&query);
        let total = outcome.product_rows();
        let shown = window(&outcome.view, n);

        prop_assert_eq!(product_row_count(shown), n.min(total));
        prop_assert_eq!(shown, &outcome.view[..shown.len()]);
        if n >= total {
            prop_assert_eq!(shown.len(), outcome.view.len());
        }
    }

    /// Property: growing the cursor only ever reveals more.
    #[test]
    fn prop_window_monotonic(query in catalog_query_strategy(), n in 0usize..20, step in 0usize..5) {
        let outcome = sample_engine().search(&query);
        let smaller = window(&outcome.view, n);
        let larger = window(&outcome.view, n + step);
        prop_assert!(smaller.len() <= larger.len());
        prop_assert_eq!(smaller, &larger[..smaller.len()]);
    }

    /// Property: a non-empty window ends on a product row.
    #[test]
    fn prop_window_ends_on_row(query in catalog_query_strategy(), n in 1usize..20) {
        let outcome = sample_engine().search(&query);
        let shown = window(&outcome.view, n);
        if n <= outcome.product_rows() {
            prop_assert!(shown.last().is_some_and(|item| item.is_product_row()));
        }
    }

    /// Property: advancing never moves the cursor back.
    #[test]
    fn prop_advance_never_decreases(loaded: usize, batch: usize) {
        let next = advance(loaded, batch);
        prop_assert!(next >= loaded);
        prop_assert!(next >= batch);
    }
}
