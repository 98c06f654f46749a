// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query pipeline.
//!
//! Any query against the sample catalog must resolve deterministically, lay
//! out a well-formed view, and window it without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::{Arc, OnceLock};
use vitrine::testing::sample_index;
use vitrine::{product_row_count, window, SearchEngine, Tuning, ViewItem};

fuzz_target!(|query: &[u8]| {
    static ENGINE: OnceLock<SearchEngine> = OnceLock::new();
    let engine = ENGINE.get_or_init(|| SearchEngine::new(Arc::new(sample_index()), Tuning::default()));

    let query = String::from_utf8_lossy(query);
    if query.chars().count() > 64 {
        return;
    }

    let first = engine.search(&query);
    let second = engine.search(&query);
    assert_eq!(first, second, "search is not deterministic for {:?}", query);

    assert!(first.intent.suggestions().len() <= Tuning::default().max_suggestions);
    if let Some(ViewItem::ProductRow(_) | ViewItem::Chips(_)) = first.view.first() {
        panic!("view for {:?} does not open with a header", query);
    }

    let total = first.product_rows();
    for loaded in [0, 1, 3, total, total + 5] {
        let shown = window(&first.view, loaded);
        assert_eq!(product_row_count(shown), loaded.min(total));
    }
});
