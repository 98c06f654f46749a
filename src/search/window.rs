// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Infinite-scroll pagination over a fully built view.
//!
//! The view is computed once per query; scrolling only moves a cursor.

use super::view::ViewItem;

/// Prefix of `view` holding at most `loaded` product rows.
///
/// The prefix ends right after the `loaded`-th row, so headers and chips
/// that precede a visible row are always included. With fewer rows than
/// `loaded` the whole view is returned.
pub fn window(view: &[ViewItem], loaded: usize) -> &[ViewItem] {
    if loaded == 0 {
        return &[];
    }
    let mut seen = 0;
    for (i, item) in view.iter().enumerate() {
        if item.is_product_row() {
            seen += 1;
            if seen == loaded {
                return &view[..=i];
            }
        }
    }
    view
}

/// Next cursor after one scroll step. Never decreases.
#[inline]
pub fn advance(loaded: usize, batch: usize) -> usize {
    loaded.saturating_add(batch)
}

pub fn product_row_count(view: &[ViewItem]) -> usize {
    view.iter().filter(|item| item.is_product_row()).count()
}
