// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! One implementation here: optimal string alignment (restricted
//! Damerau-Levenshtein). Catalog names are short, so a full O(nm) table per
//! comparison is cheap enough and keeps the score exact.

mod damerau;

pub use damerau::*;
