// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where catalogs come from, and how a live one is swapped.
//!
//! The engine never fetches anything itself. A [`CatalogProvider`] hands over
//! an atomic snapshot; [`CatalogHandle`] flattens it and publishes the new
//! index for readers that start after the swap.

mod handle;
mod provider;
mod snapshot;

pub use handle::*;
pub use provider::*;
pub use snapshot::*;
