// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the flat arrays every query searches.
//!
//! Built once per catalog snapshot, read-only afterwards. Queries borrow it,
//! so any number of them can run against the same `Arc<CatalogIndex>` with no
//! locking.

mod flatten;

pub use flatten::*;

use log::info;
use serde::Serialize;

use crate::catalog::CatalogSnapshot;
use crate::types::{Category, CategoryId, Product, ProductId, Subcategory, SubcategoryId};

/// Counts for `inspect` and for the rebuild log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub categories: usize,
    pub subcategories: usize,
    pub products: usize,
    /// Snapshot nodes dropped as malformed (descendants included).
    pub skipped: usize,
}

/// The three flat indexes derived from one catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    categories: Vec<Category>,
    subcategories: Vec<Subcategory>,
    products: Vec<Product>,
    skipped: usize,
}

impl CatalogIndex {
    /// Flatten a snapshot. Never fails; see [`build_catalog_index`].
    pub fn build(snapshot: &CatalogSnapshot) -> Self {
        let index = build_catalog_index(snapshot);
        let stats = index.stats();
        info!(
            "catalog index built: {} categories, {} subcategories, {} products ({} skipped)",
            stats.categories, stats.subcategories, stats.products, stats.skipped
        );
        index
    }

    pub(crate) fn from_parts(
        categories: Vec<Category>,
        subcategories: Vec<Subcategory>,
        products: Vec<Product>,
        skipped: usize,
    ) -> Self {
        Self {
            categories,
            subcategories,
            products,
            skipped,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn subcategories(&self) -> &[Subcategory] {
        &self.subcategories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.index())
    }

    pub fn subcategory(&self, id: SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.get(id.index())
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.index())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            categories: self.categories.len(),
            subcategories: self.subcategories.len(),
            products: self.products.len(),
            skipped: self.skipped,
        }
    }

    /// First `limit` category names, for the always-visible shortcut chips.
    pub fn quick_categories(&self, limit: usize) -> Vec<String> {
        self.categories
            .iter()
            .take(limit)
            .map(|category| category.name.clone())
            .collect()
    }

    /// Names of a category's subcategories, in snapshot order.
    pub fn subcategory_names(&self, id: CategoryId) -> Vec<String> {
        self.category(id)
            .map(|category| {
                category
                    .subcategories
                    .iter()
                    .filter_map(|sub| self.subcategory(*sub))
                    .map(|sub| sub.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every product under a category, in index order.
    pub fn products_in_category(&self, id: CategoryId) -> impl Iterator<Item = &Product> + '_ {
        self.products
            .iter()
            .filter(move |product| product.category == id)
    }
}
