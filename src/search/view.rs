// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result builder: turn an intent into the ordered list the panel renders.
//!
//! Every intent renders as one or more sections of the same shape:
//!
//! ```text
//! Header   "Stationery"
//! Chips    ["Notebooks", "Pens & Pencils"]
//! Product  Ruled Notebook A5
//! Product  ...
//! ```
//!
//! Targeted intents produce exactly one section (the target's category) and
//! differ only in which rows come first. Broad queries produce one section
//! per category that owns a matching product.

use serde::Serialize;

use super::intent::Intent;
use super::matcher::{query_key, top_matches_normalized};
use crate::config::Tuning;
use crate::index::CatalogIndex;
use crate::types::{Category, CategoryId, Product, ProductId, SubcategoryId};

/// One renderable unit of the results panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewItem {
    Header(String),
    Chips(Vec<String>),
    ProductRow(Product),
}

impl ViewItem {
    pub fn is_product_row(&self) -> bool {
        matches!(self, ViewItem::ProductRow(_))
    }

    pub fn as_product(&self) -> Option<&Product> {
        match self {
            ViewItem::ProductRow(product) => Some(product),
            _ => None,
        }
    }
}

/// Build the full, unwindowed view for `intent`.
///
/// A blank query yields an empty view whatever the intent says. A query that
/// resolves to an id the index does not hold (a stale intent after a
/// refresh) also yields an empty view.
pub fn build_view(query: &str, intent: &Intent, index: &CatalogIndex, tuning: &Tuning) -> Vec<ViewItem> {
    let Some(key) = query_key(query) else {
        return Vec::new();
    };

    match intent {
        Intent::Category { matched, .. } => category_view(index, matched.item),
        Intent::Subcategory { matched, .. } => subcategory_view(index, matched.item),
        Intent::Product { matched, .. } => product_view(index, matched.item),
        Intent::Broad { .. } => broad_view(index, &key, tuning),
    }
}

fn section_head(index: &CatalogIndex, category: &Category, view: &mut Vec<ViewItem>) {
    view.push(ViewItem::Header(category.name.clone()));
    view.push(ViewItem::Chips(index.subcategory_names(category.id)));
}

fn rows<'a>(products: impl IntoIterator<Item = &'a Product>) -> impl Iterator<Item = ViewItem> {
    products.into_iter().cloned().map(ViewItem::ProductRow)
}

fn category_view(index: &CatalogIndex, id: CategoryId) -> Vec<ViewItem> {
    let Some(category) = index.category(id) else {
        return Vec::new();
    };
    let mut view = Vec::new();
    section_head(index, category, &mut view);
    view.extend(rows(index.products_in_category(id)));
    view
}

fn subcategory_view(index: &CatalogIndex, id: SubcategoryId) -> Vec<ViewItem> {
    let Some(sub) = index.subcategory(id) else {
        return Vec::new();
    };
    let Some(category) = index.category(sub.category) else {
        return Vec::new();
    };

    let mut view = Vec::new();
    section_head(index, category, &mut view);
    view.extend(rows(sub.products.iter().filter_map(|p| index.product(*p))));
    view.extend(rows(
        index
            .products_in_category(category.id)
            .filter(|product| product.subcategory != id),
    ));
    view
}

fn product_view(index: &CatalogIndex, id: ProductId) -> Vec<ViewItem> {
    let Some(product) = index.product(id) else {
        return Vec::new();
    };
    let Some(sub) = index.subcategory(product.subcategory) else {
        return Vec::new();
    };
    let Some(category) = index.category(product.category) else {
        return Vec::new();
    };

    let mut view = Vec::new();
    section_head(index, category, &mut view);
    view.push(ViewItem::ProductRow(product.clone()));
    view.extend(rows(
        sub.products
            .iter()
            .filter(|p| **p != id)
            .filter_map(|p| index.product(*p)),
    ));
    view.extend(rows(
        index
            .products_in_category(category.id)
            .filter(|p| p.subcategory != sub.id),
    ));
    view
}

/// Products above the widened threshold, grouped by category.
///
/// Groups appear in the order their first product ranked; rows inside a
/// group keep rank order.
fn broad_view(index: &CatalogIndex, key: &str, tuning: &Tuning) -> Vec<ViewItem> {
    let hits = top_matches_normalized(
        &tuning.scorer(),
        index.products(),
        key,
        tuning.broad_min_score,
        tuning.broad_limit,
    );

    let mut groups: Vec<(CategoryId, Vec<&Product>)> = Vec::new();
    for hit in hits {
        let product = hit.item;
        match groups.iter_mut().find(|(id, _)| *id == product.category) {
            Some((_, members)) => members.push(product),
            None => groups.push((product.category, vec![product])),
        }
    }

    let mut view = Vec::new();
    for (id, members) in groups {
        let Some(category) = index.category(id) else {
            continue;
        };
        section_head(index, category, &mut view);
        view.extend(rows(members));
    }
    view
}
