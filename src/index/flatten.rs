// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot flattening: tree in, three flat arrays out.
//!
//! One depth-first walk in snapshot order. Each accepted node gets the next
//! arena id of its kind, so index order is snapshot order and score ties
//! resolve the way the merchant arranged the catalog.
//!
//! Malformed nodes (null id, missing or blank name, id already seen in the
//! same kind) are dropped with a warning. Their descendants go too: a product
//! without a category can't be placed in any view. The result is smaller but
//! always consistent, never an error.

use std::collections::HashSet;
use std::fmt;

use log::warn;

use super::CatalogIndex;
use crate::catalog::{CatalogSnapshot, RawImage};
use crate::types::{
    Category, CategoryId, EntityKind, Image, NodeId, Product, ProductId, Subcategory,
    SubcategoryId,
};
use crate::utils::normalize;

/// Why a node was left out of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingId,
    MissingName,
    DuplicateId,
    /// An ancestor was skipped.
    Orphaned,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::MissingId => "missing id",
            SkipReason::MissingName => "missing name",
            SkipReason::DuplicateId => "duplicate id",
            SkipReason::Orphaned => "parent was skipped",
        })
    }
}

/// Ids seen so far, one set per kind.
#[derive(Default)]
struct SeenIds {
    categories: HashSet<NodeId>,
    subcategories: HashSet<NodeId>,
    products: HashSet<NodeId>,
}

impl SeenIds {
    fn set(&mut self, kind: EntityKind) -> &mut HashSet<NodeId> {
        match kind {
            EntityKind::Category => &mut self.categories,
            EntityKind::Subcategory => &mut self.subcategories,
            EntityKind::Product => &mut self.products,
        }
    }
}

/// Validate one node's id and name. Returns the owned pair on success.
fn accept(
    seen: &mut SeenIds,
    kind: EntityKind,
    id: &Option<NodeId>,
    name: &Option<String>,
) -> Result<(NodeId, String), SkipReason> {
    let id = id.clone().ok_or(SkipReason::MissingId)?;
    let name = name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(SkipReason::MissingName)?;
    if !seen.set(kind).insert(id.clone()) {
        return Err(SkipReason::DuplicateId);
    }
    Ok((id, name.to_string()))
}

fn resolve_images(images: &[RawImage]) -> Vec<Image> {
    images.iter().filter_map(RawImage::resolve).collect()
}

fn report(kind: EntityKind, id: &Option<NodeId>, name: &Option<String>, reason: SkipReason) {
    let id = id.as_ref().map_or_else(|| "<none>".to_string(), ToString::to_string);
    let name = name.as_deref().unwrap_or("<none>");
    warn!("skipping {} id={} name={:?}: {}", kind, id, name, reason);
}

/// Build the three flat indexes from a catalog snapshot.
pub fn build_catalog_index(snapshot: &CatalogSnapshot) -> CatalogIndex {
    let mut categories: Vec<Category> = Vec::new();
    let mut subcategories: Vec<Subcategory> = Vec::new();
    let mut products: Vec<Product> = Vec::new();
    let mut seen = SeenIds::default();
    let mut skipped = 0usize;

    for raw_cat in &snapshot.categories {
        let (cat_source, cat_name) =
            match accept(&mut seen, EntityKind::Category, &raw_cat.id, &raw_cat.name) {
                Ok(accepted) => accepted,
                Err(reason) => {
                    report(EntityKind::Category, &raw_cat.id, &raw_cat.name, reason);
                    let descendants: usize = raw_cat
                        .subcategories
                        .iter()
                        .map(|sub| 1 + sub.products.len())
                        .sum();
                    skipped += 1 + descendants;
                    continue;
                }
            };

        let cat_id = CategoryId(categories.len() as u32);
        let mut cat_subs = Vec::with_capacity(raw_cat.subcategories.len());

        for raw_sub in &raw_cat.subcategories {
            let (sub_source, sub_name) =
                match accept(&mut seen, EntityKind::Subcategory, &raw_sub.id, &raw_sub.name) {
                    Ok(accepted) => accepted,
                    Err(reason) => {
                        report(EntityKind::Subcategory, &raw_sub.id, &raw_sub.name, reason);
                        skipped += 1 + raw_sub.products.len();
                        continue;
                    }
                };

            let sub_id = SubcategoryId(subcategories.len() as u32);
            let mut sub_products = Vec::with_capacity(raw_sub.products.len());

            for raw_prod in &raw_sub.products {
                let (prod_source, prod_name) =
                    match accept(&mut seen, EntityKind::Product, &raw_prod.id, &raw_prod.name) {
                        Ok(accepted) => accepted,
                        Err(reason) => {
                            report(EntityKind::Product, &raw_prod.id, &raw_prod.name, reason);
                            skipped += 1;
                            continue;
                        }
                    };

                let prod_id = ProductId(products.len() as u32);
                sub_products.push(prod_id);
                products.push(Product {
                    id: prod_id,
                    source_id: prod_source,
                    search_key: normalize(&prod_name),
                    name: prod_name,
                    url: raw_prod.url.clone(),
                    images: resolve_images(&raw_prod.images),
                    subcategory: sub_id,
                    subcategory_name: sub_name.clone(),
                    category: cat_id,
                    category_name: cat_name.clone(),
                });
            }

            cat_subs.push(sub_id);
            subcategories.push(Subcategory {
                id: sub_id,
                source_id: sub_source,
                search_key: normalize(&sub_name),
                name: sub_name,
                url: raw_sub.url.clone(),
                images: resolve_images(&raw_sub.images),
                category: cat_id,
                category_name: cat_name.clone(),
                products: sub_products,
            });
        }

        categories.push(Category {
            id: cat_id,
            source_id: cat_source,
            search_key: normalize(&cat_name),
            name: cat_name,
            url: raw_cat.url.clone(),
            images: resolve_images(&raw_cat.images),
            subcategories: cat_subs,
        });
    }

    CatalogIndex::from_parts(categories, subcategories, products, skipped)
}
