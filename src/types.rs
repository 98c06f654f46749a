// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a flattened catalog.
//!
//! The catalog is a tree (category → subcategory → product), but nothing here
//! holds a pointer to its parent or children. Each kind lives in its own flat
//! array, and relationships are arena ids: positions in those arrays.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Arena ids**: `CategoryId(i)` is valid iff `i < index.categories().len()`,
//!   and `index.categories()[i].id == CategoryId(i)`. Same for the other kinds.
//!
//! - **Back-references**: a product's `subcategory` lists the product in its
//!   `products`, and that subcategory's `category` equals the product's
//!   `category`. The flattener builds both directions at once.
//!
//! - **Search keys**: `search_key == normalize(name)`, computed once per
//!   snapshot so queries never re-normalize candidates.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES: Arena ids
// =============================================================================

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Convert to usize for array indexing.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> Self {
                id.0 as usize
            }
        }
    };
}

arena_id!(
    /// Position of a category in [`crate::CatalogIndex::categories`].
    CategoryId
);
arena_id!(
    /// Position of a subcategory in [`crate::CatalogIndex::subcategories`].
    SubcategoryId
);
arena_id!(
    /// Position of a product in [`crate::CatalogIndex::products`].
    ProductId
);

/// Identifier assigned by the catalog provider.
///
/// Opaque to the engine. Providers send integers or strings; both are kept
/// as given so they can be echoed back to the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(id) => write!(f, "{}", id),
            NodeId::Text(id) => f.write_str(id),
        }
    }
}

/// Image descriptor. Carried through for rendering, never matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Which flat index an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Category,
    Subcategory,
    Product,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Category => "category",
            EntityKind::Subcategory => "subcategory",
            EntityKind::Product => "product",
        })
    }
}

// =============================================================================
// FLAT ENTRIES
// =============================================================================

/// A top-level catalog section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub source_id: NodeId,
    pub name: String,
    pub url: Option<String>,
    pub images: Vec<Image>,
    /// Owned subcategories, in snapshot order.
    pub subcategories: Vec<SubcategoryId>,
    pub search_key: String,
}

/// A section inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub source_id: NodeId,
    pub name: String,
    pub url: Option<String>,
    pub images: Vec<Image>,
    pub category: CategoryId,
    pub category_name: String,
    /// Owned products, in snapshot order.
    pub products: Vec<ProductId>,
    pub search_key: String,
}

/// A sellable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub source_id: NodeId,
    pub name: String,
    pub url: Option<String>,
    pub images: Vec<Image>,
    pub subcategory: SubcategoryId,
    pub subcategory_name: String,
    pub category: CategoryId,
    pub category_name: String,
    pub search_key: String,
}

/// Anything that can sit in a flat index and be fuzzy-matched by name.
pub trait Searchable {
    const KIND: EntityKind;

    /// Display name.
    fn name(&self) -> &str;

    /// Normalized name, the only thing the scorer looks at.
    fn search_key(&self) -> &str;
}

impl Searchable for Category {
    const KIND: EntityKind = EntityKind::Category;

    fn name(&self) -> &str {
        &self.name
    }

    fn search_key(&self) -> &str {
        &self.search_key
    }
}

impl Searchable for Subcategory {
    const KIND: EntityKind = EntityKind::Subcategory;

    fn name(&self) -> &str {
        &self.name
    }

    fn search_key(&self) -> &str {
        &self.search_key
    }
}

impl Searchable for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn name(&self) -> &str {
        &self.name
    }

    fn search_key(&self) -> &str {
        &self.search_key
    }
}

// =============================================================================
// QUERY-SCOPED RESULTS
// =============================================================================

/// A candidate together with its similarity to the current query.
///
/// `position` is the candidate's index in its flat index; ranking uses it to
/// break score ties. `score` is always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate<T> {
    pub item: T,
    pub position: usize,
    pub score: f64,
}

impl<T> ScoredCandidate<T> {
    /// Swap the payload, keeping score and position.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScoredCandidate<U> {
        ScoredCandidate {
            item: f(self.item),
            position: self.position,
            score: self.score,
        }
    }
}
