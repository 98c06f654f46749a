//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical catalog fixtures to avoid duplication.

#![doc(hidden)]

use crate::catalog::{CatalogSnapshot, RawCategory, RawImage, RawProduct, RawSubcategory};
use crate::index::CatalogIndex;
use crate::types::NodeId;

/// `(category, [(subcategory, [product, ...]), ...])`
pub type CatalogOutline<'a> = &'a [(&'a str, &'a [(&'a str, &'a [&'a str])])];

/// Build a snapshot from names alone.
///
/// Ids are sequential per kind starting at 1, urls are slugs of the names.
/// This is the canonical implementation used across all tests.
pub fn make_snapshot(outline: CatalogOutline<'_>) -> CatalogSnapshot {
    let mut sub_id = 0i64;
    let mut product_id = 0i64;

    let categories = outline
        .iter()
        .enumerate()
        .map(|(cat_idx, (cat_name, subs))| RawCategory {
            id: Some(NodeId::Int(cat_idx as i64 + 1)),
            name: Some((*cat_name).to_string()),
            url: Some(format!("/{}", slug(cat_name))),
            images: vec![],
            subcategories: subs
                .iter()
                .map(|(sub_name, products)| {
                    sub_id += 1;
                    RawSubcategory {
                        id: Some(NodeId::Int(sub_id)),
                        name: Some((*sub_name).to_string()),
                        url: Some(format!("/{}/{}", slug(cat_name), slug(sub_name))),
                        images: vec![],
                        products: products
                            .iter()
                            .map(|name| {
                                product_id += 1;
                                make_product(product_id, name)
                            })
                            .collect(),
                    }
                })
                .collect(),
        })
        .collect();

    CatalogSnapshot { categories }
}

/// Create a product node with one image.
pub fn make_product(id: i64, name: &str) -> RawProduct {
    RawProduct {
        id: Some(NodeId::Int(id)),
        name: Some(name.to_string()),
        url: Some(format!("/p/{}", slug(name))),
        images: vec![RawImage::Url(format!("/img/{}.jpg", id))],
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// A small print-on-demand storefront.
pub const SAMPLE_CATALOG: CatalogOutline<'static> = &[
    (
        "Stationery",
        &[
            (
                "Notebooks",
                &["Ruled Notebook A5", "Spiral Sketchbook", "Dotted Journal"],
            ),
            ("Pens & Pencils", &["Gel Pen Set", "Graphite Pencils"]),
        ],
    ),
    (
        "Home & Living",
        &[
            ("Mugs", &["Ceramic Mug", "Travel Mug"]),
            ("Cushions", &["Linen Cushion Cover"]),
        ],
    ),
    (
        "Wall Art",
        &[
            ("Posters", &["Mountain Poster", "City Map Poster"]),
            ("Canvas Prints", &["Ocean Canvas"]),
        ],
    ),
    (
        "Apparel",
        &[
            ("T-Shirts", &["Classic Tee", "Café Racer Tee"]),
            ("Hoodies", &["Zip Hoodie"]),
        ],
    ),
];

pub fn sample_snapshot() -> CatalogSnapshot {
    make_snapshot(SAMPLE_CATALOG)
}

pub fn sample_index() -> CatalogIndex {
    CatalogIndex::build(&sample_snapshot())
}

/// Two categories a one-letter typo away from the same query ("hugs").
pub const TIED_CATALOG: CatalogOutline<'static> = &[
    ("Mugs", &[("Ceramic", &["White Cup"])]),
    ("Rugs", &[("Woven", &["Jute Runner"])]),
];

pub fn tied_index() -> CatalogIndex {
    CatalogIndex::build(&make_snapshot(TIED_CATALOG))
}
