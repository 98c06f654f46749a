// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snapshot flattening.
//!
//! Arbitrary trees with missing ids, blank names and colliding ids must
//! always flatten into a consistent index: every cross reference resolves,
//! and accepted plus skipped nodes add up to the input. Raw text goes
//! through the JSON reader first, which must never reject a document over
//! one bad element once the top level is an array.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vitrine::{
    CatalogIndex, CatalogSnapshot, NodeId, RawCategory, RawProduct, RawSubcategory,
    SearchEngine, Tuning,
};

#[derive(Arbitrary, Debug)]
struct Node {
    /// Small id space so duplicates are common.
    id: Option<u8>,
    name: Option<String>,
}

#[derive(Arbitrary, Debug)]
struct Tree {
    categories: Vec<(Node, Vec<(Node, Vec<Node>)>)>,
    query: String,
    raw: String,
}

fn ids(node: &Node) -> (Option<NodeId>, Option<String>) {
    (node.id.map(|id| NodeId::Int(i64::from(id))), node.name.clone())
}

fn snapshot(tree: &Tree) -> CatalogSnapshot {
    let categories = tree
        .categories
        .iter()
        .map(|(cat, subs)| {
            let (id, name) = ids(cat);
            RawCategory {
                id,
                name,
                subcategories: subs
                    .iter()
                    .map(|(sub, products)| {
                        let (id, name) = ids(sub);
                        RawSubcategory {
                            id,
                            name,
                            products: products
                                .iter()
                                .map(|product| {
                                    let (id, name) = ids(product);
                                    RawProduct {
                                        id,
                                        name,
                                        ..RawProduct::default()
                                    }
                                })
                                .collect(),
                            ..RawSubcategory::default()
                        }
                    })
                    .collect(),
                ..RawCategory::default()
            }
        })
        .collect();
    CatalogSnapshot { categories }
}

fn node_count(snapshot: &CatalogSnapshot) -> usize {
    snapshot
        .categories
        .iter()
        .map(|cat| {
            1 + cat
                .subcategories
                .iter()
                .map(|sub| 1 + sub.products.len())
                .sum::<usize>()
        })
        .sum()
}

fn check_consistent(index: &CatalogIndex, nodes: usize) {
    let stats = index.stats();
    assert_eq!(
        stats.categories + stats.subcategories + stats.products + stats.skipped,
        nodes
    );

    for sub in index.subcategories() {
        let category = index.category(sub.category).expect("subcategory parent");
        assert!(category.subcategories.contains(&sub.id));
        assert!(!sub.name.trim().is_empty());
    }
    for product in index.products() {
        let sub = index.subcategory(product.subcategory).expect("product parent");
        assert_eq!(sub.category, product.category);
        assert!(sub.products.contains(&product.id));
    }
}

fuzz_target!(|tree: Tree| {
    let snapshot = snapshot(&tree);
    let index = CatalogIndex::build(&snapshot);
    let stats = index.stats();
    check_consistent(&index, node_count(&snapshot));

    let json = serde_json::to_string(&snapshot.categories).expect("serialize");
    let reparsed = CatalogSnapshot::from_json(&json).expect("own output parses");
    assert_eq!(CatalogIndex::build(&reparsed).stats(), stats);

    if let Ok(parsed) = CatalogSnapshot::from_json(&tree.raw) {
        check_consistent(&CatalogIndex::build(&parsed), node_count(&parsed));
    }
    let is_array = serde_json::from_str::<serde_json::Value>(&tree.raw)
        .map_or(false, |value| value.is_array());
    if is_array {
        assert!(CatalogSnapshot::from_json(&tree.raw).is_ok());
    }

    if tree.query.len() <= 64 {
        let engine = SearchEngine::new(std::sync::Arc::new(index), Tuning::default());
        let outcome = engine.search(&tree.query);
        assert!(outcome.product_rows() <= stats.products);
    }
});
