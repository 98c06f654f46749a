//! Generators shared by the property suites.

use proptest::prelude::*;
use vitrine::testing::make_product;
use vitrine::{CatalogIndex, CatalogSnapshot, NodeId, RawCategory, RawSubcategory};

/// Catalog-name alphabet: ASCII, Latin diacritics in both cases, a
/// decomposed accent, punctuation and spaces.
pub const NAME_CHARS: &str = "[a-zA-Z0-9 &'àáâäçèéêëíïñóöúüÀÉÑÖÜß\u{301}-]";

/// Names always open with a letter so the flattener never drops one as blank.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[a-zA-Zé]{}{{0,15}}", NAME_CHARS)).unwrap()
}

pub fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("{}{{0,12}}", NAME_CHARS)).unwrap()
}

/// Plain lowercase words, where containment survives concatenation.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{1,10}").unwrap()
}

/// Queries drawn from, or near, the sample catalog's vocabulary.
pub fn catalog_query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "notebok", "mug", "mugs", "poster", "tee", "pencils", "hoodie", "canvas",
            "stationery", "wall art", "travel poster", "journal", "cafe", "e", "",
        ])
        .prop_map(str::to_string),
        query_strategy(),
    ]
}

/// One category, one subcategory, products with the given names.
pub fn index_of_products(names: &[String]) -> CatalogIndex {
    let products = names
        .iter()
        .enumerate()
        .map(|(i, name)| make_product(i as i64 + 1, name))
        .collect();
    let snapshot = CatalogSnapshot {
        categories: vec![RawCategory {
            id: Some(NodeId::Int(1)),
            name: Some("All".to_string()),
            subcategories: vec![RawSubcategory {
                id: Some(NodeId::Int(1)),
                name: Some("Everything".to_string()),
                products,
                ..RawSubcategory::default()
            }],
            ..RawCategory::default()
        }],
    };
    CatalogIndex::build(&snapshot)
}
