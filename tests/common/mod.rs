//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use vitrine::{CatalogIndex, SearchEngine, SearchOutcome, Tuning, ViewItem};

// Re-export canonical fixtures from vitrine::testing
pub use vitrine::testing::{
    make_product, make_snapshot, sample_index, sample_snapshot, tied_index, CatalogOutline,
    SAMPLE_CATALOG, TIED_CATALOG,
};

// ============================================================================
// ENGINES
// ============================================================================

pub fn engine_for(index: CatalogIndex) -> SearchEngine {
    SearchEngine::new(Arc::new(index), Tuning::default())
}

pub fn sample_engine() -> SearchEngine {
    engine_for(sample_index())
}

pub fn search(query: &str) -> SearchOutcome {
    sample_engine().search(query)
}

// ============================================================================
// VIEW HELPERS
// ============================================================================

/// Product names in view order.
pub fn row_names(view: &[ViewItem]) -> Vec<String> {
    view.iter()
        .filter_map(ViewItem::as_product)
        .map(|product| product.name.clone())
        .collect()
}

pub fn headers(view: &[ViewItem]) -> Vec<String> {
    view.iter()
        .filter_map(|item| match item {
            ViewItem::Header(name) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

/// Every Header is immediately followed by a Chips row.
pub fn assert_sections_well_formed(view: &[ViewItem]) {
    for (i, item) in view.iter().enumerate() {
        if let ViewItem::Header(name) = item {
            assert!(
                matches!(view.get(i + 1), Some(ViewItem::Chips(_))),
                "header {:?} at {} is not followed by chips",
                name,
                i
            );
        }
    }
    if let Some(first) = view.first() {
        assert!(
            matches!(first, ViewItem::Header(_)),
            "non-empty view must open with a header, got {:?}",
            first
        );
    }
}

// ============================================================================
// CATALOG FILES
// ============================================================================

/// Write `json` to a temp file that lives as long as the returned handle.
pub fn catalog_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp catalog");
    file.write_all(json.as_bytes()).expect("write temp catalog");
    file.flush().expect("flush temp catalog");
    file
}

/// The sample catalog in provider wire format.
pub fn sample_catalog_json() -> String {
    serde_json::to_string(&sample_snapshot().categories).expect("serialize sample catalog")
}
