//! Catalog fuzzy search and intent resolution for storefront search panels.
//!
//! A shopper types into a search box. This crate decides whether they mean a
//! whole category, one subcategory, one product, or nothing in particular, and
//! lays out the results panel accordingly.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────────────────┐
//! │   catalog    │────▶│    index     │────▶│            search            │
//! │ (snapshot,   │     │ (flatten →   │     │ matcher → intent → view      │
//! │  provider,   │     │  CatalogIndex│     │         → window             │
//! │  handle)     │     │  )           │     └──────────────────────────────┘
//! └──────────────┘     └──────────────┘                    │
//!                              │                           ▼
//!                              │                  ┌─────────────────┐
//!                              └─────────────────▶│     session     │
//!                                                 │ (debounce,      │
//!                                                 │  tickets, scroll│
//!                                                 └─────────────────┘
//! ```
//!
//! Everything under `search` is a pure function of the query, an immutable
//! [`CatalogIndex`] and the [`Tuning`]. Only the catalog provider and config
//! loading can fail; see [`Error`].
//!
//! | Module    | Role                                              |
//! |-----------|---------------------------------------------------|
//! | `utils`   | Normalizer (lowercase, strip combining marks)     |
//! | `fuzzy`   | Optimal-string-alignment edit distance            |
//! | `scoring` | Similarity in `[0, 1]`, ranking order             |
//! | `index`   | Flattening a snapshot into three arrays           |
//! | `search`  | Matcher, intent resolver, result builder, windows |
//! | `session` | Debounced search-as-you-type state                |
//!
//! # Usage
//!
//! ```ignore
//! use vitrine::{CatalogHandle, JsonFileProvider, SearchEngine, Tuning};
//!
//! let handle = CatalogHandle::load(&JsonFileProvider::new("catalog.json"))?;
//! let engine = SearchEngine::new(handle.current(), Tuning::default());
//!
//! let outcome = engine.search("notebok");
//! println!("{:?}", outcome.intent.kind()); // Some(Subcategory)
//! ```

pub mod catalog;
pub mod config;
pub mod error;
mod fuzzy;
pub mod index;
mod scoring;
pub mod search;
pub mod session;
pub mod testing;
mod types;
mod utils;

pub use catalog::{
    CatalogHandle, CatalogProvider, CatalogSnapshot, JsonFileProvider, RawCategory, RawImage,
    RawProduct, RawSubcategory, StaticProvider,
};
pub use config::{SessionSettings, Settings, Tuning};
pub use error::{Error, Result};
pub use fuzzy::damerau_distance;
pub use index::{build_catalog_index, CatalogIndex, IndexStats, SkipReason};
pub use scoring::ranking::compare_candidates;
pub use scoring::{similarity, Scorer, SUBSTRING_BASE_SCORE, SUBSTRING_COVERAGE_WEIGHT};
pub use search::{
    advance, build_view, detect_intent, product_row_count, top_matches, top_matches_with,
    window, Intent, SearchEngine, SearchOutcome, Suggestion, ViewItem,
};
pub use session::{DebounceState, Debouncer, QueryTicket, SearchSession};
pub use types::{
    Category, CategoryId, EntityKind, Image, NodeId, Product, ProductId, ScoredCandidate,
    Searchable, Subcategory, SubcategoryId,
};
pub use utils::{char_len, normalize};
