// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Intent resolution: which part of the catalog is the shopper asking for?
//!
//! Each kind is matched on its own, the best of each is boosted when its
//! name literally contains the query, and then the kinds are compared in a
//! fixed order: category, then subcategory, then product. The first that is
//! the strongest of the kinds still in the running *and* clears its own bar
//! wins. If nothing does, the query is broad.
//!
//! ```text
//! "notebok" ──┬── categories    (nothing >= 0.55)
//!             ├── subcategories Notebooks 0.78  wins: max, >= 0.55
//!             └── products      (nothing >= 0.50)
//! ```
//!
//! The ordering encodes a UX priority: steer the shopper to a section before
//! drilling into one product when the evidence is equal.

use log::debug;
use serde::Serialize;

use super::matcher::{query_key, top_matches_normalized};
use crate::config::Tuning;
use crate::index::CatalogIndex;
use crate::types::{
    CategoryId, EntityKind, ProductId, ScoredCandidate, Searchable, SubcategoryId,
};

/// A "did you mean" entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub kind: EntityKind,
    pub name: String,
    pub score: f64,
}

/// The resolver's single decision for a query.
///
/// `matched` is the accepted target; `score` on it is the raw similarity,
/// without the includes boost.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum Intent {
    Category {
        matched: ScoredCandidate<CategoryId>,
        suggestions: Vec<Suggestion>,
    },
    Subcategory {
        matched: ScoredCandidate<SubcategoryId>,
        suggestions: Vec<Suggestion>,
    },
    Product {
        matched: ScoredCandidate<ProductId>,
        suggestions: Vec<Suggestion>,
    },
    Broad {
        suggestions: Vec<Suggestion>,
    },
}

impl Intent {
    /// Kind of the accepted target. `None` for broad queries.
    pub fn kind(&self) -> Option<EntityKind> {
        match self {
            Intent::Category { .. } => Some(EntityKind::Category),
            Intent::Subcategory { .. } => Some(EntityKind::Subcategory),
            Intent::Product { .. } => Some(EntityKind::Product),
            Intent::Broad { .. } => None,
        }
    }

    pub fn is_broad(&self) -> bool {
        matches!(self, Intent::Broad { .. })
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            Intent::Category { suggestions, .. }
            | Intent::Subcategory { suggestions, .. }
            | Intent::Product { suggestions, .. }
            | Intent::Broad { suggestions } => suggestions,
        }
    }

    /// Name of the accepted target, looked up in the index it came from.
    pub fn target_name<'a>(&self, index: &'a CatalogIndex) -> Option<&'a str> {
        match self {
            Intent::Category { matched, .. } => index.category(matched.item).map(|c| c.name.as_str()),
            Intent::Subcategory { matched, .. } => {
                index.subcategory(matched.item).map(|s| s.name.as_str())
            }
            Intent::Product { matched, .. } => index.product(matched.item).map(|p| p.name.as_str()),
            Intent::Broad { .. } => None,
        }
    }

    /// Raw similarity of the accepted target.
    pub fn target_score(&self) -> Option<f64> {
        match self {
            Intent::Category { matched, .. } => Some(matched.score),
            Intent::Subcategory { matched, .. } => Some(matched.score),
            Intent::Product { matched, .. } => Some(matched.score),
            Intent::Broad { .. } => None,
        }
    }

    pub fn suggestion_names(&self) -> Vec<String> {
        self.suggestions().iter().map(|s| s.name.clone()).collect()
    }
}

impl Default for Intent {
    fn default() -> Self {
        Intent::Broad {
            suggestions: Vec::new(),
        }
    }
}

fn suggestion<T: Searchable>(candidate: &ScoredCandidate<&T>) -> Suggestion {
    Suggestion {
        kind: T::KIND,
        name: candidate.item.name().to_string(),
        score: candidate.score,
    }
}

/// Best candidate's score plus the includes boost, if there is a candidate.
fn boosted<T: Searchable>(hits: &[ScoredCandidate<&T>], key: &str, boost: f64) -> Option<f64> {
    hits.first().map(|best| {
        if best.item.search_key().contains(key) {
            best.score + boost
        } else {
            best.score
        }
    })
}

/// Everything after the top match, capped.
fn runners_up<T: Searchable>(hits: &[ScoredCandidate<&T>], cap: usize) -> Vec<Suggestion> {
    hits.iter().skip(1).take(cap).map(suggestion).collect()
}

/// Resolve a raw query against the catalog.
///
/// Total: a blank query, or one nothing matches, resolves to
/// `Intent::Broad` with no suggestions.
pub fn detect_intent(query: &str, index: &CatalogIndex, tuning: &Tuning) -> Intent {
    let Some(key) = query_key(query) else {
        return Intent::default();
    };
    let scorer = tuning.scorer();
    let limit = tuning.candidates_per_kind;

    let categories = top_matches_normalized(
        &scorer,
        index.categories(),
        &key,
        tuning.category_min_score,
        limit,
    );
    let subcategories = top_matches_normalized(
        &scorer,
        index.subcategories(),
        &key,
        tuning.subcategory_min_score,
        limit,
    );
    let products = top_matches_normalized(
        &scorer,
        index.products(),
        &key,
        tuning.product_min_score,
        limit,
    );

    let boost = tuning.includes_boost;
    let cat = boosted(&categories, &key, boost);
    let sub = boosted(&subcategories, &key, boost);
    let prod = boosted(&products, &key, boost);
    let (cat_score, sub_score, prod_score) = (
        cat.unwrap_or(0.0),
        sub.unwrap_or(0.0),
        prod.unwrap_or(0.0),
    );

    debug!(
        "intent scores for {:?}: category={:.3} subcategory={:.3} product={:.3}",
        key, cat_score, sub_score, prod_score
    );

    let cap = tuning.max_suggestions;

    if let (Some(score), Some(best)) = (cat, categories.first()) {
        if score >= sub_score && score >= prod_score && score >= tuning.category_accept {
            debug!("intent: category {:?} ({:.3})", best.item.name, score);
            return Intent::Category {
                matched: best.map(|category| category.id),
                suggestions: runners_up(&categories, cap),
            };
        }
    }

    if let (Some(score), Some(best)) = (sub, subcategories.first()) {
        if score >= prod_score && score >= tuning.subcategory_accept {
            debug!("intent: subcategory {:?} ({:.3})", best.item.name, score);
            return Intent::Subcategory {
                matched: best.map(|sub| sub.id),
                suggestions: runners_up(&subcategories, cap),
            };
        }
    }

    if let (Some(score), Some(best)) = (prod, products.first()) {
        if score >= tuning.product_accept {
            debug!("intent: product {:?} ({:.3})", best.item.name, score);
            return Intent::Product {
                matched: best.map(|product| product.id),
                suggestions: runners_up(&products, cap),
            };
        }
    }

    let suggestions: Vec<Suggestion> = categories
        .first()
        .map(suggestion)
        .into_iter()
        .chain(subcategories.first().map(suggestion))
        .chain(products.first().map(suggestion))
        .take(cap)
        .collect();
    debug!("intent: broad ({} suggestions)", suggestions.len());
    Intent::Broad { suggestions }
}
