//! Intent resolution re-derived from the matcher.
//!
//! Each case recomputes the three boosted scores with `top_matches` and
//! checks that the resolved intent is the first eligible rule, in order.

use proptest::prelude::*;
use vitrine::search::matcher::query_key;
use vitrine::{
    detect_intent, top_matches, CatalogIndex, EntityKind, Intent, ScoredCandidate, Searchable,
    Tuning,
};

use super::strategies::{catalog_query_strategy, index_of_products, name_strategy};
use crate::common::{assert_sections_well_formed, engine_for, sample_index};

fn boosted<T: Searchable>(hits: &[ScoredCandidate<&T>], key: &str, boost: f64) -> Option<f64> {
    hits.first().map(|best| {
        if best.item.search_key().contains(key) {
            best.score + boost
        } else {
            best.score
        }
    })
}

fn check_resolution(query: &str, index: &CatalogIndex) -> Result<(), TestCaseError> {
    let tuning = Tuning::default();
    let intent = detect_intent(query, index, &tuning);

    let Some(key) = query_key(query) else {
        prop_assert_eq!(intent, Intent::default());
        return Ok(());
    };

    let limit = tuning.candidates_per_kind;
    let cats = top_matches(index.categories(), query, tuning.category_min_score, limit);
    let subs = top_matches(index.subcategories(), query, tuning.subcategory_min_score, limit);
    let prods = top_matches(index.products(), query, tuning.product_min_score, limit);

    let boost = tuning.includes_boost;
    let cat = boosted(&cats, &key, boost);
    let sub = boosted(&subs, &key, boost);
    let prod = boosted(&prods, &key, boost);
    let (sub_score, prod_score) = (sub.unwrap_or(0.0), prod.unwrap_or(0.0));

    let category_wins = cat.is_some_and(|score| {
        score >= sub_score && score >= prod_score && score >= tuning.category_accept
    });
    let subcategory_wins =
        sub.is_some_and(|score| score >= prod_score && score >= tuning.subcategory_accept);
    let product_wins = prod.is_some_and(|score| score >= tuning.product_accept);

    match &intent {
        Intent::Category { matched, .. } => {
            prop_assert!(category_wins);
            prop_assert_eq!(matched.item, cats[0].item.id);
        }
        Intent::Subcategory { matched, .. } => {
            prop_assert!(!category_wins && subcategory_wins);
            prop_assert_eq!(matched.item, subs[0].item.id);
        }
        Intent::Product { matched, .. } => {
            prop_assert!(!category_wins && !subcategory_wins && product_wins);
            prop_assert_eq!(matched.item, prods[0].item.id);
        }
        Intent::Broad { suggestions } => {
            prop_assert!(!category_wins && !subcategory_wins && !product_wins);
            let tops: Vec<&str> = cats
                .first()
                .map(|c| c.item.name.as_str())
                .into_iter()
                .chain(subs.first().map(|s| s.item.name.as_str()))
                .chain(prods.first().map(|p| p.item.name.as_str()))
                .collect();
            let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
            prop_assert_eq!(names, tops);
        }
    }

    prop_assert!(intent.suggestions().len() <= tuning.max_suggestions);
    for suggestion in intent.suggestions() {
        prop_assert!((0.0..=1.0).contains(&suggestion.score));
    }
    if let Some(kind) = intent.kind() {
        let runners_up = match kind {
            EntityKind::Category => cats.len(),
            EntityKind::Subcategory => subs.len(),
            EntityKind::Product => prods.len(),
        };
        prop_assert_eq!(
            intent.suggestions().len(),
            runners_up.saturating_sub(1).min(tuning.max_suggestions)
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: on the sample catalog, the first eligible rule wins.
    #[test]
    fn prop_first_eligible_rule_wins(query in catalog_query_strategy()) {
        check_resolution(&query, &sample_index())?;
    }

    /// Property: same on generated catalogs.
    #[test]
    fn prop_first_eligible_rule_wins_generated(
        names in prop::collection::vec(name_strategy(), 0..10),
        query in catalog_query_strategy(),
    ) {
        check_resolution(&query, &index_of_products(&names))?;
    }

    /// Property: views are well formed and list each product at most once.
    #[test]
    fn prop_view_has_no_duplicate_rows(query in catalog_query_strategy()) {
        let outcome = engine_for(sample_index()).search(&query);
        assert_sections_well_formed(&outcome.view);

        let mut ids: Vec<_> = outcome
            .view
            .iter()
            .filter_map(|item| item.as_product())
            .map(|product| product.id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    /// Property: a resolved intent's view opens on the matched section.
    #[test]
    fn prop_view_opens_on_target(query in catalog_query_strategy()) {
        let engine = engine_for(sample_index());
        let outcome = engine.search(&query);
        let index = engine.index();
        let expected_header = match &outcome.intent {
            Intent::Category { matched, .. } => index.category(matched.item).map(|c| c.name.clone()),
            Intent::Subcategory { matched, .. } => {
                index.subcategory(matched.item).map(|s| s.category_name.clone())
            }
            Intent::Product { matched, .. } => {
                index.product(matched.item).map(|p| p.category_name.clone())
            }
            Intent::Broad { .. } => None,
        };
        if let Some(header) = expected_header {
            prop_assert_eq!(outcome.view.first(), Some(&vitrine::ViewItem::Header(header)));
        }
    }
}
