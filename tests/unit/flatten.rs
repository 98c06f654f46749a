//! Flattening snapshots parsed from provider JSON.

use vitrine::{CatalogIndex, CatalogSnapshot, CategoryId, NodeId, SubcategoryId};

use crate::common::{sample_index, sample_snapshot};

fn index_from(json: &str) -> CatalogIndex {
    CatalogIndex::build(&CatalogSnapshot::from_json(json).expect("valid json"))
}

#[test]
fn test_index_order_is_snapshot_order() {
    let index = sample_index();
    let names: Vec<&str> = index.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(&names[..3], ["Ruled Notebook A5", "Spiral Sketchbook", "Dotted Journal"]);
    for (i, product) in index.products().iter().enumerate() {
        assert_eq!(product.id.index(), i);
    }
}

#[test]
fn test_back_references_agree() {
    let index = sample_index();
    for product in index.products() {
        let sub = index.subcategory(product.subcategory).expect("subcategory");
        let cat = index.category(product.category).expect("category");
        assert!(sub.products.contains(&product.id));
        assert_eq!(sub.category, product.category);
        assert!(cat.subcategories.contains(&sub.id));
        assert_eq!(product.category_name, cat.name);
        assert_eq!(product.subcategory_name, sub.name);
    }
}

#[test]
fn test_mixed_id_types_and_string_images() {
    let index = index_from(
        r#"[{"id": "wall-art", "name": "Wall Art", "subcategories": [
              {"id": 7, "name": "Posters", "products": [
                 {"id": "p-1", "name": "Mountain Poster",
                  "images": ["/m.jpg", {"url": "/m2.jpg", "alt": "framed"}, {"alt": "no url"}]}
              ]}
           ]}]"#,
    );
    assert_eq!(index.categories()[0].source_id, NodeId::Text("wall-art".into()));
    assert_eq!(index.subcategories()[0].source_id, NodeId::Int(7));
    let images = &index.products()[0].images;
    assert_eq!(images.len(), 2);
    assert_eq!(images[1].alt.as_deref(), Some("framed"));
}

#[test]
fn test_malformed_nodes_shrink_but_stay_consistent() {
    let index = index_from(
        r#"[
            {"id": 1, "name": "Stationery", "subcategories": [
                {"id": 10, "name": "Notebooks", "products": [
                    {"id": 100, "name": "Ruled Notebook A5"},
                    {"id": null, "name": "No Id"},
                    {"id": 101}
                ]},
                {"id": 11, "name": "  ", "products": [{"id": 102, "name": "Orphan"}]}
            ]},
            {"name": "No Id Category", "subcategories": [{"id": 12, "name": "Lost"}]},
            {"id": 2, "name": "Posters"}
        ]"#,
    );
    let stats = index.stats();
    assert_eq!(stats.categories, 2);
    assert_eq!(stats.subcategories, 1);
    assert_eq!(stats.products, 1);
    // two bad products, blank subcategory + its product, bad category + its subcategory
    assert_eq!(stats.skipped, 6);

    assert_eq!(index.categories()[1].id, CategoryId(1));
    assert_eq!(index.categories()[1].name, "Posters");
    assert_eq!(index.categories()[0].subcategories, vec![SubcategoryId(0)]);
}

#[test]
fn test_non_node_elements_are_counted_as_skipped() {
    let index = index_from(
        r#"[
            {"id": 1, "name": "Stationery", "subcategories": [
                null,
                {"id": 10, "name": "Notebooks", "products": [
                    3,
                    {"id": 100, "name": "Ruled Notebook A5"},
                    [],
                    {"id": 101, "name": ["Dotted Journal"]},
                    {"id": 101, "name": "Dotted Journal"}
                ]},
                "junk"
            ]},
            false,
            {"id": 2, "name": "Posters", "subcategories": {"id": 20}}
        ]"#,
    );
    let stats = index.stats();
    assert_eq!(stats.categories, 2);
    assert_eq!(stats.subcategories, 1);
    assert_eq!(stats.products, 2);
    // null and "junk" subcategories, 3, [] and the list-named product, false
    assert_eq!(stats.skipped, 6);

    // an id whose node was rejected is still free for a later node
    assert_eq!(index.products()[1].source_id, NodeId::Int(101));
    assert_eq!(index.products()[1].name, "Dotted Journal");
    assert!(index.categories()[1].subcategories.is_empty());
}

#[test]
fn test_names_are_trimmed() {
    let index = index_from(r#"[{"id": 1, "name": "  Mugs "}]"#);
    assert_eq!(index.categories()[0].name, "Mugs");
    assert_eq!(index.categories()[0].search_key, "mugs");
}

#[test]
fn test_sample_snapshot_roundtrips_through_json() {
    let json = serde_json::to_string(&sample_snapshot().categories).expect("serialize");
    let rebuilt = index_from(&json);
    assert_eq!(rebuilt.stats(), sample_index().stats());
}
