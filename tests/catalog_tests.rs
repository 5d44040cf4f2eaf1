// tests/catalog_tests.rs - Catalog loading from disk

use std::path::PathBuf;

use filterable_product_table::fixtures::{ProduceFixture, ProductFixture};
use filterable_product_table::web_app::catalog::{
    duplicate_names, embed_catalog, load_catalog, parse_catalog, CatalogError,
};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn test_bundled_catalog_matches_fixture() {
    let products = load_catalog(&data_path("products.json")).unwrap();
    assert_eq!(products, ProduceFixture::products());
}

#[test]
fn test_missing_catalog_file() {
    let err = load_catalog(&data_path("no_such_catalog.json")).unwrap_err();
    match err {
        CatalogError::Io { path, source } => {
            assert!(path.ends_with("no_such_catalog.json"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_malformed_catalog() {
    let err = parse_catalog("{\"products\": [").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(err.to_string().starts_with("invalid catalog JSON"));
}

#[test]
fn test_wrong_field_type() {
    let json = r#"{"products": [{"category": "Fruits", "name": "Apple", "price": 1, "stocked": true}]}"#;
    assert!(matches!(parse_catalog(json), Err(CatalogError::Parse(_))));
}

#[test]
fn test_embedded_catalog_reads_back() {
    let products = ProduceFixture::products();
    let embedded = embed_catalog(&products).unwrap();

    assert_eq!(parse_catalog(&embedded).unwrap(), products);
}

#[test]
fn test_duplicate_names_detected_but_loaded() {
    let json = r#"{"products": [
        {"category": "Fruits", "name": "Apple", "price": "$1", "stocked": true},
        {"category": "Fruits", "name": "Apple", "price": "$2", "stocked": false}
    ]}"#;
    let products = parse_catalog(json).unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(duplicate_names(&products), vec!["Apple"]);
}
