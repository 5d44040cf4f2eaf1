// web_app/catalog.rs - Product catalog loading and embedding
//
// A catalog is a JSON document of the form
//
//   { "products": [ { "category": .., "name": .., "price": .., "stocked": .. } ] }
//
// The server reads it once at startup (or uses a built-in fixture), renders
// the table from it, and embeds the same list in the page so the WASM
// client hydrates against exactly what the server rendered.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::web_app::model::Product;

/// DOM id of the `<script type="application/json">` element holding the
/// embedded catalog
pub const CATALOG_ELEMENT_ID: &str = "product-catalog";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog is missing the 'products' key")]
    MissingProducts,

    #[error("catalog element #{0} not found in the page")]
    NotEmbedded(&'static str),
}

#[derive(Serialize)]
struct CatalogDocument<'a> {
    products: &'a [Product],
}

#[derive(Deserialize)]
struct OwnedCatalogDocument {
    products: Option<Vec<Product>>,
}

/// Parse a catalog document from a string
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let document: OwnedCatalogDocument = serde_json::from_str(json)?;
    document.products.ok_or(CatalogError::MissingProducts)
}

/// Read a catalog document from disk
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: OwnedCatalogDocument = serde_json::from_reader(BufReader::new(file))?;
    let products = document.products.ok_or(CatalogError::MissingProducts)?;

    tracing::debug!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

/// Serialize a catalog for embedding in an HTML `<script>` element.
///
/// `<` is written as its JSON escape so no product text can close the
/// script element early. The output is still valid catalog JSON.
pub fn embed_catalog(products: &[Product]) -> Result<String, CatalogError> {
    let json = serde_json::to_string(&CatalogDocument { products })?;
    Ok(json.replace('<', "\\u003c"))
}

/// Names that occur more than once, in the order their second occurrence
/// appears.
///
/// Such products share a render key, so the table cannot tell them apart
/// when it reconciles rows.
pub fn duplicate_names(products: &[Product]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for product in products {
        let count = counts.entry(product.name.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(product.name.clone());
        }
    }

    duplicates
}

/// Read the catalog the server embedded in the current page
#[cfg(feature = "hydrate")]
pub fn read_embedded_catalog() -> Result<Vec<Product>, CatalogError> {
    let json = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CATALOG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .ok_or(CatalogError::NotEmbedded(CATALOG_ELEMENT_ID))?;

    parse_catalog(&json)
}
