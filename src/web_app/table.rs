// web_app/table.rs - Row assembly for the product table
//
// Turns an ordered product list plus the current filters into the ordered
// sequence of rows the ProductTable component renders. Pure and
// deterministic: the same inputs always give the same rows.

use std::collections::HashMap;

use crate::web_app::model::{Product, ProductFilters, ProductTableRow};

/// Build the rows for `products` under `filters`.
///
/// Input order is preserved. A category header is emitted whenever the
/// category differs from the previous product's, and this happens before
/// the filters are consulted: a category whose products are all filtered
/// out still gets its header.
///
/// Every returned row has a distinct key as long as product names are
/// unique, including headers of a category that appears more than once.
pub fn build_rows(products: &[Product], filters: &ProductFilters) -> Vec<ProductTableRow> {
    let mut rows = Vec::with_capacity(products.len() * 2);
    let mut last_category: Option<&str> = None;
    let mut headers_seen: HashMap<&str, usize> = HashMap::new();

    for product in products {
        if last_category != Some(product.category.as_str()) {
            let seen = headers_seen.entry(product.category.as_str()).or_insert(0);
            rows.push(ProductTableRow::Category {
                category: product.category.clone(),
                occurrence: *seen,
            });
            *seen += 1;
            last_category = Some(product.category.as_str());
        }

        if filters.admits(product) {
            rows.push(ProductTableRow::Product(product.clone()));
        }
    }

    rows
}

/// Case-insensitive substring match of `filter_text` against the product's
/// category or name. An empty filter matches everything.
pub fn matches_filter_text(product: &Product, filter_text: &str) -> bool {
    if filter_text.is_empty() {
        return true;
    }
    let needle = filter_text.to_lowercase();
    product.category.to_lowercase().contains(&needle)
        || product.name.to_lowercase().contains(&needle)
}
