// web_app/model/mod.rs - Shared data models for client and server
//
// These types are used by the row-assembly logic, the catalog loader and
// every component. None of them depend on Leptos, so they compile (and are
// tested) without any feature enabled.

use serde::{Deserialize, Serialize};

/// A single product in the catalog
///
/// Immutable once loaded. The price is display text (e.g. "$1") and is
/// never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub category: String,
    pub name: String,
    pub price: String,
    pub stocked: bool,
}

impl Product {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            price: price.into(),
            stocked,
        }
    }
}

/// Filters applied by the user in the search bar
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilters {
    /// Case-insensitive substring matched against category and name
    pub filter_text: String,
    /// Hide products that are not stocked
    pub in_stock_only: bool,
}

impl ProductFilters {
    pub fn new(filter_text: impl Into<String>, in_stock_only: bool) -> Self {
        Self {
            filter_text: filter_text.into(),
            in_stock_only,
        }
    }

    /// Whether a data row for `product` survives these filters.
    ///
    /// Category headers are not subject to filtering; see
    /// [`build_rows`](crate::web_app::table::build_rows).
    pub fn admits(&self, product: &Product) -> bool {
        if self.in_stock_only && !product.stocked {
            return false;
        }
        crate::web_app::table::matches_filter_text(product, &self.filter_text)
    }
}

/// Reconciliation key for a rendered row
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Category name and how many headers for it came before this one
    Category(String, usize),
    Product(String),
}

/// One row of the rendered product table, in display order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProductTableRow {
    /// Header introducing a new category, spans both columns.
    ///
    /// A category that reappears later in the list gets another header;
    /// `occurrence` counts from 0 and tells those headers apart.
    Category { category: String, occurrence: usize },
    Product(Product),
}

impl ProductTableRow {
    /// Category name (plus occurrence) for headers, product name for data
    /// rows.
    ///
    /// Product keys are only unique if product names are; the catalog loader
    /// warns about duplicates but does not reject them.
    pub fn key(&self) -> RowKey {
        match self {
            ProductTableRow::Category { category, occurrence } => {
                RowKey::Category(category.clone(), *occurrence)
            }
            ProductTableRow::Product(product) => RowKey::Product(product.name.clone()),
        }
    }

    /// The text shown in the first cell of the row
    pub fn label(&self) -> &str {
        match self {
            ProductTableRow::Category { category, .. } => category,
            ProductTableRow::Product(product) => &product.name,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, ProductTableRow::Category { .. })
    }
}

impl std::fmt::Display for ProductTableRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductTableRow::Category { category, .. } => write!(f, "[{}]", category),
            ProductTableRow::Product(product) => write!(f, "{} {}", product.name, product.price),
        }
    }
}
