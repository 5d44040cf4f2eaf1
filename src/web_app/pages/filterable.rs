// web_app/pages/filterable.rs - Filterable product table pages
//
// FilterableProductTable owns the filter state. SearchBar only sees
// read-only signals and reports edits through callbacks; ProductTable only
// sees read-only signals. Nothing else can write the state.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::{Product, ProductFilters};

/// The filter state owned by a FilterableProductTable
#[derive(Clone, Copy)]
pub struct FilterSignals {
    pub filter_text: RwSignal<String>,
    pub in_stock_only: RwSignal<bool>,
}

impl FilterSignals {
    /// Empty search text, all products shown
    pub fn new() -> Self {
        let defaults = ProductFilters::default();
        Self {
            filter_text: RwSignal::new(defaults.filter_text),
            in_stock_only: RwSignal::new(defaults.in_stock_only),
        }
    }

    /// Callback that replaces the search text
    pub fn filter_text_callback(self) -> Callback<String> {
        let filter_text = self.filter_text;
        Callback::new(move |text: String| {
            tracing::debug!(filter_text = %text, "Filter text changed");
            filter_text.set(text);
        })
    }

    /// Callback that replaces the stock filter
    pub fn in_stock_only_callback(self) -> Callback<bool> {
        let in_stock_only = self.in_stock_only;
        Callback::new(move |checked: bool| {
            tracing::debug!(in_stock_only = checked, "Stock filter changed");
            in_stock_only.set(checked);
        })
    }

    /// Current values, read without tracking
    pub fn snapshot(self) -> ProductFilters {
        ProductFilters {
            filter_text: self.filter_text.get_untracked(),
            in_stock_only: self.in_stock_only.get_untracked(),
        }
    }
}

impl Default for FilterSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Search bar and product table wired to shared filter state
#[component]
pub fn FilterableProductTable(
    /// Products in display order
    products: Vec<Product>,
) -> impl IntoView {
    let filters = FilterSignals::new();

    view! {
        <div class="max-w-xl mx-auto p-6">
            <SearchBar
                filter_text=filters.filter_text.read_only()
                in_stock_only=filters.in_stock_only.read_only()
                on_filter_text_change=filters.filter_text_callback()
                on_in_stock_only_change=filters.in_stock_only_callback()
            />
            <ProductTable
                products=products
                filter_text=filters.filter_text.read_only()
                in_stock_only=filters.in_stock_only.read_only()
            />
        </div>
    }
}

/// Decorative search bar over the unfiltered table
#[component]
pub fn StaticFilterableProductTable(
    /// Products in display order
    products: Vec<Product>,
) -> impl IntoView {
    view! {
        <div class="max-w-xl mx-auto p-6">
            <StaticSearchBar />
            <ProductTable products=products />
        </div>
    }
}
