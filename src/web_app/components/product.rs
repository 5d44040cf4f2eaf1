// web_app/components/product.rs - Product table components
//
// Components for displaying the product table:
// - ProductRow: one product's name and price
// - ProductCategoryRow: category header spanning both columns
// - ProductTable: the full table, filtered by the current search state

use leptos::prelude::*;

use crate::web_app::model::{Product, ProductFilters, ProductTableRow};
use crate::web_app::table::build_rows;

/// A single product row: name cell and price cell
#[component]
pub fn ProductRow(
    /// Product name
    #[prop(into)]
    name: String,
    /// Pre-formatted price, rendered as given
    #[prop(into)]
    price: String,
) -> impl IntoView {
    view! {
        <tr class="border-b border-gray-100 hover:bg-gray-50 transition-colors">
            <td class="px-4 py-2 text-gray-900">{name}</td>
            <td class="px-4 py-2 text-gray-700 font-mono">{price}</td>
        </tr>
    }
}

/// Category header row
#[component]
pub fn ProductCategoryRow(
    /// Category name
    #[prop(into)]
    category: String,
) -> impl IntoView {
    view! {
        <tr class="bg-gray-100">
            <th
                colspan="2"
                class="px-4 py-2 text-left text-sm font-bold text-gray-700 uppercase tracking-wide"
            >
                {category}
            </th>
        </tr>
    }
}

/// Product table
///
/// Renders the column header followed by category headers and product rows
/// in list order. Rows are recomputed whenever either filter signal changes.
/// Both filters default to "show everything", which is the unfiltered table.
#[component]
pub fn ProductTable(
    /// Products in display order
    products: Vec<Product>,
    /// Current search text
    #[prop(into, default = Signal::stored(String::new()))]
    filter_text: Signal<String>,
    /// Whether to hide products that are not stocked
    #[prop(into, default = Signal::stored(false))]
    in_stock_only: Signal<bool>,
) -> impl IntoView {
    let rows = Memo::new(move |_| {
        let filters = ProductFilters {
            filter_text: filter_text.get(),
            in_stock_only: in_stock_only.get(),
        };
        build_rows(&products, &filters)
    });

    view! {
        <table class="w-full bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
            <thead>
                <tr class="bg-gray-50 border-b border-gray-200">
                    <th class="px-4 py-3 text-left font-semibold text-gray-900">"Name"</th>
                    <th class="px-4 py-3 text-left font-semibold text-gray-900">"Price"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|row: &ProductTableRow| row.key()
                    children=|row: ProductTableRow| match row {
                        ProductTableRow::Category { category, .. } => {
                            view! { <ProductCategoryRow category=category /> }.into_any()
                        }
                        ProductTableRow::Product(product) => {
                            view! { <ProductRow name=product.name price=product.price /> }.into_any()
                        }
                    }
                />
            </tbody>
        </table>
    }
}
