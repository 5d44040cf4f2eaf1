// web_app/app.rs - Root application component
//
// The entry point for the Leptos application. It receives the product list
// from whoever mounts it (the server binary or the hydrate entry point),
// sets up routing, and hands the list down to the table pages.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::model::Product;
use crate::web_app::pages::{FilterableProductTable, StaticFilterableProductTable};

pub const APP_TITLE: &str = "Filterable Product Table";

/// Root application component
///
/// Routes:
/// - `/`: filterable table with live search
/// - `/static`: unfiltered table with a decorative search bar
#[component]
pub fn App(
    /// Products in display order
    products: Vec<Product>,
) -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    let static_products = products.clone();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Product table with search and in-stock filtering" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/filterable_product_table.css" />

        <Router>
            <main class="min-h-screen bg-gray-50 font-sans text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/")
                        view=move || view! { <FilterableProductTable products=products.clone() /> }
                    />
                    <Route
                        path=path!("/static")
                        view=move || view! { <StaticFilterableProductTable products=static_products.clone() /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Products"
                </a>
            </div>
        </div>
    }
}
