// lib.rs - Root module for the filterable_product_table library
//
// The same library is compiled twice by cargo-leptos: with `ssr` for the
// server binary and with `hydrate` as the WASM client.

/// Built-in product datasets
pub mod fixtures;

/// The Leptos application: model, components, pages and routing
pub mod web_app;

/// WASM entry point: hydrate the server-rendered page.
///
/// The product list is read back from the catalog the server embedded in
/// the page, so the client starts from the same rows the server rendered.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::fixtures::{ProduceFixture, ProductFixture};
    use crate::web_app::{catalog, App};
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    // Route tracing events (catalog fallback, filter changes) to the browser console
    tracing_wasm::set_as_global_default();

    let products = catalog::read_embedded_catalog().unwrap_or_else(|err| {
        tracing::warn!("Falling back to the built-in catalog: {}", err);
        ProduceFixture::products()
    });

    leptos::mount::hydrate_body(move || view! { <App products=products /> });
}
