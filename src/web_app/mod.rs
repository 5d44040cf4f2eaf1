// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Product, filters and table rows (no framework dependency)
// - table.rs: row assembly for the product table (no framework dependency)
// - catalog.rs: catalog JSON loading and page embedding
// - config.rs: server configuration from the environment (SSR only)
// - components/: SearchBar and ProductTable components (both SSR and hydrate)
// - pages/: FilterableProductTable and its static variant (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod catalog;
pub mod model;
pub mod table;

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        pub mod config;
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(feature = "ssr", feature = "hydrate"))] {
        pub mod app;
        pub mod components;
        pub mod pages;

        // Re-export main app component for convenience
        pub use app::App;
    }
}
