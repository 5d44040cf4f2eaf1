// web_app/components/mod.rs - UI components module
//
// Structure:
// - search.rs: SearchBar (controlled) and StaticSearchBar
// - product.rs: ProductTable and its row components

pub mod product;
pub mod search;

pub use product::*;
pub use search::*;
