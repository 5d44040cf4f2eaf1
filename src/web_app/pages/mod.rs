// web_app/pages/mod.rs - Page components module
//
// - FilterableProductTable: search bar plus live-filtered table
// - StaticFilterableProductTable: the first, unfiltered version

pub mod filterable;

pub use filterable::{FilterSignals, FilterableProductTable, StaticFilterableProductTable};
