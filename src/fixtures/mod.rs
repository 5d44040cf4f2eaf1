// fixtures/mod.rs - Built-in product datasets
//
// A fixture is a named, reusable product list. The server falls back to one
// when no catalog file is configured, the WASM client falls back to the same
// one when the embedded catalog is unusable, and the tests use it so every
// suite sees identical data.
//
// Fixtures are only a source of data: the App component receives whatever
// list it is given and never reaches for a fixture itself.

pub mod produce;

pub use produce::ProduceFixture;

use crate::web_app::model::Product;

/// A named product dataset
pub trait ProductFixture {
    /// Short name used in log messages
    fn name() -> &'static str;

    /// The products, in display order
    fn products() -> Vec<Product>;
}
