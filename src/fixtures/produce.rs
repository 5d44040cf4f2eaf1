// fixtures/produce.rs
//
// The demo dataset: three fruits and three vegetables with mixed stock
// status. The order matters, since rows render in list order and headers
// are emitted on category change.

use crate::fixtures::ProductFixture;
use crate::web_app::model::Product;

pub struct ProduceFixture;

impl ProductFixture for ProduceFixture {
    fn name() -> &'static str {
        "produce"
    }

    fn products() -> Vec<Product> {
        vec![
            Product::new("Fruits", "Apple", "$1", true),
            Product::new("Fruits", "Dragonfruit", "$1", true),
            Product::new("Fruits", "Passionfruit", "$2", false),
            Product::new("Vegetables", "Spinach", "$2", true),
            Product::new("Vegetables", "Pumpkin", "$4", false),
            Product::new("Vegetables", "Peas", "$1", true),
        ]
    }
}
