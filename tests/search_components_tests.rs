// tests/search_components_tests.rs - Filter state and callback wiring
//
// SearchBar's input handlers do nothing but run the callbacks they were
// given with the input's new value. These tests run the same callbacks
// FilterableProductTable hands to SearchBar and check the state they own.
//
// The `on:input`/`on:change` handlers themselves are not dispatched here:
// these tests run under `ssr`, where no DOM exists and event listeners are
// never attached. SearchBar's markup is covered in component_render_tests.

use filterable_product_table::fixtures::{ProduceFixture, ProductFixture};
use filterable_product_table::web_app::components::ProductTable;
use filterable_product_table::web_app::model::ProductFilters;
use filterable_product_table::web_app::pages::FilterSignals;
use filterable_product_table::web_app::table::build_rows;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

fn product_count(filters: FilterSignals) -> usize {
    build_rows(&ProduceFixture::products(), &filters.snapshot())
        .iter()
        .filter(|row| !row.is_category())
        .count()
}

// Helper to run a test inside a reactive owner
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn test_filter_state_defaults() {
    with_runtime(|| {
        let filters = FilterSignals::new();
        assert_eq!(filters.snapshot(), ProductFilters::default());
    });
}

#[test]
fn test_filter_text_callback_replaces_whole_text() {
    with_runtime(|| {
        let filters = FilterSignals::new();
        let on_change = filters.filter_text_callback();

        // One call per keystroke, each with the full input value
        on_change.run("a".to_string());
        on_change.run("ap".to_string());
        on_change.run("app".to_string());
        assert_eq!(filters.snapshot().filter_text, "app");

        on_change.run(String::new());
        assert_eq!(filters.snapshot().filter_text, "");
    });
}

#[test]
fn test_in_stock_callback_sets_checked_state() {
    with_runtime(|| {
        let filters = FilterSignals::new();
        let on_change = filters.in_stock_only_callback();

        on_change.run(true);
        assert!(filters.snapshot().in_stock_only);

        // Reporting the same value twice is not a toggle
        on_change.run(true);
        assert!(filters.snapshot().in_stock_only);

        on_change.run(false);
        assert!(!filters.snapshot().in_stock_only);
    });
}

#[test]
fn test_callbacks_are_independent() {
    with_runtime(|| {
        let filters = FilterSignals::new();

        filters.filter_text_callback().run("pea".to_string());
        filters.in_stock_only_callback().run(true);
        filters.filter_text_callback().run("peas".to_string());

        assert_eq!(filters.snapshot(), ProductFilters::new("peas", true));
    });
}

#[test]
fn test_state_drives_rows() {
    with_runtime(|| {
        let filters = FilterSignals::new();

        assert_eq!(product_count(filters), 6);

        filters.in_stock_only_callback().run(true);
        assert_eq!(product_count(filters), 4);

        filters.filter_text_callback().run("APPLE".to_string());
        assert_eq!(product_count(filters), 1);
    });
}

#[test]
fn test_table_reads_live_state() {
    with_runtime(|| {
        let filters = FilterSignals::new();
        let table = || {
            view! {
                <ProductTable
                    products=ProduceFixture::products()
                    filter_text=filters.filter_text.read_only()
                    in_stock_only=filters.in_stock_only.read_only()
                />
            }
            .to_html()
        };

        let before = table();
        assert!(before.contains("Dragonfruit"));

        filters.filter_text_callback().run("APPLE".to_string());
        let after = table();
        assert!(after.contains("Apple"));
        assert!(!after.contains("Dragonfruit"));
        assert!(after.contains("Vegetables"));
    });
}
