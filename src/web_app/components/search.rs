// web_app/components/search.rs - Search form components
//
// - SearchBar: controlled text input and stock checkbox. Holds no state;
//   values come in as signals and every change goes out through a callback.
// - StaticSearchBar: the same markup with nothing bound, as shipped in the
//   first version of the table.

use leptos::prelude::*;

/// Placeholder shown in the empty search input
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Label next to the stock checkbox
pub const IN_STOCK_LABEL: &str = "Only Show products in stock";

const INPUT_CLASS: &str = "w-full px-4 py-2 border-2 border-gray-200 rounded-xl \
                           focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                           outline-none transition-all shadow-sm";

/// Controlled search bar
///
/// Each keystroke reports the input's full current text; each checkbox
/// toggle reports the new checked state. The displayed values always
/// reflect the signals passed in, never local edits.
#[component]
pub fn SearchBar(
    /// Current search text
    #[prop(into)]
    filter_text: Signal<String>,
    /// Current stock filter
    #[prop(into)]
    in_stock_only: Signal<bool>,
    /// Called with the new text on every input event
    on_filter_text_change: Callback<String>,
    /// Called with the new checked state on every toggle
    on_in_stock_only_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <form class="w-full space-y-3 mb-6" on:submit=|ev| ev.prevent_default()>
            <input
                type="text"
                placeholder=SEARCH_PLACEHOLDER
                class=INPUT_CLASS
                prop:value=move || filter_text.get()
                on:input=move |ev| on_filter_text_change.run(event_target_value(&ev))
            />
            <label class="flex items-center gap-3 cursor-pointer text-sm font-medium text-gray-700">
                <input
                    type="checkbox"
                    class="h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
                    prop:checked=move || in_stock_only.get()
                    on:change=move |ev| on_in_stock_only_change.run(event_target_checked(&ev))
                />
                " "
                {IN_STOCK_LABEL}
            </label>
        </form>
    }
}

/// Decorative search bar with no bound values and no handlers
#[component]
pub fn StaticSearchBar() -> impl IntoView {
    view! {
        <form class="w-full space-y-3 mb-6">
            <input type="text" placeholder=SEARCH_PLACEHOLDER class=INPUT_CLASS />
            <label class="flex items-center gap-3 text-sm font-medium text-gray-700">
                <input
                    type="checkbox"
                    class="h-4 w-4 rounded border-gray-300 text-blue-600"
                />
                " "
                {IN_STOCK_LABEL}
            </label>
        </form>
    }
}

