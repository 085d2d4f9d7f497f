//! History Page App
//!
//! Page controller: owns the filter state and lays out the controls.

use leptos::prelude::*;
use reactive_stores::Store;
use category_controls::CSV_URLS;

use crate::components::{CategoryFilterPanel, SelectedCategoryIcons, YearRangeHeader};
use crate::store::PageState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the page store to all children
    let store = Store::new(PageState::new());
    provide_context(store);

    view! {
        <div class="history-layout">
            <YearRangeHeader />

            <SelectedCategoryIcons />

            <CategoryFilterPanel />

            <footer class="data-sources">
                <a href=CSV_URLS.basic_info target="_blank">"basic info (CSV)"</a>
                " / "
                <a href=CSV_URLS.history target="_blank">"history (CSV)"</a>
            </footer>
        </div>
    }
}
