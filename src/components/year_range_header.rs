//! Year Range Header Component

use leptos::prelude::*;
use category_controls::japanese_era_label;

use crate::store::{use_page_store, store_year_range};

/// Page title with the shown year span in Gregorian and era years
#[component]
pub fn YearRangeHeader() -> impl IntoView {
    let store = use_page_store();

    let range_label = move || {
        let (start, end) = store_year_range(&store);
        format!(
            "{}年（{}）〜 {}年（{}）",
            start,
            japanese_era_label(start),
            end,
            japanese_era_label(end)
        )
    };

    view! {
        <header class="history-header">
            <h1>"History"</h1>
            <p class="year-range">{range_label}</p>
        </header>
    }
}
