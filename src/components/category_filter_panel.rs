//! Category Filter Panel Component
//!
//! Checklist of categories plus bulk selection and apply buttons.
//! The checklist itself is drawn into `#categoryFilterList` by the controls.

use leptos::prelude::*;
use category_controls::catalog::{self, CATEGORIES};
use category_controls::dom::FILTER_LIST_ID;

use crate::components::page_controls;
use crate::store::{use_page_store, store_selection_untracked, store_set_selection};

/// "Only this category" buttons
#[component]
fn SingleCategoryButtons() -> impl IntoView {
    let store = use_page_store();
    let controls = page_controls();

    view! {
        <div class="filter-only-buttons">
            {CATEGORIES.iter().map(move |&category| {
                view! {
                    <button
                        class="filter-only-btn"
                        title=format!("only {}", category)
                        on:click=move |_| {
                            let next = controls.select_single_category(category);
                            store_set_selection(&store, next);
                        }
                    >
                        {catalog::category_icon(category)}
                        {catalog::category_abbreviation(category)}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Filter checklist with its action buttons
#[component]
pub fn CategoryFilterPanel() -> impl IntoView {
    let store = use_page_store();
    let controls = page_controls();

    // Draw the checklist once the container is in the document
    Effect::new(move |_| {
        controls.generate_category_filter_list(&store_selection_untracked(&store));
    });

    view! {
        <section class="category-filter">
            <div class="category-filter-header">"カテゴリ"</div>
            <div id=FILTER_LIST_ID class="category-filter-list"></div>
            <div class="category-filter-actions">
                <button class="filter-btn" on:click=move |_| controls.select_all_in_filter()>
                    "すべて選択"
                </button>
                <button class="filter-btn" on:click=move |_| controls.deselect_all_in_filter()>
                    "すべて解除"
                </button>
                <button
                    class="filter-btn"
                    on:click=move |_| {
                        let next = controls.show_all_categories();
                        store_set_selection(&store, next);
                    }
                >
                    "全表示"
                </button>
                <button
                    class="filter-btn primary"
                    on:click=move |_| {
                        let next = controls.checked_categories_in_filter();
                        store_set_selection(&store, next);
                    }
                >
                    "適用"
                </button>
            </div>
            <SingleCategoryButtons />
        </section>
    }
}
