//! Selected Category Icons Component
//!
//! Badge row for the active filter. Clicking a badge hides that category
//! unless it is the last one selected.

use leptos::prelude::*;
use category_controls::dom::SELECTED_ICONS_ID;

use crate::components::page_controls;
use crate::store::{
    use_page_store, store_flash_notice, store_notice, store_selection, store_selection_untracked,
    store_set_selection,
};

#[component]
pub fn SelectedCategoryIcons() -> impl IntoView {
    let store = use_page_store();
    let controls = page_controls();

    // Redraw badges whenever the selection changes
    Effect::new(move |_| {
        let selected = store_selection(&store);
        controls.update_selected_category_icons(&selected, move |_ev, category| {
            let current = store_selection_untracked(&store);
            match controls.handle_category_icon_click(category, &current) {
                Some(next) => store_set_selection(&store, next),
                None => store_flash_notice(store, "少なくとも1つのカテゴリを選択してください".to_string()),
            }
        });
    });

    view! {
        <div class="selected-categories">
            <span class="selected-categories-label">"表示中: "</span>
            <span id=SELECTED_ICONS_ID class="selected-category-icons"></span>
            {move || store_notice(&store).map(|text| view! {
                <p class="filter-notice">{text}</p>
            })}
        </div>
    }
}
