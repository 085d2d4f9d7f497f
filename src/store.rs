//! Page State Store
//!
//! Source of truth for the history page's filter state, using Leptos
//! reactive_stores for field-level reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use reactive_stores::Store;
use category_controls::catalog;
use category_controls::selection;

/// How long a rejected-action notice stays visible
const NOTICE_MS: u32 = 3000;

/// History page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Categories included in the history view
    pub selected_categories: Vec<String>,
    /// First year shown
    pub start_year: i32,
    /// Last year shown
    pub end_year: i32,
    /// Transient message for the user, e.g. a refused filter change
    pub notice: Option<String>,
    /// Bumped for every notice shown; a timer only clears its own notice
    pub notice_generation: u32,
}

impl PageState {
    pub fn new() -> Self {
        let (start_year, end_year) = catalog::default_year_range();
        Self {
            selected_categories: selection::all_categories(),
            start_year,
            end_year,
            notice: None,
            notice_generation: 0,
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current selection (tracked)
pub fn store_selection(store: &PageStore) -> Vec<String> {
    store.selected_categories().get()
}

/// Current selection without subscribing the caller
pub fn store_selection_untracked(store: &PageStore) -> Vec<String> {
    store.selected_categories().get_untracked()
}

/// Replace the selection
pub fn store_set_selection(store: &PageStore, selection: Vec<String>) {
    log::debug!("Selection -> {:?}", selection);
    store.selected_categories().set(selection);
}

/// (start, end) years shown
pub fn store_year_range(store: &PageStore) -> (i32, i32) {
    (store.start_year().get(), store.end_year().get())
}

pub fn store_notice(store: &PageStore) -> Option<String> {
    store.notice().get()
}

/// Show `text`; returns the generation that may later clear it
fn begin_notice(store: &PageStore, text: String) -> u32 {
    let generation = store.notice_generation().get_untracked().wrapping_add(1);
    store.notice_generation().set(generation);
    store.notice().set(Some(text));
    generation
}

/// Clear the notice unless a newer one replaced it
fn end_notice(store: &PageStore, generation: u32) {
    if store.notice_generation().get_untracked() == generation {
        store.notice().set(None);
    }
}

/// Show `text` for a few seconds
pub fn store_flash_notice(store: PageStore, text: String) {
    let generation = begin_notice(&store, text);
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MS).await;
        end_notice(&store, generation);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_selects_every_category() {
        let state = PageState::new();
        assert_eq!(state.selected_categories, selection::all_categories());
        assert_eq!(state.end_year, catalog::max_year());
        assert!(state.start_year >= catalog::MIN_YEAR && state.start_year <= state.end_year);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_repeated_notice_survives_earlier_timer() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(PageState::new());

        let text = "少なくとも1つのカテゴリを選択してください".to_string();
        let first = begin_notice(&store, text.clone());
        let second = begin_notice(&store, text.clone());

        end_notice(&store, first);
        assert_eq!(store_notice(&store), Some(text));

        end_notice(&store, second);
        assert_eq!(store_notice(&store), None);
    }
}
