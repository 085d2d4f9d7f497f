//! Category Controls
//!
//! Filter checklist, bulk selection and selected-category badges.
//! The caller owns the selection; every operation takes it by reference and
//! returns the next selection where one results.

use std::rc::Rc;

use crate::catalog::{self, CATEGORIES};
use crate::selection::{self, CategoryFilterSet};
use crate::view::{FilterRow, FilterView, IconBadge, IconClickEvent};

/// Text shown in the badge area when nothing is selected
pub const NO_FILTER_PLACEHOLDER: &str = "(no filter)";

/// Element id given to the checkbox of `category`
pub fn checkbox_id(category: &str) -> String {
    format!("filter-category-{}", category)
}

/// Checklist rows for every category, checked by membership in `selected`
pub fn filter_rows(selected: &[String]) -> Vec<FilterRow> {
    CATEGORIES
        .iter()
        .map(|&category| {
            let info = catalog::display_info(category);
            FilterRow {
                category,
                checkbox_id: checkbox_id(category),
                checked: selection::contains(selected, category),
                icon: info.icon,
                abbreviation: info.abbreviation,
            }
        })
        .collect()
}

/// Badges for selected categories that have an icon, in display order
pub fn icon_badges(selected: &[String]) -> Vec<IconBadge> {
    selection::selected_in_order(selected)
        .filter_map(|category| {
            let icon = catalog::display_info(category).icon;
            (!icon.is_empty()).then(|| IconBadge {
                category,
                icon,
                title: format!("hide {}", category),
            })
        })
        .collect()
}

/// Category controls drawing on a [`FilterView`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryControls<V> {
    view: V,
}

impl<V: FilterView> CategoryControls<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Render one checklist row per category, replacing any previous list
    pub fn generate_category_filter_list(&self, selected: &[String]) {
        let rows = filter_rows(selected);
        log::debug!("Rendering {} filter rows ({} selected)", rows.len(), selected.len());
        self.view.render_filter_list(&rows);
    }

    pub fn select_all_in_filter(&self) {
        self.view.set_checked_where(&|_| true);
    }

    pub fn deselect_all_in_filter(&self) {
        self.view.set_checked_where(&|_| false);
    }

    /// Select every category; checks all rendered checkboxes
    pub fn show_all_categories(&self) -> CategoryFilterSet {
        self.select_all_in_filter();
        selection::all_categories()
    }

    /// Select only `category`. Unknown categories are accepted and leave
    /// every checkbox unchecked.
    pub fn select_single_category(&self, category: &str) -> CategoryFilterSet {
        self.view.set_checked_where(&|c| c == category);
        selection::single(category)
    }

    /// Selection described by the checked checkboxes, in display order
    pub fn checked_categories_in_filter(&self) -> CategoryFilterSet {
        selection::canonical_order(self.view.checked_categories())
    }

    /// Redraw the badge area for `selected`.
    ///
    /// Clicking a badge suppresses the event's default action and bubbling,
    /// then calls `on_icon_click` with the event and the badge's category.
    pub fn update_selected_category_icons<F>(&self, selected: &[String], on_icon_click: F)
    where
        V: 'static,
        F: Fn(&V::Event, &str) + 'static,
    {
        if selected.is_empty() {
            self.view.render_icon_placeholder(NO_FILTER_PLACEHOLDER);
            return;
        }

        let badges = icon_badges(selected);
        let on_click = Rc::new(move |event: &V::Event, category: &str| {
            event.suppress();
            on_icon_click(event, category);
        });
        self.view.render_icons(&badges, on_click);
    }

    /// Drop `category` from `current` after its badge was clicked.
    ///
    /// Returns `None` and leaves the checklist untouched when the removal
    /// would leave nothing selected.
    pub fn handle_category_icon_click(&self, category: &str, current: &[String]) -> Option<CategoryFilterSet> {
        let Some(next) = selection::remove_category(category, current) else {
            log::warn!("Refusing to hide {}: at least one category must stay selected", category);
            return None;
        };
        self.view.set_checked_where(&|c| selection::contains(&next, c));
        Some(next)
    }
}
