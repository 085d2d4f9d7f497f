//! Filter View
//!
//! Rendering surface the category controls draw on. The browser
//! implementation lives in [`crate::dom`].

use std::rc::Rc;

/// One checklist row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRow {
    pub category: &'static str,
    /// Element id of the row's checkbox
    pub checkbox_id: String,
    pub checked: bool,
    pub icon: &'static str,
    pub abbreviation: &'static str,
}

/// One clickable badge for a selected category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBadge {
    pub category: &'static str,
    pub icon: &'static str,
    /// Tooltip
    pub title: String,
}

/// Click event delivered to an icon badge
pub trait IconClickEvent {
    /// Stop the browser default action and keep the event from bubbling
    fn suppress(&self);
}

/// Callback for a clicked badge: (event, category)
pub type IconClickHandler<E> = Rc<dyn Fn(&E, &str)>;

/// Surface for the filter checklist and the selected-category badges.
///
/// Every method is a no-op when the surface has nowhere to draw.
pub trait FilterView {
    type Event: IconClickEvent;

    /// Replace the checklist with `rows`
    fn render_filter_list(&self, rows: &[FilterRow]);

    /// Set each rendered checkbox to `checked(category)`
    fn set_checked_where(&self, checked: &dyn Fn(&str) -> bool);

    /// Categories of the rendered checkboxes that are checked, in document order
    fn checked_categories(&self) -> Vec<String>;

    /// Replace the badge area with a plain text placeholder
    fn render_icon_placeholder(&self, text: &str);

    /// Replace the badge area with `badges`, each wired to `on_click`
    fn render_icons(&self, badges: &[IconBadge], on_click: IconClickHandler<Self::Event>);
}
