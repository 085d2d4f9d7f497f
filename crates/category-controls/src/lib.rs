//! Category Filter Controls
//!
//! Checklist, bulk selection and selected-category badges for the history
//! page's category filter. Selection rules live in [`selection`]; drawing
//! goes through the [`FilterView`] trait so the rules run without a browser.

pub mod catalog;
pub mod controls;
pub mod dom;
pub mod selection;
pub mod view;

pub use catalog::{japanese_era_label, CATEGORIES, CSV_URLS};
pub use controls::CategoryControls;
pub use dom::DomFilterView;
pub use selection::CategoryFilterSet;
pub use view::{FilterRow, FilterView, IconBadge, IconClickEvent};
