//! UI Components
//!
//! Leptos components for the history page.

mod category_filter_panel;
mod selected_category_icons;
mod year_range_header;

pub use category_filter_panel::CategoryFilterPanel;
pub use selected_category_icons::SelectedCategoryIcons;
pub use year_range_header::YearRangeHeader;

use category_controls::{CategoryControls, DomFilterView};

/// Controls bound to the page document
pub(crate) fn page_controls() -> CategoryControls<DomFilterView> {
    CategoryControls::new(DomFilterView)
}
