//! DOM Filter View
//!
//! [`FilterView`] backed by the live document. Containers are looked up by
//! id on every call, so rendering before the page markup exists does nothing.
//!
//! `web-sys` calls only work on wasm32, so the selection behaviour is tested
//! through the in-memory view in `controls`; here only the element text and
//! style helpers are tested natively.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, MouseEvent};

use crate::view::{FilterRow, FilterView, IconBadge, IconClickEvent, IconClickHandler};

/// Container the checklist is rendered into
pub const FILTER_LIST_ID: &str = "categoryFilterList";
/// Container the selected-category badges are rendered into
pub const SELECTED_ICONS_ID: &str = "selectedCategoryIcons";
/// Class carried by every checklist checkbox
pub const CHECKBOX_CLASS: &str = "filter-category-checkbox";
/// Attribute holding the category an element stands for
pub const CATEGORY_ATTR: &str = "data-category";

const ROW_CLASS: &str = "filter-category-item";
const ICON_CLASS: &str = "selected-category-icon";

/// Inline style of a badge
const ICON_STYLE: &[(&str, &str)] = &[
    ("cursor", "pointer"),
    ("user-select", "none"),
    ("padding", "0 2px"),
];

type BadgeListener = Closure<dyn FnMut(MouseEvent)>;

thread_local! {
    /// Click listeners of the badges currently in the document
    static BADGE_LISTENERS: RefCell<Vec<BadgeListener>> = RefCell::new(Vec::new());
}

/// Swap in the listeners of a fresh badge row, dropping the previous ones
fn replace_badge_listeners(listeners: Vec<BadgeListener>) {
    let old = BADGE_LISTENERS.with(|cell| std::mem::replace(&mut *cell.borrow_mut(), listeners));
    drop(old);
}

/// Text before the bold name in a checklist label
fn label_prefix(icon: &str) -> Option<String> {
    (!icon.is_empty()).then(|| format!("{} ", icon))
}

/// Text after the bold name in a checklist label
fn label_suffix(abbreviation: &str) -> String {
    format!(" ({})", abbreviation)
}

impl IconClickEvent for MouseEvent {
    fn suppress(&self) {
        web_sys::Event::prevent_default(self);
        web_sys::Event::stop_propagation(self);
    }
}

/// Browser document view
#[derive(Debug, Clone, Copy, Default)]
pub struct DomFilterView;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn container(id: &str) -> Option<(Document, Element)> {
    let doc = document()?;
    let el = doc.get_element_by_id(id)?;
    Some((doc, el))
}

/// Every checklist checkbox currently in the document
fn checkboxes() -> Vec<HtmlInputElement> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(&format!(".{}", CHECKBOX_CLASS)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

fn category_of(el: &Element) -> String {
    el.get_attribute(CATEGORY_ATTR).unwrap_or_default()
}

fn build_filter_list(doc: &Document, list: &Element, rows: &[FilterRow]) -> Result<(), JsValue> {
    list.set_inner_html("");
    for row in rows {
        let item = doc.create_element("div")?;
        item.set_class_name(ROW_CLASS);

        let checkbox: HtmlInputElement = doc.create_element("input")?.unchecked_into();
        checkbox.set_type("checkbox");
        checkbox.set_class_name(CHECKBOX_CLASS);
        checkbox.set_id(&row.checkbox_id);
        checkbox.set_attribute(CATEGORY_ATTR, row.category)?;
        checkbox.set_checked(row.checked);

        let label = doc.create_element("label")?;
        label.set_attribute("for", &row.checkbox_id)?;
        if let Some(prefix) = label_prefix(row.icon) {
            label.append_with_str_1(&prefix)?;
        }
        let name = doc.create_element("strong")?;
        name.set_text_content(Some(row.category));
        label.append_child(&name)?;
        label.append_with_str_1(&label_suffix(row.abbreviation))?;

        item.append_child(&checkbox)?;
        item.append_child(&label)?;
        list.append_child(&item)?;
    }
    Ok(())
}

fn build_icons(
    doc: &Document,
    area: &Element,
    badges: &[IconBadge],
    on_click: IconClickHandler<MouseEvent>,
) -> Result<Vec<BadgeListener>, JsValue> {
    area.set_inner_html("");
    let mut listeners = Vec::with_capacity(badges.len());
    for badge in badges {
        let icon: HtmlElement = doc.create_element("span")?.unchecked_into();
        icon.set_class_name(ICON_CLASS);
        icon.set_text_content(Some(badge.icon));
        icon.set_title(&badge.title);
        icon.set_attribute(CATEGORY_ATTR, badge.category)?;

        let style = icon.style();
        for (property, value) in ICON_STYLE {
            style.set_property(property, value)?;
        }

        let category = badge.category;
        let handler = on_click.clone();
        let listener = BadgeListener::new(move |ev: MouseEvent| {
            handler(&ev, category);
        });
        icon.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        listeners.push(listener);

        area.append_child(&icon)?;
    }
    Ok(listeners)
}

impl FilterView for DomFilterView {
    type Event = MouseEvent;

    fn render_filter_list(&self, rows: &[FilterRow]) {
        let Some((doc, list)) = container(FILTER_LIST_ID) else {
            return;
        };
        if let Err(e) = build_filter_list(&doc, &list, rows) {
            log::error!("Failed to render category filter list: {:?}", e);
        }
    }

    fn set_checked_where(&self, checked: &dyn Fn(&str) -> bool) {
        for checkbox in checkboxes() {
            let category = category_of(&checkbox);
            checkbox.set_checked(checked(&category));
        }
    }

    fn checked_categories(&self) -> Vec<String> {
        checkboxes()
            .into_iter()
            .filter(|checkbox| checkbox.checked())
            .map(|checkbox| category_of(&checkbox))
            .collect()
    }

    fn render_icon_placeholder(&self, text: &str) {
        let Some((_, area)) = container(SELECTED_ICONS_ID) else {
            return;
        };
        area.set_inner_html("");
        area.set_text_content(Some(text));
        replace_badge_listeners(Vec::new());
    }

    fn render_icons(&self, badges: &[IconBadge], on_click: IconClickHandler<MouseEvent>) {
        let Some((doc, area)) = container(SELECTED_ICONS_ID) else {
            return;
        };
        // Listeners are released only after the old badges are gone
        match build_icons(&doc, &area, badges, on_click) {
            Ok(listeners) => replace_badge_listeners(listeners),
            Err(e) => log::error!("Failed to render selected category icons: {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_text() {
        assert_eq!(label_prefix("🎤"), Some("🎤 ".to_string()));
        assert_eq!(label_prefix(""), None);
        assert_eq!(label_suffix("飯田"), " (飯田)");
    }

    #[test]
    fn test_icon_style() {
        assert_eq!(
            ICON_STYLE,
            &[("cursor", "pointer"), ("user-select", "none"), ("padding", "0 2px")]
        );
    }

    #[test]
    fn test_checkbox_id_matches_label_target() {
        let rows = crate::controls::filter_rows(&["CMP2000".to_string()]);
        assert!(rows.iter().all(|row| row.checkbox_id == crate::controls::checkbox_id(row.category)));
        assert_eq!(rows[0].checkbox_id, "filter-category-CMP2000");
    }

    #[test]
    fn test_empty_listener_swap() {
        replace_badge_listeners(Vec::new());
        assert_eq!(BADGE_LISTENERS.with(|cell| cell.borrow().len()), 0);
    }
}
