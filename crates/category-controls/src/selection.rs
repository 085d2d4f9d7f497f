//! Selection Logic
//!
//! Set-membership rules for the category filter, free of any DOM access.

use crate::catalog::CATEGORIES;

/// Categories currently included in the view (used as a set)
pub type CategoryFilterSet = Vec<String>;

/// Full canonical selection
pub fn all_categories() -> CategoryFilterSet {
    CATEGORIES.iter().map(|c| c.to_string()).collect()
}

pub fn single(category: &str) -> CategoryFilterSet {
    vec![category.to_string()]
}

pub fn contains(selected: &[String], category: &str) -> bool {
    selected.iter().any(|c| c == category)
}

/// Canonical categories that are members of `selected`, in display order
pub fn selected_in_order(selected: &[String]) -> impl Iterator<Item = &'static str> + '_ {
    CATEGORIES.iter().copied().filter(move |c| contains(selected, c))
}

/// Known categories from `categories`, deduplicated and put in display order
pub fn canonical_order<I, S>(categories: I) -> CategoryFilterSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let given: Vec<S> = categories.into_iter().collect();
    CATEGORIES
        .iter()
        .filter(|c| given.iter().any(|g| g.as_ref() == **c))
        .map(|c| c.to_string())
        .collect()
}

/// Remove `category` from `current`.
///
/// Returns `None` when nothing would remain selected; the caller keeps its
/// previous selection in that case.
pub fn remove_category(category: &str, current: &[String]) -> Option<CategoryFilterSet> {
    let next: CategoryFilterSet = current.iter().filter(|c| *c != category).cloned().collect();
    if next.is_empty() {
        None
    } else {
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> CategoryFilterSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_remove_category() {
        assert_eq!(
            remove_category("CMP2000", &set(&["CMP2000", "その他"])),
            Some(set(&["その他"]))
        );
        // Keeps caller order
        assert_eq!(
            remove_category("イイダリョウ", &set(&["その他", "イイダリョウ", "CMP2000"])),
            Some(set(&["その他", "CMP2000"]))
        );
    }

    #[test]
    fn test_remove_last_category_is_rejected() {
        assert_eq!(remove_category("その他", &set(&["その他"])), None);
        assert_eq!(remove_category("その他", &set(&[])), None);
    }

    #[test]
    fn test_remove_absent_category_keeps_set() {
        let current = set(&["CMP2000"]);
        assert_eq!(remove_category("その他", &current), Some(current.clone()));
    }

    #[test]
    fn test_selected_in_order() {
        let selected = set(&["その他", "未知", "CMP2000"]);
        let ordered: Vec<&str> = selected_in_order(&selected).collect();
        assert_eq!(ordered, vec!["CMP2000", "その他"]);
    }

    #[test]
    fn test_canonical_order_drops_unknown_and_duplicates() {
        let ordered = canonical_order(["その他", "ツチヤヒロキ", "未知", "その他"]);
        assert_eq!(ordered, set(&["ツチヤヒロキ", "その他"]));
    }

    #[test]
    fn test_all_and_single() {
        assert_eq!(all_categories(), set(CATEGORIES));
        assert_eq!(single("未知"), set(&["未知"]));
        assert!(contains(&all_categories(), "カザマヒロノリ"));
    }
}
