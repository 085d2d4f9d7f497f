//! Category Catalog
//!
//! Static reference data for the history page: the category enumeration,
//! per-category display tables, year bounds and data-source locations.

use chrono::{Datelike, Local};
use std::sync::OnceLock;

/// Category labels in display order
pub const CATEGORIES: &[&str] = &[
    "CMP2000",
    "イイダリョウ",
    "ツチヤヒロキ",
    "カザマヒロノリ",
    "その他",
];

/// Icon glyph per category
pub const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("CMP2000", "🏆"),
    ("イイダリョウ", "🎤"),
    ("ツチヤヒロキ", "✍️"),
    ("カザマヒロノリ", "🎸"),
    ("その他", "📌"),
];

/// Short label per category
pub const CATEGORY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("CMP2000", "CMP"),
    ("イイダリョウ", "飯田"),
    ("ツチヤヒロキ", "土屋"),
    ("カザマヒロノリ", "風間"),
    ("その他", "他"),
];

/// Earliest year the history covers
pub const MIN_YEAR: i32 = 1998;

/// Number of years shown when nothing else is requested
pub const DEFAULT_YEAR_RANGE: i32 = 10;

/// Published CSV feeds consumed by the ingestion side of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvUrls {
    pub basic_info: &'static str,
    pub history: &'static str,
}

pub const CSV_URLS: CsvUrls = CsvUrls {
    basic_info: "data/basic_info.csv",
    history: "data/history.csv",
};

/// Icon and abbreviation for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDisplayInfo<'a> {
    pub icon: &'a str,
    pub abbreviation: &'a str,
}

fn lookup(table: &'static [(&'static str, &'static str)], category: &str) -> Option<&'static str> {
    table.iter().find(|(name, _)| *name == category).map(|(_, value)| *value)
}

/// Icon for `category`, empty when the category has none
pub fn category_icon(category: &str) -> &'static str {
    lookup(CATEGORY_ICONS, category).unwrap_or("")
}

/// Abbreviation for `category`, falling back to the category itself
pub fn category_abbreviation(category: &str) -> &str {
    lookup(CATEGORY_ABBREVIATIONS, category).unwrap_or(category)
}

pub fn display_info(category: &str) -> CategoryDisplayInfo<'_> {
    CategoryDisplayInfo {
        icon: category_icon(category),
        abbreviation: category_abbreviation(category),
    }
}

/// Latest year the history covers: the current calendar year, read once per page load
pub fn max_year() -> i32 {
    static MAX_YEAR: OnceLock<i32> = OnceLock::new();
    *MAX_YEAR.get_or_init(|| Local::now().year())
}

/// Default (start, end) year window ending at [`max_year`]
pub fn default_year_range() -> (i32, i32) {
    year_range_ending(max_year())
}

fn year_range_ending(end: i32) -> (i32, i32) {
    let start = (end - DEFAULT_YEAR_RANGE + 1).max(MIN_YEAR);
    (start, end)
}

/// Japanese calendar era
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa,
}

impl Era {
    /// First Gregorian year of each era after Meiji, newest first
    const STARTS: [(i32, Era); 4] = [
        (2019, Era::Reiwa),
        (1989, Era::Heisei),
        (1926, Era::Showa),
        (1912, Era::Taisho),
    ];

    pub fn from_year(year: i32) -> Self {
        Self::STARTS
            .iter()
            .find(|(start, _)| year >= *start)
            .map(|(_, era)| *era)
            .unwrap_or(Era::Meiji)
    }

    pub fn name(self) -> &'static str {
        match self {
            Era::Meiji => "明治",
            Era::Taisho => "大正",
            Era::Showa => "昭和",
            Era::Heisei => "平成",
            Era::Reiwa => "令和",
        }
    }

    /// Subtracted from a Gregorian year to get the era year
    pub fn offset(self) -> i32 {
        match self {
            Era::Meiji => 1867,
            Era::Taisho => 1911,
            Era::Showa => 1925,
            Era::Heisei => 1988,
            Era::Reiwa => 2018,
        }
    }
}

/// Era label such as `令和6年` for a Gregorian year.
///
/// Defined for every `i32`; years before Meiji yield zero or negative era years.
pub fn japanese_era_label(year: i32) -> String {
    let era = Era::from_year(year);
    let era_year = i64::from(year) - i64::from(era.offset());
    format!("{}{}年", era.name(), era_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_boundaries() {
        assert_eq!(japanese_era_label(1867), "明治0年");
        assert_eq!(japanese_era_label(1911), "明治44年");
        assert_eq!(japanese_era_label(1912), "大正1年");
        assert_eq!(japanese_era_label(1925), "大正14年");
        assert_eq!(japanese_era_label(1926), "昭和1年");
        assert_eq!(japanese_era_label(1988), "昭和63年");
        assert_eq!(japanese_era_label(1989), "平成1年");
        assert_eq!(japanese_era_label(2018), "平成30年");
        assert_eq!(japanese_era_label(2019), "令和1年");
    }

    #[test]
    fn test_era_label_is_total() {
        assert_eq!(japanese_era_label(1500), "明治-367年");
        assert_eq!(japanese_era_label(i32::MIN), format!("明治{}年", i64::from(i32::MIN) - 1867));
        assert_eq!(japanese_era_label(i32::MAX), format!("令和{}年", i64::from(i32::MAX) - 2018));
    }

    #[test]
    fn test_display_info_fallbacks() {
        assert_eq!(display_info("CMP2000"), CategoryDisplayInfo { icon: "🏆", abbreviation: "CMP" });
        assert_eq!(display_info("未知"), CategoryDisplayInfo { icon: "", abbreviation: "未知" });
    }

    #[test]
    fn test_every_category_has_display_entries() {
        assert_eq!(CATEGORIES.len(), 5);
        for category in CATEGORIES {
            assert!(!category_icon(category).is_empty(), "{} has no icon", category);
            assert_ne!(category_abbreviation(category), "");
        }
    }

    #[test]
    fn test_year_range() {
        assert_eq!(year_range_ending(2026), (2017, 2026));
        assert_eq!(year_range_ending(2003), (MIN_YEAR, 2003));
        let (start, end) = default_year_range();
        assert_eq!(end, max_year());
        assert!(start >= MIN_YEAR && start <= end);
        assert!(max_year() >= 2024);
    }
}
