// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the gallery grid.
//!
//! A single filter is active per collection. `All` is the wildcard that
//! matches every item; a named category matches items carrying that tag and
//! items tagged with the `all` wildcard.

use crate::gallery::item::GalleryItem;
use serde::{Deserialize, Serialize};

/// The active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    /// Show every revealed item.
    #[default]
    All,
    /// Show only items of one category.
    Category(String),
}

impl CategoryFilter {
    /// Builds a filter from a user-facing selection where `"all"` (any case)
    /// means the wildcard.
    #[must_use]
    pub fn from_selection(selection: &str) -> Self {
        if selection.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Category(selection.to_string())
        }
    }

    /// Returns `true` if the item is visible under this filter.
    #[must_use]
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.is_wildcard() || item.category == *category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// User-facing label for filter buttons.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(category) => category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn item(category: &str) -> GalleryItem {
        GalleryItem::new(0, category, PathBuf::from("a.jpg"), "Title", "Caption")
    }

    #[test]
    fn all_filter_matches_everything() {
        let filter = CategoryFilter::All;
        assert!(filter.matches(&item("stage")));
        assert!(filter.matches(&item("press")));
        assert!(!filter.is_active());
    }

    #[test]
    fn category_filter_matches_only_its_tag() {
        let filter = CategoryFilter::Category("stage".to_string());
        assert!(filter.matches(&item("stage")));
        assert!(!filter.matches(&item("press")));
        assert!(filter.is_active());
    }

    #[test]
    fn wildcard_items_match_any_category_filter() {
        let filter = CategoryFilter::Category("press".to_string());
        assert!(filter.matches(&item("all")));
        assert!(filter.matches(&item("")));
    }

    #[test]
    fn from_selection_recognizes_all_case_insensitively() {
        assert_eq!(CategoryFilter::from_selection("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_selection("ALL"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_selection("stage"),
            CategoryFilter::Category("stage".to_string())
        );
    }

    #[test]
    fn label_returns_category_name() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(
            CategoryFilter::Category("press".to_string()).label(),
            "press"
        );
    }
}
