// SPDX-License-Identifier: MPL-2.0
//! Gallery item types.

use std::path::PathBuf;

/// Stable identity of a gallery item: its position in document order.
pub type ItemId = usize;

/// Visibility of a single item. Exactly one state holds at any time;
/// transitions are driven only by the filter engine or the incremental
/// loader, never by the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Visible under the active filter.
    Shown,
    /// Revealed but excluded by the active filter.
    FilteredOut,
    /// Beyond the current "load more" horizon.
    #[default]
    NotYetLoaded,
}

/// One media entry of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: ItemId,
    /// Category tag used for filtering. An empty tag is the `all` wildcard:
    /// the item is visible under every filter.
    pub category: String,
    pub image_path: PathBuf,
    pub title: String,
    pub caption: String,
    pub visibility: Visibility,
}

impl GalleryItem {
    /// Creates an item in the initial `NotYetLoaded` state.
    #[must_use]
    pub fn new(
        id: ItemId,
        category: impl Into<String>,
        image_path: PathBuf,
        title: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            image_path,
            title: title.into(),
            caption: caption.into(),
            visibility: Visibility::NotYetLoaded,
        }
    }

    /// Whether the item carries the always-visible wildcard tag.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.category.is_empty() || self.category.eq_ignore_ascii_case("all")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str) -> GalleryItem {
        GalleryItem::new(0, category, PathBuf::from("a.jpg"), "Title", "Caption")
    }

    #[test]
    fn new_item_starts_not_yet_loaded() {
        assert_eq!(item("stage").visibility, Visibility::NotYetLoaded);
    }

    #[test]
    fn wildcard_detection_covers_empty_and_all() {
        assert!(item("").is_wildcard());
        assert!(item("all").is_wildcard());
        assert!(item("All").is_wildcard());
        assert!(!item("stage").is_wildcard());
    }
}
