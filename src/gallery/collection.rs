// SPDX-License-Identifier: MPL-2.0
//! The gallery collection: item registry snapshot, filter engine and
//! incremental loader, plus the derived visible set.
//!
//! The visible set is always recomputed in full from item visibility, never
//! patched incrementally. Callers must recompute after every `apply_filter`
//! or `load_more` before reading indices out of it.

use crate::gallery::filter::CategoryFilter;
use crate::gallery::item::{GalleryItem, ItemId, Visibility};

/// Ordered gallery items with a single active filter and a monotonically
/// increasing reveal horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    items: Vec<GalleryItem>,
    filter: CategoryFilter,
    revealed_count: usize,
}

impl Collection {
    /// Creates a collection from a registry snapshot, revealing the first
    /// `initial_page_size` items under the default (`All`) filter.
    ///
    /// Ids are assigned from document order; any ids already present on the
    /// items are overwritten to keep identity and position consistent.
    #[must_use]
    pub fn new(mut items: Vec<GalleryItem>, initial_page_size: usize) -> Self {
        for (index, item) in items.iter_mut().enumerate() {
            item.id = index;
            item.visibility = Visibility::NotYetLoaded;
        }
        let mut collection = Self {
            items,
            filter: CategoryFilter::All,
            revealed_count: 0,
        };
        collection.reveal(initial_page_size);
        collection
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Total number of items in the registry snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items revealed so far.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// Whether `load_more` would reveal anything.
    #[must_use]
    pub fn has_unrevealed(&self) -> bool {
        self.revealed_count < self.items.len()
    }

    /// Returns the item with the given id, if it exists.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.get(id)
    }

    /// Sorted unique categories present in the registry, wildcard tags
    /// excluded. Used to build the filter button row.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .items
            .iter()
            .filter(|item| !item.is_wildcard())
            .map(|item| item.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Applies a category filter, reclassifying every revealed item as
    /// `Shown` or `FilteredOut`. `NotYetLoaded` items are never touched.
    /// Idempotent: applying the same filter twice yields the same state.
    pub fn apply_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        for item in self.items.iter_mut().take(self.revealed_count) {
            item.visibility = if self.filter.matches(item) {
                Visibility::Shown
            } else {
                Visibility::FilteredOut
            };
        }
    }

    /// Reveals up to `batch_size` more items in document order, classifying
    /// each under the active filter. Returns the number of items actually
    /// revealed; zero once all items are revealed.
    pub fn load_more(&mut self, batch_size: usize) -> usize {
        self.reveal(batch_size)
    }

    fn reveal(&mut self, count: usize) -> usize {
        let start = self.revealed_count;
        let end = (start + count).min(self.items.len());
        for item in &mut self.items[start..end] {
            item.visibility = if self.filter.matches(item) {
                Visibility::Shown
            } else {
                Visibility::FilteredOut
            };
        }
        self.revealed_count = end;
        end - start
    }

    /// Recomputes the visible set: ids of `Shown` items in document order.
    #[must_use]
    pub fn visible(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.visibility == Visibility::Shown)
            .map(|item| item.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn items(categories: &[&str]) -> Vec<GalleryItem> {
        categories
            .iter()
            .enumerate()
            .map(|(index, category)| {
                GalleryItem::new(
                    index,
                    *category,
                    PathBuf::from(format!("{index}.jpg")),
                    format!("Item {index}"),
                    "Caption",
                )
            })
            .collect()
    }

    #[test]
    fn new_collection_reveals_initial_page_as_shown() {
        let collection = Collection::new(items(&["a", "b", "a", "b"]), 2);
        assert_eq!(collection.revealed_count(), 2);
        assert_eq!(collection.visible(), vec![0, 1]);
        assert!(collection.has_unrevealed());
    }

    #[test]
    fn empty_registry_degrades_to_no_ops() {
        let mut collection = Collection::new(Vec::new(), 12);
        assert!(collection.is_empty());
        assert_eq!(collection.visible(), Vec::<ItemId>::new());
        assert_eq!(collection.load_more(6), 0);
        collection.apply_filter(CategoryFilter::Category("a".to_string()));
        assert_eq!(collection.visible(), Vec::<ItemId>::new());
    }

    #[test]
    fn apply_filter_reclassifies_only_revealed_items() {
        let mut collection = Collection::new(items(&["a", "b", "a", "b"]), 2);
        collection.apply_filter(CategoryFilter::Category("a".to_string()));

        assert_eq!(collection.visible(), vec![0]);
        // Items beyond the horizon stay untouched.
        assert_eq!(
            collection.get(2).map(|item| item.visibility),
            Some(Visibility::NotYetLoaded)
        );
    }

    #[test]
    fn apply_filter_is_idempotent() {
        let mut collection = Collection::new(items(&["a", "b", "a"]), 3);
        let filter = CategoryFilter::Category("a".to_string());
        collection.apply_filter(filter.clone());
        let first = collection.visible();
        collection.apply_filter(filter);
        assert_eq!(collection.visible(), first);
    }

    #[test]
    fn load_more_classifies_new_items_under_active_filter() {
        let mut collection = Collection::new(items(&["a", "b", "a", "b"]), 2);
        collection.apply_filter(CategoryFilter::Category("b".to_string()));
        assert_eq!(collection.visible(), vec![1]);

        let revealed = collection.load_more(2);
        assert_eq!(revealed, 2);
        assert_eq!(collection.visible(), vec![1, 3]);
    }

    #[test]
    fn load_more_never_reveals_past_the_end_and_becomes_no_op() {
        let mut collection = Collection::new(items(&["a", "b", "a"]), 2);
        assert_eq!(collection.load_more(10), 1);
        assert_eq!(collection.revealed_count(), 3);
        assert!(!collection.has_unrevealed());
        assert_eq!(collection.load_more(10), 0);
        assert_eq!(collection.revealed_count(), 3);
    }

    #[test]
    fn visible_set_preserves_document_order() {
        let mut collection = Collection::new(items(&["b", "a", "b", "a", "b"]), 5);
        collection.apply_filter(CategoryFilter::Category("b".to_string()));
        assert_eq!(collection.visible(), vec![0, 2, 4]);
    }

    #[test]
    fn unknown_category_yields_empty_visible_set() {
        let mut collection = Collection::new(items(&["a", "b"]), 2);
        collection.apply_filter(CategoryFilter::Category("zzz".to_string()));
        assert!(collection.visible().is_empty());
    }

    #[test]
    fn wildcard_items_survive_every_filter() {
        let mut collection = Collection::new(items(&["a", "all", "b"]), 3);
        collection.apply_filter(CategoryFilter::Category("b".to_string()));
        assert_eq!(collection.visible(), vec![1, 2]);
    }

    #[test]
    fn categories_are_sorted_unique_and_exclude_wildcards() {
        let collection = Collection::new(items(&["press", "stage", "all", "press", ""]), 5);
        assert_eq!(
            collection.categories(),
            vec!["press".to_string(), "stage".to_string()]
        );
    }

    #[test]
    fn mixed_categories_filter_to_the_expected_count() {
        // 20 items, categories {A:8, B:12}.
        let mut categories = Vec::new();
        for index in 0..20 {
            categories.push(if index % 5 < 2 { "A" } else { "B" });
        }
        assert_eq!(categories.iter().filter(|c| **c == "A").count(), 8);
        let mut collection = Collection::new(items(&categories), 20);

        collection.apply_filter(CategoryFilter::Category("B".to_string()));
        assert_eq!(collection.visible().len(), 12);
    }
}
