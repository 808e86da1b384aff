// SPDX-License-Identifier: MPL-2.0
//! Prefetch cache for lightbox navigation.
//!
//! When the lightbox opens or moves, the neighbouring visible images are
//! decoded in the background so the next navigation renders instantly.
//! The cache is path-keyed, LRU-evicted and byte-bounded.

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default cache budget in bytes (32 MB, roughly four full HD decodes).
pub const DEFAULT_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Default maximum number of cached images.
pub const DEFAULT_MAX_IMAGES: usize = 16;

/// Configuration for the prefetch cache.
#[derive(Debug, Clone, Copy)]
pub struct PrefetchConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,
    /// Maximum number of images to cache.
    pub max_images: usize,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

struct CacheEntry {
    image: Arc<ImageData>,
    size_bytes: usize,
}

/// LRU cache of decoded images keyed by file path.
pub struct ImagePrefetchCache {
    cache: LruCache<PathBuf, CacheEntry>,
    config: PrefetchConfig,
    current_bytes: usize,
}

impl ImagePrefetchCache {
    /// Creates a cache with the given configuration.
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images)
            .unwrap_or(NonZeroUsize::new(DEFAULT_MAX_IMAGES).expect("default capacity is non-zero"));
        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
        }
    }

    /// Creates a cache with the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PrefetchConfig::default())
    }

    /// Looks up a decoded image, marking it most recently used.
    pub fn get(&mut self, path: &Path) -> Option<Arc<ImageData>> {
        self.cache.get(path).map(|entry| Arc::clone(&entry.image))
    }

    /// Returns `true` if the image is cached, without touching LRU order.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    /// Inserts a decoded image, evicting least recently used entries until
    /// the byte budget holds. Oversized images (more than half the budget)
    /// are not cached.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) -> bool {
        let size_bytes = image.size_bytes();
        if size_bytes > self.config.max_bytes / 2 {
            return false;
        }

        while self.current_bytes + size_bytes > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            }
        }

        // `push` reports both a same-key replacement and a capacity
        // eviction; either way those bytes are no longer cached.
        if let Some((_, displaced)) = self.cache.push(
            path,
            CacheEntry {
                image: Arc::new(image),
                size_bytes,
            },
        ) {
            self.current_bytes = self.current_bytes.saturating_sub(displaced.size_bytes);
        }
        self.current_bytes += size_bytes;
        true
    }

    /// Number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Current total of cached bytes.
    #[must_use]
    pub fn current_bytes(&self) -> usize {
        self.current_bytes
    }

    /// Drops all cached images.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }
}

/// Indices of the previous and next neighbours of `index` in a visible set
/// of `count` elements, wrapping around. Returns nothing for sets of one or
/// zero elements (there is no distinct neighbour to prefetch).
#[must_use]
pub fn adjacent_indices(index: usize, count: usize) -> Vec<usize> {
    if count < 2 {
        return Vec::new();
    }
    let previous = (index + count - 1) % count;
    let next = (index + 1) % count;
    if previous == next {
        vec![next]
    } else {
        vec![previous, next]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_of(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    #[test]
    fn insert_and_get_round_trip() {
        let mut cache = ImagePrefetchCache::with_defaults();
        let path = PathBuf::from("a.jpg");
        assert!(cache.insert(path.clone(), image_of(4, 4)));
        assert!(cache.contains(&path));
        assert_eq!(cache.get(&path).map(|img| img.width), Some(4));
        assert_eq!(cache.current_bytes(), 4 * 4 * 4);
    }

    #[test]
    fn byte_budget_evicts_least_recently_used() {
        let mut cache = ImagePrefetchCache::new(PrefetchConfig {
            max_bytes: 3 * 16 * 16 * 4,
            max_images: 16,
        });
        cache.insert(PathBuf::from("a.jpg"), image_of(16, 16));
        cache.insert(PathBuf::from("b.jpg"), image_of(16, 16));
        cache.insert(PathBuf::from("c.jpg"), image_of(16, 16));
        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get(Path::new("a.jpg")).is_some());
        cache.insert(PathBuf::from("d.jpg"), image_of(16, 16));

        assert!(cache.contains(Path::new("a.jpg")));
        assert!(!cache.contains(Path::new("b.jpg")));
        assert!(cache.contains(Path::new("d.jpg")));
    }

    #[test]
    fn capacity_eviction_keeps_byte_count_consistent() {
        let mut cache = ImagePrefetchCache::new(PrefetchConfig {
            max_bytes: 1024 * 1024,
            max_images: 2,
        });
        cache.insert(PathBuf::from("a.jpg"), image_of(8, 8));
        cache.insert(PathBuf::from("b.jpg"), image_of(8, 8));
        // Byte budget has room, so this eviction happens purely on the
        // entry-count cap.
        cache.insert(PathBuf::from("c.jpg"), image_of(8, 8));

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(Path::new("a.jpg")));
        assert_eq!(cache.current_bytes(), 2 * 8 * 8 * 4);

        // Repeated churn at the cap must not accumulate phantom bytes.
        for round in 0..32 {
            cache.insert(PathBuf::from(format!("{round}.jpg")), image_of(8, 8));
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.current_bytes(), 2 * 8 * 8 * 4);
    }

    #[test]
    fn oversized_images_are_not_cached() {
        let mut cache = ImagePrefetchCache::new(PrefetchConfig {
            max_bytes: 1024,
            max_images: 16,
        });
        assert!(!cache.insert(PathBuf::from("huge.jpg"), image_of(64, 64)));
        assert!(cache.is_empty());
    }

    #[test]
    fn replacing_an_entry_keeps_byte_count_consistent() {
        let mut cache = ImagePrefetchCache::with_defaults();
        cache.insert(PathBuf::from("a.jpg"), image_of(8, 8));
        cache.insert(PathBuf::from("a.jpg"), image_of(4, 4));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.current_bytes(), 4 * 4 * 4);
    }

    #[test]
    fn clear_resets_everything() {
        let mut cache = ImagePrefetchCache::with_defaults();
        cache.insert(PathBuf::from("a.jpg"), image_of(8, 8));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.current_bytes(), 0);
    }

    #[test]
    fn adjacent_indices_wrap_around() {
        assert_eq!(adjacent_indices(0, 12), vec![11, 1]);
        assert_eq!(adjacent_indices(11, 12), vec![10, 0]);
        assert_eq!(adjacent_indices(1, 3), vec![0, 2]);
    }

    #[test]
    fn adjacent_indices_degenerate_sets() {
        assert!(adjacent_indices(0, 0).is_empty());
        assert!(adjacent_indices(0, 1).is_empty());
        // Two elements: previous and next coincide.
        assert_eq!(adjacent_indices(0, 2), vec![1]);
    }
}
