// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest loading: the item registry.
//!
//! A gallery directory is described by a `gallery.toml` manifest listing
//! entries in display order (image path, title, caption, category). When no
//! manifest is present the directory is scanned instead: images in each
//! immediate subdirectory take the subdirectory name as their category, and
//! images at the top level get the always-visible wildcard.
//!
//! Loading takes a static snapshot; the registry is never re-scanned during
//! a session. An empty or missing gallery yields an empty list and every
//! dependent degrades to a no-op.

use crate::error::{Error, Result};
use crate::gallery::item::GalleryItem;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest file name inside the gallery directory.
pub const MANIFEST_FILE: &str = "gallery.toml";

/// Raster extensions accepted by the fallback scan.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "entry")]
    entries: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    image: PathBuf,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    caption: Option<String>,
    /// Absent or `"all"` means the always-visible wildcard.
    #[serde(default)]
    category: Option<String>,
}

/// Loads the gallery registry from a directory.
///
/// Prefers `gallery.toml`; falls back to a directory scan. A nonexistent
/// directory is an error, an existing but empty one is not.
///
/// # Errors
///
/// Returns [`Error::Manifest`] when the manifest is present but malformed,
/// or [`Error::Io`] when the directory cannot be read.
pub fn load(gallery_dir: &Path) -> Result<Vec<GalleryItem>> {
    let manifest_path = gallery_dir.join(MANIFEST_FILE);
    if manifest_path.exists() {
        load_manifest(gallery_dir, &manifest_path)
    } else {
        scan_directory(gallery_dir)
    }
}

fn load_manifest(gallery_dir: &Path, manifest_path: &Path) -> Result<Vec<GalleryItem>> {
    let content = std::fs::read_to_string(manifest_path)?;
    let manifest: Manifest =
        toml::from_str(&content).map_err(|e| Error::Manifest(e.to_string()))?;

    let items = manifest
        .entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let image_path = gallery_dir.join(&entry.image);
            let title = entry
                .title
                .unwrap_or_else(|| title_from_path(&entry.image));
            GalleryItem::new(
                index,
                entry.category.unwrap_or_default(),
                image_path,
                title,
                entry.caption.unwrap_or_default(),
            )
        })
        .collect();
    Ok(items)
}

/// Fallback scan: subdirectory name is the category, top-level files are
/// wildcards. Entries are sorted by (category, file name) for a stable
/// document order.
fn scan_directory(gallery_dir: &Path) -> Result<Vec<GalleryItem>> {
    let mut found: Vec<(String, PathBuf)> = Vec::new();

    for entry in std::fs::read_dir(gallery_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            found.push((String::new(), path));
        } else if path.is_dir() {
            let category = entry.file_name().to_string_lossy().into_owned();
            for sub_entry in std::fs::read_dir(&path)? {
                let sub_path = sub_entry?.path();
                if sub_path.is_file() && is_supported_image(&sub_path) {
                    found.push((category.clone(), sub_path));
                }
            }
        }
    }

    found.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.file_name().cmp(&b.1.file_name())));

    let items = found
        .into_iter()
        .enumerate()
        .map(|(index, (category, path))| {
            let title = title_from_path(&path);
            GalleryItem::new(index, category, path, title, String::new())
        })
        .collect();
    Ok(items)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Derives a display title from a file name: `opening-night.jpg` becomes
/// `opening night`.
fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn manifest_entries_keep_document_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(MANIFEST_FILE),
            r#"
[[entry]]
image = "stage/opening.jpg"
title = "Opening night"
caption = "The summit opens"
category = "stage"

[[entry]]
image = "press/briefing.jpg"
category = "press"

[[entry]]
image = "banner.jpg"
"#,
        )
        .expect("failed to write manifest");

        let items = load(temp_dir.path()).expect("failed to load manifest");

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Opening night");
        assert_eq!(items[0].caption, "The summit opens");
        assert_eq!(items[0].category, "stage");
        assert_eq!(items[0].image_path, temp_dir.path().join("stage/opening.jpg"));
        // Missing title falls back to the file stem.
        assert_eq!(items[1].title, "briefing");
        // Missing category is the wildcard.
        assert!(items[2].is_wildcard());
    }

    #[test]
    fn malformed_manifest_is_a_manifest_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(MANIFEST_FILE), "entry = 3")
            .expect("failed to write manifest");

        let err = load(temp_dir.path()).expect_err("malformed manifest should fail");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn scan_uses_subdirectory_names_as_categories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let stage = temp_dir.path().join("stage");
        let press = temp_dir.path().join("press");
        fs::create_dir_all(&stage).expect("failed to create subdir");
        fs::create_dir_all(&press).expect("failed to create subdir");
        create_test_image(&stage, "b.jpg");
        create_test_image(&stage, "a.jpg");
        create_test_image(&press, "c.png");
        create_test_image(temp_dir.path(), "hero.webp");
        create_test_image(temp_dir.path(), "notes.txt");

        let items = load(temp_dir.path()).expect("failed to scan directory");

        assert_eq!(items.len(), 4);
        // Wildcard top-level file sorts first (empty category), then
        // categories alphabetically with file names sorted inside.
        assert!(items[0].is_wildcard());
        assert_eq!(items[1].category, "press");
        assert_eq!(items[2].category, "stage");
        assert_eq!(items[2].title, "a");
        assert_eq!(items[3].title, "b");
    }

    #[test]
    fn empty_directory_yields_empty_registry() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let items = load(temp_dir.path()).expect("failed to scan empty directory");
        assert!(items.is_empty());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = load(Path::new("/nonexistent/gallery")).expect_err("should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn title_from_path_replaces_separators() {
        assert_eq!(
            title_from_path(Path::new("opening-night_2026.jpg")),
            "opening night 2026"
        );
    }
}
