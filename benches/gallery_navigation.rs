// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery filtering and lightbox navigation.
//!
//! Measures the performance of:
//! - Recomputing the visible set after a filter change
//! - Wrap-around navigation steps
//! - The reveal (load more) path

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::path::PathBuf;
use vernissage::gallery::{CategoryFilter, Collection, GalleryItem, Lightbox};

const ITEM_COUNT: usize = 500;
const INITIAL_PAGE: usize = 12;

/// Synthetic collection with a handful of rotating categories.
fn sample_collection() -> Collection {
    let categories = ["nature", "portrait", "street", "macro"];
    let items = (0..ITEM_COUNT)
        .map(|i| {
            GalleryItem::new(
                0,
                categories[i % categories.len()],
                PathBuf::from(format!("photos/img_{i:04}.jpg")),
                format!("Photo {i}"),
                "",
            )
        })
        .collect();
    let mut collection = Collection::new(items, INITIAL_PAGE);
    // Reveal everything so the visible set is as large as it gets.
    collection.load_more(ITEM_COUNT);
    collection
}

fn bench_apply_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("apply_filter", |b| {
        let collection = sample_collection();
        b.iter(|| {
            let mut collection = collection.clone();
            collection.apply_filter(CategoryFilter::Category("street".to_string()));
            black_box(collection.visible());
        });
    });

    group.finish();
}

fn bench_visible_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let collection = sample_collection();
    group.bench_function("visible", |b| {
        b.iter(|| black_box(collection.visible()));
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let collection = sample_collection();
    let visible = collection.visible();

    group.bench_function("show_relative_wrapping", |b| {
        let mut lightbox = Lightbox::default();
        lightbox.open(&visible, visible[0]);
        b.iter(|| {
            lightbox.show_relative(-1, visible.len());
            black_box(lightbox.index());
        });
    });

    group.finish();
}

fn bench_load_more(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let categories = ["nature", "portrait"];
    let items: Vec<GalleryItem> = (0..ITEM_COUNT)
        .map(|i| {
            GalleryItem::new(
                0,
                categories[i % categories.len()],
                PathBuf::from(format!("photos/img_{i:04}.jpg")),
                format!("Photo {i}"),
                "",
            )
        })
        .collect();

    group.bench_function("load_more_batch", |b| {
        b.iter(|| {
            let mut collection = Collection::new(items.clone(), INITIAL_PAGE);
            while collection.load_more(6) > 0 {}
            black_box(collection.visible().len());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_apply_filter,
    bench_visible_recompute,
    bench_navigate,
    bench_load_more
);
criterion_main!(benches);
