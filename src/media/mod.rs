// SPDX-License-Identifier: MPL-2.0
//! Image loading for gallery cards and the lightbox.
//!
//! Loading is the one asynchronous boundary of the application: decodes run
//! in background tasks and completion is signaled back as a message, never
//! blocking the update loop.

pub mod image;
pub mod prefetch;

pub use image::{load_image, ImageData, ImageSlot};
pub use prefetch::{ImagePrefetchCache, PrefetchConfig};
