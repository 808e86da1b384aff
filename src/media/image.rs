// SPDX-License-Identifier: MPL-2.0
//! Image decoding into an Iced-renderable handle.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// A decoded image ready for rendering.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Size of the decoded pixels in bytes (RGBA).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Load state of one gallery image. Items start out absent from the slot
/// map and only enter it once their tile has been revealed.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// A decode task is in flight.
    Loading,
    /// Decoded and renderable.
    Ready(std::sync::Arc<ImageData>),
    /// The file could not be read or decoded; the tile shows a placeholder.
    Failed,
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Image`]
/// when the bytes do not decode as a supported raster format.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let decoded = image_rs::load_from_memory(&bytes).map_err(|e| Error::Image(e.to_string()))?;
    let (width, height) = decoded.dimensions();
    let rgba = decoded.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, rgba))
}
