// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::RelayError;
use crate::gallery::ItemId;
use crate::media::ImageData;
use crate::relay::RelayOutcome;
use crate::ui::{gallery_grid, lightbox, receipt, registration};
use std::path::PathBuf;

/// Launch parameters parsed in `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Directory holding the gallery images and optional manifest.
    pub gallery_dir: Option<PathBuf>,
    /// Alternative config file, mainly for tests and packaging.
    pub config_path: Option<PathBuf>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery_grid::Message),
    Lightbox(lightbox::Message),
    Registration(registration::Message),
    Receipt(receipt::Message),
    /// Raw keyboard input routed from the event subscription.
    KeyPressed(iced::keyboard::Key),
    /// Cursor tracking for swipe gestures while the lightbox is open.
    CursorMoved(iced::Point),
    /// Left button released outside the lightbox image area.
    PointerReleased,
    /// A decode task finished, successfully or not.
    ImageLoaded {
        id: ItemId,
        result: Result<ImageData, String>,
    },
    /// The registration relay task finished.
    RelayFinished(Result<RelayOutcome, RelayError>),
}
