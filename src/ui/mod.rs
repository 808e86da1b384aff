// SPDX-License-Identifier: MPL-2.0
//! UI components: the gallery grid, the lightbox overlay, and the
//! registration flow screens.

pub mod gallery_grid;
pub mod lightbox;
pub mod receipt;
pub mod registration;
pub mod styles;
