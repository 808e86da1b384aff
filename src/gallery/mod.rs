// SPDX-License-Identifier: MPL-2.0
//! Gallery core: items, category filtering, incremental reveal, the derived
//! visible set and the lightbox state machine.
//!
//! Everything in this module is pure state manipulation so the behavior can
//! be verified without a rendering environment. The app update loop owns the
//! only discipline that matters across modules: after every mutation of the
//! filter or the revealed count, the visible set is recomputed before the
//! lightbox reads it.

pub mod collection;
pub mod filter;
pub mod input;
pub mod item;
pub mod lightbox;
pub mod swipe;

pub use collection::Collection;
pub use filter::CategoryFilter;
pub use item::{GalleryItem, ItemId, Visibility};
pub use lightbox::Lightbox;
