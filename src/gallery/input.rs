// SPDX-License-Identifier: MPL-2.0
//! Input router: translates external events into lightbox commands.
//!
//! Keeping the mapping pure (state + input in, command out) decouples event
//! sources from the controller so every binding is testable without a
//! window. Pointer bindings (item click, close control, backdrop) arrive as
//! widget messages and are mapped in `App::update`; keyboard and swipe
//! bindings live here.

use crate::gallery::item::ItemId;
use crate::gallery::swipe;
use iced::keyboard::key::Named;
use iced::keyboard::Key;

/// Commands understood by the lightbox controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the lightbox on an item.
    Open(ItemId),
    /// Close the lightbox.
    Close,
    /// Navigate one item back (wraps to the last item).
    ShowPrevious,
    /// Navigate one item forward (wraps to the first item).
    ShowNext,
}

/// Maps a key press to a command. Every binding is gated on the lightbox
/// being open; while closed, all keys are ignored.
#[must_use]
pub fn map_key(key: &Key, lightbox_open: bool) -> Option<Command> {
    if !lightbox_open {
        return None;
    }
    match key {
        Key::Named(Named::Escape) => Some(Command::Close),
        Key::Named(Named::ArrowLeft) => Some(Command::ShowPrevious),
        Key::Named(Named::ArrowRight) => Some(Command::ShowNext),
        _ => None,
    }
}

/// Maps a completed swipe gesture to a command.
#[must_use]
pub fn map_swipe(effect: swipe::Effect) -> Option<Command> {
    match effect {
        swipe::Effect::Next => Some(Command::ShowNext),
        swipe::Effect::Previous => Some(Command::ShowPrevious),
        swipe::Effect::None => None,
    }
}
