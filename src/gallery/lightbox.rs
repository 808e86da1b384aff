// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine: a modal view of one focused item from the
//! visible set, with wrap-around navigation.
//!
//! The index is only meaningful while open and always satisfies
//! `0 <= index < count`. Navigation wraps with a true modulo so previous
//! from the first item lands on the last one. Whenever the visible set
//! changes underneath an open lightbox, the controller closes; a stale
//! index is never kept alive across filter or load-more mutations.

use crate::gallery::item::ItemId;

/// Lightbox controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

impl Lightbox {
    /// Opens on the requested item. Silently a no-op when the item is not
    /// in the visible set (e.g. it was filtered out concurrently).
    pub fn open(&mut self, visible: &[ItemId], item: ItemId) {
        if let Some(index) = visible.iter().position(|id| *id == item) {
            *self = Self::Open { index };
        }
    }

    /// Transitions to `Closed`.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Moves the focus by `delta` positions, wrapping modulo `count`.
    /// No-op while closed; closes when the set is empty.
    pub fn show_relative(&mut self, delta: i64, count: usize) {
        let Self::Open { index } = *self else {
            return;
        };
        if count == 0 {
            *self = Self::Closed;
            return;
        }
        let count = count as i64;
        let index = (index as i64 % count + delta).rem_euclid(count) as usize;
        *self = Self::Open { index };
    }

    /// Reacts to a recomputed visible set: any change of membership while
    /// open closes the lightbox (the safe policy when the filtered set
    /// shifts underneath an open view).
    pub fn on_visible_changed(&mut self, before: &[ItemId], after: &[ItemId]) {
        if matches!(self, Self::Open { .. }) && before != after {
            *self = Self::Closed;
        }
    }

    /// Whether the lightbox is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Current index into the visible set, if open.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open { index } => Some(*index),
            Self::Closed => None,
        }
    }

    /// Focused item id, if open and the index is in range.
    #[must_use]
    pub fn current_item(&self, visible: &[ItemId]) -> Option<ItemId> {
        self.index().and_then(|index| visible.get(index).copied())
    }

    /// `"{index+1} / {count}"` counter text, if open.
    #[must_use]
    pub fn counter(&self, count: usize) -> Option<String> {
        self.index().map(|index| format!("{} / {}", index + 1, count))
    }
}
