// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe sub-component for lightbox navigation.
//!
//! Tracks a press/release pair and reports a navigation effect when the net
//! horizontal displacement exceeds the configured threshold. Sub-threshold
//! gestures are ignored.

use iced::Point;

/// Swipe sub-component state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    /// Horizontal position where the gesture started, if one is in flight.
    start_x: Option<f32>,
    /// Last observed cursor position while the gesture is in flight.
    current_x: Option<f32>,
}

/// Messages for the swipe sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer pressed inside the lightbox.
    Pressed(Point),
    /// Pointer moved while pressed.
    Moved(Point),
    /// Pointer released, ending the gesture.
    Released,
    /// Gesture aborted (lightbox closed mid-drag, cursor left the window).
    Cancelled,
}

/// Effects produced by a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No navigation: gesture in progress, cancelled, or below threshold.
    None,
    /// Swipe to the left: advance to the next item.
    Next,
    /// Swipe to the right: go back to the previous item.
    Previous,
}

impl State {
    /// Handle a swipe message, producing a navigation effect on release.
    pub fn handle(&mut self, message: Message, threshold_px: f32) -> Effect {
        match message {
            Message::Pressed(position) => {
                self.start_x = Some(position.x);
                self.current_x = Some(position.x);
                Effect::None
            }
            Message::Moved(position) => {
                if self.start_x.is_some() {
                    self.current_x = Some(position.x);
                }
                Effect::None
            }
            Message::Released => {
                let effect = match (self.start_x, self.current_x) {
                    (Some(start), Some(end)) => {
                        let displacement = end - start;
                        if displacement <= -threshold_px {
                            Effect::Next
                        } else if displacement >= threshold_px {
                            Effect::Previous
                        } else {
                            Effect::None
                        }
                    }
                    _ => Effect::None,
                };
                self.reset();
                effect
            }
            Message::Cancelled => {
                self.reset();
                Effect::None
            }
        }
    }

    /// Whether a gesture is currently in flight.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    fn reset(&mut self) {
        self.start_x = None;
        self.current_x = None;
    }
}
