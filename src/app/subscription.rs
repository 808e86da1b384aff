// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw keyboard and mouse events only matter on the gallery screen, and
//! most of them only while the lightbox is open. Keyboard events are gated
//! on `event::Status::Ignored` so widgets keep priority; cursor moves and
//! releases feed the swipe tracker, which discards them when no gesture is
//! in flight.

use super::{Message, Screen};
use iced::{event, Subscription};

/// Creates the event subscription appropriate for the current screen.
pub fn create_event_subscription(screen: Screen, lightbox_open: bool) -> Subscription<Message> {
    if screen != Screen::Gallery {
        return Subscription::none();
    }

    if lightbox_open {
        event::listen_with(|event, status, _window_id| {
            if let event::Event::Mouse(iced::mouse::Event::CursorMoved { position }) = &event {
                return Some(Message::CursorMoved(*position));
            }

            // Releases outside the image area still end a swipe in flight.
            if matches!(
                event,
                event::Event::Mouse(iced::mouse::Event::ButtonReleased(
                    iced::mouse::Button::Left
                ))
            ) && matches!(status, event::Status::Ignored)
            {
                return Some(Message::PointerReleased);
            }

            if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = &event {
                return match status {
                    event::Status::Ignored => Some(Message::KeyPressed(key.clone())),
                    event::Status::Captured => None,
                };
            }

            None
        })
    } else {
        // Track the cursor so a later press inside the lightbox knows where
        // the gesture started.
        event::listen_with(|event, _status, _window_id| {
            if let event::Event::Mouse(iced::mouse::Event::CursorMoved { position }) = &event {
                return Some(Message::CursorMoved(*position));
            }
            None
        })
    }
}
