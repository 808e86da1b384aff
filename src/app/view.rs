// SPDX-License-Identifier: MPL-2.0
//! View rendering: picks the screen and layers the lightbox overlay on top
//! of the gallery when one is open.

use super::{App, Message, Screen};
use crate::ui::gallery_grid;
use crate::ui::lightbox;
use crate::ui::receipt;
use crate::ui::registration;
use iced::widget::Stack;
use iced::Element;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Gallery => self.view_gallery(),
            Screen::Registration => registration::view(registration::ViewContext {
                state: &self.form,
                amount: self.amount_label(),
            })
            .map(Message::Registration),
            Screen::Receipt => self.view_receipt(),
        }
    }

    fn view_gallery(&self) -> Element<'_, Message> {
        let grid = gallery_grid::view(gallery_grid::ViewContext {
            collection: &self.collection,
            visible: &self.visible,
            images: &self.images,
            event_title: &self.event_title,
        })
        .map(Message::Gallery);

        let Some(id) = self.lightbox.current_item(&self.visible) else {
            return grid;
        };
        let Some(item) = self.collection.get(id) else {
            return grid;
        };

        let counter = self
            .lightbox
            .counter(self.visible.len())
            .unwrap_or_default();

        let overlay = lightbox::view(lightbox::ViewContext {
            item,
            slot: self.images.get(&id),
            counter,
            show_navigation: self.visible.len() > 1,
        })
        .map(Message::Lightbox);

        Stack::new().push(grid).push(overlay).into()
    }

    fn view_receipt(&self) -> Element<'_, Message> {
        match self.session.last_registration() {
            Some(registration) => receipt::view(receipt::ViewContext {
                registration,
                status: &self.relay_status,
            })
            .map(Message::Receipt),
            // No registration in the session; nothing to show here.
            None => gallery_grid::view(gallery_grid::ViewContext {
                collection: &self.collection,
                visible: &self.visible,
                images: &self.images,
                event_title: &self.event_title,
            })
            .map(Message::Gallery),
        }
    }

    fn amount_label(&self) -> &str {
        self.config
            .relay
            .amount
            .as_deref()
            .unwrap_or(crate::config::DEFAULT_TICKET_AMOUNT)
    }
}
