// SPDX-License-Identifier: MPL-2.0
//! Update loop: routes widget messages and raw events into gallery
//! commands, decode tasks, and the relay task.

use super::{App, Message, Screen};
use crate::gallery::{input, swipe, ItemId};
use crate::media::{self, prefetch, ImageSlot};
use crate::relay::{self, HttpTransport, Registration, RetryPolicy};
use crate::ui::gallery_grid;
use crate::ui::lightbox;
use crate::ui::receipt::{self, RelayStatus};
use crate::ui::registration;
use iced::Task;
use std::sync::Arc;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => self.update_gallery(msg),
            Message::Lightbox(msg) => self.update_lightbox(msg),
            Message::Registration(msg) => self.update_registration(msg),
            Message::Receipt(receipt::Message::BackPressed) => {
                self.screen = Screen::Gallery;
                Task::none()
            }
            Message::KeyPressed(key) => {
                match input::map_key(&key, self.lightbox.is_open()) {
                    Some(command) => self.apply_command(command),
                    None => Task::none(),
                }
            }
            Message::CursorMoved(position) => {
                self.cursor = position;
                if self.swipe.is_tracking() {
                    let threshold = self.config.gallery.swipe_threshold_px();
                    self.swipe.handle(swipe::Message::Moved(position), threshold);
                }
                Task::none()
            }
            Message::PointerReleased => self.finish_swipe(),
            Message::ImageLoaded { id, result } => {
                self.store_loaded_image(id, result);
                Task::none()
            }
            Message::RelayFinished(result) => {
                self.relay_status = match result {
                    Ok(outcome) => RelayStatus::Delivered {
                        retries: outcome.retries,
                    },
                    Err(err) => RelayStatus::Failed(err.to_string()),
                };
                self.form.locked = false;
                Task::none()
            }
        }
    }

    fn update_gallery(&mut self, message: gallery_grid::Message) -> Task<Message> {
        match message {
            gallery_grid::Message::FilterSelected(filter) => {
                self.collection.apply_filter(filter);
                self.refresh_visible();
                self.load_visible()
            }
            gallery_grid::Message::ItemPressed(id) => self.apply_command(input::Command::Open(id)),
            gallery_grid::Message::LoadMorePressed => {
                let batch = self.config.gallery.load_batch_size();
                if self.collection.load_more(batch) == 0 {
                    return Task::none();
                }
                self.refresh_visible();
                self.load_visible()
            }
            gallery_grid::Message::RegisterPressed => {
                self.screen = Screen::Registration;
                Task::none()
            }
        }
    }

    fn update_lightbox(&mut self, message: lightbox::Message) -> Task<Message> {
        let threshold = self.config.gallery.swipe_threshold_px();
        match message {
            lightbox::Message::ClosePressed | lightbox::Message::BackdropPressed => {
                self.apply_command(input::Command::Close)
            }
            lightbox::Message::PreviousPressed => self.apply_command(input::Command::ShowPrevious),
            lightbox::Message::NextPressed => self.apply_command(input::Command::ShowNext),
            lightbox::Message::ImagePressed => {
                self.swipe
                    .handle(swipe::Message::Pressed(self.cursor), threshold);
                Task::none()
            }
            lightbox::Message::ImageReleased => self.finish_swipe(),
        }
    }

    fn update_registration(&mut self, message: registration::Message) -> Task<Message> {
        match self.form.update(message) {
            registration::Effect::None => Task::none(),
            registration::Effect::Back => {
                self.screen = Screen::Gallery;
                Task::none()
            }
            registration::Effect::Submit => self.confirm_payment(),
        }
    }

    /// Simulated payment confirmation. The checkout always succeeds and
    /// yields a synthetic payment id; the registration is stored in the
    /// session before the relay runs so a relay failure never loses it.
    fn confirm_payment(&mut self) -> Task<Message> {
        let payment_id = format!("pay_sim_{}", chrono::Utc::now().timestamp_millis());
        let registration = Registration::new(
            self.form.full_name.clone(),
            self.form.email.clone(),
            self.form.mobile.clone(),
            self.form.city.clone(),
            self.form.profession.clone(),
            payment_id,
            self.config.relay.amount(),
        );

        self.session.store_registration(registration.clone());
        self.screen = Screen::Receipt;

        let Some(url) = self.config.relay.webhook_url.clone() else {
            self.relay_status = RelayStatus::Disabled;
            self.form.locked = false;
            return Task::none();
        };

        match HttpTransport::new(url) {
            Ok(transport) => {
                let policy = RetryPolicy::from(&self.config.relay);
                self.relay_status = RelayStatus::Sending;
                Task::perform(
                    async move { relay::send_with_retry(&transport, policy, &registration).await },
                    Message::RelayFinished,
                )
            }
            Err(err) => {
                self.relay_status = RelayStatus::Failed(err.to_string());
                self.form.locked = false;
                Task::none()
            }
        }
    }

    /// Applies a lightbox command and schedules any decode work it implies.
    fn apply_command(&mut self, command: input::Command) -> Task<Message> {
        match command {
            input::Command::Open(id) => {
                self.lightbox.open(&self.visible, id);
                Task::batch([self.ensure_loaded(id), self.prefetch_adjacent()])
            }
            input::Command::Close => {
                self.lightbox.close();
                self.swipe.handle(
                    swipe::Message::Cancelled,
                    self.config.gallery.swipe_threshold_px(),
                );
                Task::none()
            }
            input::Command::ShowPrevious => {
                self.lightbox.show_relative(-1, self.visible.len());
                self.load_current_and_adjacent()
            }
            input::Command::ShowNext => {
                self.lightbox.show_relative(1, self.visible.len());
                self.load_current_and_adjacent()
            }
        }
    }

    fn finish_swipe(&mut self) -> Task<Message> {
        let threshold = self.config.gallery.swipe_threshold_px();
        let effect = self.swipe.handle(swipe::Message::Released, threshold);
        match input::map_swipe(effect) {
            Some(command) => self.apply_command(command),
            None => Task::none(),
        }
    }

    /// Recomputes the visible set after a collection mutation and lets the
    /// lightbox react to the change.
    fn refresh_visible(&mut self) {
        let before = std::mem::take(&mut self.visible);
        self.visible = self.collection.visible();
        self.lightbox.on_visible_changed(&before, &self.visible);
    }

    /// Schedules decode tasks for every visible item not yet loaded.
    /// Also called from `App::new` for the initial page.
    pub(super) fn load_visible(&mut self) -> Task<Message> {
        let ids = self.visible.clone();
        Task::batch(ids.into_iter().map(|id| self.ensure_loaded(id)))
    }

    /// Schedules a decode for one item unless it is already loaded, in
    /// flight, or sitting in the prefetch cache.
    fn ensure_loaded(&mut self, id: ItemId) -> Task<Message> {
        if self.images.contains_key(&id) {
            return Task::none();
        }
        let Some(item) = self.collection.get(id) else {
            return Task::none();
        };
        let path = item.image_path.clone();

        if let Some(data) = self.cache.get(&path) {
            self.images.insert(id, ImageSlot::Ready(data));
            return Task::none();
        }

        self.images.insert(id, ImageSlot::Loading);
        Task::perform(
            async move { media::load_image(&path).map_err(|e| e.to_string()) },
            move |result| Message::ImageLoaded { id, result },
        )
    }

    /// Warms the items next to the current lightbox position so wrap-around
    /// navigation shows no loading flash.
    fn prefetch_adjacent(&mut self) -> Task<Message> {
        let Some(index) = self.lightbox.index() else {
            return Task::none();
        };
        let neighbors = prefetch::adjacent_indices(index, self.visible.len());
        let ids: Vec<ItemId> = neighbors
            .into_iter()
            .filter_map(|i| self.visible.get(i).copied())
            .collect();
        Task::batch(ids.into_iter().map(|id| self.ensure_loaded(id)))
    }

    fn load_current_and_adjacent(&mut self) -> Task<Message> {
        let current = self.lightbox.current_item(&self.visible);
        let mut tasks = Vec::new();
        if let Some(id) = current {
            tasks.push(self.ensure_loaded(id));
        }
        tasks.push(self.prefetch_adjacent());
        Task::batch(tasks)
    }

    fn store_loaded_image(&mut self, id: ItemId, result: Result<crate::media::ImageData, String>) {
        match result {
            Ok(data) => {
                if let Some(item) = self.collection.get(id) {
                    self.cache.insert(item.image_path.clone(), data.clone());
                }
                self.images.insert(id, ImageSlot::Ready(Arc::new(data)));
            }
            Err(reason) => {
                if let Some(item) = self.collection.get(id) {
                    eprintln!(
                        "Failed to load {}: {reason}",
                        item.image_path.display()
                    );
                }
                self.images.insert(id, ImageSlot::Failed);
            }
        }
    }
}
