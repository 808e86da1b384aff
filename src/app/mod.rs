// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the
//! lightbox, and the registration flow.
//!
//! The `App` struct wires the pure gallery state machine to Iced: widget
//! messages and raw events become lightbox commands, reveals kick off decode
//! tasks, and a confirmed payment spawns the relay task. Policy decisions
//! (page sizes, retry counts, swipe threshold) stay in the config so the
//! update loop reads as pure routing.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::gallery::{swipe, Collection, ItemId, Lightbox};
use crate::manifest;
use crate::media::{ImagePrefetchCache, ImageSlot};
use crate::session::SessionStore;
use crate::ui::receipt::RelayStatus;
use crate::ui::registration;
use iced::{window, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 750;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state bridging the gallery state machine, image
/// loading, and the registration relay.
pub struct App {
    config: Config,
    screen: Screen,
    collection: Collection,
    lightbox: Lightbox,
    swipe: swipe::State,
    /// Cached result of `collection.visible()`, recomputed after every
    /// collection mutation.
    visible: Vec<ItemId>,
    /// Load state per revealed item.
    images: HashMap<ItemId, ImageSlot>,
    cache: ImagePrefetchCache,
    form: registration::State,
    session: SessionStore,
    relay_status: RelayStatus,
    /// Last known cursor position, fed into swipe gestures on press.
    cursor: iced::Point,
    /// Header title, taken from the gallery directory name.
    event_title: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("visible", &self.visible.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state: loads the config, builds the
    /// collection from the gallery directory, and kicks off decode tasks
    /// for the initial page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            eprintln!("Could not load config, falling back to defaults: {err}");
            Config::default()
        });

        let gallery_dir = flags
            .gallery_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let items = manifest::load(&gallery_dir).unwrap_or_else(|err| {
            eprintln!("Could not read gallery {}: {err}", gallery_dir.display());
            Vec::new()
        });

        let event_title = event_title_from_dir(&gallery_dir);
        let collection = Collection::new(items, config.gallery.initial_page_size());
        let visible = collection.visible();

        let mut app = App {
            config,
            screen: Screen::Gallery,
            collection,
            lightbox: Lightbox::default(),
            swipe: swipe::State::default(),
            visible,
            images: HashMap::new(),
            cache: ImagePrefetchCache::with_defaults(),
            form: registration::State::new(),
            session: SessionStore::new(),
            relay_status: RelayStatus::Disabled,
            cursor: iced::Point::ORIGIN,
            event_title,
        };

        let task = app.load_visible();
        (app, task)
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Gallery => self.event_title.clone(),
            Screen::Registration => format!("{} - Register", self.event_title),
            Screen::Receipt => format!("{} - Receipt", self.event_title),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen, self.lightbox.is_open())
    }
}

/// Presentable title from the directory name: `"bidar-utsav"` becomes
/// `"Bidar Utsav"`.
fn event_title_from_dir(dir: &std::path::Path) -> String {
    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .trim()
        .to_string();

    if name.is_empty() || name == "." {
        return "Gallery".to_string();
    }

    name.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_title_is_derived_from_directory_name() {
        assert_eq!(
            event_title_from_dir(std::path::Path::new("/data/bidar-utsav")),
            "Bidar Utsav"
        );
        assert_eq!(
            event_title_from_dir(std::path::Path::new("photo_walk")),
            "Photo Walk"
        );
        assert_eq!(event_title_from_dir(std::path::Path::new(".")), "Gallery");
    }
}
