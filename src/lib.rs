// SPDX-License-Identifier: MPL-2.0
//! `vernissage` is a desktop gallery and registration app for promoting a
//! single event, built with the Iced GUI framework.
//!
//! It renders a category-filtered photo grid with incremental reveal, a
//! fullscreen lightbox with keyboard and swipe navigation, and a ticket
//! registration flow that relays confirmed payments to a configurable
//! web-hook.

#![doc(html_root_url = "https://docs.rs/vernissage/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod manifest;
pub mod media;
pub mod relay;
pub mod session;
pub mod ui;
