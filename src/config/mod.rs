// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Two sections are persisted: `[gallery]` for presentation behavior
//! (page size, load-more batch, swipe threshold) and `[relay]` for the
//! registration web-hook (URL, retry policy, ticket amount).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Vernissage";

/// How many items are visible before the first "load more".
pub const DEFAULT_INITIAL_PAGE_SIZE: usize = 12;
/// How many additional items each "load more" reveals.
pub const DEFAULT_LOAD_BATCH_SIZE: usize = 6;
/// Minimum horizontal displacement for a swipe to count as navigation.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;
/// Maximum relay retries after the initial attempt.
pub const DEFAULT_RELAY_MAX_RETRIES: u32 = 2;
/// Base backoff delay; attempt `n` waits `n * delay`.
pub const DEFAULT_RELAY_RETRY_DELAY_MS: u64 = 1000;
/// Default ticket amount forwarded with each registration.
pub const DEFAULT_TICKET_AMOUNT: &str = "500";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub relay: RelayConfig,
}

/// Gallery presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub initial_page_size: Option<usize>,
    #[serde(default)]
    pub load_batch_size: Option<usize>,
    #[serde(default)]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            initial_page_size: Some(DEFAULT_INITIAL_PAGE_SIZE),
            load_batch_size: Some(DEFAULT_LOAD_BATCH_SIZE),
            swipe_threshold_px: Some(DEFAULT_SWIPE_THRESHOLD_PX),
        }
    }
}

impl GalleryConfig {
    /// Initial page size with the default applied.
    #[must_use]
    pub fn initial_page_size(&self) -> usize {
        self.initial_page_size.unwrap_or(DEFAULT_INITIAL_PAGE_SIZE)
    }

    /// Load-more batch size with the default applied.
    #[must_use]
    pub fn load_batch_size(&self) -> usize {
        self.load_batch_size.unwrap_or(DEFAULT_LOAD_BATCH_SIZE)
    }

    /// Swipe threshold with the default applied.
    #[must_use]
    pub fn swipe_threshold_px(&self) -> f32 {
        self.swipe_threshold_px
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Registration relay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Web-hook endpoint receiving registration payloads. `None` disables
    /// the relay entirely (registrations are kept in the session only).
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub max_retries: Option<u32>,
    #[serde(default)]
    pub retry_delay_ms: Option<u64>,
    #[serde(default)]
    pub amount: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            max_retries: Some(DEFAULT_RELAY_MAX_RETRIES),
            retry_delay_ms: Some(DEFAULT_RELAY_RETRY_DELAY_MS),
            amount: Some(DEFAULT_TICKET_AMOUNT.to_string()),
        }
    }
}

impl RelayConfig {
    /// Maximum retries with the default applied.
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries.unwrap_or(DEFAULT_RELAY_MAX_RETRIES)
    }

    /// Base retry delay with the default applied.
    #[must_use]
    pub fn retry_delay_ms(&self) -> u64 {
        self.retry_delay_ms.unwrap_or(DEFAULT_RELAY_RETRY_DELAY_MS)
    }

    /// Ticket amount with the default applied.
    #[must_use]
    pub fn amount(&self) -> String {
        self.amount
            .clone()
            .unwrap_or_else(|| DEFAULT_TICKET_AMOUNT.to_string())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
