//
//  launchpad-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the CLI's settings from a TOML file stored in a
//! platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/lp/config.toml`
//! - **macOS**: `~/Library/Application Support/lp/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\lp\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! page_url = "https://launchpad.net/"
//! consumer_key = "lp"
//! timeout = 30
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use launchpad_client::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("timeout", "60".to_string())?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`].
pub const VALID_KEYS: &[&str] = &["page_url", "consumer_key", "timeout"];

/// Global configuration container.
///
/// All fields use `#[serde(default)]` so a partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Core settings.
    #[serde(default)]
    pub core: CoreConfig,
}

/// Core settings.
///
/// | Field | Default |
/// |-------|---------|
/// | `page_url` | `"https://launchpad.net/"` |
/// | `consumer_key` | `"lp"` |
/// | `timeout` | `30` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// Any page URL on the site; the API root is derived from its origin.
    #[serde(default = "default_page_url")]
    pub page_url: String,

    /// Identifies this application to the web service.
    #[serde(default = "default_consumer_key")]
    pub consumer_key: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_page_url() -> String {
    "https://launchpad.net/".to_string()
}

fn default_consumer_key() -> String {
    crate::APP_NAME.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            consumer_key: default_consumer_key(),
            timeout: default_timeout(),
        }
    }
}

impl Config {
    /// Loads from the default location, or defaults if no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads from `path`, or defaults if no file exists.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Saves to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Path of the config file, e.g. `~/.config/lp/config.toml` on Linux.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Host part of `page_url`, used to key stored credentials.
    pub fn api_host(&self) -> Result<String> {
        let url = url::Url::parse(&self.core.page_url)
            .with_context(|| format!("Invalid page_url {}", self.core.page_url))?;
        url.host_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("page_url has no host: {}", self.core.page_url))
    }

    /// Current value of `key` as a string, or `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page_url" => Some(self.core.page_url.clone()),
            "consumer_key" => Some(self.core.consumer_key.clone()),
            "timeout" => Some(self.core.timeout.to_string()),
            _ => None,
        }
    }

    /// Sets `key` after validating `value`.
    ///
    /// `page_url` must parse as a URL and `timeout` as a number of seconds.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "page_url" => {
                url::Url::parse(&value).with_context(|| format!("Invalid URL: {value}"))?;
                self.core.page_url = value;
            }
            "consumer_key" => self.core.consumer_key = value,
            "timeout" => {
                self.core.timeout = value
                    .parse()
                    .with_context(|| format!("timeout must be a number of seconds, got {value}"))?;
            }
            _ => bail!("Unknown config key: {key}. Valid keys: {}", VALID_KEYS.join(", ")),
        }
        Ok(())
    }

    /// Restores a key to its default.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        let defaults = CoreConfig::default();
        match key {
            "page_url" => self.core.page_url = defaults.page_url,
            "consumer_key" => self.core.consumer_key = defaults.consumer_key,
            "timeout" => self.core.timeout = defaults.timeout,
            _ => bail!("Unknown config key: {key}. Valid keys: {}", VALID_KEYS.join(", ")),
        }
        Ok(())
    }
}
