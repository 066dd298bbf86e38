//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for the content API
//! connection and the presentation defaults, with load/save to disk and
//! environment overrides.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/tourfolio/config.json`
//! - macOS: `~/Library/Application Support/tourfolio/config.json`
//! - Windows: `%APPDATA%/tourfolio/config.json`
//!
//! # Precedence
//!
//! CLI flags > environment (`TOURFOLIO_API_URL`, `TOURFOLIO_API_TOKEN`) >
//! config file > built-in defaults.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_AUTO_ADVANCE_SECS, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "tourfolio";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "TOURFOLIO_API_URL";

/// Environment variable holding the bearer token.
pub const ENV_API_TOKEN: &str = "TOURFOLIO_API_TOKEN";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Missing fields fall back to their defaults, so older or hand-written
/// files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the content API, without a trailing slash.
    pub api_base_url: String,
    /// Bearer token sent with every request.
    pub api_token: Option<String>,
    /// Packages revealed per "load more" step.
    pub page_size: usize,
    /// Hero auto-advance period in seconds.
    pub auto_advance_secs: u64,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            auto_advance_secs: DEFAULT_AUTO_ADVANCE_SECS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk and applies environment overrides.
    ///
    /// If the configuration file doesn't exist or cannot be parsed, the
    /// defaults are used.
    #[must_use]
    pub fn load() -> Self {
        let config = match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration document and sanitises it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON content cannot be parsed.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the configuration
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Applies environment overrides using the given lookup.
    ///
    /// Empty values are ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(token) = non_empty(ENV_API_TOKEN) {
            self.api_token = Some(token);
        }
        self.sanitized()
    }

    /// Overrides the API base URL (CLI flag).
    #[must_use]
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_base_url = url;
        }
        self.sanitized()
    }

    /// Replaces zero or malformed values with defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.api_base_url = if trimmed.is_empty() {
            defaults.api_base_url
        } else {
            trimmed
        };
        if self.page_size == 0 {
            self.page_size = defaults.page_size;
        }
        if self.auto_advance_secs == 0 {
            self.auto_advance_secs = defaults.auto_advance_secs;
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = defaults.request_timeout_secs;
        }
        self.api_token = self.api_token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Hero auto-advance period.
    #[must_use]
    pub fn auto_advance(&self) -> Duration {
        Duration::from_secs(self.auto_advance_secs)
    }

    /// Request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The token with all but its last four characters masked, for display.
    #[must_use]
    pub fn redacted_token(&self) -> String {
        match &self.api_token {
            None => "(none)".to_string(),
            Some(token) => {
                let chars: Vec<char> = token.chars().collect();
                let visible = chars.len().saturating_sub(4);
                let tail: String = chars[visible..].iter().collect();
                format!("{}{}", "*".repeat(visible.min(8)), tail)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
