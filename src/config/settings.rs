//! User settings for the expense tracker
//!
//! Manages display preferences, the decorative background asset and
//! logging verbosity. Expenses themselves are never written to disk.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// Default decorative background image
pub const DEFAULT_BACKGROUND_URL: &str = "https://img.freepik.com/free-photo/autumn-leaf-falling-revealing-intricate-leaf-vein-generated-by-ai_188544-9869.jpg";

/// Decorative background behind the form
///
/// The image is an external asset reference only; the terminal draws
/// `fill_color` and nothing else depends on the image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundSettings {
    /// Remote image URL
    #[serde(default = "default_image_url")]
    pub image_url: Option<String>,

    /// Colour painted behind the form (name or `#rrggbb`)
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
}

fn default_image_url() -> Option<String> {
    Some(DEFAULT_BACKGROUND_URL.to_string())
}

fn default_fill_color() -> String {
    "#3b2a1a".to_string()
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            image_url: default_image_url(),
            fill_color: default_fill_color(),
        }
    }
}

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Screen title
    #[serde(default = "default_title")]
    pub title: String,

    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Background asset
    #[serde(default)]
    pub background: BackgroundSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_title() -> String {
    "Expense Tracker".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            title: default_title(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
            background: BackgroundSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Tick rate as a duration, never below 10ms
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms.max(10))
    }
}
