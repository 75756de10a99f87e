//! Start-up configuration.
//!
//! Settings are read once from `settings.json` in the OS config directory
//! (or the file named by `HABIT_CALENDAR_CONFIG`). Every field carries a
//! default, so a partial file is valid and a missing file means defaults.
//! Nothing is ever written back.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV: &str = "HABIT_CALENDAR_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown timezone '{0}'")]
    Timezone(String),
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub calendar: CalendarConfig,
}

/// Presentation settings of the calendar grid. Loading and paging
/// behaviour is fixed in `model::scroll` and cannot be configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub column_width: f32,
    pub hour_height: f32,
    pub scroll_animation_ms: u64,
    /// IANA name of the zone the "now" marker and "today" are computed in.
    pub timezone: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            column_width: 200.0,
            hour_height: 120.0,
            scroll_animation_ms: 300,
            timezone: "Asia/Kolkata".into(),
        }
    }
}

impl CalendarConfig {
    pub fn scroll_animation(&self) -> Duration {
        Duration::from_millis(self.scroll_animation_ms)
    }

    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::Timezone(self.timezone.clone()))
    }
}

impl AppSettings {
    /// Parse a settings file, rejecting unknown timezones.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: AppSettings = serde_json::from_str(&json)?;
        settings.calendar.tz()?;
        Ok(settings)
    }

    /// Load settings for this run. Never fails: problems are logged and the
    /// defaults are used instead.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!(?path, "no settings file, using defaults");
            return Self::default();
        }
        match Self::from_path(&path) {
            Ok(settings) => {
                tracing::info!(?path, "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(?path, "ignoring settings: {e}");
                Self::default()
            }
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    directories::ProjectDirs::from("", "", "HabitCalendar")
        .map(|dirs| dirs.config_dir().join("settings.json"))
}
