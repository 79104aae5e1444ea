use std::path::{Path, PathBuf};

use calendar_history::{HistoryMode, ParseHistoryModeError};
use serde::{Deserialize, Serialize};

/// An error loading `Calendar.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{location} {source}")]
    Toml {
        location: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    HistoryMode(#[from] ParseHistoryModeError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub web: WebConfig,
}

impl CalendarConfig {
    /// Load the config from `Calendar.toml` (or `calendar.toml`) in `dir`.
    ///
    /// Returns `Ok(None)` if there is no config file.
    pub fn load(dir: &Path) -> Result<Option<CalendarConfig>, ConfigError> {
        let Some(file) = acquire_calendar_toml(dir) else {
            tracing::debug!(dir = %dir.display(), "no Calendar.toml found");
            return Ok(None);
        };

        let contents = std::fs::read_to_string(&file).map_err(|source| ConfigError::Io {
            path: file.clone(),
            source,
        })?;

        Self::parse(&contents)
            .map_err(|source| ConfigError::Toml {
                location: file
                    .strip_prefix(dir)
                    .unwrap_or(&file)
                    .display()
                    .to_string(),
                source,
            })
            .map(Some)
    }

    /// Parse the contents of a config file.
    pub fn parse(contents: &str) -> Result<CalendarConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The configured history mode, served under the configured base path.
    pub fn history_mode(&self) -> Result<HistoryMode, ConfigError> {
        let mode: HistoryMode = self.web.app.history.parse()?;
        Ok(mode.with_base(self.web.app.base_path.as_deref().unwrap_or_default()))
    }
}

fn acquire_calendar_toml(dir: &Path) -> Option<PathBuf> {
    // prefer uppercase
    let uppercase_conf = dir.join("Calendar.toml");
    if uppercase_conf.is_file() {
        return Some(uppercase_conf);
    }

    // lowercase is fine too
    let lowercase_conf = dir.join("calendar.toml");
    if lowercase_conf.is_file() {
        return Some(lowercase_conf);
    }

    None
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

fn default_name() -> String {
    "calendar".into()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default)]
    pub app: WebAppConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub base_path: Option<String>,

    /// `path` for the history API, `hash` for fragment navigation.
    #[serde(default = "default_history")]
    pub history: String,
}

impl Default for WebAppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_path: None,
            history: default_history(),
        }
    }
}

fn default_title() -> String {
    "Calendar".into()
}

fn default_history() -> String {
    "path".into()
}
