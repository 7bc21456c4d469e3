//! Configuration management

use crate::domain::DateStyle;
use crate::error::{DiaryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-diary metadata directory
pub const DIARY_DIR: &str = ".diary";

/// Preference slot the entry list is stored under unless configured otherwise
pub const DEFAULT_SLOT: &str = "diaryList";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Preference slot holding the serialized entry list
    #[serde(default = "default_slot")]
    pub slot: String,
    #[serde(default)]
    pub date_style: DateStyle,
    pub created: DateTime<Utc>,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            slot: default_slot(),
            date_style: DateStyle::default(),
            created: Utc::now(),
        }
    }
}

impl Config {
    pub fn new(slot: String, date_style: DateStyle) -> Self {
        Config {
            slot,
            date_style,
            created: Utc::now(),
        }
    }

    /// Load config from .diary/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DIARY_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::NotDiaryDirectory(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DiaryError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .diary/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let diary_dir = path.join(DIARY_DIR);
        if !diary_dir.exists() {
            fs::create_dir(&diary_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(diary_dir.join("config.toml"), contents)?;

        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.slot.trim().is_empty() {
            return Err(DiaryError::Config(
                "slot must be a non-empty preference key".to_string(),
            ));
        }
        Ok(())
    }
}
