//! Config management use case

use crate::domain::DateStyle;
use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::str::FromStr;

const VALID_KEYS: &str = "slot, date_style, created";

/// Service for managing diary configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "slot" => Ok(config.slot),
            "date_style" => Ok(config.date_style.name().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value.
    ///
    /// Changing `slot` points the diary at another preference key; entries
    /// stored under the old key stay where they are.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "slot" => config.slot = value.to_string(),
            "date_style" => {
                config.date_style = DateStyle::from_str(value).map_err(DiaryError::Config)?;
            }
            "created" => {
                return Err(DiaryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DiaryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: slot, date_style",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        log::info!("set config {} = {}", key, value);
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("slot").unwrap(), "diaryList");
        assert_eq!(service.get("date_style").unwrap(), "iso");
        assert!(service.get("created").is_ok());
        assert!(service.get("mode").is_err());
    }

    #[test]
    fn test_set_date_style() {
        let (_temp, service) = service();
        service.set("date_style", "korean").unwrap();
        assert_eq!(service.get("date_style").unwrap(), "korean");

        assert!(service.set("date_style", "fancy").is_err());
    }

    #[test]
    fn test_set_slot() {
        let (_temp, service) = service();
        service.set("slot", "journal").unwrap();
        assert_eq!(service.list().unwrap().slot, "journal");

        assert!(service.set("slot", "").is_err());
        assert_eq!(service.get("slot").unwrap(), "journal");
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        let err = service.set("created", "2024-01-01T00:00:00Z").unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }
}
