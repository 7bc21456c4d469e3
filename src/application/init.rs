//! Initialize diary use case

use crate::domain::DateStyle;
use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new diary at the specified path.
pub fn init(path: &Path, slot: &str, date_style: DateStyle) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let config = Config::new(slot.to_string(), date_style);
    config.validate()?;

    let repo = FileSystemRepository::new(path.to_path_buf());
    if repo.is_initialized() {
        return Err(DiaryError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    repo.initialize()?;
    repo.save_config(&config)?;

    log::info!("initialized diary at {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_nested_path() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("notes").join("diary");

        let config = init(&target, "diaryList", DateStyle::Korean).unwrap();

        assert_eq!(config.date_style, DateStyle::Korean);
        assert!(target.join(".diary/config.toml").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), "diaryList", DateStyle::Iso).unwrap();

        assert!(matches!(
            init(temp.path(), "diaryList", DateStyle::Iso),
            Err(DiaryError::Config(_))
        ));
    }

    #[test]
    fn test_rejected_slot_leaves_directory_clean() {
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            init(temp.path(), "  ", DateStyle::Iso),
            Err(DiaryError::Config(_))
        ));
        assert!(!temp.path().join(".diary").exists());

        init(temp.path(), "diaryList", DateStyle::Iso).unwrap();
        assert!(temp.path().join(".diary/config.toml").exists());
    }
}
