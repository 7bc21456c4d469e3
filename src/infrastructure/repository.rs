//! Diary directory discovery and layout

use crate::error::{DiaryError, Result};
use crate::infrastructure::config::DIARY_DIR;
use crate::infrastructure::{Config, FilePreferenceStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract access to an initialized diary directory
pub trait DiaryRepository {
    /// Load configuration from .diary/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .diary/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if the .diary directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .diary directory; fails if it already exists
    fn initialize(&self) -> Result<()>;

    /// Open the preference store entries are persisted in
    fn preferences(&self) -> FilePreferenceStore;
}

/// File system implementation of DiaryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Locate the diary root.
    /// DIARY_ROOT wins when set; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DIARY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_diary_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(DiaryError::Config(format!(
                "DIARY_ROOT is set to '{}' but no .diary directory found. \
                Run 'diary init' in that directory or unset DIARY_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .diary is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_diary_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| DiaryError::NotDiaryDirectory(start.to_path_buf()))
    }

    fn has_diary_dir(path: &Path) -> bool {
        path.join(DIARY_DIR).is_dir()
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.root.join(DIARY_DIR).join("preferences.json")
    }
}

impl DiaryRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_diary_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        fs::create_dir(self.root.join(DIARY_DIR))?;
        Ok(())
    }

    fn preferences(&self) -> FilePreferenceStore {
        FilePreferenceStore::new(self.preferences_path())
    }
}
