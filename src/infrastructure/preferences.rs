//! Key-value preference storage

use crate::error::{DiaryError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A flat key-value store holding JSON values under named slots
pub trait PreferenceStore {
    /// Read a slot; `None` if nothing was ever stored under `key`
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Overwrite a slot with `value`
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove a slot (no-op if absent)
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Preferences kept in a single JSON document on disk.
///
/// Each slot is a top-level key of the document. Writes replace the whole
/// document through a temporary sibling file and a rename.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        FilePreferenceStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(DiaryError::Io(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        let document: Value = serde_json::from_str(&contents)?;
        match document {
            Value::Object(map) => Ok(map),
            _ => Err(DiaryError::Preferences(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(document)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serialized)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DiaryError::Io(e));
        }

        log::debug!("wrote preferences to {}", self.path.display());
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut document = self.read_document()?;
        Ok(document.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value);
        self.write_document(&document)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut document = self.read_document()?;
        if document.remove(key).is_some() {
            self.write_document(&document)?;
        }
        Ok(())
    }
}

/// Preferences held in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    slots: BTreeMap<String, Value>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.slots.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}
