//! Entry use cases driven by the list, detail and form screens

use crate::application::store::DiaryStore;
use crate::domain::{Diary, DiaryDraft, DiaryFilter, DiaryId};
use crate::error::{DiaryError, Result};
use crate::infrastructure::{Config, DiaryRepository, FilePreferenceStore};
use chrono::{DateTime, Utc};

/// Fields the edit form may change; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub title: Option<String>,
    pub contents: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Screens address entries by id (or unique id prefix). Unlike the store,
/// an unknown id is reported back as `EntryNotFound` so the user sees it.
pub struct EntryService {
    config: Config,
    store: DiaryStore<FilePreferenceStore>,
}

impl EntryService {
    /// Load config and entries from an initialized diary directory
    pub fn open<R: DiaryRepository>(repository: &R) -> Result<Self> {
        let config = repository.load_config()?;
        let store = DiaryStore::open(repository.preferences(), config.slot.clone())?;
        Ok(EntryService { config, store })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn list(&self, filter: &DiaryFilter) -> Vec<&Diary> {
        self.store.filter(filter)
    }

    pub fn show(&self, id: &str) -> Result<&Diary> {
        self.store
            .resolve(id)?
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))
    }

    /// Submit the form in "new" mode
    pub fn add(&mut self, draft: DiaryDraft) -> Result<Diary> {
        let valid = draft.validate()?;
        self.store.add(valid.title, valid.contents, valid.date)
    }

    /// Submit the form in "edit" mode, pre-filled from the current entry
    pub fn edit(&mut self, id: &str, changes: EntryChanges) -> Result<Diary> {
        let current = self.show(id)?;
        let id = current.id.clone();
        let valid = DiaryDraft::from_diary(current)
            .with_changes(changes.title, changes.contents, changes.date)
            .validate()?;

        self.store
            .update(&id, valid.title, valid.contents, valid.date)?
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))
    }

    pub fn delete(&mut self, id: &str) -> Result<Diary> {
        let id = self.resolve_id(id)?;
        self.store
            .delete(&id)?
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))
    }

    pub fn set_star(&mut self, id: &str, is_star: bool) -> Result<Diary> {
        let id = self.resolve_id(id)?;
        self.store
            .toggle_star(&id, is_star)?
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))
    }

    fn resolve_id(&self, id: &str) -> Result<DiaryId> {
        Ok(self.show(id)?.id.clone())
    }
}
