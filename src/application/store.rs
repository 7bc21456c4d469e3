//! The diary store: sole owner of the entry collection and its persistence

use crate::domain::diary::sort_newest_first;
use crate::domain::record::{decode_records, encode_records};
use crate::domain::{Diary, DiaryFilter, DiaryId};
use crate::error::{DiaryError, Result};
use crate::infrastructure::PreferenceStore;
use chrono::{DateTime, Utc};

/// Ordered entry collection persisted into one preference slot.
///
/// The collection is always sorted newest first (stable on equal dates).
/// Every mutating method writes the full collection to the slot before it
/// returns. When that write fails the in-memory collection is left as it was,
/// so the two never diverge. Lookups of unknown ids are no-ops that return
/// `Ok(None)`.
#[derive(Debug)]
pub struct DiaryStore<P: PreferenceStore> {
    preferences: P,
    slot: String,
    diaries: Vec<Diary>,
}

impl<P: PreferenceStore> DiaryStore<P> {
    /// Create an empty store over `preferences` without reading the slot
    pub fn new(preferences: P, slot: impl Into<String>) -> Self {
        DiaryStore {
            preferences,
            slot: slot.into(),
            diaries: Vec::new(),
        }
    }

    /// Create a store and load whatever the slot already holds
    pub fn open(preferences: P, slot: impl Into<String>) -> Result<Self> {
        let mut store = Self::new(preferences, slot);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// An empty or absent slot yields an empty list. Malformed records are
    /// skipped.
    pub fn load(&mut self) -> Result<&[Diary]> {
        self.diaries = match self.preferences.get(&self.slot)? {
            Some(value) => decode_records(value),
            None => {
                log::debug!("slot '{}' is empty, starting with no entries", self.slot);
                Vec::new()
            }
        };
        log::info!("loaded {} diary entries", self.diaries.len());
        Ok(&self.diaries)
    }

    /// Entries newest first
    pub fn list(&self) -> &[Diary] {
        &self.diaries
    }

    pub fn len(&self) -> usize {
        self.diaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diaries.is_empty()
    }

    pub fn get(&self, id: &DiaryId) -> Option<&Diary> {
        self.diaries.iter().find(|diary| &diary.id == id)
    }

    /// Find an entry by full id or by a unique id prefix
    pub fn resolve(&self, id_or_prefix: &str) -> Result<Option<&Diary>> {
        let needle = id_or_prefix.trim();
        if needle.is_empty() {
            return Ok(None);
        }

        if let Some(diary) = self.diaries.iter().find(|d| d.id.as_str() == needle) {
            return Ok(Some(diary));
        }

        let mut matches = self
            .diaries
            .iter()
            .filter(|d| d.id.as_str().starts_with(needle));
        match (matches.next(), matches.next()) {
            (None, _) => Ok(None),
            (Some(diary), None) => Ok(Some(diary)),
            (Some(_), Some(_)) => Err(DiaryError::AmbiguousId {
                prefix: needle.to_string(),
                count: 2 + matches.count(),
            }),
        }
    }

    pub fn filter(&self, filter: &DiaryFilter) -> Vec<&Diary> {
        filter.apply(&self.diaries)
    }

    /// Create an unstarred entry with a fresh id and persist
    pub fn add(&mut self, title: String, contents: String, date: DateTime<Utc>) -> Result<Diary> {
        let diary = Diary::new(title, contents, date);

        let mut next = self.diaries.clone();
        next.push(diary.clone());
        sort_newest_first(&mut next);
        self.commit(next)?;

        log::info!("added diary entry {}", diary.id);
        Ok(diary)
    }

    /// Replace title, contents and date of an entry; the star flag is kept
    pub fn update(
        &mut self,
        id: &DiaryId,
        title: String,
        contents: String,
        date: DateTime<Utc>,
    ) -> Result<Option<Diary>> {
        let Some(index) = self.position(id) else {
            log::debug!("update: no diary entry {}", id);
            return Ok(None);
        };

        let mut next = self.diaries.clone();
        let target = &mut next[index];
        target.title = title;
        target.contents = contents;
        target.date = date;
        let updated = target.clone();
        sort_newest_first(&mut next);
        self.commit(next)?;

        log::info!("updated diary entry {}", id);
        Ok(Some(updated))
    }

    /// Remove an entry by id and return it
    pub fn delete(&mut self, id: &DiaryId) -> Result<Option<Diary>> {
        let Some(index) = self.position(id) else {
            log::debug!("delete: no diary entry {}", id);
            return Ok(None);
        };

        let mut next = self.diaries.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        log::info!("deleted diary entry {}", id);
        Ok(Some(removed))
    }

    /// Set the star flag. Ordering is not affected.
    pub fn toggle_star(&mut self, id: &DiaryId, is_star: bool) -> Result<Option<Diary>> {
        let Some(index) = self.position(id) else {
            log::debug!("toggle_star: no diary entry {}", id);
            return Ok(None);
        };

        let mut next = self.diaries.clone();
        next[index].is_star = is_star;
        let updated = next[index].clone();
        self.commit(next)?;

        log::info!("set star={} on diary entry {}", is_star, id);
        Ok(Some(updated))
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn into_preferences(self) -> P {
        self.preferences
    }

    fn position(&self, id: &DiaryId) -> Option<usize> {
        self.diaries.iter().position(|diary| &diary.id == id)
    }

    /// Persist `next` as the full collection, then adopt it in memory
    fn commit(&mut self, next: Vec<Diary>) -> Result<()> {
        let value = encode_records(&next)?;
        self.preferences.set(&self.slot, value)?;
        log::debug!("persisted {} entries to slot '{}'", next.len(), self.slot);
        self.diaries = next;
        Ok(())
    }
}
