//! Diary entry model and ordering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, immutable identifier of a diary entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiaryId(String);

impl DiaryId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        DiaryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiaryId {
    fn from(value: &str) -> Self {
        DiaryId(value.to_string())
    }
}

impl From<String> for DiaryId {
    fn from(value: String) -> Self {
        DiaryId(value)
    }
}

/// A single diary entry.
///
/// The serde representation is the persisted record:
/// `{id, title, contents, date, isStar}` with `date` as an RFC 3339 timestamp.
/// Every field is required; a record missing one fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diary {
    pub id: DiaryId,
    pub title: String,
    pub contents: String,
    pub date: DateTime<Utc>,
    pub is_star: bool,
}

impl Diary {
    /// Create a new, unstarred entry with a freshly generated id
    pub fn new(title: String, contents: String, date: DateTime<Utc>) -> Self {
        Diary {
            id: DiaryId::generate(),
            title,
            contents,
            date,
            is_star: false,
        }
    }
}

/// Sort entries newest first.
///
/// `sort_by` is stable, so entries sharing a date keep their relative order.
pub fn sort_newest_first(diaries: &mut [Diary]) {
    diaries.sort_by(|a, b| b.date.cmp(&a.date));
}
