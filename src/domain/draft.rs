//! Create/edit form state and its submit validation

use crate::domain::diary::Diary;
use crate::error::{DiaryError, Result};
use chrono::{DateTime, Utc};

/// Form contents before submission.
///
/// In edit mode the draft starts out filled from the existing entry and only
/// the fields the user touched are replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiaryDraft {
    pub title: Option<String>,
    pub contents: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// A draft that passed validation and can be handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub contents: String,
    pub date: DateTime<Utc>,
}

impl DiaryDraft {
    /// Pre-fill the form from an existing entry
    pub fn from_diary(diary: &Diary) -> Self {
        DiaryDraft {
            title: Some(diary.title.clone()),
            contents: Some(diary.contents.clone()),
            date: Some(diary.date),
        }
    }

    /// Overlay the fields that were provided
    pub fn with_changes(
        mut self,
        title: Option<String>,
        contents: Option<String>,
        date: Option<DateTime<Utc>>,
    ) -> Self {
        if title.is_some() {
            self.title = title;
        }
        if contents.is_some() {
            self.contents = contents;
        }
        if date.is_some() {
            self.date = date;
        }
        self
    }

    /// Submit is allowed only when title, contents and date are all filled in
    pub fn validate(self) -> Result<ValidDraft> {
        let title = required_text("title", self.title)?;
        let contents = required_text("contents", self.contents)?;
        let date = self
            .date
            .ok_or_else(|| DiaryError::Validation("date is required".to_string()))?;

        Ok(ValidDraft {
            title,
            contents,
            date,
        })
    }
}

fn required_text(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(DiaryError::Validation(format!("{} must not be empty", field))),
    }
}
