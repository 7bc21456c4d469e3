//! Error types for diary

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the diary library and CLI
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Not a diary directory: {0}")]
    NotDiaryDirectory(PathBuf),

    #[error("Invalid date reference: {0}")]
    InvalidDateReference(String),

    #[error("Diary entry not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous diary id '{prefix}' matches {count} entries")]
    AmbiguousId { prefix: String, count: usize },

    #[error("Invalid diary entry: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preference store error: {0}")]
    Preferences(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::NotDiaryDirectory(_) => 2,
            DiaryError::InvalidDateReference(_) => 3,
            DiaryError::EntryNotFound(_) | DiaryError::AmbiguousId { .. } => 4,
            DiaryError::Validation(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::NotDiaryDirectory(path) => {
                format!(
                    "Not a diary directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'diary init' in this directory to create a new diary\n\
                    • Navigate to an existing diary directory\n\
                    • Set DIARY_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DiaryError::InvalidDateReference(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-12)\n\n\
                    Examples:\n\
                    diary add --title Walk --contents 'Went outside' --date yesterday\n\
                    diary list --from 2024-01-01",
                    input
                )
            }
            DiaryError::EntryNotFound(id) => {
                format!(
                    "No diary entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'diary list' to see entry ids\n\
                    • An id prefix works as long as it is unique",
                    id
                )
            }
            DiaryError::AmbiguousId { prefix, count } => {
                format!(
                    "Id prefix '{}' matches {} entries\n\n\
                    Suggestions:\n\
                    • Type more characters of the id\n\
                    • Use 'diary list' to see full ids",
                    prefix, count
                )
            }
            DiaryError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    An entry needs a non-empty title and contents.\n\
                    Example: diary add --title 'Rainy day' --contents 'Stayed in and read.'",
                    msg
                )
            }
            DiaryError::Config(msg) if msg.contains("date style") => {
                format!(
                    "{}\n\n\
                    Valid date styles: iso, korean\n\
                    Example: diary config date_style korean",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_diary_directory_suggestion() {
        let err = DiaryError::NotDiaryDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("diary init"));
        assert!(msg.contains("DIARY_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_date_examples() {
        let err = DiaryError::InvalidDateReference("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'someday'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = DiaryError::EntryNotFound("abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("diary list"));
        assert!(msg.contains("prefix"));
    }

    #[test]
    fn test_ambiguous_id_message() {
        let err = DiaryError::AmbiguousId {
            prefix: "a".to_string(),
            count: 3,
        };
        assert_eq!(err.to_string(), "Ambiguous diary id 'a' matches 3 entries");
        assert!(err.display_with_suggestions().contains("more characters"));
    }

    #[test]
    fn test_config_date_style_suggestions() {
        let err = DiaryError::Config("Invalid date style: 'fancy'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("iso, korean"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DiaryError::NotDiaryDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(
            DiaryError::InvalidDateReference(String::new()).exit_code(),
            3
        );
        assert_eq!(DiaryError::EntryNotFound(String::new()).exit_code(), 4);
        assert_eq!(DiaryError::Validation(String::new()).exit_code(), 5);
        assert_eq!(DiaryError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = DiaryError::Preferences("broken".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Preference store error: broken");
    }
}
