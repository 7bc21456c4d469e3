//! diary - Personal diary of dated entries
//!
//! The core is [`DiaryStore`]: an ordered, newest-first collection of
//! entries persisted as a whole into one slot of a key-value preference
//! store. The `cli` module is a thin presentation layer on top of it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::DiaryStore;
pub use domain::{Diary, DiaryDraft, DiaryFilter, DiaryId};
pub use error::{DiaryError, Result};
pub use infrastructure::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
