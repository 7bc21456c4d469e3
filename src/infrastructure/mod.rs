//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod preferences;
pub mod repository;

pub use config::Config;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use repository::{DiaryRepository, FileSystemRepository};
