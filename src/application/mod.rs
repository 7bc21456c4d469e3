//! Application layer - Use cases and orchestration

pub mod entries;
pub mod init;
pub mod manage_config;
pub mod store;

pub use entries::{EntryChanges, EntryService};
pub use manage_config::ConfigService;
pub use store::DiaryStore;
