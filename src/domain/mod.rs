//! Domain layer - Business logic and domain models

pub mod date_ref;
pub mod date_style;
pub mod diary;
pub mod draft;
pub mod filter;
pub mod record;

pub use date_ref::DateReference;
pub use date_style::DateStyle;
pub use diary::{Diary, DiaryId};
pub use draft::{DiaryDraft, ValidDraft};
pub use filter::DiaryFilter;
