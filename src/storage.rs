//! 專案與心情的儲存層
//!
//! 紀錄結構、Redis 鍵佈局、與線上結構的對應，以及 [`ProjectRepository`] 的實現。

pub mod convert;
pub mod error;
pub mod keys;
pub mod records;
pub mod repository;

pub use convert::{id_or_new_uuid, to_mood_record, to_project, to_project_record};
pub use error::{StorageError, StorageResult};
pub use records::{MoodRecord, MoodsByWeek, ProjectRecord, StoredProject};
pub use repository::{InMemoryProjectRepository, ProjectRepository, RedisProjectRepository};
