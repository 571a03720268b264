use async_trait::async_trait;

use super::error::StorageResult;
use super::records::{MoodRecord, MoodsByWeek, ProjectRecord, StoredProject};

// 具體實現
pub mod memory;
pub mod redis_project;

pub use memory::InMemoryProjectRepository;
pub use redis_project::RedisProjectRepository;

/// 專案儲存庫特性
///
/// 每次調用都是一次獨立的讀或寫，不同請求之間沒有鎖，後寫者覆蓋先寫者。
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// 按建立順序讀取全部專案
    async fn read_projects(&self) -> StorageResult<Vec<StoredProject>>;

    /// 讀取單一專案，不存在時返回 `StorageError::NotFound`
    async fn read_project(&self, id: &str) -> StorageResult<StoredProject>;

    /// 新建或覆寫專案，整組心情一併替換
    async fn write_project(
        &self,
        id: &str,
        project: &ProjectRecord,
        moods: &MoodsByWeek,
    ) -> StorageResult<()>;

    /// 刪除專案及其心情，不存在時也視為成功
    async fn delete_project(&self, id: &str) -> StorageResult<()>;

    /// 設定單週心情
    async fn write_mood(&self, id: &str, week: &str, mood: &MoodRecord) -> StorageResult<()>;

    /// 檢查後端是否可用
    async fn check_health(&self) -> bool;
}
