use std::sync::Arc;

use tracing::info;

use crate::config::{ApplicationConfig, StorageBackend};
use crate::redis::{ConnectionPool, RedisPoolError};
use crate::storage::{InMemoryProjectRepository, ProjectRepository, RedisProjectRepository};

/// 處理器共享狀態
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProjectRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// 依配置選擇儲存後端
    pub fn from_config(config: &ApplicationConfig) -> Result<Self, RedisPoolError> {
        let repository: Arc<dyn ProjectRepository> = match config.storage.backend {
            StorageBackend::Redis => {
                info!("使用 Redis 儲存: {}", config.redis.url);
                Arc::new(RedisProjectRepository::new(ConnectionPool::new(&config.redis)?))
            }
            StorageBackend::Memory => {
                info!("使用記憶體儲存，重啟後資料將遺失");
                Arc::new(InMemoryProjectRepository::new())
            }
        };

        Ok(Self::new(repository))
    }
}
