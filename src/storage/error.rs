use deadpool_redis::redis::RedisError;
use thiserror::Error;

use crate::redis::RedisPoolError;

/// 儲存層錯誤
#[derive(Error, Debug)]
pub enum StorageError {
    /// 連接池錯誤
    #[error(transparent)]
    Pool(#[from] RedisPoolError),

    /// Redis 命令錯誤
    #[error(transparent)]
    Redis(#[from] RedisError),

    /// 專案不存在
    #[error("專案不存在: {0}")]
    NotFound(String),

    /// 儲存的資料無法解析
    #[error("資料損壞 [{key}]: {reason}")]
    Corrupt { key: String, reason: String },

    /// 序列化錯誤
    #[error("數據序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 儲存層結果類型別名
pub type StorageResult<T> = Result<T, StorageError>;
