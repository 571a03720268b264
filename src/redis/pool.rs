use crate::config::types::RedisConfig;
use async_trait::async_trait;
use deadpool::managed::QueueMode;
use deadpool_redis::{
    redis::{cmd, RedisError},
    Config, Connection, CreatePoolError, Pool, PoolConfig, PoolError, Runtime, Timeouts,
};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Redis連接池錯誤
#[derive(Error, Debug)]
pub enum RedisPoolError {
    /// 連接池初始化錯誤
    #[error("Redis連接池初始化錯誤: {0}")]
    PoolInitError(#[from] CreatePoolError),

    /// 無法取得連接，包括等待逾時與建立連線失敗
    #[error("無法從連接池獲取連接: {0}")]
    GetConnectionError(#[from] PoolError),

    /// Redis 回應錯誤
    #[error("Redis命令錯誤: {0}")]
    Command(#[from] RedisError),

    /// PING 得到非預期回應
    #[error("Redis PING 回應異常: {0}")]
    UnexpectedPong(String),
}

/// 儲存庫使用的連接來源
#[async_trait]
pub trait RedisPool: Send + Sync + 'static {
    /// 取出一條連接，丟棄時自動歸還
    async fn get_conn(&self) -> Result<Connection, RedisPoolError>;

    /// PING 一次，成功返回 Ok
    async fn ping(&self) -> Result<(), RedisPoolError>;

    /// 檢查連接池健康狀態
    async fn check_health(&self) -> bool {
        match self.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Redis健康檢查失敗: {}", e);
                false
            }
        }
    }
}

/// deadpool-redis 連接池
///
/// 連接是惰性建立的，創建連接池本身不會連線 Redis。
#[derive(Debug)]
pub struct ConnectionPool {
    pool: Pool,
}

impl ConnectionPool {
    pub fn new(config: &RedisConfig) -> Result<Self, RedisPoolError> {
        let timeout = Duration::from_secs(config.connection_timeout_secs);

        let mut cfg = Config::from_url(&config.url);
        cfg.pool = Some(PoolConfig {
            max_size: config.pool_size as usize,
            timeouts: Timeouts {
                wait: Some(timeout),
                create: Some(timeout),
                recycle: Some(timeout),
            },
            queue_mode: QueueMode::Fifo,
        });
        let pool = cfg.create_pool(Some(Runtime::Tokio1))?;

        info!("Redis連接池就緒: {}，上限 {} 條連接", config.url, config.pool_size);
        Ok(Self { pool })
    }
}

#[async_trait]
impl RedisPool for ConnectionPool {
    async fn get_conn(&self) -> Result<Connection, RedisPoolError> {
        let conn = self.pool.get().await?;

        let status = self.pool.status();
        debug!("取得Redis連接，閒置 {}/{}", status.available, status.size);
        Ok(conn)
    }

    async fn ping(&self) -> Result<(), RedisPoolError> {
        let mut conn = self.get_conn().await?;

        let pong: String = cmd("PING").query_async(&mut conn).await?;
        if pong != "PONG" {
            return Err(RedisPoolError::UnexpectedPong(pong));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redis::test_config::{redis_test_pool, test_redis_config};
    use assert_matches::assert_matches;
    use deadpool_redis::redis::AsyncCommands;

    #[test]
    fn test_invalid_url_fails_pool_creation() {
        let mut config = test_redis_config();
        config.url = "not a url".to_string();

        assert_matches!(ConnectionPool::new(&config), Err(RedisPoolError::PoolInitError(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_error_text() {
        let mut config = test_redis_config();
        config.url = "redis://127.0.0.1:1".to_string();
        config.connection_timeout_secs = 1;
        let pool = ConnectionPool::new(&config).expect("無法創建Redis連接池");

        assert!(!pool.check_health().await);
        let err = pool.get_conn().await.err().expect("連線應該失敗");
        assert_matches!(err, RedisPoolError::GetConnectionError(_));
        assert!(err.to_string().starts_with("無法從連接池獲取連接"));
    }

    #[tokio::test]
    #[ignore = "需要可用的 Redis 服務"]
    async fn test_connection_pool() {
        let pool = redis_test_pool("test_connection_pool").await;
        assert!(pool.ping().await.is_ok());

        let mut conn = pool.get_conn().await.expect("無法獲取連接");
        let key = "pool_test_key";
        let _: () = conn.set(key, "pool_test_value").await.expect("SET失敗");
        let result: String = conn.get(key).await.expect("GET失敗");
        assert_eq!(result, "pool_test_value");

        let _: bool = conn.del(key).await.expect("DEL失敗");
    }
}
