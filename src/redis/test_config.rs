//! 測試用 Redis 連線設定，URL 取自 `REDIS_TEST_URL`

use crate::config::types::RedisConfig;
use crate::redis::pool::{ConnectionPool, RedisPool};

pub fn test_redis_config() -> RedisConfig {
    RedisConfig {
        url: std::env::var("REDIS_TEST_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        pool_size: 3,
        connection_timeout_secs: 5,
    }
}

/// 建立測試連接池，Redis 不可用時讓測試失敗
pub async fn redis_test_pool(test_name: &str) -> ConnectionPool {
    let pool = ConnectionPool::new(&test_redis_config()).expect("無法創建Redis連接池");
    if let Err(e) = pool.ping().await {
        panic!("Redis 測試 '{}' 失敗 - Redis 環境不可用: {}", test_name, e);
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_url_from_env_var() {
        std::env::set_var("REDIS_TEST_URL", "redis://custom:1234");
        assert_eq!(test_redis_config().url, "redis://custom:1234");
        std::env::remove_var("REDIS_TEST_URL");
    }
}
