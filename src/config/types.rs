use serde::{Serialize, Deserialize};
use std::time::Duration;
use crate::config::validation::{ValidationError, ValidationUtils, Validator};

/// 應用程序配置結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub log: LogConfig,
    pub server: ServerConfig,
    pub redis: RedisConfig,
    pub storage: StorageConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證各個部分的配置
        self.log.validate()?;
        self.server.validate()?;
        self.redis.validate()?;
        self.storage.validate()?;

        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl LogConfig {
    /// 是否輸出 JSON 格式日誌
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證日誌級別
        ValidationUtils::one_of(
            &self.level.to_lowercase(),
            &["trace", "debug", "info", "warn", "error"].iter().map(|s| s.to_string()).collect::<Vec<String>>(),
            "log.level"
        )?;

        // 驗證日誌格式
        ValidationUtils::one_of(
            &self.format.to_lowercase(),
            &["pretty", "json"].iter().map(|s| s.to_string()).collect::<Vec<String>>(),
            "log.format"
        )?;

        Ok(())
    }
}

/// 伺服器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub cors_allow_all: bool,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// 請求超時持續時間
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Validator for ServerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證服務器配置
        ValidationUtils::not_empty(&self.host, "server.host")?;
        ValidationUtils::in_range(self.port, 1, 65535, "server.port")?;
        ValidationUtils::in_range(self.request_timeout_secs, 1, 600, "server.request_timeout_secs")?;

        // 如果不允許所有來源，必須指定允許的來源
        if !self.cors_allow_all && self.cors_origins.is_empty() {
            return Err(ValidationError::InvalidValue(
                "未指定允許的CORS來源，且未啟用允許所有來源".to_string()
            ));
        }

        Ok(())
    }
}

/// Redis配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub pool_size: u32,
    pub connection_timeout_secs: u64,
}

impl Validator for RedisConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證Redis配置
        ValidationUtils::not_empty(&self.url, "redis.url")?;
        ValidationUtils::in_range(self.pool_size, 1, 100, "redis.pool_size")?;
        ValidationUtils::in_range(self.connection_timeout_secs, 1, 60, "redis.connection_timeout_secs")?;

        Ok(())
    }
}

/// 儲存後端類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Redis 鍵值儲存
    Redis,
    /// 進程內記憶體儲存，重啟後資料消失
    Memory,
}

/// 儲存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

impl Validator for StorageConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            cors_allow_all: true,
            cors_origins: vec![],
        }
    }

    #[test]
    fn test_server_config_cors_requires_origins() {
        let mut config = server_config();
        assert!(config.validate().is_ok());

        config.cors_allow_all = false;
        assert!(config.validate().is_err());

        config.cors_origins = vec!["http://localhost:3000".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_config_validation() {
        let config = LogConfig { level: "INFO".to_string(), format: "json".to_string() };
        assert!(config.validate().is_ok());
        assert!(config.is_json());

        let config = LogConfig { level: "verbose".to_string(), format: "pretty".to_string() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_redis_config_pool_size_range() {
        let config = RedisConfig {
            url: "redis://localhost:6379".to_string(),
            pool_size: 0,
            connection_timeout_secs: 5,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_storage_backend_deserialize() {
        let config: StorageConfig = serde_json::from_str(r#"{"backend":"memory"}"#).unwrap();
        assert_eq!(config.backend, StorageBackend::Memory);
    }
}
