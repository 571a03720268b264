use once_cell::sync::OnceCell;
use config::ConfigError;
use tracing::{warn, debug};
use crate::config::types::ApplicationConfig;
use crate::config::loader::{ConfigLoader, Environment};
use std::path::Path;
use crate::config::validation::Validator;

// 全局配置實例
static CONFIG: OnceCell<ApplicationConfig> = OnceCell::new();

/// 獲取應用程序配置實例
///
/// 必須先調用 [`init_config`]，否則會在首次訪問時按當前環境加載。
pub fn get_config() -> &'static ApplicationConfig {
    CONFIG.get_or_init(|| {
        ApplicationConfig::load_from_env().expect("無法加載應用程序配置")
    })
}

/// 初始化配置（在應用程序啟動時調用）
pub fn init_config() -> Result<&'static ApplicationConfig, ConfigError> {
    init_config_from(&ConfigLoader::config_dir(), Environment::from_env())
}

/// 從指定目錄與環境初始化配置
pub fn init_config_from(dir: &Path, env: Environment) -> Result<&'static ApplicationConfig, ConfigError> {
    Ok(install_config(ApplicationConfig::load_from(dir, env)?))
}

/// 將已加載的配置設為全局實例，重複設置時保留第一份
///
/// 日誌系統須在調用前初始化，否則此處的訊息不會輸出。
pub fn install_config(app_config: ApplicationConfig) -> &'static ApplicationConfig {
    if CONFIG.set(app_config).is_err() {
        warn!("配置已經被初始化，跳過重複初始化");
    } else {
        debug!("全局配置已設置");
    }

    get_config()
}

/// ApplicationConfig 加載方法實現
impl ApplicationConfig {
    /// 從環境變數指定的環境加載配置
    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::from_env())
    }

    /// 從預設配置目錄加載指定環境的配置
    pub fn load(env: Environment) -> Result<Self, ConfigError> {
        Self::load_from(&ConfigLoader::config_dir(), env)
    }

    /// 從指定目錄加載指定環境的配置
    pub fn load_from(dir: &Path, env: Environment) -> Result<Self, ConfigError> {
        let config_source = ConfigLoader::load_from(dir, env)?;

        // 使用 serde 反序列化配置
        let app_config: ApplicationConfig = config_source.try_deserialize()?;

        // 驗證失敗視為加載失敗
        app_config
            .validate()
            .map_err(|err| ConfigError::Message(err.to_string()))?;

        Ok(app_config)
    }
}
