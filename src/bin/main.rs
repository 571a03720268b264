use anyhow::{anyhow, Result};
use clap::Parser;
use project_mood_server::api::{AppState, RestApi};
use project_mood_server::config::{self, ApplicationConfig, ConfigLoader, Environment, LogConfig};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "project_mood_server", about = "專案與每週心情追蹤服務")]
struct Cli {
    /// 執行環境 (development / production)，預設讀取 MOOD_ENV
    #[arg(short, long)]
    env: Option<String>,

    /// 配置目錄，預設讀取 CONFIG_DIR 或 ./config
    #[arg(short, long)]
    config_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加載配置
    let env = cli
        .env
        .as_deref()
        .map(Environment::parse)
        .unwrap_or_else(Environment::from_env);
    let config_dir = cli.config_dir.unwrap_or_else(ConfigLoader::config_dir);
    let loaded = ApplicationConfig::load_from(&config_dir, env)?;

    // 先初始化日誌系統，再設置全局配置
    init_logging(&loaded.log)?;
    let app_config = config::install_config(loaded);
    info!("配置已加載，環境: {:?}，目錄: {}", env, config_dir.display());

    // 建立儲存後端
    let state = AppState::from_config(app_config)?;
    if !state.repository.check_health().await {
        warn!("儲存後端目前不可用，請求將返回錯誤直到其恢復");
    }

    RestApi::new(app_config.server.clone(), state).start().await
}

// 初始化日誌系統，RUST_LOG 優先於配置中的級別
fn init_logging(log_config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_config.level.to_lowercase()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if log_config.is_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;

    info!("日誌系統初始化完成");
    Ok(())
}
