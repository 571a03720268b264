// src/api/rest.rs
use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse},
    cors::CorsLayer,
};
use anyhow::{Result, anyhow};
use tracing::{info, warn};

use crate::config::ServerConfig;
use super::{error::ApiError, routes::api_routes, state::AppState};

pub struct RestApi {
    server_config: ServerConfig,
    state: AppState,
}

impl RestApi {
    pub fn new(server_config: ServerConfig, state: AppState) -> Self {
        Self {
            server_config,
            state,
        }
    }

    /// 綁定位址並處理請求，直到收到關閉信號
    pub async fn start(self) -> Result<()> {
        let app = self.build_app()?;

        let addr = SocketAddr::from((
            self.server_config.host.parse::<std::net::IpAddr>()?,
            self.server_config.port,
        ));

        let listener = TcpListener::bind(addr).await?;
        info!("REST API 伺服器啟動於 {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("REST API 伺服器已停止");
        Ok(())
    }

    pub fn build_app(&self) -> Result<Router> {
        let app = api_routes()
            // 超時設置，超時同樣以 500 與錯誤文字回應
            .layer(middleware::from_fn_with_state(
                self.server_config.request_timeout(),
                request_timeout,
            ))
            // 追蹤層
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_response(DefaultOnResponse::new().include_headers(true))
            )
            // CORS
            .layer(self.build_cors_layer()?)
            .with_state(self.state.clone());

        Ok(app)
    }

    fn build_cors_layer(&self) -> Result<CorsLayer> {
        let cors = CorsLayer::new()
            .allow_methods(vec![
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
            ])
            .allow_headers(vec![axum::http::header::CONTENT_TYPE]);

        // 根據配置設置允許的來源
        if self.server_config.cors_allow_all {
            return Ok(cors.allow_origin(tower_http::cors::Any));
        }

        let origins = self.server_config
            .cors_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| anyhow!("無效的CORS來源 {}: {}", origin, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(cors.allow_origin(origins))
    }
}

async fn request_timeout(State(limit): State<Duration>, request: Request, next: Next) -> Response {
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => ApiError::Timeout(limit).into_response(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("無法監聽 Ctrl+C 信號: {}", err);
            std::future::pending::<()>().await;
        }
        info!("接收到 Ctrl+C，正在關閉...");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("接收到終止信號，正在關閉...");
            }
            Err(err) => {
                warn!("無法監聽終止信號: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryProjectRepository;
    use std::sync::Arc;

    fn server_config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 5,
            cors_allow_all: false,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }

    fn state() -> AppState {
        AppState::new(Arc::new(InMemoryProjectRepository::new()))
    }

    #[test]
    fn test_build_app_with_origins() {
        assert!(RestApi::new(server_config(), state()).build_app().is_ok());
    }

    #[test]
    fn test_invalid_origin_fails() {
        let mut config = server_config();
        config.cors_origins = vec!["bad\norigin".to_string()];

        assert!(RestApi::new(config, state()).build_app().is_err());
    }
}
