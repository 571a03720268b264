use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use project_mood_server::{
    api::{AppState, RestApi},
    config::ServerConfig,
    storage::{InMemoryProjectRepository, ProjectRepository},
};
use tower::ServiceExt;

/// 以記憶體儲存建立完整的應用路由
pub fn setup_test_app() -> Router {
    setup_app_with(Arc::new(InMemoryProjectRepository::new()), 5)
}

/// 以指定的儲存庫與請求超時建立完整的應用路由
#[allow(dead_code)]
pub fn setup_app_with(repository: Arc<dyn ProjectRepository>, request_timeout_secs: u64) -> Router {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs,
        cors_allow_all: true,
        cors_origins: vec![],
    };

    RestApi::new(config, AppState::new(repository))
        .build_app()
        .expect("Failed to build test app")
}

/// 發送請求並返回狀態碼與本文
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
