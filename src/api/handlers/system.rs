use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::api::state::AppState;

/// 對外公佈的 API 版本
pub const API_VERSION: &str = "0.1";

#[derive(Serialize)]
pub struct VersionResponse {
    version: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    storage: bool,
}

pub async fn root() -> impl IntoResponse {
    Json(VersionResponse { version: API_VERSION })
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let storage = state.repository.check_health().await;

    Json(HealthResponse {
        status: if storage { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        storage,
    })
}
