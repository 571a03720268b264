use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::api::{error::ApiError, state::AppState};
use crate::models::{Mood, Project};
use crate::storage::{id_or_new_uuid, to_mood_record, to_project, to_project_record};

/// 列出全部專案
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let stored = state.repository.read_projects().await?;

    let projects = stored
        .into_iter()
        .map(|p| to_project(&p.id, p.project, p.moods))
        .collect();

    Ok(Json(projects))
}

/// 新建或覆寫專案，回應寫入後重新讀出的專案
pub async fn new_project(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Project>, ApiError> {
    let project: Project = serde_json::from_slice(&body?)?;
    let id = id_or_new_uuid(project.id.as_deref())?.to_string();

    let (record, moods) = to_project_record(&project);
    state.repository.write_project(&id, &record, &moods).await?;

    let stored = state.repository.read_project(&id).await?;
    info!("已儲存專案 {}", id);

    Ok(Json(to_project(&stored.id, stored.project, stored.moods)))
}

pub async fn remove_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repository.delete_project(&id).await?;
    info!("已刪除專案 {}", id);

    Ok(StatusCode::OK)
}

/// 設定專案某一週的心情，週次原樣作為鍵
pub async fn set_mood(
    State(state): State<AppState>,
    Path((id, week)): Path<(String, String)>,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, ApiError> {
    let mood: Mood = serde_json::from_slice(&body?)?;

    state
        .repository
        .write_mood(&id, &week, &to_mood_record(mood))
        .await?;

    Ok(StatusCode::OK)
}
