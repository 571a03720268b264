use axum::{
    routing::{delete, get, put},
    Router,
};
use crate::api::{handlers::projects, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list_projects).post(projects::new_project))
        .route("/projects/{id}", delete(projects::remove_project))
        .route("/projects/{id}/moods/{week_no}", put(projects::set_mood))
}
