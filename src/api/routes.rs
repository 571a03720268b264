use axum::Router;

use crate::api::state::AppState;

pub mod projects;
pub mod system;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(projects::routes())
        .merge(system::routes())
}
