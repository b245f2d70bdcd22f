pub mod videos;

use axum::Router;

use crate::state::AppState;

/// The catalog API, mounted under `/api`.
pub fn create_api_router() -> Router<AppState> {
    Router::new().nest("/api", videos::router())
}
