//! # Vidrack Server
//!
//! HTTP boundary for the vidrack video catalog.
//!
//! Routes call [`vidrack_core::repository::VideoRepository`] and translate
//! its outcomes: present values answer 200, a legitimately absent value on a
//! read-one answers 404, validation failures answer 400, and everything else
//! the catalog layer surfaces answers 500.

pub mod errors;
pub mod routes;
pub mod state;

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::errors::AppResult;
pub use crate::state::AppState;

/// Builds the full application router: the `/api` catalog routes plus the
/// liveness endpoints, CORS, and request tracing.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_api_router())
        .route("/ping", get(ping))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

/// Readiness: one round trip against the pool when one exists.
async fn health(State(state): State<AppState>) -> AppResult<Json<Value>> {
    match &state.database {
        Some(database) => {
            database.ping().await?;
            let stats = database.pool_stats();
            Ok(Json(json!({
                "status": "ok",
                "pool": {
                    "size": stats.size,
                    "idle": stats.idle,
                    "max": stats.max_size,
                }
            })))
        }
        None => Ok(Json(json!({ "status": "ok" }))),
    }
}
