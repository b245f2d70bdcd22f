use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use vidrack_model::{Video, VideoId};

use crate::errors::{AppError, AppResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos", post(post_video).get(list_video_ids))
        .route("/videos/{videoId}", get(get_video))
}

/// Request body for `POST /api/videos`. The id is store-assigned, so the
/// caller supplies only the other two fields; anything extra is rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateVideoRequest {
    pub title: String,
    pub file_path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoResponse {
    pub message: &'static str,
    pub insert_id: VideoId,
}

/// Post a video to the catalog.
///
/// Body: `{"title": "myTitle", "filePath": "path/to/video.mp4"}`
pub async fn post_video(
    State(state): State<AppState>,
    body: Result<Json<CreateVideoRequest>, JsonRejection>,
) -> AppResult<Json<CreateVideoResponse>> {
    let Json(request) = body?;

    let video = Video::new(request.title, request.file_path);
    let insert_id = state.repository.create(&video).await?;
    info!("Created video {insert_id}");

    Ok(Json(CreateVideoResponse {
        message: "Video Created",
        insert_id,
    }))
}

/// Get the ids of all available videos.
///
/// Response: `["id1", "id2"]`; an empty catalog answers `[]`.
pub async fn list_video_ids(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<VideoId>>> {
    let ids = state.repository.read_many_ids().await?;
    Ok(Json(ids))
}

/// Get the details of one video by id.
///
/// Response: `{"videoId": "id1", "title": "myTitle", "filePath": "path/to/video.mp4"}`
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<Json<Video>> {
    let video = state
        .repository
        .read_one_by_id(&VideoId::new(video_id))
        .await?
        .ok_or_else(|| AppError::not_found("Not Found"))?;

    Ok(Json(video))
}
