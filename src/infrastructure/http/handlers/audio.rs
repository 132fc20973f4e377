//! Audio Artifact Handler
//!
//! /tts-res-static 静态音频资源透传（本地开发代理）

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /tts-res-static/{*path} - 获取生成的音频制品
pub async fn get_audio_artifact(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let artifact = state.tts_backend.fetch_audio(&path).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, artifact.content_type)
        .header(header::CONTENT_LENGTH, artifact.data.len())
        .body(Body::from(artifact.data))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
