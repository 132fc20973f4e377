//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ports::TtsError;
use crate::domain::SynthesisError;

/// 错误响应正文
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求校验失败
    BadRequest(String),
    /// 上游 TTS 服务不可达或返回失败
    BadGateway(String),
    /// 本服务内部错误
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::BadGateway(msg) => {
                tracing::error!(error = %msg, "Upstream TTS failure");
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<TtsError> for ApiError {
    fn from(e: TtsError) -> Self {
        // 上游失败一律以 502 上抛，错误文本原样透出
        ApiError::BadGateway(e.to_string())
    }
}

impl From<SynthesisError> for ApiError {
    fn from(e: SynthesisError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
