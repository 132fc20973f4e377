//! Synthesis Handlers
//!
//! 外部契约端点的转发处理器。成功响应原样保留后端的负载形状

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::domain::{PretrainedModel, SynthesisRequest, SynthesisResult};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /tts - 提交合成请求
///
/// 校验必填字段后转发给后端端口，返回生成音频的引用
pub async fn generate_voice(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SynthesisRequest>,
) -> Result<Json<SynthesisResult>, ApiError> {
    request.validate()?;

    let result = state.tts_backend.generate_voice(request).await?;

    Ok(Json(result))
}

/// GET /tts/pretrained-models - 列出预训练模型
pub async fn list_pretrained_models(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PretrainedModel>>, ApiError> {
    let models = state.tts_backend.list_pretrained_models().await?;

    Ok(Json(models))
}
