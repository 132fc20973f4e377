//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /tts                     POST  提交合成请求（转发至外部 TTS 服务）
//! - /tts/pretrained-models   GET   列出预训练模型
//! - /tts-res-static/{path}   GET   生成音频制品透传
//! - /api/ping                GET   健康检查
//!
//! 路径与外部 TTS 服务的契约一致，页面脚本直接按原始路径请求

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tts", post(handlers::generate_voice))
        .route(
            "/tts/pretrained-models",
            get(handlers::list_pretrained_models),
        )
        .route("/tts-res-static/*path", get(handlers::get_audio_artifact))
        .route("/api/ping", get(handlers::ping))
}
