//! HTTP Middleware
//!
//! 请求日志中间件：为每个请求分配 ID，记录时延与异常状态码

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use uuid::Uuid;

/// 请求日志中间件
///
/// 4xx/5xx 按级别记录；正常请求记 debug
/// 注意：业务错误文本在 ApiError::into_response() 中记录
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            %request_id,
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            %request_id,
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            %request_id,
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP request completed"
        );
    }

    response
}
