//! 请求超时中间件

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::utils::{AppError, ErrorCode};

/// 超过 `REQUEST_TIMEOUT_MS` 的请求被取消，返回 408 和 JSON 错误体
pub async fn timeout_middleware(
    State(timeout): State<Duration>,
    req: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(timeout, next.run(req)).await {
        Ok(response) => response,
        Err(_) => AppError::new(ErrorCode::TimeoutError).into_response(),
    }
}
