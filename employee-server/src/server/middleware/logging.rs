//! 请求日志中间件
//!
//! 记录所有进入的 HTTP 请求，包含方法、路由模板、状态码和延迟

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};

/// 请求日志中间件
///
/// 请求 ID、方法和路由模板放在 span 上，开始和结束事件都带这些字段。
/// 4xx/5xx 以 warn 级别记录。
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let (request_id, user_agent) = {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
                .to_string()
        };
        (header("x-request-id"), header("user-agent"))
    };

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %path,
    );

    async move {
        info!(user_agent = %user_agent, "Request started");

        let response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis() as u64;

        if response.status().is_client_error() || response.status().is_server_error() {
            warn!(status, latency_ms, "Request failed");
        } else {
            info!(status, latency_ms, "Request completed");
        }

        response
    }
    .instrument(span)
    .await
}
