//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存储后端与连通性 |
//!
//! ```json
//! { "status": "ok", "backend": "sqlite", "db": true }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    /// sqlite | memory
    backend: &'static str,
    /// 存储是否可用
    db: bool,
}

/// 健康检查 (存储不可用时仍返回 200，status 为 degraded)
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: store unavailable");
            false
        }
    };

    Json(HealthResponse {
        status: if db { "ok" } else { "degraded" },
        backend: state.store.backend(),
        db,
    })
}
