//! API 路由模块
//!
//! # 结构
//!
//! - [`employees`] - 员工 CRUD 接口
//! - [`health`] - 健康检查
//! - [`extract`] - 请求体/路径提取器

pub mod employees;
pub mod extract;
pub mod health;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::server::middleware;
use crate::utils::{AppError, ErrorCode};

/// Request body size limit (1 MiB)
const MAX_BODY_BYTES: usize = 1024 * 1024;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
        .fallback(|| async { AppError::not_found("Route") })
        .method_not_allowed_fallback(|| async { AppError::new(ErrorCode::MethodNotAllowed) })
}

/// Build a fully configured application with all middleware and state
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: &ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router()
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Timeout - 408 with the JSON error body
        .layer(axum_middleware::from_fn_with_state(
            state.config.request_timeout(),
            middleware::timeout_middleware,
        ))
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
        // CORS - outermost so every response carries the headers
        .layer(cors_layer())
        .with_state(state.clone())
}

/// 允许所有来源，方法限定为 GET/POST/PUT/DELETE
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
