//! Request extractors
//!
//! Body and path extraction that reports failures as [`AppError`] JSON bodies
//! instead of axum's plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::utils::{AppError, AppResult};

/// JSON body extractor
///
/// Decodes the body as JSON whatever the declared content type. Unreadable
/// and malformed bodies both map to 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid(format!("Can't read body: {}", e.body_text())))?;

        serde_json::from_slice(&bytes)
            .map(ApiJson)
            .map_err(|e| AppError::invalid_format(e.to_string()))
    }
}

/// Parse a path id as a base-10 `i64`
pub fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::invalid_employee_id(raw))
}
