//! HTTP error mapping. Every failure leaves the process as a JSON body
//! `{error, detail, path}` with a status that matches its cause; the
//! `path` is stamped in by [`attach_error_path`], which sits between the
//! router and the outer layers.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use yana_core::JudgeError;
use yana_registry::RegistryError;

use crate::generator::GeneratorError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    detail: String,
    path: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            detail: self.detail,
            path: None,
        };
        (self.status, Json(body)).into_response()
    }
}

/// An `ApiError` body is always smaller than this.
const ERROR_BODY_LIMIT: usize = 64 * 1024;

/// Middleware that fills the `path` field of error bodies with the
/// request path. `IntoResponse` has no access to the request, so the
/// stamp happens here, once, for every route.
pub async fn attach_error_path(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let resp = next.run(req).await;
    let status = resp.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return resp;
    }

    let (mut parts, body) = resp.into_parts();
    let bytes = match to_bytes(body, ERROR_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    // Only rewrite bodies in our error shape; extractor rejections and
    // plain-text 404s pass through untouched.
    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(mut value) if value.get("detail").is_some() => {
            value["path"] = serde_json::Value::String(path);
            match serde_json::to_vec(&value) {
                Ok(buf) => {
                    parts.headers.remove(header::CONTENT_LENGTH);
                    Response::from_parts(parts, Body::from(buf))
                }
                Err(_) => Response::from_parts(parts, Body::from(bytes)),
            }
        }
        _ => Response::from_parts(parts, Body::from(bytes)),
    }
}

impl From<JudgeError> for ApiError {
    fn from(err: JudgeError) -> Self {
        match err {
            JudgeError::MalformedFlow(detail) => Self::bad_request(detail),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(detail) => Self::not_found(detail),
            RegistryError::Unsupported(detail) => Self::bad_request(detail),
        }
    }
}

impl From<GeneratorError> for ApiError {
    fn from(err: GeneratorError) -> Self {
        let status = match &err {
            GeneratorError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GeneratorError::Upstream(_) | GeneratorError::Malformed(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_miss_maps_to_404() {
        let err: ApiError = RegistryError::NotFound("ЄДРПОУ не знайдено в реєстрі".into()).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_flow_maps_to_400() {
        let err: ApiError = JudgeError::MalformedFlow("duplicate step id".into()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generator_timeout_maps_to_504() {
        let err: ApiError = GeneratorError::Timeout(30).into();
        assert_eq!(err.status, StatusCode::GATEWAY_TIMEOUT);
    }
}
