//! Error-to-response mapping for the HTTP layer.
//!
//! # Design
//! Every failure a request can hit ends up as an `ApiError`: store misses,
//! body/query/path rejections (through the `Api*` extractor wrappers),
//! unknown routes, wrong methods, and handler panics. `ApiError`'s
//! `IntoResponse` impl is the only place that logs a failure and renders
//! the `{status_code, detail, extra}` envelope; handlers just return `Err`.

use std::any::Any;

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;
use todo_core::StoreError;

use crate::dto::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// An update named a title the store does not hold.
    #[error(transparent)]
    NotFound(#[from] StoreError),

    /// The body or query string did not decode into the expected shape.
    /// `extra` lists one `{message, source}` entry per failure.
    #[error("Validation failed for {method} {path}")]
    Validation {
        method: Method,
        path: String,
        extra: Value,
    },

    /// The body could not be read at all (too large, broken stream).
    #[error("{}", .0.body_text())]
    UnreadableBody(#[from] BytesRejection),

    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    #[error("No route for {method} {path}.")]
    RouteNotFound { method: Method, path: String },

    #[error("Method {method} not allowed for {path}.")]
    MethodNotAllowed { method: Method, path: String },

    /// Anything else. The cause is logged, never sent to the client.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(
        method: Method,
        path: impl Into<String>,
        source: &str,
        message: impl Into<String>,
    ) -> Self {
        ApiError::Validation {
            method,
            path: path.into(),
            extra: json!([{ "message": message.into(), "source": source }]),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnreadableBody(rejection) => rejection.status(),
            ApiError::InvalidPath(rejection) => rejection.status(),
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let extra = match self {
            ApiError::Validation { extra, .. } => Some(extra.clone()),
            _ => None,
        };
        ErrorBody {
            status_code: self.status().as_u16(),
            detail: self.detail(),
            extra,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = self.to_body();
        tracing::warn!(status = body.status_code, error = %self, extra = ?body.extra, "request failed");
        (self.status(), Json(body)).into_response()
    }
}

/// JSON body extractor. The body is decoded whatever `Content-Type` says;
/// decode failures become `ApiError::Validation`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let bytes = Bytes::from_request(req, state).await?;
        serde_json::from_slice(&bytes)
            .map(ApiJson)
            .map_err(|err| ApiError::validation(method, path, "body", err.to_string()))
    }
}

/// Query string extractor; failures become `ApiError::Validation`.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::try_from_uri(&parts.uri) {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(ApiError::validation(
                parts.method.clone(),
                parts.uri.path(),
                "query",
                rejection.body_text(),
            )),
        }
    }
}

/// `Path` whose rejection goes through `ApiError`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}

/// Turns a caught handler panic into the 500 envelope.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let cause = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(cause).into_response()
}
