use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::database::RegistryError;

/// Failure returned by an API route, rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The request is missing something the route needs, such as `email`.
    #[error("{0}")]
    MalformedRequest(String),

    /// A path segment could not be decoded, e.g. invalid UTF-8.
    #[error("{0}")]
    InvalidPath(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Registry(RegistryError::AlreadyRegistered)
            | ApiError::Registry(RegistryError::NotRegistered) => StatusCode::BAD_REQUEST,
            ApiError::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
