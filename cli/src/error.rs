//! Error types for the store and the HTTP layer

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Message returned for any failure the client cannot fix
pub const INTERNAL_MESSAGE: &str = "something went wrong, try again.";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Blocking database task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Errors a request handler can answer with
///
/// Every variant renders as `{"message": "..."}`. Client mistakes, including
/// references to rows that do not exist, answer 400; store failures answer
/// 500 with a fixed message and are logged with their cause.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} required")]
    MissingFields(&'static str),

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error("{0} does not exist")]
    NotFound(&'static str),

    #[error("Either one planet or character must be added")]
    InvalidFavorite,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    InvalidPath(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(_) | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Text placed in the `message` field of the response body
    pub fn message(&self) -> String {
        match self {
            Self::Store(_) | Self::Serialization(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Store(StoreError::Sqlite(err))
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<axum::extract::rejection::PathRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(err) => tracing::error!("Store failure, transaction rolled back: {err}"),
            Self::Serialization(err) => tracing::error!("Failed to serialize response: {err}"),
            _ => tracing::debug!("Rejected request: {self}"),
        }
        (self.status(), Json(json!({ "message": self.message() }))).into_response()
    }
}
