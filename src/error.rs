//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Coarse classification of a store failure, used to pick a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreErrorKind {
    Connection,
    ConstraintViolation,
    NotFound,
    Query,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("not connected to the database")]
    NotConnected,
    #[error("connection: {0}")]
    Connection(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("row not found")]
    NotFound,
    #[error("query: {0}")]
    Query(String),
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::NotConnected | StoreError::Connection(_) => StoreErrorKind::Connection,
            StoreError::ConstraintViolation(_) => StoreErrorKind::ConstraintViolation,
            StoreError::NotFound => StoreErrorKind::NotFound,
            StoreError::Query(_) => StoreErrorKind::Query,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;
        match &err {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => StoreError::ConstraintViolation(db.message().to_string()),
                _ => StoreError::Query(err.to_string()),
            },
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connection(err.to_string()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    /// Maps a rejected write to 400, except when the store itself is unreachable.
    pub fn rejected(err: StoreError, message: impl Into<String>) -> Self {
        match err.kind() {
            StoreErrorKind::Connection => AppError::Store(err),
            _ => AppError::BadRequest(message.into()),
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Store(e) => match e.kind() {
                StoreErrorKind::Connection => (StatusCode::SERVICE_UNAVAILABLE, "database_unavailable"),
                StoreErrorKind::ConstraintViolation => (StatusCode::BAD_REQUEST, "constraint_violation"),
                StoreErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
                StoreErrorKind::Query => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            },
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
