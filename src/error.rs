use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::{dao::storage::StorageError, views};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend failed for a reason unrelated to the request data.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// The write was rejected by a storage rule (missing, empty or duplicate title).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConstraintViolation { message } => {
                ServiceError::ConstraintViolation(message)
            }
            other => ServiceError::Unavailable(other),
        }
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(message) => AppError::NotFound(message),
            ServiceError::ConstraintViolation(message) => {
                AppError::Internal(format!("constraint violation: {message}"))
            }
            ServiceError::Unavailable(source) => AppError::Internal(source.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound(message) => {
                warn!(%message, "resource not found");
                StatusCode::NOT_FOUND
            }
            AppError::Internal(message) => {
                error!(%message, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Html(views::error_page(status))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_constraint_maps_to_constraint_violation() {
        let err: ServiceError = StorageError::constraint("duplicate title").into();
        assert!(matches!(err, ServiceError::ConstraintViolation(ref msg) if msg == "duplicate title"));
    }

    #[test]
    fn constraint_violation_is_a_server_error() {
        let response =
            AppError::from(ServiceError::ConstraintViolation("dup".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_is_a_404() {
        let response = AppError::from(ServiceError::NotFound("game `3`".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
