//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use users_core::{CoreError, UserId, ValidationError};
use users_store::StoreError;

/// Errors that end a single request.
///
/// Plain-text variants carry a fixed message; the cause of a store failure
/// is logged but never sent to the caller.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request body is not a valid user JSON object.
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The `{id}` path segment is not a signed 32-bit integer.
    #[error("invalid id: {0}")]
    InvalidId(#[from] CoreError),

    /// One or more field constraints were violated.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// The store has no user with this id.
    #[error("user {0} not found")]
    UserNotFound(UserId),

    /// Any other store failure. `action` names the attempted operation,
    /// e.g. `"create user"`.
    #[error("failed to {action}: {source}")]
    Store {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Body of a 400 response for rejected input.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<ValidationError>,
}

impl ApiError {
    /// Map a store failure where a missing row is not expected; every
    /// variant becomes a 500.
    pub(crate) fn store(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| ApiError::Store { action, source }
    }

    /// Map a store failure on a lookup by id, surfacing a missing row as 404.
    pub(crate) fn lookup(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| match source {
            StoreError::NotFound(id) => ApiError::UserNotFound(id),
            source => ApiError::Store { action, source },
        }
    }

    /// The HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::InvalidId(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UserNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::InvalidJson(e) => {
                tracing::debug!(error = %e, "rejecting undecodable body");
                (status, "invalid JSON body").into_response()
            }
            ApiError::InvalidId(e) => {
                tracing::debug!(error = %e, "rejecting path id");
                (status, "invalid id").into_response()
            }
            ApiError::Validation(errors) => {
                (status, Json(ValidationErrorBody { errors })).into_response()
            }
            ApiError::UserNotFound(id) => {
                tracing::debug!(user_id = %id, "user not found");
                (status, "user not found").into_response()
            }
            ApiError::Store { action, source } => {
                tracing::error!(action, error = %source, "store operation failed");
                (status, format!("failed to {action}")).into_response()
            }
        }
    }
}

/// Errors that prevent the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// An environment variable holds an unusable value.
    #[error("invalid configuration for {key}: {reason}")]
    Config { key: &'static str, reason: String },

    /// The store backend could not be initialised.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
