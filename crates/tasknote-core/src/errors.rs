use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable, machine-readable error codes returned in every error body.
pub mod codes {
    pub const MISSING_TOKEN: &str = "missing_token";
    pub const MALFORMED_TOKEN: &str = "malformed_token";
    pub const TOKEN_EXPIRED: &str = "token_expired";
    pub const INVALID_TOKEN: &str = "invalid_token";
    pub const NO_UPDATABLE_FIELDS: &str = "no_updatable_fields";
    pub const INVALID_FORMAT: &str = "invalid_format";
    pub const VALIDATION_FAILED: &str = "validation_failed";
    pub const REQUEST_EXPIRED: &str = "request_expired";
    pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
    pub const NOT_FOUND: &str = "not_found";
    pub const ALREADY_EXISTS: &str = "already_exists";
    pub const STORAGE_FAILURE: &str = "storage_failure";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

const GENERIC_SERVER_MESSAGE: &str = "Internal server error";

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub code: &'static str,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, code: &'static str, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            code,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, codes::INTERNAL_ERROR, err)
    }

    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, codes::STORAGE_FAILURE, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, codes::NOT_FOUND, err)
    }

    pub fn validation<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, codes::VALIDATION_FAILED, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, codes::INVALID_CREDENTIALS, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, codes::ALREADY_EXISTS, err)
    }

    /// Maps a unique-constraint violation to a conflict and anything else to
    /// a storage failure.
    pub fn from_unique_violation(err: sqlx::Error, message: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::conflict(anyhow::anyhow!(message))
            }
            _ => Self::storage(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server-side detail stays in the logs.
        let message = if self.status.is_server_error() {
            tracing::error!(
                status = %self.status.as_u16(),
                code = self.code,
                error = ?self.error,
                "Request failed"
            );
            GENERIC_SERVER_MESSAGE.to_string()
        } else {
            self.error.to_string()
        };

        let body = Json(ErrorResponse {
            error: message,
            code: self.code.to_string(),
        });

        (self.status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::storage(err)
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::internal(err)
    }
}
