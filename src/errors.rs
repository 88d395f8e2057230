use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::Serialize;
use std::error::Error as StdError;
use thiserror::Error;

use crate::logging::AuditEvent;

/// Centralized application error type that encompasses all error variants
/// across different modules and provides consistent error responses.
#[derive(Debug, Error)]
pub enum AppError {
    // Validation errors
    #[error("record failed validation with {} error(s)", .0.len())]
    Validation(Vec<String>),

    #[error("{} field(s) must be filled in", .0.len())]
    InvalidFields(Vec<String>),

    // Resource errors
    #[error("resource not found")]
    NotFound,

    #[error("resource conflict: {0}")]
    Conflict(String),

    // Database errors
    #[error("database error")]
    Database(#[source] DieselError),

    #[error("connection pool error: {0}")]
    Pool(String),

    #[error("failed to hash password: {0}")]
    PasswordHashing(String),

    // Request parsing errors
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),

    #[error("unsupported media type: expected application/json")]
    UnsupportedMediaType,

    #[error("request body too large")]
    PayloadTooLarge,
}

/// Standard JSON error response structure
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<String>>,
}

impl AppError {
    /// Maps a Diesel error to an appropriate AppError variant
    pub fn from_diesel(error: DieselError) -> Self {
        match error {
            DieselError::NotFound => AppError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                let constraint = info
                    .constraint_name()
                    .unwrap_or("unique constraint")
                    .to_string();
                AppError::Conflict(format!("duplicate value violates {}", constraint))
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                AppError::Conflict("foreign key constraint violation".to_string())
            }
            other => AppError::Database(other),
        }
    }

    /// Determines the HTTP status code for this error
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client errors
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,

            // 5xx Server errors
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Pool(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::PasswordHashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Determines if error details should be exposed to the client
    /// In production (release builds), we hide internal error details
    fn should_expose_details(&self) -> bool {
        cfg!(debug_assertions) || self.status_code().is_client_error()
    }

    /// Gets the user-facing error message
    fn user_message(&self) -> String {
        if self.should_expose_details() {
            return self.to_string();
        }

        match self {
            AppError::Database(_) => "a database error occurred".to_string(),
            AppError::Pool(_) => "service temporarily unavailable".to_string(),
            AppError::PasswordHashing(_) => "password processing error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Gets optional detailed error information
    /// Only included in debug builds or for client errors
    fn error_details(&self) -> Option<String> {
        if !self.should_expose_details() {
            return None;
        }

        match self {
            AppError::Database(err) => Some(format!("database: {}", err)),
            AppError::Pool(err) => Some(format!("connection pool: {}", err)),
            AppError::PasswordHashing(err) => Some(format!("password hashing: {}", err)),
            _ => None,
        }
    }

    /// Logs the error with appropriate context
    fn log_error(&self) {
        match self.status_code() {
            code if code.is_client_error() => match self {
                AppError::Validation(errors) => {
                    crate::log_audit_event!(
                        AuditEvent::ValidationRejected,
                        error_count = errors.len(),
                        status_code = %code,
                        "Record rejected by validation"
                    );
                }
                AppError::InvalidFields(fields) => {
                    crate::log_audit_event!(
                        AuditEvent::RegistrationFailure,
                        fields = ?fields,
                        status_code = %code,
                        "Registration form incomplete"
                    );
                }
                _ => {
                    tracing::warn!(
                        error = %self,
                        status_code = %code,
                        "Client error"
                    );
                }
            },
            code if code.is_server_error() => {
                tracing::error!(
                    error = %self,
                    status_code = %code,
                    source = ?self.source(),
                    "Server error"
                );
            }
            _ => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log_error();

        let status = self.status_code();
        let error = self.user_message();
        let details = self.error_details();

        let (errors, fields) = match self {
            AppError::Validation(errors) => (Some(errors), None),
            AppError::InvalidFields(fields) => (None, Some(fields)),
            _ => (None, None),
        };

        let body = Json(ErrorResponse {
            error,
            details,
            errors,
            fields,
        });

        (status, body).into_response()
    }
}

impl From<DieselError> for AppError {
    fn from(error: DieselError) -> Self {
        AppError::from_diesel(error)
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(error: argon2::password_hash::Error) -> Self {
        AppError::PasswordHashing(error.to_string())
    }
}
