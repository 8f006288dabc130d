//!
//! # Custom Error Handling
//!
//! This module defines the error types used throughout the application.
//!
//! - [`DomainError`] is raised by the use-case layer when a referenced list, task or user
//!   is missing, or when a status/progress/priority value is outside its enumeration.
//! - [`AuthError`] is raised by the authentication gate (login, token verification and
//!   identity resolution).
//! - [`AppError`] is the transport-level error. It implements
//!   `actix_web::error::ResponseError` so handlers can return it directly, and provides
//!   `From` conversions for the two error types above, `validator::ValidationErrors` and
//!   `actix_web::error::BlockingError`, allowing for easy conversion using the `?` operator.

use actix_web::{error::BlockingError, error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors signaled by the use-case layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// No list with the requested id exists.
    #[error("List not found")]
    ListNotFound,
    /// No task with the requested id exists in any list.
    #[error("Task not found")]
    TaskNotFound,
    /// No user with the requested username exists.
    #[error("User not found")]
    UserNotFound,
    /// A registration tried to reuse a taken username.
    #[error("Username '{0}' is already registered")]
    UserAlreadyExists(String),
    /// The supplied status is not one of the enumerated statuses.
    #[error("Invalid status '{0}'")]
    InvalidStatus(String),
    /// The supplied progress is not one of the enumerated progress values.
    #[error("Invalid progress '{0}'")]
    InvalidProgress(String),
    /// The supplied priority is not one of the enumerated priorities.
    #[error("Invalid priority '{0}'")]
    InvalidPriority(String),
}

/// Errors signaled by the authentication gate.
///
/// A failed login never says which of the
/// username or password was wrong.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authenticated")]
    MissingAuthorization,
    #[error("Invalid authentication scheme")]
    InvalidAuthScheme,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    /// The token is valid but its subject is not in the user store.
    #[error("Could not validate credentials")]
    UnknownUser,
}

/// Represents all possible errors that can reach the HTTP boundary.
///
/// Each variant corresponds to a specific type of error, often carrying a message
/// detailing the issue. These errors are then converted into appropriate HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Represents an unauthorized access attempt (HTTP 401).
    /// Used when a token is invalid or expired, or credentials do not match.
    Unauthorized(String),
    /// Represents a request without usable credentials (HTTP 403).
    /// Used when the `Authorization` header is missing or uses the wrong scheme.
    Forbidden(String),
    /// Represents a client-side error due to a malformed or invalid request (HTTP 400).
    BadRequest(String),
    /// Represents a situation where a requested resource was not found (HTTP 404).
    NotFound(String),
    /// Represents an unexpected server-side error (HTTP 500).
    InternalServerError(String),
    /// Represents an error due to failed input validation (HTTP 422 Unprocessable Entity).
    /// Wraps errors from the `validator` crate.
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// This implementation allows Actix Web to automatically translate `AppError`
/// results from handlers into the correct HTTP status codes and JSON error responses.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::Forbidden(msg) => HttpResponse::Forbidden().json(json!({
                "error": msg
            })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            AppError::ValidationError(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "error": msg
            })),
        }
    }
}

/// Missing entities map to 404, everything else the caller sent wrong maps to 400.
impl From<DomainError> for AppError {
    fn from(error: DomainError) -> AppError {
        match error {
            DomainError::ListNotFound | DomainError::TaskNotFound | DomainError::UserNotFound => {
                AppError::NotFound(error.to_string())
            }
            DomainError::UserAlreadyExists(_)
            | DomainError::InvalidStatus(_)
            | DomainError::InvalidProgress(_)
            | DomainError::InvalidPriority(_) => AppError::BadRequest(error.to_string()),
        }
    }
}

/// Header problems are 403, anything wrong with the credential itself is 401.
impl From<AuthError> for AppError {
    fn from(error: AuthError) -> AppError {
        match error {
            AuthError::MissingAuthorization | AuthError::InvalidAuthScheme => {
                AppError::Forbidden(error.to_string())
            }
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::UnknownUser => AppError::Unauthorized(error.to_string()),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
///
/// The detailed validation messages are preserved.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// A password hash job that never completed on the blocking pool.
impl From<BlockingError> for AppError {
    fn from(error: BlockingError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_responses() {
        let error = AppError::Unauthorized("Invalid token".into());
        assert_eq!(error.error_response().status(), 401);

        let error = AppError::Forbidden("Not authenticated".into());
        assert_eq!(error.error_response().status(), 403);

        let error = AppError::BadRequest("Invalid input".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::NotFound("Resource not found".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::InternalServerError("Server error".into());
        assert_eq!(error.error_response().status(), 500);

        let error = AppError::ValidationError("username: too short".into());
        assert_eq!(error.error_response().status(), 422);
    }

    #[test]
    fn test_domain_errors_map_to_not_found_or_bad_request() {
        for missing in [
            DomainError::ListNotFound,
            DomainError::TaskNotFound,
            DomainError::UserNotFound,
        ] {
            assert_eq!(AppError::from(missing).error_response().status(), 404);
        }

        for invalid in [
            DomainError::InvalidStatus("Done".into()),
            DomainError::InvalidProgress("10%".into()),
            DomainError::InvalidPriority("Urgent".into()),
            DomainError::UserAlreadyExists("admin".into()),
        ] {
            assert_eq!(AppError::from(invalid).error_response().status(), 400);
        }
    }

    #[test]
    fn test_auth_errors_split_between_401_and_403() {
        assert_eq!(
            AppError::from(AuthError::MissingAuthorization)
                .error_response()
                .status(),
            403
        );
        assert_eq!(
            AppError::from(AuthError::InvalidAuthScheme)
                .error_response()
                .status(),
            403
        );
        for unauthorized in [
            AuthError::InvalidCredentials,
            AuthError::InvalidToken,
            AuthError::TokenExpired,
            AuthError::UnknownUser,
        ] {
            assert_eq!(AppError::from(unauthorized).error_response().status(), 401);
        }
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        match AppError::from(AuthError::InvalidCredentials) {
            AppError::Unauthorized(msg) => {
                assert_eq!(msg, "Invalid credentials");
                assert!(!msg.to_lowercase().contains("password"));
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }
}
