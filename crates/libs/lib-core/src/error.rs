//! # Error Taxonomy
//!
//! The four error kinds a request can end in, and their HTTP shapes:
//!
//! | Variant              | Status | Body                                        |
//! |----------------------|--------|---------------------------------------------|
//! | `Validation`         | 400    | `{success:false, errors:{field: message}}`  |
//! | `Conflict`           | 400    | `{success:false, message}`                  |
//! | `InvalidCredentials` | 401    | `{success:false, message:"Invalid credentials"}` |
//! | `Internal`           | 500    | `{success:false, message, error?}`          |
//!
//! Every handler converts to exactly one of these at its own boundary;
//! nothing propagates past a handler. The 401 body is a single fixed
//! message so a caller cannot tell an unknown username from a wrong
//! password. Internal detail is included in the body only in development
//! mode, but always lands in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lib_utils::validation::FieldErrors;
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AuthError>`.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Request-terminating error, one variant per taxonomy kind.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Schema validation failed; carries one message per violated field.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// A business-rule conflict (username uniqueness), not a schema error.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bad credentials. Deliberately message-free: the response body is
    /// always the same generic string.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Infrastructure fault (hashing, signing, persistence).
    #[error("internal error: {detail}")]
    Internal { detail: String, expose: bool },
}

impl AuthError {
    /// Build an internal error; `expose` comes from `Config::dev_mode` and
    /// controls whether the detail string reaches the response body.
    pub fn internal(detail: impl Into<String>, expose: bool) -> Self {
        Self::Internal {
            detail: detail.into(),
            expose,
        }
    }

    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::Conflict(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AuthError::Validation(errors) => {
                tracing::debug!("validation failed: {:?}", errors);
                json!({ "success": false, "errors": errors })
            }
            AuthError::Conflict(message) => {
                tracing::debug!("conflict: {}", message);
                json!({ "success": false, "message": message })
            }
            AuthError::InvalidCredentials => {
                json!({ "success": false, "message": "Invalid credentials" })
            }
            AuthError::Internal { detail, expose } => {
                tracing::error!("internal error: {}", detail);
                let mut body = json!({ "success": false, "message": "Internal server error" });
                if expose {
                    body["error"] = json!(detail);
                }
                body
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::Validation(FieldErrors::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Conflict("Username already exists".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::internal("db down", false).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
