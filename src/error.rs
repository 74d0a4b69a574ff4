//! API error taxonomy.
//!
//! Every failure the service produces deliberately maps to one of these
//! kinds; handlers and middleware return them and the `IntoResponse` impl
//! translates to a status code plus the standard response envelope.
//! Internal detail stays in the server log and never reaches the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400: email already registered
    #[error("User already exists")]
    DuplicateAccount,
    /// 400: unknown email or wrong password, indistinguishable by design
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// 401: missing, malformed or expired token
    #[error("{0}")]
    Unauthenticated(&'static str),
    /// 403: acting account does not own the target resource
    #[error("{0}")]
    Forbidden(&'static str),
    /// 404: target resource does not exist
    #[error("{0}")]
    NotFound(&'static str),
    /// 400: request shape rejected before reaching the service layer
    #[error("{0}")]
    Validation(String),
    /// 500: anything unanticipated (store down, key misconfiguration)
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::DuplicateAccount | Self::InvalidCredentials | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::Internal(anyhow::Error::new(e).context("database operation failed"))
    }
}

/// True when a write was rejected by a UNIQUE constraint (Postgres 23505).
///
/// Concurrent registrations can both pass the pre-insert lookup; the
/// constraint at the store is the final arbiter, so the service maps this
/// back to `DuplicateAccount` instead of surfacing a 500.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == "23505")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Internal(e) => {
                tracing::error!("internal error: {:?}", e);
                "Server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::DuplicateAccount.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated("Authentication required").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("Not authorized").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("Post not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        // The wrapped cause must never leak into the client-facing message.
        let err = ApiError::Internal(anyhow::anyhow!("password column dropped"));
        assert_eq!(err.to_string(), "Server error");
    }

    #[test]
    fn test_credential_errors_share_one_message() {
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
