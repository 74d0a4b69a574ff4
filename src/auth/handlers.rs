//! HTTP handlers for registration and login.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::check;
use crate::error::ApiError;
use crate::models::PublicUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Ada")]
    #[validate(length(min = 2, max = 50, message = "name must be 2-50 characters"))]
    pub name: String,
    #[schema(example = "ada@x.com")]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[schema(example = "secret123")]
    #[validate(length(min = 6, max = 128, message = "password must be 6-128 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ada@x.com")]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[schema(example = "secret123")]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Auth payload: the public account view plus a session token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthData {
    pub user: PublicUser,
    pub token: String,
}

/// Register a new user
///
/// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<AuthData>),
        (status = 400, description = "Validation failure or email already registered"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), ApiError> {
    check(&req)?;

    let outcome = state
        .auth
        .register(&req.email, Some(req.name.as_str()), &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            AuthData {
                user: outcome.user,
                token: outcome.token,
            },
            "User created successfully",
        )),
    ))
}

/// Login user
///
/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthData>),
        (status = 400, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>, ApiError> {
    check(&req)?;

    let outcome = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::success_with_message(
        AuthData {
            user: outcome.user,
            token: outcome.token,
        },
        "Login successful",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            password: "secret123".to_string(),
        };
        assert!(check(&ok).is_ok());

        let bad_email = RegisterRequest {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
        };
        assert!(matches!(
            check(&bad_email).unwrap_err(),
            ApiError::Validation(_)
        ));

        let short_password = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            password: "abc".to_string(),
        };
        let err = check(&short_password).unwrap_err();
        assert_eq!(err.to_string(), "password must be 6-128 characters");
    }

    #[test]
    fn test_login_request_requires_password() {
        let req = LoginRequest {
            email: "ada@x.com".to_string(),
            password: String::new(),
        };
        assert!(matches!(check(&req).unwrap_err(), ApiError::Validation(_)));
    }
}
