//! User endpoints: public reads, self-gated mutations.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use super::check;
use crate::auth::{CurrentUser, ensure_owner};
use crate::error::{ApiError, is_unique_violation};
use crate::models::{PublicUser, UserDetail, UserSummary};
use crate::repository::{PostRepository, UserRepository};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 50, message = "name must be 2-50 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
}

/// List users
///
/// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users with post counts", body = ApiResponse<Vec<UserSummary>>)
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<UserSummary>>>, ApiError> {
    let users = UserRepository::list_with_post_counts(state.db.pool()).await?;
    Ok(Json(ApiResponse::success(users)))
}

/// Get user by ID with their posts
///
/// GET /api/users/{id}
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User detail", body = ApiResponse<UserDetail>),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserDetail>>, ApiError> {
    let pool = state.db.pool();
    let user = UserRepository::find_by_id(pool, &id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    let posts = PostRepository::list_by_author(pool, &id).await?;

    Ok(Json(ApiResponse::success(UserDetail {
        user: user.into(),
        posts,
    })))
}

/// Update a user (self only)
///
/// PUT /api/users/{id}
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<PublicUser>),
        (status = 403, description = "Not the target account"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_token" = [])),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<PublicUser>>, ApiError> {
    check(&req)?;

    let pool = state.db.pool();
    let existing = UserRepository::find_by_id(pool, &id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    ensure_owner(&actor.id, &existing.id, "Not authorized to update this user")?;

    let updated =
        match UserRepository::update(pool, &id, req.name.as_deref(), req.email.as_deref()).await {
            Ok(user) => user.ok_or(ApiError::NotFound("User not found"))?,
            Err(e) if is_unique_violation(&e) => {
                return Err(ApiError::Validation("Email already in use".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

    Ok(Json(ApiResponse::success_with_message(
        updated.into(),
        "User updated successfully",
    )))
}

/// Delete a user and their posts (self only)
///
/// DELETE /api/users/{id}
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 403, description = "Not the target account"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_token" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let pool = state.db.pool();
    let existing = UserRepository::find_by_id(pool, &id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;
    ensure_owner(&actor.id, &existing.id, "Not authorized to delete this user")?;

    // Owned posts cascade at the store
    UserRepository::delete(pool, &id).await?;

    Ok(Json(ApiResponse::<()>::message_only(
        "User deleted successfully",
    )))
}
