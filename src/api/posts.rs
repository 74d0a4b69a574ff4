//! Post endpoints: public reads, owner-gated mutations.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use super::check;
use crate::auth::{CurrentUser, ensure_owner};
use crate::error::ApiError;
use crate::models::PostWithAuthor;
use crate::repository::{PostFilter, PostRepository};
use crate::response::{ApiResponse, Pagination};
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListPostsQuery {
    /// Filter by published state
    pub published: Option<bool>,
    /// Filter by author account id
    pub author_id: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostPage {
    pub posts: Vec<PostWithAuthor>,
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: Option<String>,
    pub published: Option<bool>,
}

/// List posts
///
/// GET /api/posts
#[utoipa::path(
    get,
    path = "/api/posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Paginated post list", body = ApiResponse<PostPage>)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<ApiResponse<PostPage>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = query.offset.unwrap_or(0).max(0);
    let filter = PostFilter {
        published: query.published,
        author_id: query.author_id.as_deref(),
    };

    let pool = state.db.pool();
    let posts = PostRepository::list(pool, filter, limit, offset).await?;
    let total = PostRepository::count(pool, filter).await?;

    Ok(Json(ApiResponse::success(PostPage {
        posts,
        pagination: Pagination::new(total, limit, offset),
    })))
}

/// Get post by ID
///
/// GET /api/posts/{id}
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with author", body = ApiResponse<PostWithAuthor>),
        (status = 404, description = "Post not found")
    ),
    tag = "Posts"
)]
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PostWithAuthor>>, ApiError> {
    let post = PostRepository::find_with_author(state.db.pool(), &id)
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;
    Ok(Json(ApiResponse::success(post)))
}

/// Create a post
///
/// POST /api/posts
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = ApiResponse<PostWithAuthor>),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_token" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PostWithAuthor>>), ApiError> {
    check(&req)?;

    let pool = state.db.pool();
    let post = PostRepository::create(pool, &req.title, &req.content, req.published, &user.id)
        .await?;
    // Re-read joined with the author for the standard response shape
    let post = PostRepository::find_with_author(pool, &post.id)
        .await?
        .ok_or_else(|| {
            ApiError::Internal(anyhow::anyhow!("post vanished between insert and read"))
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            post,
            "Post created successfully",
        )),
    ))
}

/// Update a post (owner only)
///
/// PUT /api/posts/{id}
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = ApiResponse<PostWithAuthor>),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Post not found")
    ),
    security(("bearer_token" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<ApiResponse<PostWithAuthor>>, ApiError> {
    check(&req)?;

    let pool = state.db.pool();
    // Fetch before the guard: a missing post is 404, never 403
    let existing = PostRepository::find_by_id(pool, &id)
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;
    ensure_owner(&user.id, &existing.author_id, "Not authorized to update this post")?;

    PostRepository::update(
        pool,
        &id,
        req.title.as_deref(),
        req.content.as_deref(),
        req.published,
    )
    .await?;
    let post = PostRepository::find_with_author(pool, &id)
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;

    Ok(Json(ApiResponse::success_with_message(
        post,
        "Post updated successfully",
    )))
}

/// Delete a post (owner only)
///
/// DELETE /api/posts/{id}
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Post not found")
    ),
    security(("bearer_token" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let pool = state.db.pool();
    let existing = PostRepository::find_by_id(pool, &id)
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;
    ensure_owner(&user.id, &existing.author_id, "Not authorized to delete this post")?;

    PostRepository::delete(pool, &id).await?;

    Ok(Json(ApiResponse::<()>::message_only(
        "Post deleted successfully",
    )))
}
