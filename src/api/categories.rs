//! Category endpoints: public reads, authenticated mutations.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use super::check;
use crate::error::{ApiError, is_unique_violation};
use crate::models::Category;
use crate::repository::CategoryRepository;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "name must be 1-50 characters"))]
    pub name: String,
    #[validate(length(max = 200, message = "description must be at most 200 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "name must be 1-50 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 200, message = "description must be at most 200 characters"))]
    pub description: Option<String>,
}

/// List categories
///
/// GET /api/categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories, name ascending", body = ApiResponse<Vec<Category>>)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = CategoryRepository::list(state.db.pool()).await?;
    Ok(Json(ApiResponse::success(categories)))
}

/// Get category by ID
///
/// GET /api/categories/{id}
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = CategoryRepository::find_by_id(state.db.pool(), &id)
        .await?
        .ok_or(ApiError::NotFound("Category not found"))?;
    Ok(Json(ApiResponse::success(category)))
}

/// Create a category
///
/// POST /api/categories
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<Category>),
        (status = 400, description = "Validation failure or duplicate name"),
        (status = 401, description = "Unauthenticated")
    ),
    security(("bearer_token" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    check(&req)?;

    let pool = state.db.pool();
    if CategoryRepository::find_by_name(pool, &req.name)
        .await?
        .is_some()
    {
        return Err(ApiError::Validation("Category already exists".to_string()));
    }

    let category = match CategoryRepository::create(pool, &req.name, req.description.as_deref())
        .await
    {
        Ok(category) => category,
        // Concurrent creates can both pass the lookup; the unique index decides
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::Validation("Category already exists".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            category,
            "Category created successfully",
        )),
    ))
}

/// Update a category
///
/// PUT /api/categories/{id}
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<Category>),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_token" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    check(&req)?;

    let pool = state.db.pool();
    if CategoryRepository::find_by_id(pool, &id).await?.is_none() {
        return Err(ApiError::NotFound("Category not found"));
    }

    let updated =
        match CategoryRepository::update(pool, &id, req.name.as_deref(), req.description.as_deref())
            .await
        {
            Ok(category) => category.ok_or(ApiError::NotFound("Category not found"))?,
            Err(e) if is_unique_violation(&e) => {
                return Err(ApiError::Validation("Category already exists".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

    Ok(Json(ApiResponse::success_with_message(
        updated,
        "Category updated successfully",
    )))
}

/// Delete a category
///
/// DELETE /api/categories/{id}
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = String, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    security(("bearer_token" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let pool = state.db.pool();
    let removed = CategoryRepository::delete(pool, &id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Category not found"));
    }

    Ok(Json(ApiResponse::<()>::message_only(
        "Category deleted successfully",
    )))
}
