//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:5000/swagger-ui`
//! - OpenAPI JSON: `http://localhost:5000/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::categories::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::api::posts::{CreatePostRequest, PostPage, UpdatePostRequest};
use crate::api::users::UpdateUserRequest;
use crate::auth::handlers::{AuthData, LoginRequest, RegisterRequest};
use crate::models::{AuthorInfo, Category, Post, PostWithAuthor, PublicUser, UserDetail, UserSummary};
use crate::response::Pagination;
use crate::server::HealthData;

/// JWT bearer-token security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/auth/register or /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inkpost API",
        version = "1.0.0",
        description = "REST backend for users, posts and categories with JWT authentication.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Development"),
    ),
    paths(
        crate::server::health_check,
        // Auth
        crate::auth::handlers::register,
        crate::auth::handlers::login,
        // Users
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
        // Posts
        crate::api::posts::list_posts,
        crate::api::posts::get_post,
        crate::api::posts::create_post,
        crate::api::posts::update_post,
        crate::api::posts::delete_post,
        // Categories
        crate::api::categories::list_categories,
        crate::api::categories::get_category,
        crate::api::categories::create_category,
        crate::api::categories::update_category,
        crate::api::categories::delete_category,
    ),
    components(
        schemas(
            HealthData,
            RegisterRequest,
            LoginRequest,
            AuthData,
            PublicUser,
            UserSummary,
            UserDetail,
            UpdateUserRequest,
            Post,
            PostWithAuthor,
            AuthorInfo,
            PostPage,
            Pagination,
            CreatePostRequest,
            UpdatePostRequest,
            Category,
            CreateCategoryRequest,
            UpdateCategoryRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "Account resources"),
        (name = "Posts", description = "Post resources"),
        (name = "Categories", description = "Category resources"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().unwrap();
        assert!(json.contains("/api/auth/register"));
        assert!(json.contains("/api/posts/{id}"));
        assert!(json.contains("bearer_token"));
    }
}
