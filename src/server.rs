//! HTTP server assembly: router, CORS, middleware wiring.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, header},
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::auth;
use crate::auth::require_auth;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    #[schema(example = "OK")]
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Health check
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server and store are reachable", body = ApiResponse<HealthData>),
        (status = 500, description = "Store unreachable")
    ),
    tag = "Health"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<HealthData>>, ApiError> {
    state
        .db
        .health_check()
        .await
        .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("health check failed")))?;

    Ok(Json(ApiResponse::success_with_message(
        HealthData {
            status: "OK",
            timestamp: Utc::now(),
        },
        "Server is running",
    )))
}

/// Build the complete application router.
///
/// Reads stay public; every mutating route sits behind the access
/// middleware, so handlers can rely on a `CurrentUser` extension.
pub fn build_router(state: Arc<AppState>, config: &AppConfig) -> anyhow::Result<Router> {
    let cors = match &config.server.cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::permissive(),
    };

    let auth_routes = Router::new()
        .route("/register", post(auth::handlers::register))
        .route("/login", post(auth::handlers::login));

    let user_routes = Router::new()
        .route("/", get(api::users::list_users))
        .route("/{id}", get(api::users::get_user))
        .merge(
            Router::new()
                .route(
                    "/{id}",
                    put(api::users::update_user).delete(api::users::delete_user),
                )
                .route_layer(from_fn_with_state(state.clone(), require_auth)),
        );

    let post_routes = Router::new()
        .route("/", get(api::posts::list_posts))
        .route("/{id}", get(api::posts::get_post))
        .merge(
            Router::new()
                .route("/", post(api::posts::create_post))
                .route(
                    "/{id}",
                    put(api::posts::update_post).delete(api::posts::delete_post),
                )
                .route_layer(from_fn_with_state(state.clone(), require_auth)),
        );

    let category_routes = Router::new()
        .route("/", get(api::categories::list_categories))
        .route("/{id}", get(api::categories::get_category))
        .merge(
            Router::new()
                .route("/", post(api::categories::create_category))
                .route(
                    "/{id}",
                    put(api::categories::update_category).delete(api::categories::delete_category),
                )
                .route_layer(from_fn_with_state(state.clone(), require_auth)),
        );

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/posts", post_routes)
        .nest("/api/categories", category_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Bind and serve until the process is stopped.
pub async fn run_server(config: &AppConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state, config)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
