//! Access middleware for protected routes.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::PublicUser;
use crate::state::AppState;

/// The identity attached to a request after token verification.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub PublicUser);

/// Verify the bearer token and attach the resolved identity.
///
/// Any failure (missing header, bad scheme, bad signature, expiry,
/// unknown account) ends the request with 401 before the handler runs.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthenticated("Authentication required"))?;

    // Step 2: Require the Bearer scheme
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthenticated("Authentication required"))?;

    // Step 3: Verify token and resolve to a stored identity
    let user = state.auth.authenticate(token).await?;

    // Step 4: Inject identity and continue to the handler
    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}
