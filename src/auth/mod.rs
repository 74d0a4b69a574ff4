//! Authentication and authorization core.
//!
//! ## Components
//! - `password`: Argon2id credential hashing and verification
//! - `token`: stateless HS256 session tokens (issue + verify)
//! - `service`: register/login orchestration against the user store
//! - `middleware`: bearer-token middleware for protected routes
//! - `ownership`: owner-vs-actor check applied by mutating handlers
//! - `handlers`: HTTP endpoints for register and login

pub mod handlers;
pub mod middleware;
pub mod ownership;
pub mod password;
pub mod service;
pub mod token;

// Re-export for convenience
pub use middleware::{CurrentUser, require_auth};
pub use ownership::ensure_owner;
pub use password::{hash_password, verify_password};
pub use service::{AuthOutcome, AuthService};
pub use token::{Claims, TokenError, TokenKeys};
