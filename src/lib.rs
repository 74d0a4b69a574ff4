//! Inkpost - REST backend for users, posts and categories.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration with env-var secret overrides
//! - [`logging`] - tracing setup (rolling file + stdout)
//! - [`db`] - PostgreSQL connection pool
//! - [`error`] - API error taxonomy and HTTP mapping
//! - [`response`] - unified `{success, message, data}` envelope
//! - [`models`] - account, post and category types
//! - [`repository`] - CRUD query layer
//! - [`auth`] - password hashing, session tokens, access middleware,
//!   ownership guard
//! - [`api`] - resource handlers
//! - [`server`] - router assembly and serving
//! - [`openapi`] - OpenAPI document

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod server;
pub mod state;

// Convenient re-exports at crate root
pub use auth::{AuthService, CurrentUser, TokenKeys};
pub use config::AppConfig;
pub use db::Database;
pub use error::ApiError;
pub use models::{Category, Post, PublicUser, User};
pub use response::{ApiResponse, Pagination};
pub use state::AppState;
