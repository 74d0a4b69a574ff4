use crate::auth::AuthService;
use crate::db::Database;

/// Shared application state.
///
/// Built once in `main` from the loaded config; handlers receive it as an
/// `Arc` and everything durable lives behind the pool.
pub struct AppState {
    pub db: Database,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(db: Database, auth: AuthService) -> Self {
        Self { db, auth }
    }
}
