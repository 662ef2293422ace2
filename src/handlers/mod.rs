// handlers/mod.rs - HTTP handlers grouped by resource
//
// Every handler takes the shared AppState, runs at most one data statement
// (plus an existence check for releases), and answers with the
// { success, data } envelope or an ApiError.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;

pub mod auth; // POST /signup, /signin, /forgot-password
pub mod crud; // Generic list/show/create/update/delete
pub mod inventory; // GET /shortexpiry, /summary
pub mod public; // GET /, /health
pub mod releases; // Release writes (product must exist)
pub mod users; // User writes (uniqueness)

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
