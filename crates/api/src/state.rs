use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{MovieService, UserService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: cinerate_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// User operations.
    pub users: Arc<dyn UserService>,
    /// Movie operations.
    pub movies: Arc<dyn MovieService>,
}

impl AppState {
    /// Wire the PostgreSQL-backed services onto `pool`.
    pub fn new(pool: cinerate_db::DbPool, config: ServerConfig) -> Self {
        Self {
            users: Arc::new(crate::services::PgUserService::new(pool.clone())),
            movies: Arc::new(crate::services::PgMovieService::new(pool.clone())),
            pool,
            config: Arc::new(config),
        }
    }
}
