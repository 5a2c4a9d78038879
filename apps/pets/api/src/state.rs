//! Application state management.
//!
//! Shared state handed to the app-level routers: configuration and the
//! PostgreSQL pool. Cloning is cheap (the pool is reference counted).

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
