//! Shared application state.

use domain_users::RolePolicy;

/// Cloned into the readiness router; domain routers get their own services.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Role ids resolved from the configured role names
    pub policy: RolePolicy,
}
