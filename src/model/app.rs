use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    limiter::{RateLimitConfig, RateLimiter},
};

/// Shared state handed to every handler.
///
/// The rate-limited endpoints each own a limiter instance so their budgets
/// are independent; both are injected here rather than being process globals,
/// which lets tests supply isolated limiters with whatever settings a case
/// needs.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub lookup_limiter: Arc<RateLimiter>,
    pub attendance_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            lookup_limiter: Arc::new(RateLimiter::new(config.lookup_rate_limit.clone())),
            attendance_limiter: Arc::new(RateLimiter::new(config.attendance_rate_limit.clone())),
        }
    }
}

/// Build state with the default limiter budgets from just a connection.
///
/// Used by tests that set up an in-memory database without reading
/// environment configuration.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            lookup_limiter: Arc::new(RateLimiter::new(RateLimitConfig::lookup_default())),
            attendance_limiter: Arc::new(RateLimiter::new(RateLimitConfig::attendance_default())),
        }
    }
}
