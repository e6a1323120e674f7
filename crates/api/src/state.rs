use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::IpRateLimiter;
use crate::telegram::TelegramNotifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bulltrade_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Telegram notification dispatcher.
    pub notifier: Arc<TelegramNotifier>,
    /// Coarse per-IP cap over every `/api` route.
    pub api_limiter: Arc<IpRateLimiter>,
    /// Tight per-IP cap on submission attempts.
    pub submission_limiter: Arc<IpRateLimiter>,
}

impl AppState {
    /// Assemble state from a pool and loaded configuration.
    pub fn new(pool: bulltrade_db::DbPool, config: ServerConfig) -> Self {
        let notifier = TelegramNotifier::new(config.telegram.clone());
        let api_limiter = IpRateLimiter::from_config(&config.api_rate);
        let submission_limiter = IpRateLimiter::from_config(&config.submission_rate);

        Self {
            pool,
            config: Arc::new(config),
            notifier: Arc::new(notifier),
            api_limiter: Arc::new(api_limiter),
            submission_limiter: Arc::new(submission_limiter),
        }
    }
}
