//! Per-IP fixed-window request caps.
//!
//! Two instances of [`IpRateLimiter`] run in production: a coarse cap
//! over everything under `/api` (default 100 requests per 15 minutes,
//! applied as the [`enforce_api_limit`] middleware) and a much tighter
//! cap on submission attempts (default 3 per 15 minutes, checked inside
//! the submit handler). Both are in-process only; the finer 1-hour
//! duplicate throttle counts persisted rows instead.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use bulltrade_core::error::CoreError;

use crate::config::RateLimitConfig;
use crate::error::AppError;
use crate::middleware::client_meta::client_ip;
use crate::state::AppState;

const MSG_TOO_MANY_REQUESTS: &str = "Занадто багато запитів. Спробуйте пізніше.";

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client IP.
#[derive(Debug)]
pub struct IpRateLimiter {
    windows: Mutex<HashMap<String, Window>>,
    max_attempts: u32,
    window: Duration,
}

impl IpRateLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_attempts,
            window,
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_secs(config.window_secs))
    }

    /// Record one attempt from `ip` and report whether it is allowed.
    ///
    /// Expired windows are dropped on the way through, so the map only
    /// holds addresses seen within the current window length.
    pub async fn check(&self, ip: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        windows.retain(|_, w| now.duration_since(w.started) < self.window);

        let window = windows.entry(ip.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });
        window.count += 1;
        window.count <= self.max_attempts
    }
}

/// Middleware applying the coarse per-IP cap to every `/api` route.
///
/// Counts every request, successful or not, like the submission cap.
pub async fn enforce_api_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(request.headers(), request.extensions())
        .unwrap_or_else(|| "unknown".to_string());

    if !state.api_limiter.check(&ip).await {
        tracing::warn!(ip = %ip, "API rate limit exceeded");
        return AppError::Core(CoreError::RateLimited(MSG_TOO_MANY_REQUESTS.into()))
            .into_response();
    }

    next.run(request).await
}
