//! Server configuration loaded once from environment variables and
//! injected through [`crate::state::AppState`]. No ambient globals.

use crate::auth::jwt::JwtConfig;
use crate::auth::password::hash_password;

/// Top-level server configuration.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Admin login credentials.
    pub admin: AdminCredentials,
    /// Telegram delivery settings; `None` disables delivery.
    pub telegram: Option<TelegramConfig>,
    /// Coarse per-IP cap applied to every `/api` route.
    pub api_rate: RateLimitConfig,
    /// Transport-level submission rate thresholds.
    pub submission_rate: RateLimitConfig,
}

/// The single admin account, configured via environment.
///
/// The plaintext `ADMIN_PASSWORD` is hashed with Argon2id at load time;
/// only the PHC hash is kept in memory afterwards.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

/// Where and as whom to deliver Telegram notifications.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    /// API base URL; overridable so tests can point at a local stub.
    pub api_base: String,
}

/// Per-IP fixed-window thresholds for one rate limiter instance.
///
/// Two instances exist: the coarse `/api`-wide cap and the tight
/// submission cap. Both are independent of the in-service 1-hour
/// duplicate throttle.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum attempts per window.
    pub max_attempts: u32,
    /// Window length in seconds.
    pub window_secs: u64,
}

const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Required | Default                 |
    /// |-------------------------------|----------|-------------------------|
    /// | `HOST`                        | no       | `0.0.0.0`               |
    /// | `PORT`                        | no       | `5000`                  |
    /// | `CORS_ORIGINS`                | no       | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`        | no       | `30`                    |
    /// | `JWT_SECRET`                  | **yes**  | --                      |
    /// | `JWT_EXPIRY_HOURS`            | no       | `24`                    |
    /// | `ADMIN_USERNAME`              | no       | `admin`                 |
    /// | `ADMIN_PASSWORD`              | **yes**  | --                      |
    /// | `TELEGRAM_BOT_TOKEN`          | no       | unset = delivery off    |
    /// | `TELEGRAM_CHAT_ID`            | no       | unset = delivery off    |
    /// | `TELEGRAM_API_BASE`           | no       | `https://api.telegram.org` |
    /// | `API_RATE_MAX`                | no       | `100`                   |
    /// | `API_RATE_WINDOW_SECS`        | no       | `900`                   |
    /// | `SUBMISSION_RATE_MAX`         | no       | `3`                     |
    /// | `SUBMISSION_RATE_WINDOW_SECS` | no       | `900`                   |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or a numeric one fails
    /// to parse. Misconfiguration should fail fast at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            admin: AdminCredentials::from_env(),
            telegram: TelegramConfig::from_env(),
            api_rate: RateLimitConfig::api_from_env(),
            submission_rate: RateLimitConfig::submission_from_env(),
        }
    }
}

impl AdminCredentials {
    /// Load and hash the admin credentials.
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_PASSWORD` is unset or empty. There is no
    /// development default on purpose.
    pub fn from_env() -> Self {
        let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());

        let password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set in the environment");
        assert!(!password.is_empty(), "ADMIN_PASSWORD must not be empty");

        let password_hash = hash_password(&password).expect("Failed to hash ADMIN_PASSWORD");

        Self {
            username,
            password_hash,
        }
    }
}

impl TelegramConfig {
    /// Build from `TELEGRAM_BOT_TOKEN` + `TELEGRAM_CHAT_ID`.
    ///
    /// Returns `None` unless both are present and non-empty; delivery
    /// is then disabled and every dispatch records a "not configured"
    /// error for the admin to see.
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok().filter(|s| !s.is_empty())?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok().filter(|s| !s.is_empty())?;
        let api_base = std::env::var("TELEGRAM_API_BASE")
            .unwrap_or_else(|_| DEFAULT_TELEGRAM_API_BASE.into());

        Some(Self {
            bot_token,
            chat_id,
            api_base,
        })
    }
}

impl RateLimitConfig {
    /// Thresholds for the `/api`-wide cap.
    pub fn api_from_env() -> Self {
        Self::from_env_pair("API_RATE_MAX", "100", "API_RATE_WINDOW_SECS")
    }

    /// Thresholds for the submission cap.
    pub fn submission_from_env() -> Self {
        Self::from_env_pair("SUBMISSION_RATE_MAX", "3", "SUBMISSION_RATE_WINDOW_SECS")
    }

    fn from_env_pair(max_var: &str, max_default: &str, window_var: &str) -> Self {
        let max_attempts: u32 = std::env::var(max_var)
            .unwrap_or_else(|_| max_default.into())
            .parse()
            .unwrap_or_else(|_| panic!("{max_var} must be a valid u32"));

        let window_secs: u64 = std::env::var(window_var)
            .unwrap_or_else(|_| "900".into())
            .parse()
            .unwrap_or_else(|_| panic!("{window_var} must be a valid u64"));

        Self {
            max_attempts,
            window_secs,
        }
    }
}
