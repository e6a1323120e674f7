//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the same router + middleware stack as `main.rs` via
//! [`bulltrade_api::router::build_app_router`], with a hand-assembled
//! config so tests never touch process environment variables.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use bulltrade_api::auth::password::hash_password;
use bulltrade_api::config::{AdminCredentials, RateLimitConfig, ServerConfig, TelegramConfig};
use bulltrade_api::auth::jwt::JwtConfig;
use bulltrade_api::router::build_app_router;
use bulltrade_api::state::AppState;

/// Admin credentials baked into every test config.
pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test_admin_password_123!";

/// Build a test `ServerConfig` with safe defaults.
///
/// Telegram is unconfigured and both per-IP caps are set high enough
/// not to interfere with tests of the database-backed duplicate
/// throttle.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-that-is-long-enough".to_string(),
            expiry_hours: 24,
        },
        admin: AdminCredentials {
            username: TEST_ADMIN_USERNAME.to_string(),
            password_hash: hash_password(TEST_ADMIN_PASSWORD)
                .expect("hashing should succeed"),
        },
        telegram: None,
        api_rate: RateLimitConfig {
            max_attempts: 10_000,
            window_secs: 900,
        },
        submission_rate: RateLimitConfig {
            max_attempts: 100,
            window_secs: 900,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and the default test config.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_test_app_with_config(pool, config)
}

/// Same as [`build_test_app`] but with a caller-supplied config, for
/// tests that need Telegram pointed at a stub or a tight rate cap.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// Spawn a local HTTP server that answers every request with the given
/// JSON body, imitating the Telegram Bot API. Returns a `TelegramConfig`
/// pointing at it.
pub async fn spawn_telegram_stub(body: serde_json::Value) -> TelegramConfig {
    let app = Router::new().fallback(move || {
        let body = body.clone();
        async move { axum::Json(body) }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub should bind");
    let addr = listener.local_addr().expect("stub should have an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server error");
    });

    TelegramConfig {
        bot_token: "test-token".to_string(),
        chat_id: "-100123".to_string(),
        api_base: format!("http://{addr}"),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with a JSON body and no authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with a JSON body and a spoofed client IP.
pub async fn post_json_from_ip(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    ip: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a POST request with an empty body and a bearer token.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a PUT request with a JSON body and a bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Collect a response body as a raw string (for byte-level comparisons).
pub async fn body_string(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Log in as the test admin and return the bearer token.
pub async fn login_admin(app: Router) -> String {
    let body = serde_json::json!({
        "username": TEST_ADMIN_USERNAME,
        "password": TEST_ADMIN_PASSWORD,
    });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "admin login should succeed");

    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain token")
        .to_string()
}
