//! HTTP-level integration tests for admin login and token verification.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, login_admin, post_auth, post_json, post_json_auth,
    TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME,
};
use sqlx::PgPool;

/// Successful login returns a token and the username.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({
        "username": TEST_ADMIN_USERNAME,
        "password": TEST_ADMIN_PASSWORD,
    });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain token");
    assert_eq!(json["username"], TEST_ADMIN_USERNAME);
}

/// A wrong password returns 401 with a generic message.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({
        "username": TEST_ADMIN_USERNAME,
        "password": "definitely-wrong",
    });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid credentials");
}

/// A wrong username returns the same 401 message as a wrong password,
/// so the response does not reveal which part was wrong.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_username_indistinguishable(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({
        "username": "not-the-admin",
        "password": TEST_ADMIN_PASSWORD,
    });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid credentials");
}

/// Verify echoes the decoded claims for a freshly issued token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verify_round_trip(pool: PgPool) {
    let app = build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let response = post_auth(app, "/api/auth/verify", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["valid"], true);
    assert_eq!(json["user"]["sub"], TEST_ADMIN_USERNAME);
    assert_eq!(json["user"]["role"], "admin");
    assert!(json["user"]["jti"].is_string());
}

/// Verify without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verify_missing_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/auth/verify", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Verify with a malformed token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_verify_garbage_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_auth(app, "/api/auth/verify", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

/// A token signed with a different secret is rejected by protected
/// routes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_token_rejected(pool: PgPool) {
    use bulltrade_api::auth::jwt::{generate_token, JwtConfig};

    let app = build_test_app(pool);

    let foreign = JwtConfig {
        secret: "some-other-service-secret".to_string(),
        expiry_hours: 24,
    };
    let token = generate_token("admin", &foreign).expect("token generation should succeed");

    let response = post_json_auth(
        app,
        "/api/team",
        serde_json::json!({
            "name": "X",
            "role": "Y",
            "description": "Z",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
