//! Tests for the default-content seeding used by the `seed` binary.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::PgPool;

use bulltrade_db::seed::seed_defaults;

/// Seeding populates every content table and all six page sections,
/// visible through the public API.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_seed_populates_default_content(pool: PgPool) {
    seed_defaults(&pool).await.expect("seeding should succeed");

    let app = build_test_app(pool);

    let sections = body_json(get(app.clone(), "/api/content").await).await;
    let keys: Vec<_> = sections
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["section"].as_str().expect("section").to_string())
        .collect();
    assert_eq!(
        keys,
        ["about", "advantages", "contact", "footer", "hero", "team"],
        "all six sections present"
    );

    let hero = body_json(get(app.clone(), "/api/content/hero").await).await;
    assert_eq!(hero["title"], "BULL");
    assert_eq!(hero["buttonText"], "Залишити заявку");

    let footer = body_json(get(app.clone(), "/api/content/footer").await).await;
    assert_eq!(footer["email"], "info@bulltrading.com");

    let team = body_json(get(app.clone(), "/api/team").await).await;
    assert_eq!(team.as_array().expect("array").len(), 4);
    assert_eq!(team[0]["name"], "Олександр Коваленко");

    let advantages = body_json(get(app.clone(), "/api/advantages").await).await;
    assert_eq!(advantages.as_array().expect("array").len(), 6);

    let stats = body_json(get(app, "/api/stats").await).await;
    assert_eq!(stats.as_array().expect("array").len(), 3);
    assert_eq!(stats[0]["value"], "50+");
}

/// Reseeding resets to the defaults instead of duplicating rows.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reseed_resets_not_duplicates(pool: PgPool) {
    seed_defaults(&pool).await.expect("seeding should succeed");
    seed_defaults(&pool).await.expect("reseeding should succeed");

    let app = build_test_app(pool);

    let team = body_json(get(app.clone(), "/api/team").await).await;
    assert_eq!(team.as_array().expect("array").len(), 4);

    let sections = body_json(get(app.clone(), "/api/content").await).await;
    assert_eq!(sections.as_array().expect("array").len(), 6);

    let response = get(app, "/api/content/about").await;
    assert_eq!(response.status(), StatusCode::OK);
    let about = body_json(response).await;
    assert_eq!(about["titleHighlight"], "компанію");
}

/// Seeding never touches submitted applications.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_seed_leaves_applications_alone(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "Іван Петренко",
        "phone": "+380501234567",
        "email": "ivan@example.com",
    });
    let response = common::post_json(app, "/api/applications", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    seed_defaults(&pool).await.expect("seeding should succeed");

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications")
        .fetch_one(&pool)
        .await
        .expect("count query should succeed");
    assert_eq!(count, 1);
}
