//! Reset the content tables to the default site copy.
//!
//! Run manually after provisioning (or to restore the defaults):
//! `cargo run --bin seed`. Applications are left untouched.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = bulltrade_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    bulltrade_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    bulltrade_db::seed::seed_defaults(&pool)
        .await
        .expect("Failed to seed default content");

    tracing::info!("Default content seeded");
}
