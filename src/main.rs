use std::sync::Arc;

use catalog_api::database::repository::PgCatalogStore;
use catalog_api::{app, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = catalog_api::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Catalog API in {:?} mode", config.environment);

    let state = AppState::new(Arc::new(PgCatalogStore::new()));
    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("CATALOG_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Catalog API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
