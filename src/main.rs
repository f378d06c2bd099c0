use boutique_api::database::{schema, DatabaseManager};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = boutique_api::config::config();
    tracing::info!("Starting Boutique API in {:?} mode", config.environment);

    // Connect and bootstrap the schema; like the original, the server still
    // starts when the database is unreachable and reports it per request
    match DatabaseManager::pool().await {
        Ok(pool) => {
            if let Err(e) = schema::ensure_schema(&pool).await {
                tracing::error!("schema bootstrap failed: {}", e);
            }
        }
        Err(e) => tracing::error!("database unavailable at startup: {}", e),
    }

    let app = boutique_api::app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("BOUTIQUE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Boutique API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
