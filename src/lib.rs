pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    routing::{get, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full application router: public catalog routes, the protected
/// subtree behind the credential verifier, and global middleware.
pub fn app() -> Router {
    let mut app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        .merge(protected_routes());

    if config::config().security.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http())
}

fn public_routes() -> Router {
    use handlers::public::{categories, country, owners, products};

    Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/:id",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        )
        .route("/api/owners", get(owners::list).post(owners::create))
        .route("/api/country", get(country::list))
}

fn protected_routes() -> Router {
    use handlers::protected::{addresses, orders, payments, reviews, whoami};

    Router::new()
        .route("/api/adresses", get(addresses::list).post(addresses::create))
        .route("/api/adresses/set/default", put(addresses::set_default))
        .route(
            "/api/adresses/:id",
            get(addresses::show)
                .put(addresses::update)
                .delete(addresses::remove),
        )
        .route(
            "/api/reviews/:product_id",
            get(reviews::list).post(reviews::create),
        )
        .route("/api/orders", get(orders::list).post(orders::create))
        .route(
            "/api/orders/:id",
            get(orders::show).delete(orders::remove),
        )
        .route("/api/payments", get(payments::list).post(payments::create))
        .route("/api/auth/whoami", get(whoami::whoami))
        .route_layer(axum::middleware::from_fn(
            middleware::auth::verify_token_middleware,
        ))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Boutique API (Rust)",
            "version": version,
            "description": "E-commerce backend API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "catalog": "/api/products, /api/categories, /api/owners (public)",
                "country": "/api/country (public)",
                "adresses": "/api/adresses[/:id] (protected)",
                "reviews": "/api/reviews/:product_id (protected)",
                "orders": "/api/orders[/:id] (protected)",
                "payments": "/api/payments (protected)",
                "auth": "/api/auth/whoami (protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "message": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
