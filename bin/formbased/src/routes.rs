//! Route registration — collects module routes + system endpoints.

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;
use tracing::debug;

/// Build the complete router with all routes.
///
/// Module routes carry their own version prefix (e.g. `/forms/v1`), so
/// they are merged rather than nested.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    for (name, router) in module_routes {
        debug!("mounting module '{}'", name);
        app = app.merge(router);
    }

    app
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "formbased",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
