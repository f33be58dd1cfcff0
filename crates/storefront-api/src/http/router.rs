//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`.
//! Middleware: CORS, tracing.
//!
//! In production, the built web frontend is served from `apps/web/dist/`
//! (configurable via `STOREFRONT_WEB_DIR`). API routes take priority;
//! unknown paths fall through to the SPA's `index.html` for client-side
//! routing. If the directory does not exist, only the API is served.

use axum::routing::{delete, get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Navigation shell (mounted once per request)
        .route("/nav", get(handlers::nav::get_nav))
        // Cart badge count
        .route("/cart/count", get(handlers::cart::get_count))
        // Session provisioning (external to the aggregation core)
        .route("/session", get(handlers::session::get_session))
        .route("/session", put(handlers::session::set_session))
        .route("/session", delete(handlers::session::clear_session));

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the built web frontend from disk if the directory exists.
    // API routes and /health take priority; unknown paths fall through
    // to index.html for client-side routing.
    let web_dir =
        std::env::var("STOREFRONT_WEB_DIR").unwrap_or_else(|_| "apps/web/dist".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{}/index.html", web_dir);
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "SPA static file serving enabled");
    }

    router
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
