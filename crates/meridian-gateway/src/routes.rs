//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use meridian_store::Store;

use crate::handlers::{health, inquiries};
use crate::state::GatewayState;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
/// - `POST /api/inquiries` - Submit the contact form
///
/// ## Admin (bearer token)
/// - `GET /api/inquiries` - List inquiries, newest first
/// - `GET /api/inquiries/:inquiry_id` - Get inquiry
///
/// ## Static site
/// - Anything else is served from `site_dir` when it is configured
pub fn create_router<S>(state: GatewayState<S>) -> Router
where
    S: Store + 'static,
{
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout = state.config.request_timeout();
    let site_dir = state.config.site_dir.clone();

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let mut router: Router<Arc<GatewayState<S>>> = Router::new()
        // Health (public)
        .route("/health", get(health::health::<S>))
        // Inquiries
        .route(
            "/api/inquiries",
            get(inquiries::list_inquiries::<S>).post(inquiries::create_inquiry::<S>),
        )
        .route(
            "/api/inquiries/:inquiry_id",
            get(inquiries::get_inquiry::<S>),
        );

    if let Some(dir) = site_dir {
        tracing::info!(site_dir = %dir.display(), "Serving static site");
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
