//! Health check endpoint.
//!
//! This module provides the public health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use meridian_store::Store;

use crate::state::GatewayState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Inquiries received since the process started.
    pub inquiries: usize,
}

/// Health check handler.
///
/// Returns the current service status. This endpoint is public.
///
/// # Example
///
/// ```text
/// GET /health
///
/// Response: 200 OK
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "inquiries": 3
/// }
/// ```
pub async fn health<S>(State(state): State<Arc<GatewayState<S>>>) -> impl IntoResponse
where
    S: Store + 'static,
{
    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        inquiries: state.store.inquiry_count(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use meridian_store::MemoryStore;

    use super::*;
    use crate::config::GatewayConfig;

    #[tokio::test]
    async fn health_returns_ok() {
        let state = Arc::new(GatewayState::new(
            Arc::new(MemoryStore::new()),
            GatewayConfig::default(),
        ));

        let response = health(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
