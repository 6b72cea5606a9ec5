//! Admin authentication extractor.
//!
//! Stored inquiries contain personal contact details, so the read endpoints
//! require the configured admin token as `Authorization: Bearer <token>`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use meridian_store::Store;

use crate::error::ApiError;
use crate::state::GatewayState;

/// Proof that the request carried a valid admin token.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl AdminAccess {
    /// Check a presented token against the configured one.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` when no token is configured and `Unauthorized`
    /// when the presented token is missing or wrong.
    pub fn verify(configured: Option<&str>, presented: Option<&str>) -> Result<Self, ApiError> {
        let expected = configured.ok_or(ApiError::Forbidden)?;
        let presented = presented.ok_or(ApiError::Unauthorized)?;

        if constant_time_eq(expected.as_bytes(), presented.as_bytes()) {
            Ok(Self)
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<Arc<GatewayState<S>>> for AdminAccess
where
    S: Store + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<GatewayState<S>>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        let result = Self::verify(state.config.admin_token.as_deref(), token);
        if let Err(err) = &result {
            tracing::warn!(error = %err, path = %parts.uri.path(), "Admin access denied");
        }
        result
    }
}

/// Compare two byte strings without exiting early on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
