//! Gateway application state.
//!
//! This module defines the shared state that is available to all request handlers.

use std::sync::Arc;

use meridian_store::Store;

use crate::config::GatewayConfig;

/// Shared application state for the gateway.
///
/// The store is built once at startup and handed in here; handlers reach it
/// only through this state.
pub struct GatewayState<S>
where
    S: Store,
{
    /// The record store.
    pub store: Arc<S>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl<S> GatewayState<S>
where
    S: Store,
{
    /// Create a new gateway state.
    #[must_use]
    pub fn new(store: Arc<S>, config: GatewayConfig) -> Self {
        Self { store, config }
    }
}

impl<S> Clone for GatewayState<S>
where
    S: Store,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}
