//! HTTP gateway for the Meridian HR site.
//!
//! This crate is the only consumer of the record store. It handles:
//!
//! - Contact-form submissions (`POST /api/inquiries`)
//! - Admin read access to stored inquiries (bearer token)
//! - Health reporting
//! - Serving the pre-built static site, when a directory is configured
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Browser (marketing page)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     meridian-gateway                         │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐   │
//! │  │   Admin     │ │   Router    │ │    Static site      │   │
//! │  │  Extractor  │ │  + Handlers │ │    fallback         │   │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       ┌─────────────┐
//!                       │ MemoryStore │
//!                       └─────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use meridian_gateway::{GatewayConfig, GatewayState, create_router};
//! use meridian_store::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let config = GatewayConfig::default();
//! let state = GatewayState::new(store, config);
//!
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ConfigError, GatewayConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::GatewayState;

pub use auth::AdminAccess;
