//! Gateway configuration types.
//!
//! Configuration comes from environment variables; every setting has a
//! default so the gateway starts with no environment at all.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue {
        /// The environment variable name.
        name: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Configuration for the gateway service.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listen address (e.g., "0.0.0.0:8080").
    pub listen_addr: String,

    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Bearer token for the admin endpoints. Unset disables them.
    pub admin_token: Option<String>,

    /// Directory holding the built marketing site.
    pub site_dir: Option<PathBuf>,
}

impl GatewayConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:8080".to_string()
    }

    const fn default_max_body() -> usize {
        64 * 1024 // 64 KiB, plenty for a contact form
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    /// Load configuration from the process environment.
    ///
    /// Reads `LISTEN_ADDR`, `CORS_ORIGINS`, `MAX_BODY_BYTES`,
    /// `REQUEST_TIMEOUT_SECONDS`, `ADMIN_TOKEN` and `SITE_DIR`.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a valid number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration using `lookup` to resolve variable names.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a valid number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let cors_origins = get("CORS_ORIGINS").map_or(defaults.cors_origins, |raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect()
        });

        Ok(Self {
            listen_addr: get("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            cors_origins,
            max_body_bytes: parse_number("MAX_BODY_BYTES", get("MAX_BODY_BYTES"))?
                .unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: parse_number(
                "REQUEST_TIMEOUT_SECONDS",
                get("REQUEST_TIMEOUT_SECONDS"),
            )?
            .unwrap_or(defaults.request_timeout_seconds),
            admin_token: get("ADMIN_TOKEN"),
            site_dir: get("SITE_DIR").map(PathBuf::from),
        })
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            cors_origins: vec!["*".to_string()],
            max_body_bytes: Self::default_max_body(),
            request_timeout_seconds: Self::default_request_timeout(),
            admin_token: None,
            site_dir: None,
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name, value: v })
        })
        .transpose()
}
