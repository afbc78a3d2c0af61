use crate::error::{Result as ServerErrorResult, ServerError};

use kg_auth::DEFAULT_TOKEN_TTL_SECS;

use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// HS256 signing secret for access tokens
    pub jwt_secret: String,

    /// Access-token lifetime (default: 3600s)
    pub token_ttl: Duration,

    /// Log level (default: info)
    pub log_level: String,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let config = Self {
            bind_addr,

            jwt_secret: std::env::var("JWT_SECRET").unwrap_or_default(),

            token_ttl: Duration::from_secs(
                std::env::var("TOKEN_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            ),

            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration.
    ///
    /// A missing or empty `JWT_SECRET` is a startup fault; there is no
    /// fallback secret.
    fn validate(&self) -> ServerErrorResult<()> {
        if self.jwt_secret.is_empty() {
            return Err(ServerError::MissingJwtSecret);
        }

        Ok(())
    }
}
