//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Path prefix under which the versioned API is mounted
pub const API_BASE_PATH: &str = "/api/v1";

pub const DEFAULT_PORT: u16 = 3000;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "jobtrack=debug,tower_http=info";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HS256 secret used to verify bearer tokens
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,

    /// PostgreSQL connection URL; jobs are kept in memory when unset
    pub database_url: Option<String>,

    /// Externally visible API base URL, advertised in the API descriptor
    pub public_api_url: String,

    /// `tracing_subscriber::EnvFilter` directives
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let port = parse_port(env::var("PORT").ok().as_deref());

        let config = Self {
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,
            jwt_issuer: non_empty(env::var("JWT_ISSUER").ok()),
            jwt_audience: non_empty(env::var("JWT_AUDIENCE").ok()),

            database_url: non_empty(env::var("DATABASE_URL").ok()),

            public_api_url: resolve_public_api_url(env::var("PUBLIC_API_URL").ok(), port),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            port,
        };

        if config.jwt_secret.trim().is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        Ok(config)
    }

    /// The advertised API URL alone, without the settings a server needs.
    ///
    /// Same `PUBLIC_API_URL` / `PORT` resolution as [`Config::from_env`].
    pub fn public_api_url_from_env() -> String {
        dotenvy::dotenv().ok();
        let port = parse_port(env::var("PORT").ok().as_deref());
        resolve_public_api_url(env::var("PUBLIC_API_URL").ok(), port)
    }
}

fn resolve_public_api_url(explicit: Option<String>, port: u16) -> String {
    non_empty(explicit).unwrap_or_else(|| default_public_api_url(port))
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Default externally visible API URL for a given port
pub fn default_public_api_url(port: u16) -> String {
    format!("http://localhost:{}{}", port, API_BASE_PATH)
}
