//! Server configuration
//!
//! Read from Shuttle secrets at startup:
//! - `CORS_ALLOWED_ORIGINS`: comma-separated origins; unset, empty or `*` allows any
//! - `SWAGGER_ENABLED`: `true` / `false` (default `true`)

use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;
use shuttle_runtime::SecretStore;
use tower_http::cors::{AllowOrigin, CorsLayer};

const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
const SWAGGER_ENABLED: &str = "SWAGGER_ENABLED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Empty means any origin
    pub cors_allowed_origins: Vec<String>,
    pub swagger_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: Vec::new(),
            swagger_enabled: true,
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup (secrets, env, test maps)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_allowed_origins = lookup(CORS_ALLOWED_ORIGINS)
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let swagger_enabled = match lookup(SWAGGER_ENABLED) {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("Invalid value for {}", SWAGGER_ENABLED))?,
            None => true,
        };

        Ok(Self {
            cors_allowed_origins,
            swagger_enabled,
        })
    }

    /// CORS layer for the configured origins
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        if self.cors_allowed_origins.is_empty() {
            return Ok(CorsLayer::permissive());
        }

        let origins = self
            .cors_allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorsLayer::permissive().allow_origin(AllowOrigin::list(origins)))
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("expected true or false, got '{}'", other),
    }
}
