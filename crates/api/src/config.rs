//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TOOLSHED_HOST` - Bind address (default: 127.0.0.1)
//! - `TOOLSHED_PORT` - Listen port (default: 8080)
//! - `TOOLSHED_CONTENT_DIR` - Catalog content directory
//!   (default: crates/api/content)
//! - `JWT_SECRET` - Token signing secret. Falls back to a hard-coded
//!   development string when unset; a warning is logged on fallback and on
//!   weak values, but startup never fails on either.
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Signing secret used when `JWT_SECRET` is not configured.
///
/// Startup must not fail on a missing secret, only warn. Do not rely on
/// this outside development.
const FALLBACK_JWT_SECRET: &str = "toolshed-dev-secret-do-not-use-in-production";

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the catalog content files
    pub content_dir: PathBuf,
    /// Token signing secret
    pub jwt_secret: SecretString,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("content_dir", &self.content_dir)
            .field("jwt_secret", &"[REDACTED]")
            .field("sentry_dsn", &self.sentry_dsn)
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse. A missing
    /// `JWT_SECRET` is NOT an error - see [`FALLBACK_JWT_SECRET`].
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("TOOLSHED_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("TOOLSHED_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("TOOLSHED_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("TOOLSHED_PORT".to_string(), e.to_string()))?;
        let content_dir =
            PathBuf::from(get_env_or_default("TOOLSHED_CONTENT_DIR", "crates/api/content"));
        let jwt_secret = load_jwt_secret();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            content_dir,
            jwt_secret,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Log warnings for insecure JWT secret configuration.
    ///
    /// The strength checks that would normally reject a weak secret
    /// outright are demoted to warnings so a missing or weak secret never
    /// prevents startup. Split from [`Self::from_env`] because
    /// configuration loads before the tracing subscriber is installed.
    pub fn log_secret_warnings(&self) {
        let secret = self.jwt_secret.expose_secret();
        if secret == FALLBACK_JWT_SECRET {
            tracing::warn!(
                "JWT_SECRET is not set; falling back to the built-in development secret"
            );
        } else if let Err(reason) = check_secret_strength(secret) {
            tracing::warn!("JWT_SECRET looks weak: {reason}");
        }
    }
}

/// Load the JWT secret, falling back instead of failing when unset.
fn load_jwt_secret() -> SecretString {
    std::env::var("JWT_SECRET").map_or_else(
        |_| SecretString::from(FALLBACK_JWT_SECRET),
        SecretString::from,
    )
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Check whether a secret is a placeholder or low-entropy value.
fn check_secret_strength(secret: &str) -> Result<(), String> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(format!("appears to be a placeholder (contains '{pattern}')"));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(format!(
            "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
        ));
    }

    Ok(())
}
