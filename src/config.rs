//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `TOKEN_SIGNING_SECRET` - HMAC key for session tokens; set per deployment
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TOKEN_TTL_SECONDS` - Session token lifetime (default: 3600, range: 60..=604800)
//! - `BOOKS_FILE` - Path to a JSON catalog replacing the bundled one

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;
pub const MIN_TOKEN_TTL_SECONDS: i64 = 60;
pub const MAX_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 3600;

/// Secrets shorter than this are accepted with a warning.
const RECOMMENDED_SECRET_LEN: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HMAC signing secret for session tokens. Must be non-empty.
    pub token_signing_secret: String,
    pub token_ttl_seconds: i64,
    /// Catalog file loaded instead of the bundled catalog.
    pub books_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TOKEN_SIGNING_SECRET` is not set or
    /// `TOKEN_TTL_SECONDS` is not an integer.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let token_signing_secret =
            env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

        let token_ttl_seconds = match env::var("TOKEN_TTL_SECONDS") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("TOKEN_TTL_SECONDS must be an integer, got '{v}'"))?,
            Err(_) => DEFAULT_TOKEN_TTL_SECONDS,
        };

        let books_file = env::var("BOOKS_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            token_signing_secret,
            token_ttl_seconds,
            books_file,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `token_signing_secret` is empty
    /// - `token_ttl_seconds` is outside 60..=604800
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.token_signing_secret.is_empty() {
            anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
        }

        if !(MIN_TOKEN_TTL_SECONDS..=MAX_TOKEN_TTL_SECONDS).contains(&self.token_ttl_seconds) {
            anyhow::bail!(
                "TOKEN_TTL_SECONDS must be between {} and {}, got {}",
                MIN_TOKEN_TTL_SECONDS,
                MAX_TOKEN_TTL_SECONDS,
                self.token_ttl_seconds
            );
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.token_ttl_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Token TTL: {}s", self.token_ttl_seconds);

        match &self.books_file {
            Some(path) => tracing::info!("  Catalog: {}", path.display()),
            None => tracing::info!("  Catalog: bundled"),
        }

        if self.token_signing_secret.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                "TOKEN_SIGNING_SECRET is shorter than {} bytes",
                RECOMMENDED_SECRET_LEN
            );
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
