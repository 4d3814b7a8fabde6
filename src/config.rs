//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://urls.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public prefix of short links (default: `http://localhost:3000/`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `CODE_LENGTH` - Generated code length (default: 6)
//! - `CODE_MAX_ATTEMPTS` - Collision retries before giving up (default: 5)
//! - `STRICT_CUSTOM_CODES` - Require custom codes to look like generated ones (default: false)
//! - `QR_BOX_SIZE` / `QR_BORDER` - QR image geometry (default: 10 / 5)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::application::services::AllocationPolicy;
use crate::application::services::code_allocator::DEFAULT_MAX_ATTEMPTS;
use crate::infrastructure::imaging::QrRenderer;
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Prefix joined with a short code to form the public link. Always ends in `/`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,

    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds.
    pub db_connect_timeout: u64,

    pub code_length: usize,
    pub code_max_attempts: usize,
    pub strict_custom_codes: bool,

    pub qr_box_size: usize,
    pub qr_border: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://urls.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000/".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
            code_length: DEFAULT_CODE_LENGTH,
            code_max_attempts: DEFAULT_MAX_ATTEMPTS,
            strict_custom_codes: false,
            qr_box_size: QrRenderer::DEFAULT_BOX_SIZE,
            qr_border: QrRenderer::DEFAULT_BORDER,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let base_url = env::var("BASE_URL").unwrap_or(defaults.base_url);

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            base_url: with_trailing_slash(base_url),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", defaults.db_connect_timeout)?,
            code_length: parse_var("CODE_LENGTH", defaults.code_length)?,
            code_max_attempts: parse_var("CODE_MAX_ATTEMPTS", defaults.code_max_attempts)?,
            strict_custom_codes: env::var("STRICT_CUSTOM_CODES")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.strict_custom_codes),
            qr_box_size: parse_var("QR_BOX_SIZE", defaults.qr_box_size)?,
            qr_border: parse_var("QR_BORDER", defaults.qr_border)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base_url = self.parsed_base_url()?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("BASE_URL must be an absolute URL, got '{}'", self.base_url);
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if !(1..=100).contains(&self.code_max_attempts) {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        if !(1..=QrRenderer::MAX_BOX_SIZE).contains(&self.qr_box_size) {
            anyhow::bail!(
                "QR_BOX_SIZE must be between 1 and {}, got {}",
                QrRenderer::MAX_BOX_SIZE,
                self.qr_box_size
            );
        }

        if self.qr_border > QrRenderer::MAX_BORDER {
            anyhow::bail!(
                "QR_BORDER must be at most {}, got {}",
                QrRenderer::MAX_BORDER,
                self.qr_border
            );
        }

        Ok(())
    }

    /// Parses [`Config::base_url`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a valid URL.
    pub fn parsed_base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout)
    }

    pub fn allocation_policy(&self) -> AllocationPolicy {
        AllocationPolicy {
            code_length: self.code_length,
            max_attempts: self.code_max_attempts,
            strict_custom_codes: self.strict_custom_codes,
        }
    }

    pub fn qr_renderer(&self) -> QrRenderer {
        QrRenderer::new(self.qr_box_size, self.qr_border)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Codes: length {}, {} attempts, strict custom codes: {}",
            self.code_length,
            self.code_max_attempts,
            self.strict_custom_codes
        );
    }
}

/// Reads and parses an optional variable.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
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
