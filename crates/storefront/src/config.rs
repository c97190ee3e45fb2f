//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TAMARIND_DOCSTORE_URL` - Base URL of the hosted document store
//! - `TAMARIND_DOCSTORE_API_KEY` - Document store API key
//! - `TAMARIND_IDENTITY_URL` - Base URL of the hosted identity provider
//! - `TAMARIND_IDENTITY_API_KEY` - Identity provider API key
//!
//! ## Optional
//! - `TAMARIND_CART_DIR` - Directory for the cart storage slot
//!   (default: `.tamarind`)
//! - `TAMARIND_SHIPPING_FEE` - Flat shipping fee for non-empty carts
//!   (default: 5)

use std::path::PathBuf;

use rust_decimal::Decimal;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use tamarind_core::Price;

/// Default flat shipping fee applied to non-empty carts.
const DEFAULT_SHIPPING_FEE: &str = "5";

/// Default directory for the cart storage slot.
const DEFAULT_CART_DIR: &str = ".tamarind";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Hosted document store configuration.
    pub docstore: DocstoreConfig,
    /// Hosted identity provider configuration.
    pub identity: IdentityConfig,
    /// Directory holding the cart storage slot.
    pub cart_dir: PathBuf,
    /// Flat shipping fee for non-empty carts.
    pub shipping_fee: Price,
}

/// Document store connection configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct DocstoreConfig {
    /// Base URL of the document store REST API.
    pub endpoint: Url,
    /// API key sent with every request.
    pub api_key: SecretString,
}

impl std::fmt::Debug for DocstoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocstoreConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Identity provider connection configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct IdentityConfig {
    /// Base URL of the identity provider REST API.
    pub endpoint: Url,
    /// API key sent with every request.
    pub api_key: SecretString,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let docstore = DocstoreConfig {
            endpoint: get_url("TAMARIND_DOCSTORE_URL")?,
            api_key: get_required_secret("TAMARIND_DOCSTORE_API_KEY")?,
        };

        let identity = IdentityConfig {
            endpoint: get_url("TAMARIND_IDENTITY_URL")?,
            api_key: get_required_secret("TAMARIND_IDENTITY_API_KEY")?,
        };

        let cart_dir =
            PathBuf::from(get_env_or_default("TAMARIND_CART_DIR", DEFAULT_CART_DIR));

        let shipping_fee = parse_decimal(
            "TAMARIND_SHIPPING_FEE",
            &get_env_or_default("TAMARIND_SHIPPING_FEE", DEFAULT_SHIPPING_FEE),
        )
        .map(Price::new)?;

        Ok(Self {
            docstore,
            identity,
            cart_dir,
            shipping_fee,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a required environment variable parsed as a URL.
fn get_url(key: &str) -> Result<Url, ConfigError> {
    let value = get_required_env(key)?;
    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a decimal amount, attributing failures to the variable name.
fn parse_decimal(key: &str, value: &str) -> Result<Decimal, ConfigError> {
    value
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_valid() {
        assert_eq!(
            parse_decimal("TEST_FEE", "5").unwrap(),
            Decimal::from(5)
        );
        assert_eq!(
            parse_decimal("TEST_FEE", "4.99").unwrap(),
            Decimal::new(499, 2)
        );
    }

    #[test]
    fn test_parse_decimal_invalid() {
        let err = parse_decimal("TEST_FEE", "free").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "TEST_FEE"));
    }

    #[test]
    fn test_docstore_config_debug_redacts_api_key() {
        let config = DocstoreConfig {
            endpoint: Url::parse("https://docstore.example.com").unwrap(),
            api_key: SecretString::from("super_secret_key"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("docstore.example.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_key"));
    }

    #[test]
    fn test_identity_config_debug_redacts_api_key() {
        let config = IdentityConfig {
            endpoint: Url::parse("https://identity.example.com").unwrap(),
            api_key: SecretString::from("another_secret"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("identity.example.com"));
        assert!(!debug_output.contains("another_secret"));
    }
}
