//! # Client configuration — `client.toml`
//!
//! Each frontend binary embeds a small TOML file that decides which
//! authenticator backs the sign-in screen and how chatty logging is.
//!
//! ```toml
//! [auth]
//! backend = "http"                  # "http" | "memory"
//! base_url = "http://localhost:8080"
//!
//! [[auth.accounts]]                 # only read by the memory backend
//! email = "customer@example.com"
//! password = "password"
//! role = "customer"
//!
//! [log]
//! level = "info"
//! ```
//!
//! All structs derive `Default` so that a missing section, or an empty file,
//! is equivalent to the default configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Role;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `client.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Which authenticator to use and where it lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub backend: AuthBackend,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Accounts served by the memory backend.
    #[serde(default)]
    pub accounts: Vec<DemoAccount>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthBackend {
    #[default]
    Http,
    Memory,
}

/// A fixed account for the memory backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoAccount {
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub suspended: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            backend: AuthBackend::default(),
            base_url: default_base_url(),
            accounts: Vec::new(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("{}; using defaults", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.auth.backend, AuthBackend::Http);
        assert_eq!(config.auth.base_url, "http://localhost:8080");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_memory_backend_with_accounts() {
        let config = ClientConfig::from_toml(
            r#"
            [auth]
            backend = "memory"

            [[auth.accounts]]
            email = "chef@example.com"
            password = "password"
            role = "restaurant"
            name = "Bistro"

            [[auth.accounts]]
            email = "late@example.com"
            password = "password"
            role = "delivery"
            suspended = true

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.backend, AuthBackend::Memory);
        assert_eq!(config.auth.base_url, "http://localhost:8080");
        assert_eq!(config.auth.accounts.len(), 2);
        assert_eq!(config.auth.accounts[0].role, Role::Restaurant);
        assert_eq!(config.auth.accounts[0].name.as_deref(), Some("Bistro"));
        assert!(!config.auth.accounts[0].suspended);
        assert!(config.auth.accounts[1].suspended);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = ClientConfig::from_toml(
            r#"
            [[auth.accounts]]
            email = "a@example.com"
            password = "x"
            role = "admin"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid client configuration"));
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let config = ClientConfig::from_toml_or_default("[auth\nbackend = 3");
        assert_eq!(config, ClientConfig::default());
    }
}
