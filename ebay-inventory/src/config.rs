//! Configuration loading from environment variables
//!
//! The credential is static: it is read once when a [`Config`] is built and
//! attached unchanged to every request made with it.

use std::{env, fmt, str::FromStr};

use thiserror::Error;

/// Production endpoint of the eBay Sell Inventory API, item ID appended.
pub const DEFAULT_BASE_URL: &str = "https://api.ebay.com/sell/inventory/v1/inventory_item/";

/// Transport timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ACCESS_TOKEN_VAR: &str = "EBAY_ACCESS_TOKEN";
pub const BASE_URL_VAR: &str = "EBAY_INVENTORY_URL";
pub const TIMEOUT_VAR: &str = "EBAY_HTTP_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable '{0}'")]
    Missing(String),
    #[error("invalid value '{value}' for environment variable '{key}'")]
    Invalid { key: String, value: String },
}

/// Load environment variables from a `.env` file if one exists.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub access_token: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Config for the production endpoint with the given bearer token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the config from the process environment.
    ///
    /// `EBAY_ACCESS_TOKEN` is required; `EBAY_INVENTORY_URL` and
    /// `EBAY_HTTP_TIMEOUT_SECS` fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup(ACCESS_TOKEN_VAR)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::Missing(ACCESS_TOKEN_VAR.to_string()))?;

        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(value) => parse_var(TIMEOUT_VAR, value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            access_token,
            timeout_secs,
        })
    }
}

fn parse_var<T: FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value,
    })
}

// keep the token out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup(&[(ACCESS_TOKEN_VAR, "token")])).unwrap();
        assert_eq!(config, Config::new("token"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ACCESS_TOKEN_VAR, "token"),
            (BASE_URL_VAR, "http://localhost:8080/inventory_item"),
            (TIMEOUT_VAR, " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/inventory_item");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_missing_token() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(ACCESS_TOKEN_VAR.to_string()));

        let err = Config::from_lookup(lookup(&[(ACCESS_TOKEN_VAR, "")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(ACCESS_TOKEN_VAR.to_string()));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[(ACCESS_TOKEN_VAR, "token"), (TIMEOUT_VAR, "abc")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value 'abc' for environment variable 'EBAY_HTTP_TIMEOUT_SECS'"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", Config::new("secret-token"));
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
