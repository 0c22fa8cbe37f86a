use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// User directory API base URL
    pub user_api_url: String,

    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable source, applying defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            user_api_url: lookup("USER_API_URL")
                .unwrap_or_else(|| "https://jsonplaceholder.typicode.com".to_string()),

            request_timeout_secs: parse_var(
                "REQUEST_TIMEOUT_SECS",
                lookup("REQUEST_TIMEOUT_SECS"),
                30,
            )?,

            connect_timeout_secs: parse_var(
                "CONNECT_TIMEOUT_SECS",
                lookup("CONNECT_TIMEOUT_SECS"),
                10,
            )?,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Create a test configuration
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            user_api_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 1,
        }
    }
}

/// Parse an optional variable, rejecting values that do not parse
fn parse_var<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} is not a valid number: {}", name, raw))),
        None => Ok(default),
    }
}
