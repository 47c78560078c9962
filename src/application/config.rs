/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_required_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Placeholder printed instead of the API key
const REDACTED: &str = "***";

#[derive(Serialize, Deserialize, Clone, PartialEq)]
/// Credentials identifying the application on the Base44 platform.
///
/// `Debug` and `Display` print the API key as `***`.
pub struct Credentials {
    /// API key sent in the `api_key` header
    pub api_key: String,
    /// Identifier of the hosted application whose entities are addressed
    pub app_id: String,
}

impl Credentials {
    fn redacted(&self) -> Value {
        json!({ "api_key": REDACTED, "app_id": self.app_id })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pretty(f, &self.redacted())
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

fn write_pretty(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    let text = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
    f.write_str(&text)
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the REST API, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl RestApiConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Base44 client
pub struct Config {
    /// Application credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    fn redacted(&self) -> Value {
        json!({
            "credentials": self.credentials.redacted(),
            "rest_api": {
                "base_url": self.rest_api.base_url,
                "timeout": self.rest_api.timeout,
            },
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pretty(f, &self.redacted())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment.
    ///
    /// A `.env` file in the working directory is loaded first. Recognised
    /// variables: `BASE44_API_KEY`, `BASE44_APP_ID`, `BASE44_REST_BASE_URL`
    /// and `BASE44_REST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url: String =
            get_env_or_default("BASE44_REST_BASE_URL", DEFAULT_BASE_URL.to_string());

        Config {
            credentials: Credentials {
                api_key: get_required_env("BASE44_API_KEY", "default_api_key"),
                app_id: get_required_env("BASE44_APP_ID", "default_app_id"),
            },
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: get_env_or_default("BASE44_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Builds a configuration with explicit credentials and default REST
    /// settings, without reading the environment
    pub fn with_credentials(api_key: impl Into<String>, app_id: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
                app_id: app_id.into(),
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Replaces the base URL, e.g. to point at a staging host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }
}
