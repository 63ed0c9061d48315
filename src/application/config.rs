use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::model::auth::Credential;
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the Ubidots API
///
/// Exactly one of the two must be set to build a bridge. Neither value is
/// serialized, so they never show up in `Debug` or `Display` output.
pub struct Credentials {
    /// Account API key, exchanged for a session token
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Pre-existing session token
    #[serde(skip_serializing)]
    pub token: Option<String>,
}

impl Credentials {
    /// Resolves the configured credential
    ///
    /// # Returns
    /// * `Ok(Credential)` - When exactly one of `api_key` and `token` is set
    /// * `Err(AppError::Config)` - When both or neither are set
    pub fn credential(&self) -> Result<Credential, AppError> {
        match (&self.api_key, &self.token) {
            (Some(key), None) => Ok(Credential::ApiKey(key.clone())),
            (None, Some(token)) => Ok(Credential::Token(token.clone())),
            (Some(_), Some(_)) => Err(AppError::Config(
                "both an API key and a token were supplied, expected exactly one".to_string(),
            )),
            (None, None) => Err(AppError::Config(
                "either an API key or a token is required".to_string(),
            )),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL, request paths are appended to it verbatim
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Ubidots client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Auth-failure retry configuration
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// Loads `.env` first, then reads `UBIDOTS_API_KEY`, `UBIDOTS_TOKEN`,
    /// `UBIDOTS_BASE_URL`, `UBIDOTS_TIMEOUT`, `UBIDOTS_MAX_ATTEMPTS` and
    /// `UBIDOTS_AUTH_FAILURE_CODES`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = non_empty(get_env_or_none::<String>("UBIDOTS_API_KEY"));
        let token = non_empty(get_env_or_none::<String>("UBIDOTS_TOKEN"));

        if api_key.is_none() && token.is_none() {
            error!("Neither UBIDOTS_API_KEY nor UBIDOTS_TOKEN found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { api_key, token },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("UBIDOTS_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("UBIDOTS_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            retry: RetryConfig::default(),
        }
    }

    /// Creates a configuration for an API key against the default base URL
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::from_credentials(Credentials {
            api_key: Some(api_key.into()),
            token: None,
        })
    }

    /// Creates a configuration for a session token against the default base URL
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::from_credentials(Credentials {
            api_key: None,
            token: Some(token.into()),
        })
    }

    /// Overrides the base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    fn from_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
