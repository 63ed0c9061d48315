/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_AUTH_FAILURE_CODES, DEFAULT_MAX_ATTEMPTS};
use crate::utils::config::{get_env_list, get_env_or_none};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Configuration for the auth-failure retry layer
///
/// A response whose status is one of `auth_failure_codes` triggers a
/// re-authentication followed by a new attempt, up to `max_attempts` calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of calls, including the first (None = default of 2)
    pub max_attempt_count: Option<u32>,
    /// Status codes signalling an expired or rejected session
    pub auth_failure_codes: Vec<u16>,
}

impl RetryConfig {
    /// Creates a retry configuration from the environment, see [`Default`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with `max_attempts` calls and the default 401/403 codes
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempt_count: Some(max_attempts),
            auth_failure_codes: DEFAULT_AUTH_FAILURE_CODES.to_vec(),
        }
    }

    /// Creates a configuration with custom auth-failure codes and attempt count
    #[must_use]
    pub fn with_codes_and_max_attempts(codes: &[u16], max_attempts: u32) -> Self {
        Self {
            max_attempt_count: Some(max_attempts),
            auth_failure_codes: codes.to_vec(),
        }
    }

    /// Gets the maximum number of calls, never less than 1
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempt_count.unwrap_or(DEFAULT_MAX_ATTEMPTS).max(1)
    }

    /// Whether `status` signals an expired or rejected session
    #[must_use]
    pub fn is_auth_failure(&self, status: StatusCode) -> bool {
        self.auth_failure_codes.contains(&status.as_u16())
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let max_attempt_count: Option<u32> = get_env_or_none("UBIDOTS_MAX_ATTEMPTS");
        let auth_failure_codes = get_env_list("UBIDOTS_AUTH_FAILURE_CODES")
            .unwrap_or_else(|| DEFAULT_AUTH_FAILURE_CODES.to_vec());

        Self {
            max_attempt_count,
            auth_failure_codes,
        }
    }
}
