/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::AUTH_TOKEN_HEADER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential used to build a bridge
///
/// An API key is exchanged for a session token at construction and again on
/// every re-authentication. A token is used as-is and cannot be renewed.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Raw account API key
    ApiKey(String),
    /// Pre-existing session token
    Token(String),
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::Token(_) => f.write_str("Token(***)"),
        }
    }
}

/// The `X-AUTH-TOKEN` header attached to every data request
#[derive(Clone, PartialEq, Eq)]
pub struct TokenHeader {
    token: String,
}

impl TokenHeader {
    /// Wraps a session token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Header name
    #[must_use]
    pub fn name(&self) -> &'static str {
        AUTH_TOKEN_HEADER
    }

    /// Session token
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for TokenHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenHeader")
            .field("name", &AUTH_TOKEN_HEADER)
            .finish_non_exhaustive()
    }
}

/// Body of a successful `auth/token` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Freshly issued session token
    pub token: String,
}
