/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Server bridge for the Ubidots REST API
//!
//! The bridge owns the base URL and the session token header, and issues one
//! request per call through an [`HttpTransport`]. It returns raw responses:
//! retrying on auth failures and mapping statuses to errors are left to the
//! layers in [`crate::application::layers`].
//!
//! # Example
//! ```ignore
//! use ubidots_client::application::bridge::ServerBridge;
//! use ubidots_client::application::config::Config;
//!
//! let bridge = ServerBridge::from_config(&Config::with_api_key("my-key"))?;
//! let response = bridge.get("datasources/")?;
//! ```

use crate::application::config::Config;
use crate::constants::{API_KEY_HEADER, AUTH_TOKEN_PATH, CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE};
use crate::error::{AppError, ErrorKind};
use crate::model::auth::{Credential, TokenHeader, TokenResponse};
use crate::model::http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use reqwest::Method;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, error, info};

/// Capability to obtain a fresh session token
///
/// Called by the retry layer between attempts.
pub trait Reauthenticate {
    /// Re-authenticates, replacing the current session token
    fn initialize(&self) -> Result<(), AppError>;

    /// Whether [`Reauthenticate::initialize`] can obtain a new token at all
    fn can_reauthenticate(&self) -> bool {
        true
    }
}

/// Client bridge mediating every HTTP call to the Ubidots API
pub struct ServerBridge {
    base_url: String,
    api_key: Option<String>,
    token_header: RwLock<TokenHeader>,
    transport: Arc<dyn HttpTransport>,
}

impl ServerBridge {
    /// Creates a bridge, exchanging an API key for a token if needed
    ///
    /// # Arguments
    /// * `credential` - API key or pre-existing token
    /// * `base_url` - Base URL, paths are appended to it verbatim
    /// * `transport` - Transport performing the network I/O
    ///
    /// # Returns
    /// * `Ok(ServerBridge)` - Bridge holding a session token header
    /// * `Err(AppError)` - If the token exchange fails
    pub fn new(
        credential: Credential,
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, AppError> {
        let base_url = base_url.into();

        let (api_key, token_header) = match credential {
            Credential::ApiKey(key) => {
                let header = request_token(transport.as_ref(), &base_url, &key)?;
                (Some(key), header)
            }
            Credential::Token(token) => (None, TokenHeader::new(token)),
        };

        Ok(Self {
            base_url,
            api_key,
            token_header: RwLock::new(token_header),
            transport,
        })
    }

    /// Creates a bridge over a `reqwest` transport from configuration
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let credential = config.credentials.credential()?;
        let transport = ReqwestTransport::new(Duration::from_secs(config.rest_api.timeout))?;
        Self::new(credential, config.rest_api.base_url.clone(), Arc::new(transport))
    }

    /// Base URL every path is appended to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Snapshot of the current token header
    #[must_use]
    pub fn token_header(&self) -> TokenHeader {
        self.token_header
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Exchanges the API key for a new session token
    ///
    /// The token header is replaced in one assignment once the new token is
    /// known; on failure the previous header is kept.
    ///
    /// # Returns
    /// * `Ok(())` - The new token is in place
    /// * `Err(AppError::Config)` - The bridge was built from a token and holds no API key
    /// * `Err(AppError)` - The token exchange failed
    pub fn initialize(&self) -> Result<(), AppError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AppError::Config(
                "cannot re-authenticate without an API key".to_string(),
            ));
        };

        let header = request_token(self.transport.as_ref(), &self.base_url, api_key)?;
        *self
            .token_header
            .write()
            .unwrap_or_else(PoisonError::into_inner) = header;
        Ok(())
    }

    /// Sends a GET request to `base_url + path`
    pub fn get(&self, path: &str) -> Result<HttpResponse, AppError> {
        self.send(HttpRequest::new(Method::GET, self.url(path)))
    }

    /// Sends a POST request to `base_url + path` with `data` serialized as JSON
    pub fn post<T: Serialize + ?Sized>(&self, path: &str, data: &T) -> Result<HttpResponse, AppError> {
        let body = serde_json::to_string(data)?;
        self.send(HttpRequest::new(Method::POST, self.url(path)).body(body))
    }

    /// Sends a DELETE request to `base_url + path`
    pub fn delete(&self, path: &str) -> Result<HttpResponse, AppError> {
        self.send(HttpRequest::new(Method::DELETE, self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        let header = self.token_header();
        let request = request
            .header(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE)
            .header(header.name(), header.token());

        debug!("{} {}", request.method, request.url);
        let response = self.transport.send(request)?;
        debug!("Response status: {}", response.status);
        Ok(response)
    }
}

impl Reauthenticate for ServerBridge {
    fn initialize(&self) -> Result<(), AppError> {
        ServerBridge::initialize(self)
    }

    fn can_reauthenticate(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for ServerBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerBridge")
            .field("base_url", &self.base_url)
            .field("renewable", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

/// Performs the `auth/token` exchange
fn request_token(
    transport: &dyn HttpTransport,
    base_url: &str,
    api_key: &str,
) -> Result<TokenHeader, AppError> {
    let url = format!("{base_url}{AUTH_TOKEN_PATH}");
    info!("Requesting session token");
    debug!("POST {}", url);

    let request = HttpRequest::new(Method::POST, url)
        .header(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE)
        .header(API_KEY_HEADER, api_key);

    let response = transport.send(request)?;
    if !response.is_success() {
        error!(
            "Token request failed with status {}: {}",
            response.status, response.body
        );
        let status = response.status;
        return Err(ErrorKind::for_status(status)
            .map(|kind| kind.into_error(status))
            .unwrap_or(AppError::Unauthorized(status)));
    }

    let parsed: TokenResponse = serde_json::from_str(&response.body)
        .map_err(|e| AppError::Deserialization(format!("invalid token response: {e}")))?;

    info!("✓ Session token obtained");
    Ok(TokenHeader::new(parsed.token))
}
