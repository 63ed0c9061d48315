/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! HTTP transport abstraction
//!
//! The bridge never talks to the network directly: it builds an [`HttpRequest`]
//! and hands it to an [`HttpTransport`]. [`ReqwestTransport`] is the production
//! implementation; tests plug in their own.

use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::blocking::Client;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// A request to be sent by an [`HttpTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Fully-qualified URL
    pub url: String,
    /// Header name/value pairs, in insertion order
    pub headers: Vec<(String, String)>,
    /// Optional body, already serialized
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a request without headers or body
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Looks up a header value, ignoring the case of the name
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response returned by an [`HttpTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Creates a response
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Numeric status code
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decodes the body as JSON
    ///
    /// An empty body decodes as JSON `null`, which is what `DELETE` endpoints return.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        if self.body.trim().is_empty() {
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Anything exposing an HTTP status the layers can inspect
pub trait HasStatus {
    /// Status of the response
    fn status(&self) -> StatusCode;
}

impl HasStatus for HttpResponse {
    fn status(&self) -> StatusCode {
        self.status
    }
}

/// Pluggable transport performing the actual network I/O
///
/// Implementations issue exactly one request per call and never retry.
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns the response, whatever its status
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError>;
}

/// Blocking [`HttpTransport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest` client
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text()?;
        Ok(HttpResponse::new(status, body))
    }
}
