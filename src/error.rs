/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types for the Ubidots client
//!
//! Every fallible operation in the crate returns [`AppError`]. Status-mapped
//! errors carry the offending [`StatusCode`] and can be classified with
//! [`AppError::kind`].

use reqwest::StatusCode;
use std::fmt;

/// Classification of a failing HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The session token is missing, expired or rejected (401, 403)
    Authentication,
    /// Any other 4xx status
    Client,
    /// Any 5xx status
    Server,
}

impl ErrorKind {
    /// Classifies a status code by its class, `None` for non-error statuses
    #[must_use]
    pub fn for_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Some(Self::Authentication),
            s if s.is_client_error() => Some(Self::Client),
            s if s.is_server_error() => Some(Self::Server),
            _ => None,
        }
    }

    /// Builds the typed error for this kind carrying `status`
    #[must_use]
    pub fn into_error(self, status: StatusCode) -> AppError {
        match self {
            Self::Authentication => AppError::Unauthorized(status),
            Self::Client => AppError::ClientError(status),
            Self::Server => AppError::ServerError(status),
        }
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Authentication failure reported by the server
    Unauthorized(StatusCode),
    /// Client-side failure (4xx)
    ClientError(StatusCode),
    /// Server-side failure (5xx)
    ServerError(StatusCode),
    /// Caller-supplied payload does not match the required shape
    InvalidInput(String),
    /// Missing or conflicting configuration
    Config(String),
    /// Network failure raised by reqwest
    Network(reqwest::Error),
    /// Failure raised by a non-reqwest transport
    Transport(String),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Response body is valid JSON but not what was expected
    Deserialization(String),
    /// I/O failure
    Io(std::io::Error),
}

impl AppError {
    /// Status code carried by a status-mapped error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized(s) | Self::ClientError(s) | Self::ServerError(s) => Some(*s),
            _ => None,
        }
    }

    /// Error kind of a status-mapped error
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Unauthorized(_) => Some(ErrorKind::Authentication),
            Self::ClientError(_) => Some(ErrorKind::Client),
            Self::ServerError(_) => Some(ErrorKind::Server),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized(s) => write!(f, "unauthorized: {s}"),
            Self::ClientError(s) => write!(f, "client error: {s}"),
            Self::ServerError(s) => write!(f, "server error: {s}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
