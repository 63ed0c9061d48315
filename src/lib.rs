/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Ubidots Client
//!
//! A credential-managed client bridge for the Ubidots REST API.
//!
//! The crate centralizes what every call site would otherwise repeat:
//!
//! - obtaining a session token from an API key and attaching it to every request
//! - re-authenticating and retrying when the server rejects the token
//! - turning failing status codes into typed [`error::AppError`] variants
//! - validating payload shapes before anything is sent
//!
//! The [`application::bridge::ServerBridge`] issues raw requests through a
//! pluggable [`model::http::HttpTransport`]. The layers in
//! [`application::layers`] wrap bridge calls and stack in an explicit order,
//! and [`application::client::ApiClient`] applies them to the common endpoints.
//!
//! ## Example
//!
//! ```ignore
//! use ubidots_client::prelude::*;
//!
//! setup_logger();
//! let client = ApiClient::from_config(&Config::new())?;
//! let sources = client.datasources()?;
//! ```

/// Bridge, layers, configuration and client
pub mod application;
/// Crate-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Data types shared by the bridge and the layers
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
