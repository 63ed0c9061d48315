/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Ubidots Client Prelude
//!
//! ```rust
//! use ubidots_client::prelude::*;
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and status classification
pub use crate::error::{AppError, ErrorKind};

// ============================================================================
// BRIDGE AND CLIENT
// ============================================================================

/// Server bridge and re-authentication capability
pub use crate::application::bridge::{Reauthenticate, ServerBridge};

/// Guarded API client
pub use crate::application::client::ApiClient;

// ============================================================================
// LAYERS
// ============================================================================

/// Composable layers around bridge calls
pub use crate::application::layers::{
    Endpoint, RaiseForStatus, RetryOnAuthFailure, ValidateInput, endpoint, raise_for_status,
    try_again, validate_input,
};

// ============================================================================
// MODELS
// ============================================================================

/// Credentials and token header
pub use crate::model::auth::{Credential, TokenHeader};

/// Transport abstraction
pub use crate::model::http::{
    HasStatus, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};

/// Layer configuration
pub use crate::model::retry::RetryConfig;
pub use crate::model::shape::{ContainerKind, Shape};
pub use crate::model::status::{StatusPattern, StatusRules};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
