/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Guarded client for the Ubidots REST API
//!
//! Every call goes through the same stack of layers around the raw bridge:
//! input validation (for payloads with a known shape), then status to error
//! mapping, then re-authentication and retry on auth failures.
//!
//! # Example
//! ```ignore
//! use ubidots_client::application::client::ApiClient;
//! use ubidots_client::application::config::Config;
//! use serde_json::json;
//!
//! let client = ApiClient::from_config(&Config::new())?;
//! client.save_collection(&json!([{"variable": "abc123", "value": 21.5}]))?;
//! ```

use crate::application::bridge::ServerBridge;
use crate::application::config::Config;
use crate::application::layers::{Endpoint, endpoint, raise_for_status, try_again, validate_input};
use crate::error::AppError;
use crate::model::http::HttpResponse;
use crate::model::retry::RetryConfig;
use crate::model::shape::Shape;
use crate::model::status::StatusRules;
use serde_json::Value;

/// Client issuing guarded, JSON-decoded calls through a [`ServerBridge`]
#[derive(Debug)]
pub struct ApiClient {
    bridge: ServerBridge,
    retry: RetryConfig,
    rules: StatusRules,
}

impl ApiClient {
    /// Creates a client with the default retry configuration and status rules
    pub fn new(bridge: ServerBridge) -> Self {
        Self::with_policies(bridge, RetryConfig::default(), StatusRules::default())
    }

    /// Creates a client with explicit retry configuration and status rules
    pub fn with_policies(bridge: ServerBridge, retry: RetryConfig, rules: StatusRules) -> Self {
        Self {
            bridge,
            retry,
            rules,
        }
    }

    /// Creates the bridge and client from configuration
    ///
    /// # Returns
    /// * `Ok(ApiClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the credentials are invalid or the token exchange fails
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let bridge = ServerBridge::from_config(config)?;
        Ok(Self::with_policies(
            bridge,
            config.retry.clone(),
            StatusRules::default(),
        ))
    }

    /// Underlying bridge
    pub fn bridge(&self) -> &ServerBridge {
        &self.bridge
    }

    /// Guarded GET
    pub fn get(&self, path: &str) -> Result<Value, AppError> {
        let call = raise_for_status(
            self.rules.clone(),
            try_again(
                self.retry.clone(),
                endpoint(|bridge: &ServerBridge, path: &str| bridge.get(path)),
            ),
        );
        let response: HttpResponse = call.invoke(&self.bridge, path)?;
        response.json()
    }

    /// Guarded POST of an unvalidated payload
    pub fn post(&self, path: &str, data: &Value) -> Result<Value, AppError> {
        self.post_checked(path, data, None)
    }

    /// Guarded DELETE
    pub fn delete(&self, path: &str) -> Result<Value, AppError> {
        let call = raise_for_status(
            self.rules.clone(),
            try_again(
                self.retry.clone(),
                endpoint(|bridge: &ServerBridge, path: &str| bridge.delete(path)),
            ),
        );
        let response: HttpResponse = call.invoke(&self.bridge, path)?;
        response.json()
    }

    /// Lists the account's data sources
    pub fn datasources(&self) -> Result<Value, AppError> {
        self.get("datasources/")
    }

    /// Fetches one data source
    pub fn datasource(&self, id: &str) -> Result<Value, AppError> {
        self.get(&format!("datasources/{id}/"))
    }

    /// Creates a data source
    pub fn create_datasource(&self, data: &Value) -> Result<Value, AppError> {
        self.post("datasources/", data)
    }

    /// Deletes a data source
    pub fn delete_datasource(&self, id: &str) -> Result<Value, AppError> {
        self.delete(&format!("datasources/{id}/"))
    }

    /// Lists every variable of the account
    pub fn variables(&self) -> Result<Value, AppError> {
        self.get("variables/")
    }

    /// Lists the variables of one data source
    pub fn datasource_variables(&self, datasource_id: &str) -> Result<Value, AppError> {
        self.get(&format!("datasources/{datasource_id}/variables/"))
    }

    /// Creates a variable; `data` must be `{"name": .., "unit": ..}`
    pub fn create_variable(&self, datasource_id: &str, data: &Value) -> Result<Value, AppError> {
        self.post_checked(
            &format!("datasources/{datasource_id}/variables/"),
            data,
            Some(Shape::mapping(["name", "unit"])),
        )
    }

    /// Fetches one variable
    pub fn variable(&self, id: &str) -> Result<Value, AppError> {
        self.get(&format!("variables/{id}/"))
    }

    /// Deletes a variable
    pub fn delete_variable(&self, id: &str) -> Result<Value, AppError> {
        self.delete(&format!("variables/{id}/"))
    }

    /// Saves one value; `data` must be `{"value": ..}`
    pub fn save_value(&self, variable_id: &str, data: &Value) -> Result<Value, AppError> {
        self.post_checked(
            &format!("variables/{variable_id}/values"),
            data,
            Some(Shape::mapping(["value"])),
        )
    }

    /// Saves several values; `data` must be `[{"value": .., "timestamp": ..}, ..]`
    pub fn save_values(&self, variable_id: &str, data: &Value) -> Result<Value, AppError> {
        self.post_checked(
            &format!("variables/{variable_id}/values"),
            data,
            Some(Shape::sequence(["value", "timestamp"])),
        )
    }

    /// Saves values across variables; `data` must be `[{"variable": .., "value": ..}, ..]`
    pub fn save_collection(&self, data: &Value) -> Result<Value, AppError> {
        self.post_checked(
            "collections/values",
            data,
            Some(Shape::sequence(["variable", "value"])),
        )
    }

    fn post_checked(&self, path: &str, data: &Value, shape: Option<Shape>) -> Result<Value, AppError> {
        let call = raise_for_status(
            self.rules.clone(),
            try_again(
                self.retry.clone(),
                endpoint(move |bridge: &ServerBridge, data: &Value| bridge.post(path, data)),
            ),
        );

        let response: HttpResponse = match shape {
            Some(shape) => validate_input(shape, call).invoke(&self.bridge, data)?,
            None => call.invoke(&self.bridge, data)?,
        };
        response.json()
    }
}
