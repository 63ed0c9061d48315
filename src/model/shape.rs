/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Payload shapes checked before a request leaves the client

use crate::error::AppError;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Container kind a payload must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// A JSON object
    Mapping,
    /// A JSON array of objects
    Sequence,
}

/// Required container kind and exact key set of a payload
///
/// For [`ContainerKind::Mapping`] the payload itself must carry exactly the
/// required keys; for [`ContainerKind::Sequence`] every element must. An empty
/// sequence is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ContainerKind,
    required: BTreeSet<String>,
}

impl Shape {
    /// Creates a shape from a container kind and its required keys
    pub fn new<I, K>(kind: ContainerKind, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            kind,
            required: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Object with exactly `keys`
    pub fn mapping<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::new(ContainerKind::Mapping, keys)
    }

    /// Array whose elements are objects with exactly `keys`
    pub fn sequence<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::new(ContainerKind::Sequence, keys)
    }

    /// Required container kind
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Required key set
    #[must_use]
    pub fn required_keys(&self) -> &BTreeSet<String> {
        &self.required
    }

    /// Checks `value` against the shape
    ///
    /// # Returns
    /// * `Ok(())` - The payload has the required shape
    /// * `Err(AppError::InvalidInput)` - Describing the first mismatch found
    pub fn check(&self, value: &Value) -> Result<(), AppError> {
        match (self.kind, value) {
            (ContainerKind::Mapping, Value::Object(object)) => self.check_keys(object, None),
            (ContainerKind::Mapping, other) => Err(AppError::InvalidInput(format!(
                "expected an object, got {}",
                type_name(other)
            ))),
            (ContainerKind::Sequence, Value::Array(items)) => {
                items.iter().enumerate().try_for_each(|(index, item)| match item {
                    Value::Object(object) => self.check_keys(object, Some(index)),
                    other => Err(AppError::InvalidInput(format!(
                        "element {} must be an object, got {}",
                        index,
                        type_name(other)
                    ))),
                })
            }
            (ContainerKind::Sequence, other) => Err(AppError::InvalidInput(format!(
                "expected an array, got {}",
                type_name(other)
            ))),
        }
    }

    fn check_keys(&self, object: &Map<String, Value>, index: Option<usize>) -> Result<(), AppError> {
        let missing: Vec<&str> = self
            .required
            .iter()
            .filter(|key| !object.contains_key(key.as_str()))
            .map(String::as_str)
            .collect();
        let unexpected: Vec<&str> = object
            .keys()
            .filter(|key| !self.required.contains(key.as_str()))
            .map(String::as_str)
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }

        let location = match index {
            Some(i) => format!("element {i}"),
            None => "object".to_string(),
        };
        Err(AppError::InvalidInput(format!(
            "{location} has missing keys {missing:?} and unexpected keys {unexpected:?}"
        )))
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
