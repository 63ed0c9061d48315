/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use super::Endpoint;
use crate::error::AppError;
use crate::model::shape::Shape;
use serde_json::Value;
use tracing::warn;

/// Rejects payloads that do not match a [`Shape`] before the call is made
#[derive(Debug, Clone)]
pub struct ValidateInput<E> {
    shape: Shape,
    inner: E,
}

impl<E> ValidateInput<E> {
    /// Wraps `inner` with the given shape
    pub fn new(shape: Shape, inner: E) -> Self {
        Self { shape, inner }
    }

    /// Shape in use
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

/// Wraps `inner` in a [`ValidateInput`] layer
pub fn validate_input<E>(shape: Shape, inner: E) -> ValidateInput<E> {
    ValidateInput::new(shape, inner)
}

impl<B, R, E> Endpoint<B, Value, R> for ValidateInput<E>
where
    B: ?Sized,
    E: Endpoint<B, Value, R>,
{
    fn invoke(&self, bridge: &B, args: &Value) -> Result<R, AppError> {
        if let Err(e) = self.shape.check(args) {
            warn!("Rejected payload: {}", e);
            return Err(e);
        }
        self.inner.invoke(bridge, args)
    }
}
