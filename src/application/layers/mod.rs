/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Composable layers around bridge calls
//!
//! An [`Endpoint`] is any call taking a bridge and an argument. Each layer
//! wraps an endpoint and is itself an endpoint with the same signature, so
//! layers stack in an explicit order:
//!
//! ```ignore
//! use ubidots_client::application::layers::*;
//!
//! let call = validate_input(
//!     Shape::sequence(["variable", "value"]),
//!     raise_for_status(
//!         StatusRules::default(),
//!         try_again(
//!             RetryConfig::default(),
//!             endpoint(|bridge: &ServerBridge, data: &Value| bridge.post("collections/values", data)),
//!         ),
//!     ),
//! );
//! let response = call.invoke(&bridge, &payload)?;
//! ```

use crate::error::AppError;

/// Auth-failure retry layer
pub mod retry;
/// Status to error layer
pub mod status;
/// Input shape validation layer
pub mod validate;

pub use retry::{RetryOnAuthFailure, try_again};
pub use status::{RaiseForStatus, raise_for_status};
pub use validate::{ValidateInput, validate_input};

/// A call against a bridge `B` taking an argument `A` and producing `R`
pub trait Endpoint<B: ?Sized, A: ?Sized, R> {
    /// Invokes the call
    fn invoke(&self, bridge: &B, args: &A) -> Result<R, AppError>;
}

impl<B, A, R, F> Endpoint<B, A, R> for F
where
    B: ?Sized,
    A: ?Sized,
    F: Fn(&B, &A) -> Result<R, AppError>,
{
    fn invoke(&self, bridge: &B, args: &A) -> Result<R, AppError> {
        self(bridge, args)
    }
}

/// Turns a closure into an [`Endpoint`]
///
/// Only needed to pin down the closure signature when it is built inline.
pub fn endpoint<B, A, R, F>(f: F) -> F
where
    B: ?Sized,
    A: ?Sized,
    F: Fn(&B, &A) -> Result<R, AppError>,
{
    f
}
