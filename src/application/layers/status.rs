/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use super::Endpoint;
use crate::error::AppError;
use crate::model::http::HasStatus;
use crate::model::status::StatusRules;
use tracing::error;

/// Turns responses with a registered failing status into typed errors
///
/// Responses whose status matches no rule pass through unmodified.
#[derive(Debug, Clone)]
pub struct RaiseForStatus<E> {
    rules: StatusRules,
    inner: E,
}

impl<E> RaiseForStatus<E> {
    /// Wraps `inner` with the given rules
    pub fn new(rules: StatusRules, inner: E) -> Self {
        Self { rules, inner }
    }

    /// Rules in use
    pub fn rules(&self) -> &StatusRules {
        &self.rules
    }
}

/// Wraps `inner` in a [`RaiseForStatus`] layer
pub fn raise_for_status<E>(rules: StatusRules, inner: E) -> RaiseForStatus<E> {
    RaiseForStatus::new(rules, inner)
}

impl<B, A, R, E> Endpoint<B, A, R> for RaiseForStatus<E>
where
    B: ?Sized,
    A: ?Sized,
    R: HasStatus,
    E: Endpoint<B, A, R>,
{
    fn invoke(&self, bridge: &B, args: &A) -> Result<R, AppError> {
        let response = self.inner.invoke(bridge, args)?;
        let status = response.status();

        match self.rules.classify(status) {
            Some(kind) => {
                error!("Request failed with status {} ({:?})", status, kind);
                Err(kind.into_error(status))
            }
            None => Ok(response),
        }
    }
}
