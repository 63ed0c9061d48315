/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use super::Endpoint;
use crate::application::bridge::Reauthenticate;
use crate::error::AppError;
use crate::model::http::HasStatus;
use crate::model::retry::RetryConfig;
use tracing::{debug, warn};

/// Re-authenticates and repeats a call while it answers with an auth-failure status
///
/// Makes at most [`RetryConfig::max_attempts`] calls and re-authenticates after
/// each one that fails, including the last. When every attempt fails the last
/// response is returned as-is: turning it into an error is the job of a
/// [`super::RaiseForStatus`] layer stacked above this one.
///
/// A bridge that cannot re-authenticate gets its auth-failure response back
/// untouched after the first call.
///
/// Errors from the wrapped call or from re-authentication are returned immediately.
#[derive(Debug, Clone)]
pub struct RetryOnAuthFailure<E> {
    config: RetryConfig,
    inner: E,
}

impl<E> RetryOnAuthFailure<E> {
    /// Wraps `inner` with the given retry configuration
    pub fn new(config: RetryConfig, inner: E) -> Self {
        Self { config, inner }
    }

    /// Retry configuration in use
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

/// Wraps `inner` in a [`RetryOnAuthFailure`] layer
pub fn try_again<E>(config: RetryConfig, inner: E) -> RetryOnAuthFailure<E> {
    RetryOnAuthFailure::new(config, inner)
}

impl<B, A, R, E> Endpoint<B, A, R> for RetryOnAuthFailure<E>
where
    B: Reauthenticate + ?Sized,
    A: ?Sized,
    R: HasStatus,
    E: Endpoint<B, A, R>,
{
    fn invoke(&self, bridge: &B, args: &A) -> Result<R, AppError> {
        let max_attempts = self.config.max_attempts();
        let mut attempt = 1;

        loop {
            let response = self.inner.invoke(bridge, args)?;
            let status = response.status();

            if !self.config.is_auth_failure(status) {
                return Ok(response);
            }

            if !bridge.can_reauthenticate() {
                warn!("Auth failure {} and no way to renew the session", status);
                return Ok(response);
            }

            warn!(
                "Auth failure {} (attempt {}/{}), re-authenticating",
                status, attempt, max_attempts
            );
            bridge.initialize()?;

            if attempt >= max_attempts {
                debug!("Giving up after {} attempts with status {}", attempt, status);
                return Ok(response);
            }
            attempt += 1;
        }
    }
}
