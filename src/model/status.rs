/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::ErrorKind;
use reqwest::StatusCode;
use tracing::warn;

/// Which statuses a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPattern {
    /// A single status code
    Code(StatusCode),
    /// Every 4xx status
    ClientErrors,
    /// Every 5xx status
    ServerErrors,
}

impl StatusPattern {
    /// Whether `status` falls under this pattern
    #[must_use]
    pub fn matches(&self, status: StatusCode) -> bool {
        match self {
            Self::Code(code) => *code == status,
            Self::ClientErrors => status.is_client_error(),
            Self::ServerErrors => status.is_server_error(),
        }
    }
}

/// Registry mapping failing statuses to error kinds
///
/// Exact-code rules win over class rules; within each group the first
/// registered rule wins. Statuses matching no rule are not failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRules {
    rules: Vec<(StatusPattern, ErrorKind)>,
}

impl StatusRules {
    /// Creates an empty registry; nothing is treated as a failure
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registers a single status code
    #[must_use]
    pub fn code(mut self, status: StatusCode, kind: ErrorKind) -> Self {
        self.rules.push((StatusPattern::Code(status), kind));
        self
    }

    /// Registers the whole 4xx class
    #[must_use]
    pub fn client_errors(mut self, kind: ErrorKind) -> Self {
        self.rules.push((StatusPattern::ClientErrors, kind));
        self
    }

    /// Registers the whole 5xx class
    #[must_use]
    pub fn server_errors(mut self, kind: ErrorKind) -> Self {
        self.rules.push((StatusPattern::ServerErrors, kind));
        self
    }

    /// Registers each code under the kind its status class implies
    ///
    /// Codes that are not valid HTTP statuses, or are not 4xx/5xx, are skipped.
    #[must_use]
    pub fn from_codes(codes: &[u16]) -> Self {
        codes.iter().fold(Self::new(), |rules, &code| {
            match StatusCode::from_u16(code)
                .ok()
                .and_then(|status| ErrorKind::for_status(status).map(|kind| (status, kind)))
            {
                Some((status, kind)) => rules.code(status, kind),
                None => {
                    warn!("Ignoring status code {} with no error class", code);
                    rules
                }
            }
        })
    }

    /// The 401/403 -> authentication, 4xx -> client, 5xx -> server registry
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .code(StatusCode::UNAUTHORIZED, ErrorKind::Authentication)
            .code(StatusCode::FORBIDDEN, ErrorKind::Authentication)
            .client_errors(ErrorKind::Client)
            .server_errors(ErrorKind::Server)
    }

    /// Error kind registered for `status`, if any
    #[must_use]
    pub fn classify(&self, status: StatusCode) -> Option<ErrorKind> {
        let exact = self
            .rules
            .iter()
            .find(|(pattern, _)| matches!(pattern, StatusPattern::Code(_)) && pattern.matches(status));

        exact
            .or_else(|| self.rules.iter().find(|(pattern, _)| pattern.matches(status)))
            .map(|(_, kind)| *kind)
    }

    /// Whether no rule is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for StatusRules {
    fn default() -> Self {
        Self::standard()
    }
}
