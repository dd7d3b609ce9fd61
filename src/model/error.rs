//! Error types for the ecoleta application.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failures
//!   - [`TuiError`](crate::view::TuiError) - terminal failures
//!   - [`ApiError`] - HTTP client construction failures
//! - [`ApiError`] - a single fetch failed; carries an [`ErrorKind`]
//! - [`LinkError`] - a deep link could not be dispatched
//!
//! # Recovery Strategy
//!
//! Fetch failures are **non-fatal**: they are logged and the screen keeps
//! its empty state. Link failures on the e-mail path become an alert
//! dialog. Everything wrapped by [`AppError`] is fatal.

use std::fmt;
use thiserror::Error;

/// Top-level application error.
///
/// Domain errors convert via `From`, so `main` composes with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, rendering or teardown failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// An API client could not be built (e.g. invalid base URL).
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Classification of a failed API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connection refused, DNS failure, timeout, or body read failure.
    Network,
    /// Server answered with a non-success HTTP status.
    Status,
    /// Body was not JSON, or JSON that violates the expected schema.
    MalformedResponse,
    /// Endpoint URL could not be built from the configured base URL.
    InvalidUrl,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Network => "network",
            ErrorKind::Status => "status",
            ErrorKind::MalformedResponse => "malformed response",
            ErrorKind::InvalidUrl => "invalid url",
        };
        f.write_str(name)
    }
}

/// A failed fetch against one of the remote APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error for {endpoint}: {detail}")]
pub struct ApiError {
    kind: ErrorKind,
    endpoint: String,
    detail: String,
}

impl ApiError {
    /// Build an error of the given kind.
    pub fn new(kind: ErrorKind, endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            endpoint: endpoint.into(),
            detail: detail.into(),
        }
    }

    /// Transport-level failure.
    pub fn network(endpoint: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Network, endpoint, detail.to_string())
    }

    /// Non-success HTTP status.
    pub fn status(endpoint: impl Into<String>, status: u16) -> Self {
        Self::new(ErrorKind::Status, endpoint, format!("HTTP {status}"))
    }

    /// Payload failed schema validation.
    pub fn malformed(endpoint: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::new(ErrorKind::MalformedResponse, endpoint, detail.to_string())
    }

    /// Endpoint URL could not be built.
    pub fn invalid_url(endpoint: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::new(ErrorKind::InvalidUrl, endpoint, detail.to_string())
    }

    /// Failure classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Endpoint (URL or path) the request was made against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Human-readable detail.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Failure to hand a deep link over to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// No application is registered for the URI's scheme.
    #[error("Provided URL can not be handled: {uri}")]
    Unsupported {
        /// The rejected URI.
        uri: String,
    },

    /// The platform launcher itself failed.
    #[error("Failed to open {uri}: {reason}")]
    Launch {
        /// The URI that was being opened.
        uri: String,
        /// Launcher error message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_names_kind_and_endpoint() {
        let err = ApiError::malformed("estados", "states[0]: missing field `sigla`");
        let msg = err.to_string();
        assert!(msg.contains("malformed response"), "got: {msg}");
        assert!(msg.contains("estados"), "got: {msg}");
        assert!(msg.contains("sigla"), "got: {msg}");
    }

    #[test]
    fn api_error_constructors_set_kind() {
        assert_eq!(ApiError::network("x", "refused").kind(), ErrorKind::Network);
        assert_eq!(ApiError::status("x", 404).kind(), ErrorKind::Status);
        assert_eq!(
            ApiError::malformed("x", "bad").kind(),
            ErrorKind::MalformedResponse
        );
        assert_eq!(ApiError::invalid_url("x", "bad").kind(), ErrorKind::InvalidUrl);
    }

    #[test]
    fn status_error_includes_code() {
        assert_eq!(ApiError::status("points/1", 500).detail(), "HTTP 500");
    }

    #[test]
    fn link_error_unsupported_mentions_uri() {
        let err = LinkError::Unsupported {
            uri: "mailto:a@b.com".to_string(),
        };
        assert!(err.to_string().contains("mailto:a@b.com"));
    }

    #[test]
    fn app_error_wraps_api_error() {
        let err: AppError = ApiError::invalid_url("base", "relative URL without a base").into();
        assert!(matches!(err, AppError::Api(_)));
    }
}
