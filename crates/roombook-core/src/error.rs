// ── Core error types ──
//
// Errors from facade operations that are not booking submissions
// (listing, deleting, account lookups). Submissions and sign-ups report
// through typed outcomes instead. The `From<roombook_api::Error>` impl
// translates transport-layer errors into domain variants.

use thiserror::Error;

use crate::time::TimeError;
use crate::validation::ValidationFailed;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailed),

    #[error(transparent)]
    Time(#[from] TimeError),

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach reservation service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    /// `timeout_secs` is `None` when the limit that fired is not known.
    #[error("Request timed out{}", after_secs(.timeout_secs.as_ref().copied()))]
    Timeout { timeout_secs: Option<u64> },

    // ── Server errors ────────────────────────────────────────────────
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Rejected by service: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

fn after_secs(secs: Option<u64>) -> String {
    secs.map(|s| format!(" after {s}s")).unwrap_or_default()
}

impl CoreError {
    /// HTTP status behind this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<roombook_api::Error> for CoreError {
    fn from(err: roombook_api::Error) -> Self {
        match err {
            roombook_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: None }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            roombook_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            roombook_api::Error::Timeout { timeout_secs } => CoreError::Timeout {
                timeout_secs: Some(timeout_secs),
            },
            roombook_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            roombook_api::Error::Http { status: 404, message } => CoreError::NotFound {
                message: message.unwrap_or_else(|| "resource".into()),
            },
            roombook_api::Error::Http { status, message } => CoreError::Api {
                message: message.unwrap_or_else(|| format!("HTTP {status}")),
                status: Some(status),
            },
            roombook_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_keep_status_and_message() {
        let err = CoreError::from(roombook_api::Error::Http {
            status: 503,
            message: Some("maintenance".into()),
        });
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "Rejected by service: maintenance");
    }

    #[test]
    fn not_found_is_its_own_variant() {
        let err = CoreError::from(roombook_api::Error::Http {
            status: 404,
            message: None,
        });
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn api_timeout_is_preserved() {
        let err = CoreError::from(roombook_api::Error::Timeout { timeout_secs: 12 });
        assert!(matches!(err, CoreError::Timeout { timeout_secs: Some(12) }));
        assert_eq!(err.to_string(), "Request timed out after 12s");
    }

    #[test]
    fn unknown_timeout_has_no_bogus_duration() {
        let err = CoreError::Timeout { timeout_secs: None };
        assert_eq!(err.to_string(), "Request timed out");
    }
}
