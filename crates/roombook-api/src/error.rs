use thiserror::Error;

/// Top-level error type for the `roombook-api` crate.
///
/// Covers every failure mode of a single request: client construction,
/// transport, non-2xx responses, and undecodable bodies.
/// `roombook-core` folds these into typed outcomes.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS setup or HTTP client construction failed.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Server ──────────────────────────────────────────────────────
    /// Non-2xx response. `message` is the server-provided text, if any.
    #[error("HTTP {status}{}", message_suffix(.message.as_deref()))]
    Http { status: u16, message: Option<String> },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

fn message_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}

impl Error {
    /// The HTTP status code, for errors produced by a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The server-provided message of a non-2xx response.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` for HTTP 409 (the slot is already taken).
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// Returns `true` if the request never produced a usable server response:
    /// network failures, timeouts, and bodies that could not be decoded.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Transport(e) => e.status().is_none(),
            Self::Timeout { .. } | Self::Deserialization { .. } => true,
            Self::InvalidUrl(_) | Self::Tls(_) | Self::Http { .. } => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
