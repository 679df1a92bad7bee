//! CLI error types with miette diagnostics.
//!
//! Maps core, config, and outcome failures into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use roombook_config::ConfigError;
use roombook_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
#[allow(dead_code, unused_assignments)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the reservation service at {url}: {reason}")]
    #[diagnostic(
        code(roombook::connection_failed),
        help(
            "Check the server URL and your network connection.\n\
             URL: {url}\n\
             Override with --server or set it in your profile: roombook config init"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(roombook::auth_failed),
        help("Check your email and password. New here? Run: roombook signup")
    )]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(roombook::not_found),
        help("Run: roombook {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{message}")]
    #[diagnostic(
        code(roombook::conflict),
        help("Pick another room or time. Run: roombook rooms list --date <DATE> --start <HH:MM> --end <HH:MM>")
    )]
    Conflict { message: String },

    // ── Server ───────────────────────────────────────────────────────
    #[error("Request rejected (HTTP {status}): {message}")]
    #[diagnostic(code(roombook::rejected))]
    Rejected { status: u16, message: String },

    #[error("Service error: {message}")]
    #[diagnostic(code(roombook::api_error))]
    ApiError {
        message: String,
        status: Option<u16>,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("{messages}")]
    #[diagnostic(code(roombook::invalid_form))]
    InvalidForm { messages: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(roombook::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(roombook::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: roombook config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(roombook::config))]
    Config { message: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(roombook::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Request timed out{}", after_secs(.seconds.as_ref().copied()))]
    #[diagnostic(
        code(roombook::timeout),
        help("Increase timeout with --timeout or try again later.")
    )]
    Timeout { seconds: Option<u64> },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn after_secs(secs: Option<u64>) -> String {
    secs.map(|s| format!(" after {s}s")).unwrap_or_default()
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::InvalidForm { .. }
            | Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(failed) => CliError::InvalidForm {
                messages: failed.to_string(),
            },
            CoreError::Time(e) => CliError::Validation {
                field: "time".into(),
                reason: e.to_string(),
            },
            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }
            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },
            CoreError::NotFound { message } => CliError::NotFound {
                resource_type: "resource".into(),
                identifier: message,
                list_command: "--help".into(),
            },
            CoreError::Api { message, status } => CliError::ApiError { message, status },
            CoreError::Config { message } => CliError::Config { message },
            CoreError::Internal(message) => CliError::ApiError {
                message,
                status: None,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::UnknownProfile { profile } => CliError::ProfileNotFound {
                name: profile,
                available: "(see: roombook config show)".into(),
            },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_keep_their_exit_codes() {
        let timeout = CliError::from(CoreError::Timeout {
            timeout_secs: Some(5),
        });
        assert_eq!(timeout.exit_code(), exit_code::TIMEOUT);
        assert_eq!(timeout.to_string(), "Request timed out after 5s");

        let unknown = CliError::from(CoreError::Timeout { timeout_secs: None });
        assert_eq!(unknown.to_string(), "Request timed out");

        let missing = CliError::from(CoreError::NotFound {
            message: "booking 9".into(),
        });
        assert_eq!(missing.exit_code(), exit_code::NOT_FOUND);

        let offline = CliError::from(CoreError::ConnectionFailed {
            url: "http://127.0.0.1:9/api/".into(),
            reason: "refused".into(),
        });
        assert_eq!(offline.exit_code(), exit_code::CONNECTION);
    }

    #[test]
    fn form_errors_are_usage_errors() {
        let err = CliError::from(CoreError::Validation(
            roombook_core::ValidationFailed::single("No room selected"),
        ));
        assert_eq!(err.exit_code(), exit_code::USAGE);
        assert_eq!(err.to_string(), "No room selected");
    }
}
