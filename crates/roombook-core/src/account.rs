// ── Account workflows ──
//
// Sign-up and login, each a single remote call folded into an outcome
// the presentation layer can show as-is.

use roombook_api::UserRecord;
use secrecy::SecretString;
use tracing::{info, warn};

use crate::service::BookingService;
use crate::validation::RegistrationRequest;

pub const EMAIL_IN_USE: &str =
    "This email address is already in use. Please use a different email.";
pub const SIGNUP_FAILED: &str = "An error occurred while creating your account. Please try again.";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Result of creating an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered(UserRecord),
    /// The service answered 400; it does so for a duplicate email.
    EmailInUse(String),
    Rejected { status: u16, message: String },
    TransportFailure(String),
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(UserRecord),
    InvalidCredentials(String),
    TransportFailure(String),
}

pub async fn register<S: BookingService>(
    service: &S,
    request: &RegistrationRequest,
) -> RegistrationOutcome {
    match service.create_user(&request.to_command()).await {
        Ok(user) => {
            info!(user_id = user.id, "account created");
            RegistrationOutcome::Registered(user)
        }
        Err(err) if err.is_transport() => {
            warn!(error = %err, "sign-up request failed");
            RegistrationOutcome::TransportFailure(err.to_string())
        }
        Err(err) => {
            warn!(error = %err, "sign-up rejected");
            match err.status() {
                Some(400) => RegistrationOutcome::EmailInUse(EMAIL_IN_USE.to_owned()),
                status => RegistrationOutcome::Rejected {
                    status: status.unwrap_or_default(),
                    message: SIGNUP_FAILED.to_owned(),
                },
            }
        }
    }
}

pub async fn login<S: BookingService>(
    service: &S,
    email: &str,
    password: &SecretString,
) -> LoginOutcome {
    match service.login(email, password).await {
        Ok(user) => {
            info!(user_id = user.id, "logged in");
            LoginOutcome::LoggedIn(user)
        }
        Err(err) if err.is_transport() => LoginOutcome::TransportFailure(err.to_string()),
        Err(err) => {
            warn!(status = ?err.status(), "login rejected");
            LoginOutcome::InvalidCredentials(INVALID_CREDENTIALS.to_owned())
        }
    }
}
