//! Form validation for bookings and account sign-up.
//!
//! Validators take the raw form values the presentation layer collected
//! and return either a normalized value ready for the next stage or the
//! ordered list of messages to show the user.

pub mod booking;
pub mod registration;

/// Human-readable reasons a form was rejected, in the order the rules
/// were checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .messages.join("; "))]
pub struct ValidationFailed {
    messages: Vec<String>,
}

impl ValidationFailed {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The message to surface when only one fits.
    pub fn first(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// Result of running a validator: the normalized value, or why not.
pub type ValidationOutcome<T> = Result<T, ValidationFailed>;

pub use booking::{BookingForm, NormalizedBooking};
pub use registration::{RegistrationForm, RegistrationRequest};
