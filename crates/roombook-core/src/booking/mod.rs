//! From a validated form to one remote call.
//!
//! [`BookingRequestBuilder`] turns a [`NormalizedBooking`](crate::validation::NormalizedBooking)
//! into a UTC [`BookingRequest`]; [`submit`] sends it and folds the
//! response into a [`SubmissionOutcome`].

pub mod builder;
pub mod request;
pub mod submission;

pub use builder::BookingRequestBuilder;
pub use request::BookingRequest;
pub use submission::{CONFLICT_MESSAGE, SubmissionOutcome, submit};
