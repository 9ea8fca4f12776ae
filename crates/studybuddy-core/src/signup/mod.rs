//! Sign-up flow: form, reducer and async driver.
//!
//! Unlike sign-in there is no attempt counter; a failed sign-up only shows
//! [`SIGNUP_FAILED_MESSAGE`] and keeps what the user typed.

pub mod controller;
pub mod form;
pub mod state;

pub use controller::SignupController;
pub use form::{validate_signup, SignupField, SignupForm, SignupValidationError, INDUSTRIES, ROLES};
pub use state::{reduce, SignupEvent, SignupPhase, SignupState};

pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed. Please try again.";

/// Why a sign-up did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("a sign-up request is already in flight")]
    InFlight,

    #[error(transparent)]
    Validation(#[from] SignupValidationError),

    #[error("Signup failed. Please try again.")]
    Failed,
}
