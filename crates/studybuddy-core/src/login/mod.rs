//! Login Attempt Controller.
//!
//! Validates credential shape, counts consecutive failed sign-ins and gates
//! further submissions once [`MAX_ATTEMPTS`] is reached.
//!
//! - [`form`]: the two form values and field focus.
//! - [`validate`](mod@validate): pure shape checks.
//! - [`state`]: immutable [`LoginState`] and the pure reducer.
//! - [`controller`]: async driver that runs the reducer's effects.

pub mod controller;
pub mod form;
pub mod state;
pub mod validate;

pub use controller::LoginController;
pub use form::{LoginField, LoginForm};
pub use state::{reduce, LoginEvent, LoginPhase, LoginState};
pub use validate::{validate, ValidationError, MIN_USERNAME_LEN};

/// Consecutive failed sign-ins allowed before the lockout.
pub const MAX_ATTEMPTS: u32 = 5;

/// Shown for every rejected sign-in, whatever the server said.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";

/// Shown once the lockout is in effect.
pub const RATE_LIMITED_MESSAGE: &str =
    "Too many failed sign-in attempts. Restart the app to try again.";

/// Why a sign-in did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Too many failed sign-in attempts. Restart the app to try again.")]
    RateLimited,

    #[error("a sign-in request is already in flight")]
    InFlight,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid username or password.")]
    InvalidCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_messages_never_leak_detail() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            INVALID_CREDENTIALS_MESSAGE
        );
        assert_eq!(AuthError::RateLimited.to_string(), RATE_LIMITED_MESSAGE);
    }

    #[test]
    fn validation_error_converts() {
        let err: AuthError = ValidationError::EmptyPassword.into();
        assert_eq!(err, AuthError::Validation(ValidationError::EmptyPassword));
        assert_eq!(err.to_string(), "Password is required");
    }
}
