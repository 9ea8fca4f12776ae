//! Shape checks run before any credentials leave the client.

use super::form::LoginForm;

/// Minimum number of characters in a trimmed username.
pub const MIN_USERNAME_LEN: usize = 3;

/// A problem the client can detect without asking the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Username is required")]
    EmptyUsername,

    #[error("Password is required")]
    EmptyPassword,

    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
}

/// Checks that `form` is worth sending.
///
/// The username is trimmed before both the emptiness and the length check;
/// the password is only checked for emptiness. Checks run in that order, so
/// an empty username is reported before a missing password.
pub fn validate(form: &LoginForm) -> Result<(), ValidationError> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if form.password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    Ok(())
}
