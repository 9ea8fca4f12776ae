//! Sign-in form values and field focus.

use crate::auth::Credentials;

/// Which field in the sign-in form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    /// Advance to the next field (wrapping around).
    pub fn next(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }

    /// Go to the previous field (wrapping around). With two fields this is
    /// the same as [`LoginField::next`].
    pub fn prev(self) -> Self {
        self.next()
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }
}

/// The two values the sign-in form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the current value of `field`.
    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Password => &self.password,
        }
    }

    /// Returns a copy with `field` replaced by `value`.
    pub fn with_field(self, field: LoginField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            LoginField::Username => Self {
                username: value,
                ..self
            },
            LoginField::Password => Self {
                password: value,
                ..self
            },
        }
    }

    /// Returns a copy with the password cleared and the username kept.
    pub fn without_password(self) -> Self {
        Self {
            password: String::new(),
            ..self
        }
    }

    /// Credentials to send: the username trimmed, the password verbatim.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.trim(), self.password.clone())
    }

    /// Display string for a field (password masked).
    pub fn display_value(&self, field: LoginField) -> String {
        match field {
            LoginField::Username => self.username.clone(),
            LoginField::Password => "*".repeat(self.password.chars().count()),
        }
    }
}
