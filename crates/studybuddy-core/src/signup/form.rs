//! Sign-up form values, field metadata and shape checks.

use crate::auth::SignupProfile;

/// Values offered by the industry selector.
pub const INDUSTRIES: &[&str] = &["Industry 1", "Industry 2", "Industry 3"];

/// Values offered by the role selector.
pub const ROLES: &[&str] = &["Role 1", "Role 2", "Role 3"];

/// One input of the sign-up form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    FirstName,
    LastName,
    Username,
    Password,
    Industry,
    UserRole,
    Bio,
}

impl SignupField {
    pub const ALL: [SignupField; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Username,
        Self::Password,
        Self::Industry,
        Self::UserRole,
        Self::Bio,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Advance to the next field (wrapping around).
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Go to the previous field (wrapping around).
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Industry => "Industry",
            Self::UserRole => "Role",
            Self::Bio => "Bio",
        }
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Jane",
            Self::LastName => "Doe",
            Self::Username => "yourusername",
            Self::Password => "******************",
            Self::Industry => "Select Industry",
            Self::UserRole => "Select Role",
            Self::Bio => "Tell us about yourself!",
        }
    }

    /// The fixed choices for selector fields; `None` for free text.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Industry => Some(INDUSTRIES),
            Self::UserRole => Some(ROLES),
            _ => None,
        }
    }

    pub fn is_required(self) -> bool {
        self != Self::Bio
    }
}

/// A problem with the sign-up form detectable before sending it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupValidationError {
    #[error("{} is required", .0.label())]
    MissingField(SignupField),

    #[error("{} must be one of the listed options", .0.label())]
    UnknownOption(SignupField),
}

/// Everything the sign-up screen collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub industry: String,
    pub user_role: String,
    pub bio: String,
}

impl SignupForm {
    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::FirstName => &self.first_name,
            SignupField::LastName => &self.last_name,
            SignupField::Username => &self.username,
            SignupField::Password => &self.password,
            SignupField::Industry => &self.industry,
            SignupField::UserRole => &self.user_role,
            SignupField::Bio => &self.bio,
        }
    }

    /// Returns a copy with `field` replaced by `value`.
    pub fn with_field(self, field: SignupField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            SignupField::FirstName => Self {
                first_name: value,
                ..self
            },
            SignupField::LastName => Self {
                last_name: value,
                ..self
            },
            SignupField::Username => Self {
                username: value,
                ..self
            },
            SignupField::Password => Self {
                password: value,
                ..self
            },
            SignupField::Industry => Self {
                industry: value,
                ..self
            },
            SignupField::UserRole => Self {
                user_role: value,
                ..self
            },
            SignupField::Bio => Self { bio: value, ..self },
        }
    }

    /// The option after (or before) the current one for a selector field.
    ///
    /// An unset selector starts at the first option going forward and the
    /// last one going backward. Returns `None` for free-text fields.
    pub fn next_option(&self, field: SignupField, forward: bool) -> Option<&'static str> {
        let options = field.options()?;
        let current = options.iter().position(|o| *o == self.value(field));
        let len = options.len();
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        options.get(index).copied()
    }

    /// Display string for a field (password masked).
    pub fn display_value(&self, field: SignupField) -> String {
        match field {
            SignupField::Password => "*".repeat(self.password.chars().count()),
            _ => self.value(field).to_string(),
        }
    }

    /// The payload for the signup endpoint. A blank bio is left out.
    pub fn profile(&self) -> SignupProfile {
        let bio = self.bio.trim();
        SignupProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            industry: self.industry.clone(),
            user_role: self.user_role.clone(),
            bio: (!bio.is_empty()).then(|| self.bio.clone()),
        }
    }
}

/// Checks every required field is filled and every selector holds a
/// listed option. Fields are checked in display order.
pub fn validate_signup(form: &SignupForm) -> Result<(), SignupValidationError> {
    for field in SignupField::ALL {
        let value = form.value(field);
        if field.is_required() && value.trim().is_empty() {
            return Err(SignupValidationError::MissingField(field));
        }
        if let Some(options) = field.options() {
            if !options.contains(&value) {
                return Err(SignupValidationError::UnknownOption(field));
            }
        }
    }
    Ok(())
}
