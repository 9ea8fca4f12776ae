//! The sign-in state machine as an immutable value and a pure reducer.
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──▶ Failed
//!                      │
//!                      └──valid──▶ Submitting ──ok──▶ Success
//!                                      │
//!                                      └──rejected──▶ Failed | RateLimited
//! Failed ──edit──▶ Idle        Failed ──submit──▶ Validating
//! ```
//!
//! `Validating` is passed through inside a single `SubmitRequested` step.
//! `RateLimited` is terminal: only a fresh [`LoginState`] leaves it.

use super::form::{LoginField, LoginForm};
use super::validate::validate;
use super::{INVALID_CREDENTIALS_MESSAGE, MAX_ATTEMPTS, RATE_LIMITED_MESSAGE};
use crate::event::{Effect, Transition};
use crate::route::Route;

/// Where the sign-in flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
    RateLimited,
}

/// Inputs to the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    /// The user changed a field.
    FieldEdited { field: LoginField, value: String },
    /// The user asked to sign in.
    SubmitRequested,
    /// The Auth Client accepted the credentials.
    AuthSucceeded,
    /// The Auth Client rejected the credentials or could not be reached.
    AuthFailed,
}

/// Everything the sign-in screen shows, as one immutable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginState {
    form: LoginForm,
    attempts: u32,
    max_attempts: u32,
    error: Option<String>,
    loading: bool,
    phase: LoginPhase,
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS)
    }
}

impl LoginState {
    /// A fresh state locking out after `max_attempts` consecutive failures
    /// (at least one).
    pub fn new(max_attempts: u32) -> Self {
        Self {
            form: LoginForm::default(),
            attempts: 0,
            max_attempts: max_attempts.max(1),
            error: None,
            loading: false,
            phase: LoginPhase::Idle,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// Derived from the counter, never stored.
    pub fn is_rate_limited(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Failures left before the lockout.
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Feeds one event through the state machine.
    pub fn step(self, event: LoginEvent) -> Transition<Self> {
        match event {
            LoginEvent::FieldEdited { field, value } => Transition::to(self.edited(field, value)),
            LoginEvent::SubmitRequested => self.submit_requested(),
            LoginEvent::AuthSucceeded => self.auth_succeeded(),
            LoginEvent::AuthFailed => Transition::to(self.auth_failed()),
        }
    }

    fn edited(self, field: LoginField, value: String) -> Self {
        let form = self.form.clone().with_field(field, value);
        match self.phase {
            // The lockout notice stays up; only the values change.
            LoginPhase::RateLimited => Self { form, ..self },
            LoginPhase::Failed | LoginPhase::Success => Self {
                form,
                error: None,
                phase: LoginPhase::Idle,
                ..self
            },
            _ => Self {
                form,
                error: None,
                ..self
            },
        }
    }

    fn submit_requested(self) -> Transition<Self> {
        if self.is_rate_limited() {
            tracing::debug!("Sign-in blocked after {} failed attempts", self.attempts);
            return Transition::to(self.locked_out());
        }
        if self.loading {
            tracing::debug!("Ignoring sign-in request while one is in flight");
            return Transition::to(self);
        }

        let validating = self.enter(LoginPhase::Validating);
        match validate(&validating.form) {
            Err(e) => Transition::to(Self {
                error: Some(e.to_string()),
                ..validating.enter(LoginPhase::Failed)
            }),
            Ok(()) => {
                let credentials = validating.form.credentials();
                Transition::with_effect(
                    Self {
                        error: None,
                        loading: true,
                        ..validating.enter(LoginPhase::Submitting)
                    },
                    Effect::Login(credentials),
                )
            }
        }
    }

    fn auth_succeeded(self) -> Transition<Self> {
        if self.phase != LoginPhase::Submitting {
            tracing::debug!("Ignoring sign-in success in phase {:?}", self.phase);
            return Transition::to(self);
        }
        Transition::with_effect(
            Self {
                form: LoginForm::default(),
                attempts: 0,
                error: None,
                loading: false,
                ..self.enter(LoginPhase::Success)
            },
            Effect::Navigate(Route::Dashboard),
        )
    }

    fn auth_failed(self) -> Self {
        if self.phase != LoginPhase::Submitting {
            tracing::debug!("Ignoring sign-in failure in phase {:?}", self.phase);
            return self;
        }
        let failed = Self {
            form: self.form.clone().without_password(),
            attempts: self.attempts.saturating_add(1),
            loading: false,
            ..self
        };
        if failed.is_rate_limited() {
            failed.locked_out()
        } else {
            Self {
                error: Some(INVALID_CREDENTIALS_MESSAGE.to_string()),
                ..failed.enter(LoginPhase::Failed)
            }
        }
    }

    fn locked_out(self) -> Self {
        Self {
            error: Some(RATE_LIMITED_MESSAGE.to_string()),
            loading: false,
            ..self.enter(LoginPhase::RateLimited)
        }
    }

    fn enter(self, phase: LoginPhase) -> Self {
        if self.phase != phase {
            tracing::trace!("login phase {:?} -> {:?}", self.phase, phase);
        }
        Self { phase, ..self }
    }
}

/// Pure reducer: the next state for `event`, discarding any effect.
pub fn reduce(state: LoginState, event: LoginEvent) -> LoginState {
    state.step(event).state
}
