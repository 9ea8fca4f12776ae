//! The sign-up state machine as an immutable value and a pure reducer.
//!
//! Mirrors the sign-in reducer without the attempt counter: a rejected
//! sign-up keeps the whole form so the user can retry.

use super::form::{validate_signup, SignupField, SignupForm};
use super::SIGNUP_FAILED_MESSAGE;
use crate::event::{Effect, Transition};
use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupEvent {
    FieldEdited { field: SignupField, value: String },
    SubmitRequested,
    SignupSucceeded,
    SignupFailed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    form: SignupForm,
    error: Option<String>,
    loading: bool,
    phase: SignupPhase,
}

impl SignupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> SignupPhase {
        self.phase
    }

    pub fn step(self, event: SignupEvent) -> Transition<Self> {
        match event {
            SignupEvent::FieldEdited { field, value } => {
                let phase = match self.phase {
                    SignupPhase::Failed | SignupPhase::Success => SignupPhase::Idle,
                    other => other,
                };
                Transition::to(Self {
                    form: self.form.clone().with_field(field, value),
                    error: None,
                    phase,
                    ..self
                })
            }
            SignupEvent::SubmitRequested => self.submit_requested(),
            SignupEvent::SignupSucceeded if self.phase == SignupPhase::Submitting => {
                Transition::with_effect(
                    Self::default().with_phase(SignupPhase::Success),
                    Effect::Navigate(Route::Dashboard),
                )
            }
            SignupEvent::SignupFailed if self.phase == SignupPhase::Submitting => {
                Transition::to(Self {
                    error: Some(SIGNUP_FAILED_MESSAGE.to_string()),
                    loading: false,
                    ..self.with_phase(SignupPhase::Failed)
                })
            }
            other => {
                tracing::debug!("Ignoring {other:?} in phase {:?}", self.phase);
                Transition::to(self)
            }
        }
    }

    fn submit_requested(self) -> Transition<Self> {
        if self.loading {
            tracing::debug!("Ignoring sign-up request while one is in flight");
            return Transition::to(self);
        }
        match validate_signup(&self.form) {
            Err(e) => Transition::to(Self {
                error: Some(e.to_string()),
                ..self.with_phase(SignupPhase::Failed)
            }),
            Ok(()) => {
                let profile = self.form.profile();
                Transition::with_effect(
                    Self {
                        error: None,
                        loading: true,
                        ..self.with_phase(SignupPhase::Submitting)
                    },
                    Effect::Signup(profile),
                )
            }
        }
    }

    fn with_phase(self, phase: SignupPhase) -> Self {
        Self { phase, ..self }
    }
}

/// Pure reducer: the next state for `event`, discarding any effect.
pub fn reduce(state: SignupState, event: SignupEvent) -> SignupState {
    state.step(event).state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupState {
        [
            (SignupField::FirstName, "Jane"),
            (SignupField::LastName, "Doe"),
            (SignupField::Username, "janedoe"),
            (SignupField::Password, "secret"),
            (SignupField::Industry, "Industry 2"),
            (SignupField::UserRole, "Role 1"),
        ]
        .into_iter()
        .fold(SignupState::new(), |state, (field, value)| {
            reduce(
                state,
                SignupEvent::FieldEdited {
                    field,
                    value: value.to_string(),
                },
            )
        })
    }

    #[test]
    fn valid_submit_emits_profile() {
        let transition = filled().step(SignupEvent::SubmitRequested);
        match transition.effect {
            Some(Effect::Signup(profile)) => {
                assert_eq!(profile.username, "janedoe");
                assert_eq!(profile.industry, "Industry 2");
                assert_eq!(profile.bio, None);
            }
            other => panic!("expected signup effect, got {other:?}"),
        }
        assert!(transition.state.is_loading());
        assert_eq!(transition.state.phase(), SignupPhase::Submitting);
    }

    #[test]
    fn missing_field_blocks_submit() {
        let transition = SignupState::new().step(SignupEvent::SubmitRequested);
        assert!(transition.effect.is_none());
        assert_eq!(transition.state.error(), Some("First Name is required"));
        assert_eq!(transition.state.phase(), SignupPhase::Failed);
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let in_flight = reduce(filled(), SignupEvent::SubmitRequested);
        let transition = in_flight.clone().step(SignupEvent::SubmitRequested);
        assert!(transition.effect.is_none());
        assert_eq!(transition.state, in_flight);
    }

    #[test]
    fn success_resets_form_and_navigates() {
        let in_flight = reduce(filled(), SignupEvent::SubmitRequested);
        let transition = in_flight.step(SignupEvent::SignupSucceeded);

        assert_eq!(transition.effect, Some(Effect::Navigate(Route::Dashboard)));
        assert_eq!(transition.state.form(), &SignupForm::default());
        assert_eq!(transition.state.phase(), SignupPhase::Success);
        assert!(!transition.state.is_loading());
    }

    #[test]
    fn failure_keeps_form_and_shows_generic_message() {
        let in_flight = reduce(filled(), SignupEvent::SubmitRequested);
        let failed = reduce(in_flight, SignupEvent::SignupFailed);

        assert_eq!(failed.error(), Some(SIGNUP_FAILED_MESSAGE));
        assert_eq!(failed.form(), filled().form());
        assert!(!failed.is_loading());

        let edited = reduce(
            failed,
            SignupEvent::FieldEdited {
                field: SignupField::Bio,
                value: "hi".to_string(),
            },
        );
        assert!(edited.error().is_none());
        assert_eq!(edited.phase(), SignupPhase::Idle);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let idle = filled();
        assert_eq!(reduce(idle.clone(), SignupEvent::SignupSucceeded), idle);
    }
}
