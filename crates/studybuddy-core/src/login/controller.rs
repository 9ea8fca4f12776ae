//! Async driver for the sign-in reducer.
//!
//! [`LoginController`] owns a [`LoginState`] and performs the effects the
//! reducer asks for: it calls the [`AuthClient`] and tells the [`Navigator`]
//! to show the dashboard. `submit` takes `&mut self`, so at most one request
//! per controller is ever in flight.

use std::sync::Arc;

use super::form::LoginField;
use super::state::{LoginEvent, LoginState};
use super::validate::validate;
use super::AuthError;
use crate::auth::{sign_in, AuthClient, Session};
use crate::event::Effect;
use crate::route::Navigator;

pub struct LoginController<C: ?Sized, N> {
    client: Arc<C>,
    navigator: N,
    state: LoginState,
}

impl<C, N> LoginController<C, N>
where
    C: AuthClient + ?Sized,
    N: Navigator,
{
    pub fn new(client: Arc<C>, navigator: N) -> Self {
        Self {
            client,
            navigator,
            state: LoginState::default(),
        }
    }

    /// Replaces the state with a fresh one using a custom threshold.
    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self {
            state: LoginState::new(max_attempts),
            ..self
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Sets one field and clears any shown error.
    pub fn update_field(&mut self, field: LoginField, value: impl Into<String>) {
        self.apply(LoginEvent::FieldEdited {
            field,
            value: value.into(),
        });
    }

    /// Validates the form and, when it passes, sends it to the Auth Client.
    ///
    /// Rate-limited, in-flight and invalid submissions return early without
    /// touching the network. Every client failure is reported as
    /// [`AuthError::InvalidCredentials`]; its cause only goes to the log.
    pub async fn submit(&mut self) -> Result<Session, AuthError> {
        if self.state.is_rate_limited() {
            self.apply(LoginEvent::SubmitRequested);
            return Err(AuthError::RateLimited);
        }
        if self.state.is_loading() {
            return Err(AuthError::InFlight);
        }
        let checked = validate(self.state.form());

        let transition = std::mem::take(&mut self.state).step(LoginEvent::SubmitRequested);
        self.state = transition.state;
        let credentials = match (checked, transition.effect) {
            (Err(e), _) => return Err(AuthError::Validation(e)),
            (Ok(()), Some(Effect::Login(credentials))) => credentials,
            (Ok(()), _) => return Err(AuthError::InFlight),
        };

        match sign_in(&*self.client, &credentials).await {
            Some(session) => {
                self.apply(LoginEvent::AuthSucceeded);
                Ok(session)
            }
            None => {
                self.apply(LoginEvent::AuthFailed);
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    fn apply(&mut self, event: LoginEvent) {
        let transition = std::mem::take(&mut self.state).step(event);
        self.state = transition.state;
        if let Some(Effect::Navigate(route)) = transition.effect {
            self.navigator.navigate_to(route);
        }
    }
}
