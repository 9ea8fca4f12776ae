//! Async driver for the sign-up reducer.

use std::sync::Arc;

use super::form::{validate_signup, SignupField};
use super::state::{SignupEvent, SignupState};
use super::SignupError;
use crate::auth::{register, AuthClient, Session};
use crate::event::Effect;
use crate::route::Navigator;

pub struct SignupController<C: ?Sized, N> {
    client: Arc<C>,
    navigator: N,
    state: SignupState,
}

impl<C, N> SignupController<C, N>
where
    C: AuthClient + ?Sized,
    N: Navigator,
{
    pub fn new(client: Arc<C>, navigator: N) -> Self {
        Self {
            client,
            navigator,
            state: SignupState::new(),
        }
    }

    pub fn state(&self) -> &SignupState {
        &self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn update_field(&mut self, field: SignupField, value: impl Into<String>) {
        self.apply(SignupEvent::FieldEdited {
            field,
            value: value.into(),
        });
    }

    /// Moves a selector field to its next (or previous) option.
    pub fn cycle_option(&mut self, field: SignupField, forward: bool) {
        if let Some(option) = self.state.form().next_option(field, forward) {
            self.update_field(field, option);
        }
    }

    /// Validates the form and sends it to the signup endpoint.
    pub async fn submit(&mut self) -> Result<Session, SignupError> {
        if self.state.is_loading() {
            return Err(SignupError::InFlight);
        }
        let checked = validate_signup(self.state.form());

        let transition = std::mem::take(&mut self.state).step(SignupEvent::SubmitRequested);
        self.state = transition.state;
        let profile = match (checked, transition.effect) {
            (Err(e), _) => return Err(SignupError::Validation(e)),
            (Ok(()), Some(Effect::Signup(profile))) => profile,
            (Ok(()), _) => return Err(SignupError::InFlight),
        };

        match register(&*self.client, &profile).await {
            Some(session) => {
                self.apply(SignupEvent::SignupSucceeded);
                Ok(session)
            }
            None => {
                self.apply(SignupEvent::SignupFailed);
                Err(SignupError::Failed)
            }
        }
    }

    fn apply(&mut self, event: SignupEvent) {
        let transition = std::mem::take(&mut self.state).step(event);
        self.state = transition.state;
        if let Some(Effect::Navigate(route)) = transition.effect {
            self.navigator.navigate_to(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::testing::ScriptedClient;
    use crate::route::{RecordingNavigator, Route};
    use crate::signup::{SignupForm, SignupValidationError};

    type Ctrl = SignupController<ScriptedClient, RecordingNavigator>;

    fn controller(outcomes: &[bool]) -> (Arc<ScriptedClient>, Ctrl) {
        let client = Arc::new(ScriptedClient::new(outcomes));
        let ctrl = SignupController::new(Arc::clone(&client), RecordingNavigator::new());
        (client, ctrl)
    }

    fn fill(ctrl: &mut Ctrl) {
        ctrl.update_field(SignupField::FirstName, "Jane");
        ctrl.update_field(SignupField::LastName, "Doe");
        ctrl.update_field(SignupField::Username, "janedoe");
        ctrl.update_field(SignupField::Password, "secret");
        ctrl.cycle_option(SignupField::Industry, true);
        ctrl.cycle_option(SignupField::UserRole, true);
        ctrl.cycle_option(SignupField::UserRole, true);
    }

    #[tokio::test]
    async fn success_sends_profile_and_navigates() {
        let (client, mut ctrl) = controller(&[true]);
        fill(&mut ctrl);
        ctrl.update_field(SignupField::Bio, "Studying for Security+");

        ctrl.submit().await.unwrap();

        let calls = client.signup_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].industry, "Industry 1");
        assert_eq!(calls[0].user_role, "Role 2");
        assert_eq!(calls[0].bio.as_deref(), Some("Studying for Security+"));
        assert_eq!(ctrl.state().form(), &SignupForm::default());
        assert_eq!(ctrl.navigator().visited(), &[Route::Dashboard]);
    }

    #[tokio::test]
    async fn failure_keeps_form_and_stays_put() {
        let (_client, mut ctrl) = controller(&[false]);
        fill(&mut ctrl);
        let before = ctrl.state().form().clone();

        assert_eq!(ctrl.submit().await, Err(SignupError::Failed));

        assert_eq!(ctrl.state().form(), &before);
        assert_eq!(ctrl.state().error(), Some("Signup failed. Please try again."));
        assert!(ctrl.navigator().visited().is_empty());
    }

    #[tokio::test]
    async fn incomplete_form_never_reaches_client() {
        let (client, mut ctrl) = controller(&[true]);
        ctrl.update_field(SignupField::FirstName, "Jane");

        assert_eq!(
            ctrl.submit().await,
            Err(SignupError::Validation(SignupValidationError::MissingField(
                SignupField::LastName
            )))
        );
        assert!(client.signup_calls().is_empty());
    }
}
