//! Effects flowing from the state machines back to their driver.
//!
//! The login and sign-up reducers are pure: they never call the network or
//! change screens themselves. Instead each step returns a [`Transition`]
//! carrying the new state and, optionally, one [`Effect`] the caller must
//! perform. The async controllers and the TUI event loop are such callers.

use crate::auth::{Credentials, SignupProfile};
use crate::route::Route;

/// Work a reducer asks its caller to perform.
///
/// Effects flow **Core → driver**. The core never performs them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send these credentials to [`crate::auth::AuthClient::login`].
    Login(Credentials),
    /// Send this profile to [`crate::auth::AuthClient::signup`].
    Signup(SignupProfile),
    /// Switch to another screen.
    Navigate(Route),
}

/// Result of feeding one event into a reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    pub state: S,
    pub effect: Option<Effect>,
}

impl<S> Transition<S> {
    /// A transition with no side effect.
    pub fn to(state: S) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    /// A transition that asks the caller to perform `effect`.
    pub fn with_effect(state: S, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}
