use std::path::PathBuf;

use studybuddy_core::config::settings::Config;
use studybuddy_core::{
    ActionRegistry, CertSort, Certification, Dashboard, Effect, Keymap, LoginEvent, LoginField,
    LoginPhase, LoginState, Navigator, Route, SignupEvent, SignupField, SignupPhase, SignupState,
    Theme,
};

use crate::background::AuthMessage;

/// Returns the path to the project config directory.
pub fn config_dir() -> PathBuf {
    // Check for project-local config directory first, then fall back
    let local = PathBuf::from("config");
    if local.exists() {
        return local;
    }
    // Fall back to ~/.config/studybuddy
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("studybuddy")
}

/// Top-level application state.
///
/// Every update consumes the value and returns a new one. Updates that
/// need network I/O also hand back the [`Effect`] for the event loop to run.
#[derive(Debug, Clone)]
pub struct App {
    route: Route,
    login: LoginState,
    login_focus: LoginField,
    signup: SignupState,
    signup_focus: SignupField,
    dashboard: Dashboard,
    sort: CertSort,
    cursor: usize,
    /// Signed-in username shown in the header.
    user: Option<String>,
    status_message: Option<String>,
    show_help: bool,
    should_quit: bool,
    date_format: String,
    theme: Theme,
    keymap: Keymap,
    action_registry: ActionRegistry,
}

impl App {
    pub fn new(config: &Config, theme: Theme, keymap: Keymap) -> Self {
        Self {
            route: Route::Home,
            login: LoginState::new(config.login.max_attempts),
            login_focus: LoginField::Username,
            signup: SignupState::new(),
            signup_focus: SignupField::FirstName,
            dashboard: Dashboard::sample(),
            sort: config.ui.initial_sort(),
            cursor: 0,
            user: None,
            status_message: None,
            show_help: false,
            should_quit: false,
            date_format: config.ui.date_format.clone(),
            theme,
            keymap,
            action_registry: ActionRegistry::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn login_focus(&self) -> LoginField {
        self.login_focus
    }

    pub fn signup(&self) -> &SignupState {
        &self.signup
    }

    pub fn signup_focus(&self) -> SignupField {
        self.signup_focus
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn sort(&self) -> CertSort {
        self.sort
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn action_registry(&self) -> &ActionRegistry {
        &self.action_registry
    }

    /// Active certifications in the current sort order.
    pub fn sorted_certifications(&self) -> Vec<Certification> {
        self.dashboard.sorted(self.sort)
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.navigate_to(route);
        self
    }

    pub fn with_status(self, msg: impl Into<String>) -> Self {
        Self {
            status_message: Some(msg.into()),
            ..self
        }
    }

    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    pub fn with_help(self, show_help: bool) -> Self {
        Self { show_help, ..self }
    }

    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    /// Moves focus to the next (or previous) field of the current form.
    pub fn with_focus_moved(self, forward: bool) -> Self {
        match self.route {
            Route::Home => Self {
                login_focus: if forward {
                    self.login_focus.next()
                } else {
                    self.login_focus.prev()
                },
                ..self
            },
            Route::Signup => Self {
                signup_focus: if forward {
                    self.signup_focus.next()
                } else {
                    self.signup_focus.prev()
                },
                ..self
            },
            _ => self,
        }
    }

    /// Appends `c` to the focused text field. Selector fields ignore typing.
    pub fn with_form_char(self, c: char) -> Self {
        match self.route {
            Route::Home => {
                let value = format!("{}{c}", self.login.form().value(self.login_focus));
                let field = self.login_focus;
                self.edit_login(field, value)
            }
            Route::Signup if self.signup_focus.options().is_none() => {
                let value = format!("{}{c}", self.signup.form().value(self.signup_focus));
                let field = self.signup_focus;
                self.edit_signup(field, value)
            }
            _ => self,
        }
    }

    /// Removes the last character of the focused field.
    pub fn with_form_backspace(self) -> Self {
        match self.route {
            Route::Home => {
                let mut value = self.login.form().value(self.login_focus).to_string();
                value.pop();
                let field = self.login_focus;
                self.edit_login(field, value)
            }
            Route::Signup => {
                let field = self.signup_focus;
                // Selectors hold whole options, so they clear instead.
                let mut value = match field.options() {
                    Some(_) => String::new(),
                    None => self.signup.form().value(field).to_string(),
                };
                value.pop();
                self.edit_signup(field, value)
            }
            _ => self,
        }
    }

    /// Picks the next (or previous) option of a focused sign-up selector.
    pub fn with_option_cycled(self, forward: bool) -> Self {
        if self.route != Route::Signup {
            return self;
        }
        let field = self.signup_focus;
        match self.signup.form().next_option(field, forward) {
            Some(option) => self.edit_signup(field, option),
            None => self,
        }
    }

    /// Submits the current form. Returns the request to send, if any.
    pub fn with_submit(self) -> (Self, Option<Effect>) {
        match self.route {
            Route::Home => self.apply_login(LoginEvent::SubmitRequested),
            Route::Signup => self.apply_signup(SignupEvent::SubmitRequested),
            _ => (self, None),
        }
    }

    /// Feeds the outcome of a background auth request into the state machines.
    ///
    /// A success only signs the user in when the matching form was still
    /// waiting for it.
    pub fn with_auth_message(self, msg: AuthMessage) -> Self {
        match msg {
            AuthMessage::LoginSucceeded { username } => {
                let waiting = self.login.phase() == LoginPhase::Submitting;
                let (app, _) = self.apply_login(LoginEvent::AuthSucceeded);
                if waiting {
                    app.signed_in(username)
                } else {
                    app
                }
            }
            AuthMessage::LoginFailed => self.apply_login(LoginEvent::AuthFailed).0,
            AuthMessage::SignupSucceeded { username } => {
                let waiting = self.signup.phase() == SignupPhase::Submitting;
                let (app, _) = self.apply_signup(SignupEvent::SignupSucceeded);
                if waiting {
                    app.signed_in(username)
                } else {
                    app
                }
            }
            AuthMessage::SignupFailed => self.apply_signup(SignupEvent::SignupFailed).0,
        }
    }

    pub fn with_cursor_down(self) -> Self {
        let last = self.dashboard.active.len().saturating_sub(1);
        Self {
            cursor: (self.cursor + 1).min(last),
            ..self
        }
    }

    pub fn with_cursor_up(self) -> Self {
        Self {
            cursor: self.cursor.saturating_sub(1),
            ..self
        }
    }

    /// Switches to the next certification ordering.
    pub fn with_sort_cycle(self) -> Self {
        let sort = self.sort.next();
        Self {
            sort,
            cursor: 0,
            status_message: Some(format!("Sorted by {}", sort.label())),
            ..self
        }
    }

    /// Leaves the dashboard. The sign-in state (and its failure count) is
    /// kept because signing out does not restart the app.
    pub fn with_sign_out(self) -> Self {
        let app = Self {
            user: None,
            login_focus: LoginField::Username,
            ..self
        };
        app.with_route(Route::Home).with_status("Signed out")
    }

    fn signed_in(self, username: String) -> Self {
        Self {
            status_message: Some(format!("Signed in as {username}")),
            user: Some(username),
            ..self
        }
    }

    fn edit_login(self, field: LoginField, value: String) -> Self {
        let (app, _) = self.apply_login(LoginEvent::FieldEdited { field, value });
        app
    }

    fn edit_signup(self, field: SignupField, value: impl Into<String>) -> Self {
        let (app, _) = self.apply_signup(SignupEvent::FieldEdited {
            field,
            value: value.into(),
        });
        app
    }

    fn apply_login(mut self, event: LoginEvent) -> (Self, Option<Effect>) {
        let transition = std::mem::take(&mut self.login).step(event);
        self.login = transition.state;
        self.perform(transition.effect)
    }

    fn apply_signup(mut self, event: SignupEvent) -> (Self, Option<Effect>) {
        let transition = std::mem::take(&mut self.signup).step(event);
        self.signup = transition.state;
        self.perform(transition.effect)
    }

    /// Runs navigation effects in place and hands network effects back.
    fn perform(mut self, effect: Option<Effect>) -> (Self, Option<Effect>) {
        match effect {
            Some(Effect::Navigate(route)) => {
                self.navigate_to(route);
                (self, None)
            }
            other => (self, other),
        }
    }
}

impl Navigator for App {
    fn navigate_to(&mut self, route: Route) {
        tracing::debug!("navigate_to {}", route.path());
        self.route = route;
        self.cursor = 0;
        self.show_help = false;
    }
}
