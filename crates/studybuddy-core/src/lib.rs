//! Study Buddy core library, UI-agnostic account and dashboard logic.
//!
//! `studybuddy-core` holds everything the sign-in, sign-up and dashboard
//! screens need that is not drawing pixels. It is decoupled from any UI
//! framework so the terminal frontend (`studybuddy-tui`) and its tests drive
//! the same state machines.
//!
//! # Modules
//!
//! - [`login`]: Login Attempt Controller: validation, rate limiting, the pure reducer and its async driver.
//! - [`signup`]: Sign-up form state machine and its async driver.
//! - [`auth`]: The [`AuthClient`] boundary and its HTTP implementation.
//! - [`route`]: Screen routes and the [`Navigator`] collaborator.
//! - [`dashboard`]: Sample certification data, KPIs and sorting.
//! - [`config`]: TOML-based settings, theme and key bindings.
//! - [`event`]: Side effects the state machines ask their caller to perform.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod login;
pub mod route;
pub mod signup;

pub use action::{Action, ActionCategory, ActionDescriptor, ActionRegistry};
pub use auth::http::HttpAuthClient;
pub use auth::{register, sign_in, AuthClient, ClientError, Credentials, Session, SignupProfile};
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
pub use dashboard::{
    format_date, sort_certifications, CertSort, Certification, CertificationRecord, Dashboard,
    Kpi, Tool,
};
pub use error::{CoreError, CoreResult};
pub use event::{Effect, Transition};
pub use login::{
    validate, AuthError, LoginController, LoginEvent, LoginField, LoginForm, LoginPhase,
    LoginState, ValidationError, MAX_ATTEMPTS,
};
pub use route::{Navigator, Route};
pub use signup::{
    validate_signup, SignupController, SignupError, SignupEvent, SignupField, SignupForm,
    SignupPhase, SignupState, SignupValidationError,
};
