//! The Auth Client boundary.
//!
//! The account flows only need to know whether the remote endpoint accepted
//! a request. [`AuthClient`] expresses that as a `Result`, so no caller ever
//! relies on panics or exception-style control flow. [`http::HttpAuthClient`]
//! is the production implementation.

pub mod http;

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

/// Username/password pair sent to the login endpoint.
///
/// The username is already trimmed when the login flow builds this value.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New-account payload sent to the signup endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupProfile {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub industry: String,
    pub user_role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl fmt::Debug for SignupProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupProfile")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("industry", &self.industry)
            .field("user_role", &self.user_role)
            .field("bio", &self.bio)
            .finish()
    }
}

/// Opaque success payload returned by the Auth Client.
///
/// The account flows only treat its presence as "success"; the JSON body is
/// kept for callers that want to inspect it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    payload: serde_json::Value,
}

impl Session {
    pub fn new(payload: serde_json::Value) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}

/// Transport-level failures of an [`AuthClient`].
///
/// These never reach the user verbatim; the login flow logs them and shows
/// a generic message instead.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Exchanges credentials or a new profile for a [`Session`].
///
/// Both calls fail when the endpoint answers with a non-success status or
/// cannot be reached.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError>;

    async fn signup(&self, profile: &SignupProfile) -> Result<Session, ClientError>;
}

/// Sends `credentials` to `client` and logs the outcome.
///
/// The failure cause only reaches the log; callers get `None` and show
/// their own generic message.
pub async fn sign_in<C>(client: &C, credentials: &Credentials) -> Option<Session>
where
    C: AuthClient + ?Sized,
{
    match client.login(credentials).await {
        Ok(session) => {
            tracing::info!("Signed in as {}", credentials.username);
            Some(session)
        }
        Err(e) => {
            tracing::warn!("Sign-in for {} rejected: {e}", credentials.username);
            None
        }
    }
}

/// Sends `profile` to `client` and logs the outcome, like [`sign_in`].
pub async fn register<C>(client: &C, profile: &SignupProfile) -> Option<Session>
where
    C: AuthClient + ?Sized,
{
    match client.signup(profile).await {
        Ok(session) => {
            tracing::info!("Created account {}", profile.username);
            Some(session)
        }
        Err(e) => {
            tracing::warn!("Sign-up for {} failed: {e}", profile.username);
            None
        }
    }
}
