//! Auth requests run off the event loop.
//!
//! [`spawn_login`] and [`spawn_signup`] call the [`AuthClient`] on a tokio
//! task and report the outcome to the main loop through an unbounded mpsc
//! channel. Successes carry the username the request was made for.

use std::sync::Arc;

use studybuddy_core::{register, sign_in, AuthClient, Credentials, SignupProfile};
use tokio::sync::mpsc::UnboundedSender;

/// Messages sent from auth tasks to the main event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMessage {
    LoginSucceeded { username: String },
    LoginFailed,
    SignupSucceeded { username: String },
    SignupFailed,
}

/// Sends `credentials` to the login endpoint in the background.
pub fn spawn_login(
    client: Arc<dyn AuthClient>,
    credentials: Credentials,
    tx: UnboundedSender<AuthMessage>,
) {
    tokio::spawn(async move {
        let session = sign_in(&*client, &credentials).await;
        let msg = match session {
            Some(_) => AuthMessage::LoginSucceeded {
                username: credentials.username,
            },
            None => AuthMessage::LoginFailed,
        };
        let _ = tx.send(msg);
    });
}

/// Sends `profile` to the signup endpoint in the background.
pub fn spawn_signup(
    client: Arc<dyn AuthClient>,
    profile: SignupProfile,
    tx: UnboundedSender<AuthMessage>,
) {
    tokio::spawn(async move {
        let session = register(&*client, &profile).await;
        let msg = match session {
            Some(_) => AuthMessage::SignupSucceeded {
                username: profile.username,
            },
            None => AuthMessage::SignupFailed,
        };
        let _ = tx.send(msg);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use studybuddy_core::{ClientError, Session};
    use tokio::sync::mpsc;

    /// Answers every call the same way.
    struct FixedClient(bool);

    impl FixedClient {
        fn answer(&self) -> Result<Session, ClientError> {
            if self.0 {
                Ok(Session::default())
            } else {
                Err(ClientError::Status(500))
            }
        }
    }

    #[async_trait]
    impl AuthClient for FixedClient {
        async fn login(&self, _: &Credentials) -> Result<Session, ClientError> {
            self.answer()
        }

        async fn signup(&self, _: &SignupProfile) -> Result<Session, ClientError> {
            self.answer()
        }
    }

    #[tokio::test]
    async fn login_outcome_is_reported() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_login(Arc::new(FixedClient(true)), Credentials::new("amy", "pw"), tx.clone());
        assert_eq!(
            rx.recv().await,
            Some(AuthMessage::LoginSucceeded {
                username: "amy".to_string()
            })
        );

        spawn_login(Arc::new(FixedClient(false)), Credentials::new("amy", "pw"), tx);
        assert_eq!(rx.recv().await, Some(AuthMessage::LoginFailed));
    }

    fn profile() -> SignupProfile {
        SignupProfile {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            username: "janedoe".to_string(),
            password: "pw".to_string(),
            industry: "Industry 1".to_string(),
            user_role: "Role 1".to_string(),
            bio: None,
        }
    }

    #[tokio::test]
    async fn signup_outcome_names_the_new_account() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_signup(Arc::new(FixedClient(true)), profile(), tx.clone());
        assert_eq!(
            rx.recv().await,
            Some(AuthMessage::SignupSucceeded {
                username: "janedoe".to_string()
            })
        );

        spawn_signup(Arc::new(FixedClient(false)), profile(), tx);
        assert_eq!(rx.recv().await, Some(AuthMessage::SignupFailed));
    }
}
