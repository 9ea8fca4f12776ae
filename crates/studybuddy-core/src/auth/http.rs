//! HTTP implementation of [`AuthClient`] using `reqwest`.
//!
//! Both endpoints take a JSON body via `POST`. Any 2xx status counts as
//! success; the response body is kept as an opaque [`Session`] payload.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use super::{AuthClient, ClientError, Credentials, Session, SignupProfile};
use crate::config::settings::ApiConfig;

/// Talks to the placeholder account API.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    login_url: Url,
    signup_url: Url,
}

impl HttpAuthClient {
    /// Builds a client for the endpoints described by `config`.
    ///
    /// Endpoint paths are resolved against `config.base_url`, so an absolute
    /// path such as `/api/login` replaces any path on the base URL.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base =
            Url::parse(&config.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        let login_url = base
            .join(&config.login_path)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        let signup_url = base
            .join(&config.signup_path)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http,
            login_url,
            signup_url,
        })
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    pub fn signup_url(&self) -> &Url {
        &self.signup_url
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &Url,
        body: &T,
    ) -> Result<Session, ClientError> {
        let response = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Session::default());
        }

        let payload =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(Session::new(payload))
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        tracing::debug!("POST {} (login)", self.login_url);
        self.post_json(&self.login_url, credentials).await
    }

    async fn signup(&self, profile: &SignupProfile) -> Result<Session, ClientError> {
        tracing::debug!("POST {} (signup)", self.signup_url);
        self.post_json(&self.signup_url, profile).await
    }
}
