//! Client for the auth API (`/auth/v1`).
//!
//! Password sign-in and sign-up, token refresh, current user lookup and
//! sign-out. The resulting [`Session`] is what the table client uses to act
//! on behalf of a user.

use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::BackendConfig;
use crate::error::{BackendError, BackendResult};

/// The signed-in user, as much of it as the dashboard needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: i64,
    /// Unix timestamp (seconds) at which the access token expires.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    /// Whether the access token expires within `margin_secs` of `now`.
    ///
    /// A session without an expiry is treated as still valid.
    pub fn expires_within(&self, now: DateTime<Utc>, margin_secs: i64) -> bool {
        match self.expires_at {
            Some(at) => at - now.timestamp() <= margin_secs,
            None => false,
        }
    }

    fn stamp_expiry(mut self, now: DateTime<Utc>) -> Self {
        if self.expires_at.is_none() && self.expires_in > 0 {
            self.expires_at = Some(now.timestamp() + self.expires_in);
        }
        self
    }
}

/// Result of a sign-up.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUp {
    /// The account is usable immediately.
    SignedIn(Session),
    /// The backend sent a confirmation email first.
    ConfirmationRequired(User),
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshArgs<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl AuthClient {
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        Ok(Self {
            http: crate::http_client(&config)?,
            config,
        })
    }

    /// `POST /token?grant_type=password`
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> BackendResult<Session> {
        let session: Session = self
            .post("token?grant_type=password", &Credentials { email, password })
            .await?;
        Ok(session.stamp_expiry(Utc::now()))
    }

    /// `POST /token?grant_type=refresh_token`
    pub async fn refresh(&self, refresh_token: &str) -> BackendResult<Session> {
        let session: Session = self
            .post("token?grant_type=refresh_token", &RefreshArgs { refresh_token })
            .await?;
        Ok(session.stamp_expiry(Utc::now()))
    }

    /// `POST /signup`
    pub async fn sign_up(&self, email: &str, password: &str) -> BackendResult<SignUp> {
        let value: serde_json::Value = self
            .post("signup", &Credentials { email, password })
            .await?;

        if value.get("access_token").is_some() {
            let session: Session = decode("POST signup", value)?;
            return Ok(SignUp::SignedIn(session.stamp_expiry(Utc::now())));
        }
        // Without auto-confirm the body is the user itself (or nested under `user`).
        let user = value.get("user").cloned().unwrap_or(value);
        Ok(SignUp::ConfirmationRequired(decode("POST signup", user)?))
    }

    /// `GET /user`
    pub async fn user(&self, access_token: &str) -> BackendResult<User> {
        let endpoint = "GET user";
        let resp = self
            .http
            .get(self.config.auth_url("user"))
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| BackendError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(BackendError::from_response(endpoint, resp).await);
        }
        resp.json().await.map_err(|e| BackendError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// `POST /logout`. Revokes the refresh token server-side.
    pub async fn sign_out(&self, access_token: &str) -> BackendResult<()> {
        let endpoint = "POST logout";
        let resp = self
            .http
            .post(self.config.auth_url("logout"))
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| BackendError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(BackendError::from_response(endpoint, resp).await);
        }
        Ok(())
    }

    async fn post<A: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &A,
    ) -> BackendResult<R> {
        let endpoint = format!("POST {}", path.split('?').next().unwrap_or(path));
        tracing::debug!(%endpoint, "auth request");

        let resp = self
            .http
            .post(self.config.auth_url(path))
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.anon_key))
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(BackendError::from_response(&endpoint, resp).await);
        }
        resp.json().await.map_err(|e| BackendError::Deserialization {
            endpoint,
            source: e,
        })
    }
}

/// Decode an already-fetched JSON body.
fn decode<T: serde::de::DeserializeOwned>(endpoint: &str, value: serde_json::Value) -> BackendResult<T> {
    serde_json::from_value(value).map_err(|e| BackendError::Decode {
        endpoint: endpoint.into(),
        source: e,
    })
}
