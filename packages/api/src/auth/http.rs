//! # HTTP authenticator
//!
//! Talks to an external sign-in endpoint:
//!
//! ```text
//! POST {base_url}/api/auth/login
//! {"email": "...", "password": "...", "role": "customer"}
//! ```
//!
//! A 2xx response carries a [`UserInfo`] body. Any other status is a rejection;
//! its message is taken from a JSON `message` or `error` field when present,
//! otherwise from the raw body, otherwise a generic line naming the status.

use serde::{Deserialize, Serialize};

use super::{AuthError, Authenticator};
use crate::models::{Role, UserInfo};

const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Clone, Debug)]
pub struct HttpAuthenticator {
    client: reqwest::Client,
    login_url: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl HttpAuthenticator {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            login_url: format!("{}{}", base_url.trim_end_matches('/'), LOGIN_PATH),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

impl Authenticator for HttpAuthenticator {
    async fn login(&self, email: &str, password: &str, role: Role) -> Result<UserInfo, AuthError> {
        tracing::debug!(%role, url = %self.login_url, "sending sign-in request");

        let response = self
            .client
            .post(&self.login_url)
            .json(&LoginRequest {
                email,
                password,
                role,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Sign-in request failed: {}", e);
                AuthError::Network(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<UserInfo>()
                .await
                .map_err(|e| AuthError::InvalidResponse(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "sign-in endpoint returned an error status");
        Err(AuthError::Rejected(rejection_message(status.as_u16(), &body)))
    }
}

/// Pick the user-facing message out of a failed sign-in response.
fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            if !message.trim().is_empty() {
                return message;
            }
        }
    }

    let body = body.trim();
    if body.is_empty() || body.starts_with('{') {
        format!("Sign-in failed (HTTP {status})")
    } else {
        body.to_string()
    }
}
