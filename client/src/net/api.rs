//! REST API helpers for the auth endpoints of the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the session token only
//! exists in browser storage.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so login and verification
//! failures degrade to a banner or to the login page without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use session::auth::{TokenVerifier, VerifyError};
use session::claims::UserClaims;
use session::login::{LoginError, LoginRequest, LoginSession, UiError};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const VERIFY_ENDPOINT: &str = "/auth/validateJwt";
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";

/// Error returned by the REST helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error(transparent)]
    InvalidResponse(#[from] LoginError),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Banner to show on the login page for this failure.
    #[must_use]
    pub fn to_ui_error(&self) -> UiError {
        match self {
            Self::Status { status, message } => UiError::from_status(*status, message.as_deref()),
            Self::Network(_) | Self::Unavailable => UiError::connection(),
            Self::Decode(_) | Self::InvalidResponse(_) => UiError::unexpected(&self.to_string()),
        }
    }
}

/// Error body the backend sends with non-2xx responses.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.or(parsed.error).filter(|m| !m.trim().is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// The verification endpoint answers with the user object, bare or wrapped
/// in `{ "user": ... }` depending on backend version.
#[cfg(any(test, feature = "hydrate"))]
fn parse_verified_user(body: serde_json::Value) -> Result<UserClaims, VerifyError> {
    let user = match body {
        serde_json::Value::Object(mut map) if map.get("user").is_some_and(serde_json::Value::is_object) => {
            map.remove("user").unwrap_or_default()
        }
        other => other,
    };
    serde_json::from_value(user).map_err(|e| VerifyError::InvalidBody(e.to_string()))
}

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or a response
/// without a usable token and user.
pub async fn login(request: &LoginRequest) -> Result<LoginSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&crate::config::endpoint(LOGIN_ENDPOINT))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message: error_message(&body) });
        }
        let body: session::login::LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.into_session()?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Tell the backend the session is over via `POST /auth/logout`. Best effort.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&crate::config::endpoint(LOGOUT_ENDPOINT))
            .header("Authorization", &bearer(token))
            .send()
            .await;
        if let Err(e) = result {
            log::debug!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Verifies session tokens against `GET /auth/validateJwt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpVerifier;

impl TokenVerifier for HttpVerifier {
    async fn verify(&self, token: &str) -> Result<UserClaims, VerifyError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&crate::config::endpoint(VERIFY_ENDPOINT))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| VerifyError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(VerifyError::Rejected(resp.status()));
            }
            let body: serde_json::Value = resp.json().await.map_err(|e| VerifyError::InvalidBody(e.to_string()))?;
            parse_verified_user(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(VerifyError::Network("not available on server".to_owned()))
        }
    }
}
