//! Auth-state resolution for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guarded view resolves its own [`AuthState`] once per mount: read the
//! stored token, and if there is one, ask the backend to re-validate it. The
//! verifier is a trait so the browser supplies an HTTP implementation and
//! tests supply fakes.
//!
//! TRADE-OFFS
//! ==========
//! Every verification failure collapses to "unauthenticated", including a
//! transient network error. There is no retry and no cached last-known user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use crate::claims::UserClaims;
use crate::store::{SessionRepository, TokenStore};
use crate::token;

/// Error returned by a [`TokenVerifier`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// The request never produced a response.
    #[error("verification request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("verification rejected with status {0}")]
    Rejected(u16),
    /// The backend answered 2xx but the body was not a user object.
    #[error("verification response was not a user: {0}")]
    InvalidBody(String),
}

/// Server-side re-validation of a session token.
pub trait TokenVerifier {
    /// Present `token` as a bearer credential and return the user it belongs to.
    fn verify(&self, token: &str) -> impl Future<Output = Result<UserClaims, VerifyError>>;
}

/// How a stored token is turned into an authenticated user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStrategy {
    /// One server round-trip decides.
    #[default]
    ServerVerified,
    /// Decode locally first; tokens that are malformed or expired are dropped
    /// without a round-trip, the rest are still verified by the server.
    PrecheckThenServer,
}

/// Authentication view model for a single guarded mount.
///
/// `user` and [`AuthState::is_authenticated`] are meaningless while `loading`
/// is true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserClaims>,
    pub loading: bool,
}

impl AuthState {
    /// Freshly mounted, not yet resolved.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn authenticated(user: UserClaims) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { user: None, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::pending()
    }
}

/// Resolve the auth state from the stored session token.
///
/// Performs at most one verification request and never retries. The returned
/// state always has `loading == false`.
///
/// A token that fails the pre-check or verification is removed from both
/// scopes, so the login page never mistakes it for a live session.
pub async fn resolve<D, V, T>(repository: &SessionRepository<D, V>, verifier: &T, strategy: AuthStrategy) -> AuthState
where
    D: TokenStore,
    V: TokenStore,
    T: TokenVerifier,
{
    let Some(token) = repository.load() else {
        return AuthState::unauthenticated();
    };

    if strategy == AuthStrategy::PrecheckThenServer && token::decode(&token).is_none() {
        log::debug!("stored session token failed local pre-check");
        repository.clear();
        return AuthState::unauthenticated();
    }

    match verifier.verify(&token).await {
        Ok(user) => AuthState::authenticated(user),
        Err(e) => {
            log::debug!("session verification failed, discarding token: {e}");
            repository.clear();
            AuthState::unauthenticated()
        }
    }
}
