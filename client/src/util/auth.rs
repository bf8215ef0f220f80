//! Auth-state hook and shared session helpers for routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route mounts its own [`use_auth`] signal and resolves it once
//! against the backend. The login page uses the cheaper local decode only to
//! skip the form when a stored session already looks usable.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::auth::{AuthState, AuthStrategy};
use session::guard::LOGIN_PATH;
use session::token;

use crate::util::storage::browser_repository;

/// Strategy used by guarded routes: local pre-check, then server verification.
pub const AUTH_STRATEGY: AuthStrategy = AuthStrategy::PrecheckThenServer;

/// Mount-scoped auth state.
///
/// Starts as [`AuthState::pending`]. In the browser a single verification
/// round-trip settles it; during SSR it stays pending so the server renders
/// the loading placeholder and hydration finishes the job.
pub fn use_auth() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::pending());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let repository = browser_repository();
        let state = session::auth::resolve(&repository, &crate::net::api::HttpVerifier, AUTH_STRATEGY).await;
        log::debug!("auth resolved: authenticated={}", state.is_authenticated());
        auth.set(state);
    });

    auth
}

/// Navigation used for the login redirect: replaces the current history entry
/// so "back" cannot return to the guarded page.
pub fn login_redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Home route for a stored token that decodes locally, if any.
fn home_for_token(stored: Option<String>) -> Option<&'static str> {
    stored
        .as_deref()
        .and_then(token::decode)
        .map(|user| user.role.home_path())
}

/// Home route of an existing, locally valid session.
pub fn existing_session_home() -> Option<&'static str> {
    home_for_token(browser_repository().load())
}

/// Drop the session from both storage scopes, tell the backend, and go to the
/// login page.
pub fn sign_out<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    let repository = browser_repository();
    let token = repository.load();
    repository.clear();

    #[cfg(feature = "hydrate")]
    if let Some(token) = token {
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&token).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = token;

    navigate(LOGIN_PATH, login_redirect_options());
}
