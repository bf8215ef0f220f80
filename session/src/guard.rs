//! Route-guard decision logic.
//!
//! The guard is purely reactive: given the current [`AuthState`] and an
//! optional required role it picks one of four outcomes. A role mismatch is
//! rendered inline as "access denied"; only a missing session navigates.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::auth::AuthState;
use crate::claims::Role;

/// Route unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// What a guarded route should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still resolving; show a placeholder.
    Loading,
    /// No session; replace the current history entry with [`LOGIN_PATH`].
    RedirectToLogin,
    /// Signed in with the wrong role; show an inline access-denied message.
    Forbidden,
    /// Show the protected children.
    Render,
}

/// Decide how a guarded route renders for `state`.
#[must_use]
pub fn decide(state: &AuthState, required_role: Option<Role>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    let Some(user) = state.user.as_ref() else {
        return GuardDecision::RedirectToLogin;
    };
    match required_role {
        Some(role) if user.role != role => GuardDecision::Forbidden,
        _ => GuardDecision::Render,
    }
}

/// Per-mount guard bookkeeping.
///
/// Tracks whether the login redirect was already issued so a mount navigates
/// at most once, however many times its auth state is re-observed.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuardMount {
    required_role: Option<Role>,
    redirected: bool,
}

impl GuardMount {
    #[must_use]
    pub fn new(required_role: Option<Role>) -> Self {
        Self { required_role, redirected: false }
    }

    #[must_use]
    pub fn required_role(&self) -> Option<Role> {
        self.required_role
    }

    /// Decide for `state` and report whether a navigation must be issued now.
    pub fn observe(&mut self, state: &AuthState) -> (GuardDecision, bool) {
        let decision = decide(state, self.required_role);
        let navigate = decision == GuardDecision::RedirectToLogin && !self.redirected;
        if navigate {
            self.redirected = true;
        }
        (decision, navigate)
    }

    #[must_use]
    pub fn has_redirected(&self) -> bool {
        self.redirected
    }
}
