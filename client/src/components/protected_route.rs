//! Route guard wrapping authenticated screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mount owns one auth signal. Children read it from context, so the
//! greeting and the guard never disagree about who is signed in.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::auth::AuthState;
use session::claims::Role;
use session::guard::{GuardDecision, GuardMount, LOGIN_PATH, decide};

use crate::util::auth::{login_redirect_options, use_auth};

/// Text shown while the session is being verified.
pub const LOADING_TEXT: &str = "Loading...";
/// Inline message for a signed-in user without the required role.
pub const FORBIDDEN_TEXT: &str = "Access denied";

/// Render `children` only for an authenticated user holding `role` (any role
/// when omitted). Unauthenticated visitors are sent to the login page once.
#[component]
pub fn ProtectedRoute(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    provide_context(auth);

    let mut on_state = login_redirect(role, use_navigate());
    Effect::new(move || {
        on_state(&auth.get());
    });

    move || match decide(&auth.get(), role) {
        GuardDecision::Loading => view! { <div class="guard guard--loading">{LOADING_TEXT}</div> }.into_any(),
        GuardDecision::RedirectToLogin => ().into_any(),
        GuardDecision::Forbidden => view! {
            <div class="guard guard--forbidden" role="alert">
                <h2>{FORBIDDEN_TEXT}</h2>
                <p>{forbidden_detail(role)}</p>
            </div>
        }
        .into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

/// Per-mount reaction to auth state changes: returns the guard decision and
/// sends the visitor to the login page the first time the session is missing.
fn login_redirect<F>(role: Option<Role>, navigate: F) -> impl FnMut(&AuthState) -> GuardDecision
where
    F: Fn(&str, NavigateOptions),
{
    let mut mount = GuardMount::new(role);
    move |state| {
        let (decision, navigate_now) = mount.observe(state);
        if navigate_now {
            navigate(LOGIN_PATH, login_redirect_options());
        }
        decision
    }
}

fn forbidden_detail(role: Option<Role>) -> String {
    match role {
        Some(role) => format!("This page requires the {role} role."),
        None => "You are not allowed to view this page.".to_owned(),
    }
}
