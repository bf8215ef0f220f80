//! Header strip with the signed-in user and a sign-out action.

#[cfg(test)]
#[path = "session_bar_test.rs"]
mod session_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::auth::AuthState;
use session::claims::UserClaims;

use crate::util::auth::sign_out;

/// Label for the signed-in user: name, falling back to e-mail.
fn display_name(user: &UserClaims) -> String {
    let name = user.name.trim();
    if name.is_empty() { user.email.clone() } else { name.to_owned() }
}

#[component]
pub fn SessionBar() -> impl IntoView {
    let auth = use_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let user_label = move || {
        auth.and_then(|a| a.get().user)
            .map(|user| format!("{} ({})", display_name(&user), user.role))
            .unwrap_or_default()
    };

    view! {
        <header class="session-bar">
            <span class="session-bar__user">{user_label}</span>
            <button
                class="session-bar__sign-out"
                type="button"
                on:click=move |_| sign_out(navigate.clone())
            >
                "Sign out"
            </button>
        </header>
    }
}
