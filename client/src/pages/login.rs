//! Login page: e-mail + password with a "remember me" choice.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in stores the token in the scope picked by "remember me"
//! and sends the user to the home route of their role. A visitor whose stored
//! token still decodes locally skips the form entirely.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::html::Input;
use leptos::prelude::*;
use session::login::{Field, FieldError, LoginRequest, UiError, validate_credentials};

/// Validate the form and build the request body.
fn build_request(email: &str, password: &str) -> Result<LoginRequest, FieldError> {
    let email = validate_credentials(email, password)?;
    Ok(LoginRequest::new(&email, password))
}

fn field_message(error: Option<FieldError>, field: Field) -> Option<&'static str> {
    error.filter(|e| e.field == field).map(|e| e.message)
}

/// Sign in, persist the token, and return the role's home route.
#[cfg(any(test, feature = "hydrate"))]
async fn complete_login(request: &LoginRequest, remember_me: bool) -> Result<&'static str, UiError> {
    let session = crate::net::api::login(request).await.map_err(|e| e.to_ui_error())?;
    let scope = crate::util::storage::browser_repository()
        .save(&session.token, remember_me)
        .map_err(|e| UiError::unexpected(&e.to_string()))?;
    #[cfg(feature = "hydrate")]
    log::info!("signed in as {} ({scope} storage)", session.user.role);
    #[cfg(not(feature = "hydrate"))]
    let _ = scope;
    Ok(session.user.role.home_path())
}

fn focus_input(node: NodeRef<Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(input) = node.get_untracked() {
            let _ = input.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = node;
}

#[cfg(feature = "hydrate")]
fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let banner = RwSignal::new(None::<UiError>);
    let field_error = RwSignal::new(None::<FieldError>);
    let email_ref = NodeRef::<Input>::new();
    let password_ref = NodeRef::<Input>::new();

    let focus = move |field: Field| match field {
        Field::Email => focus_input(email_ref),
        Field::Password => focus_input(password_ref),
    };

    // Already signed in: go straight to the role's home.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(home) = crate::util::auth::existing_session_home() {
            redirect_to(home);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        banner.set(None);
        let request = match build_request(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(err) => {
                field_error.set(Some(err));
                focus(err.field);
                return;
            }
        };
        field_error.set(None);
        busy.set(true);
        let remember = remember_me.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match complete_login(&request, remember).await {
                Ok(home) => redirect_to(home),
                Err(ui) => {
                    if let Some(field) = ui.focus {
                        focus(field);
                    }
                    banner.set(Some(ui));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, remember);
    };

    let clear_field_error = move |field: Field| {
        if field_error.get_untracked().is_some_and(|e| e.field == field) {
            field_error.set(None);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"TR Carrier"</h1>
                <p class="login-card__subtitle">"Sign in to the admin console"</p>
                <Show when=move || banner.get().is_some()>
                    <div
                        class="login-banner"
                        class:login-banner--critical=move || banner.get().is_some_and(|b| b.critical)
                        role="alert"
                    >
                        <strong>{move || banner.get().map(|b| b.message).unwrap_or_default()}</strong>
                        <p>{move || banner.get().and_then(|b| b.details).unwrap_or_default()}</p>
                    </div>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-email">"E-mail"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="text"
                        inputmode="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        node_ref=email_ref
                        aria-invalid=move || field_message(field_error.get(), Field::Email).is_some().to_string()
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            clear_field_error(Field::Email);
                        }
                    />
                    <p class="login-field-error">{move || field_message(field_error.get(), Field::Email)}</p>
                    <label class="login-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        node_ref=password_ref
                        aria-invalid=move || field_message(field_error.get(), Field::Password).is_some().to_string()
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            clear_field_error(Field::Password);
                        }
                    />
                    <p class="login-field-error">{move || field_message(field_error.get(), Field::Password)}</p>
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
