//! Landing screens behind the route guard.
//!
//! Both pages read the auth signal the guard provides, so they only ever
//! render for a verified user.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use session::auth::AuthState;
use session::claims::UserClaims;

use crate::components::session_bar::SessionBar;

fn greeting(user: Option<&UserClaims>) -> String {
    match user.map(|u| u.name.trim()).filter(|name| !name.is_empty()) {
        Some(name) => format!("Welcome, {name}"),
        None => "Welcome".to_owned(),
    }
}

fn current_greeting() -> impl Fn() -> String + Copy + Send + Sync + 'static {
    let auth = use_context::<RwSignal<AuthState>>();
    move || greeting(auth.and_then(|a| a.get().user).as_ref())
}

/// Driver landing page; open to any signed-in role.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let greeting = current_greeting();
    view! {
        <div class="dashboard-page">
            <SessionBar/>
            <main class="dashboard-main">
                <h1>"Dashboard"</h1>
                <p class="dashboard-greeting">{greeting}</p>
            </main>
        </div>
    }
}

/// Admin landing page.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let greeting = current_greeting();
    view! {
        <div class="dashboard-page dashboard-page--admin">
            <SessionBar/>
            <main class="dashboard-main">
                <h1>"Admin dashboard"</h1>
                <p class="dashboard-greeting">{greeting}</p>
            </main>
        </div>
    }
}
