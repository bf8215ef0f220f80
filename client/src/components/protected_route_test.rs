use std::cell::RefCell;

use session::claims::UserClaims;

use super::*;

fn user(role: Role) -> UserClaims {
    UserClaims { id: 4, name: "Lia".into(), email: "lia@example.com".into(), role }
}

#[test]
fn forbidden_detail_names_required_role() {
    assert_eq!(forbidden_detail(Some(Role::Admin)), "This page requires the admin role.");
}

#[test]
fn forbidden_detail_without_role_is_generic() {
    assert_eq!(forbidden_detail(None), "You are not allowed to view this page.");
}

#[test]
fn missing_session_navigates_to_login_once_with_replace() {
    let calls = RefCell::new(Vec::new());
    let mut on_state = login_redirect(None, |path: &str, options: NavigateOptions| {
        calls.borrow_mut().push((path.to_owned(), options.replace));
    });

    assert_eq!(on_state(&AuthState::pending()), GuardDecision::Loading);
    assert!(calls.borrow().is_empty());

    assert_eq!(on_state(&AuthState::unauthenticated()), GuardDecision::RedirectToLogin);
    assert_eq!(on_state(&AuthState::unauthenticated()), GuardDecision::RedirectToLogin);

    assert_eq!(*calls.borrow(), vec![("/login".to_owned(), true)]);
}

#[test]
fn wrong_role_is_forbidden_without_navigation() {
    let calls = RefCell::new(0_usize);
    let mut on_state = login_redirect(Some(Role::Admin), |_: &str, _: NavigateOptions| {
        *calls.borrow_mut() += 1;
    });

    assert_eq!(on_state(&AuthState::pending()), GuardDecision::Loading);
    assert_eq!(on_state(&AuthState::authenticated(user(Role::Driver))), GuardDecision::Forbidden);

    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn matching_role_renders_without_navigation() {
    let calls = RefCell::new(0_usize);
    let mut on_state = login_redirect(Some(Role::Admin), |_: &str, _: NavigateOptions| {
        *calls.borrow_mut() += 1;
    });

    assert_eq!(on_state(&AuthState::authenticated(user(Role::Admin))), GuardDecision::Render);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn signal_driven_state_changes_redirect_once() {
    let owner = leptos::reactive::owner::Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::pending());
        let calls = RefCell::new(Vec::new());
        let mut on_state = login_redirect(None, |path: &str, options: NavigateOptions| {
            calls.borrow_mut().push((path.to_owned(), options.replace));
        });

        assert_eq!(on_state(&auth.get_untracked()), GuardDecision::Loading);
        auth.set(AuthState::unauthenticated());
        assert_eq!(on_state(&auth.get_untracked()), GuardDecision::RedirectToLogin);
        auth.set(AuthState::unauthenticated());
        on_state(&auth.get_untracked());

        assert_eq!(*calls.borrow(), vec![("/login".to_owned(), true)]);
    });
}
