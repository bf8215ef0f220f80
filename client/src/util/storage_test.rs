#![cfg(not(feature = "hydrate"))]

use session::store::TOKEN_KEY;

use super::*;

#[test]
fn constructors_pick_scopes() {
    assert_eq!(BrowserStorage::durable().scope(), Scope::Durable);
    assert_eq!(BrowserStorage::volatile().scope(), Scope::Volatile);
}

#[test]
fn storage_is_empty_outside_the_browser() {
    assert_eq!(BrowserStorage::durable().get(TOKEN_KEY), None);
    assert_eq!(browser_repository().load(), None);
}

#[test]
fn writes_fail_outside_the_browser() {
    assert_eq!(BrowserStorage::volatile().set(TOKEN_KEY, "tok"), Err(StoreError::Unavailable(Scope::Volatile)));
    assert_eq!(browser_repository().save("tok", true), Err(StoreError::Unavailable(Scope::Durable)));
}

#[test]
fn clear_is_noop_but_callable() {
    browser_repository().clear();
}
