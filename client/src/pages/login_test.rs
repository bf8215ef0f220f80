#[cfg(not(feature = "hydrate"))]
use futures::executor::block_on;

use super::*;

#[test]
fn build_request_trims_email() {
    let request = build_request("  driver@example.com ", "hunter2hunter2").expect("valid form");
    assert_eq!(request, LoginRequest::new("driver@example.com", "hunter2hunter2"));
}

#[test]
fn build_request_reports_first_failing_field() {
    let err = build_request("", "short").expect_err("missing email");
    assert_eq!(err.field, Field::Email);
    let err = build_request("driver@example.com", "short").expect_err("short password");
    assert_eq!(err.field, Field::Password);
    assert_eq!(err.message, "Password must be at least 8 characters");
}

#[test]
fn field_message_only_matches_its_field() {
    let err = FieldError { field: Field::Email, message: "Invalid e-mail" };
    assert_eq!(field_message(Some(err), Field::Email), Some("Invalid e-mail"));
    assert_eq!(field_message(Some(err), Field::Password), None);
    assert_eq!(field_message(None, Field::Email), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn complete_login_off_browser_reports_connection_error() {
    let request = LoginRequest::new("driver@example.com", "hunter2hunter2");
    assert_eq!(block_on(complete_login(&request, true)), Err(UiError::connection()));
}
