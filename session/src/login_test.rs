use super::*;
use crate::claims::Role;

fn response(json: serde_json::Value) -> LoginResponse {
    serde_json::from_value(json).expect("login response")
}

#[test]
fn login_request_trims_email_only() {
    let request = LoginRequest::new("  ana@example.com ", " secret pw ");
    assert_eq!(request.email, "ana@example.com");
    assert_eq!(request.password, " secret pw ");
    assert_eq!(
        serde_json::to_value(&request).expect("serialize"),
        serde_json::json!({ "email": "ana@example.com", "password": " secret pw " })
    );
}

#[test]
fn into_session_accepts_token_and_user() {
    let session = response(serde_json::json!({
        "token": "abc.def.ghi",
        "user": { "id": 4, "name": "Ana", "email": "ana@example.com", "role": "admin" }
    }))
    .into_session()
    .expect("session");
    assert_eq!(session.token, "abc.def.ghi");
    assert_eq!(session.user.role, Role::Admin);
}

#[test]
fn into_session_rejects_missing_empty_or_non_string_token() {
    let user = serde_json::json!({ "id": 4, "name": "Ana", "email": "ana@example.com", "role": "driver" });
    for token in [serde_json::Value::Null, serde_json::json!(""), serde_json::json!(42), serde_json::json!("  ")] {
        let err = response(serde_json::json!({ "token": token, "user": user }))
            .into_session()
            .expect_err("token should be rejected");
        assert_eq!(err, LoginError::InvalidResponse("missing token"));
    }
    let err = response(serde_json::json!({ "user": user })).into_session().expect_err("no token");
    assert_eq!(err, LoginError::InvalidResponse("missing token"));
}

#[test]
fn into_session_rejects_unusable_user() {
    let err = response(serde_json::json!({ "token": "t", "user": { "id": 1, "name": "X" } }))
        .into_session()
        .expect_err("user without role");
    assert_eq!(err, LoginError::InvalidResponse("missing user"));
}

#[test]
fn validate_credentials_accepts_well_formed_input() {
    assert_eq!(validate_credentials(" ana@tr-familia.com.br ", "12345678"), Ok("ana@tr-familia.com.br".to_owned()));
    assert_eq!(validate_credentials("first.last+ops@Example.ORG", "longenough"), Ok("first.last+ops@Example.ORG".to_owned()));
}

#[test]
fn validate_credentials_requires_email() {
    let err = validate_credentials("   ", "12345678").expect_err("empty email");
    assert_eq!(err.field, Field::Email);
    assert_eq!(err.message, "E-mail is required");
}

#[test]
fn validate_credentials_rejects_malformed_email() {
    for email in ["ana", "ana@", "@example.com", "ana@example", "ana@example.c", "ana@@example.com", "ana@exa mple.com", "ana@example.c0m"] {
        let err = validate_credentials(email, "12345678").expect_err("malformed email");
        assert_eq!(err, FieldError { field: Field::Email, message: "Invalid e-mail" }, "email {email:?}");
    }
}

#[test]
fn validate_credentials_checks_password_length() {
    let err = validate_credentials("ana@example.com", "").expect_err("empty password");
    assert_eq!(err.message, "Password is required");
    let err = validate_credentials("ana@example.com", "1234567").expect_err("short password");
    assert_eq!(err.field, Field::Password);
    assert_eq!(err.message, "Password must be at least 8 characters");
}

#[test]
fn ui_error_maps_bad_request_to_email_focus() {
    let err = UiError::from_status(400, Some("email must be valid"));
    assert_eq!(err.message, "Invalid data");
    assert_eq!(err.details.as_deref(), Some("email must be valid"));
    assert_eq!(err.focus, Some(Field::Email));
    assert!(!err.critical);
}

#[test]
fn ui_error_maps_unauthorized_to_password_focus() {
    let err = UiError::from_status(401, Some("ignored"));
    assert_eq!(err.message, "Authentication failed");
    assert_eq!(err.details.as_deref(), Some("Incorrect e-mail or password"));
    assert_eq!(err.focus, Some(Field::Password));
}

#[test]
fn ui_error_forbidden_and_server_errors_are_critical() {
    let forbidden = UiError::from_status(403, None);
    assert!(forbidden.critical);
    assert_eq!(forbidden.details.as_deref(), Some("Your account is not allowed to sign in"));

    let server = UiError::from_status(500, Some("  "));
    assert!(server.critical);
    assert_eq!(server.details.as_deref(), Some("Try again later"));
}

#[test]
fn ui_error_rate_limit_and_unknown_statuses() {
    assert_eq!(UiError::from_status(429, None).message, "Too many attempts");
    assert_eq!(UiError::from_status(502, None), UiError::connection());
    assert_eq!(UiError::from_status(0, None).message, "Connection error");
}

#[test]
fn ui_error_unexpected_carries_detail() {
    let err = UiError::unexpected("storage full");
    assert_eq!(err.message, "Unexpected error");
    assert_eq!(err.details.as_deref(), Some("storage full"));
}
