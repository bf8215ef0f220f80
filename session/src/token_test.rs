use jsonwebtoken::{EncodingKey, Header};

use super::*;
use crate::claims::Role;

const NOW: i64 = 1_700_000_000;

fn driver() -> UserClaims {
    UserClaims { id: 12, name: "Rafael".into(), email: "rafael@example.com".into(), role: Role::Driver }
}

fn mint(user: &UserClaims, exp: i64) -> String {
    let payload = TokenPayload { sub: user.id.to_string(), user: user.clone(), iat: exp - 3600, exp };
    jsonwebtoken::encode(&Header::default(), &payload, &EncodingKey::from_secret(b"backend-only-secret"))
        .expect("encode token")
}

#[test]
fn decode_returns_embedded_claims_for_live_token() {
    let token = mint(&driver(), NOW + 3600);
    assert_eq!(decode_at(&token, NOW), Some(driver()));
}

#[test]
fn decode_ignores_signature_key() {
    let payload = TokenPayload { sub: "1".into(), user: driver(), iat: NOW, exp: NOW + 60 };
    let token = jsonwebtoken::encode(&Header::default(), &payload, &EncodingKey::from_secret(b"some-other-key"))
        .expect("encode token");
    assert_eq!(decode_at(&token, NOW), Some(driver()));
}

#[test]
fn decode_rejects_token_expiring_exactly_now() {
    let token = mint(&driver(), NOW);
    assert_eq!(decode_at(&token, NOW), None);
}

#[test]
fn decode_rejects_token_expired_in_the_past() {
    let token = mint(&driver(), NOW - 1);
    assert_eq!(decode_at(&token, NOW), None);
}

#[test]
fn decode_accepts_token_expiring_one_second_later() {
    let token = mint(&driver(), NOW + 1);
    assert_eq!(decode_at(&token, NOW), Some(driver()));
}

#[test]
fn decode_uses_wall_clock() {
    let live = mint(&driver(), now_secs() + 3600);
    let stale = mint(&driver(), now_secs() - 3600);
    assert_eq!(decode(&live), Some(driver()));
    assert_eq!(decode(&stale), None);
}

#[test]
fn decode_returns_none_for_malformed_strings() {
    for raw in ["", "   ", "not-a-token", "a.b", "a.b.c", "invalid.token.here", "...", "x.y.z.w"] {
        assert_eq!(decode_at(raw, NOW), None, "expected absent for {raw:?}");
    }
}

#[test]
fn decode_returns_none_when_payload_lacks_user() {
    #[derive(serde::Serialize)]
    struct Bare {
        sub: String,
        exp: i64,
    }
    let token = jsonwebtoken::encode(
        &Header::default(),
        &Bare { sub: "1".into(), exp: NOW + 60 },
        &EncodingKey::from_secret(b"k"),
    )
    .expect("encode token");
    assert_eq!(decode_at(&token, NOW), None);
}

#[test]
fn decode_normalizes_user_type_inside_token() {
    let payload = serde_json::json!({
        "sub": "5",
        "user": { "id": 5, "name": "Ana", "email": "ana@example.com", "userType": "admin" },
        "iat": NOW,
        "exp": NOW + 60
    });
    let token = jsonwebtoken::encode(&Header::default(), &payload, &EncodingKey::from_secret(b"k")).expect("encode");
    let claims = decode_at(&token, NOW).expect("claims");
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.name, "Ana");
}

#[test]
fn parse_payload_reports_malformed_tokens() {
    let err = parse_payload("garbage").expect_err("malformed");
    assert!(err.to_string().starts_with("malformed session token"));
}

#[test]
fn parse_payload_keeps_expired_payloads() {
    let token = mint(&driver(), NOW - 100);
    let payload = parse_payload(&token).expect("payload");
    assert_eq!(payload.exp, NOW - 100);
    assert_eq!(payload.sub, "12");
}

#[test]
fn is_expired_boundary() {
    assert!(is_expired(NOW, NOW));
    assert!(is_expired(NOW - 1, NOW));
    assert!(!is_expired(NOW + 1, NOW));
}

fn driver_json() -> serde_json::Value {
    serde_json::json!({ "id": 12, "name": "Rafael", "email": "rafael@example.com", "role": "driver" })
}

fn encode_raw(payload: &serde_json::Value) -> String {
    jsonwebtoken::encode(&Header::default(), payload, &EncodingKey::from_secret(b"backend-only-secret"))
        .expect("encode token")
}

#[test]
fn decode_accepts_numeric_subject() {
    let token = encode_raw(&serde_json::json!({ "sub": 12, "user": driver_json(), "iat": NOW, "exp": NOW + 3600 }));
    assert_eq!(decode_at(&token, NOW), Some(driver()));
    assert_eq!(parse_payload(&token).expect("payload").sub, "12");
}

#[test]
fn decode_accepts_payload_without_iat() {
    let token = encode_raw(&serde_json::json!({ "sub": "12", "user": driver_json(), "exp": NOW + 3600 }));
    assert_eq!(decode_at(&token, NOW), Some(driver()));
    assert_eq!(parse_payload(&token).expect("payload").iat, 0);
}

#[test]
fn decode_accepts_payload_with_only_user_and_exp() {
    let token = encode_raw(&serde_json::json!({ "user": driver_json(), "exp": NOW + 3600 }));
    assert_eq!(decode_at(&token, NOW), Some(driver()));
}

#[test]
fn decode_rejects_payload_without_exp() {
    let token = encode_raw(&serde_json::json!({ "sub": "12", "user": driver_json() }));
    assert_eq!(decode_at(&token, NOW), None);
}
