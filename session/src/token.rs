//! Session token decoding.
//!
//! The browser holds no verification key, so the signature is NOT checked
//! here. Decoded claims only drive UI routing; the backend stays the authority
//! and re-validates every token it receives (see [`crate::auth`]).

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::claims::UserClaims;

/// Error returned by [`parse_payload`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The string is not a compact JWT or its payload does not match [`TokenPayload`].
    #[error("malformed session token: {0}")]
    Malformed(String),
}

/// Payload embedded in a session token.
///
/// Only `user` and `exp` drive decisions; `sub` and `iat` are tolerated in
/// whatever shape the backend signs them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject identifier. Numeric subjects are kept as their decimal text.
    #[serde(default, deserialize_with = "deserialize_sub")]
    pub sub: String,
    /// Embedded user claims.
    pub user: UserClaims,
    /// Issued-at, epoch seconds. Zero when absent.
    #[serde(default)]
    pub iat: i64,
    /// Expiry, epoch seconds.
    pub exp: i64,
}

/// Accept a string or numeric `sub`.
fn deserialize_sub<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or numeric subject")),
    }
}

/// Whether a token with expiry `exp` is expired at `now` (both epoch seconds).
///
/// A token is live only while `exp` is strictly in the future; one expiring
/// exactly at `now` is already expired.
#[must_use]
pub fn is_expired(exp: i64, now: i64) -> bool {
    exp <= now
}

/// Parse the payload of `token` without verifying its signature or expiry.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] if the token is not a three-part JWT with a
/// recognised header or its payload does not deserialize.
pub fn parse_payload(token: &str) -> Result<TokenPayload, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    jsonwebtoken::decode::<TokenPayload>(token.trim(), &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| TokenError::Malformed(e.to_string()))
}

/// Decode `token` against an explicit clock (`now` in epoch seconds).
#[must_use]
pub fn decode_at(token: &str, now: i64) -> Option<UserClaims> {
    let payload = match parse_payload(token) {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("discarding session token: {e}");
            return None;
        }
    };
    if is_expired(payload.exp, now) {
        log::debug!("discarding expired session token (exp={}, now={now})", payload.exp);
        return None;
    }
    Some(payload.user)
}

/// Decode `token` and return its user claims if it is well formed and unexpired.
#[must_use]
pub fn decode(token: &str) -> Option<UserClaims> {
    decode_at(token, now_secs())
}

/// Current wall-clock time in whole epoch seconds.
#[must_use]
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}
