//! Canonical user claims and the normalization layer at the API boundary.
//!
//! DESIGN
//! ======
//! The backend is inconsistent about where the role discriminator lives
//! (`role`, `userType`, `user_type`) and how it is cased. Everything past this
//! module sees one shape: [`UserClaims`] with a closed [`Role`] variant.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Error produced when raw wire claims cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    /// None of the known discriminator fields was present.
    #[error("user claims carry no role discriminator")]
    MissingRole,
    /// The discriminator held a value that is neither admin nor driver.
    #[error("unknown user role: {0}")]
    UnknownRole(String),
}

/// Authorization role carried by a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Driver,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Driver => "driver",
        }
    }

    /// Landing route for a freshly signed-in user of this role.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::Driver => "/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClaimsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "driver" => Ok(Self::Driver),
            _ => Err(ClaimsError::UnknownRole(raw.trim().to_owned())),
        }
    }
}

/// Identity and authorization payload for the signed-in user.
///
/// Materialized only by decoding a session token or from the verification
/// endpoint's response body. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUserClaims")]
pub struct UserClaims {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Claims exactly as the backend may send them.
#[derive(Debug, Deserialize)]
struct RawUserClaims {
    #[serde(deserialize_with = "deserialize_id")]
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    role: Option<String>,
    #[serde(rename = "userType")]
    user_type_camel: Option<String>,
    user_type: Option<String>,
}

impl TryFrom<RawUserClaims> for UserClaims {
    type Error = ClaimsError;

    fn try_from(raw: RawUserClaims) -> Result<Self, Self::Error> {
        let discriminator = raw
            .role
            .or(raw.user_type_camel)
            .or(raw.user_type)
            .ok_or(ClaimsError::MissingRole)?;
        let role = discriminator.parse()?;
        Ok(Self { id: raw.id, name: raw.name, email: raw.email, role })
    }
}

/// Accept integer ids, integral floats, and numeric strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible id"))
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom("expected numeric id string")),
        _ => Err(D::Error::custom("expected id")),
    }
}
