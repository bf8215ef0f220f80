//! Login contract: request body, response validation, form rules, and the
//! mapping from HTTP failures to messages shown on the login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::{Deserialize, Serialize};

use crate::claims::UserClaims;

/// Minimum accepted password length on the login form.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.trim().to_owned(), password: password.to_owned() }
    }
}

/// Raw response of `POST /auth/login`, before validation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<serde_json::Value>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// A validated login: a non-empty token and the user it was issued to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSession {
    pub token: String,
    pub user: UserClaims,
}

/// Error returned by [`LoginResponse::into_session`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("invalid server response: {0}")]
    InvalidResponse(&'static str),
}

impl LoginResponse {
    /// Validate the response.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::InvalidResponse`] if `token` is missing, not a
    /// string, or empty, or if `user` does not normalize to [`UserClaims`].
    pub fn into_session(self) -> Result<LoginSession, LoginError> {
        let token = match self.token {
            Some(serde_json::Value::String(token)) if !token.trim().is_empty() => token,
            _ => return Err(LoginError::InvalidResponse("missing token")),
        };
        let user = self
            .user
            .and_then(|raw| serde_json::from_value::<UserClaims>(raw).ok())
            .ok_or(LoginError::InvalidResponse("missing user"))?;
        Ok(LoginSession { token, user })
    }
}

/// Login form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// A form validation failure tied to one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Validate the login form. Returns the trimmed email on success.
///
/// # Errors
///
/// Returns the first failing field, email before password.
pub fn validate_credentials(email: &str, password: &str) -> Result<String, FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError { field: Field::Email, message: "E-mail is required" });
    }
    if !is_valid_email(email) {
        return Err(FieldError { field: Field::Email, message: "Invalid e-mail" });
    }
    if password.is_empty() {
        return Err(FieldError { field: Field::Password, message: "Password is required" });
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FieldError { field: Field::Password, message: "Password must be at least 8 characters" });
    }
    Ok(email.to_owned())
}

/// `local@domain.tld`, local part `[A-Za-z0-9._%+-]`, domain `[A-Za-z0-9.-]`,
/// alphabetic tld of two or more letters.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let host_ok = !host.is_empty() && host.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    local_ok && host_ok && tld_ok
}

/// Error banner shown on the login page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiError {
    pub message: String,
    pub details: Option<String>,
    /// Rendered with the high-severity style.
    pub critical: bool,
    /// Field to focus after showing the banner.
    pub focus: Option<Field>,
}

impl UiError {
    fn new(message: &str, details: impl Into<String>) -> Self {
        Self { message: message.to_owned(), details: Some(details.into()), critical: false, focus: None }
    }

    fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    fn focus(mut self, field: Field) -> Self {
        self.focus = Some(field);
        self
    }

    /// Map an HTTP failure status (and the server's `message`, if any) to a banner.
    #[must_use]
    pub fn from_status(status: u16, server_message: Option<&str>) -> Self {
        let server_message = server_message.map(str::trim).filter(|m| !m.is_empty());
        match status {
            400 => Self::new("Invalid data", server_message.unwrap_or("Check the fields and try again"))
                .focus(Field::Email),
            401 => Self::new("Authentication failed", "Incorrect e-mail or password").focus(Field::Password),
            403 => Self::new(
                "Access denied",
                server_message.unwrap_or("Your account is not allowed to sign in"),
            )
            .critical(),
            429 => Self::new("Too many attempts", "Wait a few minutes before trying again"),
            500 => Self::new("Server error", server_message.unwrap_or("Try again later")).critical(),
            _ => Self::connection(),
        }
    }

    /// The server could not be reached.
    #[must_use]
    pub fn connection() -> Self {
        Self::new("Connection error", "Could not reach the server")
    }

    /// A failure that did not come from an HTTP status.
    #[must_use]
    pub fn unexpected(detail: &str) -> Self {
        Self::new("Unexpected error", detail)
    }
}
