//! Session token persistence.
//!
//! ARCHITECTURE
//! ============
//! The token lives under one fixed key in exactly one of two scopes: durable
//! (survives restarts, chosen by "remember me") or volatile (cleared when the
//! tab closes). [`SessionRepository`] is the only reader/writer and applies a
//! single policy: durable first, then volatile. Backends are injected through
//! [`TokenStore`] so the policy can be exercised without a browser.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "authToken";

/// Persistence scope for the session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Survives browser restarts (`localStorage`).
    Durable,
    /// Cleared at tab close (`sessionStorage`).
    Volatile,
}

impl Scope {
    /// Scope selected by the login form's "remember me" flag.
    #[must_use]
    pub fn for_remember_me(remember_me: bool) -> Self {
        if remember_me { Self::Durable } else { Self::Volatile }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Durable => Self::Volatile,
            Self::Volatile => Self::Durable,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Durable => "durable",
            Self::Volatile => "volatile",
        })
    }
}

/// Error returned by [`TokenStore::set`] and [`SessionRepository::save`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing storage does not exist in this environment.
    #[error("{0} storage is unavailable")]
    Unavailable(Scope),
    /// The backing storage refused the write (quota, privacy mode, ...).
    #[error("failed to write {scope} storage: {reason}")]
    Write { scope: Scope, reason: String },
    /// Refused to persist an empty token.
    #[error("refusing to store an empty session token")]
    EmptyToken,
}

/// A string key-value scope the session token can live in.
pub trait TokenStore {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend is missing or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Missing keys are ignored.
    fn remove(&self, key: &str);
}

/// In-memory [`TokenStore`] for tests and non-browser hosts.
///
/// Single-threaded by construction, like the UI thread it stands in for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// The session token's single source of truth.
#[derive(Debug, Default)]
pub struct SessionRepository<D, V> {
    durable: D,
    volatile: V,
}

impl<D: TokenStore, V: TokenStore> SessionRepository<D, V> {
    #[must_use]
    pub fn new(durable: D, volatile: V) -> Self {
        Self { durable, volatile }
    }

    /// Stored token and the scope it was found in, durable first.
    #[must_use]
    pub fn lookup(&self) -> Option<(Scope, String)> {
        let found = |value: Option<String>| value.filter(|token| !token.trim().is_empty());
        if let Some(token) = found(self.durable.get(TOKEN_KEY)) {
            return Some((Scope::Durable, token));
        }
        found(self.volatile.get(TOKEN_KEY)).map(|token| (Scope::Volatile, token))
    }

    /// Stored token, durable first.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.lookup().map(|(_, token)| token)
    }

    /// Persist `token` in the scope chosen by `remember_me` and drop any copy in
    /// the other scope. Returns the scope written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyToken`] for blank tokens, or the backend's error
    /// if the write fails (the other scope is left untouched in that case).
    pub fn save(&self, token: &str, remember_me: bool) -> Result<Scope, StoreError> {
        if token.trim().is_empty() {
            return Err(StoreError::EmptyToken);
        }
        let scope = Scope::for_remember_me(remember_me);
        self.store(scope).set(TOKEN_KEY, token)?;
        self.store(scope.other()).remove(TOKEN_KEY);
        log::debug!("session token stored in {scope} scope");
        Ok(scope)
    }

    /// Remove the token from both scopes.
    pub fn clear(&self) {
        self.durable.remove(TOKEN_KEY);
        self.volatile.remove(TOKEN_KEY);
    }

    fn store(&self, scope: Scope) -> &dyn TokenStore {
        match scope {
            Scope::Durable => &self.durable,
            Scope::Volatile => &self.volatile,
        }
    }
}
