//! Browser-backed session token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements [`TokenStore`] over `localStorage` (durable) and
//! `sessionStorage` (volatile) so the session repository's read policy stays
//! in the `session` crate. During SSR both scopes are empty and unwritable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::store::{Scope, SessionRepository, StoreError, TokenStore};

/// One browser storage scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    scope: Scope,
}

impl BrowserStorage {
    #[must_use]
    pub fn durable() -> Self {
        Self { scope: Scope::Durable }
    }

    #[must_use]
    pub fn volatile() -> Self {
        Self { scope: Scope::Volatile }
    }

    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    #[cfg(feature = "hydrate")]
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.scope {
            Scope::Durable => window.local_storage().ok().flatten(),
            Scope::Volatile => window.session_storage().ok().flatten(),
        }
    }
}

impl TokenStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.storage().ok_or(StoreError::Unavailable(self.scope))?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write { scope: self.scope, reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable(self.scope))
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Session repository over the browser's two storage scopes.
#[must_use]
pub fn browser_repository() -> SessionRepository<BrowserStorage, BrowserStorage> {
    SessionRepository::new(BrowserStorage::durable(), BrowserStorage::volatile())
}
