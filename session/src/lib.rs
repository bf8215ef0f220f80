//! Session and route-authorization core for the TR Carrier admin console.
//!
//! This crate owns everything the UI needs to decide "who is signed in and may
//! they see this page" without touching the browser or the network directly:
//!
//! - [`store`]: the persisted session token and its durable/volatile scopes.
//! - [`token`]: reading user claims out of a session token (no signature check).
//! - [`auth`]: resolving the auth state through a server verification round-trip.
//! - [`guard`]: the render/redirect/forbidden decision for protected routes.
//! - [`login`]: the login request/response contract and user-facing errors.
//!
//! The `client` crate supplies browser-backed stores and an HTTP verifier.

pub mod auth;
pub mod claims;
pub mod guard;
pub mod login;
pub mod store;
pub mod token;

pub use auth::{AuthState, AuthStrategy, TokenVerifier, VerifyError};
pub use claims::{Role, UserClaims};
pub use guard::{GuardDecision, GuardMount, LOGIN_PATH};
pub use store::{MemoryStore, Scope, SessionRepository, StoreError, TOKEN_KEY, TokenStore};
