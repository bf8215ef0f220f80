//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Guarded pages are wrapped in
//! `components::protected_route` by the router, never by themselves.

pub mod dashboard;
pub mod login;
