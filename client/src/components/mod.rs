//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap route content with session concerns: the guard decides what
//! a route may render and the session bar exposes the signed-in user.

pub mod protected_route;
pub mod session_bar;
