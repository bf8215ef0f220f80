//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and session plumbing from page and
//! component logic so the decision code stays testable off the browser.

pub mod auth;
pub mod storage;
