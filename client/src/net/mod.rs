//! Networking modules for the backend's REST auth endpoints.

pub mod api;
