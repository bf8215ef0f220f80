//! Build-time client configuration.
//!
//! The REST backend's base URL is baked in at compile time from
//! `TRCARRIER_API_BASE_URL`, the same way the bundle is configured per deploy.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when no base URL was configured at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Configured backend base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("TRCARRIER_API_BASE_URL"))
}

/// Absolute URL for a backend `path` such as `/auth/login`.
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn normalize_base_url(raw: Option<&'static str>) -> &'static str {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
