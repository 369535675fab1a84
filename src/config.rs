//! Client configuration resolved at build time.
//!
//! The browser bundle has no process environment, so the API location is
//! baked in from `ROOMBOOK_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Settings shared by every network call the client makes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the booking API, without a trailing slash.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `ROOMBOOK_API_URL`: API base URL (default `/api`)
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("ROOMBOOK_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Build config for an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self { api_base_url: normalize_base_url(base_url) }
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
