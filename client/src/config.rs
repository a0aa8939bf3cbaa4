//! Client configuration resolved at build time.
//!
//! The REST API lives on a separate origin. Its base URL is baked into the
//! WASM bundle from `LABSITE_API_BASE_URL`, falling back to the local
//! development back end.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut api_base_url = api_base_url.into();
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }
        Self { api_base_url }
    }

    /// Read `LABSITE_API_BASE_URL` captured at compile time.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(option_env!("LABSITE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute URL for an API path such as `auth/me` or `/projects`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
