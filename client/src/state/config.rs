//! Backend location and credentials.
//!
//! The base URL and optional bearer token are fixed when the WASM bundle is
//! built (`VIDAPLUS_API_BASE_URL`, `VIDAPLUS_API_TOKEN`). Cookies are always
//! sent; the token is only for backends that still expect it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use records::ApiRequest;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3002";

/// Where and how to reach the hospital REST backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub bearer_token: Option<String>,
}

impl ApiConfig {
    /// Normalize raw settings. A blank base URL falls back to the default.
    #[must_use]
    pub fn new(base_url: &str, bearer_token: Option<&str>) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_owned()
        } else {
            trimmed.to_owned()
        };
        let bearer_token = bearer_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);
        Self {
            base_url,
            bearer_token,
        }
    }

    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("VIDAPLUS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("VIDAPLUS_API_TOKEN"),
        )
    }

    #[must_use]
    pub fn url(&self, request: &ApiRequest) -> String {
        request.url(&self.base_url)
    }

    /// `Authorization` header value, when a token is configured.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.bearer_token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
