//! Transport-neutral request/response model.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panels describe the call they want as an [`ApiRequest`]; whichever
//! transport the host environment has (browser `fetch` in the client)
//! executes it and hands back an [`ApiResponse`] or a [`TransportError`].
//! Responses are judged by status code only; the body is kept as optional
//! JSON so an empty or malformed body never masks the status.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A backend call, relative to the configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    #[must_use]
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    /// Absolute URL for this request against `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        join_url(base_url, &self.path)
    }
}

/// Join a base URL and an absolute path without doubling the slash.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// What came back from the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body; `None` when empty or not JSON.
    pub body: Option<Value>,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// Build a response from raw body text, discarding bodies that are not JSON.
    #[must_use]
    pub fn from_text(status: u16, text: &str) -> Self {
        Self {
            status,
            body: serde_json::from_str(text).ok(),
        }
    }

    /// Any 2xx status.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deletes count only when the backend answers exactly 200 or 204.
    #[must_use]
    pub fn is_delete_success(&self) -> bool {
        matches!(self.status, 200 | 204)
    }

    /// The `message` string the backend puts in error bodies, if non-empty.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.body
            .as_ref()?
            .get("message")?
            .as_str()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Failure to get any response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be built: {0}")]
    Build(String),
    #[error("network request failed: {0}")]
    Network(String),
}

/// Result of one executed request.
pub type Outcome = Result<ApiResponse, TransportError>;

/// What the caller must do after a panel consumed an [`Outcome`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum FollowUp {
    Nothing,
    /// Refetch the list; the in-memory copy is stale.
    Reload,
}
