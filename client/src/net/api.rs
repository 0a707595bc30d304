//! REST transport for panel requests.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with browser
//! credentials so the backend session cookie travels along.
//! Server-side (SSR): stubs returning a transport error since the backend is
//! only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a `records::Outcome` so panels turn it into a
//! notice; nothing here panics or surfaces errors to hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{ApiRequest, Outcome, TransportError};
#[cfg(feature = "hydrate")]
use records::{ApiResponse, Method};

use crate::state::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
fn request_summary(api: &ApiConfig, request: &ApiRequest) -> String {
    format!("{} {}", request.method.as_str(), api.url(request))
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable_error() -> TransportError {
    TransportError::Network("not available on server".to_owned())
}

/// Execute `request` against the backend.
///
/// # Errors
///
/// Returns [`TransportError::Build`] if the body cannot be serialized and
/// [`TransportError::Network`] if no response arrives. Non-2xx statuses are
/// not errors; they come back inside the `ApiResponse`.
pub async fn send(api: &ApiConfig, request: &ApiRequest) -> Outcome {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = api.url(request);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json")
        .credentials(web_sys::RequestCredentials::Include);
        if let Some(value) = api.authorization() {
            builder = builder.header("Authorization", &value);
        }

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Build(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        Ok(ApiResponse::from_text(status, &text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, request);
        Err(unavailable_error())
    }
}

/// Run `request` in the background and hand its outcome to `on_done`.
///
/// Calls are not ordered relative to each other and are never cancelled.
pub fn dispatch<F>(api: ApiConfig, request: ApiRequest, on_done: F)
where
    F: FnOnce(Outcome) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = send(&api, &request).await;
        match &outcome {
            Ok(resp) => log::debug!("{} -> {}", request_summary(&api, &request), resp.status),
            Err(e) => log::warn!("{} failed: {e}", request_summary(&api, &request)),
        }
        on_done(outcome);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, request, on_done);
    }
}
