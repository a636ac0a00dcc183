//! Authenticated HTTP plumbing — the request/response interceptor pair.
//!
//! DESIGN
//! ======
//! The interception rules are pure functions: token in → header value out,
//! status in → action out. The `gloo-net` adapters at the bottom compose
//! them at the framework boundary so every request issued through this
//! module carries the stored bearer token and every 401 response expires
//! the stored credentials exactly once.
//!
//! ERROR HANDLING
//! ==============
//! Exactly one status is distinguished: 401. It clears both credential keys
//! and forces navigation to `/login`; the failing response is still returned
//! to the caller unchanged. Everything else (network errors, other 4xx/5xx)
//! passes through untouched for the calling view to handle.

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use crate::routing::table;
use crate::state::auth::{clear_credentials, CredentialStore};

/// Name of the credential header attached to outgoing requests.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// HTTP status signalling an expired or invalid credential.
pub const UNAUTHORIZED: u16 = 401;

/// What the response interceptor must do for a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseAction {
    /// Hand the response to the caller untouched.
    PassThrough,
    /// Clear stored credentials and navigate to the login route,
    /// then still hand the response to the caller.
    ExpireCredentials,
}

/// `Authorization` header value for a stored token, or `None` when no token
/// is stored (the header is omitted entirely).
#[must_use]
pub fn authorization_for(token: Option<&str>) -> Option<String> {
    token.map(bearer_header_value)
}

/// Format a token as a bearer header value.
#[must_use]
pub fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Classify a response status. Only 401 is special; body content is ignored.
#[must_use]
pub fn classify_status(status: u16) -> ResponseAction {
    if status == UNAUTHORIZED {
        ResponseAction::ExpireCredentials
    } else {
        ResponseAction::PassThrough
    }
}

/// 401 cleanup: delete both credential keys and return the path the caller
/// must navigate to. Idempotent — running it with nothing stored is a no-op.
pub fn expire_credentials<S: CredentialStore>(store: &mut S) -> &'static str {
    clear_credentials(store);
    table::LOGIN_PATH
}

// =============================================================================
// GLOO-NET ADAPTERS (browser only)
// =============================================================================

/// Issue a GET request with the stored credential attached.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent. Non-2xx responses
/// are returned as `Ok` for the caller to inspect.
#[cfg(feature = "hydrate")]
pub async fn get(url: &str) -> Result<gloo_net::http::Response, String> {
    let builder = attach_authorization(gloo_net::http::Request::get(url));
    intercept(builder.send().await)
}

/// Issue a POST request with a JSON body and the stored credential attached.
///
/// # Errors
///
/// Returns an error string if the body cannot be serialized or the request
/// cannot be sent.
#[cfg(feature = "hydrate")]
pub async fn post_json<T: serde::Serialize>(
    url: &str,
    body: &T,
) -> Result<gloo_net::http::Response, String> {
    let request = attach_authorization(gloo_net::http::Request::post(url))
        .json(body)
        .map_err(|e| e.to_string())?;
    intercept(request.send().await)
}

/// Issue a PUT request with a JSON body and the stored credential attached.
///
/// # Errors
///
/// Returns an error string if the body cannot be serialized or the request
/// cannot be sent.
#[cfg(feature = "hydrate")]
pub async fn put_json<T: serde::Serialize>(
    url: &str,
    body: &T,
) -> Result<gloo_net::http::Response, String> {
    let request = attach_authorization(gloo_net::http::Request::put(url))
        .json(body)
        .map_err(|e| e.to_string())?;
    intercept(request.send().await)
}

/// Outbound interception: attach the bearer header when a token is stored.
#[cfg(feature = "hydrate")]
fn attach_authorization(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    use crate::state::auth::{stored_token, BrowserStore};

    match authorization_for(stored_token(&BrowserStore).as_deref()) {
        Some(value) => builder.header(AUTHORIZATION_HEADER, &value),
        None => builder,
    }
}

/// Inbound interception: expire credentials on 401, then propagate the
/// original outcome unchanged.
#[cfg(feature = "hydrate")]
fn intercept(
    result: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<gloo_net::http::Response, String> {
    let response = result.map_err(|e| e.to_string())?;
    if classify_status(response.status()) == ResponseAction::ExpireCredentials {
        let mut store = crate::state::auth::BrowserStore;
        let target = expire_credentials(&mut store);
        force_navigation(target);
    }
    Ok(response)
}

/// Hard navigation used by the 401 handler. Redirecting while already on the
/// login page is a safe no-op.
#[cfg(feature = "hydrate")]
fn force_navigation(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}
