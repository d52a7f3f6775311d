//! REST calls to the host's session issuer.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a failed request becomes a form message
//! instead of a panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{Credentials, SessionGrant};

#[cfg(any(test, feature = "csr"))]
fn session_request_failed_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("session request failed: {status}")
    } else {
        body.to_owned()
    }
}

/// POST `credentials` to `endpoint` and decode the issued session.
pub async fn request_session(endpoint: &str, credentials: &Credentials) -> Result<SessionGrant, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(session_request_failed_message(resp.status(), &body));
        }
        resp.json::<SessionGrant>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, credentials);
        Err("session requests require a browser".to_owned())
    }
}
