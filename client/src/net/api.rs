//! HTTP helpers for the auth endpoints.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the forms only submit
//! from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The body is decoded whatever the HTTP status: the server and upstream
//! report rejected credentials as `{success: false, message}` alongside a
//! non-2xx code. Only transport and decode failures become `Err`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, LoginRequest, RegisterRequest};

pub const LOGIN_ENDPOINT: &str = "/login";
pub const REGISTER_ENDPOINT: &str = "/register";

#[cfg(any(test, feature = "hydrate"))]
fn decode_failed_message(status: u16, err: &str) -> String {
    format!("auth response ({status}) could not be decoded: {err}")
}

/// Submit the login form.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response
/// body is not an auth envelope.
pub async fn post_login(req: &LoginRequest) -> Result<AuthResponse, String> {
    post_json(LOGIN_ENDPOINT, req).await
}

/// Submit the registration form.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response
/// body is not an auth envelope.
pub async fn post_register(req: &RegisterRequest) -> Result<AuthResponse, String> {
    post_json(REGISTER_ENDPOINT, req).await
}

async fn post_json<T: serde::Serialize>(endpoint: &str, body: &T) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        resp.json::<AuthResponse>()
            .await
            .map_err(|e| decode_failed_message(status, &e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err("not available on server".to_owned())
    }
}
