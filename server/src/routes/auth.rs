//! Auth relay: `/login` and `/register` are forwarded to the external
//! authentication service unchanged, and its answer is passed back as-is.
//!
//! The browser's `Cookie` header travels upstream and every upstream
//! `Set-Cookie` comes back, so the session survives the post-login reload.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

const JSON: &str = "application/json";

/// `POST /login`
pub async fn login(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    forward(&state, "/login", &headers, body).await
}

/// `POST /register`
pub async fn register(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    forward(&state, "/register", &headers, body).await
}

async fn forward(state: &AppState, path: &str, headers: &HeaderMap, body: Bytes) -> Response {
    match relay(state, path, headers, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, path, "auth relay failed");
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, path: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    let Some(base) = state.config.auth_upstream_url.as_deref() else {
        return Err(ProxyError::Unconfigured);
    };

    let mut request = state.http.post(format!("{base}{path}")).header(header::CONTENT_TYPE, JSON);
    for cookie in headers.get_all(header::COOKIE) {
        request = request.header(header::COOKIE, cookie.clone());
    }
    let upstream = request.body(body).send().await?;

    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let set_cookies: Vec<_> = upstream.headers().get_all(header::SET_COOKIE).iter().cloned().collect();
    let bytes = upstream.bytes().await?;
    tracing::debug!(path, %status, cookies = set_cookies.len(), "auth relay answered");

    let mut response = (status, [(header::CONTENT_TYPE, JSON)], bytes).into_response();
    for cookie in set_cookies {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
