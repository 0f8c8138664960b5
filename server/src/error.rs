//! Error types for startup and the auth relay.

use atv_client::net::types::AuthResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::config::ConfigError;

/// Message returned whenever the authentication service cannot be reached.
pub const UNAVAILABLE_MESSAGE: &str = "Authentication service unavailable.";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("authentication upstream is not configured")]
    Unconfigured,
    #[error("authentication upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unconfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(AuthResponse::failure(UNAVAILABLE_MESSAGE))).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("listener: {0}")]
    Io(#[from] std::io::Error),
}
