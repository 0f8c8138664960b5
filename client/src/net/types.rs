//! Wire DTOs for `/login` and `/register`.
//!
//! The server crate reuses these for its fallback responses, so both sides
//! agree on the `{success, message}` envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub gender: String,
    pub country: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

/// Response envelope for both auth endpoints.
///
/// Missing fields decode as a silent failure rather than a parse error so a
/// terse upstream still produces an inline alert.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl AuthResponse {
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}
