//! Networking for the login/registration endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side HTTP calls and `types` defines the JSON
//! schema shared with the server's forwarding routes.

pub mod api;
pub mod types;
