//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain state machines with no browser dependencies. Pages wrap them in
//! `RwSignal`s and provide them through Leptos context; the browser layer
//! only feeds them measurements, clicks, and the current time.

pub mod auth;
pub mod carousel;
pub mod dashboard;
pub mod feedback;
pub mod nav;
pub mod scroll;
pub mod sidebar;
