//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, DOM
//! measurement, observers) from page and component logic so the state
//! modules stay testable without a browser.

pub mod debounce;
pub mod dom;
pub mod format;
pub mod reveal;
pub mod timer;
