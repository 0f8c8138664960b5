//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and feedback surfaces while reading/writing
//! shared state from Leptos context providers (`Notifier`, the open `Modal`,
//! `SectionNav`, `SidebarControl`).

pub mod activity_feed;
pub mod auth_modal;
pub mod broker_carousel;
pub mod loading_button;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod products_carousel;
pub mod ripple;
pub mod robot_panel;
pub mod sidebar;
pub mod stats_card;
