//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its surface's state, provides it through context, and
//! delegates rendering details to `components`.

pub mod dashboard;
pub mod landing;
