//! Thin browser accessors used by pages and components.
//!
//! Every helper degrades to a neutral value when there is no window (SSR)
//! or the target element is missing, so callers treat absent DOM nodes as
//! no-ops instead of errors.

use crate::state::carousel::TrackMetrics;
use crate::state::feedback::HostRect;
use crate::state::scroll::ScrollMetrics;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Document-relative top offset of the element with `id`.
pub fn element_top(id: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let el = document()?.get_element_by_id(id)?;
        let el = el.dyn_into::<web_sys::HtmlElement>().ok()?;
        Some(f64::from(el.offset_top()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

pub fn element_exists(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        document().and_then(|d| d.get_element_by_id(id)).is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Vertical scroll state of the page.
pub fn page_scroll() -> ScrollMetrics {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        let client_height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let scroll_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        ScrollMetrics { scroll_top, scroll_height, client_height }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ScrollMetrics::default()
    }
}

pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Smooth-scroll the window to an absolute offset.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Horizontal scroll state of the element with `id`.
pub fn track_metrics(id: &str) -> Option<TrackMetrics> {
    #[cfg(feature = "hydrate")]
    {
        let el = document()?.get_element_by_id(id)?;
        Some(TrackMetrics {
            scroll_left: f64::from(el.scroll_left()),
            scroll_width: f64::from(el.scroll_width()),
            client_width: f64::from(el.client_width()),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Smooth-scroll the element with `id` horizontally by `delta` pixels.
pub fn smooth_scroll_by(id: &str, delta: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_left(delta);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_by_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, delta);
    }
}

pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Bounding box of the element the listener for `ev` is attached to, plus
/// the click position, both in client coordinates.
pub fn click_in_host(ev: &leptos::ev::MouseEvent) -> Option<(HostRect, f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let host = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
        let rect = host.get_bounding_client_rect();
        let host = HostRect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() };
        Some((host, f64::from(ev.client_x()), f64::from(ev.client_y())))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}
