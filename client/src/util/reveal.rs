//! Reveal-on-scroll for `.fade-in` blocks.
//!
//! One `IntersectionObserver` watches every `.fade-in` element on the page
//! and adds `visible` the first time each one enters the viewport. The
//! observer stays alive for the page's lifetime.

pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const VISIBLE_CLASS: &str = "visible";
pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Start observing. Returns `false` when the browser APIs are unavailable.
pub fn observe_fade_ins() -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                    }
                }
            },
        );
        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);
        let Ok(observer) =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            leptos::logging::warn!("IntersectionObserver unavailable; fade-ins stay hidden");
            return false;
        };
        callback.forget();

        let Ok(nodes) = document.query_selector_all(FADE_IN_SELECTOR) else {
            return false;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&el);
            }
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
