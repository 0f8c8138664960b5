//! Click ripples for buttons and stats cards.

use leptos::prelude::*;

use crate::state::feedback::{RIPPLE_MS, RippleSet};
use crate::util::dom;
use crate::util::timer::schedule;

/// Diameter of the centred ripple on stats cards.
pub const CARD_RIPPLE_PX: f64 = 100.0;

/// Spawn a ripple centred on the click and remove it when the animation ends.
pub fn ripple_at_click(ripples: RwSignal<RippleSet>, ev: &leptos::ev::MouseEvent) {
    let Some((rect, x, y)) = dom::click_in_host(ev) else {
        return;
    };
    let Some(id) = ripples.try_update(|set| set.spawn_at(rect, x, y)) else {
        return;
    };
    expire(ripples, id);
}

/// Spawn a fixed-size ripple centred in the host.
pub fn ripple_centered(ripples: RwSignal<RippleSet>, ev: &leptos::ev::MouseEvent, size: f64) {
    let Some((rect, _, _)) = dom::click_in_host(ev) else {
        return;
    };
    let Some(id) = ripples.try_update(|set| set.spawn_centered(rect, size)) else {
        return;
    };
    expire(ripples, id);
}

fn expire(ripples: RwSignal<RippleSet>, id: u64) {
    schedule(RIPPLE_MS, move || {
        ripples.try_update(|set| set.remove(id));
    });
}

/// Renders the live circles; place inside a `position: relative` host.
#[component]
pub fn RippleLayer(ripples: RwSignal<RippleSet>, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if class.is_empty() { "ripple" } else { class };
    move || {
        ripples.with(|set| {
            set.items().iter().map(|r| view! { <span class=class style=r.style()></span> }).collect_view()
        })
    }
}

/// A `.btn` that ripples on click.
#[component]
pub fn RippleButton(
    #[prop(into)] class: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ripples = RwSignal::new(RippleSet::default());
    let on_click_btn = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ripple_at_click(ripples, &ev);
        if let Some(cb) = on_click {
            cb.run(());
        }
    };

    view! {
        <button class=class type="button" on:click=on_click_btn>
            {children()}
            <RippleLayer ripples=ripples/>
        </button>
    }
}
