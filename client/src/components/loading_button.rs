//! Buttons that show a spinner for a simulated action, then restore.

use leptos::prelude::*;

use crate::components::ripple::{RippleLayer, ripple_at_click};
use crate::state::feedback::{ButtonPhase, LoadingButton as ButtonState, LoadingPlan, RippleSet};
use crate::util::timer::schedule;

/// Button running `plan` on click. `on_busy_done` fires when the busy phase
/// ends (before any confirmation hold).
#[component]
pub fn LoadingButton(
    #[prop(into)] label: String,
    plan: LoadingPlan,
    #[prop(into)] class: String,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] on_busy_done: Option<Callback<()>>,
) -> impl IntoView {
    let state = RwSignal::new(ButtonState::new(label));
    let ripples = RwSignal::new(RippleSet::default());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ripple_at_click(ripples, &ev);
        let started = state.try_update(|b| b.begin(plan.busy_label)).unwrap_or(false);
        if !started {
            return;
        }
        schedule(plan.busy_ms, move || {
            if let Some((done_label, hold_ms)) = plan.confirm {
                state.try_update(|b| b.confirm(done_label));
                schedule(hold_ms, move || {
                    state.try_update(ButtonState::restore);
                });
            } else {
                state.try_update(ButtonState::restore);
            }
            if let Some(cb) = on_busy_done {
                cb.run(());
            }
        });
    };

    let class_for_phase = move || match state.with(|b| b.phase().clone()) {
        ButtonPhase::Confirmed { .. } => format!("{class} btn-success"),
        ButtonPhase::Idle | ButtonPhase::Loading { .. } => class.clone(),
    };
    let leading_icon = move || state.with(ButtonState::icon).or(icon);

    view! {
        <button type="button" class=class_for_phase disabled=move || state.with(ButtonState::disabled) on:click=on_click>
            {move || leading_icon().map(|icon| view! { <i class=icon></i> })}
            {move || state.with(|b| b.label().to_owned())}
            <RippleLayer ripples=ripples/>
        </button>
    }
}
