//! Overview stats cards with a centred click ripple.

use leptos::prelude::*;

use crate::components::ripple::{CARD_RIPPLE_PX, RippleLayer, ripple_centered};
use crate::state::dashboard::StatCard;
use crate::state::feedback::RippleSet;

/// One card; `index` selects the entry in the shared stats signal.
#[component]
pub fn StatsCard(stats: RwSignal<Vec<StatCard>>, index: usize) -> impl IntoView {
    let ripples = RwSignal::new(RippleSet::default());
    let card = move || stats.with(|s| s.get(index).copied());
    let label = stats.with_untracked(|s| s.get(index).map(|c| (c.label, c.icon))).unwrap_or(("", ""));

    view! {
        <div class="stats-card" on:click=move |ev| ripple_centered(ripples, &ev, CARD_RIPPLE_PX)>
            <div class="stats-icon">
                <i class=label.1></i>
            </div>
            <div class="stats-content">
                <h3>{move || card().map(|c| c.value.display()).unwrap_or_default()}</h3>
                <p>{label.0}</p>
            </div>
            <RippleLayer ripples=ripples class="click-ripple"/>
        </div>
    }
}
