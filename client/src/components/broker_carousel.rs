//! Scrolling marquee of supported brokers.

use leptos::prelude::*;

use crate::catalog::{BROKERS, Broker, logo_badge};
use crate::state::carousel::Marquee;
use crate::state::feedback::Modal;

#[component]
pub fn BrokerCarousel() -> impl IntoView {
    let modal = expect_context::<RwSignal<Option<Modal>>>();
    let marquee = RwSignal::new(Marquee::default());

    // The track holds two copies so the CSS loop has no visible seam.
    let items = BROKERS
        .iter()
        .chain(BROKERS.iter())
        .map(|broker| view! { <BrokerItem broker=*broker modal=modal/> })
        .collect_view();

    view! {
        <div
            class="broker-carousel"
            on:mouseenter=move |_| marquee.set(Marquee::Paused)
            on:mouseleave=move |_| marquee.set(Marquee::Running)
        >
            <div class="broker-slider" style=move || marquee.get().play_state()>
                {items}
            </div>
        </div>
    }
}

#[component]
fn BrokerItem(broker: Broker, modal: RwSignal<Option<Modal>>) -> impl IntoView {
    let logo_failed = RwSignal::new(false);
    let badge = logo_badge(broker.name);

    view! {
        <div
            class="broker-item"
            role="button"
            title=broker.name
            on:click=move |_| modal.set(Some(Modal::BrokerInfo { broker: broker.name.to_owned() }))
        >
            <Show
                when=move || !logo_failed.get()
                fallback=move || {
                    view! {
                        <div
                            class="broker-logo broker-logo--badge"
                            style=format!("background: {}; color: {};", badge.fill, badge.text_fill)
                        >
                            {badge.letter}
                        </div>
                    }
                }
            >
                <img class="broker-logo" src=broker.logo alt=broker.name on:error=move |_| logo_failed.set(true)/>
            </Show>
            <span class="broker-name">{broker.name}</span>
        </div>
    }
}
