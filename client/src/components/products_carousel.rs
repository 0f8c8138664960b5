//! Package cards in a horizontally scrolling track with arrow buttons.

use leptos::prelude::*;

use crate::catalog::{PACKAGES, Package};
use crate::components::loading_button::LoadingButton;
use crate::state::carousel::{ArrowVisibility, Slide};
use crate::state::feedback::{LoadingPlan, Modal};
use crate::util::{dom, timer::schedule};

const TRACK_ID: &str = "productsCarousel";
/// Re-measure once the smooth scroll has settled.
const SETTLE_MS: u32 = 400;

fn refresh_arrows(arrows: RwSignal<ArrowVisibility>) {
    if let Some(track) = dom::track_metrics(TRACK_ID) {
        arrows.try_set(ArrowVisibility::for_track(track));
    }
}

#[component]
pub fn ProductsCarousel() -> impl IntoView {
    let arrows = RwSignal::new(ArrowVisibility::default());

    let slide = move |direction: Slide| {
        let width = dom::viewport_width().unwrap_or_default();
        dom::smooth_scroll_by(TRACK_ID, direction.delta(width));
        schedule(SETTLE_MS, move || refresh_arrows(arrows));
    };

    Effect::new(move || refresh_arrows(arrows));
    let on_resize = window_event_listener(leptos::ev::resize, move |_| refresh_arrows(arrows));
    on_cleanup(move || on_resize.remove());

    view! {
        <div class="products-carousel-wrapper">
            <button
                type="button"
                class="carousel-nav carousel-nav--left"
                class:hidden=move || arrows.get().left_hidden
                aria-label="Previous packages"
                on:click=move |_| slide(Slide::Left)
            >
                <i class="fas fa-chevron-left"></i>
            </button>
            <div id=TRACK_ID class="products-carousel" on:scroll=move |_| refresh_arrows(arrows)>
                {PACKAGES.iter().map(|package| view! { <PackageCard package=*package/> }).collect_view()}
            </div>
            <button
                type="button"
                class="carousel-nav carousel-nav--right"
                class:hidden=move || arrows.get().right_hidden
                aria-label="Next packages"
                on:click=move |_| slide(Slide::Right)
            >
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}

#[component]
pub fn PackageCard(package: Package) -> impl IntoView {
    let modal = expect_context::<RwSignal<Option<Modal>>>();
    let open_subscription = Callback::new(move |()| {
        modal.set(Some(Modal::Subscription { package: package.name.to_owned(), price: package.price.to_owned() }));
    });

    view! {
        <div class="package-card fade-in">
            <div class="package-header">
                <h3 class="package-title">{package.name}</h3>
                <div class="package-price">
                    <span class="price-amount">{package.price}</span>
                    <span class="price-period">{format!("/ {}", package.period)}</span>
                </div>
                <div class="package-brokers">
                    {package.brokers.iter().map(|b| view! { <span class="broker-tag">{*b}</span> }).collect_view()}
                </div>
            </div>
            <ul class="package-features list-unstyled">
                {package
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <i class="fas fa-check text-accent me-2"></i>
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="package-footer">
                <LoadingButton
                    label="Pilih Paket"
                    plan=LoadingPlan::SUBSCRIBE
                    class="btn btn-primary w-100"
                    on_busy_done=open_subscription
                />
            </div>
        </div>
    }
}
