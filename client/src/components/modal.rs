//! Broker-info and subscription dialogs.
//!
//! At most one dialog is open per surface: the page provides a
//! `RwSignal<Option<Modal>>` and `ModalHost` renders whichever is set.
//! Backdrop clicks close the dialog; clicks inside the dialog stop
//! propagation so they never reach the backdrop handler.

use leptos::prelude::*;

use crate::catalog::{self, ContactChannel, broker_info};
use crate::components::notifications::Notifier;
use crate::state::feedback::Modal;

/// Renders the open dialog, if any, and closes it on Escape.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modal = expect_context::<RwSignal<Option<Modal>>>();
    let on_close = Callback::new(move |()| modal.set(None));

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && modal.with_untracked(Option::is_some) {
            modal.set(None);
        }
    });
    on_cleanup(move || escape.remove());

    move || {
        modal.get().map(|open| match open {
            Modal::BrokerInfo { broker } => view! { <BrokerInfoModal broker=broker on_close=on_close/> }.into_any(),
            Modal::Subscription { package, price } => {
                view! { <SubscriptionModal package=package price=price on_close=on_close/> }.into_any()
            }
        })
    }
}

#[component]
fn ModalFrame(
    #[prop(into)] title: String,
    icon: &'static str,
    on_close: Callback<()>,
    #[prop(optional)] centered: bool,
    #[prop(optional)] show_close: bool,
    children: Children,
) -> impl IntoView {
    let dialog_class = if centered { "modal-dialog modal-dialog-centered" } else { "modal-dialog" };

    view! {
        <div class="modal fade show modal-open-host" style="display: block;" on:click=move |_| on_close.run(())>
            <div class=dialog_class on:click=move |ev| ev.stop_propagation() role="dialog" aria-modal="true">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">
                            <i class=icon></i>
                            {title}
                        </h5>
                        <Show when=move || show_close>
                            <button type="button" class="btn-close btn-close-white" aria-label="Close" on:click=move |_| on_close.run(())></button>
                        </Show>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn BrokerInfoModal(broker: String, on_close: Callback<()>) -> impl IntoView {
    let info = broker_info(&broker);
    let logo = catalog::broker(&broker).map(|b| b.logo);

    view! {
        <ModalFrame title=broker icon="fas fa-chart-line me-2" on_close=on_close centered=true show_close=true>
            <div class="modal-body">
                {logo.map(|src| view! { <img class="broker-logo mb-3" src=src alt=""/> })}
                <p class="mb-3">{info.description}</p>
                <h6 class="modal-subheading">"Fitur Utama:"</h6>
                <ul class="list-unstyled">
                    {info
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="mb-2">
                                    <i class="fas fa-check text-success me-2"></i>
                                    {*feature}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-accent" on:click=move |_| on_close.run(())>
                    "Tutup"
                </button>
            </div>
        </ModalFrame>
    }
}

#[component]
fn SubscriptionModal(package: String, price: String, on_close: Callback<()>) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let contact = ContactChannel::Telegram;

    view! {
        <ModalFrame
            title=Modal::Subscription { package: package.clone(), price: price.clone() }.title()
            icon="fas fa-shopping-cart me-2 text-accent"
            on_close=on_close
        >
            <div class="modal-body">
                <p>
                    <strong>"Paket: "</strong>
                    {package}
                </p>
                <p>
                    <strong>"Harga: "</strong>
                    {format!("{price} / bulan")}
                </p>
                <p class="mt-3">
                    "Untuk melanjutkan proses berlangganan, silakan hubungi tim support kami melalui Telegram atau WhatsApp."
                </p>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-accent me-2" on:click=move |_| {
                    notifier.info(contact.redirect_message());
                }>
                    <i class=format!("{} me-2", contact.icon())></i>
                    {format!("Hubungi via {}", contact.label())}
                </button>
                <button type="button" class="btn btn-outline-light" on:click=move |_| on_close.run(())>
                    "Tutup"
                </button>
            </div>
        </ModalFrame>
    }
}
