//! Public landing page: hero, brokers, features, packages, contact.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the landing surface's state (`SectionNav`, `ScrollChrome`, the open
//! `Modal`, a 3-second `Notifier`) and provides it to the components below.
//! One window scroll listener feeds both the scroll-spy and the navbar
//! chrome.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::{ContactChannel, PRODUCT_NAME};
use crate::components::auth_modal::AuthModal;
use crate::components::broker_carousel::BrokerCarousel;
use crate::components::modal::ModalHost;
use crate::components::navbar::{Navbar, follow_link};
use crate::components::notifications::{NotificationStack, Notifier};
use crate::components::products_carousel::ProductsCarousel;
use crate::components::ripple::RippleButton;
use crate::state::feedback::{Modal, NotificationTiming};
use crate::state::nav::SectionNav;
use crate::state::scroll::ScrollChrome;
use crate::util::{dom, reveal};

#[derive(Clone, Copy)]
struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-robot",
        title: "Auto Trading 24/7",
        text: "Robot mengeksekusi sinyal secara otomatis melalui MetaTrader 4 tanpa perlu dipantau.",
    },
    Feature {
        icon: "fas fa-chart-line",
        title: "Indikator Eksklusif",
        text: "Binary Profit, Golden Moment, dan Price Action dalam satu paket.",
    },
    Feature {
        icon: "fas fa-layer-group",
        title: "Multi Broker",
        text: "Terhubung ke Binomo, Olymptrade, Stockity, IQ Option, Quotex, dan Pocket Option.",
    },
    Feature {
        icon: "fas fa-history",
        title: "Back-tester",
        text: "Uji strategi pada data historis sebelum dipakai di akun real.",
    },
    Feature {
        icon: "fab fa-telegram",
        title: "Grup VIP Telegram",
        text: "Diskusi strategi dan update sinyal bersama komunitas trader.",
    },
    Feature {
        icon: "fas fa-sync-alt",
        title: "Update Gratis",
        text: "Semua pembaruan robot dan indikator tanpa biaya tambahan.",
    },
];

/// Top offsets of every landing section, in nav order.
fn section_tops(nav: &SectionNav, measure: impl Fn(&str) -> Option<f64>) -> Vec<Option<f64>> {
    nav.sections().iter().map(|s| measure(s.id)).collect()
}

fn contact_button_class(channel: ContactChannel) -> &'static str {
    match channel {
        ContactChannel::Telegram => "btn btn-accent btn-lg me-3",
        ContactChannel::WhatsApp => "btn btn-outline-light btn-lg",
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let nav = RwSignal::new(SectionNav::landing());
    let chrome = RwSignal::new(ScrollChrome::default());
    let modal = RwSignal::new(None::<Modal>);
    let notifier = Notifier::new(NotificationTiming::LANDING);
    let auth_open = RwSignal::new(false);

    provide_context(nav);
    provide_context(chrome);
    provide_context(modal);
    provide_context(notifier);

    let on_scroll = move || {
        let metrics = dom::page_scroll();
        let tops = nav.with_untracked(|n| section_tops(n, dom::element_top));
        nav.update(|n| {
            n.on_scroll(metrics.scroll_top, &tops);
        });
        chrome.update(|c| c.update(metrics));
    };
    let scroll = window_event_listener(leptos::ev::scroll, move |_| on_scroll());
    on_cleanup(move || scroll.remove());

    // Runs once after hydration: initial active section and fade-in observer.
    Effect::new(move || {
        on_scroll();
        if !reveal::observe_fade_ins() {
            leptos::logging::debug_warn!("fade-in observer not installed");
        }
    });

    let open_login = Callback::new(move |()| auth_open.set(true));

    view! {
        <Title text=move || nav.with(SectionNav::document_title)/>
        <Navbar on_login=open_login/>

        <section id="hero" class="hero-section">
            <div class="container hero-content">
                <h1 class="hero-title">
                    {PRODUCT_NAME}
                    <span class="d-block text-accent">"Robot Trading Otomatis"</span>
                </h1>
                <p class="hero-subtitle">
                    "Trading binary options lebih disiplin dengan robot, indikator eksklusif, dan komunitas VIP."
                </p>
                <div class="hero-buttons">
                    <RippleButton class="btn btn-accent btn-lg me-3" on_click=Callback::new(move |()| follow_link(nav, "packages"))>
                        <i class="fas fa-rocket me-2"></i>
                        "Lihat Paket"
                    </RippleButton>
                    <RippleButton class="btn btn-outline-light btn-lg" on_click=Callback::new(move |()| follow_link(nav, "contact"))>
                        <i class="fas fa-headset me-2"></i>
                        "Hubungi Kami"
                    </RippleButton>
                </div>
            </div>
            <div class="brokers-strip">
                <p class="brokers-label">"Broker yang didukung"</p>
                <BrokerCarousel/>
            </div>
        </section>

        <section id="features" class="features-section">
            <div class="container">
                <h2 class="section-title fade-in">"Kenapa " {PRODUCT_NAME} "?"</h2>
                <p class="section-subtitle fade-in">"Semua yang dibutuhkan untuk trading otomatis dalam satu langganan."</p>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="feature-box fade-in">
                                    <i class=format!("{} feature-icon", f.icon)></i>
                                    <h4>{f.title}</h4>
                                    <p>{f.text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section id="packages" class="packages-section">
            <div class="container">
                <h2 class="section-title fade-in">"Pilih Paket"</h2>
                <p class="section-subtitle fade-in">"Langganan bulanan, bisa berhenti kapan saja."</p>
                <ProductsCarousel/>
            </div>
        </section>

        <section id="contact" class="contact-section">
            <div class="container text-center">
                <h2 class="section-title fade-in">"Hubungi Kami"</h2>
                <p class="section-subtitle fade-in">"Tim support siap membantu proses berlangganan dan instalasi."</p>
                <div class="contact-buttons">
                    {ContactChannel::ALL
                        .into_iter()
                        .map(|channel| {
                            view! {
                                <RippleButton
                                    class=contact_button_class(channel)
                                    on_click=Callback::new(move |()| {
                                        notifier.info(channel.redirect_message());
                                    })
                                >
                                    <i class=format!("{} me-2", channel.icon())></i>
                                    {channel.label()}
                                </RippleButton>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <footer class="footer">
            <div class="container text-center">
                <p>{format!("© 2024 {PRODUCT_NAME}. All rights reserved.")}</p>
            </div>
        </footer>

        <AuthModal open=auth_open/>
        <ModalHost/>
        <NotificationStack/>
    }
}
