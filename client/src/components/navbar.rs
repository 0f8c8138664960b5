//! Fixed landing navbar with scroll-spy links and a progress bar.

use leptos::prelude::*;

use crate::catalog::PRODUCT_NAME;
use crate::state::nav::SectionNav;
use crate::state::scroll::ScrollChrome;
use crate::util::dom;

/// Follow a nav link: activate it now and smooth-scroll to its section.
/// Missing sections leave the page where it is.
pub fn follow_link(nav: RwSignal<SectionNav>, id: &'static str) {
    let target_top = dom::element_top(id);
    let destination = nav.try_update(|n| n.on_click(id, target_top)).flatten();
    match destination {
        Some(top) => dom::smooth_scroll_to(top),
        None => leptos::logging::debug_warn!("nav target #{id} not found"),
    }
}

#[component]
pub fn Navbar(on_login: Callback<()>) -> impl IntoView {
    let nav = expect_context::<RwSignal<SectionNav>>();
    let chrome = expect_context::<RwSignal<ScrollChrome>>();

    let links = move || {
        nav.with(|n| n.links().collect::<Vec<_>>())
            .into_iter()
            .map(|(section, state)| {
                view! {
                    <li class="nav-item">
                        <a
                            class="nav-link"
                            class:active=state.is_active()
                            href=format!("#{}", section.id)
                            on:click=move |ev| {
                                ev.prevent_default();
                                follow_link(nav, section.id);
                            }
                        >
                            {section.title}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || chrome.get().tone.class() style=move || chrome.get().tone.style()>
            <div class="scroll-progress" style=move || format!("width: {:.2}%;", chrome.get().progress)></div>
            <div class="container navbar-inner">
                <a class="navbar-brand" href="#hero" on:click=move |ev| {
                    ev.prevent_default();
                    follow_link(nav, "hero");
                }>
                    <i class="fas fa-robot me-2 text-accent"></i>
                    {PRODUCT_NAME}
                </a>
                <ul class="navbar-nav">
                    {links}
                    <li class="nav-item">
                        <a class="nav-link" href="/dashboard">"Dashboard"</a>
                    </li>
                    <li class="nav-item">
                        <button type="button" class="nav-link btn-login-nav" on:click=move |_| on_login.run(())>
                            <i class="fas fa-sign-in-alt me-1"></i>
                            "Login"
                        </button>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
