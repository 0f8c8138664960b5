//! Dashboard sidebar: pane links, mobile drawer toggle, overlay, swipes.

use leptos::prelude::*;

use crate::catalog::PRODUCT_NAME;
use crate::state::nav::SectionNav;
use crate::state::sidebar::{
    LINK_CLOSE_DELAY_MS, OVERLAY_FADE_MS, OverlayState, ResponsiveSidebar, SwipeIntent,
};
use crate::util::debounce::{RESIZE_DEBOUNCE_MS, debounced};
use crate::util::dom;
use crate::util::timer::{Timer, schedule};

#[cfg(feature = "hydrate")]
use crate::state::sidebar::SwipeTracker;

/// Drives `ResponsiveSidebar` and owns the overlay fade timer.
#[derive(Clone, Copy)]
pub struct SidebarControl {
    state: RwSignal<ResponsiveSidebar>,
    fade: StoredValue<Option<Timer>, LocalStorage>,
}

impl SidebarControl {
    /// Starts in desktop mode so server and first client render agree; call
    /// `resize` once mounted.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ResponsiveSidebar::default()),
            fade: StoredValue::new_local(None),
        }
    }

    pub fn state(&self) -> RwSignal<ResponsiveSidebar> {
        self.state
    }

    pub fn toggle(self) {
        self.apply(ResponsiveSidebar::toggle);
    }

    pub fn close(self) {
        self.apply(ResponsiveSidebar::close);
    }

    pub fn swipe(self, intent: SwipeIntent) {
        self.apply(|s| s.apply_swipe(intent));
    }

    pub fn resize(self, width: f64) {
        self.apply(|s| s.apply_viewport(width));
    }

    /// Run a transition; a newly fading overlay gets a fresh fade timer,
    /// replacing (and cancelling) any earlier one.
    fn apply(self, transition: impl FnOnce(&mut ResponsiveSidebar) -> bool) {
        let changed = self.state.try_update(transition).unwrap_or(false);
        if !changed {
            return;
        }
        let overlay = self.state.with_untracked(ResponsiveSidebar::overlay);
        let timer = (overlay == OverlayState::Fading).then(|| {
            let state = self.state;
            Timer::after(OVERLAY_FADE_MS, move || {
                state.try_update(ResponsiveSidebar::overlay_faded);
            })
        });
        self.fade.set_value(timer);
    }
}

impl Default for SidebarControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire resize and touch listeners for the page lifetime.
pub fn install_listeners(control: SidebarControl) {
    let on_resize = debounced(RESIZE_DEBOUNCE_MS, move || {
        if let Some(width) = dom::viewport_width() {
            control.resize(width);
        }
    });
    #[cfg_attr(not(feature = "hydrate"), allow(unused_mut))]
    let mut handles = vec![window_event_listener(leptos::ev::resize, move |_| on_resize())];

    #[cfg(feature = "hydrate")]
    {
        let tracker = StoredValue::new(SwipeTracker::default());
        handles.push(window_event_listener(leptos::ev::touchstart, move |ev| {
            if let Some(touch) = ev.touches().item(0) {
                tracker.update_value(|t| t.start(f64::from(touch.client_x()), f64::from(touch.client_y())));
            }
        }));
        handles.push(window_event_listener(leptos::ev::touchmove, move |ev| {
            if let Some(touch) = ev.touches().item(0) {
                tracker.update_value(|t| t.moved(f64::from(touch.client_x()), f64::from(touch.client_y())));
            }
        }));
        handles.push(window_event_listener(leptos::ev::touchend, move |ev| {
            let Some(touch) = ev.changed_touches().item(0) else {
                return;
            };
            let intent = tracker
                .try_update_value(|t| t.end(f64::from(touch.client_x()), f64::from(touch.client_y())))
                .flatten();
            if let Some(intent) = intent {
                control.swipe(intent);
            }
        }));
    }

    on_cleanup(move || {
        for handle in handles {
            handle.remove();
        }
    });
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let control = expect_context::<SidebarControl>();
    let nav = expect_context::<RwSignal<SectionNav>>();
    let sidebar = control.state();

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
                                let present = dom::element_exists(section.id);
                                nav.update(|n| {
                                    n.select(section.id, present);
                                });
                                if sidebar.with_untracked(ResponsiveSidebar::closes_on_link_click) {
                                    schedule(LINK_CLOSE_DELAY_MS, move || control.close());
                                }
                            }
                        >
                            <i class=section_icon(section.id)></i>
                            <span>{section.title}</span>
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <aside class=move || sidebar.get().sidebar_class()>
            <div class="sidebar-header">
                <a class="sidebar-brand" href="/">
                    <i class="fas fa-robot me-2 text-accent"></i>
                    {PRODUCT_NAME}
                </a>
            </div>
            <ul class="sidebar-nav">{links}</ul>
        </aside>
        <Show when=move || sidebar.get().overlay() != OverlayState::Absent>
            <div class=move || sidebar.get().overlay_class() on:click=move |_| control.close()></div>
        </Show>
    }
}

/// Hamburger button shown only in mobile mode.
#[component]
pub fn SidebarToggle() -> impl IntoView {
    let control = expect_context::<SidebarControl>();
    let sidebar = control.state();

    view! {
        <Show when=move || sidebar.get().toggle_mounted()>
            <button
                type="button"
                class="mobile-toggle"
                aria-label="Toggle Sidebar"
                aria-expanded=move || sidebar.get().is_open().to_string()
                on:click=move |_| control.toggle()
            >
                <i class=move || sidebar.get().icon_class()></i>
            </button>
        </Show>
    }
}

fn section_icon(id: &str) -> &'static str {
    match id {
        "overview" => "fas fa-tachometer-alt",
        "trading" => "fas fa-robot",
        "packages" => "fas fa-box",
        "analytics" => "fas fa-chart-bar",
        "settings" => "fas fa-cog",
        "support" => "fas fa-headset",
        _ => "fas fa-circle",
    }
}
