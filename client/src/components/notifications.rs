//! Toast stack and the `Notifier` handle that drives it.
//!
//! DESIGN
//! ======
//! `Notifier` pairs the reactive `NotificationCenter` with a `TimerBook`
//! that keeps one browser timeout per live toast. When a timeout fires it
//! advances the center and re-syncs the book on the next task, so a timeout
//! is never dropped from inside its own callback.

use leptos::prelude::*;

use crate::state::feedback::{NotificationCenter, NotificationKind, NotificationTiming};
use crate::util::timer::{TimerBook, now_ms};

/// Copyable handle provided through context by each page.
#[derive(Clone, Copy)]
pub struct Notifier {
    center: RwSignal<NotificationCenter>,
    timers: StoredValue<TimerBook<u64>, LocalStorage>,
}

impl Notifier {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            center: RwSignal::new(NotificationCenter::new(timing)),
            timers: StoredValue::new_local(TimerBook::new()),
        }
    }

    pub fn center(&self) -> RwSignal<NotificationCenter> {
        self.center
    }

    /// Show a toast; returns its id.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let message = message.into();
        let id = self.center.try_update(|c| c.push(message, kind, now_ms())).unwrap_or_default();
        self.sync();
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Success)
    }

    /// Close button: slide out now and drop the automatic timers.
    pub fn dismiss(&self, id: u64) {
        let dismissed = self.center.try_update(|c| c.dismiss(id, now_ms())).unwrap_or(false);
        if dismissed {
            self.sync();
        }
    }

    fn fire(self, id: u64) {
        let armed = self.timers.try_with_value(|book| book.armed_deadline(&id)).flatten();
        // Timeouts may land a hair early; never advance short of the deadline.
        let now = armed.map_or_else(now_ms, |deadline| now_ms().max(deadline));
        if self.center.try_update(|c| c.advance(now)).is_some() {
            self.sync();
        }
    }

    fn sync(self) {
        let Some(deadlines) = self.center.try_with_untracked(NotificationCenter::deadlines) else {
            return;
        };
        self.timers.update_value(|book| {
            book.reconcile(deadlines, now_ms(), move |id| {
                leptos::task::spawn_local(async move { self.fire(id) });
            });
        });
    }
}

/// Fixed stack rendering every live toast.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let center = notifier.center();
    let ids = move || center.with(|c| c.items().iter().map(|n| n.id).collect::<Vec<_>>());

    view! {
        <div class="notification-stack">
            <For each=ids key=|id| *id let:id>
                <Toast id=id/>
            </For>
        </div>
    }
}

#[component]
fn Toast(id: u64) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let center = notifier.center();
    let (kind, message) = center
        .with_untracked(|c| c.get(id).map(|n| (n.kind, n.message.clone())))
        .unwrap_or_default();
    let style = move || {
        let transform = center.with(|c| c.get(id).map_or("", |n| n.transform()));
        format!("background: {}; {transform}", kind.background())
    };

    view! {
        <div class=kind.class() style=style role="status">
            <i class=format!("{} me-2", kind.icon())></i>
            <span>{message}</span>
            <button class="notification-close" on:click=move |_| notifier.dismiss(id) aria-label="Close">
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
