//! Trailing-edge debounce for bursty browser events (resize, scroll).
//!
//! Only the most recent invocation inside the wait window fires. Rearming
//! drops the previous pending timer, which cancels it outright; the
//! generation counter additionally guards against a stale callback that was
//! already queued by the browser when the cancel landed.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::timer::Timer;

/// Window used for viewport resize handling.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Generation bookkeeping for a debounced call site.
#[derive(Default)]
pub struct Debouncer {
    generation: u64,
    live: bool,
    pending: Option<Timer>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new wait window, superseding any pending one.
    pub fn arm(&mut self) -> u64 {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
        self.generation += 1;
        self.live = true;
        self.generation
    }

    /// Attach the timer driving the current window.
    pub fn hold(&mut self, timer: Timer) {
        self.pending = Some(timer);
    }

    /// Returns `true` exactly once, for the latest armed generation.
    pub fn settle(&mut self, generation: u64) -> bool {
        if !self.live || generation != self.generation {
            return false;
        }
        self.live = false;
        true
    }
}

/// Wrap `action` so repeated calls collapse into one trailing call.
pub fn debounced<F>(wait_ms: u32, action: F) -> impl Fn() + Clone + 'static
where
    F: Fn() + 'static,
{
    let state = Rc::new(RefCell::new(Debouncer::new()));
    let action = Rc::new(action);
    move || {
        let generation = state.borrow_mut().arm();
        let state_for_timer = Rc::clone(&state);
        let action = Rc::clone(&action);
        let timer = Timer::after(wait_ms, move || {
            let fire = state_for_timer.borrow_mut().settle(generation);
            if fire {
                action();
            }
        });
        state.borrow_mut().hold(timer);
    }
}
