//! Cancellable one-shot timers for transient UI state.
//!
//! DESIGN
//! ======
//! A `Timer` owns its pending browser timeout. Dropping the handle clears the
//! timeout, so whoever holds the handle decides whether the callback still
//! runs. Outside the browser (SSR, native tests) scheduling is inert: state
//! modules stay deadline-driven and callers never depend on a live clock.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::collections::HashMap;
use std::hash::Hash;

/// Handle to a scheduled callback. Dropping the handle cancels it.
#[must_use = "dropping a Timer cancels the scheduled callback"]
pub struct Timer {
    #[cfg(feature = "hydrate")]
    inner: Option<gloo_timers::callback::Timeout>,
}

impl Timer {
    /// Schedule `callback` to run once after `delay_ms`.
    pub fn after<F>(delay_ms: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            Self { inner: Some(gloo_timers::callback::Timeout::new(delay_ms, callback)) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, callback);
            Self {}
        }
    }

    /// Cancel the pending callback. Harmless if it already fired.
    pub fn cancel(self) {
        drop(self);
    }

    /// Release the handle and let the callback run to completion.
    pub fn detach(self) {
        #[cfg(feature = "hydrate")]
        {
            let mut this = self;
            if let Some(timeout) = this.inner.take() {
                let _ = timeout.forget();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
        }
    }
}

/// Fire-and-forget: run `callback` after `delay_ms` with no way to cancel.
pub fn schedule<F>(delay_ms: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    Timer::after(delay_ms, callback).detach();
}

/// Milliseconds since the epoch in the browser; `0.0` elsewhere.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Whole milliseconds from `now_ms` until `deadline_ms`, never negative.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn delay_until(deadline_ms: f64, now_ms: f64) -> u32 {
    let delta = (deadline_ms - now_ms).ceil();
    if delta <= 0.0 {
        0
    } else if delta >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        delta as u32
    }
}

/// One armed timer per key, kept in step with a set of deadlines.
///
/// Each record that needs waking (a notification, a fading overlay) owns
/// exactly one entry. Reconciling rearms entries whose deadline moved and
/// drops entries whose key vanished, which cancels their timeouts.
pub struct TimerBook<K> {
    armed: HashMap<K, (f64, Timer)>,
}

impl<K> Default for TimerBook<K> {
    fn default() -> Self {
        Self { armed: HashMap::new() }
    }
}

impl<K> TimerBook<K>
where
    K: Eq + Hash + Clone + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring armed timers in line with `deadlines`. `on_fire` receives the
    /// key whose deadline elapsed.
    pub fn reconcile<F>(&mut self, deadlines: Vec<(K, f64)>, now_ms: f64, on_fire: F)
    where
        F: Fn(K) + Clone + 'static,
    {
        let mut next: HashMap<K, (f64, Timer)> = HashMap::with_capacity(deadlines.len());
        for (key, deadline) in deadlines {
            if let Some((armed_at, timer)) = self.armed.remove(&key) {
                if armed_at.total_cmp(&deadline).is_eq() {
                    next.insert(key, (armed_at, timer));
                    continue;
                }
                timer.cancel();
            }
            let fire = on_fire.clone();
            let fired_key = key.clone();
            let timer = Timer::after(delay_until(deadline, now_ms), move || fire(fired_key));
            next.insert(key, (deadline, timer));
        }
        // Whatever is left belongs to records that no longer exist.
        for (_, (_, timer)) in self.armed.drain() {
            timer.cancel();
        }
        self.armed = next;
    }

    /// Deadline currently armed for `key`.
    #[must_use]
    pub fn armed_deadline(&self, key: &K) -> Option<f64> {
        self.armed.get(key).map(|(deadline, _)| *deadline)
    }

}
