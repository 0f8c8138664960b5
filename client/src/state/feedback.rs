//! Transient UI feedback: toasts, loading buttons, modals, ripples.
//!
//! DESIGN
//! ======
//! Every transient artifact is a record with its own deadlines. Nothing here
//! owns a clock: callers pass `now_ms` in and the browser layer arms one
//! timer per record (see `util::timer::TimerBook`) to call `advance` when the
//! next deadline comes due. Explicit dismissal rewrites the record's
//! deadlines, so the rearmed timer replaces (and cancels) the automatic one.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl NotificationKind {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Info => "fas fa-info-circle",
            Self::Warning => "fas fa-exclamation-triangle",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
            Self::Info => "notification notification-info",
            Self::Warning => "notification notification-warning",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(135deg, #00e676, #00c965)",
            Self::Error => "linear-gradient(135deg, #dc3545, #c82333)",
            Self::Info => "linear-gradient(135deg, #0dcaf0, #0bb5d9)",
            Self::Warning => "linear-gradient(135deg, #ffc107, #e0a800)",
        }
    }
}

/// Fixed durations of a toast's lifecycle, all measured in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotificationTiming {
    /// Delay between insertion (off-screen) and sliding into view.
    pub enter_delay_ms: f64,
    /// Time from creation until the exit animation starts.
    pub lifetime_ms: f64,
    /// Exit animation length; the toast is removed when it ends.
    pub exit_ms: f64,
}

impl NotificationTiming {
    pub const LANDING: Self = Self { enter_delay_ms: 100.0, lifetime_ms: 3_000.0, exit_ms: 300.0 };
    pub const DASHBOARD: Self = Self { enter_delay_ms: 100.0, lifetime_ms: 5_000.0, exit_ms: 300.0 };
}

/// Where a toast is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Inserted off-screen, waiting for the entry delay.
    Entering,
    Shown,
    /// Sliding out; removed when `remove_at` passes.
    Leaving,
}

/// One toast and its pending deadlines.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: f64,
    pub phase: NotificationPhase,
    reveal_at: Option<f64>,
    leave_at: Option<f64>,
    remove_at: f64,
}

impl Notification {
    fn new(id: u64, message: String, kind: NotificationKind, now_ms: f64, timing: NotificationTiming) -> Self {
        Self {
            id,
            message,
            kind,
            created_at: now_ms,
            phase: NotificationPhase::Entering,
            reveal_at: Some(now_ms + timing.enter_delay_ms),
            leave_at: Some(now_ms + timing.lifetime_ms),
            remove_at: now_ms + timing.lifetime_ms + timing.exit_ms,
        }
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> f64 {
        [self.reveal_at, self.leave_at]
            .into_iter()
            .flatten()
            .fold(self.remove_at, f64::min)
    }

    /// Slide transform for the current phase.
    #[must_use]
    pub fn transform(&self) -> &'static str {
        match self.phase {
            NotificationPhase::Shown => "transform: translateX(0);",
            NotificationPhase::Entering | NotificationPhase::Leaving => "transform: translateX(300px);",
        }
    }

    fn advance(&mut self, now_ms: f64) {
        if self.reveal_at.is_some_and(|at| at <= now_ms) {
            self.reveal_at = None;
            self.phase = NotificationPhase::Shown;
        }
        if self.leave_at.is_some_and(|at| at <= now_ms) {
            self.reveal_at = None;
            self.leave_at = None;
            self.phase = NotificationPhase::Leaving;
        }
    }
}

/// All live toasts for one surface.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationCenter {
    timing: NotificationTiming,
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(timing: NotificationTiming) -> Self {
        Self { timing, next_id: 1, items: Vec::new() }
    }

    /// Insert a toast off-screen. Returns its id.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification::new(id, message.into(), kind, now_ms, self.timing));
        id
    }

    /// Start the exit animation early. The automatic reveal/leave deadlines
    /// are dropped; removal is rescheduled to the end of the exit animation.
    /// Returns `false` for unknown ids or toasts already leaving.
    pub fn dismiss(&mut self, id: u64, now_ms: f64) -> bool {
        let exit_ms = self.timing.exit_ms;
        let Some(item) = self.items.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if item.phase == NotificationPhase::Leaving {
            return false;
        }
        item.phase = NotificationPhase::Leaving;
        item.reveal_at = None;
        item.leave_at = None;
        item.remove_at = now_ms + exit_ms;
        true
    }

    /// Apply every deadline at or before `now_ms`. Returns how many toasts
    /// were removed.
    pub fn advance(&mut self, now_ms: f64) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.remove_at > now_ms);
        for item in &mut self.items {
            item.advance(now_ms);
        }
        before - self.items.len()
    }

    /// `(id, next deadline)` for every live toast.
    #[must_use]
    pub fn deadlines(&self) -> Vec<(u64, f64)> {
        self.items.iter().map(|n| (n.id, n.next_deadline())).collect()
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

}

// =============================================================================
// LOADING BUTTONS
// =============================================================================

/// Busy/confirmation sequence for a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingPlan {
    pub busy_label: &'static str,
    pub busy_ms: u32,
    /// Optional success label held before restoring.
    pub confirm: Option<(&'static str, u32)>,
}

impl LoadingPlan {
    /// Generic dashboard action.
    pub const PROCESSING: Self = Self { busy_label: "Processing...", busy_ms: 1_500, confirm: None };
    /// Package subscription: busy, then a short success state.
    pub const SUBSCRIBE: Self = Self { busy_label: "Memproses...", busy_ms: 2_000, confirm: Some(("Berhasil!", 3_000)) };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    Idle,
    Loading { saved: String },
    Confirmed { saved: String },
}

/// Label + enabled state of a control that can enter a loading state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingButton {
    label: String,
    phase: ButtonPhase,
}

impl LoadingButton {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), phase: ButtonPhase::Idle }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn phase(&self) -> &ButtonPhase {
        &self.phase
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        !matches!(self.phase, ButtonPhase::Idle)
    }

    /// Icon shown in front of the label, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&'static str> {
        match self.phase {
            ButtonPhase::Idle => None,
            ButtonPhase::Loading { .. } => Some("fas fa-spinner fa-spin me-2"),
            ButtonPhase::Confirmed { .. } => Some("fas fa-check me-2"),
        }
    }

    /// Capture the current label, show `busy_label`, disable the control.
    /// Returns `false` (and changes nothing) if already busy.
    pub fn begin(&mut self, busy_label: &str) -> bool {
        if self.disabled() {
            return false;
        }
        let saved = std::mem::replace(&mut self.label, busy_label.to_owned());
        self.phase = ButtonPhase::Loading { saved };
        true
    }

    /// Swap the busy label for a success label; still disabled.
    pub fn confirm(&mut self, done_label: &str) -> bool {
        let saved = match &mut self.phase {
            ButtonPhase::Loading { saved } => std::mem::take(saved),
            ButtonPhase::Idle | ButtonPhase::Confirmed { .. } => return false,
        };
        self.label = done_label.to_owned();
        self.phase = ButtonPhase::Confirmed { saved };
        true
    }

    /// Restore the captured label and re-enable the control.
    pub fn restore(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, ButtonPhase::Idle) {
            ButtonPhase::Idle => false,
            ButtonPhase::Loading { saved } | ButtonPhase::Confirmed { saved } => {
                self.label = saved;
                true
            }
        }
    }
}

// =============================================================================
// MODALS
// =============================================================================

/// Dialog currently open on a surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    BrokerInfo { broker: String },
    Subscription { package: String, price: String },
}

impl Modal {
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::BrokerInfo { broker } => broker.clone(),
            Self::Subscription { .. } => "Konfirmasi Berlangganan".to_owned(),
        }
    }
}

// =============================================================================
// RIPPLES
// =============================================================================

/// How long a ripple circle lives.
pub const RIPPLE_MS: u32 = 600;

/// Bounding box of the element hosting ripples, in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// One expanding circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub size: f64,
    /// Offset of the circle's box inside the host.
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    #[must_use]
    pub fn style(&self) -> String {
        format!("width: {0}px; height: {0}px; left: {1}px; top: {2}px;", self.size, self.x, self.y)
    }
}

/// Ripples alive inside one host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleSet {
    next_id: u64,
    items: Vec<Ripple>,
}

impl RippleSet {
    /// Spawn a circle sized to the host and centred on the click point.
    pub fn spawn_at(&mut self, rect: HostRect, client_x: f64, client_y: f64) -> u64 {
        let size = rect.width.max(rect.height);
        let x = client_x - rect.left - size / 2.0;
        let y = client_y - rect.top - size / 2.0;
        self.push(size, x, y)
    }

    /// Spawn a fixed-size circle centred in the host.
    pub fn spawn_centered(&mut self, rect: HostRect, size: f64) -> u64 {
        self.push(size, (rect.width - size) / 2.0, (rect.height - size) / 2.0)
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        before != self.items.len()
    }

    #[must_use]
    pub fn items(&self) -> &[Ripple] {
        &self.items
    }

    fn push(&mut self, size: f64, x: f64, y: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Ripple { id, size, x, y });
        id
    }
}
