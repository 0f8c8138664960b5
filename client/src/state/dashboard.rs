//! Dashboard-only widgets: robot control, activity feed, stats ticker.
//!
//! Everything here is simulated demo behaviour. Randomness is injected as
//! `roll` values in `[0, 1)` so the drift rules stay deterministic in tests.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::catalog::{PACKAGES, PRODUCT_NAME, Package, package};

pub const STATS_TICK_MS: u32 = 30_000;
pub const WELCOME_DELAY_MS: u32 = 1_000;
/// Simulated stop/start duration.
pub const ROBOT_TRANSITION_MS: u32 = 2_000;
pub const ROBOT_SETTINGS_MESSAGE: &str = "Opening robot settings...";

/// Package id of the member's current subscription.
pub const CURRENT_PACKAGE_ID: &str = "multi-platform";

/// The subscribed package, falling back to the first catalog entry.
#[must_use]
pub fn current_package() -> Package {
    package(CURRENT_PACKAGE_ID).copied().unwrap_or(PACKAGES[0])
}

#[must_use]
pub fn welcome_message() -> String {
    format!("Welcome to your {PRODUCT_NAME} dashboard!")
}

// =============================================================================
// ROBOT
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RobotStatus {
    #[default]
    Active,
    Stopping,
    Stopped,
    Starting,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RobotPanel {
    status: RobotStatus,
}

impl RobotPanel {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.status, RobotStatus::Stopping | RobotStatus::Starting)
    }

    /// Begin stopping (or starting). Ignored mid-transition.
    pub fn request_toggle(&mut self) -> bool {
        self.status = match self.status {
            RobotStatus::Active => RobotStatus::Stopping,
            RobotStatus::Stopped => RobotStatus::Starting,
            RobotStatus::Stopping | RobotStatus::Starting => return false,
        };
        true
    }

    /// Complete the pending transition; returns the success message.
    pub fn finish_transition(&mut self) -> Option<&'static str> {
        let (next, message) = match self.status {
            RobotStatus::Stopping => (RobotStatus::Stopped, "Trading robot stopped successfully"),
            RobotStatus::Starting => (RobotStatus::Active, "Trading robot started successfully"),
            RobotStatus::Active | RobotStatus::Stopped => return None,
        };
        self.status = next;
        Some(message)
    }

    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self.status {
            RobotStatus::Active => "ACTIVE",
            RobotStatus::Stopping => "STOPPING...",
            RobotStatus::Stopped => "STOPPED",
            RobotStatus::Starting => "STARTING...",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self.status {
            RobotStatus::Active => "Trading robot is running and monitoring the market",
            RobotStatus::Stopping => "Stopping trading robot safely...",
            RobotStatus::Stopped => "Trading robot has been stopped",
            RobotStatus::Starting => "Starting trading robot...",
        }
    }

    #[must_use]
    pub fn status_class(&self) -> &'static str {
        match self.status {
            RobotStatus::Active => "robot-status active",
            RobotStatus::Stopped => "robot-status stopped",
            RobotStatus::Stopping | RobotStatus::Starting => "robot-status",
        }
    }

    /// `(icon, label, button class)` of the main control.
    #[must_use]
    pub fn control(&self) -> (&'static str, &'static str, &'static str) {
        match self.status {
            RobotStatus::Active | RobotStatus::Stopping => ("fas fa-stop", "Stop Robot", "btn btn-danger"),
            RobotStatus::Stopped | RobotStatus::Starting => ("fas fa-play", "Start Robot", "btn btn-success"),
        }
    }
}

// =============================================================================
// ACTIVITY FEED
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub detail: &'static str,
    pub time: &'static str,
    pub icon: &'static str,
}

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        title: "EUR/USD Call Trade",
        detail: "Profit +$24.50 on Binomo",
        time: "2 minutes ago",
        icon: "fas fa-arrow-up",
    },
    Activity {
        title: "GBP/JPY Put Trade",
        detail: "Profit +$18.20 on Olymptrade",
        time: "15 minutes ago",
        icon: "fas fa-arrow-down",
    },
    Activity {
        title: "Robot Signal Update",
        detail: "New strategy parameters applied",
        time: "1 hour ago",
        icon: "fas fa-robot",
    },
    Activity {
        title: "Package Renewed",
        detail: "Multi Platform package active for 30 days",
        time: "Yesterday",
        icon: "fas fa-box",
    },
];

/// Activity list with single selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityFeed {
    items: Vec<Activity>,
    selected: Option<usize>,
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self::new(RECENT_ACTIVITY.to_vec())
    }
}

impl ActivityFeed {
    #[must_use]
    pub fn new(items: Vec<Activity>) -> Self {
        Self { items, selected: None }
    }

    #[must_use]
    pub fn items(&self) -> &[Activity] {
        &self.items
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Select one item, deselecting the rest. Returns the details message.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let item = self.items.get(index)?;
        self.selected = Some(index);
        Some(format!("Viewing details for: {}", item.title))
    }
}

// =============================================================================
// STATS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatValue {
    /// Whole dollars; grows on every tick.
    Dollars(u64),
    /// Percentage with one decimal; drifts either way, never below zero.
    Percent(f64),
    /// Plain count; never drifts.
    Count(u64),
}

impl StatValue {
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Dollars(v) => format!("${v}"),
            Self::Percent(v) => format!("{v:.1}%"),
            Self::Count(v) => v.to_string(),
        }
    }

    /// Apply one tick of drift given `roll` in `[0, 1)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn drift(self, roll: f64) -> Self {
        let roll = roll.clamp(0.0, 1.0 - f64::EPSILON);
        match self {
            Self::Dollars(v) => Self::Dollars(v + (roll * 50.0).floor() as u64),
            Self::Percent(v) => {
                let next = (v + (roll - 0.5) * 2.0).max(0.0);
                Self::Percent((next * 10.0).round() / 10.0)
            }
            Self::Count(v) => Self::Count(v),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: StatValue,
}

#[must_use]
pub fn initial_stats() -> Vec<StatCard> {
    vec![
        StatCard { label: "Total Profit", icon: "fas fa-dollar-sign", value: StatValue::Dollars(1_250) },
        StatCard { label: "Win Rate", icon: "fas fa-chart-line", value: StatValue::Percent(78.5) },
        StatCard { label: "Active Trades", icon: "fas fa-exchange-alt", value: StatValue::Count(12) },
        StatCard { label: "Monthly ROI", icon: "fas fa-percentage", value: StatValue::Percent(24.3) },
    ]
}

/// One ticker step; `roll` is called once per drifting card.
pub fn tick_stats(cards: &mut [StatCard], mut roll: impl FnMut() -> f64) {
    for card in cards {
        if !matches!(card.value, StatValue::Count(_)) {
            card.value = card.value.drift(roll());
        }
    }
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// One row of the monthly performance table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyResult {
    pub month: &'static str,
    pub trades: u32,
    pub profit: f64,
    pub win_rate: f64,
}

pub const MONTHLY_RESULTS: [MonthlyResult; 4] = [
    MonthlyResult { month: "January", trades: 214, profit: 1_180.5, win_rate: 76.64 },
    MonthlyResult { month: "February", trades: 198, profit: 964.2, win_rate: 74.24 },
    MonthlyResult { month: "March", trades: 233, profit: 1_412.75, win_rate: 79.4 },
    MonthlyResult { month: "April", trades: 187, profit: -86.3, win_rate: 61.5 },
];

/// `(total trades, total profit)` across `rows`.
#[must_use]
pub fn totals(rows: &[MonthlyResult]) -> (u32, f64) {
    rows.iter().fold((0, 0.0), |(trades, profit), r| (trades + r.trades, profit + r.profit))
}
