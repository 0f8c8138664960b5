//! Active-section tracking for single-page surfaces.
//!
//! DESIGN
//! ======
//! Two independent triggers decide which section is active: an explicit
//! nav-link click and the passive scroll position. Both funnel through
//! `SectionNav`, which stores a single active index, so exactly one link is
//! active at any time and the document title always matches it.
//!
//! Offsets are passed in by the caller (read from the DOM under `hydrate`),
//! which keeps the resolution rules testable without a browser.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::catalog::PRODUCT_NAME;

/// Height reserved for the fixed navbar when deciding what is "in view".
pub const NAVBAR_MARGIN_PX: f64 = 100.0;

/// Gap left above a section when scrolling to it from a nav click.
pub const SCROLL_TARGET_OFFSET_PX: f64 = 80.0;

/// Distance from a click's scroll destination that counts as arrived.
pub const ARRIVAL_SLACK_PX: f64 = 1.0;

/// Title used for ids that do not name a known section.
pub const FALLBACK_TITLE: &str = "Dashboard";

/// One logical pane of a single-page view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
}

pub const LANDING_SECTIONS: &[Section] = &[
    Section { id: "hero", title: "Home" },
    Section { id: "features", title: "Features" },
    Section { id: "packages", title: "Packages" },
    Section { id: "contact", title: "Contact" },
];

pub const DASHBOARD_SECTIONS: &[Section] = &[
    Section { id: "overview", title: "Dashboard Overview" },
    Section { id: "trading", title: "Trading Robot" },
    Section { id: "packages", title: "My Packages" },
    Section { id: "analytics", title: "Analytics" },
    Section { id: "settings", title: "Settings" },
    Section { id: "support", title: "Support" },
];

/// Visual state of a nav link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Inactive,
    Active,
}

impl LinkState {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// What last decided the active section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveSource {
    #[default]
    Initial,
    Scroll,
    Click,
}

/// Smooth scroll started by a click, still heading for `destination`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Glide {
    destination: f64,
    remaining: f64,
}

/// Exclusive active-section state for one nav group.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionNav {
    sections: Vec<Section>,
    active: usize,
    source: ActiveSource,
    product: &'static str,
    last_scroll: f64,
    glide: Option<Glide>,
}

impl SectionNav {
    /// Build a nav group. Returns `None` when `sections` is empty, since an
    /// empty group has nothing to keep active.
    #[must_use]
    pub fn new(sections: Vec<Section>, product: &'static str) -> Option<Self> {
        if sections.is_empty() {
            return None;
        }
        Some(Self::with_sections(sections, product))
    }

    /// Landing-page navbar: hero, features, packages, contact.
    #[must_use]
    pub fn landing() -> Self {
        Self::with_sections(LANDING_SECTIONS.to_vec(), PRODUCT_NAME)
    }

    /// Dashboard sidebar panes.
    #[must_use]
    pub fn dashboard() -> Self {
        Self::with_sections(DASHBOARD_SECTIONS.to_vec(), PRODUCT_NAME)
    }

    /// Callers guarantee `sections` is non-empty.
    fn with_sections(sections: Vec<Section>, product: &'static str) -> Self {
        Self { sections, active: 0, source: ActiveSource::Initial, product, last_scroll: 0.0, glide: None }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn active(&self) -> Section {
        self.sections[self.active]
    }

    #[must_use]
    pub fn active_id(&self) -> &'static str {
        self.active().id
    }

    #[must_use]
    pub fn link_state(&self, id: &str) -> LinkState {
        if self.active_id() == id { LinkState::Active } else { LinkState::Inactive }
    }

    /// Every link paired with its state, in document order.
    pub fn links(&self) -> impl Iterator<Item = (Section, LinkState)> + '_ {
        self.sections.iter().map(|s| (*s, self.link_state(s.id)))
    }

    /// Display title for `id`, or the generic dashboard title.
    #[must_use]
    pub fn title_for(&self, id: &str) -> &'static str {
        self.position(id).map_or(FALLBACK_TITLE, |i| self.sections[i].title)
    }

    /// `"{SectionTitle} - {ProductName}"` for the active section.
    #[must_use]
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.active().title, self.product)
    }

    /// Recompute the active section from the scroll position.
    ///
    /// `tops[i]` is the top offset of section `i`, or `None` when its element
    /// is not rendered. Returns `true` when the active section changed.
    ///
    /// While a click-initiated scroll keeps closing in on its destination the
    /// clicked section stays active. Arriving, or moving away from the
    /// destination, hands control back to the scroll position.
    pub fn on_scroll(&mut self, scroll_top: f64, tops: &[Option<f64>]) -> bool {
        self.last_scroll = scroll_top.max(0.0);
        if let Some(glide) = self.glide.as_mut() {
            let remaining = (scroll_top - glide.destination).abs();
            if remaining > ARRIVAL_SLACK_PX && remaining <= glide.remaining {
                glide.remaining = remaining;
                return false;
            }
            self.glide = None;
        }

        let next = resolve_active(scroll_top, tops).min(self.sections.len() - 1);
        let changed = next != self.active;
        self.active = next;
        self.source = ActiveSource::Scroll;
        changed
    }

    /// Handle a nav-link click.
    ///
    /// `target_top` is the top offset of the section element, `None` when
    /// the element is missing. Missing targets and unknown ids leave the
    /// state untouched. On success, returns the smooth-scroll destination.
    pub fn on_click(&mut self, id: &str, target_top: Option<f64>) -> Option<f64> {
        let index = self.position(id)?;
        let top = target_top?;
        let destination = (top - SCROLL_TARGET_OFFSET_PX).max(0.0);
        self.active = index;
        self.source = ActiveSource::Click;
        self.glide = Some(Glide { destination, remaining: (self.last_scroll - destination).abs() });
        Some(destination)
    }

    /// Switch panes without scrolling (dashboard). `present` reports whether
    /// the pane element exists. Returns `true` when the selection applied.
    pub fn select(&mut self, id: &str, present: bool) -> bool {
        match self.position(id) {
            Some(index) if present => {
                self.active = index;
                self.source = ActiveSource::Click;
                self.glide = None;
                true
            }
            _ => false,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }
}

/// Index of the last section whose boundary (`top - NAVBAR_MARGIN_PX`) is at
/// or above `scroll_top`; the first section when none qualifies.
#[must_use]
pub fn resolve_active(scroll_top: f64, tops: &[Option<f64>]) -> usize {
    tops.iter()
        .enumerate()
        .filter_map(|(i, top)| top.map(|t| (i, t - NAVBAR_MARGIN_PX)))
        .filter(|(_, boundary)| scroll_top >= *boundary)
        .map(|(i, _)| i)
        .last()
        .unwrap_or(0)
}
