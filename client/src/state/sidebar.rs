//! Responsive sidebar for the dashboard.
//!
//! On narrow viewports the sidebar becomes an off-canvas drawer with a toggle
//! button and a dimmed overlay. Both exist only in mobile mode, so the view
//! renders them from `toggle_mounted` / `overlay` instead of creating DOM
//! nodes by hand; crossing the breakpoint repeatedly can never leave
//! duplicates behind.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Widest viewport (inclusive) treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 991.0;
/// Swipes must start inside this margin from the left edge to open.
pub const EDGE_MARGIN_PX: f64 = 50.0;
/// Minimum horizontal travel for a swipe.
pub const SWIPE_DISTANCE_PX: f64 = 100.0;
/// Overlay fade-out before it is removed.
pub const OVERLAY_FADE_MS: u32 = 300;
/// Delay before a sidebar link click closes the drawer.
pub const LINK_CLOSE_DELAY_MS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportMode {
    #[default]
    Desktop,
    Mobile,
}

impl ViewportMode {
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT_PX { Self::Mobile } else { Self::Desktop }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Absent,
    Shown,
    /// Visible but fading; removed by `overlay_faded`.
    Fading,
}

/// What a finished swipe asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeIntent {
    Open,
    Close,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResponsiveSidebar {
    mode: ViewportMode,
    state: SidebarState,
    overlay: OverlayState,
}

impl ResponsiveSidebar {
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        let mut sidebar = Self::default();
        sidebar.apply_viewport(width);
        sidebar
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == SidebarState::Open
    }

    #[must_use]
    pub fn toggle_mounted(&self) -> bool {
        self.mode == ViewportMode::Mobile
    }

    #[must_use]
    pub fn icon_class(&self) -> &'static str {
        match self.state {
            SidebarState::Closed => "fas fa-bars",
            SidebarState::Open => "fas fa-times",
        }
    }

    #[must_use]
    pub fn sidebar_class(&self) -> &'static str {
        match self.state {
            SidebarState::Closed => "sidebar",
            SidebarState::Open => "sidebar mobile-open",
        }
    }

    #[must_use]
    pub fn overlay_class(&self) -> &'static str {
        match self.overlay {
            OverlayState::Shown => "sidebar-overlay show",
            OverlayState::Absent | OverlayState::Fading => "sidebar-overlay",
        }
    }

    /// Re-evaluate after a (debounced) resize. Leaving mobile mode tears the
    /// toggle and overlay down and forces the drawer closed.
    pub fn apply_viewport(&mut self, width: f64) -> bool {
        let before = *self;
        self.mode = ViewportMode::for_width(width);
        if self.mode == ViewportMode::Desktop {
            self.state = SidebarState::Closed;
            self.overlay = OverlayState::Absent;
        }
        before != *self
    }

    /// Flip open/closed. No-op on desktop.
    pub fn toggle(&mut self) -> bool {
        match self.state {
            SidebarState::Closed => self.open(),
            SidebarState::Open => self.close(),
        }
    }

    pub fn open(&mut self) -> bool {
        if self.mode != ViewportMode::Mobile || self.is_open() {
            return false;
        }
        self.state = SidebarState::Open;
        self.overlay = OverlayState::Shown;
        true
    }

    /// Close the drawer; a visible overlay starts fading.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = SidebarState::Closed;
        if self.overlay == OverlayState::Shown {
            self.overlay = OverlayState::Fading;
        }
        true
    }

    /// Fade finished. Ignored if the drawer reopened meanwhile.
    pub fn overlay_faded(&mut self) -> bool {
        if self.overlay != OverlayState::Fading {
            return false;
        }
        self.overlay = OverlayState::Absent;
        true
    }

    /// Whether a sidebar link click should schedule a close.
    #[must_use]
    pub fn closes_on_link_click(&self) -> bool {
        self.mode == ViewportMode::Mobile && self.is_open()
    }

    pub fn apply_swipe(&mut self, intent: SwipeIntent) -> bool {
        if self.mode != ViewportMode::Mobile {
            return false;
        }
        match intent {
            SwipeIntent::Open => self.open(),
            SwipeIntent::Close => self.close(),
        }
    }
}

/// Classifies a single touch sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
    scrolling: bool,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.scrolling = false;
    }

    /// Once vertical travel beats horizontal travel the sequence is a
    /// scroll for good.
    pub fn moved(&mut self, x: f64, y: f64) {
        if let Some((sx, sy)) = self.start
            && (y - sy).abs() > (x - sx).abs()
        {
            self.scrolling = true;
        }
    }

    /// Finish the sequence and reset.
    pub fn end(&mut self, x: f64, y: f64) -> Option<SwipeIntent> {
        self.moved(x, y);
        let (sx, _) = self.start.take()?;
        let scrolling = std::mem::take(&mut self.scrolling);
        if scrolling {
            return None;
        }
        let dx = x - sx;
        if sx < EDGE_MARGIN_PX && dx > SWIPE_DISTANCE_PX {
            Some(SwipeIntent::Open)
        } else if sx > EDGE_MARGIN_PX && dx < -SWIPE_DISTANCE_PX {
            Some(SwipeIntent::Close)
        } else {
            None
        }
    }
}
