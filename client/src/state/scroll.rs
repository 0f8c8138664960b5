//! Scroll-linked navbar chrome: background tone and progress bar.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset past which the navbar starts to fade.
pub const TRANSLUCENT_AFTER_PX: f64 = 50.0;
/// Scroll offset past which the navbar is mostly see-through.
pub const TRANSPARENT_AFTER_PX: f64 = 100.0;

/// Navbar background treatment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavbarTone {
    #[default]
    Solid,
    Translucent,
    Transparent,
}

impl NavbarTone {
    #[must_use]
    pub fn for_offset(scroll_top: f64) -> Self {
        if scroll_top > TRANSPARENT_AFTER_PX {
            Self::Transparent
        } else if scroll_top > TRANSLUCENT_AFTER_PX {
            Self::Translucent
        } else {
            Self::Solid
        }
    }

    /// Inline style applied to the navbar element.
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::Solid => "background: rgba(26, 31, 46, 0.95); backdrop-filter: blur(10px);",
            Self::Translucent => "background: rgba(26, 31, 46, 0.7); backdrop-filter: blur(15px);",
            Self::Transparent => "background: rgba(26, 31, 46, 0.3); backdrop-filter: blur(20px);",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Transparent => "navbar navbar-transparent",
            Self::Solid | Self::Translucent => "navbar",
        }
    }
}

/// Document geometry sampled on each scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Derived navbar state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollChrome {
    pub tone: NavbarTone,
    /// Progress bar width in percent, `0.0..=100.0`.
    pub progress: f64,
}

impl ScrollChrome {
    /// Fold one scroll sample into the chrome state.
    pub fn update(&mut self, metrics: ScrollMetrics) {
        self.tone = NavbarTone::for_offset(metrics.scroll_top);
        self.progress = progress_percent(metrics);
    }
}

/// Share of the scrollable height already scrolled, in percent.
#[must_use]
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}
