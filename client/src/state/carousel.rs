//! Products carousel arrows and broker marquee.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

pub const MOBILE_MAX_WIDTH_PX: f64 = 480.0;
pub const TABLET_MAX_WIDTH_PX: f64 = 768.0;

/// Horizontal scroll geometry of the carousel track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

/// Which arrows are hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowVisibility {
    pub left_hidden: bool,
    pub right_hidden: bool,
}

impl Default for ArrowVisibility {
    fn default() -> Self {
        // Before the first measurement the track sits at its start.
        Self { left_hidden: true, right_hidden: false }
    }
}

impl ArrowVisibility {
    #[must_use]
    pub fn for_track(track: TrackMetrics) -> Self {
        let max_scroll = track.scroll_width - track.client_width;
        Self {
            left_hidden: track.scroll_left <= 0.0,
            right_hidden: track.scroll_left >= max_scroll - 1.0,
        }
    }
}

/// Pixels to move per arrow press for the given viewport width.
#[must_use]
pub fn scroll_step(viewport_width: f64) -> f64 {
    if viewport_width <= MOBILE_MAX_WIDTH_PX {
        220.0
    } else if viewport_width <= TABLET_MAX_WIDTH_PX {
        290.0
    } else {
        420.0
    }
}

/// Arrow direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slide {
    Left,
    Right,
}

impl Slide {
    /// Signed scroll delta for this press.
    #[must_use]
    pub fn delta(self, viewport_width: f64) -> f64 {
        let step = scroll_step(viewport_width);
        match self {
            Self::Left => -step,
            Self::Right => step,
        }
    }
}

/// Broker marquee animation state; hover pauses it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marquee {
    #[default]
    Running,
    Paused,
}

impl Marquee {
    #[must_use]
    pub fn play_state(self) -> &'static str {
        match self {
            Self::Running => "animation-play-state: running;",
            Self::Paused => "animation-play-state: paused;",
        }
    }
}
