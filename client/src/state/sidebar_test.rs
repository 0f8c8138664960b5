use super::*;

fn mobile() -> ResponsiveSidebar {
    ResponsiveSidebar::for_width(400.0)
}

fn swipe(tracker: &mut SwipeTracker, from: (f64, f64), to: (f64, f64)) -> Option<SwipeIntent> {
    tracker.start(from.0, from.1);
    tracker.moved(f64::midpoint(from.0, to.0), f64::midpoint(from.1, to.1));
    tracker.end(to.0, to.1)
}

// =============================================================
// Viewport modes
// =============================================================

#[test]
fn breakpoint_is_inclusive() {
    assert_eq!(ViewportMode::for_width(991.0), ViewportMode::Mobile);
    assert_eq!(ViewportMode::for_width(992.0), ViewportMode::Desktop);
}

#[test]
fn desktop_has_no_toggle_and_ignores_toggling() {
    let mut sidebar = ResponsiveSidebar::for_width(1_280.0);
    assert!(!sidebar.toggle_mounted());
    assert!(!sidebar.toggle());
    assert_eq!(sidebar.state, SidebarState::Closed);
    assert_eq!(sidebar.overlay(), OverlayState::Absent);
}

#[test]
fn widening_tears_down_and_forces_closed() {
    let mut sidebar = mobile();
    sidebar.toggle();
    assert!(sidebar.is_open());

    assert!(sidebar.apply_viewport(1_200.0));
    assert_eq!(sidebar.state, SidebarState::Closed);
    assert_eq!(sidebar.overlay(), OverlayState::Absent);
    assert!(!sidebar.toggle_mounted());
}

#[test]
fn repeated_resizes_never_duplicate_toggle_or_overlay() {
    let mut sidebar = ResponsiveSidebar::for_width(1_200.0);
    for width in [800.0, 1_200.0, 700.0, 600.0, 1_500.0, 900.0] {
        sidebar.apply_viewport(width);
        sidebar.toggle();
    }
    // One flag each: the view renders at most one toggle and one overlay.
    assert!(sidebar.toggle_mounted());
    assert!(sidebar.is_open());
    assert_eq!(sidebar.overlay(), OverlayState::Shown);
    assert!(!sidebar.apply_viewport(950.0));
}

// =============================================================
// Toggle and overlay
// =============================================================

#[test]
fn toggle_syncs_icon_and_overlay() {
    let mut sidebar = mobile();
    assert_eq!(sidebar.icon_class(), "fas fa-bars");

    assert!(sidebar.toggle());
    assert_eq!(sidebar.icon_class(), "fas fa-times");
    assert_eq!(sidebar.sidebar_class(), "sidebar mobile-open");
    assert_eq!(sidebar.overlay_class(), "sidebar-overlay show");

    assert!(sidebar.toggle());
    assert_eq!(sidebar.icon_class(), "fas fa-bars");
    assert_eq!(sidebar.overlay(), OverlayState::Fading);
    assert_eq!(sidebar.overlay_class(), "sidebar-overlay");

    assert!(sidebar.overlay_faded());
    assert_eq!(sidebar.overlay(), OverlayState::Absent);
}

#[test]
fn stale_fade_does_not_remove_reopened_overlay() {
    let mut sidebar = mobile();
    sidebar.toggle();
    sidebar.close();
    sidebar.toggle();
    assert!(!sidebar.overlay_faded());
    assert_eq!(sidebar.overlay(), OverlayState::Shown);
}

#[test]
fn link_clicks_close_only_open_mobile_drawer() {
    let mut sidebar = mobile();
    assert!(!sidebar.closes_on_link_click());
    sidebar.toggle();
    assert!(sidebar.closes_on_link_click());
    assert!(!ResponsiveSidebar::for_width(1_400.0).closes_on_link_click());
}

// =============================================================
// Swipes
// =============================================================

#[test]
fn edge_swipe_right_opens_closed_drawer() {
    let mut sidebar = mobile();
    let mut tracker = SwipeTracker::default();
    let intent = swipe(&mut tracker, (10.0, 300.0), (150.0, 310.0));
    assert_eq!(intent, Some(SwipeIntent::Open));
    assert!(sidebar.apply_swipe(SwipeIntent::Open));
    assert!(sidebar.is_open());
}

#[test]
fn vertical_dominant_sequence_is_a_scroll() {
    let mut sidebar = mobile();
    let mut tracker = SwipeTracker::default();
    assert_eq!(swipe(&mut tracker, (10.0, 100.0), (150.0, 400.0)), None);
    assert!(!sidebar.is_open());

    // A single vertical wobble mid-gesture is enough.
    tracker.start(10.0, 100.0);
    tracker.moved(12.0, 140.0);
    assert_eq!(tracker.end(150.0, 110.0), None);
    assert_eq!(sidebar.state, SidebarState::Closed);
}

#[test]
fn swipe_left_closes_open_drawer() {
    let mut sidebar = mobile();
    sidebar.toggle();
    let mut tracker = SwipeTracker::default();
    let intent = swipe(&mut tracker, (250.0, 200.0), (100.0, 205.0));
    assert_eq!(intent, Some(SwipeIntent::Close));
    assert!(sidebar.apply_swipe(SwipeIntent::Close));
    assert_eq!(sidebar.overlay(), OverlayState::Fading);
}

#[test]
fn short_or_misplaced_swipes_do_nothing() {
    let mut tracker = SwipeTracker::default();
    assert_eq!(swipe(&mut tracker, (10.0, 0.0), (100.0, 0.0)), None);
    assert_eq!(swipe(&mut tracker, (60.0, 0.0), (300.0, 0.0)), None);
    assert_eq!(swipe(&mut tracker, (40.0, 0.0), (-80.0, 0.0)), None);
    assert_eq!(tracker.end(0.0, 0.0), None);
}

#[test]
fn swipes_are_ignored_on_desktop_and_when_redundant() {
    let mut desktop = ResponsiveSidebar::for_width(1_400.0);
    assert!(!desktop.apply_swipe(SwipeIntent::Open));

    let mut sidebar = mobile();
    assert!(!sidebar.apply_swipe(SwipeIntent::Close));
    sidebar.apply_swipe(SwipeIntent::Open);
    assert!(!sidebar.apply_swipe(SwipeIntent::Open));
}
