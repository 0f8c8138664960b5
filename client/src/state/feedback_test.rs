use super::*;

fn landing() -> NotificationCenter {
    NotificationCenter::new(NotificationTiming::LANDING)
}

// =============================================================
// Notification lifecycle
// =============================================================

#[test]
fn push_inserts_offscreen_and_reveals_after_entry_delay() {
    let mut center = landing();
    let id = center.push("Saved", NotificationKind::Success, 1_000.0);

    let toast = center.get(id).unwrap();
    assert_eq!(toast.phase, NotificationPhase::Entering);
    assert_eq!(toast.transform(), "transform: translateX(300px);");
    assert_eq!(toast.next_deadline(), 1_100.0);

    center.advance(1_099.0);
    assert_eq!(center.get(id).unwrap().phase, NotificationPhase::Entering);

    center.advance(1_100.0);
    let toast = center.get(id).unwrap();
    assert_eq!(toast.phase, NotificationPhase::Shown);
    assert_eq!(toast.transform(), "transform: translateX(0);");
}

#[test]
fn toast_leaves_at_lifetime_and_is_removed_after_exit() {
    let mut center = landing();
    let id = center.push("Hello", NotificationKind::Info, 0.0);

    center.advance(100.0);
    assert_eq!(center.get(id).unwrap().next_deadline(), 3_000.0);

    center.advance(2_999.0);
    assert_eq!(center.get(id).unwrap().phase, NotificationPhase::Shown);

    center.advance(3_000.0);
    assert_eq!(center.get(id).unwrap().phase, NotificationPhase::Leaving);

    assert_eq!(center.advance(3_299.0), 0);
    assert_eq!(center.items().len(), 1);
    assert_eq!(center.advance(3_300.0), 1);
    assert!(center.items().is_empty());
}

#[test]
fn dashboard_timing_keeps_toasts_longer() {
    let mut center = NotificationCenter::new(NotificationTiming::DASHBOARD);
    let id = center.push("Welcome", NotificationKind::Success, 0.0);
    center.advance(4_999.0);
    assert_eq!(center.get(id).unwrap().phase, NotificationPhase::Shown);
    center.advance(5_300.0);
    assert!(center.get(id).is_none());
}

#[test]
fn late_advance_skips_straight_to_removal() {
    let mut center = landing();
    center.push("a", NotificationKind::Warning, 0.0);
    assert_eq!(center.advance(10_000.0), 1);
}

#[test]
fn concurrent_toasts_keep_independent_deadlines() {
    let mut center = landing();
    let first = center.push("one", NotificationKind::Info, 0.0);
    let second = center.push("two", NotificationKind::Error, 1_000.0);
    assert_ne!(first, second);

    center.advance(3_300.0);
    assert!(center.get(first).is_none());
    assert_eq!(center.get(second).unwrap().phase, NotificationPhase::Shown);
    assert_eq!(center.deadlines(), vec![(second, 4_000.0)]);
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn dismiss_moves_to_leaving_and_drops_automatic_deadlines() {
    let mut center = landing();
    let id = center.push("bye", NotificationKind::Info, 0.0);
    center.advance(500.0);

    assert!(center.dismiss(id, 800.0));
    let toast = center.get(id).unwrap();
    assert_eq!(toast.phase, NotificationPhase::Leaving);
    assert_eq!(toast.next_deadline(), 1_100.0);

    assert_eq!(center.advance(1_100.0), 1);
    assert!(center.get(id).is_none());
}

#[test]
fn dismiss_during_entry_cancels_the_reveal() {
    let mut center = landing();
    let id = center.push("quick", NotificationKind::Info, 0.0);
    assert!(center.dismiss(id, 50.0));

    center.advance(150.0);
    assert_eq!(center.get(id).unwrap().phase, NotificationPhase::Leaving);
}

#[test]
fn dismiss_twice_or_unknown_is_rejected() {
    let mut center = landing();
    let id = center.push("x", NotificationKind::Info, 0.0);
    assert!(center.dismiss(id, 10.0));
    assert!(!center.dismiss(id, 20.0));
    assert!(!center.dismiss(999, 20.0));
    assert_eq!(center.get(id).unwrap().next_deadline(), 310.0);
}

#[test]
fn kinds_map_to_icons_and_classes() {
    assert_eq!(NotificationKind::Success.icon(), "fas fa-check-circle");
    assert_eq!(NotificationKind::Error.icon(), "fas fa-exclamation-circle");
    assert_eq!(NotificationKind::Info.icon(), "fas fa-info-circle");
    assert_eq!(NotificationKind::Warning.icon(), "fas fa-exclamation-triangle");
    assert_eq!(NotificationKind::Warning.class(), "notification notification-warning");
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
}

// =============================================================
// Loading buttons
// =============================================================

#[test]
fn begin_captures_label_and_restore_returns_it() {
    let mut button = LoadingButton::new("Pilih Paket");
    assert!(button.begin("Memproses..."));
    assert_eq!(button.label(), "Memproses...");
    assert!(button.disabled());
    assert_eq!(button.icon(), Some("fas fa-spinner fa-spin me-2"));

    assert!(button.restore());
    assert_eq!(button.label(), "Pilih Paket");
    assert!(!button.disabled());
    assert_eq!(button.icon(), None);
}

#[test]
fn begin_while_busy_is_ignored() {
    let mut button = LoadingButton::new("Save");
    assert!(button.begin("Processing..."));
    assert!(!button.begin("Again..."));
    assert_eq!(button.label(), "Processing...");
    button.restore();
    assert_eq!(button.label(), "Save");
}

#[test]
fn confirmation_phase_keeps_control_disabled_until_restore() {
    let mut button = LoadingButton::new("Pilih Paket");
    assert!(!button.confirm("Berhasil!"));

    button.begin("Memproses...");
    assert!(button.confirm("Berhasil!"));
    assert_eq!(button.label(), "Berhasil!");
    assert!(button.disabled());
    assert_eq!(button.icon(), Some("fas fa-check me-2"));
    assert!(!button.confirm("Again"));

    assert!(button.restore());
    assert_eq!(button.label(), "Pilih Paket");
    assert_eq!(button.phase(), &ButtonPhase::Idle);
    assert!(!button.restore());
}

#[test]
fn loading_plans_match_surface_copy() {
    assert_eq!(LoadingPlan::PROCESSING.busy_label, "Processing...");
    assert_eq!(LoadingPlan::PROCESSING.busy_ms, 1_500);
    assert_eq!(LoadingPlan::PROCESSING.confirm, None);
    assert_eq!(LoadingPlan::SUBSCRIBE.confirm, Some(("Berhasil!", 3_000)));
}

// =============================================================
// Ripples
// =============================================================

#[test]
fn ripple_is_centred_on_click_and_sized_to_host() {
    let mut ripples = RippleSet::default();
    let rect = HostRect { left: 100.0, top: 50.0, width: 200.0, height: 40.0 };
    let id = ripples.spawn_at(rect, 150.0, 70.0);

    let ripple = ripples.items()[0];
    assert_eq!(ripple.id, id);
    assert_eq!(ripple.size, 200.0);
    assert_eq!(ripple.x, -50.0);
    assert_eq!(ripple.y, -80.0);
    assert_eq!(ripple.style(), "width: 200px; height: 200px; left: -50px; top: -80px;");
}

#[test]
fn centred_ripple_and_removal() {
    let mut ripples = RippleSet::default();
    let rect = HostRect { left: 0.0, top: 0.0, width: 300.0, height: 200.0 };
    let a = ripples.spawn_centered(rect, 100.0);
    let b = ripples.spawn_centered(rect, 100.0);
    assert_ne!(a, b);
    assert_eq!((ripples.items()[0].x, ripples.items()[0].y), (100.0, 50.0));

    assert!(ripples.remove(a));
    assert!(!ripples.remove(a));
    assert_eq!(ripples.items().len(), 1);
}

#[test]
fn modal_titles() {
    let info = Modal::BrokerInfo { broker: "FBS".to_owned() };
    assert_eq!(info.title(), "FBS");
    let sub = Modal::Subscription { package: "Paket 1".to_owned(), price: "$50".to_owned() };
    assert_eq!(sub.title(), "Konfirmasi Berlangganan");
}
