use super::*;

fn landing_tops() -> Vec<Option<f64>> {
    vec![Some(0.0), Some(800.0), Some(1_600.0), Some(2_400.0)]
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_rejects_empty_section_list() {
    assert!(SectionNav::new(Vec::new(), PRODUCT_NAME).is_none());
}

#[test]
fn named_groups_match_the_checked_constructor() {
    assert_eq!(SectionNav::new(LANDING_SECTIONS.to_vec(), PRODUCT_NAME), Some(SectionNav::landing()));
    assert_eq!(SectionNav::new(DASHBOARD_SECTIONS.to_vec(), PRODUCT_NAME), Some(SectionNav::dashboard()));
}

#[test]
fn first_section_is_active_initially() {
    let nav = SectionNav::landing();
    assert_eq!(nav.active_id(), "hero");
    assert_eq!(nav.source, ActiveSource::Initial);
    assert_eq!(nav.document_title(), "Home - AUTO TRADE VIP");
}

// =============================================================
// Scroll resolution
// =============================================================

#[test]
fn scroll_picks_last_section_whose_boundary_is_passed() {
    let mut nav = SectionNav::landing();
    assert!(nav.on_scroll(700.0, &landing_tops()));
    assert_eq!(nav.active_id(), "features");

    nav.on_scroll(1_499.0, &landing_tops());
    assert_eq!(nav.active_id(), "features");

    nav.on_scroll(1_500.0, &landing_tops());
    assert_eq!(nav.active_id(), "packages");

    nav.on_scroll(10_000.0, &landing_tops());
    assert_eq!(nav.active_id(), "contact");
    assert_eq!(nav.source, ActiveSource::Scroll);
}

#[test]
fn scroll_above_every_boundary_defaults_to_first() {
    let tops = vec![Some(400.0), Some(900.0)];
    assert_eq!(resolve_active(0.0, &tops), 0);
}

#[test]
fn scroll_skips_sections_missing_from_the_dom() {
    let tops = vec![Some(0.0), None, Some(1_600.0), None];
    assert_eq!(resolve_active(1_000.0, &tops), 0);
    assert_eq!(resolve_active(1_500.0, &tops), 2);
    assert_eq!(resolve_active(9_000.0, &[None, None]), 0);
}

#[test]
fn exactly_one_link_is_active_for_any_offset() {
    let mut nav = SectionNav::landing();
    let mut offset = -200.0;
    while offset < 4_000.0 {
        nav.on_scroll(offset, &landing_tops());
        let active = nav.links().filter(|(_, state)| state.is_active()).count();
        assert_eq!(active, 1, "offset {offset}");
        offset += 37.5;
    }
}

#[test]
fn scroll_reports_unchanged_section() {
    let mut nav = SectionNav::landing();
    assert!(!nav.on_scroll(10.0, &landing_tops()));
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn click_activates_target_and_updates_title() {
    let mut nav = SectionNav::landing();
    let dest = nav.on_click("packages", Some(1_600.0));
    assert_eq!(dest, Some(1_520.0));
    assert_eq!(nav.active_id(), "packages");
    assert_eq!(nav.link_state("packages"), LinkState::Active);
    assert_eq!(nav.link_state("hero"), LinkState::Inactive);
    assert_eq!(nav.source, ActiveSource::Click);
    assert_eq!(nav.document_title(), "Packages - AUTO TRADE VIP");
}

#[test]
fn click_destination_never_goes_above_the_page() {
    let mut nav = SectionNav::landing();
    assert_eq!(nav.on_click("hero", Some(20.0)), Some(0.0));
}

#[test]
fn click_on_missing_target_leaves_state_unchanged() {
    let mut nav = SectionNav::landing();
    nav.on_scroll(900.0, &landing_tops());
    let before = nav.clone();

    assert_eq!(nav.on_click("contact", None), None);
    assert_eq!(nav, before);

    assert_eq!(nav.on_click("pricing", Some(100.0)), None);
    assert_eq!(nav, before);
}

#[test]
fn click_holds_while_the_smooth_scroll_closes_in() {
    let mut nav = SectionNav::landing();
    assert_eq!(nav.on_click("contact", Some(2_400.0)), Some(2_320.0));

    // Intermediate samples pass the features and packages boundaries.
    for offset in [300.0, 900.0, 1_600.0, 2_100.0] {
        assert!(!nav.on_scroll(offset, &landing_tops()), "offset {offset}");
        assert_eq!(nav.active_id(), "contact", "offset {offset}");
        assert_eq!(nav.source, ActiveSource::Click);
    }

    nav.on_scroll(2_320.0, &landing_tops());
    assert_eq!(nav.active_id(), "contact");
    assert_eq!(nav.source, ActiveSource::Scroll);
}

#[test]
fn scrolling_away_from_the_destination_releases_the_click() {
    let mut nav = SectionNav::landing();
    nav.on_scroll(1_000.0, &landing_tops());
    nav.on_click("contact", Some(2_400.0));

    nav.on_scroll(1_200.0, &landing_tops());
    assert_eq!(nav.active_id(), "contact");

    // User drags back up mid-glide.
    assert!(nav.on_scroll(0.0, &landing_tops()));
    assert_eq!(nav.active_id(), "hero");
    assert_eq!(nav.source, ActiveSource::Scroll);
}

#[test]
fn after_arrival_scrolling_is_tracked_again() {
    let mut nav = SectionNav::landing();
    nav.on_click("packages", Some(1_600.0));
    nav.on_scroll(1_520.0, &landing_tops());
    assert_eq!(nav.active_id(), "packages");

    nav.on_scroll(900.0, &landing_tops());
    assert_eq!(nav.active_id(), "features");
}

// =============================================================
// Dashboard panes
// =============================================================

#[test]
fn dashboard_select_switches_panes_and_titles() {
    let mut nav = SectionNav::dashboard();
    assert_eq!(nav.document_title(), "Dashboard Overview - AUTO TRADE VIP");
    assert!(nav.select("trading", true));
    assert_eq!(nav.document_title(), "Trading Robot - AUTO TRADE VIP");
}

#[test]
fn dashboard_select_ignores_missing_panes() {
    let mut nav = SectionNav::dashboard();
    assert!(!nav.select("analytics", false));
    assert!(!nav.select("billing", true));
    assert_eq!(nav.active_id(), "overview");
}

#[test]
fn title_for_unknown_id_falls_back() {
    let nav = SectionNav::dashboard();
    assert_eq!(nav.title_for("settings"), "Settings");
    assert_eq!(nav.title_for("billing"), FALLBACK_TITLE);
}
