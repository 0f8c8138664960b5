use super::*;
use crate::state::nav::LANDING_SECTIONS;

fn laid_out(id: &str) -> Option<f64> {
    match id {
        "hero" => Some(0.0),
        "features" => Some(600.0),
        "packages" => Some(1400.0),
        "contact" => Some(2200.0),
        _ => None,
    }
}

#[test]
fn section_tops_follow_nav_order() {
    let nav = SectionNav::landing();
    let tops = section_tops(&nav, laid_out);
    let expected: Vec<_> = LANDING_SECTIONS.iter().map(|s| laid_out(s.id)).collect();
    assert_eq!(tops, expected);
}

#[test]
fn measured_tops_drive_the_scroll_spy() {
    let mut nav = SectionNav::landing();
    let tops = section_tops(&nav, laid_out);
    assert!(nav.on_scroll(1350.0, &tops));
    assert_eq!(nav.active_id(), "packages");
}

#[test]
fn unrendered_sections_measure_as_missing() {
    let nav = SectionNav::landing();
    let tops = section_tops(&nav, |id| (id == "hero").then_some(0.0));
    assert_eq!(tops, vec![Some(0.0), None, None, None]);
}
