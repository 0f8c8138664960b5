use super::*;

// =============================================================
// delay_until
// =============================================================

#[test]
fn delay_until_rounds_up_partial_milliseconds() {
    assert_eq!(delay_until(100.2, 0.0), 101);
    assert_eq!(delay_until(1_500.0, 1_000.0), 500);
}

#[test]
fn delay_until_never_goes_negative() {
    assert_eq!(delay_until(10.0, 50.0), 0);
    assert_eq!(delay_until(50.0, 50.0), 0);
}

#[test]
fn delay_until_saturates_far_deadlines() {
    assert_eq!(delay_until(1e12, 0.0), u32::MAX);
}

// =============================================================
// TimerBook
// =============================================================

#[test]
fn reconcile_arms_one_timer_per_key() {
    let mut book = TimerBook::new();
    book.reconcile(vec![(1_u64, 100.0), (2, 300.0)], 0.0, |_| {});
    assert_eq!(book.armed.len(), 2);
    assert_eq!(book.armed_deadline(&1), Some(100.0));
    assert_eq!(book.armed_deadline(&2), Some(300.0));
}

#[test]
fn reconcile_rearms_moved_deadlines() {
    let mut book = TimerBook::new();
    book.reconcile(vec![(7_u64, 5_000.0)], 0.0, |_| {});
    book.reconcile(vec![(7, 1_300.0)], 1_000.0, |_| {});
    assert_eq!(book.armed.len(), 1);
    assert_eq!(book.armed_deadline(&7), Some(1_300.0));
}

#[test]
fn reconcile_drops_vanished_keys() {
    let mut book = TimerBook::new();
    book.reconcile(vec![(1_u64, 100.0), (2, 200.0)], 0.0, |_| {});
    book.reconcile(vec![(2, 200.0)], 150.0, |_| {});
    assert_eq!(book.armed_deadline(&1), None);
    assert_eq!(book.armed_deadline(&2), Some(200.0));

    book.reconcile(Vec::new(), 250.0, |_| {});
    assert!(book.armed.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn timers_are_inert_outside_the_browser() {
    use std::cell::Cell;
    use std::rc::Rc;

    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    let timer = Timer::after(0, move || flag.set(true));
    timer.cancel();
    schedule(0, || {});
    assert!(!ran.get());
    assert!(now_ms().abs() < f64::EPSILON);
}
