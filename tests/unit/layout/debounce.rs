use super::*;

#[test]
fn fires_once_after_quiet_period() {
    let mut debounce = Debounce::new(18.0);
    debounce.trigger(0.0);
    assert!(!debounce.fire(17.9));
    assert!(debounce.fire(18.0));
    assert!(!debounce.fire(19.0));
    assert!(!debounce.is_pending());
}

#[test]
fn burst_collapses_to_single_fire() {
    let mut debounce = Debounce::new(18.0);
    let mut fires = 0;
    for now in 0..60 {
        let now = now as f64;
        if now < 10.0 {
            debounce.trigger(now);
        }
        if debounce.fire(now) {
            fires += 1;
        }
    }
    assert_eq!(fires, 1);
}

#[test]
fn retrigger_pushes_deadline_back() {
    let mut debounce = Debounce::new(18.0);
    debounce.trigger(0.0);
    debounce.trigger(10.0);
    assert!(!debounce.fire(18.0));
    assert!(debounce.fire(28.0));
}

#[test]
fn cancel_drops_pending_deadline() {
    let mut debounce = Debounce::new(18.0);
    debounce.trigger(0.0);
    assert!(debounce.is_pending());
    debounce.cancel();
    assert!(!debounce.is_pending());
    assert!(!debounce.fire(100.0));
}

#[test]
fn idle_never_fires() {
    let mut debounce = Debounce::new(18.0);
    assert!(!debounce.fire(0.0));
    assert!(!debounce.fire(1e9));
}
