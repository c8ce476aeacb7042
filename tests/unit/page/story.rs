use super::*;

#[test]
fn dwell_remainder_carries_into_next_slide() {
    let mut rotator = StoryRotator::new(4, 3.0);
    let mut advanced = false;
    // 7 ticks of 0.5 sum to 3.5.
    for _ in 0..7 {
        advanced |= rotator.tick(0.5);
    }
    assert!(advanced);
    assert_eq!(rotator.current_index(), 1);
    assert!((rotator.elapsed() - 0.5).abs() < 1e-12);
}

#[test]
fn rotation_is_cyclic() {
    let mut rotator = StoryRotator::new(3, 3.0);
    for expected in [1, 2, 0, 1] {
        rotator.tick(3.0);
        assert_eq!(rotator.current_index(), expected);
    }
}

#[test]
fn user_advance_skips_and_restarts_dwell() {
    let mut rotator = StoryRotator::new(3, 3.0);
    rotator.tick(1.7);
    rotator.advance_by_user();
    assert_eq!(rotator.current_index(), 1);
    assert_eq!(rotator.elapsed(), 0.0);
    assert_eq!(rotator.current_alpha(), 0.0);
}

#[test]
fn alpha_ramps_in_holds_and_ramps_out() {
    let rotator_at = |elapsed: f64| {
        let mut r = StoryRotator::new(2, 3.0);
        r.tick(elapsed);
        r
    };

    assert_eq!(StoryRotator::new(2, 3.0).current_alpha(), 0.0);
    // Midway through the ramp-in.
    let mid_in = rotator_at(3.0 * FADE_FRACTION / 2.0);
    assert!((mid_in.current_alpha() - 0.5).abs() < 1e-9);
    // Plateau.
    let hold = rotator_at(1.5);
    assert_eq!(hold.current_alpha(), 1.0);
    // Midway through the ramp-out.
    let mid_out = rotator_at(3.0 * (1.0 - FADE_FRACTION / 2.0));
    assert!((mid_out.current_alpha() - 0.5).abs() < 1e-9);
}

#[test]
fn alpha_stays_in_unit_range() {
    let mut rotator = StoryRotator::new(3, 3.0);
    let mut dt = 0.013;
    for _ in 0..2000 {
        rotator.tick(dt);
        dt = (dt * 1.01) % 0.4;
        let alpha = rotator.current_alpha();
        assert!((0.0..=1.0).contains(&alpha), "alpha {alpha} out of range");
    }
}

#[test]
fn reset_returns_to_first_slide() {
    let mut rotator = StoryRotator::new(3, 3.0);
    rotator.tick(4.0);
    rotator.reset();
    assert_eq!(rotator.current_index(), 0);
    assert_eq!(rotator.elapsed(), 0.0);
}

#[test]
fn fade_fraction_is_golden() {
    assert!((FADE_FRACTION - (1.0 - INV_PHI)).abs() < 1e-15);
    assert!(FADE_FRACTION < 0.5);
}
