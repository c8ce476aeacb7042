use super::*;

#[test]
fn phases_start_staggered() {
    let osc = ColorOscillator::new(OscillatorSpec::with_velocities(1.0, 1.0, 1.0));
    assert_eq!(osc.phase(0), 0.0);
    assert!((osc.phase(1) - 8.0 / 3.0).abs() < 1e-12);
    assert!((osc.phase(2) - 16.0 / 3.0).abs() < 1e-12);
}

#[test]
fn phases_stay_in_period_for_any_dt() {
    let mut osc = ColorOscillator::new(OscillatorSpec::with_velocities(1.0, 1.5, 4.0 / 3.0));
    for dt in [0.0, 0.01, 1.0, 7.9, 8.0, 123.456, 1e6] {
        osc.advance(dt);
        for channel in 0..3 {
            let phase = osc.phase(channel);
            assert!(
                (0.0..8.0).contains(&phase),
                "phase {phase} out of period after dt {dt}"
            );
        }
    }
}

#[test]
fn negative_dt_wraps_backward() {
    let mut osc = ColorOscillator::new(OscillatorSpec::with_velocities(1.0, 1.0, 1.0));
    osc.advance(-0.5);
    assert!((osc.phase(0) - 7.5).abs() < 1e-12);
}

#[test]
fn advance_accumulates_per_channel_velocity() {
    let mut osc = ColorOscillator::new(OscillatorSpec::with_velocities(1.0, 2.0, 0.5));
    osc.advance(1.0);
    assert!((osc.phase(0) - 1.0).abs() < 1e-12);
    assert!((osc.phase(1) - (8.0 / 3.0 + 2.0) % 8.0).abs() < 1e-12);
    assert!((osc.phase(2) - (16.0 / 3.0 + 0.5) % 8.0).abs() < 1e-12);
}

#[test]
fn sample_is_pure() {
    let mut osc = ColorOscillator::new(OscillatorSpec::with_velocities(1.5, 4.0 / 3.0, 1.0));
    osc.advance(2.25);
    assert_eq!(osc.sample(), osc.sample());
    assert_eq!(osc.sample_packed(), osc.sample().packed());
}

#[test]
fn full_period_returns_to_start() {
    let spec = OscillatorSpec::with_velocities(1.0, 1.0, 1.0);
    let mut osc = ColorOscillator::new(spec);
    let before = osc.sample();
    osc.advance(8.0);
    assert_eq!(osc.sample(), before);
}
