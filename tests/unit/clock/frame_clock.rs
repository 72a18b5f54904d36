use super::*;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn first_tick_renders_at_target_rate() {
    let mut clock = FrameClock::default();
    let out = clock.tick(1000.0);
    assert!(out.should_render);
    assert_eq!(out.sample.raw_delta_ms, 0.0);
    assert!(approx(out.fps(), 60.0, 1e-9));
    assert_eq!(out.tier, QualityTier::High);
}

#[test]
fn frame_limiter_skips_early_ticks() {
    let mut clock = FrameClock::default();
    assert!(clock.tick(0.0).should_render);

    let early = clock.tick(5.0);
    assert!(!early.should_render);
    assert!(approx(early.smoothed_delta_ms(), 1000.0 / 60.0, 1e-9));

    let on_time = clock.tick(17.0);
    assert!(on_time.should_render);
    assert_eq!(on_time.sample.raw_delta_ms, 17.0);
    let expected = (1000.0 / 60.0) * 0.9 + 17.0 * 0.1;
    assert!(approx(on_time.smoothed_delta_ms(), expected, 1e-9));
}

#[test]
fn high_rate_host_is_paced_to_target() {
    let mut clock = FrameClock::default();
    let mut rendered = 0;
    // 120 Hz host for one second.
    for i in 0..120 {
        if clock.tick(f64::from(i) * (1000.0 / 120.0)).should_render {
            rendered += 1;
        }
    }
    assert!((59..=61).contains(&rendered), "rendered {rendered}");
}

#[test]
fn long_gap_is_clamped() {
    let mut clock = FrameClock::default();
    clock.tick(0.0);
    clock.tick(16.7);
    let out = clock.tick(10_016.7);
    assert!(out.should_render);
    assert_eq!(out.sample.raw_delta_ms, 250.0);
    assert!(out.smoothed_delta_ms() <= 250.0);
    assert!(out.smoothed_delta_ms() < 50.0, "a single spike must not dominate");
    assert_eq!(out.tier, QualityTier::High, "one slow frame must not switch tier");
}

#[test]
fn regressing_timestamp_is_zero_delta_and_reanchors() {
    let mut clock = FrameClock::default();
    clock.tick(0.0);
    let before = clock.tick(100.0);
    assert!(before.should_render);

    let back = clock.tick(50.0);
    assert!(!back.should_render);
    assert_eq!(back.sample.raw_delta_ms, 0.0);
    assert_eq!(back.smoothed_delta_ms(), before.smoothed_delta_ms());

    assert!(!clock.tick(60.0).should_render);
    let resumed = clock.tick(70.0);
    assert!(resumed.should_render);
    assert_eq!(resumed.sample.raw_delta_ms, 20.0);
}

#[test]
fn non_finite_timestamp_is_skipped() {
    let mut clock = FrameClock::default();
    clock.tick(0.0);
    let out = clock.tick(f64::NAN);
    assert!(!out.should_render);
    assert!(out.fps().is_finite());
    assert!(clock.tick(20.0).should_render);
}

#[test]
fn smoothed_delta_stays_positive_and_bounded() {
    let cfg = FrameClockConfig {
        target_fps: 0.0,
        ..FrameClockConfig::default()
    };
    let mut clock = FrameClock::new(cfg);
    let mut now = 0.0;
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    for _ in 0..2000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let step = match state % 5 {
            0 => 0.0,
            1 => -30.0,
            2 => 4.0,
            3 => 16.0,
            _ => 900.0,
        };
        now += step;
        let out = clock.tick(now);
        assert!(out.smoothed_delta_ms() > 0.0);
        assert!(out.smoothed_delta_ms() <= cfg.max_delta_ms);
        assert!(out.fps().is_finite());
    }
}

#[test]
fn repeated_timestamps_hit_min_delta_floor() {
    let cfg = FrameClockConfig {
        target_fps: 0.0,
        ..FrameClockConfig::default()
    };
    let mut clock = FrameClock::new(cfg);
    for _ in 0..500 {
        clock.tick(42.0);
    }
    assert_eq!(clock.smoothed_delta_ms(), cfg.min_delta_ms);
    assert_eq!(clock.fps(), 1000.0);
}

#[test]
fn sustained_slow_frames_drop_tier_after_debounce() {
    let mut clock = FrameClock::default();
    let mut now = 0.0;
    for _ in 0..30 {
        clock.tick(now);
        now += 1000.0 / 60.0 + 0.01;
    }
    assert_eq!(clock.tier(), QualityTier::High);

    now += 50.0;
    let first_slow = clock.tick(now);
    assert_eq!(first_slow.tier, QualityTier::High);

    for _ in 0..60 {
        now += 50.0;
        clock.tick(now);
    }
    assert!(approx(clock.fps(), 20.0, 0.5));
    assert_eq!(clock.tier(), QualityTier::Low);
}

#[test]
fn reset_forces_next_tick_to_render() {
    let mut clock = FrameClock::default();
    clock.tick(0.0);
    clock.reset();
    let out = clock.tick(1.0);
    assert!(out.should_render);
    assert_eq!(out.sample.raw_delta_ms, 0.0);
}

#[test]
fn insane_config_is_sanitized() {
    let clock = FrameClock::new(FrameClockConfig {
        target_fps: f64::NAN,
        max_delta_ms: -5.0,
        min_delta_ms: 0.0,
        smoothing: f64::INFINITY,
        pacing_tolerance_ms: -1.0,
        quality: QualityConfig::default(),
    });
    assert!(clock.config().target_interval_ms().is_none());
    assert!(clock.config().min_delta_ms > 0.0);
    assert!(clock.config().max_delta_ms >= clock.config().min_delta_ms);
    assert!(clock.smoothed_delta_ms() > 0.0);
}
