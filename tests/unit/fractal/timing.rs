use super::*;

const EPS: f64 = 1e-9;

#[test]
fn zero_children_is_invalid_config() {
    let err = compute_timing(0.0, 1, 0, 0).unwrap_err();
    assert!(err.is_invalid_config());
    assert!(sibling_offsets(0.0, 0, 0).unwrap_err().is_invalid_config());
    assert!(
        FractalTimingContext {
            base_time_ms: 5.0,
            depth: 0,
            child_index: 0,
            total_children: 0,
        }
        .offset_ms()
        .is_err()
    );
}

#[test]
fn first_child_has_no_offset() {
    for depth in 0..8 {
        assert_eq!(compute_timing(123.0, depth, 0, 7).unwrap(), 123.0);
    }
}

#[test]
fn siblings_are_evenly_spaced() {
    for n in 1..12u32 {
        for depth in 0..6u32 {
            let offsets = sibling_offsets(40.0, depth, n).unwrap();
            let period = TAU * depth_scale(depth) * OFFSET_MS_PER_RADIAN;
            let step = period / f64::from(n);
            for (i, w) in offsets.windows(2).enumerate() {
                assert!(
                    (w[1] - w[0] - step).abs() < EPS,
                    "n={n} depth={depth} i={i}"
                );
            }
            // The next sibling after the last wraps back to the first modulo a full turn.
            let wrap = compute_timing(40.0, depth, n, n).unwrap();
            assert!((wrap - 40.0 - period).abs() < EPS);
        }
    }
}

#[test]
fn depth_ratio_is_inverse_phi() {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let base = 250.0;
    for depth in 0..10u32 {
        let a = compute_timing(base, depth, 1, 3).unwrap() - base;
        let b = compute_timing(base, depth + 1, 1, 3).unwrap() - base;
        assert!((b / a - 1.0 / phi).abs() < 1e-12, "depth={depth}");
    }
}

#[test]
fn deterministic_across_calls() {
    let a = compute_timing(16.5, 3, 2, 5).unwrap();
    let b = compute_timing(16.5, 3, 2, 5).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn known_value_at_depth_zero() {
    // Half way round at depth 0 is π seconds.
    let v = compute_timing(0.0, 0, 1, 2).unwrap();
    assert!((v - std::f64::consts::PI * 1000.0).abs() < EPS);
}

#[test]
fn huge_depth_scales_to_zero() {
    assert_eq!(depth_scale(u32::MAX), 0.0);
    assert_eq!(compute_timing(7.0, u32::MAX, 3, 4).unwrap(), 7.0);
}

#[test]
fn context_matches_free_function() {
    let ctx = FractalTimingContext {
        base_time_ms: 10.0,
        depth: 2,
        child_index: 3,
        total_children: 6,
    };
    assert_eq!(ctx.offset_ms().unwrap(), compute_timing(10.0, 2, 3, 6).unwrap());
}
