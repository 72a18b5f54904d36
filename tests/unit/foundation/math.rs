use super::*;

#[test]
fn phi_matches_closed_form() {
    let closed = (1.0 + 5.0_f64.sqrt()) / 2.0;
    assert!((PHI - closed).abs() < 1e-15);
    assert!((PHI * PHI - PHI - 1.0).abs() < 1e-12);
}

#[test]
fn sign_has_dead_zone() {
    assert_eq!(sign_eps(0.5), 1.0);
    assert_eq!(sign_eps(-0.5), -1.0);
    assert_eq!(sign_eps(0.0), 0.0);
    assert_eq!(sign_eps(1e-16), 0.0);
    assert_eq!(sign_eps(-1e-16), 0.0);
}

#[test]
fn round_channel_rounds_then_clamps() {
    assert_eq!(round_channel(127.5), 128);
    assert_eq!(round_channel(127.49), 127);
    assert_eq!(round_channel(-3.0), 0);
    assert_eq!(round_channel(300.0), 255);
    assert_eq!(round_channel(f64::NAN), 0);
    assert_eq!(round_channel(f64::INFINITY), 255);
}

#[test]
fn wrap_stays_in_range() {
    assert_eq!(wrap(1250.0, 1000.0), 250.0);
    assert_eq!(wrap(-250.0, 1000.0), 750.0);
    let tiny = wrap(-1e-20, 1000.0);
    assert!((0.0..1000.0).contains(&tiny));
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
}
