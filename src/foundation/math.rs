/// Golden ratio `(1 + sqrt(5)) / 2`.
pub(crate) const PHI: f64 = 1.618_033_988_749_895;

/// Magnitudes below this are treated as zero when taking the sign of a sampled waveform.
pub(crate) const SIGN_EPSILON: f64 = 1e-12;

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Sign with a dead zone around zero: `-1`, `0` or `1`.
pub(crate) fn sign_eps(v: f64) -> f64 {
    if v > SIGN_EPSILON {
        1.0
    } else if v < -SIGN_EPSILON {
        -1.0
    } else {
        0.0
    }
}

/// The single rounding point for color channels: round to nearest, then clamp.
pub(crate) fn round_channel(v: f64) -> u8 {
    if !v.is_finite() {
        return if v == f64::INFINITY { 255 } else { 0 };
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// `x mod m` in `[0, m)` for finite `m > 0`.
pub(crate) fn wrap(x: f64, m: f64) -> f64 {
    let r = x.rem_euclid(m);
    // rem_euclid can return `m` for tiny negative inputs.
    if r >= m { 0.0 } else { r }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
