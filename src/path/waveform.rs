use std::f64::consts::TAU;

use crate::foundation::math::sign_eps;

const WRAP_EPSILON: f64 = 1e-9;

/// Periodic shape sampled along a modulated line. Every kind has period `2π` and range
/// `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Waveform {
    #[default]
    #[serde(alias = "sine")]
    Sine,
    #[serde(alias = "cosine")]
    Cosine,
    #[serde(alias = "square")]
    Square,
    #[serde(alias = "triangle")]
    Triangle,
    #[serde(alias = "sawtooth")]
    Sawtooth,
}

impl Waveform {
    pub const ALL: [Self; 5] = [
        Self::Sine,
        Self::Cosine,
        Self::Square,
        Self::Triangle,
        Self::Sawtooth,
    ];

    pub fn sample(self, angle: f64) -> f64 {
        match self {
            Self::Sine => angle.sin(),
            Self::Cosine => angle.cos(),
            // Snapping near-zero keeps the sign stable for angles that differ by whole turns.
            Self::Square => sign_eps(angle.sin()),
            // Same curve as (2/π)·asin(sin(angle)), without asin's blow-up near the peaks.
            Self::Triangle => {
                let t = (angle / TAU + 0.25).rem_euclid(1.0);
                1.0 - 4.0 * (t - 0.5).abs()
            }
            Self::Sawtooth => {
                let mut ramp = (angle / TAU + 0.5).rem_euclid(1.0);
                // The wrap point belongs to the start of the ramp.
                if ramp > 1.0 - WRAP_EPSILON {
                    ramp = 0.0;
                }
                2.0 * ramp - 1.0
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/waveform.rs"]
mod tests;
