use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Point, Vec2};
use crate::path::taper::TaperSpec;
use crate::path::waveform::Waveform;

/// Length covered by one nominal waveform period at `frequency == 1`.
pub const DEFAULT_UNIT_LENGTH: f64 = 30.0;

/// Lateral modulation applied to a straight line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WaveSpec {
    #[serde(alias = "type", alias = "waveform")]
    pub kind: Waveform,
    pub amplitude: f64,
    pub frequency: f64,
    /// Radians.
    pub phase: f64,
    #[serde(alias = "loop")]
    pub loop_enabled: bool,
    #[serde(alias = "bidirectional")]
    pub bidirectional_enabled: bool,
    pub unit_length: f64,
}

impl Default for WaveSpec {
    fn default() -> Self {
        Self {
            kind: Waveform::Sine,
            amplitude: 10.0,
            frequency: 1.0,
            phase: 0.0,
            loop_enabled: true,
            bidirectional_enabled: true,
            unit_length: DEFAULT_UNIT_LENGTH,
        }
    }
}

impl WaveSpec {
    pub fn with_phase(self, phase: f64) -> Self {
        Self { phase, ..self }
    }

    pub fn cycles(&self, length: f64) -> f64 {
        exact_cycles(self.frequency, length, self.unit_length, self.loop_enabled)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WaveSample {
    pub point: Point,
    pub width: f64,
}

/// Sampled modulated line. Produced fresh per draw call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WavePath {
    pub samples: Vec<WaveSample>,
    /// Widths vary along the path and must be stroked per segment.
    pub tapered: bool,
    pub cycles: f64,
}

impl WavePath {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.samples.first().map(|s| s.point)
    }

    pub fn last(&self) -> Option<Point> {
        self.samples.last().map(|s| s.point)
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.samples.iter().map(|s| s.point)
    }
}

/// Number of waveform periods laid across a line of `length`.
///
/// Looping lines get a whole number of periods (at least one) so both ends land on the same
/// phase. Non-positive or non-finite frequencies fall back to a single period.
pub fn exact_cycles(frequency: f64, length: f64, unit_length: f64, loop_enabled: bool) -> f64 {
    if !(frequency.is_finite() && frequency > 0.0) {
        return 1.0;
    }
    let unit = if unit_length.is_finite() && unit_length > 0.0 {
        unit_length
    } else {
        DEFAULT_UNIT_LENGTH
    };
    let length = if length.is_finite() {
        length.max(0.0)
    } else {
        0.0
    };
    let raw = frequency * length / unit;
    if loop_enabled {
        raw.round().max(1.0)
    } else {
        raw
    }
}

/// Samples a modulated line from `p1` to `p2`.
///
/// Returns `segments + 1` samples (`segments == 0` is treated as 1), or a single sample at
/// `p1` when the line has no length.
pub fn generate(
    p1: Point,
    p2: Point,
    segments: usize,
    wave: &WaveSpec,
    taper: &TaperSpec,
    base_width: f64,
) -> WavePath {
    let base_width = if base_width.is_finite() {
        base_width.max(0.0)
    } else {
        1.0
    };
    let delta = p2 - p1;
    let length = delta.hypot();
    if !(length.is_finite() && length > 0.0) {
        return WavePath {
            samples: vec![WaveSample {
                point: p1,
                width: base_width,
            }],
            tapered: false,
            cycles: 0.0,
        };
    }

    let direction = delta / length;
    let normal = Vec2::new(-direction.y, direction.x);
    let cycles = wave.cycles(length);
    let amplitude = finite_or_zero(wave.amplitude);
    let phase = finite_or_zero(wave.phase);
    let segments = segments.max(1);
    let tapered = taper.is_active();

    let samples = (0..=segments)
        .map(|i| {
            let progress = i as f64 / segments as f64;
            let forward = progress * TAU * cycles + phase;
            let at_end = i == 0 || i == segments;
            let angle = if wave.bidirectional_enabled && wave.loop_enabled && at_end {
                // A whole number of cycles puts both ends on the bare reverse phase.
                phase + PI
            } else if wave.bidirectional_enabled {
                let reverse = (1.0 - progress) * TAU * cycles + phase + PI;
                // sin(π) is not exactly zero; the ends must be pure reverse wave.
                let w = if at_end { 0.0 } else { (progress * PI).sin() };
                forward * w + reverse * (1.0 - w)
            } else {
                forward
            };
            let offset = amplitude * wave.kind.sample(angle);
            let width = if tapered {
                base_width * taper.width_frac(progress)
            } else {
                base_width
            };
            WaveSample {
                point: p1 + delta * progress + normal * offset,
                width,
            }
        })
        .collect();

    WavePath {
        samples,
        tapered,
        cycles,
    }
}

/// Signed distance of `point` from the line through `p1` and `p2`, positive on the side the
/// generator's normal points to.
pub fn lateral_offset(p1: Point, p2: Point, point: Point) -> f64 {
    let delta = p2 - p1;
    let length = delta.hypot();
    if !(length.is_finite() && length > 0.0) {
        return (point - p1).hypot();
    }
    let normal = Vec2::new(-delta.y, delta.x) / length;
    (point - p1).dot(normal)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/path/wave.rs"]
mod tests;
