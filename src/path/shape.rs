use std::f64::consts::TAU;

use crate::foundation::core::{Point, Vec2};
use crate::path::taper::TaperSpec;
use crate::path::wave::{WavePath, WaveSpec, generate};

pub const MIN_SIDES: u32 = 3;

/// Vertices of a regular polygon, first vertex at `rotation` radians. `sides` below 3 is
/// raised to 3.
pub fn polygon_outline(center: Point, radius: f64, sides: u32, rotation: f64) -> Vec<Point> {
    let sides = sides.max(MIN_SIDES);
    let radius = if radius.is_finite() {
        radius.max(0.0)
    } else {
        0.0
    };
    let rotation = if rotation.is_finite() { rotation } else { 0.0 };
    (0..sides)
        .map(|i| {
            let a = rotation + TAU * f64::from(i) / f64::from(sides);
            center + Vec2::from_angle(a) * radius
        })
        .collect()
}

/// One modulated edge per side of the closed polygon through `vertices`, the last edge
/// returning to the first vertex.
pub fn generate_closed(
    vertices: &[Point],
    segments: usize,
    wave: &WaveSpec,
    taper: &TaperSpec,
    base_width: f64,
) -> Vec<WavePath> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&a, &b)| generate(a, b, segments, wave, taper, base_width))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/path/shape.rs"]
mod tests;
