use std::f64::consts::TAU;

use crate::foundation::error::{PatternError, PatternResult};
use crate::foundation::math::PHI;

/// Milliseconds of offset per radian of sibling phase at depth 0.
pub const OFFSET_MS_PER_RADIAN: f64 = 1000.0;

/// Geometric shrink factor `φ^-depth` applied to offsets at `depth`.
pub fn depth_scale(depth: u32) -> f64 {
    let exp = i32::try_from(depth).unwrap_or(i32::MAX);
    (1.0 / PHI).powi(exp)
}

/// Angular position of `child_index` among `total_children` evenly spaced siblings.
pub fn sibling_phase(child_index: u32, total_children: u32) -> PatternResult<f64> {
    if total_children == 0 {
        return Err(PatternError::invalid_config(
            "fractal total_children must be > 0",
        ));
    }
    Ok(f64::from(child_index) / f64::from(total_children) * TAU)
}

/// Time offset for one child of a nested shape.
///
/// `offset = base + (child_index / total_children) * 2π * φ^-depth * 1000`. Siblings at a
/// depth are evenly spaced over a full turn and the spread shrinks by `1/φ` per level.
pub fn compute_timing(
    base_time_ms: f64,
    depth: u32,
    child_index: u32,
    total_children: u32,
) -> PatternResult<f64> {
    let phase = sibling_phase(child_index, total_children)?;
    Ok(base_time_ms + phase * depth_scale(depth) * OFFSET_MS_PER_RADIAN)
}

/// Inputs to [`compute_timing`] bundled as a value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FractalTimingContext {
    pub base_time_ms: f64,
    pub depth: u32,
    pub child_index: u32,
    pub total_children: u32,
}

impl FractalTimingContext {
    pub fn offset_ms(&self) -> PatternResult<f64> {
        compute_timing(
            self.base_time_ms,
            self.depth,
            self.child_index,
            self.total_children,
        )
    }
}

/// Offsets for all `total_children` siblings at `depth`, in child order.
pub fn sibling_offsets(
    base_time_ms: f64,
    depth: u32,
    total_children: u32,
) -> PatternResult<Vec<f64>> {
    sibling_phase(0, total_children)?;
    (0..total_children)
        .map(|i| compute_timing(base_time_ms, depth, i, total_children))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/fractal/timing.rs"]
mod tests;
