use std::collections::VecDeque;

use crate::foundation::error::{PatternError, PatternResult};
use crate::fractal::timing::{compute_timing, depth_scale, sibling_phase};

/// Shape of a nested pattern: how deep it recurses and how many children each node has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FractalSpec {
    /// Levels below the root.
    pub depth: u32,
    /// Children per node. Must be > 0.
    pub children: u32,
}

impl Default for FractalSpec {
    fn default() -> Self {
        Self {
            depth: 3,
            children: 4,
        }
    }
}

impl FractalSpec {
    pub fn validate(&self) -> PatternResult<()> {
        if self.children == 0 {
            return Err(PatternError::invalid_config(
                "fractal children must be > 0",
            ));
        }
        Ok(())
    }
}

/// One node of a walked fractal tree.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FractalNode {
    /// Index of the parent in the walk output; `None` for the root.
    pub parent: Option<usize>,
    pub depth: u32,
    pub child_index: u32,
    /// Animation time for this node: the parent's time shifted by its symmetric offset.
    pub time_ms: f64,
    /// Sibling phase in radians (`0` for the root).
    pub angle: f64,
    /// `φ^-depth`.
    pub scale: f64,
}

/// Breadth-first walk of the tree described by `spec`, root first.
///
/// Recursion stops at `min(spec.depth, depth_limit)` and the output is truncated to
/// `node_limit` nodes. Each child's time is derived from its parent's time, so a branch
/// accumulates the offsets of all its ancestors.
pub fn walk(
    base_time_ms: f64,
    spec: &FractalSpec,
    depth_limit: u32,
    node_limit: usize,
) -> PatternResult<Vec<FractalNode>> {
    spec.validate()?;
    let max_depth = spec.depth.min(depth_limit);

    let mut out = Vec::new();
    if node_limit == 0 {
        return Ok(out);
    }
    out.push(FractalNode {
        parent: None,
        depth: 0,
        child_index: 0,
        time_ms: base_time_ms,
        angle: 0.0,
        scale: 1.0,
    });

    let mut queue = VecDeque::from([0usize]);
    while let Some(idx) = queue.pop_front() {
        let parent = out[idx];
        if parent.depth >= max_depth {
            continue;
        }
        let depth = parent.depth + 1;
        for i in 0..spec.children {
            if out.len() >= node_limit {
                return Ok(out);
            }
            out.push(FractalNode {
                parent: Some(idx),
                depth,
                child_index: i,
                time_ms: compute_timing(parent.time_ms, depth, i, spec.children)?,
                angle: sibling_phase(i, spec.children)?,
                scale: depth_scale(depth),
            });
            queue.push_back(out.len() - 1);
        }
    }
    Ok(out)
}

/// Number of nodes a full walk to `depth` would produce, saturating at `usize::MAX`.
pub fn full_node_count(children: u32, depth: u32) -> usize {
    let c = children as usize;
    let mut level = 1usize;
    let mut total = 1usize;
    for _ in 0..depth {
        level = level.saturating_mul(c);
        total = total.saturating_add(level);
    }
    total
}

#[cfg(test)]
#[path = "../../tests/unit/fractal/tree.rs"]
mod tests;
