//! Per-frame orchestration: settings, the drawing-layer contract and the render tick.

pub(crate) mod settings;
pub(crate) mod sink;
pub(crate) mod tick;
