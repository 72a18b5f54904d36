use crate::clock::quality::QualityTier;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::PatternResult;
use crate::path::stroke::Stroke;

/// Per-frame context handed to a [`DrawSink`] before any strokes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameInfo {
    pub canvas: Canvas,
    /// Animation time of the frame in milliseconds.
    pub time_ms: f64,
    /// Smoothed frame rate, for telemetry display.
    pub fps: f64,
    pub tier: QualityTier,
}

/// How a [`Stroke`] should be painted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StrokeStyle {
    pub color: Rgba8,
    pub width: f64,
    pub antialias: bool,
}

/// Drawing layer contract.
///
/// Ordering contract: `begin_frame`, then zero or more `stroke` calls, then `end_frame`, once
/// per rendered tick. Skipped ticks produce no calls. Once `begin_frame` has succeeded,
/// `end_frame` is called even if a later stroke fails.
pub trait DrawSink {
    fn begin_frame(&mut self, frame: &FrameInfo) -> PatternResult<()>;
    fn stroke(&mut self, stroke: &Stroke, style: &StrokeStyle) -> PatternResult<()>;
    fn end_frame(&mut self) -> PatternResult<()>;
}

/// One frame captured by [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedFrame {
    pub info: FrameInfo,
    pub strokes: Vec<(Stroke, StrokeStyle)>,
    /// `end_frame` was called.
    pub finished: bool,
}

/// In-memory sink for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<RecordedFrame>,
    /// Keep only the most recent frame.
    keep_last_only: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that drops every frame but the latest, for long simulations.
    pub fn last_only() -> Self {
        Self {
            frames: Vec::new(),
            keep_last_only: true,
        }
    }

    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }

    pub fn stroke_count(&self) -> usize {
        self.frames.iter().map(|f| f.strokes.len()).sum()
    }
}

impl DrawSink for RecordingSink {
    fn begin_frame(&mut self, frame: &FrameInfo) -> PatternResult<()> {
        if self.keep_last_only {
            self.frames.clear();
        }
        self.frames.push(RecordedFrame {
            info: *frame,
            strokes: Vec::new(),
            finished: false,
        });
        Ok(())
    }

    fn stroke(&mut self, stroke: &Stroke, style: &StrokeStyle) -> PatternResult<()> {
        let frame = self
            .frames
            .last_mut()
            .filter(|f| !f.finished)
            .ok_or_else(|| anyhow::anyhow!("stroke outside of a frame"))?;
        frame.strokes.push((stroke.clone(), *style));
        Ok(())
    }

    fn end_frame(&mut self) -> PatternResult<()> {
        if let Some(frame) = self.frames.last_mut() {
            frame.finished = true;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
