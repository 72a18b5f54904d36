use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::clock::frame_clock::FrameClockConfig;
use crate::color::gradient::ColorStopSet;
use crate::foundation::core::Canvas;
use crate::foundation::error::{PatternError, PatternResult};
use crate::fractal::tree::FractalSpec;
use crate::path::shape::MIN_SIDES;
use crate::path::taper::TaperSpec;
use crate::path::wave::WaveSpec;

/// Stroke geometry shared by every edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrokeSettings {
    pub base_width: f64,
    /// Sub-segments sampled per edge.
    pub segments: usize,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            base_width: 2.0,
            segments: 48,
        }
    }
}

/// Polygon drawn at every fractal node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    pub sides: u32,
    /// Root radius as a fraction of the canvas inner radius.
    pub radius_frac: f64,
    /// Distance from a parent's center to its children's, as a fraction of the parent's
    /// radius.
    pub child_spread: f64,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            sides: 6,
            radius_frac: 0.6,
            child_spread: 0.9,
        }
    }
}

/// How animation time drives the geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Wave phase advance in radians per second.
    pub phase_speed: f64,
    /// Polygon rotation in radians per second.
    pub rotation_speed: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            phase_speed: 1.5,
            rotation_speed: 0.2,
        }
    }
}

/// The settings object the renderer is driven by.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PatternSettings {
    pub canvas: Canvas,
    pub clock: FrameClockConfig,
    pub wave: WaveSpec,
    pub taper: TaperSpec,
    pub stroke: StrokeSettings,
    pub colors: ColorStopSet,
    pub fractal: FractalSpec,
    pub shape: ShapeSettings,
    pub motion: MotionSettings,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 800,
                height: 800,
            },
            clock: FrameClockConfig::default(),
            wave: WaveSpec::default(),
            taper: TaperSpec::default(),
            stroke: StrokeSettings::default(),
            colors: ColorStopSet::default(),
            fractal: FractalSpec::default(),
            shape: ShapeSettings::default(),
            motion: MotionSettings::default(),
        }
    }
}

impl PatternSettings {
    /// Parse settings from a JSON reader. Missing fields take their defaults.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: std::io::Read>(r: R) -> PatternResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PatternError::serde(format!("parse settings JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> PatternResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PatternError::invalid_config(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject configurations the renderer cannot run, before the first tick.
    pub fn validate(&self) -> PatternResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PatternError::invalid_config("canvas must be non-empty"));
        }
        self.colors.validate()?;
        self.fractal.validate()?;
        if !(self.colors.alpha.is_finite() && (0.0..=1.0).contains(&self.colors.alpha)) {
            return Err(PatternError::invalid_config(format!(
                "color alpha must be in [0, 1] (got {})",
                self.colors.alpha
            )));
        }
        if self.shape.sides < MIN_SIDES {
            return Err(PatternError::invalid_config(format!(
                "shape sides must be >= {MIN_SIDES} (got {})",
                self.shape.sides
            )));
        }
        if !(self.stroke.base_width.is_finite() && self.stroke.base_width > 0.0) {
            return Err(PatternError::invalid_config(format!(
                "stroke base_width must be finite and > 0 (got {})",
                self.stroke.base_width
            )));
        }
        if self.stroke.segments == 0 {
            return Err(PatternError::invalid_config("stroke segments must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
