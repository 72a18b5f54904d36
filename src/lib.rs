//! patternloom is the animation-timing and waveform-geometry engine behind procedurally
//! animated geometric patterns.
//!
//! One [`PatternRenderer::tick`] per host frame runs, in order:
//!
//! - the [`FrameClock`], which smooths frame timing, limits the frame rate and picks a
//!   [`QualityTier`] with hysteresis
//! - the symmetric fractal timing ([`compute_timing`], [`walk`]) for nested shapes
//! - the cyclic multi-stop [`ColorInterpolator`]
//! - the bidirectional wave path generator ([`generate`]) for every polygon edge
//!
//! and forwards the resulting strokes to a [`DrawSink`]. Time is always an explicit argument.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod clock;
pub(crate) mod color;
pub(crate) mod fractal;
pub(crate) mod path;
pub(crate) mod render;

pub use crate::foundation::core::{BezPath, Canvas, Point, Rgba8, Vec2};
pub use crate::foundation::error::{PatternError, PatternResult};

pub use crate::animation::ease::Ease;
pub use crate::clock::frame_clock::{FrameClock, FrameClockConfig, FrameSample, TickOutcome};
pub use crate::clock::quality::{QualityConfig, QualityState, QualityTier, TierParams};
pub use crate::color::gradient::{ColorInterpolator, ColorStopSet, CycleMode, quantize_time};
pub use crate::color::parse::{Rgb, parse_color};
pub use crate::fractal::timing::{
    FractalTimingContext, OFFSET_MS_PER_RADIAN, compute_timing, depth_scale, sibling_offsets,
    sibling_phase,
};
pub use crate::fractal::tree::{FractalNode, FractalSpec, full_node_count, walk};
pub use crate::path::shape::{MIN_SIDES, generate_closed, polygon_outline};
pub use crate::path::stroke::Stroke;
pub use crate::path::taper::{TaperKind, TaperSpec};
pub use crate::path::wave::{
    DEFAULT_UNIT_LENGTH, WavePath, WaveSample, WaveSpec, exact_cycles, generate, lateral_offset,
};
pub use crate::path::waveform::Waveform;
pub use crate::render::settings::{
    MotionSettings, PatternSettings, ShapeSettings, StrokeSettings,
};
pub use crate::render::sink::{DrawSink, FrameInfo, RecordedFrame, RecordingSink, StrokeStyle};
pub use crate::render::tick::{PatternRenderer, TickReport};
