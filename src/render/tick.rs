use crate::clock::frame_clock::{FrameClock, TickOutcome};
use crate::clock::quality::{QualityTier, TierParams};
use crate::color::gradient::{ColorInterpolator, quantize_time};
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::PatternResult;
use crate::fractal::tree::{FractalNode, walk};
use crate::path::shape::{generate_closed, polygon_outline};
use crate::render::settings::PatternSettings;
use crate::render::sink::{DrawSink, FrameInfo, StrokeStyle};

/// Per-tick telemetry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TickReport {
    pub should_render: bool,
    pub fps: f64,
    pub tier: QualityTier,
    /// Animation time after this tick, in milliseconds.
    pub time_ms: f64,
    pub nodes_drawn: usize,
    pub strokes_emitted: usize,
}

/// Drives one pattern: clock first, then timing, color and geometry for every visible node.
#[derive(Debug)]
pub struct PatternRenderer {
    settings: PatternSettings,
    clock: FrameClock,
    colors: ColorInterpolator,
    time_ms: f64,
    frames_rendered: u64,
}

impl PatternRenderer {
    /// Validates `settings` and builds a renderer at animation time zero.
    pub fn new(settings: PatternSettings) -> PatternResult<Self> {
        settings.validate()?;
        Ok(Self {
            clock: FrameClock::new(settings.clock),
            colors: ColorInterpolator::new(),
            settings,
            time_ms: 0.0,
            frames_rendered: 0,
        })
    }

    pub fn settings(&self) -> &PatternSettings {
        &self.settings
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Animation time in milliseconds. Advances by the smoothed delta on every rendered tick.
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Run one host tick at `now_ms`, forwarding strokes to `sink` when the clock says to
    /// render.
    #[tracing::instrument(skip(self, sink))]
    pub fn tick(&mut self, now_ms: f64, sink: &mut dyn DrawSink) -> PatternResult<TickReport> {
        let outcome = self.clock.tick(now_ms);
        if !outcome.should_render {
            return Ok(self.report(&outcome, 0, 0));
        }

        if self.frames_rendered > 0 {
            self.time_ms += outcome.smoothed_delta_ms();
        }
        self.frames_rendered += 1;

        let (nodes_drawn, strokes_emitted) = self.draw(&outcome, sink)?;
        tracing::trace!(nodes_drawn, strokes_emitted, "frame drawn");
        Ok(self.report(&outcome, nodes_drawn, strokes_emitted))
    }

    fn draw(
        &self,
        outcome: &TickOutcome,
        sink: &mut dyn DrawSink,
    ) -> PatternResult<(usize, usize)> {
        let s = &self.settings;
        let params = outcome.params();
        let nodes = walk(
            self.time_ms,
            &s.fractal,
            params.fractal_depth_limit,
            params.particle_limit,
        )?;
        let centers = node_centers(&nodes, s);

        sink.begin_frame(&FrameInfo {
            canvas: s.canvas,
            time_ms: self.time_ms,
            fps: outcome.fps(),
            tier: outcome.tier,
        })?;

        // The frame is closed even when a node fails; the first error wins.
        let drawn = self.draw_nodes(&nodes, &centers, params, sink);
        let ended = sink.end_frame();
        let strokes_emitted = drawn?;
        ended?;
        Ok((nodes.len(), strokes_emitted))
    }

    fn draw_nodes(
        &self,
        nodes: &[FractalNode],
        centers: &[Point],
        params: TierParams,
        sink: &mut dyn DrawSink,
    ) -> PatternResult<usize> {
        let s = &self.settings;
        let root_radius = s.canvas.inner_radius() * s.shape.radius_frac;
        let mut strokes_emitted = 0;
        for (node, center) in nodes.iter().zip(centers) {
            let t = quantize_time(
                node.time_ms,
                s.colors.cycle_duration_ms,
                params.color_precision,
            );
            let color = self.colors.evaluate_set(t, &s.colors)?;

            let seconds = node.time_ms / 1000.0;
            let rotation = node.angle + s.motion.rotation_speed * seconds;
            let vertices =
                polygon_outline(*center, root_radius * node.scale, s.shape.sides, rotation);
            let wave = s.wave.with_phase(s.wave.phase + s.motion.phase_speed * seconds);
            let base_width = s.stroke.base_width * node.scale;

            let edges = generate_closed(&vertices, s.stroke.segments, &wave, &s.taper, base_width);
            for edge in edges {
                for stroke in edge.strokes() {
                    let style = StrokeStyle {
                        color,
                        width: stroke.width,
                        antialias: params.smoothing_enabled,
                    };
                    sink.stroke(&stroke, &style)?;
                    strokes_emitted += 1;
                }
            }
        }
        Ok(strokes_emitted)
    }

    fn report(
        &self,
        outcome: &TickOutcome,
        nodes_drawn: usize,
        strokes_emitted: usize,
    ) -> TickReport {
        TickReport {
            should_render: outcome.should_render,
            fps: outcome.fps(),
            tier: outcome.tier,
            time_ms: self.time_ms,
            nodes_drawn,
            strokes_emitted,
        }
    }
}

/// Centers of every walked node. Children sit around their parent at their sibling angle.
fn node_centers(nodes: &[FractalNode], s: &PatternSettings) -> Vec<Point> {
    let root_radius = s.canvas.inner_radius() * s.shape.radius_frac;
    let mut centers: Vec<Point> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let center = match node.parent {
            None => s.canvas.center(),
            Some(p) => {
                let parent_radius = root_radius * nodes[p].scale;
                centers[p] + Vec2::from_angle(node.angle) * parent_radius * s.shape.child_spread
            }
        };
        centers.push(center);
    }
    centers
}

#[cfg(test)]
#[path = "../../tests/unit/render/tick.rs"]
mod tests;
