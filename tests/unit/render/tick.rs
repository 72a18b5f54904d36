use super::*;
use crate::foundation::core::Rgba8;
use crate::foundation::error::PatternResult;
use crate::path::stroke::Stroke;
use crate::path::taper::{TaperKind, TaperSpec};
use crate::render::sink::RecordingSink;

fn settings(depth: u32, children: u32) -> PatternSettings {
    let mut s = PatternSettings::default();
    s.fractal.depth = depth;
    s.fractal.children = children;
    s.shape.sides = 4;
    s.stroke.segments = 8;
    s
}

#[test]
fn first_tick_draws_whole_tree() {
    let mut r = PatternRenderer::new(settings(2, 3)).unwrap();
    let mut sink = RecordingSink::new();
    let report = r.tick(1000.0, &mut sink).unwrap();

    assert!(report.should_render);
    assert_eq!(report.tier, QualityTier::High);
    assert_eq!(report.nodes_drawn, 1 + 3 + 9);
    assert_eq!(report.strokes_emitted, 13 * 4);
    assert_eq!(report.time_ms, 0.0);
    assert_eq!(sink.frames().len(), 1);
    assert_eq!(sink.stroke_count(), report.strokes_emitted);
    assert!(sink.frames()[0].finished);
    assert!(sink.frames()[0].strokes.iter().all(|(_, st)| st.antialias));
}

#[test]
fn limited_ticks_do_not_touch_the_sink() {
    let mut r = PatternRenderer::new(settings(1, 2)).unwrap();
    let mut sink = RecordingSink::new();
    r.tick(0.0, &mut sink).unwrap();
    let skipped = r.tick(5.0, &mut sink).unwrap();
    assert!(!skipped.should_render);
    assert_eq!(skipped.nodes_drawn, 0);
    assert_eq!(skipped.strokes_emitted, 0);
    assert_eq!(sink.frames().len(), 1);
    assert_eq!(r.time_ms(), 0.0);

    let drawn = r.tick(17.0, &mut sink).unwrap();
    assert!(drawn.should_render);
    assert_eq!(sink.frames().len(), 2);
    assert!(r.time_ms() > 16.0 && r.time_ms() < 17.0, "{}", r.time_ms());
    assert_eq!(r.frames_rendered(), 2);
}

#[test]
fn tier_limits_depth_and_antialiasing() {
    let mut s = settings(5, 2);
    s.clock.quality.adaptive = false;
    s.clock.quality.initial_tier = QualityTier::Low;
    let mut r = PatternRenderer::new(s).unwrap();
    let mut sink = RecordingSink::new();
    let report = r.tick(0.0, &mut sink).unwrap();

    assert_eq!(report.tier, QualityTier::Low);
    // Low caps depth at 3.
    assert_eq!(report.nodes_drawn, 1 + 2 + 4 + 8);
    assert!(sink.frames()[0].strokes.iter().all(|(_, st)| !st.antialias));
}

#[test]
fn particle_limit_caps_node_count() {
    let mut s = settings(6, 8);
    s.clock.quality.adaptive = false;
    s.clock.quality.initial_tier = QualityTier::Low;
    s.shape.sides = 3;
    s.stroke.segments = 1;
    let mut r = PatternRenderer::new(s).unwrap();
    let mut sink = RecordingSink::last_only();
    let report = r.tick(0.0, &mut sink).unwrap();
    assert_eq!(report.nodes_drawn, QualityTier::Low.params().particle_limit.min(1 + 8 + 64 + 512));
}

#[test]
fn tapered_edges_emit_one_stroke_per_segment() {
    let mut s = settings(0, 1);
    s.taper = TaperSpec::new(TaperKind::Both, 0.1, 0.1);
    let mut r = PatternRenderer::new(s).unwrap();
    let mut sink = RecordingSink::new();
    let report = r.tick(0.0, &mut sink).unwrap();
    assert_eq!(report.nodes_drawn, 1);
    assert_eq!(report.strokes_emitted, 4 * 8);
}

#[test]
fn static_color_reaches_every_stroke() {
    let mut s = settings(1, 3);
    s.colors.stops = vec!["rgb(255, 0, 0)".to_owned()];
    let mut r = PatternRenderer::new(s).unwrap();
    let mut sink = RecordingSink::new();
    r.tick(0.0, &mut sink).unwrap();
    assert!(
        sink.frames()[0]
            .strokes
            .iter()
            .all(|(_, st)| st.color == Rgba8::new(255, 0, 0, 255))
    );
}

#[test]
fn invalid_settings_are_rejected_up_front() {
    let mut s = PatternSettings::default();
    s.colors.stops.clear();
    assert!(PatternRenderer::new(s).unwrap_err().is_invalid_config());
}

#[derive(Default)]
struct FailingSink {
    strokes: usize,
    fail_after: usize,
    begun: usize,
    ended: usize,
}

impl DrawSink for FailingSink {
    fn begin_frame(&mut self, _frame: &FrameInfo) -> PatternResult<()> {
        self.begun += 1;
        Ok(())
    }

    fn stroke(&mut self, _stroke: &Stroke, _style: &StrokeStyle) -> PatternResult<()> {
        if self.strokes == self.fail_after {
            return Err(anyhow::anyhow!("surface lost").into());
        }
        self.strokes += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> PatternResult<()> {
        self.ended += 1;
        Ok(())
    }
}

#[test]
fn failed_stroke_still_ends_the_frame() {
    let mut r = PatternRenderer::new(settings(1, 2)).unwrap();
    let mut sink = FailingSink {
        fail_after: 3,
        ..FailingSink::default()
    };
    let err = r.tick(0.0, &mut sink).unwrap_err();
    assert!(!err.is_invalid_config());
    assert_eq!(sink.strokes, 3);
    assert_eq!(sink.begun, 1);
    assert_eq!(sink.ended, 1);
}
