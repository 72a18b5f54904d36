use crate::clock::quality::{QualityConfig, QualityState, QualityTier, TierParams};

/// Configuration for a [`FrameClock`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FrameClockConfig {
    /// Render at most this many frames per second. Zero, negative or non-finite disables
    /// frame-rate limiting.
    pub target_fps: f64,
    /// Upper clamp for a single raw delta; absorbs host suspension gaps.
    pub max_delta_ms: f64,
    /// Lower clamp for the smoothed delta. Keeps `fps` finite.
    pub min_delta_ms: f64,
    /// EMA weight of the previous smoothed delta, in `[0, 1)`.
    pub smoothing: f64,
    /// Slack subtracted from the target interval when deciding whether to render. Absorbs
    /// host callback jitter around the target rate.
    pub pacing_tolerance_ms: f64,
    /// Adaptive tier selection.
    pub quality: QualityConfig,
}

impl Default for FrameClockConfig {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            max_delta_ms: 250.0,
            min_delta_ms: 1.0,
            smoothing: 0.9,
            pacing_tolerance_ms: 1.0,
            quality: QualityConfig::default(),
        }
    }
}

impl FrameClockConfig {
    /// Minimum interval between rendered frames, if frame-rate limiting is enabled.
    pub fn target_interval_ms(&self) -> Option<f64> {
        if self.target_fps.is_finite() && self.target_fps > 0.0 {
            Some(1000.0 / self.target_fps)
        } else {
            None
        }
    }

    /// Copy of `self` with every field forced into a safe range.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.min_delta_ms.is_finite() && self.min_delta_ms > 0.0) {
            self.min_delta_ms = defaults.min_delta_ms;
        }
        if !(self.max_delta_ms.is_finite() && self.max_delta_ms >= self.min_delta_ms) {
            self.max_delta_ms = defaults.max_delta_ms.max(self.min_delta_ms);
        }
        self.smoothing = if self.smoothing.is_finite() {
            self.smoothing.clamp(0.0, 0.999)
        } else {
            defaults.smoothing
        };
        if !(self.pacing_tolerance_ms.is_finite() && self.pacing_tolerance_ms >= 0.0) {
            self.pacing_tolerance_ms = 0.0;
        }
        self
    }
}

/// Timing measurements for one tick. Superseded every tick; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameSample {
    pub timestamp_ms: f64,
    pub raw_delta_ms: f64,
    pub smoothed_delta_ms: f64,
    pub fps: f64,
}

/// Result of [`FrameClock::tick`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TickOutcome {
    /// Whether the caller should render this tick.
    pub should_render: bool,
    pub sample: FrameSample,
    pub tier: QualityTier,
}

impl TickOutcome {
    pub fn fps(&self) -> f64 {
        self.sample.fps
    }

    pub fn smoothed_delta_ms(&self) -> f64 {
        self.sample.smoothed_delta_ms
    }

    pub fn params(&self) -> TierParams {
        self.tier.params()
    }
}

/// Smooths inter-frame timing, limits the render rate and selects a quality tier.
///
/// All rolling state lives in the clock itself; time is only ever read from the `now_ms`
/// argument.
#[derive(Clone, Debug)]
pub struct FrameClock {
    config: FrameClockConfig,
    last_render_ms: Option<f64>,
    smoothed_delta_ms: f64,
    quality: QualityState,
    last_sample: FrameSample,
}

impl FrameClock {
    pub fn new(config: FrameClockConfig) -> Self {
        let config = config.sanitized();
        let initial = config
            .target_interval_ms()
            .unwrap_or(1000.0 / 60.0)
            .clamp(config.min_delta_ms, config.max_delta_ms);
        Self {
            last_render_ms: None,
            smoothed_delta_ms: initial,
            quality: QualityState::new(config.quality.initial_tier),
            last_sample: FrameSample {
                timestamp_ms: 0.0,
                raw_delta_ms: 0.0,
                smoothed_delta_ms: initial,
                fps: 1000.0 / initial,
            },
            config,
        }
    }

    pub fn config(&self) -> &FrameClockConfig {
        &self.config
    }

    pub fn tier(&self) -> QualityTier {
        self.quality.tier
    }

    pub fn quality_state(&self) -> QualityState {
        self.quality
    }

    pub fn smoothed_delta_ms(&self) -> f64 {
        self.smoothed_delta_ms
    }

    pub fn fps(&self) -> f64 {
        1000.0 / self.smoothed_delta_ms
    }

    /// Sample produced by the most recent tick (rendered or not).
    pub fn last_sample(&self) -> FrameSample {
        self.last_sample
    }

    /// Forget the render anchor; the next tick renders and re-anchors. Smoothing and tier
    /// state are kept.
    pub fn reset(&mut self) {
        self.last_render_ms = None;
    }

    /// Advance the clock to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if !now_ms.is_finite() {
            tracing::debug!(now_ms, "non-finite timestamp; skipping tick");
            return self.skip(self.last_sample.timestamp_ms, 0.0);
        }

        let Some(last) = self.last_render_ms else {
            self.last_render_ms = Some(now_ms);
            return self.render(now_ms, 0.0, false);
        };

        let elapsed = now_ms - last;
        if elapsed < 0.0 {
            tracing::debug!(now_ms, last, "timestamp regressed; re-anchoring clock");
            self.last_render_ms = Some(now_ms);
            return self.skip(now_ms, 0.0);
        }

        let raw = elapsed.min(self.config.max_delta_ms);
        if let Some(interval) = self.config.target_interval_ms()
            && elapsed + self.config.pacing_tolerance_ms < interval
        {
            tracing::trace!(elapsed, interval, "frame limited");
            return self.skip(now_ms, raw);
        }

        self.last_render_ms = Some(now_ms);
        self.render(now_ms, raw, true)
    }

    fn render(&mut self, now_ms: f64, raw: f64, update: bool) -> TickOutcome {
        if update {
            let a = self.config.smoothing;
            self.smoothed_delta_ms = (self.smoothed_delta_ms * a + raw * (1.0 - a))
                .clamp(self.config.min_delta_ms, self.config.max_delta_ms);

            let before = self.quality.tier;
            self.quality = self.quality.transition(self.fps(), &self.config.quality);
            if self.quality.tier != before {
                tracing::debug!(
                    from = ?before,
                    to = ?self.quality.tier,
                    fps = self.fps(),
                    "quality tier changed"
                );
            }
        }

        self.last_sample = FrameSample {
            timestamp_ms: now_ms,
            raw_delta_ms: raw,
            smoothed_delta_ms: self.smoothed_delta_ms,
            fps: self.fps(),
        };
        TickOutcome {
            should_render: true,
            sample: self.last_sample,
            tier: self.quality.tier,
        }
    }

    fn skip(&mut self, now_ms: f64, raw: f64) -> TickOutcome {
        self.last_sample = FrameSample {
            timestamp_ms: now_ms,
            raw_delta_ms: raw,
            smoothed_delta_ms: self.smoothed_delta_ms,
            fps: self.fps(),
        };
        TickOutcome {
            should_render: false,
            sample: self.last_sample,
            tier: self.quality.tier,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FrameClockConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/frame_clock.rs"]
mod tests;
