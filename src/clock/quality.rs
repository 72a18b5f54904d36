//! Quality tiers and the hysteretic tier state machine.
//!
//! Tier selection is modeled as an explicit [`QualityState`] value with a pure
//! [`QualityState::transition`] function so the debounce behavior can be exercised without a
//! clock.

use std::cmp::Ordering;

/// Named bundle of rendering-quality parameters selected from the measured frame rate.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum QualityTier {
    #[default]
    High,
    Medium,
    Low,
}

/// Fixed parameter set bound to a [`QualityTier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TierParams {
    /// Steps per color cycle the orchestrator snaps color time onto.
    pub color_precision: u32,
    /// Deepest fractal level drawn.
    pub fractal_depth_limit: u32,
    /// Maximum number of fractal nodes drawn per frame.
    pub particle_limit: usize,
    /// Whether strokes are drawn anti-aliased.
    pub smoothing_enabled: bool,
}

impl QualityTier {
    pub const fn params(self) -> TierParams {
        match self {
            Self::High => TierParams {
                color_precision: 1000,
                fractal_depth_limit: 6,
                particle_limit: 10_000,
                smoothing_enabled: true,
            },
            Self::Medium => TierParams {
                color_precision: 100,
                fractal_depth_limit: 4,
                particle_limit: 5_000,
                smoothing_enabled: true,
            },
            Self::Low => TierParams {
                color_precision: 10,
                fractal_depth_limit: 3,
                particle_limit: 2_000,
                smoothing_enabled: false,
            },
        }
    }

    /// Higher rank means higher quality.
    const fn rank(self) -> u8 {
        match self {
            Self::High => 2,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }
}

/// Thresholds and debounce windows for adaptive tier selection.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Adapt the tier to the measured frame rate. When false the tier stays at `initial_tier`.
    pub adaptive: bool,
    /// Tier the controller starts in (and stays in when not adaptive).
    pub initial_tier: QualityTier,
    /// Frame rates at or above this classify as [`QualityTier::High`].
    pub high_min_fps: f64,
    /// Frame rates at or above this (and below `high_min_fps`) classify as
    /// [`QualityTier::Medium`]; anything lower is [`QualityTier::Low`].
    pub medium_min_fps: f64,
    /// Consecutive below-range samples required before dropping to a lower tier.
    pub downgrade_after: u32,
    /// Consecutive above-range samples required before recovering to a higher tier.
    pub upgrade_after: u32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            adaptive: true,
            initial_tier: QualityTier::High,
            high_min_fps: 50.0,
            medium_min_fps: 30.0,
            downgrade_after: 5,
            upgrade_after: 10,
        }
    }
}

impl QualityConfig {
    /// Tier whose fps range contains `fps`, ignoring hysteresis.
    pub fn classify(&self, fps: f64) -> QualityTier {
        if fps >= self.high_min_fps {
            QualityTier::High
        } else if fps >= self.medium_min_fps {
            QualityTier::Medium
        } else {
            QualityTier::Low
        }
    }
}

/// Hysteresis state for adaptive tier selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct QualityState {
    pub tier: QualityTier,
    pub consecutive_low_samples: u32,
    pub consecutive_high_samples: u32,
}

impl QualityState {
    pub fn new(tier: QualityTier) -> Self {
        Self {
            tier,
            consecutive_low_samples: 0,
            consecutive_high_samples: 0,
        }
    }

    /// Feed one fps sample and return the next state.
    ///
    /// The tier only changes once `fps` has stayed outside the current tier's range for the
    /// configured number of consecutive samples; it then jumps to the tier `fps` classifies as.
    /// A sample inside the current range resets both counters. Non-finite samples are ignored.
    pub fn transition(self, fps: f64, cfg: &QualityConfig) -> Self {
        if !cfg.adaptive {
            return Self::new(cfg.initial_tier);
        }
        if !fps.is_finite() {
            return self;
        }

        let observed = cfg.classify(fps);
        match observed.rank().cmp(&self.tier.rank()) {
            Ordering::Equal => Self::new(self.tier),
            Ordering::Less => {
                let low = self.consecutive_low_samples.saturating_add(1);
                if low >= cfg.downgrade_after.max(1) {
                    Self::new(observed)
                } else {
                    Self {
                        tier: self.tier,
                        consecutive_low_samples: low,
                        consecutive_high_samples: 0,
                    }
                }
            }
            Ordering::Greater => {
                let high = self.consecutive_high_samples.saturating_add(1);
                if high >= cfg.upgrade_after.max(1) {
                    Self::new(observed)
                } else {
                    Self {
                        tier: self.tier,
                        consecutive_low_samples: 0,
                        consecutive_high_samples: high,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/quality.rs"]
mod tests;
