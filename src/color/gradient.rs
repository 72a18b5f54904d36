use std::collections::HashMap;
use std::sync::RwLock;

use crate::animation::ease::Ease;
use crate::color::parse::{Rgb, parse_color};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{PatternError, PatternResult};
use crate::foundation::math::{lerp, round_channel, wrap};

/// How cycle progress maps onto the stop list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CycleMode {
    /// `N` segments: each stop blends into the next and the last blends back into the first.
    #[default]
    Loop,
    /// `N - 1` segments: the first stop at cycle start, the last stop at cycle end.
    Sweep,
}

/// Ordered color stops plus the cycle they repeat over.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorStopSet {
    /// Insertion order defines cycle order.
    pub stops: Vec<String>,
    pub cycle_duration_ms: f64,
    pub easing: Ease,
    pub mode: CycleMode,
    /// Alpha applied to every evaluated color, in `[0, 1]`.
    pub alpha: f64,
}

impl Default for ColorStopSet {
    fn default() -> Self {
        Self {
            stops: vec![
                "#ff0080".to_owned(),
                "#7928ca".to_owned(),
                "#00d4ff".to_owned(),
            ],
            cycle_duration_ms: 6000.0,
            easing: Ease::InOutSine,
            mode: CycleMode::Loop,
            alpha: 1.0,
        }
    }
}

impl ColorStopSet {
    pub fn validate(&self) -> PatternResult<()> {
        validate_cycle(self.stops.len(), self.cycle_duration_ms)?;
        for s in &self.stops {
            parse_color(s)
                .map_err(|e| PatternError::invalid_config(format!("color stop: {e}")))?;
        }
        Ok(())
    }
}

fn validate_cycle(stop_count: usize, cycle_duration_ms: f64) -> PatternResult<()> {
    if stop_count == 0 {
        return Err(PatternError::invalid_config(
            "color stops must not be empty",
        ));
    }
    if !(cycle_duration_ms.is_finite() && cycle_duration_ms > 0.0) {
        return Err(PatternError::invalid_config(format!(
            "color cycle duration must be finite and > 0 (got {cycle_duration_ms})"
        )));
    }
    Ok(())
}

/// Evaluates colors on a repeating multi-stop cycle.
///
/// Each interpolator owns a cache from raw stop strings to parsed channels, so independent
/// animation instances never share parse state. The cache is append-only and lock-guarded;
/// evaluation takes `&self`.
#[derive(Debug, Default)]
pub struct ColorInterpolator {
    cache: RwLock<HashMap<String, Rgb>>,
}

impl ColorInterpolator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color at `time_ms` on a [`CycleMode::Loop`] cycle through `stops`.
    ///
    /// Channels are interpolated in floating point and rounded exactly once, after easing and
    /// blending, then clamped to `[0, 255]`. A single stop yields a static color.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        time_ms: f64,
        stops: &[S],
        alpha: f64,
        cycle_duration_ms: f64,
        easing: Ease,
    ) -> PatternResult<Rgba8> {
        self.evaluate_with_mode(
            time_ms,
            stops,
            alpha,
            cycle_duration_ms,
            easing,
            CycleMode::Loop,
        )
    }

    /// Color at `time_ms` for a configured [`ColorStopSet`].
    pub fn evaluate_set(&self, time_ms: f64, set: &ColorStopSet) -> PatternResult<Rgba8> {
        self.evaluate_with_mode(
            time_ms,
            &set.stops,
            set.alpha,
            set.cycle_duration_ms,
            set.easing,
            set.mode,
        )
    }

    pub fn evaluate_with_mode<S: AsRef<str>>(
        &self,
        time_ms: f64,
        stops: &[S],
        alpha: f64,
        cycle_duration_ms: f64,
        easing: Ease,
        mode: CycleMode,
    ) -> PatternResult<Rgba8> {
        validate_cycle(stops.len(), cycle_duration_ms)?;
        let colors = self.resolve(stops)?;

        let time_ms = if time_ms.is_finite() { time_ms } else { 0.0 };
        let progress = wrap(time_ms, cycle_duration_ms) / cycle_duration_ms;
        let [r, g, b] = blend(&colors, progress, easing, mode);

        let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        Ok(Rgba8::new(
            round_channel(r),
            round_channel(g),
            round_channel(b),
            round_channel(alpha * 255.0),
        ))
    }

    /// Number of distinct stop strings parsed so far.
    pub fn cached_len(&self) -> usize {
        self.cache.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Parse every stop, consulting the cache. New entries are only inserted once all stops
    /// have parsed, so a failing call leaves the cache untouched.
    fn resolve<S: AsRef<str>>(&self, stops: &[S]) -> PatternResult<Vec<Rgb>> {
        let mut colors = Vec::with_capacity(stops.len());
        let mut fresh = Vec::new();
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            for stop in stops {
                let key = stop.as_ref();
                if let Some(c) = cache.get(key) {
                    colors.push(*c);
                    continue;
                }
                let c = parse_color(key)
                    .map_err(|e| PatternError::invalid_config(format!("color stop: {e}")))?;
                colors.push(c);
                fresh.push((key.to_owned(), c));
            }
        }

        if !fresh.is_empty() {
            let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
            for (k, c) in fresh {
                cache.entry(k).or_insert(c);
            }
        }
        Ok(colors)
    }
}

/// Unrounded channels at cycle `progress` in `[0, 1)`.
fn blend(colors: &[Rgb], progress: f64, easing: Ease, mode: CycleMode) -> [f64; 3] {
    let n = colors.len();
    if n == 1 {
        let c = colors[0];
        return [c.r, c.g, c.b];
    }

    let (index, next, local_t) = match mode {
        CycleMode::Loop => {
            let scaled = progress * n as f64;
            let index = (scaled.floor() as usize).min(n - 1);
            (index, (index + 1) % n, scaled - index as f64)
        }
        CycleMode::Sweep => {
            let scaled = progress * (n - 1) as f64;
            let index = (scaled.floor() as usize).min(n - 2);
            (index, index + 1, scaled - index as f64)
        }
    };

    let t = easing.apply(local_t);
    let a = colors[index];
    let b = colors[next];
    [lerp(a.r, b.r, t), lerp(a.g, b.g, t), lerp(a.b, b.b, t)]
}

/// Snap `time_ms` down onto a grid of `precision` steps per color cycle.
///
/// Returns `time_ms` unchanged when `precision` is zero or the cycle is not positive.
pub fn quantize_time(time_ms: f64, cycle_duration_ms: f64, precision: u32) -> f64 {
    if precision == 0 || !(cycle_duration_ms.is_finite() && cycle_duration_ms > 0.0) {
        return time_ms;
    }
    let step = cycle_duration_ms / f64::from(precision);
    (time_ms / step).floor() * step
}

#[cfg(test)]
#[path = "../../tests/unit/color/gradient.rs"]
mod tests;
