/// Where a stroke narrows along its length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TaperKind {
    #[default]
    #[serde(alias = "none")]
    None,
    #[serde(alias = "start")]
    Start,
    #[serde(alias = "end")]
    End,
    #[serde(alias = "both")]
    Both,
    #[serde(alias = "middle")]
    Middle,
}

/// Width profile of a modulated line, as fractions of its base width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TaperSpec {
    pub kind: TaperKind,
    pub start_width_frac: f64,
    pub end_width_frac: f64,
}

impl Default for TaperSpec {
    fn default() -> Self {
        Self {
            kind: TaperKind::None,
            start_width_frac: 0.2,
            end_width_frac: 0.2,
        }
    }
}

impl TaperSpec {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(kind: TaperKind, start_width_frac: f64, end_width_frac: f64) -> Self {
        Self {
            kind,
            start_width_frac,
            end_width_frac,
        }
    }

    pub fn is_active(&self) -> bool {
        self.kind != TaperKind::None
    }

    /// Width fraction at `progress` in `[0, 1]` along the line.
    pub fn width_frac(&self, progress: f64) -> f64 {
        fn frac(v: f64) -> f64 {
            if v.is_finite() { v.max(0.0) } else { 1.0 }
        }

        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let s = frac(self.start_width_frac);
        let e = frac(self.end_width_frac);
        match self.kind {
            TaperKind::None => 1.0,
            TaperKind::Start => s + (1.0 - s) * p,
            TaperKind::End => 1.0 - (1.0 - e) * p,
            TaperKind::Both => {
                if p < 0.5 {
                    s + (1.0 - s) * 2.0 * p
                } else {
                    1.0 - (1.0 - e) * 2.0 * (p - 0.5)
                }
            }
            TaperKind::Middle => {
                if p < 0.5 {
                    1.0 - (1.0 - s) * 2.0 * (0.5 - p)
                } else {
                    1.0 - (1.0 - e) * 2.0 * (p - 0.5)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/taper.rs"]
mod tests;
