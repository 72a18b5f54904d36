use crate::foundation::core::BezPath;
use crate::path::wave::WavePath;

/// One stroke call for the drawing layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub path: BezPath,
    pub width: f64,
}

impl WavePath {
    /// The whole path as one polyline.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points();
        if let Some(first) = points.next() {
            path.move_to(first);
            for p in points {
                path.line_to(p);
            }
        }
        path
    }

    /// Splits the path into stroke calls.
    ///
    /// A single path cannot vary its width, so tapered paths yield one stroke per segment
    /// using the mean width of its two samples. Untapered paths yield a single stroke.
    pub fn strokes(&self) -> Vec<Stroke> {
        if self.samples.len() < 2 {
            return Vec::new();
        }
        if !self.tapered {
            return vec![Stroke {
                path: self.to_bez_path(),
                width: self.samples[0].width,
            }];
        }
        self.samples
            .windows(2)
            .map(|pair| {
                let mut path = BezPath::new();
                path.move_to(pair[0].point);
                path.line_to(pair[1].point);
                Stroke {
                    path,
                    width: 0.5 * (pair[0].width + pair[1].width),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/stroke.rs"]
mod tests;
