// File: crates/plot-core/src/spec.rs
// Summary: ChartSpec (full description of one chart) and derived axis extents.

use crate::error::SpecError;
use crate::overlay::{ReferenceKind, ReferenceOverlay};
use crate::series::Series;

/// Everything needed to render one chart. Built once from literal data by the
/// study binaries and consumed immediately; no mutation after construction.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub overlays: Vec<ReferenceOverlay>,
    pub y_limits: Option<(f64, f64)>,
}

impl ChartSpec {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
            overlays: Vec::new(),
            y_limits: None,
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_overlay(mut self, overlay: ReferenceOverlay) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Fix the y-axis range instead of deriving it from the data.
    pub fn with_y_limits(mut self, min: f64, max: f64) -> Self {
        self.y_limits = Some((min, max));
        self
    }

    /// Check every series' pairing invariant before rendering.
    pub fn validate(&self) -> Result<(), SpecError> {
        for s in &self.series {
            s.validate()?;
        }
        Ok(())
    }

    /// Data-driven axis ranges over all series and overlays.
    pub fn extents(&self) -> Extents {
        Extents::from_spec(self)
    }
}

/// World-coordinate axis ranges for one chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extents {
    pub fn from_spec(spec: &ChartSpec) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &spec.series {
            for (x, y) in s.points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }

        // The x-range is fixed by the data; overlays only widen the y-range.
        for o in &spec.overlays {
            match o.kind {
                ReferenceKind::Horizontal(y) => {
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
                ReferenceKind::Identity => {
                    y_min = y_min.min(x_min);
                    y_max = y_max.max(x_max);
                }
            }
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            y_min = 0.0;
            y_max = 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }

        // Small vertical breathing room, overridden verbatim by explicit limits.
        let margin = (y_max - y_min) * 0.02;
        y_min -= margin;
        y_max += margin;
        if let Some((lo, hi)) = spec.y_limits {
            y_min = lo;
            y_max = hi;
        }

        Self { x_min, x_max, y_min, y_max }
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::ReferenceOverlay;
    use crate::series::Series;

    #[test]
    fn extents_cover_all_series() {
        let spec = ChartSpec::new("t", "x", "y")
            .with_series(Series::new("a", vec![0.0, 5.0], vec![1.0, 3.0]))
            .with_series(Series::new("b", vec![2.0, 8.0], vec![-1.0, 2.0]));
        let e = spec.extents();
        assert_eq!(e.x_min, 0.0);
        assert_eq!(e.x_max, 8.0);
        assert!(e.y_min <= -1.0 && e.y_max >= 3.0);
    }

    #[test]
    fn horizontal_overlay_widens_y_range() {
        let spec = ChartSpec::new("t", "x", "y")
            .with_series(Series::new("a", vec![3.0, 10.0, 100.0], vec![2.0, 12.0, 1035.0]))
            .with_overlay(ReferenceOverlay::horizontal(1500.0, "t_le"));
        let e = spec.extents();
        assert!(e.y_max >= 1500.0);
    }

    #[test]
    fn identity_overlay_widens_y_to_x_range() {
        let spec = ChartSpec::new("t", "x", "y")
            .with_series(Series::new("a", vec![500.0, 2000.0], vec![504.0, 636.0]))
            .with_overlay(ReferenceOverlay::identity("x = y"));
        let e = spec.extents();
        assert!(e.y_max >= 2000.0);
    }

    #[test]
    fn explicit_y_limits_are_verbatim() {
        let spec = ChartSpec::new("t", "x", "y")
            .with_series(Series::new("a", vec![3.0, 100.0], vec![2.0, 1035.0]))
            .with_y_limits(0.0, 1800.0);
        let e = spec.extents();
        assert_eq!(e.y_min, 0.0);
        assert_eq!(e.y_max, 1800.0);
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        let spec = ChartSpec::new("t", "x", "y")
            .with_series(Series::new("a", vec![2.0], vec![7.0]));
        let e = spec.extents();
        assert!(e.x_span() > 0.0);
        assert!(e.y_span() > 0.0);
    }

    #[test]
    fn empty_spec_gets_unit_ranges() {
        let e = ChartSpec::new("t", "x", "y").extents();
        assert_eq!((e.x_min, e.x_max), (0.0, 1.0));
        assert!(e.y_span() > 0.0);
    }
}
