// File: crates/plot-core/src/overlay.rs
// Summary: Reference overlays: dashed threshold and identity guide lines.

/// What the overlay traces over the shared x-domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReferenceKind {
    /// Constant threshold y = value.
    Horizontal(f64),
    /// Identity line y = x.
    Identity,
}

/// A labeled guide line drawn for visual comparison against the data series.
#[derive(Clone, Debug)]
pub struct ReferenceOverlay {
    pub label: String,
    pub kind: ReferenceKind,
}

impl ReferenceOverlay {
    pub fn horizontal(y: f64, label: impl Into<String>) -> Self {
        Self { label: label.into(), kind: ReferenceKind::Horizontal(y) }
    }

    pub fn identity(label: impl Into<String>) -> Self {
        Self { label: label.into(), kind: ReferenceKind::Identity }
    }

    /// Endpoints of the guide line across [x_min, x_max] in world coordinates.
    pub fn endpoints(&self, x_min: f64, x_max: f64) -> [(f64, f64); 2] {
        match self.kind {
            ReferenceKind::Horizontal(y) => [(x_min, y), (x_max, y)],
            ReferenceKind::Identity => [(x_min, x_min), (x_max, x_max)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_endpoints_hold_y() {
        let o = ReferenceOverlay::horizontal(1500.0, "t_le");
        assert_eq!(o.endpoints(3.0, 100.0), [(3.0, 1500.0), (100.0, 1500.0)]);
    }

    #[test]
    fn identity_endpoints_track_x() {
        let o = ReferenceOverlay::identity("x = y");
        assert_eq!(o.endpoints(500.0, 2000.0), [(500.0, 500.0), (2000.0, 2000.0)]);
    }
}
