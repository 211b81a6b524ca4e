// File: crates/plot-core/src/series.rs
// Summary: Series model: one labeled polyline of paired (x, y) samples.

use crate::error::SpecError;

/// Point markers cycled across series in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    Cross,
}

/// Cycle order matches the study scripts' marker sequence (o, s, ^, x).
pub const MARKER_CYCLE: [Marker; 4] = [
    Marker::Circle,
    Marker::Square,
    Marker::TriangleUp,
    Marker::Cross,
];

/// One plotted line. The x and y vectors are stored separately, mirroring the
/// parallel measurement arrays the studies are built from; `validate` enforces
/// the pairing invariant before anything is drawn.
#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { label: label.into(), xs, ys }
    }

    /// Build from pre-paired points.
    pub fn from_pairs(label: impl Into<String>, points: &[(f64, f64)]) -> Self {
        let (xs, ys) = points.iter().copied().unzip();
        Self { label: label.into(), xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len().min(self.ys.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zipped (x, y) pairs. Stops at the shorter vector; run `validate` first
    /// when exact pairing matters.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if self.xs.len() != self.ys.len() {
            return Err(SpecError::ShapeMismatch {
                label: self.label.clone(),
                x_len: self.xs.len(),
                y_len: self.ys.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_uneven_vectors() {
        let s = Series::new("a", vec![1.0, 2.0, 3.0], vec![1.0, 2.0]);
        assert_eq!(
            s.validate(),
            Err(SpecError::ShapeMismatch { label: "a".into(), x_len: 3, y_len: 2 })
        );
    }

    #[test]
    fn from_pairs_splits_columns() {
        let s = Series::from_pairs("b", &[(1.0, 10.0), (2.0, 20.0)]);
        assert_eq!(s.xs, vec![1.0, 2.0]);
        assert_eq!(s.ys, vec![10.0, 20.0]);
        assert!(s.validate().is_ok());
    }
}
