// File: crates/plot-core/src/error.rs
// Summary: Domain errors raised while validating a ChartSpec.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// A series' x and y vectors must pair up one-to-one.
    #[error("series '{label}': x has {x_len} points but y has {y_len}")]
    ShapeMismatch {
        label: String,
        x_len: usize,
        y_len: usize,
    },
}
