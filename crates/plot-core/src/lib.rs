// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the chart spec model and renderer.

pub mod chart;
pub mod error;
pub mod grid;
pub mod overlay;
pub mod series;
pub mod spec;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{ChartRenderer, RenderOptions};
pub use error::SpecError;
pub use overlay::{ReferenceKind, ReferenceOverlay};
pub use series::{Marker, Series};
pub use spec::{ChartSpec, Extents};
pub use text::TextShaper;
pub use theme::Theme;
