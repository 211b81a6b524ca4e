// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (surface size, plot margins).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Margins around the plot area, in pixels.
/// Contract: all fields are non-negative and smaller than the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> i32 {
        self.left + self.right
    }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> i32 {
        self.top + self.bottom
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Room for y tick labels on the left, title above, x label below.
        Self::new(78, 24, 48, 64)
    }
}
