// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors, with a series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub text: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    /// Reference/threshold overlays (dashed red in both presets).
    pub reference: skia::Color,
    /// Cycled across series in insertion order.
    pub series: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 222, 222, 228),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            text: skia::Color::from_argb(255, 20, 20, 30),
            legend_fill: skia::Color::from_argb(235, 250, 250, 252),
            legend_border: skia::Color::from_argb(255, 170, 170, 180),
            reference: skia::Color::from_argb(255, 214, 39, 40),
            series: [
                skia::Color::from_argb(255, 31, 119, 180),
                skia::Color::from_argb(255, 255, 127, 14),
                skia::Color::from_argb(255, 44, 160, 44),
                skia::Color::from_argb(255, 148, 103, 189),
                skia::Color::from_argb(255, 140, 86, 75),
                skia::Color::from_argb(255, 23, 190, 207),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            text: skia::Color::from_argb(255, 235, 235, 245),
            legend_fill: skia::Color::from_argb(225, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            reference: skia::Color::from_argb(255, 235, 80, 80),
            series: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 160, 64),
                skia::Color::from_argb(255, 80, 210, 130),
                skia::Color::from_argb(255, 190, 140, 255),
                skia::Color::from_argb(255, 210, 160, 120),
                skia::Color::from_argb(255, 80, 210, 220),
            ],
        }
    }

    pub fn series_color(&self, index: usize) -> skia::Color {
        self.series[index % self.series.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}
