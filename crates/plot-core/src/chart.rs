// File: crates/plot-core/src/chart.rs
// Summary: ChartRenderer: draws a ChartSpec onto a Skia CPU raster surface.

use anyhow::Result;
use skia_safe as skia;

use crate::grid::{linspace, tick_label};
use crate::overlay::ReferenceOverlay;
use crate::series::{Marker, Series, MARKER_CYCLE};
use crate::spec::{ChartSpec, Extents};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const GRID_COLS: usize = 8;
const GRID_ROWS: usize = 7;
const MARKER_RADIUS: f32 = 4.5;
const DASH_PATTERN: [f32; 2] = [8.0, 6.0];

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to keep output free of font rasterization variance.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Stateless renderer: one set of options, any number of specs.
pub struct ChartRenderer {
    opts: RenderOptions,
    shaper: TextShaper,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new() }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Render to raw RGBA8 pixels; returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, spec: &ChartSpec) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw_to_surface(spec)?;
        let w = self.opts.width;
        let h = self.opts.height;
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read pixels from raster surface");
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, spec: &ChartSpec) -> Result<Vec<u8>> {
        let mut surface = self.draw_to_surface(spec)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        spec: &ChartSpec,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(spec)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_to_surface(&self, spec: &ChartSpec) -> Result<skia::Surface> {
        spec.validate()?;

        let opts = &self.opts;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let plot = PlotRect {
            left: opts.insets.left,
            top: opts.insets.top,
            right: opts.width - opts.insets.right,
            bottom: opts.height - opts.insets.bottom,
        };
        let ext = spec.extents();

        self.draw_grid(canvas, &plot);

        // Data and overlays are confined to the plot rect.
        canvas.save();
        canvas.clip_rect(plot.to_skia(), None, None);
        for (i, s) in spec.series.iter().enumerate() {
            self.draw_series(canvas, &plot, &ext, s, i);
        }
        for o in &spec.overlays {
            self.draw_overlay(canvas, &plot, &ext, o);
        }
        canvas.restore();

        self.draw_axes(canvas, &plot);
        if opts.draw_labels {
            self.draw_tick_labels(canvas, &plot, &ext);
            self.draw_titles(canvas, &plot, spec);
            self.draw_legend(canvas, &plot, spec);
        }
        Ok(surface)
    }

    fn draw_grid(&self, canvas: &skia::Canvas, plot: &PlotRect) {
        let mut paint = skia::Paint::default();
        paint.set_color(self.opts.theme.grid);
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);

        // Grid lines share tick positions so labels sit on them.
        for x in linspace(plot.left as f64, plot.right as f64, GRID_COLS) {
            canvas.draw_line((x as f32, plot.top as f32), (x as f32, plot.bottom as f32), &paint);
        }
        for y in linspace(plot.top as f64, plot.bottom as f64, GRID_ROWS) {
            canvas.draw_line((plot.left as f32, y as f32), (plot.right as f32, y as f32), &paint);
        }
    }

    fn draw_axes(&self, canvas: &skia::Canvas, plot: &PlotRect) {
        let mut paint = skia::Paint::default();
        paint.set_color(self.opts.theme.axis_line);
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.5);

        canvas.draw_line(
            (plot.left as f32, plot.bottom as f32),
            (plot.right as f32, plot.bottom as f32),
            &paint,
        );
        canvas.draw_line(
            (plot.left as f32, plot.top as f32),
            (plot.left as f32, plot.bottom as f32),
            &paint,
        );
    }

    fn draw_series(
        &self,
        canvas: &skia::Canvas,
        plot: &PlotRect,
        ext: &Extents,
        series: &Series,
        index: usize,
    ) {
        let color = self.opts.theme.series_color(index);
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(color);

        let pts: Vec<(f32, f32)> = series
            .points()
            .map(|(x, y)| (plot.sx(ext, x), plot.sy(ext, y)))
            .collect();

        if pts.len() >= 2 {
            let mut path = skia::Path::new();
            path.move_to(pts[0]);
            for &p in &pts[1..] {
                path.line_to(p);
            }
            canvas.draw_path(&path, &stroke);
        }

        // Markers on every sample, also for single-point series.
        let marker = MARKER_CYCLE[index % MARKER_CYCLE.len()];
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color);
        for &(px, py) in &pts {
            draw_marker(canvas, marker, px, py, MARKER_RADIUS, &fill, &stroke);
        }
    }

    fn draw_overlay(
        &self,
        canvas: &skia::Canvas,
        plot: &PlotRect,
        ext: &Extents,
        overlay: &ReferenceOverlay,
    ) {
        let [(x0, y0), (x1, y1)] = overlay.endpoints(ext.x_min, ext.x_max);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.5);
        paint.set_color(self.opts.theme.reference);
        paint.set_path_effect(skia::dash_path_effect::new(&DASH_PATTERN, 0.0));

        let mut path = skia::Path::new();
        path.move_to((plot.sx(ext, x0), plot.sy(ext, y0)));
        path.line_to((plot.sx(ext, x1), plot.sy(ext, y1)));
        canvas.draw_path(&path, &paint);
    }

    fn draw_tick_labels(&self, canvas: &skia::Canvas, plot: &PlotRect, ext: &Extents) {
        let color = self.opts.theme.text;
        let size = 12.0;

        for (px, v) in linspace(plot.left as f64, plot.right as f64, GRID_COLS)
            .into_iter()
            .zip(linspace(ext.x_min, ext.x_max, GRID_COLS))
        {
            let label = tick_label(v);
            let w = self.shaper.measure_width(&label, size, true);
            self.shaper.draw_left(
                canvas,
                &label,
                px as f32 - w * 0.5,
                plot.bottom as f32 + 18.0,
                size,
                color,
                true,
            );
        }

        // Y ticks top-down: screen y grows downward while values grow upward.
        for (py, v) in linspace(plot.top as f64, plot.bottom as f64, GRID_ROWS)
            .into_iter()
            .zip(linspace(ext.y_max, ext.y_min, GRID_ROWS))
        {
            self.shaper.draw_right_aligned(
                canvas,
                &tick_label(v),
                plot.left as f32 - 8.0,
                py as f32 + 4.0,
                size,
                color,
                true,
            );
        }
    }

    fn draw_titles(&self, canvas: &skia::Canvas, plot: &PlotRect, spec: &ChartSpec) {
        let theme = &self.opts.theme;
        let cx = (plot.left + plot.right) as f32 * 0.5;

        self.shaper
            .draw_centered(canvas, &spec.title, cx, plot.top as f32 - 18.0, 17.0, theme.text);
        self.shaper.draw_centered(
            canvas,
            &spec.x_label,
            cx,
            plot.bottom as f32 + 44.0,
            14.0,
            theme.text,
        );

        // Y label runs bottom-to-top along the left margin.
        let cy = (plot.top + plot.bottom) as f32 * 0.5;
        let w = self.shaper.measure_width(&spec.y_label, 14.0, false);
        canvas.save();
        canvas.translate((20.0, cy));
        canvas.rotate(-90.0, None);
        self.shaper
            .draw_left(canvas, &spec.y_label, -w * 0.5, 0.0, 14.0, theme.text, false);
        canvas.restore();
    }

    fn draw_legend(&self, canvas: &skia::Canvas, plot: &PlotRect, spec: &ChartSpec) {
        enum Glyph {
            Series { color: skia::Color, marker: Marker },
            Reference,
        }

        let theme = &self.opts.theme;
        let mut entries: Vec<(&str, Glyph)> = Vec::new();
        for (i, s) in spec.series.iter().enumerate() {
            entries.push((
                s.label.as_str(),
                Glyph::Series {
                    color: theme.series_color(i),
                    marker: MARKER_CYCLE[i % MARKER_CYCLE.len()],
                },
            ));
        }
        for o in &spec.overlays {
            entries.push((o.label.as_str(), Glyph::Reference));
        }
        if entries.is_empty() {
            return;
        }

        let size = 13.0;
        let swatch_w = 26.0f32;
        let pad = 9.0f32;
        let row_h = 19.0f32;
        let text_w = entries
            .iter()
            .map(|(label, _)| self.shaper.measure_width(label, size, false))
            .fold(0.0f32, f32::max);
        let box_w = pad + swatch_w + 8.0 + text_w + pad;
        let box_h = pad * 2.0 + entries.len() as f32 * row_h - 5.0;
        let x0 = plot.right as f32 - box_w - 12.0;
        let y0 = plot.top as f32 + 12.0;

        let rect = skia::Rect::from_xywh(x0, y0, box_w, box_h);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.legend_fill);
        canvas.draw_rect(rect, &fill);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        canvas.draw_rect(rect, &border);

        for (i, (label, glyph)) in entries.iter().enumerate() {
            let cy = y0 + pad + i as f32 * row_h + 4.0;
            let sx0 = x0 + pad;
            let sx1 = sx0 + swatch_w;
            match glyph {
                Glyph::Series { color, marker } => {
                    let mut stroke = skia::Paint::default();
                    stroke.set_anti_alias(true);
                    stroke.set_style(skia::paint::Style::Stroke);
                    stroke.set_stroke_width(2.0);
                    stroke.set_color(*color);
                    canvas.draw_line((sx0, cy), (sx1, cy), &stroke);
                    let mut mfill = skia::Paint::default();
                    mfill.set_anti_alias(true);
                    mfill.set_style(skia::paint::Style::Fill);
                    mfill.set_color(*color);
                    draw_marker(
                        canvas,
                        *marker,
                        (sx0 + sx1) * 0.5,
                        cy,
                        MARKER_RADIUS - 0.5,
                        &mfill,
                        &stroke,
                    );
                }
                Glyph::Reference => {
                    let mut dashed = skia::Paint::default();
                    dashed.set_anti_alias(true);
                    dashed.set_style(skia::paint::Style::Stroke);
                    dashed.set_stroke_width(1.5);
                    dashed.set_color(theme.reference);
                    dashed.set_path_effect(skia::dash_path_effect::new(&DASH_PATTERN, 0.0));
                    canvas.draw_line((sx0, cy), (sx1, cy), &dashed);
                }
            }
            self.shaper
                .draw_left(canvas, label, sx1 + 8.0, cy + 4.0, size, theme.text, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Plot area in screen pixels plus world-to-screen mapping.
struct PlotRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl PlotRect {
    fn sx(&self, ext: &Extents, x: f64) -> f32 {
        let span = ext.x_span().max(1e-9);
        self.left as f32 + ((x - ext.x_min) / span) as f32 * (self.right - self.left) as f32
    }

    fn sy(&self, ext: &Extents, y: f64) -> f32 {
        let span = ext.y_span().max(1e-9);
        self.bottom as f32 - ((y - ext.y_min) / span) as f32 * (self.bottom - self.top) as f32
    }

    fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(
            self.left as f32,
            self.top as f32,
            self.right as f32,
            self.bottom as f32,
        )
    }
}

fn draw_marker(
    canvas: &skia::Canvas,
    marker: Marker,
    x: f32,
    y: f32,
    r: f32,
    fill: &skia::Paint,
    stroke: &skia::Paint,
) {
    match marker {
        Marker::Circle => {
            canvas.draw_circle((x, y), r, fill);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(x - r, y - r, x + r, y + r), fill);
        }
        Marker::TriangleUp => {
            let mut path = skia::Path::new();
            path.move_to((x, y - r));
            path.line_to((x - r, y + r));
            path.line_to((x + r, y + r));
            path.close();
            canvas.draw_path(&path, fill);
        }
        Marker::Cross => {
            canvas.draw_line((x - r, y - r), (x + r, y + r), stroke);
            canvas.draw_line((x - r, y + r), (x + r, y - r), stroke);
        }
    }
}
