// File: crates/plot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use plot_core::{ChartRenderer, ChartSpec, RenderOptions, Series, Theme};

#[test]
fn render_rgba8_buffer() {
    let spec = ChartSpec::new("RGBA", "X", "Y")
        .with_series(Series::new("diag", vec![0.0, 4.0], vec![0.0, 4.0]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts.theme = Theme::dark();
    let renderer = ChartRenderer::new(opts);

    let (px, w, h, stride) = renderer.render_to_rgba8(&spec).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is untouched background (RGBA)
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}
