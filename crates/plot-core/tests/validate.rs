// File: crates/plot-core/tests/validate.rs
// Purpose: Shape validation: mismatched x/y vectors must fail before drawing.

use plot_core::{ChartRenderer, ChartSpec, RenderOptions, Series, SpecError};

#[test]
fn shape_mismatch_fails_render() {
    let spec = ChartSpec::new("Bad", "X", "Y")
        .with_series(Series::new("α = 0", vec![3.0, 10.0, 100.0], vec![2.0, 12.0]));

    let renderer = ChartRenderer::new(RenderOptions::default());
    let err = renderer
        .render_to_png_bytes(&spec)
        .expect_err("mismatched vectors must not render");

    let spec_err = err.downcast_ref::<SpecError>().expect("domain error expected");
    assert_eq!(
        *spec_err,
        SpecError::ShapeMismatch { label: "α = 0".into(), x_len: 3, y_len: 2 }
    );
}

#[test]
fn mismatch_is_reported_for_the_offending_series() {
    // First series is fine; second one is short by one sample.
    let spec = ChartSpec::new("Bad", "X", "Y")
        .with_series(Series::new("ok", vec![1.0, 2.0], vec![1.0, 2.0]))
        .with_series(Series::new("short", vec![1.0, 2.0, 3.0], vec![1.0, 2.0]));

    match spec.validate() {
        Err(SpecError::ShapeMismatch { label, x_len, y_len }) => {
            assert_eq!(label, "short");
            assert_eq!((x_len, y_len), (3, 2));
        }
        other => panic!("expected ShapeMismatch, got {other:?}"),
    }
}

#[test]
fn equal_lengths_pass_validation() {
    let spec = ChartSpec::new("Good", "X", "Y")
        .with_series(Series::new("a", vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]));
    assert!(spec.validate().is_ok());
}
