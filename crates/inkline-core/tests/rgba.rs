// File: crates/inkline-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use inkline_core::{Chart, RenderOptions, Series, SeriesType};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Light theme background in the top-left pixel (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn theme_lookup_changes_background() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = inkline_core::theme::find("dark");
    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);

    // unknown names fall back to light
    assert_eq!(inkline_core::theme::find("no-such-theme").name, "light");
}
