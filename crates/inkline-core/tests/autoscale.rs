// File: crates/inkline-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types.

use inkline_core::{Chart, Series, SeriesType, SlopePair};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    // XY series
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]));

    // Slope pairs between x = 2 and x = 8
    chart.add_series(Series::from_pairs(
        (2.0, 8.0),
        vec![SlopePair::new("a", 0.5, 6.0), SlopePair::new("b", 2.0, 4.0)],
    ));

    chart.autoscale_axes(0.0);

    // X spans 0..5 from the line vs 2..8 from the slope endpoints => ~0..8
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 8.0 - 1e-9);

    // Y min uses the slope low (0.5) vs line min 1.0 => expect <= 0.5
    assert!(chart.y_axis.min <= 0.5 + 1e-9);
    // Y max uses the slope high 6.0 or line 3.0 => expect >= 6.0
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_adds_margin() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (10.0, 10.0)]));
    chart.autoscale_axes(0.1);
    assert!((chart.x_axis.min - -1.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 11.0).abs() < 1e-9);
    assert!((chart.y_axis.min - -1.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 11.0).abs() < 1e-9);
}

#[test]
fn autoscale_empty_chart_falls_back() {
    let mut chart = Chart::new();
    chart.autoscale_axes(0.05);
    assert!(chart.x_axis.min.is_finite());
    assert!(chart.x_axis.max > chart.x_axis.min);
    assert!(chart.y_axis.min.is_finite());
    assert!(chart.y_axis.max > chart.y_axis.min);
}
