// File: crates/inkline-core/tests/sparkline.rs
// Purpose: Walk determinism and structural checks on the sparkline recipe.

use inkline_core::walk::gaussian_walk;
use inkline_core::Sparkline;

#[test]
fn walk_is_deterministic() {
    let a = gaussian_walk(42, 50);
    let b = gaussian_walk(42, 50);
    assert_eq!(a.len(), 50);
    assert_eq!(a, b);
    assert_ne!(gaussian_walk(43, 50), a);
}

#[test]
fn highlight_matches_last_element() {
    let values = gaussian_walk(42, 50);
    let last = *values.last().unwrap();

    let spark = Sparkline::new(values);
    assert_eq!(spark.last(), Some(last));

    let chart = spark.to_chart();
    assert_eq!(chart.series.len(), 1);
    let s = &chart.series[0];
    assert!(s.mark_last);
    assert_eq!(s.data_xy.len(), 50);
    assert_eq!(s.data_xy.last().unwrap().1, last);

    assert_eq!(chart.annotations.len(), 1);
    let a = &chart.annotations[0];
    assert_eq!(a.text, format!("{last:.1}"));
    assert!(a.accent);
    assert_eq!(a.y, last);
}

#[test]
fn bare_chart_has_no_decoration() {
    let chart = Sparkline::new(gaussian_walk(42, 50)).to_chart();
    assert!(!chart.spines.any());
    assert!(chart.x_axis.ticks.is_empty());
    assert!(chart.y_axis.ticks.is_empty());
    assert!(chart.title.is_none());
    assert!(chart.x_axis.label.is_empty());
    assert!(chart.y_axis.label.is_empty());
}

#[test]
fn empty_series_still_renders() {
    let spark = Sparkline::new(Vec::new());
    let chart = spark.to_chart();
    assert!(chart.annotations.is_empty());
    let bytes = chart
        .render_to_png_bytes(&spark.render_options())
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
