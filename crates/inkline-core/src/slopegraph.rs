// File: crates/inkline-core/src/slopegraph.rs
// Summary: Slopegraph recipe; change between two time points, one segment per category.

use crate::annotation::{Annotation, HAlign};
use crate::axis::{Axis, Spines, Tick};
use crate::chart::{Chart, RenderOptions};
use crate::series::{Series, SlopePair};
use crate::types::Insets;

/// Slopegraph: values are written at both segment ends instead of on a y
/// axis, so the chart keeps only two x ticks and no spines.
pub struct Slopegraph {
    pub title: String,
    pub periods: (f64, f64),
    pub entries: Vec<SlopePair>,
}

impl Slopegraph {
    pub fn new(title: impl Into<String>, periods: (f64, f64)) -> Self {
        Self { title: title.into(), periods, entries: Vec::new() }
    }

    pub fn push(&mut self, label: impl Into<String>, before: f64, after: f64) {
        self.entries.push(SlopePair::new(label, before, after));
    }

    /// Gap between a period and its endpoint labels, in x units.
    fn label_pad(&self) -> f64 {
        (self.periods.1 - self.periods.0).abs().max(1e-9) * 0.1
    }

    pub fn to_chart(&self) -> Chart {
        let (p0, p1) = self.periods;
        let pad = self.label_pad();

        let mut chart = Chart::new();
        chart.title = Some(self.title.clone());
        chart.spines = Spines::none();
        chart.add_series(Series::from_pairs((p0, p1), self.entries.clone()).with_markers());

        for e in &self.entries {
            chart.annotate(Annotation::new(
                p0 - pad,
                e.before,
                format!("{} {}", e.label, fmt_value(e.before)),
                HAlign::Right,
            ));
            chart.annotate(Annotation::new(
                p1 + pad,
                e.after,
                format!("{} {}", fmt_value(e.after), e.label),
                HAlign::Left,
            ));
        }

        chart.autoscale_axes(0.05);
        let (y_min, y_max) = (chart.y_axis.min, chart.y_axis.max);
        chart.y_axis = Axis::new("", y_min, y_max);
        // x range reserves room for the endpoint labels on both sides
        chart.x_axis = Axis::new("", p0 - 3.0 * pad, p1 + 3.0 * pad).with_ticks(vec![
            Tick::new(p0, fmt_value(p0)),
            Tick::new(p1, fmt_value(p1)),
        ]);
        chart
    }

    /// Tall portrait surface with wide horizontal margins for the labels.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: 720,
            height: 960,
            insets: Insets::new(150, 150, 56, 48),
            ..RenderOptions::default()
        }
    }
}

/// Whole numbers print without a decimal point, everything else with one.
fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}
