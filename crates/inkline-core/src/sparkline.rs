// File: crates/inkline-core/src/sparkline.rs
// Summary: Sparkline recipe; a bare trend line with the final value highlighted.

use crate::annotation::{Annotation, HAlign};
use crate::axis::{Axis, Spines};
use crate::chart::{Chart, RenderOptions};
use crate::series::{Series, SeriesType};
use crate::types::Insets;

pub struct Sparkline {
    pub values: Vec<f64>,
}

impl Sparkline {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The highlighted value, i.e. the last element.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn to_chart(&self) -> Chart {
        let data: Vec<(f64, f64)> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();

        let mut chart = Chart::new();
        chart.spines = Spines::none();
        chart.add_series(Series::with_data(SeriesType::Line, data).with_last_marked());

        if let Some(last) = self.last() {
            // Value label sits one step past the final point
            let x = self.values.len() as f64;
            chart.annotate(
                Annotation::new(x, last, format!("{last:.1}"), HAlign::Left)
                    .accent()
                    .numeric()
                    .with_size(11.0),
            );
        }

        chart.autoscale_axes(0.05);
        let (x_min, x_max) = (chart.x_axis.min, chart.x_axis.max);
        let (y_min, y_max) = (chart.y_axis.min, chart.y_axis.max);
        chart.x_axis = Axis::new("", x_min, x_max);
        chart.y_axis = Axis::new("", y_min, y_max);
        chart
    }

    /// Small, wide-and-short surface; room on the right for the value label.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: 480,
            height: 120,
            insets: Insets::new(8, 64, 8, 8),
            ..RenderOptions::default()
        }
    }
}
