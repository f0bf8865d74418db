// File: crates/inkline-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::annotation::{Annotation, HAlign};
use crate::axis::{Axis, Spines};
use crate::error::RenderError;
use crate::geometry::RectI32;
use crate::series::{Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Suppress all text output. Font fallback differs across platforms, so
    /// deterministic renders (snapshots, benches) turn this off.
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

pub struct Chart {
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub spines: Spines,
    pub title: Option<String>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            annotations: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            spines: Spines::default(),
            title: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Grow both axes to cover every data point, with `margin` as a fraction
    /// of each span added on both ends. Falls back to unit ranges when the
    /// chart holds no finite data.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            match s.series_type {
                SeriesType::Line => {
                    for &(x, y) in &s.data_xy {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                }
                SeriesType::Slope => {
                    if s.data_slope.is_empty() { continue; }
                    x_min = x_min.min(s.endpoints.0);
                    x_max = x_max.max(s.endpoints.1);
                    for p in &s.data_slope {
                        y_min = y_min.min(p.before.min(p.after));
                        y_max = y_max.max(p.before.max(p.after));
                    }
                }
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            x_min = 0.0; x_max = 1.0;
            y_min = 0.0; y_max = 1.0;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        self.x_axis.min = x_min - xm;
        self.x_axis.max = x_max + xm;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.render_to_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart and return raw RGBA8 pixels as (buffer, width, height, stride).
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = self.render_to_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Readback);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn render_to_surface(&self, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        draw_spines(canvas, &plot, &self.spines, theme);
        draw_ticks(canvas, &plot, &self.x_axis, &self.y_axis, shaper.as_ref(), theme);

        for s in &self.series {
            match s.series_type {
                SeriesType::Line => {
                    draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s, theme)
                }
                SeriesType::Slope => {
                    draw_slope_series(canvas, &plot, &self.x_axis, &self.y_axis, s, theme)
                }
            }
        }

        if let Some(shaper) = shaper.as_ref() {
            for a in &self.annotations {
                draw_annotation(canvas, &plot, &self.x_axis, &self.y_axis, a, shaper, theme);
            }
            if let Some(title) = &self.title {
                // Title sits top-left, flush with the plot area
                let y = (opts.insets.top as f32 * 0.5).max(12.0);
                shaper.draw_aligned(canvas, title, plot.left as f32, y, 16.0, theme.title, HAlign::Left, false);
            }
            draw_axis_names(canvas, &plot, &self.x_axis, &self.y_axis, shaper, theme);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_spines(canvas: &skia::Canvas, plot: &RectI32, spines: &Spines, theme: &Theme) {
    if !spines.any() {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_color(theme.ink);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    if spines.top { canvas.draw_line((l, t), (r, t), &paint); }
    if spines.right { canvas.draw_line((r, t), (r, b), &paint); }
    if spines.bottom { canvas.draw_line((l, b), (r, b), &paint); }
    if spines.left { canvas.draw_line((l, t), (l, b), &paint); }
}

fn draw_ticks(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    shaper: Option<&TextShaper>,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.muted);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let sx = |x: f64| -> f32 {
        plot.left as f32 + ((x - x_axis.min) / x_axis.span()) as f32 * plot.width() as f32
    };
    let sy = |y: f64| -> f32 {
        plot.bottom as f32 - ((y - y_axis.min) / y_axis.span()) as f32 * plot.height() as f32
    };

    for tick in &x_axis.ticks {
        let x = sx(tick.value);
        let b = plot.bottom as f32;
        canvas.draw_line((x, b), (x, b + 4.0), &paint);
        if let Some(shaper) = shaper {
            shaper.draw_aligned(canvas, &tick.label, x, b + 16.0, 12.0, theme.muted, HAlign::Center, true);
        }
    }
    for tick in &y_axis.ticks {
        let y = sy(tick.value);
        let l = plot.left as f32;
        canvas.draw_line((l - 4.0, y), (l, y), &paint);
        if let Some(shaper) = shaper {
            shaper.draw_aligned(canvas, &tick.label, l - 8.0, y, 12.0, theme.muted, HAlign::Right, true);
        }
    }
}

fn draw_axis_names(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    shaper: &TextShaper,
    theme: &Theme,
) {
    if !x_axis.label.is_empty() {
        shaper.draw_aligned(
            canvas,
            &x_axis.label,
            plot.right as f32,
            plot.bottom as f32 + 30.0,
            13.0,
            theme.muted,
            HAlign::Right,
            false,
        );
    }
    if !y_axis.label.is_empty() {
        shaper.draw_aligned(
            canvas,
            &y_axis.label,
            plot.left as f32,
            plot.top as f32 - 12.0,
            13.0,
            theme.muted,
            HAlign::Left,
            false,
        );
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    let sx = |x: f64| -> f32 {
        plot.left as f32 + ((x - x_axis.min) / x_axis.span()) as f32 * plot.width() as f32
    };
    let sy = |y: f64| -> f32 {
        plot.bottom as f32 - ((y - y_axis.min) / y_axis.span()) as f32 * plot.height() as f32
    };

    if data.len() >= 2 {
        let mut builder = skia::PathBuilder::new();
        let (x0, y0) = data[0];
        builder.move_to((sx(x0), sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            builder.line_to((sx(x), sy(y)));
        }
        let path = builder.detach();

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.5);
        stroke.set_color(theme.line_stroke);
        canvas.draw_path(&path, &stroke);
    }

    if series.markers {
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);
        dot.set_color(theme.line_stroke);
        for &(x, y) in data {
            canvas.draw_circle((sx(x), sy(y)), 3.0, &dot);
        }
    }

    if series.mark_last {
        if let Some(&(x, y)) = data.last() {
            let mut dot = skia::Paint::default();
            dot.set_anti_alias(true);
            dot.set_style(skia::paint::Style::Fill);
            dot.set_color(theme.accent);
            canvas.draw_circle((sx(x), sy(y)), 4.0, &dot);
        }
    }
}

fn draw_slope_series(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    theme: &Theme,
) {
    if series.data_slope.is_empty() {
        return;
    }

    let sx = |x: f64| -> f32 {
        plot.left as f32 + ((x - x_axis.min) / x_axis.span()) as f32 * plot.width() as f32
    };
    let sy = |y: f64| -> f32 {
        plot.bottom as f32 - ((y - y_axis.min) / y_axis.span()) as f32 * plot.height() as f32
    };

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(theme.ink);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(theme.ink);

    let x0 = sx(series.endpoints.0);
    let x1 = sx(series.endpoints.1);
    for pair in &series.data_slope {
        let y0 = sy(pair.before);
        let y1 = sy(pair.after);
        canvas.draw_line((x0, y0), (x1, y1), &stroke);
        if series.markers {
            canvas.draw_circle((x0, y0), 3.5, &dot);
            canvas.draw_circle((x1, y1), 3.5, &dot);
        }
    }
}

fn draw_annotation(
    canvas: &skia::Canvas,
    plot: &RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    a: &Annotation,
    shaper: &TextShaper,
    theme: &Theme,
) {
    let x = plot.left as f32 + ((a.x - x_axis.min) / x_axis.span()) as f32 * plot.width() as f32;
    let y = plot.bottom as f32 - ((a.y - y_axis.min) / y_axis.span()) as f32 * plot.height() as f32;
    let color = if a.accent { theme.accent } else { theme.ink };
    shaper.draw_aligned(canvas, &a.text, x, y, a.size, color, a.align, a.numeric);
}
