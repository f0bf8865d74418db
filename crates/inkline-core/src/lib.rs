// File: crates/inkline-core/src/lib.rs
// Summary: Core library entry point; exports the public API for minimalist chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod annotation;
pub mod types;
pub mod geometry;
pub mod theme;
pub mod text;
pub mod error;
pub mod walk;
pub mod slopegraph;
pub mod sparkline;

pub use chart::{Chart, RenderOptions};
pub use series::{Series, SeriesType, SlopePair};
pub use axis::{Axis, Spines, Tick};
pub use annotation::{Annotation, HAlign};
pub use theme::Theme;
pub use text::TextShaper;
pub use error::RenderError;
pub use walk::gaussian_walk;
pub use slopegraph::Slopegraph;
pub use sparkline::Sparkline;
