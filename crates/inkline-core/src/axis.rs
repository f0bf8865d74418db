// File: crates/inkline-core/src/axis.rs
// Summary: Axis model with explicit ticks, plus spine visibility flags.

/// A single labelled tick at a data-space position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }
}

/// Linear axis. Ticks are explicit: an empty list means the axis is
/// unlabelled, which is the normal state for minimalist charts.
#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Vec::new() }
    }

    pub fn with_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }

    /// Axis extent, kept away from zero to keep pixel mapping finite.
    pub fn span(&self) -> f64 {
        (self.max - self.min).abs().max(1e-9)
    }
}

/// Visibility of the four chart border lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spines {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Spines {
    pub const fn all() -> Self {
        Self { top: true, right: true, bottom: true, left: true }
    }
    pub const fn none() -> Self {
        Self { top: false, right: false, bottom: false, left: false }
    }
    pub const fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

impl Default for Spines {
    fn default() -> Self { Self::all() }
}
