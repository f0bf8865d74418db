// File: crates/inkline-core/src/series.rs
// Summary: Series model for trend-line and slope (paired-measurement) data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,   // (x, y) polyline
    Slope,  // one segment per pair between two fixed x positions
}

/// One category measured at two fixed points in time.
#[derive(Clone, Debug, PartialEq)]
pub struct SlopePair {
    pub label: String,
    pub before: f64,
    pub after: f64,
}

impl SlopePair {
    pub fn new(label: impl Into<String>, before: f64, after: f64) -> Self {
        Self { label: label.into(), before, after }
    }

    /// Try to construct a pair, rejecting non-finite measurements.
    pub fn try_new(label: impl Into<String>, before: f64, after: f64) -> Result<Self, &'static str> {
        if !before.is_finite() { return Err("before value not finite"); }
        if !after.is_finite() { return Err("after value not finite"); }
        Ok(Self::new(label, before, after))
    }

    /// Signed change from the first measurement to the second.
    pub fn delta(&self) -> f64 { self.after - self.before }
}

#[derive(Clone)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,    // used by Line
    pub data_slope: Vec<SlopePair>,  // used by Slope
    pub endpoints: (f64, f64),       // x positions every slope pair connects
    pub markers: bool,               // dot at each data point / segment end
    pub mark_last: bool,             // accent dot on the final Line point
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            data_xy: Vec::new(),
            data_slope: Vec::new(),
            endpoints: (0.0, 1.0),
            markers: false,
            mark_last: false,
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    pub fn from_pairs(endpoints: (f64, f64), pairs: Vec<SlopePair>) -> Self {
        Self { data_slope: pairs, endpoints, ..Self::new(SeriesType::Slope) }
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    pub fn with_last_marked(mut self) -> Self {
        self.mark_last = true;
        self
    }

    /// Number of drawable elements: points for Line, segments for Slope.
    pub fn len(&self) -> usize {
        match self.series_type {
            SeriesType::Line => self.data_xy.len(),
            SeriesType::Slope => self.data_slope.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
