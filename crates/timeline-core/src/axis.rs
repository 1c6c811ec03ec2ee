// File: crates/timeline-core/src/axis.rs
// Summary: Axis configuration and the tick/label layout handed to drawing surfaces.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Time,
    Linear,
    Log10,
}

/// Per-axis options.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    pub scale: ScaleKind,
    /// Force the lower bound of the domain to zero (y axis only).
    pub min_zero: bool,
    /// Round the domain outward to tick-friendly values.
    pub nice: bool,
    pub tick_count: usize,
    pub label: Option<String>,
}

impl AxisConfig {
    pub fn new(scale: ScaleKind) -> Self {
        Self { scale, min_zero: false, nice: false, tick_count: 5, label: None }
    }

    pub fn default_x() -> Self { Self::new(ScaleKind::Time) }

    pub fn default_y() -> Self { Self::new(ScaleKind::Linear) }

    pub fn min_zero(mut self, on: bool) -> Self {
        self.min_zero = on;
        self
    }

    pub fn nice(mut self, on: bool) -> Self {
        self.nice = on;
        self
    }

    pub fn ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis, in plot coordinates.
    pub px: f32,
    pub label: String,
}

/// Axis geometry in plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    pub side: AxisSide,
    pub ticks: Vec<Tick>,
    pub title: Option<String>,
}
