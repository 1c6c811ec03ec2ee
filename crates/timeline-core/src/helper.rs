// File: crates/timeline-core/src/helper.rs
// Summary: Host-side utilities shared by chart instances: plot size, formatting, scale construction.

use chrono::NaiveDateTime;

use crate::axis::ScaleKind;
use crate::domain::{x_scale_stops, AxisDomain};
use crate::error::{Result, TimelineError};
use crate::format::{format_date, NumberFormat, DEFAULT_LABEL_DATE_FORMAT};
use crate::scale::{ScaleParams, TimeScale, ValueScale};
use crate::types::{HEIGHT, WIDTH};

/// Shared, read-only chart utilities. Charts hold it behind an `Arc`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartHelper {
    /// Plot area width in pixels.
    pub width: f32,
    /// Plot area height in pixels.
    pub height: f32,
    pub number_format: NumberFormat,
    pub date_format: String,
}

impl Default for ChartHelper {
    fn default() -> Self { Self::new(WIDTH as f32, HEIGHT as f32) }
}

impl ChartHelper {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            number_format: NumberFormat::default(),
            date_format: DEFAULT_LABEL_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_number_format(mut self, f: NumberFormat) -> Self {
        self.number_format = f;
        self
    }

    pub fn with_date_format(mut self, f: impl Into<String>) -> Self {
        self.date_format = f.into();
        self
    }

    pub fn format_number(&self, v: f64) -> String { self.number_format.format(v) }

    pub fn format_date(&self, t: NaiveDateTime) -> String { format_date(t, &self.date_format) }

    /// Time scale over `domain`, widened when it collapses to one instant.
    pub fn time_scale(&self, params: &ScaleParams, domain: AxisDomain<NaiveDateTime>) -> Result<TimeScale> {
        if params.kind != ScaleKind::Time {
            return Err(TimelineError::UnsupportedScale { axis: "x", kind: params.kind });
        }
        let (stops, range) = x_scale_stops(domain, params.range.0, params.range.1);
        TimeScale::new(stops, range)
    }

    /// Linear or log10 value scale; `range` is `(bottom, top)` in pixels.
    /// A linear scale with `min_zero` always includes zero.
    pub fn value_scale(&self, params: &ScaleParams, domain: AxisDomain<f64>) -> Result<ValueScale> {
        let (bottom, top) = params.range;
        match params.kind {
            ScaleKind::Linear if params.min_zero => {
                Ok(ValueScale::new_linear(top, bottom, domain.min.min(0.0), domain.max.max(0.0)))
            }
            ScaleKind::Linear => Ok(ValueScale::new_linear(top, bottom, domain.min, domain.max)),
            ScaleKind::Log10 => Ok(ValueScale::new_log10(top, bottom, domain.min, domain.max)),
            ScaleKind::Time => Err(TimelineError::UnsupportedScale { axis: "y", kind: params.kind }),
        }
    }
}
