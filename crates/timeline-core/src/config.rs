// File: crates/timeline-core/src/config.rs
// Summary: Immutable, consuming builder for timeline field mappings and presentation options.

use crate::axis::AxisConfig;
use crate::color::ColorSource;
use crate::date::DateParser;
use crate::tooltip::TipSpec;

/// Interpolation the drawing surface should use between points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    #[default]
    Basis,
    Cardinal,
    Linear,
}

/// What to do with a record whose x value does not parse as a date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidDatePolicy {
    /// Keep the record with an invalid timestamp; domain resolution rejects it later.
    #[default]
    Propagate,
    /// Fail `ingest` with `ParseFailure`.
    Reject,
    /// Drop the record and carry on.
    Drop,
}

/// Timeline configuration. Every setter consumes and returns the value.
#[derive(Clone, Debug)]
pub struct TimelineConfig {
    pub x: Option<String>,
    pub y: Option<Vec<String>>,
    pub series: Option<Vec<String>>,
    pub fill: Option<String>,
    pub colors: Option<ColorSource>,
    pub date_parser: DateParser,
    pub curve: Curve,
    pub tip: TipSpec,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub invalid_dates: InvalidDatePolicy,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            series: None,
            fill: None,
            colors: None,
            date_parser: DateParser::default(),
            curve: Curve::default(),
            tip: TipSpec::default(),
            x_axis: AxisConfig::default_x(),
            y_axis: AxisConfig::default_y(),
            invalid_dates: InvalidDatePolicy::default(),
        }
    }
}

impl TimelineConfig {
    pub fn new() -> Self { Self::default() }

    pub fn x(mut self, field: impl Into<String>) -> Self {
        self.x = Some(field.into());
        self
    }

    /// Single y column.
    pub fn y(mut self, field: impl Into<String>) -> Self {
        self.y = Some(vec![field.into()]);
        self
    }

    pub fn y_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.y = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Series columns; used only when no `y` mapping is set.
    pub fn series<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn fill(mut self, field: impl Into<String>) -> Self {
        self.fill = Some(field.into());
        self
    }

    pub fn colors(mut self, colors: ColorSource) -> Self {
        self.colors = Some(colors);
        self
    }

    /// chrono format string for the x column.
    pub fn parse_date(mut self, format: impl Into<String>) -> Self {
        self.date_parser = DateParser::format(format);
        self
    }

    pub fn date_parser(mut self, parser: DateParser) -> Self {
        self.date_parser = parser;
        self
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn tip(mut self, tip: TipSpec) -> Self {
        self.tip = tip;
        self
    }

    pub fn x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    pub fn y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    pub fn invalid_dates(mut self, policy: InvalidDatePolicy) -> Self {
        self.invalid_dates = policy;
        self
    }

    /// The y columns in effect: `y` wins over `series`.
    pub fn y_columns(&self) -> Option<&[String]> {
        self.y.as_deref().or(self.series.as_deref()).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_takes_precedence_over_series() {
        let c = TimelineConfig::new().series(["s1", "s2"]).y("a");
        assert_eq!(c.y_columns(), Some(&["a".to_string()][..]));
        let c = TimelineConfig::new().series(["s1", "s2"]);
        assert_eq!(c.y_columns().map(|v| v.len()), Some(2));
    }

    #[test]
    fn empty_y_list_counts_as_missing() {
        let c = TimelineConfig::new().y_fields(Vec::<String>::new());
        assert!(c.y_columns().is_none());
    }

    #[test]
    fn builder_values_are_independent() {
        let base = TimelineConfig::new().x("date");
        let a = base.clone().y("a");
        let b = base.y("b");
        assert_eq!(a.y_columns().unwrap()[0], "a");
        assert_eq!(b.y_columns().unwrap()[0], "b");
    }
}
