// File: crates/timeline-core/src/tooltip.rs
// Summary: Hover tooltip content for a single point.

use std::fmt;

use crate::format::{format_date, NumberFormat};
use crate::record::{FieldValue, Timestamp};
use crate::series::{DerivedRecord, Point};

/// What a tooltip shows besides the series name and value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TipSpec {
    /// Extra record fields, in display order.
    pub fields: Vec<String>,
    /// Show the point's date as the first row.
    pub show_date: bool,
}

impl Default for TipSpec {
    fn default() -> Self { Self { fields: Vec::new(), show_date: true } }
}

impl TipSpec {
    pub fn new() -> Self { Self::default() }

    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn show_date(mut self, on: bool) -> Self {
        self.show_date = on;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipRow {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    /// Series name.
    pub title: String,
    pub rows: Vec<TooltipRow>,
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        for row in &self.rows {
            write!(f, "\n{}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}

/// Numbers go through `number`; anything else is shown as-is.
pub fn display_value(value: &FieldValue, number: &NumberFormat) -> String {
    match value.as_finite() {
        Some(n) => number.format(n),
        None => value.to_string(),
    }
}

pub(crate) fn build(
    spec: &TipSpec,
    series_name: &str,
    x_label: &str,
    point: &Point,
    record: &DerivedRecord,
    number: &NumberFormat,
    date_format: &str,
) -> Tooltip {
    let mut rows = Vec::with_capacity(spec.fields.len() + 2);
    if spec.show_date {
        let value = match &point.x {
            Timestamp::Valid(t) => format_date(*t, date_format),
            Timestamp::Invalid { raw } => raw.clone(),
        };
        rows.push(TooltipRow { label: x_label.to_string(), value });
    }
    rows.push(TooltipRow { label: series_name.to_string(), value: number.format(point.y) });
    for field in &spec.fields {
        let value = record.fields.get(field).map(|v| display_value(v, number)).unwrap_or_default();
        rows.push(TooltipRow { label: field.clone(), value });
    }
    Tooltip { title: series_name.to_string(), rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_formatted_text_is_literal() {
        let f = NumberFormat::default();
        assert_eq!(display_value(&FieldValue::from("1234.5"), &f), "1,234.5");
        assert_eq!(display_value(&FieldValue::Number(3.0), &f), "3");
        assert_eq!(display_value(&FieldValue::from("n/a"), &f), "n/a");
        assert_eq!(display_value(&FieldValue::from(" 007 spy"), &f), " 007 spy");
    }
}
