// File: crates/timeline-core/src/series.rs
// Summary: Derived records, points and named series produced by the normalizer.

use crate::record::{FieldValue, Record, Timestamp};

/// An input record after x resolution. `fields` no longer holds the x column.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedRecord {
    pub x: Timestamp,
    /// Value of the configured fill column, if any.
    pub color: Option<FieldValue>,
    pub fields: Record,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: Timestamp,
    /// Always finite.
    pub y: f64,
    /// Index of the source row in `Normalized::records`.
    pub row: usize,
}

/// One named polyline; one per configured y field.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), values: Vec::new() }
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// `(x, y)` pairs for points with a valid x.
    pub fn xy(&self) -> impl Iterator<Item = (chrono::NaiveDateTime, f64)> + '_ {
        self.values.iter().filter_map(|p| p.x.valid().map(|t| (t, p.y)))
    }
}

/// Output of one `ingest` call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Normalized {
    /// Sorted by ascending x.
    pub records: Vec<DerivedRecord>,
    /// In configuration order.
    pub series: Vec<Series>,
}
