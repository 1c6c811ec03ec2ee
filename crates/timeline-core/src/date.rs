// File: crates/timeline-core/src/date.rs
// Summary: Date parsing for the x column (chrono format strings or a custom function).

use std::fmt;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::record::{FieldValue, Timestamp};

/// Default x-column format.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

type ParseFn = Arc<dyn Fn(&str) -> Option<NaiveDateTime> + Send + Sync>;

/// Turns text into a date. Cheap to clone.
#[derive(Clone)]
pub enum DateParser {
    /// chrono format string; date-only formats resolve to midnight.
    Format(String),
    Custom(ParseFn),
}

impl DateParser {
    pub fn format(fmt: impl Into<String>) -> Self { DateParser::Format(fmt.into()) }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<NaiveDateTime> + Send + Sync + 'static,
    {
        DateParser::Custom(Arc::new(f))
    }

    pub fn parse(&self, s: &str) -> Option<NaiveDateTime> {
        match self {
            DateParser::Format(fmt) => {
                let s = s.trim();
                NaiveDateTime::parse_from_str(s, fmt)
                    .ok()
                    .or_else(|| NaiveDate::parse_from_str(s, fmt).ok().and_then(|d| d.and_hms_opt(0, 0, 0)))
            }
            DateParser::Custom(f) => f(s),
        }
    }

    /// Resolve a cell into a timestamp: dates pass through, everything else is parsed as text.
    pub fn resolve(&self, value: Option<&FieldValue>) -> Timestamp {
        let raw = match value {
            Some(FieldValue::Date(d)) => return Timestamp::Valid(*d),
            Some(FieldValue::Text(s)) => s.clone(),
            Some(FieldValue::Number(n)) => n.to_string(),
            Some(FieldValue::Null) | None => return Timestamp::Invalid { raw: String::new() },
        };
        match self.parse(&raw) {
            Some(t) => Timestamp::Valid(t),
            None => Timestamp::Invalid { raw },
        }
    }
}

impl Default for DateParser {
    fn default() -> Self { DateParser::format(DEFAULT_DATE_FORMAT) }
}

impl fmt::Debug for DateParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParser::Format(s) => f.debug_tuple("Format").field(s).finish(),
            DateParser::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
