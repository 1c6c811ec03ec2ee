// File: crates/timeline-core/src/record.rs
// Summary: Raw input records (field -> value) and the derived timestamp type.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;

/// A single raw cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Null,
}

impl FieldValue {
    /// Numeric coercion used for y values.
    /// Blank text coerces to 0; unparsable text, `Null` and missing cells to NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    0.0
                } else {
                    s.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
            FieldValue::Date(d) => d.and_utc().timestamp_millis() as f64,
            FieldValue::Null => f64::NAN,
        }
    }

    /// `Some` when the value is a finite number (or text holding one).
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Date(d) => write!(f, "{d}"),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self { FieldValue::Text(s.to_string()) }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self { FieldValue::Text(s) }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self { FieldValue::Number(n) }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(d: NaiveDateTime) -> Self { FieldValue::Date(d) }
}

/// One input row. Field order is not significant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> { self.fields.get(field) }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> { self.fields.remove(field) }

    pub fn contains(&self, field: &str) -> bool { self.fields.contains_key(field) }

    pub fn len(&self) -> usize { self.fields.len() }

    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Derived x coordinate of a record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Timestamp {
    Valid(NaiveDateTime),
    /// Never parsed; `raw` keeps the offending text.
    Invalid { raw: String },
}

impl Timestamp {
    pub fn valid(&self) -> Option<NaiveDateTime> {
        match self {
            Timestamp::Valid(t) => Some(*t),
            Timestamp::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool { matches!(self, Timestamp::Valid(_)) }

    /// Ascending order with every invalid timestamp after every valid one.
    /// Invalid timestamps compare equal to each other so a stable sort keeps their input order.
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Timestamp::Valid(a), Timestamp::Valid(b)) => a.cmp(b),
            (Timestamp::Valid(_), Timestamp::Invalid { .. }) => Ordering::Less,
            (Timestamp::Invalid { .. }, Timestamp::Valid(_)) => Ordering::Greater,
            (Timestamp::Invalid { .. }, Timestamp::Invalid { .. }) => Ordering::Equal,
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(t: NaiveDateTime) -> Self { Timestamp::Valid(t) }
}
