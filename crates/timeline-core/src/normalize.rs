// File: crates/timeline-core/src/normalize.rs
// Summary: Record -> sorted derived records -> one filtered series per y column.

use tracing::{debug, trace, warn};

use crate::config::{InvalidDatePolicy, TimelineConfig};
use crate::date::DateParser;
use crate::error::{Result, TimelineError};
use crate::record::{Record, Timestamp};
use crate::series::{DerivedRecord, Normalized, Point, Series};

/// Field mapping snapshot taken from a `TimelineConfig`.
#[derive(Clone, Debug)]
pub struct SeriesNormalizer {
    x: String,
    y: Vec<String>,
    fill: Option<String>,
    parser: DateParser,
    invalid_dates: InvalidDatePolicy,
}

impl SeriesNormalizer {
    /// Fails with `MissingField` when `x` or the y/series list is unset.
    pub fn configure(config: &TimelineConfig) -> Result<Self> {
        let x = config.x.clone().ok_or(TimelineError::MissingField("x"))?;
        let y = config.y_columns().ok_or(TimelineError::MissingField("y"))?.to_vec();
        Ok(Self {
            x,
            y,
            fill: config.fill.clone(),
            parser: config.date_parser.clone(),
            invalid_dates: config.invalid_dates,
        })
    }

    pub fn x_field(&self) -> &str { &self.x }

    pub fn y_fields(&self) -> &[String] { &self.y }

    /// Build the series for `records`. Input records are never modified.
    pub fn ingest(&self, records: &[Record]) -> Result<Normalized> {
        let mut derived = Vec::with_capacity(records.len());
        for rec in records {
            if let Some(d) = self.derive(rec)? {
                derived.push(d);
            }
        }
        // stable: ties keep input order
        derived.sort_by(|a, b| a.x.chronological_cmp(&b.x));

        let series: Vec<Series> = self.y.iter().map(|name| project(name, &derived)).collect();
        debug!(
            records = records.len(),
            kept = derived.len(),
            series = series.len(),
            points = series.iter().map(Series::len).sum::<usize>(),
            "ingested records"
        );
        Ok(Normalized { records: derived, series })
    }

    fn derive(&self, rec: &Record) -> Result<Option<DerivedRecord>> {
        let mut fields = rec.clone();
        let color = self.fill.as_deref().and_then(|f| fields.get(f)).cloned();
        let x = self.parser.resolve(fields.remove(&self.x).as_ref());
        if let Timestamp::Invalid { raw } = &x {
            match self.invalid_dates {
                InvalidDatePolicy::Propagate => {}
                InvalidDatePolicy::Reject => {
                    return Err(TimelineError::ParseFailure { column: self.x.clone(), value: raw.clone() });
                }
                InvalidDatePolicy::Drop => {
                    warn!(column = %self.x, value = %raw, "dropping record with unparsable date");
                    return Ok(None);
                }
            }
        }
        Ok(Some(DerivedRecord { x, color, fields }))
    }
}

fn project(name: &str, records: &[DerivedRecord]) -> Series {
    let mut series = Series::new(name);
    for (row, rec) in records.iter().enumerate() {
        let y = rec.fields.get(name).map_or(f64::NAN, |v| v.to_number());
        if !y.is_finite() {
            trace!(series = name, row, "dropping non-numeric point");
            continue;
        }
        series.values.push(Point { x: rec.x.clone(), y, row });
    }
    series
}
