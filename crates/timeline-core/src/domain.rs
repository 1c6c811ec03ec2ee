// File: crates/timeline-core/src/domain.rs
// Summary: Axis domain derivation from normalized series, including the single-instant x case.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::error::{Result, TimelineError};
use crate::record::Timestamp;
use crate::series::Series;

/// Closed `[min, max]` interval with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisDomain<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> AxisDomain<T> {
    pub fn is_degenerate(&self) -> bool { self.min == self.max }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domains {
    pub x: AxisDomain<NaiveDateTime>,
    pub y: AxisDomain<f64>,
}

/// Extent of every point across every series. With `min_zero` the y domain
/// is stretched to include zero on whichever side the data lies.
///
/// Fails with `EmptyDomain` when there are no points, and with `InvalidDomain`
/// when any point carries an x that never parsed as a date.
pub fn resolve_domains(series: &[Series], min_zero: bool) -> Result<Domains> {
    let mut x: Option<AxisDomain<NaiveDateTime>> = None;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for p in series.iter().flat_map(|s| s.values.iter()) {
        let t = match &p.x {
            Timestamp::Valid(t) => *t,
            Timestamp::Invalid { raw } => return Err(TimelineError::InvalidDomain { raw: raw.clone() }),
        };
        x = Some(match x {
            None => AxisDomain { min: t, max: t },
            Some(d) => AxisDomain { min: d.min.min(t), max: d.max.max(t) },
        });
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    let x = x.ok_or(TimelineError::EmptyDomain)?;
    let (y_min, y_max) = if min_zero { (y_min.min(0.0), y_max.max(0.0)) } else { (y_min, y_max) };
    debug!(x_min = %x.min, x_max = %x.max, y_min, y_max, min_zero, "resolved domains");
    Ok(Domains { x, y: AxisDomain { min: y_min, max: y_max } })
}

/// One base time unit; matches the granularity of the default date format.
pub fn base_time_unit() -> Duration { Duration::days(1) }

/// Domain and pixel stops for the x scale.
///
/// A collapsed domain widens to `[min - 1 day, min, max]` over
/// `[start, start + (end - start) / 2, end]`, putting a lone instant at the center.
pub fn x_scale_stops(
    domain: AxisDomain<NaiveDateTime>,
    range_start: f32,
    range_end: f32,
) -> (Vec<NaiveDateTime>, Vec<f32>) {
    if domain.is_degenerate() {
        let before = domain.min.checked_sub_signed(base_time_unit()).unwrap_or(domain.min);
        let mid = range_start + (range_end - range_start) / 2.0;
        (vec![before, domain.min, domain.max], vec![range_start, mid, range_end])
    } else {
        (vec![domain.min, domain.max], vec![range_start, range_end])
    }
}
