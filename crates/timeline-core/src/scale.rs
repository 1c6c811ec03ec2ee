// File: crates/timeline-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms with nice rounding and tick generation.

use chrono::{DateTime, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::axis::ScaleKind;
use crate::error::{Result, TimelineError};

/// Inputs for building one axis scale. Built fresh per axis, never shared.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleParams {
    /// Data column the axis represents.
    pub column: String,
    pub kind: ScaleKind,
    /// Pixel range `(start, end)`; the y axis is inverted (`(height, 0)`).
    pub range: (f32, f32),
    pub min_zero: bool,
}

#[inline]
fn millis(t: NaiveDateTime) -> f64 { t.and_utc().timestamp_millis() as f64 }

#[inline]
fn from_millis(ms: f64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(ms.round() as i64)
        .map(|d| d.naive_utc())
        .unwrap_or_default()
}

/// Poly-linear time scale: `domain[i]` maps to `range[i]`, linear in between.
/// Values outside the domain extrapolate along the first/last segment.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeScale {
    domain: Vec<NaiveDateTime>,
    range: Vec<f32>,
}

impl TimeScale {
    /// Both stop lists must have the same length (>= 2); `domain` must be non-decreasing.
    pub fn new(domain: Vec<NaiveDateTime>, range: Vec<f32>) -> Result<Self> {
        if domain.len() < 2 || domain.len() != range.len() {
            return Err(TimelineError::ScaleStops { domain: domain.len(), range: range.len() });
        }
        Ok(Self { domain, range })
    }

    pub fn domain_stops(&self) -> &[NaiveDateTime] { &self.domain }

    pub fn range_stops(&self) -> &[f32] { &self.range }

    /// Replace the domain stops, keeping the range when the stop count matches.
    /// Fewer than two stops leave the scale unchanged.
    pub fn domain(&mut self, stops: Vec<NaiveDateTime>) -> &mut Self {
        if stops.len() < 2 {
            warn!(stops = stops.len(), "time scale needs at least two domain stops; keeping current domain");
            return self;
        }
        if stops.len() != self.range.len() {
            let (r0, r1) = (self.range[0], self.range[self.range.len() - 1]);
            let n = stops.len();
            self.range = (0..n).map(|i| r0 + (r1 - r0) * i as f32 / (n - 1) as f32).collect();
        }
        self.domain = stops;
        self
    }

    /// Extend a two-stop domain outward to whole days. Multi-stop domains are left alone.
    pub fn nice(&mut self) -> &mut Self {
        if self.domain.len() == 2 {
            let lo = self.domain[0].date().and_time(NaiveTime::MIN);
            let hi_date = self.domain[1].date();
            let hi = if self.domain[1].time() == NaiveTime::MIN {
                self.domain[1]
            } else {
                hi_date.succ_opt().unwrap_or(hi_date).and_time(NaiveTime::MIN)
            };
            self.domain = vec![lo, hi];
        }
        self
    }

    fn segment(&self, v: f64) -> usize {
        let last = self.domain.len().saturating_sub(2);
        (0..last).find(|&i| v <= millis(self.domain[i + 1])).unwrap_or(last)
    }

    #[inline]
    pub fn to_px(&self, t: NaiveDateTime) -> f32 {
        let v = millis(t);
        let i = self.segment(v);
        let (d0, d1) = (millis(self.domain[i]), millis(self.domain[i + 1]));
        let (r0, r1) = (self.range[i], self.range[i + 1]);
        let span = d1 - d0;
        if span == 0.0 {
            return r1;
        }
        r0 + (((v - d0) / span) as f32) * (r1 - r0)
    }

    pub fn from_px(&self, px: f32) -> NaiveDateTime {
        let last = self.range.len().saturating_sub(2);
        let i = (0..last)
            .find(|&i| {
                let (a, b) = (self.range[i], self.range[i + 1]);
                px <= a.max(b)
            })
            .unwrap_or(last);
        let (r0, r1) = (self.range[i], self.range[i + 1]);
        let (d0, d1) = (millis(self.domain[i]), millis(self.domain[i + 1]));
        if r1 == r0 {
            return self.domain[i + 1];
        }
        from_millis(d0 + ((px - r0) / (r1 - r0)) as f64 * (d1 - d0))
    }

    /// `count` evenly spaced instants from the first to the last domain stop.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        let first = self.domain[0];
        let last = self.domain[self.domain.len() - 1];
        if count < 2 || first == last {
            return vec![first];
        }
        let (a, b) = (millis(first), millis(last));
        let step = (b - a) / (count - 1) as f64;
        (0..count).map(|i| from_millis(a + step * i as f64)).collect()
    }
}

/// Tick step of the form 1, 2 or 5 times a power of ten giving roughly `count` ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let mut step = 10f64.powf(raw.log10().floor());
    let error = raw / step;
    if error >= 50f64.sqrt() {
        step *= 10.0;
    } else if error >= 10f64.sqrt() {
        step *= 5.0;
    } else if error >= 2f64.sqrt() {
        step *= 2.0;
    }
    step
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(top_px: f32, bottom_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { top_px, bottom_px, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    /// Replace the domain, keeping the pixel range and kind.
    pub fn domain(&mut self, vmin: f64, vmax: f64) -> &mut Self {
        *self = if self.log {
            Self::new_log10(self.top_px, self.bottom_px, vmin, vmax)
        } else {
            Self::new_linear(self.top_px, self.bottom_px, vmin, vmax)
        };
        self
    }

    /// Round the domain outward to multiples of the tick step (decades for log scales).
    pub fn nice(&mut self, count: usize) -> &mut Self {
        if self.log {
            let lo = 10f64.powf((self.log_min + 1e-9).floor());
            let hi = 10f64.powf((self.log_max - 1e-9).ceil());
            return self.domain(lo, hi);
        }
        let (mut lo, mut hi) = (self.vmin, self.vmax);
        // second pass settles cases where the first rounding changed the step
        for _ in 0..2 {
            let step = tick_step(lo, hi, count);
            if step < 1.0 {
                let inv = (1.0 / step).round();
                lo = (lo * inv).floor() / inv;
                hi = (hi * inv).ceil() / inv;
            } else {
                lo = (lo / step).floor() * step;
                hi = (hi / step).ceil() * step;
            }
        }
        self.domain(lo, hi)
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        if self.log {
            let yy = y.max(1e-12).log10();
            let span = (self.log_max - self.log_min).max(1e-12);
            self.bottom_px - ((yy - self.log_min) / span) as f32 * (self.bottom_px - self.top_px)
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
        }
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            let yy = self.log_min + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span;
            10f64.powf(yy)
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
        }
    }

    /// Tick values inside the domain: 1/2/5 steps for linear, powers of ten for log.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if self.log {
            let (a, b) = ((self.log_min - 1e-9).ceil() as i32, (self.log_max + 1e-9).floor() as i32);
            return (a..=b).map(|e| 10f64.powi(e)).collect();
        }
        let step = tick_step(self.vmin, self.vmax, count);
        if step < 1.0 {
            let inv = (1.0 / step).round();
            let (i0, i1) = ((self.vmin * inv).ceil() as i64, (self.vmax * inv).floor() as i64);
            (i0..=i1).map(|i| i as f64 / inv).collect()
        } else {
            let (i0, i1) = ((self.vmin / step).ceil() as i64, (self.vmax / step).floor() as i64);
            (i0..=i1).map(|i| i as f64 * step).collect()
        }
    }
}
