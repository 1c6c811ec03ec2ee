// File: crates/timeline-core/src/timeline.rs
// Summary: Timeline chart: configuration + shared helper -> normalized series -> scales -> drawing surface.

use std::sync::Arc;

use tracing::debug;

use crate::axis::{AxisLayout, AxisSide, Tick};
use crate::color::{ColorScale, ColorSource, CATEGORY10};
use crate::config::TimelineConfig;
use crate::domain::{resolve_domains, Domains};
use crate::error::{Result, TimelineError};
use crate::helper::ChartHelper;
use crate::normalize::SeriesNormalizer;
use crate::record::Record;
use crate::scale::{ScaleParams, TimeScale, ValueScale};
use crate::series::{Normalized, Series};
use crate::surface::{DrawingSurface, Marker, SeriesPath};
use crate::tooltip::{self, Tooltip};
use crate::types::{HIT_RADIUS, LINE_WIDTH, MARKER_FILL_OPACITY, MARKER_RADIUS, MARKER_STROKE_WIDTH};
use crate::Color;

/// Scales and color lookup derived from the current data.
#[derive(Debug)]
pub struct Scales {
    pub domains: Domains,
    pub x: TimeScale,
    pub y: ValueScale,
    pub colors: ColorScale,
}

pub struct Timeline {
    config: TimelineConfig,
    helper: Arc<ChartHelper>,
    data: Option<Normalized>,
    scales: Option<Scales>,
}

impl Timeline {
    pub fn new(config: TimelineConfig, helper: Arc<ChartHelper>) -> Self {
        Self { config, helper, data: None, scales: None }
    }

    pub fn config(&self) -> &TimelineConfig { &self.config }

    pub fn helper(&self) -> &ChartHelper { &self.helper }

    /// Swap the configuration; derived data is discarded.
    pub fn set_config(&mut self, config: TimelineConfig) {
        self.config = config;
        self.data = None;
        self.scales = None;
    }

    pub fn normalized(&self) -> Option<&Normalized> { self.data.as_ref() }

    pub fn series(&self) -> &[Series] {
        self.data.as_ref().map_or(&[], |d| d.series.as_slice())
    }

    pub fn computed_scales(&self) -> Option<&Scales> { self.scales.as_ref() }

    /// Normalize `records`. On error the previous data and scales are kept.
    pub fn data(&mut self, records: &[Record]) -> Result<&mut Self> {
        let normalizer = SeriesNormalizer::configure(&self.config)?;
        let normalized = normalizer.ingest(records)?;
        self.data = Some(normalized);
        self.scales = None;
        Ok(self)
    }

    /// Resolve domains and build the x/y scales and the color lookup.
    pub fn scales(&mut self) -> Result<&mut Self> {
        let data = self.data.as_ref().ok_or(TimelineError::NotReady("call data() before scales()"))?;
        let x_axis = &self.config.x_axis;
        let y_axis = &self.config.y_axis;
        let domains = resolve_domains(&data.series, y_axis.min_zero)?;

        let x_params = ScaleParams {
            column: self.config.x.clone().unwrap_or_default(),
            kind: x_axis.scale,
            range: (0.0, self.helper.width),
            min_zero: false,
        };
        let mut x = self.helper.time_scale(&x_params, domains.x)?;
        if x_axis.nice {
            x.nice();
        }

        let y_params = ScaleParams {
            column: self.config.y_columns().and_then(|c| c.first()).cloned().unwrap_or_default(),
            kind: y_axis.scale,
            range: (self.helper.height, 0.0),
            min_zero: y_axis.min_zero,
        };
        let mut y = self.helper.value_scale(&y_params, domains.y)?;
        if y_axis.nice {
            y.nice(y_axis.tick_count);
        }

        let source = self.config.colors.clone().unwrap_or_else(|| ColorSource::Palette(CATEGORY10.to_vec()));
        debug!(
            x_column = %x_params.column,
            y_column = %y_params.column,
            min_zero = y_params.min_zero,
            x_stops = x.domain_stops().len(),
            y_min = y.vmin,
            y_max = y.vmax,
            "built scales"
        );
        self.scales = Some(Scales { domains, x, y, colors: ColorScale::new(source) });
        Ok(self)
    }

    /// Color assigned to a series name. Needs `scales()`.
    pub fn color(&self, name: &str) -> Result<Color> {
        let scales = self.scales.as_ref().ok_or(TimelineError::NotReady("call scales() before color()"))?;
        Ok(scales.colors.color(name))
    }

    fn ready(&self) -> Result<(&Normalized, &Scales)> {
        match (&self.data, &self.scales) {
            (Some(d), Some(s)) => Ok((d, s)),
            (None, _) => Err(TimelineError::NotReady("call data() before draw()")),
            (Some(_), None) => Err(TimelineError::NotReady("call scales() before draw()")),
        }
    }

    /// Pixel positions of one series' points.
    fn project(series: &Series, scales: &Scales) -> Vec<(f32, f32)> {
        series.xy().map(|(t, y)| (scales.x.to_px(t), scales.y.to_px(y))).collect()
    }

    pub fn x_axis_layout(&self) -> Result<AxisLayout> {
        let (_, scales) = self.ready()?;
        let ticks = if scales.domains.x.is_degenerate() {
            vec![scales.domains.x.min]
        } else {
            scales.x.ticks(self.config.x_axis.tick_count)
        };
        Ok(AxisLayout {
            side: AxisSide::Bottom,
            ticks: ticks
                .into_iter()
                .map(|t| Tick { px: scales.x.to_px(t), label: self.helper.format_date(t) })
                .collect(),
            title: self.config.x_axis.label.clone().or_else(|| self.config.x.clone()),
        })
    }

    pub fn y_axis_layout(&self) -> Result<AxisLayout> {
        let (_, scales) = self.ready()?;
        Ok(AxisLayout {
            side: AxisSide::Left,
            ticks: scales
                .y
                .ticks(self.config.y_axis.tick_count)
                .into_iter()
                .map(|v| Tick { px: scales.y.to_px(v), label: self.helper.format_number(v) })
                .collect(),
            title: self.config.y_axis.label.clone().or_else(|| self.config.y_columns().map(|c| c.join(", "))),
        })
    }

    /// Draw axes, one path per series and a marker per point.
    pub fn draw(&self, surface: &mut dyn DrawingSurface) -> Result<()> {
        let (data, scales) = self.ready()?;
        surface.begin(self.helper.width, self.helper.height);
        surface.axis(&self.x_axis_layout()?);
        surface.axis(&self.y_axis_layout()?);

        let fill = Color::WHITE.with_alpha((MARKER_FILL_OPACITY * 255.0).round() as u8);
        for series in &data.series {
            let color = scales.colors.color(&series.name);
            let points = Self::project(series, scales);
            debug!(series = %series.name, color = %color.to_hex(), points = points.len(), "drawing series");
            surface.path(&SeriesPath {
                name: &series.name,
                points: &points,
                color,
                width: LINE_WIDTH,
                curve: self.config.curve,
            });
            for &(x, y) in &points {
                surface.marker(&Marker {
                    series: &series.name,
                    x,
                    y,
                    radius: MARKER_RADIUS,
                    stroke: color,
                    stroke_width: MARKER_STROKE_WIDTH,
                    fill,
                });
            }
        }
        surface.end();
        debug!(series = data.series.len(), "drew timeline");
        Ok(())
    }

    /// `data` + `scales` + `draw` in one go.
    pub fn render(&mut self, records: &[Record], surface: &mut dyn DrawingSurface) -> Result<()> {
        self.data(records)?.scales()?.draw(surface)
    }

    /// Nearest marker to `(px, py)` within the hover radius, as `(series, point)` indices.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        let (data, scales) = self.ready().ok()?;
        let mut best: Option<(f32, usize, usize)> = None;
        for (si, series) in data.series.iter().enumerate() {
            for (pi, p) in series.values.iter().enumerate() {
                let Some(t) = p.x.valid() else { continue };
                let (dx, dy) = (scales.x.to_px(t) - px, scales.y.to_px(p.y) - py);
                let d = (dx * dx + dy * dy).sqrt();
                if d <= HIT_RADIUS && best.map_or(true, |(bd, _, _)| d < bd) {
                    best = Some((d, si, pi));
                }
            }
        }
        best.map(|(_, s, p)| (s, p))
    }

    /// Tooltip for point `point` of series `series`.
    pub fn tooltip(&self, series: usize, point: usize) -> Result<Tooltip> {
        let data = self.data.as_ref().ok_or(TimelineError::NotReady("call data() before tooltip()"))?;
        let s = data.series.get(series).ok_or(TimelineError::UnknownSeries { series, point })?;
        let p = s.values.get(point).ok_or(TimelineError::UnknownSeries { series, point })?;
        let record = &data.records[p.row];
        let x_label = self.config.x.as_deref().unwrap_or("x");
        Ok(tooltip::build(
            &self.config.tip,
            &s.name,
            x_label,
            p,
            record,
            &self.helper.number_format,
            &self.helper.date_format,
        ))
    }
}
