// File: crates/timeline-core/src/surface.rs
// Summary: Drawing-surface contract; a timeline hands it pixel geometry, colors and labels.

use crate::axis::AxisLayout;
use crate::color::Color;
use crate::config::Curve;

/// One series polyline in plot coordinates (origin top-left of the plot area).
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath<'a> {
    pub name: &'a str,
    pub points: &'a [(f32, f32)],
    pub color: Color,
    pub width: f32,
    pub curve: Curve,
}

/// A circular point marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker<'a> {
    pub series: &'a str,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub stroke: Color,
    pub stroke_width: f32,
    pub fill: Color,
}

/// Anything that can render a timeline. Implemented by raster backends and test recorders.
pub trait DrawingSurface {
    /// Called once per draw with the plot area size.
    fn begin(&mut self, _plot_width: f32, _plot_height: f32) {}
    fn axis(&mut self, axis: &AxisLayout);
    fn path(&mut self, path: &SeriesPath<'_>);
    fn marker(&mut self, marker: &Marker<'_>);
    fn end(&mut self) {}
}
