// File: crates/timeline-core/src/types.rs
// Summary: Shared sizes, margins and marker/stroke constants.

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;

/// Series stroke width.
pub const LINE_WIDTH: f32 = 4.0;
/// Point marker radius.
pub const MARKER_RADIUS: f32 = 4.0;
pub const MARKER_STROKE_WIDTH: f32 = 2.0;
/// Marker fill opacity (white fill).
pub const MARKER_FILL_OPACITY: f32 = 0.5;
/// Pointer distance within which a marker counts as hovered.
pub const HIT_RADIUS: f32 = 8.0;

/// Margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Plot area left after removing the margins from a `width` x `height` surface (at least 1x1).
    pub fn plot_size(&self, width: i32, height: i32) -> (f32, f32) {
        let w = (width - self.hsum() as i32).max(1);
        let h = (height - self.vsum() as i32).max(1);
        (w as f32, h as f32)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
