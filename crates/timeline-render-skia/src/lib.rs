// File: crates/timeline-render-skia/src/lib.rs
// Summary: Headless timeline rendering into a Skia CPU raster surface, with PNG output.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use timeline_core::types::{Insets, HEIGHT, WIDTH};
use timeline_core::{AxisLayout, AxisSide, ChartHelper, Color, Curve, DrawingSurface, Marker, SeriesPath};

pub mod theme;

pub use theme::Theme;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels and axis titles; off for pixel-exact comparisons.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default(), theme: Theme::light(), draw_labels: true }
    }
}

impl RenderOptions {
    /// Helper sized to the plot area left inside the insets.
    pub fn helper(&self) -> ChartHelper {
        let (w, h) = self.insets.plot_size(self.width, self.height);
        ChartHelper::new(w, h)
    }
}

/// A `DrawingSurface` backed by a CPU raster surface.
pub struct SkiaSurface {
    surface: skia::Surface,
    opts: RenderOptions,
    plot_w: f32,
    plot_h: f32,
}

fn to_skia(c: Color) -> skia::Color { skia::Color::from_argb(c.a, c.r, c.g, c.b) }

impl SkiaSurface {
    pub fn new(opts: RenderOptions) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let (plot_w, plot_h) = opts.insets.plot_size(opts.width, opts.height);
        Ok(Self { surface, opts, plot_w, plot_h })
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    #[inline]
    fn origin(&self) -> (f32, f32) { (self.opts.insets.left as f32, self.opts.insets.top as f32) }

    fn text(&mut self, s: &str, x: f32, y: f32, center: bool) {
        if !self.opts.draw_labels {
            return;
        }
        let mut paint = skia::Paint::default();
        paint.set_color(self.opts.theme.axis_label);
        paint.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(12.0);
        let x = if center {
            let (w, _) = font.measure_str(s, Some(&paint));
            x - w / 2.0
        } else {
            x
        };
        self.surface.canvas().draw_str(s, (x, y), &font, &paint);
    }

    /// Encode the current pixels as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn save_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

/// Straight segments for `Linear`; midpoint quadratic smoothing otherwise.
fn series_path(points: &[(f32, f32)], curve: Curve, dx: f32, dy: f32) -> skia::Path {
    let mut path = skia::Path::new();
    let at = |i: usize| (points[i].0 + dx, points[i].1 + dy);
    path.move_to(at(0));
    let n = points.len();
    match curve {
        Curve::Linear => {
            for i in 1..n {
                path.line_to(at(i));
            }
        }
        Curve::Basis | Curve::Cardinal => {
            for i in 1..n.saturating_sub(1) {
                let (c, next) = (at(i), at(i + 1));
                path.quad_to(c, ((c.0 + next.0) / 2.0, (c.1 + next.1) / 2.0));
            }
            if n > 1 {
                path.line_to(at(n - 1));
            }
        }
    }
    path
}

impl DrawingSurface for SkiaSurface {
    fn begin(&mut self, plot_width: f32, plot_height: f32) {
        self.plot_w = plot_width;
        self.plot_h = plot_height;
        let (l, t) = self.origin();
        let canvas = self.surface.canvas();
        canvas.clear(self.opts.theme.background);

        let axis_paint = stroke_paint(self.opts.theme.axis_line, 1.5);
        let (r, b) = (l + plot_width, t + plot_height);
        canvas.draw_line((l, b), (r, b), &axis_paint);
        canvas.draw_line((l, t), (l, b), &axis_paint);
    }

    fn axis(&mut self, axis: &AxisLayout) {
        let (l, t) = self.origin();
        let (r, b) = (l + self.plot_w, t + self.plot_h);
        let grid = stroke_paint(self.opts.theme.grid, 1.0);
        let tick = stroke_paint(self.opts.theme.tick, 1.0);
        for tk in &axis.ticks {
            match axis.side {
                AxisSide::Bottom => {
                    let x = l + tk.px;
                    let canvas = self.surface.canvas();
                    canvas.draw_line((x, t), (x, b), &grid);
                    canvas.draw_line((x, b), (x, b + 5.0), &tick);
                    self.text(&tk.label, x, b + 20.0, true);
                }
                AxisSide::Left => {
                    let y = t + tk.px;
                    let canvas = self.surface.canvas();
                    canvas.draw_line((l, y), (r, y), &grid);
                    canvas.draw_line((l - 5.0, y), (l, y), &tick);
                    self.text(&tk.label, 4.0, y + 4.0, false);
                }
            }
        }
        if let Some(title) = &axis.title {
            match axis.side {
                AxisSide::Bottom => self.text(title, l + self.plot_w / 2.0, b + 40.0, true),
                AxisSide::Left => self.text(title, 4.0, (t - 8.0).max(12.0), false),
            }
        }
    }

    fn path(&mut self, path: &SeriesPath<'_>) {
        if path.points.len() < 2 {
            return;
        }
        let (l, t) = self.origin();
        let p = series_path(path.points, path.curve, l, t);
        self.surface.canvas().draw_path(&p, &stroke_paint(to_skia(path.color), path.width));
    }

    fn marker(&mut self, m: &Marker<'_>) {
        let (l, t) = self.origin();
        let center = (m.x + l, m.y + t);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_skia(m.fill));
        let canvas = self.surface.canvas();
        canvas.draw_circle(center, m.radius, &fill);
        canvas.draw_circle(center, m.radius, &stroke_paint(to_skia(m.stroke), m.stroke_width));
    }
}
