// File: crates/timeline-core/tests/timeline.rs
// Purpose: End-to-end timeline flow against a recording surface: draw calls, colors, tooltips, hover.

use std::sync::Arc;

use timeline_core::{
    AxisLayout, AxisSide, ChartHelper, Color, ColorSource, Curve, DrawingSurface, Marker, Record, SeriesPath,
    TimelineConfig, Timeline, TimelineError, TipSpec, CATEGORY10,
};

#[derive(Default)]
struct Recorder {
    size: Option<(f32, f32)>,
    axes: Vec<AxisLayout>,
    paths: Vec<(String, Vec<(f32, f32)>, Color, Curve)>,
    markers: Vec<(String, f32, f32, Color)>,
    ended: bool,
}

impl DrawingSurface for Recorder {
    fn begin(&mut self, w: f32, h: f32) { self.size = Some((w, h)); }
    fn axis(&mut self, axis: &AxisLayout) { self.axes.push(axis.clone()); }
    fn path(&mut self, p: &SeriesPath<'_>) {
        self.paths.push((p.name.to_string(), p.points.to_vec(), p.color, p.curve));
    }
    fn marker(&mut self, m: &Marker<'_>) { self.markers.push((m.series.to_string(), m.x, m.y, m.stroke)); }
    fn end(&mut self) { self.ended = true; }
}

fn records() -> Vec<Record> {
    vec![
        Record::new().with("date", "2020-01-03").with("sales", "30").with("cost", "10").with("region", "north"),
        Record::new().with("date", "2020-01-01").with("sales", "10").with("cost", "n/a").with("region", "south"),
        Record::new().with("date", "2020-01-02").with("sales", "20").with("cost", "1500.25").with("region", "east"),
    ]
}

fn timeline(cfg: TimelineConfig) -> Timeline { Timeline::new(cfg, Arc::new(ChartHelper::new(200.0, 100.0))) }

#[test]
fn draw_emits_axes_paths_and_markers() {
    let mut tl = timeline(TimelineConfig::new().x("date").y_fields(["sales", "cost"]).curve(Curve::Linear));
    let mut surface = Recorder::default();
    tl.render(&records(), &mut surface).unwrap();

    assert_eq!(surface.size, Some((200.0, 100.0)));
    assert!(surface.ended);
    assert_eq!(surface.axes.len(), 2);
    assert_eq!(surface.axes[0].side, AxisSide::Bottom);
    assert_eq!(surface.axes[0].title.as_deref(), Some("date"));
    assert_eq!(surface.axes[1].title.as_deref(), Some("sales, cost"));

    assert_eq!(surface.paths.len(), 2);
    let (name, pts, color, curve) = &surface.paths[0];
    assert_eq!(name, "sales");
    assert_eq!(*color, CATEGORY10[0]);
    assert_eq!(*curve, Curve::Linear);
    // x spans the full width in date order
    assert_eq!(pts.first().unwrap().0, 0.0);
    assert_eq!(pts.last().unwrap().0, 200.0);
    assert_eq!(surface.paths[1].2, CATEGORY10[1]);

    // 3 sales points + 2 cost points
    assert_eq!(surface.markers.len(), 5);
}

#[test]
fn y_axis_labels_use_number_format() {
    let mut tl = timeline(TimelineConfig::new().x("date").y("cost"));
    tl.data(&records()).unwrap().scales().unwrap();
    let axis = tl.y_axis_layout().unwrap();
    assert!(axis.ticks.iter().any(|t| t.label.contains(',')), "expected grouped labels: {:?}", axis.ticks);
    // ticks sit inside the plot
    assert!(axis.ticks.iter().all(|t| (0.0..=100.0).contains(&t.px)));
}

#[test]
fn explicit_palette_and_lookup() {
    let palette = ColorSource::from_hex(&["#000000", "#00ff00"]);
    let mut tl = timeline(TimelineConfig::new().x("date").y_fields(["sales", "cost"]).colors(palette));
    tl.data(&records()).unwrap().scales().unwrap();
    assert_eq!(tl.color("cost").unwrap(), Color::rgb(0, 0, 0));
    assert_eq!(tl.color("sales").unwrap(), Color::rgb(0, 255, 0));

    let lookup = ColorSource::lookup(|_| Color::rgb(1, 2, 3));
    let mut tl = timeline(TimelineConfig::new().x("date").y("sales").colors(lookup));
    tl.data(&records()).unwrap().scales().unwrap();
    assert_eq!(tl.color("anything").unwrap(), Color::rgb(1, 2, 3));
}

#[test]
fn tooltip_formats_numbers_and_keeps_text_literal() {
    let tip = TipSpec::new().field("region").field("cost");
    let mut tl = timeline(TimelineConfig::new().x("date").y("sales").tip(tip));
    tl.data(&records()).unwrap();

    // sales points are sorted: 01-01 (south), 01-02 (east), 01-03 (north)
    let t = tl.tooltip(0, 1).unwrap();
    assert_eq!(t.title, "sales");
    let rows: Vec<(&str, &str)> = t.rows.iter().map(|r| (r.label.as_str(), r.value.as_str())).collect();
    assert_eq!(rows, vec![("date", "2020-01-02"), ("sales", "20"), ("region", "east"), ("cost", "1,500.25")]);

    let t = tl.tooltip(0, 0).unwrap();
    assert_eq!(t.rows.last().unwrap().value, "n/a");
    assert_eq!(t.to_string().lines().next(), Some("sales"));

    assert_eq!(tl.tooltip(3, 0).unwrap_err(), TimelineError::UnknownSeries { series: 3, point: 0 });
}

#[test]
fn hit_test_finds_nearest_marker() {
    let mut tl = timeline(TimelineConfig::new().x("date").y("sales"));
    tl.data(&records()).unwrap().scales().unwrap();
    // last point: x = 200, y = top of plot
    assert_eq!(tl.hit_test(198.0, 2.0), Some((0, 2)));
    assert_eq!(tl.hit_test(50.0, 50.0), None);
}

#[test]
fn stages_must_run_in_order() {
    let mut tl = timeline(TimelineConfig::new().x("date").y("sales"));
    assert!(matches!(tl.scales().err(), Some(TimelineError::NotReady(_))));
    assert!(matches!(tl.draw(&mut Recorder::default()), Err(TimelineError::NotReady(_))));
}

#[test]
fn failed_ingest_keeps_previous_state() {
    let mut tl = timeline(TimelineConfig::new().x("date").y("sales"));
    tl.data(&records()).unwrap().scales().unwrap();
    let before = tl.normalized().cloned();

    tl.set_config(
        TimelineConfig::new()
            .x("date")
            .y("sales")
            .invalid_dates(timeline_core::InvalidDatePolicy::Reject),
    );
    tl.data(&records()).unwrap();
    let bad = vec![Record::new().with("date", "garbage").with("sales", "1")];
    assert!(tl.data(&bad).is_err());
    assert_eq!(tl.normalized().cloned(), before);
}
