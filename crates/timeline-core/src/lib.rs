// File: crates/timeline-core/src/lib.rs
// Summary: Core library entry point; exports the timeline pipeline (records -> series -> scales -> surface).

pub mod axis;
pub mod color;
pub mod config;
pub mod date;
pub mod domain;
pub mod error;
pub mod format;
pub mod helper;
pub mod normalize;
pub mod record;
pub mod scale;
pub mod series;
pub mod surface;
pub mod timeline;
pub mod tooltip;
pub mod types;

pub use axis::{AxisConfig, AxisLayout, AxisSide, ScaleKind, Tick};
pub use color::{Color, ColorScale, ColorSource, CATEGORY10};
pub use config::{Curve, InvalidDatePolicy, TimelineConfig};
pub use date::DateParser;
pub use domain::{resolve_domains, x_scale_stops, AxisDomain, Domains};
pub use error::{Result, TimelineError};
pub use format::NumberFormat;
pub use helper::ChartHelper;
pub use normalize::SeriesNormalizer;
pub use record::{FieldValue, Record, Timestamp};
pub use scale::{ScaleParams, TimeScale, ValueScale};
pub use series::{DerivedRecord, Normalized, Point, Series};
pub use surface::{DrawingSurface, Marker, SeriesPath};
pub use timeline::{Scales, Timeline};
pub use tooltip::{TipSpec, Tooltip, TooltipRow};
pub use types::Insets;
