// File: crates/timeline-core/src/error.rs
// Summary: Error taxonomy for configuration, parsing and domain resolution.

use thiserror::Error;

use crate::axis::ScaleKind;

pub type Result<T, E = TimelineError> = std::result::Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimelineError {
    /// A required field mapping (`x`, or `y`/`series`) was never configured.
    #[error("missing field mapping `{0}`")]
    MissingField(&'static str),

    /// An x value could not be read as a date and the policy rejects it.
    #[error("cannot parse {value:?} in column `{column}` as a date")]
    ParseFailure { column: String, value: String },

    /// The x domain contains a value that never parsed as a date.
    #[error("x domain contains an invalid date (raw value {raw:?})")]
    InvalidDomain { raw: String },

    #[error("no plottable points; every series is empty")]
    EmptyDomain,

    #[error("scale kind {kind:?} is not supported on the {axis} axis")]
    UnsupportedScale { axis: &'static str, kind: ScaleKind },

    /// Time scale stops must pair up, with at least two of each.
    #[error("time scale needs matching domain/range stops (got {domain} and {range})")]
    ScaleStops { domain: usize, range: usize },

    /// A stage ran before the stage it depends on.
    #[error("{0}")]
    NotReady(&'static str),

    #[error("no series/point at index ({series}, {point})")]
    UnknownSeries { series: usize, point: usize },
}
