//! Crate error type.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors produced while mapping, synthesizing, parsing or measuring paths.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A scale family name did not resolve to a known family.
    #[error("unknown scale family `{0}`")]
    UnknownScaleFamily(String),
    /// A curve family name did not resolve to a known family.
    #[error("unknown curve family `{0}`")]
    UnknownCurveFamily(String),
    /// A shape kind name did not resolve to a known shape.
    #[error("unsupported shape kind `{0}`")]
    UnsupportedShapeKind(String),
    /// The path description could not be tokenized.
    #[error("malformed path: {reason}")]
    MalformedPath {
        /// What went wrong.
        reason: String,
    },
    /// A positional measurement found fewer commands or arguments than it reads.
    #[error("command {index} (`{name}`) has {found} arguments, expected at least {expected}")]
    PrecisionAssumptionViolated {
        /// Command position in the parsed path.
        index: usize,
        /// Command name, or `?` when the command itself is missing.
        name: char,
        /// Arguments required by the measurement.
        expected: usize,
        /// Arguments present.
        found: usize,
    },
    /// The domain is not usable by the requested scale family.
    #[error("domain [{start}, {end}] is invalid for the {family} scale")]
    InvalidDomain {
        /// Scale family name.
        family: &'static str,
        /// Domain start.
        start: f64,
        /// Domain end.
        end: f64,
    },
    /// Chart width, height or padding leave no drawable area.
    #[error("invalid chart dimensions {width}x{height}")]
    InvalidDimensions {
        /// Chart width.
        width: f64,
        /// Chart height.
        height: f64,
    },
    /// The chart has no data points.
    #[error("no data points to draw")]
    EmptyData,
    /// A scaled coordinate is NaN or infinite.
    #[error("data point {index} maps to a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending data point.
        index: usize,
    },
    /// The requested voronoi cell does not exist.
    #[error("voronoi cell {index} out of range for {len} points")]
    CellIndexOutOfRange {
        /// Requested cell.
        index: usize,
        /// Number of sites.
        len: usize,
    },
    /// The voronoi cell was clipped away by the extent.
    #[error("voronoi cell {index} is empty inside the extent")]
    EmptyCell {
        /// Cell index.
        index: usize,
    },
    /// The SVG markup has no `<path>` element with a `d` attribute.
    #[error("no <path> element with a `d` attribute found")]
    MissingPathElement,
    /// Chart properties could not be deserialized.
    #[error("invalid chart configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl ChartError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPath {
            reason: reason.into(),
        }
    }
}
