//! Chart properties and their builder.

use serde::Deserialize;

use crate::axis::ScaleFamily;
use crate::error::ChartResult;
use crate::geom::DataPoint;
use crate::render::{Curve, Interpolation};
use crate::view::{DomainOverride, Padding};

/// Default chart width in pixels.
pub const DEFAULT_WIDTH: f64 = 450.0;
/// Default chart height in pixels.
pub const DEFAULT_HEIGHT: f64 = 300.0;

/// Scale family names, shared or per axis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScaleSpec {
    /// One family for both axes.
    Uniform(String),
    /// Separate families; a missing axis is linear.
    PerAxis {
        /// X axis family.
        #[serde(default)]
        x: Option<String>,
        /// Y axis family.
        #[serde(default)]
        y: Option<String>,
    },
}

impl From<&str> for ScaleSpec {
    fn from(name: &str) -> Self {
        Self::Uniform(name.to_string())
    }
}

impl From<String> for ScaleSpec {
    fn from(name: String) -> Self {
        Self::Uniform(name)
    }
}

/// Everything needed to map data onto a chart and draw its shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartProps {
    /// Chart width in pixels.
    pub width: f64,
    /// Chart height in pixels.
    pub height: f64,
    /// Padding around the drawing area.
    pub padding: Padding,
    /// Scale family names; linear when absent.
    pub scale: Option<ScaleSpec>,
    /// Curve used by line and area shapes; linear when absent.
    pub interpolation: Option<Interpolation>,
    /// Data points.
    pub data: Vec<DataPoint>,
    /// Explicit domain; inferred from data when absent.
    pub domain: Option<DomainOverride>,
}

impl ChartProps {
    /// Start building chart properties.
    pub fn builder() -> ChartPropsBuilder {
        ChartPropsBuilder::default()
    }

    /// Deserialize chart properties from JSON.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the scale family of each axis.
    pub fn scale_families(&self) -> ChartResult<(ScaleFamily, ScaleFamily)> {
        let resolve = |name: Option<&String>| match name {
            Some(name) => ScaleFamily::resolve(name),
            None => Ok(ScaleFamily::default()),
        };
        match &self.scale {
            None => Ok((ScaleFamily::default(), ScaleFamily::default())),
            Some(ScaleSpec::Uniform(name)) => {
                let family = ScaleFamily::resolve(name)?;
                Ok((family, family))
            }
            Some(ScaleSpec::PerAxis { x, y }) => Ok((resolve(x.as_ref())?, resolve(y.as_ref())?)),
        }
    }

    /// Resolve the configured curve.
    pub fn curve(&self) -> ChartResult<Curve> {
        Interpolation::resolve(self.interpolation.as_ref())
    }
}

impl Default for ChartProps {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: Padding::default(),
            scale: None,
            interpolation: None,
            data: Vec::new(),
            domain: None,
        }
    }
}

/// Builder for chart properties.
#[derive(Debug, Default)]
pub struct ChartPropsBuilder {
    props: ChartProps,
}

impl ChartPropsBuilder {
    /// Set the chart width.
    pub fn width(mut self, width: f64) -> Self {
        self.props.width = width;
        self
    }

    /// Set the chart height.
    pub fn height(mut self, height: f64) -> Self {
        self.props.height = height;
        self
    }

    /// Set the padding, uniform or per side.
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.props.padding = padding.into();
        self
    }

    /// Set the scale family for both axes, or per axis.
    pub fn scale(mut self, scale: impl Into<ScaleSpec>) -> Self {
        self.props.scale = Some(scale.into());
        self
    }

    /// Set the curve by name or callback.
    pub fn interpolation(mut self, interpolation: impl Into<Interpolation>) -> Self {
        self.props.interpolation = Some(interpolation.into());
        self
    }

    /// Set the data points.
    pub fn data(mut self, data: impl IntoIterator<Item = DataPoint>) -> Self {
        self.props.data = data.into_iter().collect();
        self
    }

    /// Set an explicit domain.
    pub fn domain(mut self, domain: impl Into<DomainOverride>) -> Self {
        self.props.domain = Some(domain.into());
        self
    }

    /// Build the chart properties.
    pub fn build(self) -> ChartProps {
        self.props
    }
}
