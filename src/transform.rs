//! Coordinate transforms between data and screen space.

use tracing::debug;

use crate::axis::{ScaleFamily, Warp};
use crate::error::{ChartError, ChartResult};
use crate::geom::ScreenPoint;
use crate::plot::ChartProps;
use crate::view::{DomainOverride, Interval, PixelRange};

/// Immutable mapping from one data axis onto one pixel axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    family: ScaleFamily,
    domain: Interval,
    range: Interval,
    warp: Warp,
    warped: Interval,
}

impl ScaleTransform {
    /// Build a scale of the given family.
    pub fn new(family: ScaleFamily, domain: Interval, range: Interval) -> ChartResult<Self> {
        let warp = family.warp_for(domain)?;
        let warped = Interval::new(warp.forward(domain.start), warp.forward(domain.end));
        Ok(Self {
            family,
            domain,
            range,
            warp,
            warped,
        })
    }

    /// Linear scale shorthand.
    pub fn linear(domain: Interval, range: Interval) -> ChartResult<Self> {
        Self::new(ScaleFamily::Linear, domain, range)
    }

    /// Access the scale family.
    pub fn family(&self) -> ScaleFamily {
        self.family
    }

    /// Access the data domain.
    pub fn domain(&self) -> Interval {
        self.domain
    }

    /// Access the pixel range.
    pub fn range(&self) -> Interval {
        self.range
    }

    /// Map a data value into pixel space.
    ///
    /// A zero-width domain maps every value to the middle of the range.
    /// Values the family cannot represent come back as NaN.
    pub fn apply(&self, value: f64) -> f64 {
        let t = normalize(self.warped, self.warp.forward(value));
        interpolate(self.range, t)
    }

    /// Map a pixel value back into data space.
    pub fn invert(&self, pixel: f64) -> f64 {
        let t = normalize(self.range, pixel);
        self.warp.inverse(interpolate(self.warped, t))
    }
}

fn normalize(bounds: Interval, value: f64) -> f64 {
    let span = bounds.span();
    if span != 0.0 {
        (value - bounds.start) / span
    } else if span.is_nan() {
        f64::NAN
    } else {
        0.5
    }
}

fn interpolate(bounds: Interval, t: f64) -> f64 {
    bounds.start * (1.0 - t) + bounds.end * t
}

/// Transform from data coordinates into screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    x: ScaleTransform,
    y: ScaleTransform,
    range: PixelRange,
}

impl Transform {
    /// Combine two axis scales sharing a pixel range.
    pub fn new(x: ScaleTransform, y: ScaleTransform) -> Self {
        let range = PixelRange {
            x: x.range(),
            y: y.range(),
        };
        Self { x, y, range }
    }

    /// Resolve scales, domain and range for chart properties.
    pub fn from_props(props: &ChartProps) -> ChartResult<Self> {
        let range = PixelRange::new(props.width, props.height, props.padding).ok_or(
            ChartError::InvalidDimensions {
                width: props.width,
                height: props.height,
            },
        )?;
        let (x_family, y_family) = props.scale_families()?;
        let domain = DomainOverride::resolve(props.domain.as_ref(), &props.data);
        let x = ScaleTransform::new(x_family, domain.x, range.x)?;
        let y = ScaleTransform::new(y_family, domain.y, range.y)?;
        debug!(
            x_family = %x_family,
            y_family = %y_family,
            domain_x = ?domain.x,
            domain_y = ?domain.y,
            range_x = ?range.x,
            range_y = ?range.y,
            "resolved chart scales"
        );
        Ok(Self { x, y, range })
    }

    /// Access the X scale.
    pub fn x(&self) -> &ScaleTransform {
        &self.x
    }

    /// Access the Y scale.
    pub fn y(&self) -> &ScaleTransform {
        &self.y
    }

    /// Access the pixel range.
    pub fn range(&self) -> PixelRange {
        self.range
    }

    /// Map a data point into screen space.
    pub fn data_to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint::new(self.x.apply(x), self.y.apply(y))
    }

    /// Map a screen point into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> (f64, f64) {
        (self.x.invert(point.x), self.y.invert(point.y))
    }
}
