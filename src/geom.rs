//! Geometric primitives used by the path pipeline.
//!
//! [`DataPoint`] lives in data space. [`ScreenPoint`] and [`Extent`] live in
//! pixel space, where y grows downward.

use serde::{Deserialize, Serialize};

/// One observation in data space.
///
/// `y0` and `y1` are only read by area shapes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
    /// Lower area bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y0: Option<f64>,
    /// Upper area bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y1: Option<f64>,
}

impl DataPoint {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            y0: None,
            y1: None,
        }
    }

    /// Set the lower area bound.
    pub fn with_y0(mut self, y0: f64) -> Self {
        self.y0 = Some(y0);
        self
    }

    /// Set the upper area bound.
    pub fn with_y1(mut self, y1: f64) -> Self {
        self.y1 = Some(y1);
        self
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f64,
    /// Y value in screen pixels.
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn distance_squared(&self, other: ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Swap the axes. Used by curves that run along y.
    pub(crate) fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }
}

/// An axis-aligned box in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl Extent {
    /// Create a new extent from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Extent width in pixels.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent height in pixels.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check whether the extent has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether a point lies inside or on the border.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Corners in drawing order, starting at the top-left.
    pub(crate) fn corners(&self) -> [ScreenPoint; 4] {
        [
            self.min,
            ScreenPoint::new(self.max.x, self.min.y),
            self.max,
            ScreenPoint::new(self.min.x, self.max.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_contains_border() {
        let extent = Extent::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(10.0, 5.0));
        assert!(extent.contains(ScreenPoint::new(10.0, 5.0)));
        assert!(!extent.contains(ScreenPoint::new(10.5, 5.0)));
        assert!(extent.is_valid());
    }

    #[test]
    fn data_point_deserializes_optional_bounds() {
        let point: DataPoint = serde_json::from_str(r#"{"x":1,"y":2,"y0":-1}"#).unwrap();
        assert_eq!(point, DataPoint::new(1.0, 2.0).with_y0(-1.0));
    }
}
