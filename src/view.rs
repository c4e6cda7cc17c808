//! Domains, pixel ranges and padding.

use serde::{Deserialize, Serialize};

use crate::geom::{DataPoint, Extent, ScreenPoint};

/// Ordered pair of bounds.
///
/// Unlike a min/max range the orientation is kept: an inverted pixel range
/// such as `[height, 0]` stays inverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    /// First bound.
    pub start: f64,
    /// Second bound.
    pub end: f64,
}

impl Interval {
    /// Create a new interval.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Signed span (`end - start`).
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Smaller bound.
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    /// Larger bound.
    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Check whether a value lies between the bounds, inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

impl From<[f64; 2]> for Interval {
    fn from([start, end]: [f64; 2]) -> Self {
        Self::new(start, end)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.start, interval.end]
    }
}

/// Data-space bounds for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// X axis bounds.
    pub x: Interval,
    /// Y axis bounds.
    pub y: Interval,
}

impl Domain {
    /// Create a domain from both axes.
    pub fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// Infer a domain from data.
    ///
    /// The fold is seeded with `[0, 0]` on both axes, so zero is always inside
    /// the result. Empty data yields `[0, 0]` on both axes.
    pub fn infer(data: &[DataPoint]) -> Self {
        let seed = Self::new(Interval::new(0.0, 0.0), Interval::new(0.0, 0.0));
        data.iter().fold(seed, |mut domain, datum| {
            if datum.x < domain.x.start {
                domain.x.start = datum.x;
            } else if datum.x > domain.x.end {
                domain.x.end = datum.x;
            }
            if datum.y < domain.y.start {
                domain.y.start = datum.y;
            } else if datum.y > domain.y.end {
                domain.y.end = datum.y;
            }
            domain
        })
    }
}

/// Explicit domain bounds; a missing axis falls back to inference.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DomainOverride {
    /// X axis bounds.
    #[serde(default)]
    pub x: Option<Interval>,
    /// Y axis bounds.
    #[serde(default)]
    pub y: Option<Interval>,
}

impl DomainOverride {
    /// Resolve against data, inferring any axis not given explicitly.
    pub fn resolve(explicit: Option<&Self>, data: &[DataPoint]) -> Domain {
        let inferred = Domain::infer(data);
        match explicit {
            None => inferred,
            Some(explicit) => Domain::new(
                explicit.x.unwrap_or(inferred.x),
                explicit.y.unwrap_or(inferred.y),
            ),
        }
    }
}

impl From<Domain> for DomainOverride {
    fn from(domain: Domain) -> Self {
        Self {
            x: Some(domain.x),
            y: Some(domain.y),
        }
    }
}

/// Chart padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PaddingRepr")]
pub struct Padding {
    /// Top padding.
    pub top: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
    /// Right padding.
    pub right: f64,
}

impl Padding {
    /// Same padding on every side.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
            && self.right.is_finite()
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaddingRepr {
    Uniform(f64),
    Sides {
        #[serde(default)]
        top: f64,
        #[serde(default)]
        bottom: f64,
        #[serde(default)]
        left: f64,
        #[serde(default)]
        right: f64,
    },
}

impl From<PaddingRepr> for Padding {
    fn from(repr: PaddingRepr) -> Self {
        match repr {
            PaddingRepr::Uniform(value) => Self::uniform(value),
            PaddingRepr::Sides {
                top,
                bottom,
                left,
                right,
            } => Self {
                top,
                bottom,
                left,
                right,
            },
        }
    }
}

/// Pixel-space bounds for both axes.
///
/// `y` runs from the bottom edge to the top edge because pixel y grows
/// downward while data y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRange {
    /// X axis pixel bounds.
    pub x: Interval,
    /// Y axis pixel bounds (inverted).
    pub y: Interval,
}

impl PixelRange {
    /// Compute the pixel range for a chart of the given size.
    pub fn new(width: f64, height: f64, padding: Padding) -> Option<Self> {
        if !width.is_finite() || !height.is_finite() || !padding.is_finite() {
            return None;
        }
        let range = Self {
            x: Interval::new(padding.left, width - padding.right),
            y: Interval::new(height - padding.bottom, padding.top),
        };
        if range.x.span() == 0.0 || range.y.span() == 0.0 {
            return None;
        }
        Some(range)
    }

    /// Box spanned by the min and max corners of the range.
    pub fn extent(&self) -> Extent {
        Extent::new(
            ScreenPoint::new(self.x.min(), self.y.min()),
            ScreenPoint::new(self.x.max(), self.y.max()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inferred_domain_includes_zero() {
        let data = [DataPoint::new(1.0, 2.0), DataPoint::new(3.0, 4.0)];
        let domain = Domain::infer(&data);
        assert_eq!(domain.x, Interval::new(0.0, 3.0));
        assert_eq!(domain.y, Interval::new(0.0, 4.0));
    }

    #[test]
    fn inferred_domain_tracks_negative_values() {
        let data = [DataPoint::new(-2.0, 5.0), DataPoint::new(4.0, -7.0)];
        let domain = Domain::infer(&data);
        assert_eq!(domain.x, Interval::new(-2.0, 4.0));
        assert_eq!(domain.y, Interval::new(-7.0, 5.0));
    }

    #[test]
    fn override_replaces_single_axis() {
        let data = [DataPoint::new(1.0, 2.0), DataPoint::new(3.0, 4.0)];
        let explicit = DomainOverride {
            x: Some(Interval::new(1.0, 3.0)),
            y: None,
        };
        let domain = DomainOverride::resolve(Some(&explicit), &data);
        assert_eq!(domain.x, Interval::new(1.0, 3.0));
        assert_eq!(domain.y, Interval::new(0.0, 4.0));
    }

    #[test]
    fn pixel_range_inverts_y() {
        let range = PixelRange::new(100.0, 80.0, Padding::uniform(10.0)).unwrap();
        assert_eq!(range.x, Interval::new(10.0, 90.0));
        assert_eq!(range.y, Interval::new(70.0, 10.0));
        let extent = range.extent();
        assert_eq!(extent.min, ScreenPoint::new(10.0, 10.0));
        assert_eq!(extent.max, ScreenPoint::new(90.0, 70.0));
    }

    #[test]
    fn pixel_range_rejects_collapsed_area() {
        assert!(PixelRange::new(100.0, 100.0, Padding::uniform(50.0)).is_none());
        assert!(PixelRange::new(f64::NAN, 100.0, Padding::uniform(0.0)).is_none());
    }

    #[test]
    fn padding_accepts_number_or_sides() {
        let uniform: Padding = serde_json::from_str("20").unwrap();
        assert_eq!(uniform, Padding::uniform(20.0));
        let sides: Padding = serde_json::from_str(r#"{"top":5,"left":10}"#).unwrap();
        assert_eq!(sides.top, 5.0);
        assert_eq!(sides.left, 10.0);
        assert_eq!(sides.bottom, 0.0);
    }
}
