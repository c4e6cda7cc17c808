//! SVG path string builder.

use std::fmt::Write;

use crate::geom::ScreenPoint;

/// Accumulates draw commands into an SVG path description.
///
/// Numbers are written in their shortest round-trip form, so integral
/// coordinates carry no fractional part (`M0,100L100,0`).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PathBuilder {
    data: String,
}

impl PathBuilder {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath.
    pub fn move_to(&mut self, point: ScreenPoint) {
        self.data.push('M');
        push_pair(&mut self.data, point);
    }

    /// Draw a straight segment.
    pub fn line_to(&mut self, point: ScreenPoint) {
        self.data.push('L');
        push_pair(&mut self.data, point);
    }

    /// Draw a cubic Bézier segment.
    pub fn cubic_to(&mut self, control1: ScreenPoint, control2: ScreenPoint, end: ScreenPoint) {
        self.data.push('C');
        push_pair(&mut self.data, control1);
        self.data.push(',');
        push_pair(&mut self.data, control2);
        self.data.push(',');
        push_pair(&mut self.data, end);
    }

    /// Close the current subpath.
    pub fn close(&mut self) {
        self.data.push('Z');
    }

    /// Check whether no command has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether the last command closes a subpath.
    pub fn is_closed(&self) -> bool {
        self.data.ends_with('Z')
    }

    /// Access the path written so far.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Consume the builder and return the path description.
    pub fn finish(self) -> String {
        self.data
    }
}

/// Write a point as `x,y`.
pub(crate) fn push_pair(out: &mut String, point: ScreenPoint) {
    push_number(out, point.x);
    out.push(',');
    push_number(out, point.y);
}

fn push_number(out: &mut String, value: f64) {
    // -0 prints as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    let _ = write!(out, "{value}");
}
