//! Curve interpolation between screen points.
//!
//! Each family traces a point sequence into a [`PathBuilder`]. The first
//! point either starts a subpath or continues the current one, depending on
//! the [`Join`]; area shapes use the latter to run their lower edge back to
//! the start.

use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{ChartError, ChartResult};
use crate::geom::ScreenPoint;
use crate::render::path::PathBuilder;

const EPSILON: f64 = 1e-12;

/// How the first traced point attaches to the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// Start a new subpath with a move.
    Move,
    /// Continue the current subpath with a line.
    Line,
}

/// Named curve family.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum CurveFamily {
    /// Straight segments.
    #[default]
    Linear,
    /// Straight segments, closing the subpath.
    LinearClosed,
    /// Step changing halfway between points.
    Step,
    /// Step changing at the start of each segment.
    StepBefore,
    /// Step changing at the end of each segment.
    StepAfter,
    /// Uniform cubic B-spline.
    Basis,
    /// Cardinal spline with zero tension.
    Cardinal,
    /// Centripetal Catmull-Rom spline.
    CatmullRom,
    /// Natural cubic spline.
    Natural,
    /// Cubic spline preserving monotonicity in x.
    MonotoneX,
    /// Cubic spline preserving monotonicity in y.
    MonotoneY,
}

impl CurveFamily {
    /// Resolve a family by name.
    pub fn resolve(name: &str) -> ChartResult<Self> {
        name.parse()
            .map_err(|_| ChartError::UnknownCurveFamily(name.to_string()))
    }

    /// Family name as used in configuration.
    pub fn name(self) -> &'static str {
        self.into()
    }

    fn trace(self, points: &[ScreenPoint], path: &mut PathBuilder, join: Join) {
        match self {
            Self::Linear => linear(points, path, join),
            // Each ring is its own subpath, even on an area's lower edge.
            Self::LinearClosed => {
                linear(points, path, Join::Move);
                if !points.is_empty() {
                    path.close();
                }
            }
            Self::Step => step(points, path, join, 0.5),
            Self::StepBefore => step(points, path, join, 0.0),
            Self::StepAfter => step(points, path, join, 1.0),
            Self::Basis => basis(points, path, join),
            Self::Cardinal => cardinal(points, path, join, 0.0),
            Self::CatmullRom => catmull_rom(points, path, join, 0.5),
            Self::Natural => natural(points, path, join),
            Self::MonotoneX => monotone(points, path, join, false),
            Self::MonotoneY => monotone(points, path, join, true),
        }
    }
}

/// User-supplied curve.
pub type CustomCurve = Arc<dyn Fn(&[ScreenPoint], &mut PathBuilder, Join) + Send + Sync>;

/// Curve used to connect points.
#[derive(Clone)]
pub enum Curve {
    /// Built-in family.
    Family(CurveFamily),
    /// Custom tracing callback.
    Custom(CustomCurve),
}

impl Curve {
    /// Trace points into the path.
    pub fn trace(&self, points: &[ScreenPoint], path: &mut PathBuilder, join: Join) {
        match self {
            Self::Family(family) => family.trace(points, path, join),
            Self::Custom(trace) => trace(points, path, join),
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::Family(CurveFamily::default())
    }
}

impl From<CurveFamily> for Curve {
    fn from(family: CurveFamily) -> Self {
        Self::Family(family)
    }
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Family(family) => write!(f, "Curve::Family({family})"),
            Self::Custom(_) => write!(f, "Curve::Custom(..)"),
        }
    }
}

/// Curve selection as configured: a name, or a callable used directly.
#[derive(Clone)]
pub enum Interpolation {
    /// Curve family name, resolved lazily.
    Named(String),
    /// Custom tracing callback.
    Custom(CustomCurve),
}

impl Interpolation {
    /// Wrap a tracing callback.
    pub fn custom(
        trace: impl Fn(&[ScreenPoint], &mut PathBuilder, Join) + Send + Sync + 'static,
    ) -> Self {
        Self::Custom(Arc::new(trace))
    }

    /// Resolve into a curve; no interpolation means the linear default.
    pub fn resolve(interpolation: Option<&Self>) -> ChartResult<Curve> {
        match interpolation {
            None => Ok(Curve::default()),
            Some(Self::Named(name)) => CurveFamily::resolve(name).map(Curve::Family),
            Some(Self::Custom(trace)) => Ok(Curve::Custom(Arc::clone(trace))),
        }
    }
}

impl From<&str> for Interpolation {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for Interpolation {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl std::fmt::Debug for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "Interpolation::Named({name:?})"),
            Self::Custom(_) => write!(f, "Interpolation::Custom(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for Interpolation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Named)
    }
}

fn begin(path: &mut PathBuilder, point: ScreenPoint, join: Join) {
    match join {
        Join::Move => path.move_to(point),
        Join::Line => path.line_to(point),
    }
}

fn linear(points: &[ScreenPoint], path: &mut PathBuilder, join: Join) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    begin(path, *first, join);
    for point in rest {
        path.line_to(*point);
    }
}

fn step(points: &[ScreenPoint], path: &mut PathBuilder, join: Join, t: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    // Running backwards along the lower edge of an area mirrors the step.
    let t = match join {
        Join::Move => t,
        Join::Line => 1.0 - t,
    };
    begin(path, *first, join);
    let mut prev = *first;
    for point in rest {
        if t <= 0.0 {
            path.line_to(ScreenPoint::new(prev.x, point.y));
            path.line_to(*point);
        } else {
            let x = prev.x * (1.0 - t) + point.x * t;
            path.line_to(ScreenPoint::new(x, prev.y));
            path.line_to(ScreenPoint::new(x, point.y));
        }
        prev = *point;
    }
    if t > 0.0 && t < 1.0 && !rest.is_empty() {
        path.line_to(prev);
    }
}

fn basis(points: &[ScreenPoint], path: &mut PathBuilder, join: Join) {
    let n = points.len();
    if n == 0 {
        return;
    }
    begin(path, points[0], join);
    if n == 1 {
        return;
    }
    if n == 2 {
        path.line_to(points[1]);
        return;
    }
    let (p0, p1) = (points[0], points[1]);
    path.line_to(ScreenPoint::new((5.0 * p0.x + p1.x) / 6.0, (5.0 * p0.y + p1.y) / 6.0));
    for window in points.windows(3) {
        basis_segment(path, window[0], window[1], window[2]);
    }
    let (last_but_one, last) = (points[n - 2], points[n - 1]);
    basis_segment(path, last_but_one, last, last);
    path.line_to(last);
}

fn basis_segment(path: &mut PathBuilder, p0: ScreenPoint, p1: ScreenPoint, p: ScreenPoint) {
    path.cubic_to(
        ScreenPoint::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0),
        ScreenPoint::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0),
        ScreenPoint::new((p0.x + 4.0 * p1.x + p.x) / 6.0, (p0.y + 4.0 * p1.y + p.y) / 6.0),
    );
}

fn cardinal(points: &[ScreenPoint], path: &mut PathBuilder, join: Join, tension: f64) {
    let n = points.len();
    if n == 0 {
        return;
    }
    begin(path, points[0], join);
    if n == 2 {
        path.line_to(points[1]);
    }
    if n < 3 {
        return;
    }
    let k = (1.0 - tension) / 6.0;
    for i in 0..n - 1 {
        let (a, b) = (points[i], points[i + 1]);
        // The missing neighbours at either end are reflections, which puts
        // the outer control points on the end points themselves.
        let prev = if i == 0 { b } else { points[i - 1] };
        let next = if i + 2 < n { points[i + 2] } else { a };
        path.cubic_to(
            ScreenPoint::new(a.x + k * (b.x - prev.x), a.y + k * (b.y - prev.y)),
            ScreenPoint::new(b.x + k * (a.x - next.x), b.y + k * (a.y - next.y)),
            b,
        );
    }
}

fn catmull_rom(points: &[ScreenPoint], path: &mut PathBuilder, join: Join, alpha: f64) {
    let n = points.len();
    if n == 0 {
        return;
    }
    begin(path, points[0], join);
    if n == 2 {
        path.line_to(points[1]);
    }
    if n < 3 {
        return;
    }
    // |p - q|^alpha and its square.
    let lengths = |p: ScreenPoint, q: ScreenPoint| {
        let squared = p.distance_squared(q).powf(alpha);
        (squared.sqrt(), squared)
    };
    for i in 0..n - 1 {
        let (a, b) = (points[i], points[i + 1]);
        let (l12_a, l12_2a) = lengths(a, b);
        let mut control1 = a;
        let mut control2 = b;
        if i > 0 {
            let prev = points[i - 1];
            let (l01_a, l01_2a) = lengths(prev, a);
            if l01_a > EPSILON {
                let scale = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
                let norm = 3.0 * l01_a * (l01_a + l12_a);
                control1 = ScreenPoint::new(
                    (a.x * scale - prev.x * l12_2a + b.x * l01_2a) / norm,
                    (a.y * scale - prev.y * l12_2a + b.y * l01_2a) / norm,
                );
            }
        }
        if i + 2 < n {
            let next = points[i + 2];
            let (l23_a, l23_2a) = lengths(b, next);
            if l23_a > EPSILON {
                let scale = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
                let norm = 3.0 * l23_a * (l23_a + l12_a);
                control2 = ScreenPoint::new(
                    (b.x * scale + a.x * l23_2a - next.x * l12_2a) / norm,
                    (b.y * scale + a.y * l23_2a - next.y * l12_2a) / norm,
                );
            }
        }
        path.cubic_to(control1, control2, b);
    }
}

fn natural(points: &[ScreenPoint], path: &mut PathBuilder, join: Join) {
    let n = points.len();
    if n == 0 {
        return;
    }
    begin(path, points[0], join);
    if n == 2 {
        path.line_to(points[1]);
    }
    if n < 3 {
        return;
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let (ax, bx) = natural_controls(&xs);
    let (ay, by) = natural_controls(&ys);
    for i in 0..n - 1 {
        path.cubic_to(
            ScreenPoint::new(ax[i], ay[i]),
            ScreenPoint::new(bx[i], by[i]),
            points[i + 1],
        );
    }
}

/// Solve the tridiagonal system for natural spline control points.
///
/// Requires at least three values.
fn natural_controls(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = values.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];
    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = values[0] + 2.0 * values[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * values[i] + 2.0 * values[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * values[n - 1] + values[n];
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (values[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * values[i + 1] - a[i + 1];
    }
    (a, b)
}

fn monotone(points: &[ScreenPoint], path: &mut PathBuilder, join: Join, along_y: bool) {
    let orient = |p: ScreenPoint| if along_y { p.transposed() } else { p };
    let mut pts: Vec<ScreenPoint> = Vec::with_capacity(points.len());
    for point in points.iter().copied().map(orient) {
        // Coincident neighbours carry no slope information.
        if pts.last() != Some(&point) {
            pts.push(point);
        }
    }
    let n = pts.len();
    if n == 0 {
        return;
    }
    begin(path, orient(pts[0]), join);
    if n == 2 {
        path.line_to(orient(pts[1]));
    }
    if n < 3 {
        return;
    }
    let mut segment = |p0: ScreenPoint, p1: ScreenPoint, t0: f64, t1: f64| {
        let dx = (p1.x - p0.x) / 3.0;
        path.cubic_to(
            orient(ScreenPoint::new(p0.x + dx, p0.y + dx * t0)),
            orient(ScreenPoint::new(p1.x - dx, p1.y - dx * t1)),
            orient(p1),
        );
    };
    let mut t0 = monotone_slope3(pts[0], pts[1], pts[2]);
    segment(pts[0], pts[1], monotone_slope2(pts[0], pts[1], t0), t0);
    for k in 3..n {
        let t1 = monotone_slope3(pts[k - 2], pts[k - 1], pts[k]);
        segment(pts[k - 2], pts[k - 1], t0, t1);
        t0 = t1;
    }
    let (p0, p1) = (pts[n - 2], pts[n - 1]);
    segment(p0, p1, t0, monotone_slope2(p0, p1, t0));
}

fn nonzero_or_signed_zero(h: f64, other: f64) -> f64 {
    if h != 0.0 && !h.is_nan() {
        h
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    }
}

/// Tangent at `p1` from its neighbours (Steffen's method).
fn monotone_slope3(p0: ScreenPoint, p1: ScreenPoint, p2: ScreenPoint) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = (p1.y - p0.y) / nonzero_or_signed_zero(h0, h1);
    let s1 = (p2.y - p1.y) / nonzero_or_signed_zero(h1, h0);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    if s0.is_nan() || s1.is_nan() || p.is_nan() {
        return 0.0;
    }
    let sign = |v: f64| if v < 0.0 { -1.0 } else { 1.0 };
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_nan() { 0.0 } else { slope }
}

/// One-sided tangent at an end point.
fn monotone_slope2(p0: ScreenPoint, p1: ScreenPoint, t: f64) -> f64 {
    let h = p1.x - p0.x;
    if h != 0.0 && !h.is_nan() {
        (3.0 * (p1.y - p0.y) / h - t) / 2.0
    } else {
        t
    }
}
