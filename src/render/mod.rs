//! Path synthesis for line, area and voronoi shapes.
//!
//! Points are scaled through a [`Transform`] and traced with a [`Curve`]
//! into an SVG path description.

mod curve;
mod path;
pub mod voronoi;

pub use curve::{Curve, CurveFamily, CustomCurve, Interpolation, Join};
pub use path::PathBuilder;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::geom::{DataPoint, ScreenPoint};
use crate::plot::ChartProps;
use crate::transform::Transform;

/// Shape family a path is synthesized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ShapeKind {
    /// Open polyline or curve through the points.
    Line,
    /// Filled region between the upper and lower bounds.
    Area,
    /// Voronoi cell around one point.
    Voronoi,
}

impl ShapeKind {
    /// Resolve a shape by name.
    pub fn resolve(name: &str) -> ChartResult<Self> {
        name.parse()
            .map_err(|_| ChartError::UnsupportedShapeKind(name.to_string()))
    }
}

/// Synthesize a path for already-resolved scales.
///
/// `index` selects the voronoi cell and is ignored by other shapes.
pub fn synthesize_path(
    transform: &Transform,
    shape: ShapeKind,
    data: &[DataPoint],
    index: usize,
    curve: &Curve,
) -> ChartResult<String> {
    if data.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let path = match shape {
        ShapeKind::Line => {
            let points = scaled(data, |datum| transform.data_to_screen(datum.x, datum.y))?;
            let mut path = PathBuilder::new();
            curve.trace(&points, &mut path, Join::Move);
            if points.len() == 1 && !path.is_closed() {
                path.close();
            }
            path.finish()
        }
        ShapeKind::Area => {
            let upper = scaled(data, |datum| {
                transform.data_to_screen(datum.x, datum.y1.unwrap_or(datum.y))
            })?;
            let mut lower = scaled(data, |datum| {
                transform.data_to_screen(datum.x, datum.y0.unwrap_or(0.0))
            })?;
            lower.reverse();
            let mut path = PathBuilder::new();
            curve.trace(&upper, &mut path, Join::Move);
            curve.trace(&lower, &mut path, Join::Line);
            if !path.is_closed() {
                path.close();
            }
            path.finish()
        }
        ShapeKind::Voronoi => {
            let sites = scaled(data, |datum| transform.data_to_screen(datum.x, datum.y))?;
            let polygon = voronoi::cell(&sites, transform.range().extent(), index)?;
            voronoi::cell_path(&polygon)
        }
    };
    debug!(shape = %shape, points = data.len(), index, len = path.len(), "synthesized path");
    Ok(path)
}

/// Resolve scales and curve from chart properties and synthesize a path.
pub fn calculate_path(props: &ChartProps, shape: ShapeKind, index: usize) -> ChartResult<String> {
    let transform = Transform::from_props(props)?;
    let curve = props.curve()?;
    synthesize_path(&transform, shape, &props.data, index, &curve)
}

/// [`calculate_path`] with the shape given by name.
pub fn calculate_path_named(props: &ChartProps, shape: &str, index: usize) -> ChartResult<String> {
    calculate_path(props, ShapeKind::resolve(shape)?, index)
}

fn scaled(
    data: &[DataPoint],
    map: impl Fn(&DataPoint) -> ScreenPoint,
) -> ChartResult<Vec<ScreenPoint>> {
    data.iter()
        .enumerate()
        .map(|(index, datum)| {
            let point = map(datum);
            if point.is_finite() {
                Ok(point)
            } else {
                Err(ChartError::NonFiniteCoordinate { index })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{DomainOverride, Interval};

    fn props(data: Vec<DataPoint>) -> ChartProps {
        ChartProps::builder()
            .width(100.0)
            .height(100.0)
            .padding(0.0)
            .data(data)
            .build()
    }

    #[test]
    fn line_through_two_points() {
        let props = props(vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)]);
        let path = calculate_path(&props, ShapeKind::Line, 0).unwrap();
        insta::assert_snapshot!(path, @"M0,100L100,0");
    }

    #[test]
    fn single_point_line_is_closed() {
        let props = props(vec![DataPoint::new(0.0, 0.0)]);
        let path = calculate_path(&props, ShapeKind::Line, 0).unwrap();
        assert_eq!(path, "M50,50Z");
    }

    #[test]
    fn area_runs_back_along_lower_bound() {
        let props = props(vec![
            DataPoint::new(0.0, 10.0).with_y0(0.0),
            DataPoint::new(10.0, 5.0).with_y0(0.0),
        ]);
        let path = calculate_path(&props, ShapeKind::Area, 0).unwrap();
        assert_eq!(path, "M0,0L100,50L100,100L0,100Z");
    }

    #[test]
    fn area_prefers_explicit_upper_bound() {
        let props = props(vec![
            DataPoint::new(0.0, 10.0).with_y1(5.0),
            DataPoint::new(10.0, 10.0).with_y1(5.0),
        ]);
        let path = calculate_path(&props, ShapeKind::Area, 0).unwrap();
        assert_eq!(path, "M0,50L100,50L100,100L0,100Z");
    }

    #[test]
    fn closed_area_draws_two_rings() {
        let props = ChartProps::builder()
            .width(100.0)
            .height(100.0)
            .padding(0.0)
            .interpolation("linearClosed")
            .data(vec![
                DataPoint::new(0.0, 10.0).with_y0(0.0),
                DataPoint::new(10.0, 5.0).with_y0(0.0),
            ])
            .build();
        let path = calculate_path(&props, ShapeKind::Area, 0).unwrap();
        assert_eq!(path, "M0,0L100,50ZM100,100L0,100Z");
    }

    #[test]
    fn closing_custom_curve_is_not_closed_twice() {
        let props = ChartProps::builder()
            .width(100.0)
            .height(100.0)
            .padding(0.0)
            .interpolation(Interpolation::custom(|points, path, join| {
                for (i, point) in points.iter().enumerate() {
                    if i == 0 && join == Join::Move {
                        path.move_to(*point);
                    } else {
                        path.line_to(*point);
                    }
                }
                path.close();
            }))
            .data(vec![DataPoint::new(0.0, 10.0), DataPoint::new(10.0, 5.0)])
            .build();
        let area = calculate_path(&props, ShapeKind::Area, 0).unwrap();
        assert_eq!(area, "M0,0L100,50ZL100,100L0,100Z");
        let single = props.data[..1].to_vec();
        let props = ChartProps { data: single, ..props };
        let line = calculate_path(&props, ShapeKind::Line, 0).unwrap();
        assert_eq!(line, "M50,0Z");
    }

    #[test]
    fn voronoi_cell_uses_range_extent() {
        let props = props(vec![DataPoint::new(0.0, 5.0), DataPoint::new(10.0, 5.0)]);
        let path = calculate_path(&props, ShapeKind::Voronoi, 1).unwrap();
        insta::assert_snapshot!(path, @"M 50,0L100,0L100,100L50,100 Z");
    }

    #[test]
    fn named_curve_is_applied() {
        let props = ChartProps::builder()
            .width(100.0)
            .height(100.0)
            .padding(0.0)
            .interpolation("stepAfter")
            .data(vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)])
            .build();
        let path = calculate_path(&props, ShapeKind::Line, 0).unwrap();
        assert_eq!(path, "M0,100L100,100L100,0");
    }

    #[test]
    fn unknown_shape_is_unsupported() {
        let props = props(vec![DataPoint::new(0.0, 0.0)]);
        assert!(matches!(
            calculate_path_named(&props, "bar", 0),
            Err(ChartError::UnsupportedShapeKind(name)) if name == "bar"
        ));
        assert!(calculate_path_named(&props, "line", 0).is_ok());
    }

    #[test]
    fn empty_data_is_rejected() {
        let props = props(Vec::new());
        assert!(matches!(
            calculate_path(&props, ShapeKind::Line, 0),
            Err(ChartError::EmptyData)
        ));
    }

    #[test]
    fn unmappable_value_is_rejected() {
        let props = ChartProps::builder()
            .scale("log")
            .domain(DomainOverride {
                x: Some(Interval::new(1.0, 10.0)),
                y: Some(Interval::new(1.0, 10.0)),
            })
            .data(vec![DataPoint::new(1.0, 1.0), DataPoint::new(-1.0, 10.0)])
            .build();
        assert!(matches!(
            calculate_path(&props, ShapeKind::Line, 0),
            Err(ChartError::NonFiniteCoordinate { index: 1 })
        ));
    }
}
