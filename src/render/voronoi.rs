//! Voronoi cells clipped to an extent.

use crate::error::{ChartError, ChartResult};
use crate::geom::{Extent, ScreenPoint};
use crate::render::path::push_pair;

const VERTEX_EPSILON: f64 = 1e-9;

/// Compute the cell of `sites[index]` inside `extent`.
///
/// The cell starts as the extent box and is cut by the perpendicular
/// bisector towards every other site. Sites coinciding with the requested
/// one are skipped, so duplicates share the same cell.
pub fn cell(
    sites: &[ScreenPoint],
    extent: Extent,
    index: usize,
) -> ChartResult<Vec<ScreenPoint>> {
    let site = *sites.get(index).ok_or(ChartError::CellIndexOutOfRange {
        index,
        len: sites.len(),
    })?;
    let mut polygon = extent.corners().to_vec();
    for (other_index, other) in sites.iter().enumerate() {
        if other_index == index || *other == site {
            continue;
        }
        polygon = clip_towards(&polygon, site, *other);
        if polygon.len() < 3 {
            return Err(ChartError::EmptyCell { index });
        }
    }
    Ok(polygon)
}

/// Format a cell as a closed polygon path (`M x,yLx,y... Z`).
pub fn cell_path(polygon: &[ScreenPoint]) -> String {
    let mut out = String::from("M ");
    for (i, vertex) in polygon.iter().enumerate() {
        if i > 0 {
            out.push('L');
        }
        push_pair(&mut out, *vertex);
    }
    out.push_str(" Z");
    out
}

/// Keep the part of `polygon` closer to `site` than to `other`.
fn clip_towards(
    polygon: &[ScreenPoint],
    site: ScreenPoint,
    other: ScreenPoint,
) -> Vec<ScreenPoint> {
    let mid = ScreenPoint::new((site.x + other.x) * 0.5, (site.y + other.y) * 0.5);
    let normal = ScreenPoint::new(other.x - site.x, other.y - site.y);
    let side = |p: ScreenPoint| (p.x - mid.x) * normal.x + (p.y - mid.y) * normal.y;

    let mut out: Vec<ScreenPoint> = Vec::with_capacity(polygon.len() + 1);
    let push = |out: &mut Vec<ScreenPoint>, p: ScreenPoint| {
        let duplicate = out
            .last()
            .is_some_and(|last| last.distance_squared(p) < VERTEX_EPSILON * VERTEX_EPSILON);
        if !duplicate {
            out.push(p);
        }
    };
    let n = polygon.len();
    for i in 0..n {
        let current = polygon[i];
        let previous = polygon[(i + n - 1) % n];
        let (d_cur, d_prev) = (side(current), side(previous));
        let cur_inside = d_cur <= 0.0;
        let prev_inside = d_prev <= 0.0;
        if cur_inside != prev_inside {
            let t = d_prev / (d_prev - d_cur);
            let crossing = ScreenPoint::new(
                previous.x + (current.x - previous.x) * t,
                previous.y + (current.y - previous.y) * t,
            );
            push(&mut out, crossing);
        }
        if cur_inside {
            push(&mut out, current);
        }
    }
    let wraps = out.len() > 1
        && out[0].distance_squared(out[out.len() - 1]) < VERTEX_EPSILON * VERTEX_EPSILON;
    if wraps {
        out.pop();
    }
    out
}
