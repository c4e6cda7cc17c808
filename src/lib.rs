//! plotpath maps chart data onto pixel space and turns it into SVG paths.
//! The reverse direction parses rendered paths back into commands so tests
//! can assert on the shapes a chart draws.

#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod geom;
pub mod parse;
pub mod plot;
pub mod render;
pub mod svg;
pub mod transform;
pub mod verify;
pub mod view;

pub use axis::ScaleFamily;
pub use error::{ChartError, ChartResult};
pub use geom::{DataPoint, Extent, ScreenPoint};
pub use parse::{CommandKind, PathCommand, parse_path};
pub use plot::{ChartProps, ChartPropsBuilder, ScaleSpec};
pub use render::{
    Curve, CurveFamily, Interpolation, Join, PathBuilder, ShapeKind, calculate_path,
    calculate_path_named, synthesize_path,
};
pub use svg::{commands_from_svg, path_data_from_svg, render_document};
pub use transform::{ScaleTransform, Transform};
pub use verify::{
    BarBounds, RECTANGULAR_BAR, exhibits_shape_sequence, is_rectangular_bar, measure_bar_bounds,
    measure_bar_height,
};
pub use view::{Domain, DomainOverride, Interval, Padding, PixelRange};
