// Modules
mod arrow;
mod ellipse;
mod line;
mod rectangle;
mod shape;
mod shapeable;
mod style;
mod text;
mod triangle;

// Re-exports
pub use arrow::Arrow;
pub use ellipse::Ellipse;
pub use line::Line;
pub use rectangle::Rectangle;
pub use shape::Shape;
pub use shapeable::Shapeable;
pub use style::{ShapeStyle, SizeStyle};
pub use text::Text;
pub use triangle::Triangle;

// Imports
use crate::ext::Vector2Ext;
use p2d::bounding_volume::Aabb;

/// The tolerance used when flattening curved outlines into point rings.
const FLATTEN_TOLERANCE: f64 = 0.1;
/// The accuracy used when approximating conic curves by bezier paths.
const CURVE_PATH_ACCURACY: f64 = 0.25;

/// Bounds of a point set that is non-empty by construction.
fn points_aabb(points: &[na::Vector2<f64>]) -> Aabb {
    let points = points
        .iter()
        .map(|p| na::Point2::from(*p))
        .collect::<Vec<na::Point2<f64>>>();

    if points.is_empty() {
        return Aabb::new(na::point![0.0, 0.0], na::point![0.0, 0.0]);
    }
    Aabb::from_points(&points)
}

/// Flattens the path into its vertices. A closing vertex that repeats the first one is dropped.
fn flatten_path(path: &kurbo::BezPath) -> Vec<na::Vector2<f64>> {
    let mut points = Vec::new();

    kurbo::flatten(path.iter(), FLATTEN_TOLERANCE, |el| match el {
        kurbo::PathEl::MoveTo(point) | kurbo::PathEl::LineTo(point) => {
            points.push(na::vector![point.x, point.y])
        }
        _ => {}
    });

    if points.len() > 1
        && points
            .first()
            .zip(points.last())
            .is_some_and(|(first, last)| first.approx_eq(last))
    {
        points.pop();
    }
    points
}
