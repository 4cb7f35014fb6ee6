// Imports
use crate::ext::AabbExt;
use crate::polygon::Polygon;
use p2d::bounding_volume::Aabb;

/// Geometry of a shape kind.
///
/// Outlines are in world space. Everything built on top of shapes (hit-testing, binding) goes
/// through this trait only.
pub trait Shapeable {
    /// The outline of the shape as a point ring, or as an open polyline when [Shapeable::is_closed]
    /// is false.
    fn outline(&self) -> Polygon;
    /// Whether the outline is a closed ring.
    fn is_closed(&self) -> bool {
        true
    }
    /// The bounds of the shape.
    fn bounds(&self) -> Aabb;
    /// The outline grown outward by the margin.
    fn expanded_outline(&self, margin: f64) -> Polygon;
    /// The bounds of the expanded outline. Equal to [Shapeable::bounds] for a zero margin.
    fn expanded_bounds(&self, margin: f64) -> Aabb {
        if margin == 0.0 {
            return self.bounds();
        }
        self.expanded_outline(margin)
            .bounds()
            .unwrap_or_else(|_| self.bounds().extend_by(na::Vector2::from_element(margin)))
    }
    /// The true geometric centroid of the shape, in world space.
    fn centroid(&self) -> na::Vector2<f64>;
    /// Whether arrows can bind to the shape.
    fn can_bind(&self) -> bool {
        self.is_closed()
    }
    /// The stroke width of the shape.
    fn stroke_width(&self) -> f64;
    /// Offset of a label from the center of the bounds, in the shape's local frame.
    fn label_offset(&self) -> na::Vector2<f64> {
        na::Vector2::zeros()
    }
    /// generate the path of its outline as a [kurbo::BezPath].
    fn outline_path(&self) -> kurbo::BezPath {
        self.outline().to_kurbo_path(self.is_closed())
    }
}
