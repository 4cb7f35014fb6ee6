// Imports
use super::{ShapeStyle, Shapeable};
use crate::polygon::Polygon;
use crate::Transform;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

/// How far a label is moved from the bounds center towards the centroid.
const LABEL_CENTROID_FACTOR: f64 = 0.72;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "triangle")]
/// An isosceles triangle, its apex centered on the top edge of its box.
///
/// ```text
///          apex
///          /\
///         /  \
///        /    \
///       /______\
///    left      right
/// ```
pub struct Triangle {
    /// The upper-left corner of the unrotated box.
    #[serde(rename = "position")]
    pub position: na::Vector2<f64>,
    /// Width and height of the box.
    #[serde(rename = "size")]
    pub size: na::Vector2<f64>,
    /// Rotation around the centroid, in radians.
    #[serde(rename = "rotation")]
    pub rotation: f64,
    /// The style.
    #[serde(rename = "style")]
    pub style: ShapeStyle,
}

impl Default for Triangle {
    fn default() -> Self {
        Self {
            position: na::Vector2::zeros(),
            size: na::vector![1.0, 1.0],
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }
}

impl Shapeable for Triangle {
    fn outline(&self) -> Polygon {
        Polygon::new(self.transform().transform_points(self.local_points()))
    }

    fn bounds(&self) -> Aabb {
        super::points_aabb(self.outline().points())
    }

    fn expanded_outline(&self, margin: f64) -> Polygon {
        let expanded = Polygon::new(self.local_points().to_vec()).offset(margin);
        Polygon::new(self.transform().transform_points(expanded.points))
    }

    fn centroid(&self) -> na::Vector2<f64> {
        // the rotation pivots around the centroid, so it only moves with the position
        self.position + self.local_centroid()
    }

    fn stroke_width(&self) -> f64 {
        self.style.stroke_width()
    }

    fn label_offset(&self) -> na::Vector2<f64> {
        let center_y = self.size[1] * 0.5;
        na::vector![0.0, (self.local_centroid()[1] - center_y) * LABEL_CENTROID_FACTOR]
    }
}

impl Triangle {
    /// A new unrotated triangle.
    pub fn new(position: na::Vector2<f64>, size: na::Vector2<f64>) -> Self {
        Self {
            position,
            size,
            ..Default::default()
        }
    }

    /// With the given rotation in radians.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// The placement of the local frame, rotating around the centroid.
    pub fn transform(&self) -> Transform {
        Transform::from_placement(self.position, self.rotation, self.local_centroid())
    }

    /// apex, right, left in the local frame.
    fn local_points(&self) -> [na::Vector2<f64>; 3] {
        let (w, h) = (self.size[0], self.size[1]);
        [
            na::vector![w * 0.5, 0.0],
            na::vector![w, h],
            na::vector![0.0, h],
        ]
    }

    /// The centroid in the local frame, the mean of the three vertices.
    fn local_centroid(&self) -> na::Vector2<f64> {
        na::vector![self.size[0] * 0.5, self.size[1] * 2.0 / 3.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::AabbExt;
    use crate::point_utils;
    use approx::assert_relative_eq;

    #[test]
    fn centroid_differs_from_box_center() {
        let triangle = Triangle::new(na::vector![0.0, 0.0], na::vector![10.0, 10.0]);
        let centroid = triangle.centroid();

        assert_relative_eq!(centroid, na::vector![5.0, 20.0 / 3.0], epsilon = 1e-12);
        assert_relative_eq!(centroid, triangle.outline().centroid().unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn rotates_around_centroid() {
        let angle = 1.1;
        let upright = Triangle::new(na::vector![4.0, -2.0], na::vector![10.0, 12.0]);
        let rotated = upright.with_rotation(angle);

        assert_relative_eq!(rotated.centroid(), upright.centroid(), epsilon = 1e-12);
        assert_relative_eq!(
            rotated.outline().centroid().unwrap(),
            upright.centroid(),
            epsilon = 1e-9
        );

        let apex = upright.outline().points[0];
        assert_relative_eq!(
            rotated.outline().points[0],
            point_utils::rotate_about(apex, upright.centroid(), angle),
            epsilon = 1e-9
        );
    }

    #[test]
    fn expanded_outline_surrounds_outline() {
        let triangle =
            Triangle::new(na::vector![0.0, 0.0], na::vector![10.0, 10.0]).with_rotation(0.3);
        let expanded = triangle.expanded_outline(2.0);

        for p in triangle.outline().points {
            assert!(expanded.contains_point(p));
        }
        assert!(triangle.expanded_bounds(2.0).contains_aabb_inclusive(&triangle.bounds()));
        assert!(triangle.expanded_bounds(0.0).approx_eq(&triangle.bounds()));

        // every expanded edge keeps the margin from the triangle
        for (a, b) in expanded.segments(true) {
            let mid = point_utils::med(a, b);
            assert_relative_eq!(
                triangle.outline().distance_to_edges(mid, true).unwrap(),
                2.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn label_moves_towards_centroid() {
        let triangle = Triangle::new(na::vector![0.0, 0.0], na::vector![10.0, 12.0]);
        // centroid at 8.0, center at 6.0
        assert_relative_eq!(triangle.label_offset(), na::vector![0.0, 2.0 * 0.72], epsilon = 1e-12);
    }
}
