// Imports
use super::{ShapeStyle, Shapeable};
use crate::polygon::Polygon;
use crate::Transform;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "rectangle")]
/// A rectangle.
pub struct Rectangle {
    /// The upper-left corner of the unrotated rectangle.
    #[serde(rename = "position")]
    pub position: na::Vector2<f64>,
    /// Width and height.
    #[serde(rename = "size")]
    pub size: na::Vector2<f64>,
    /// Rotation around the center, in radians.
    #[serde(rename = "rotation")]
    pub rotation: f64,
    /// The style.
    #[serde(rename = "style")]
    pub style: ShapeStyle,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            position: na::Vector2::zeros(),
            size: na::vector![1.0, 1.0],
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }
}

impl Shapeable for Rectangle {
    fn outline(&self) -> Polygon {
        Polygon::new(self.transform().transform_points(self.local_corners(0.0)))
    }

    fn bounds(&self) -> Aabb {
        super::points_aabb(self.outline().points())
    }

    fn expanded_outline(&self, margin: f64) -> Polygon {
        Polygon::new(self.transform().transform_points(self.local_corners(margin)))
    }

    fn centroid(&self) -> na::Vector2<f64> {
        self.position + self.size * 0.5
    }

    fn stroke_width(&self) -> f64 {
        self.style.stroke_width()
    }
}

impl Rectangle {
    /// A new unrotated rectangle.
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

    /// The placement of the local frame, rotating around the center.
    pub fn transform(&self) -> Transform {
        Transform::from_placement(self.position, self.rotation, self.size * 0.5)
    }

    /// Corners in the local frame, grown outward by the margin.
    fn local_corners(&self, margin: f64) -> [na::Vector2<f64>; 4] {
        let (w, h) = (self.size[0], self.size[1]);
        [
            na::vector![-margin, -margin],
            na::vector![w + margin, -margin],
            na::vector![w + margin, h + margin],
            na::vector![-margin, h + margin],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::AabbExt;
    use approx::assert_relative_eq;
    use kurbo::PathEl;

    #[test]
    fn bounds_and_expanded_bounds() {
        let rect = Rectangle::new(na::vector![0.0, 0.0], na::vector![10.0, 10.0]);

        let bounds = rect.bounds();
        assert_relative_eq!(bounds.mins, na::point![0.0, 0.0]);
        assert_relative_eq!(bounds.maxs, na::point![10.0, 10.0]);

        let expanded = rect.expanded_bounds(2.0);
        assert_relative_eq!(expanded.mins, na::point![-2.0, -2.0]);
        assert_relative_eq!(expanded.maxs, na::point![12.0, 12.0]);

        assert!(rect.expanded_bounds(0.0).approx_eq(&bounds));
    }

    #[test]
    fn rotated_bounds() {
        let rect = Rectangle::new(na::vector![0.0, 0.0], na::vector![10.0, 10.0])
            .with_rotation(std::f64::consts::FRAC_PI_4);

        let half_diagonal = 50.0_f64.sqrt();
        let bounds = rect.bounds();
        assert_relative_eq!(
            bounds.mins,
            na::point![5.0 - half_diagonal, 5.0 - half_diagonal],
            epsilon = 1e-9
        );
        assert_relative_eq!(
            bounds.maxs,
            na::point![5.0 + half_diagonal, 5.0 + half_diagonal],
            epsilon = 1e-9
        );
        assert_relative_eq!(rect.centroid(), na::vector![5.0, 5.0]);

        assert!(rect.expanded_bounds(3.0).contains_aabb_inclusive(&bounds));
    }

    #[test]
    fn outline_path_is_closed() {
        let rect = Rectangle::new(na::vector![0.0, 0.0], na::vector![10.0, 5.0]);
        let path = rect.outline_path();
        let elements = path.elements();

        let vertices = elements
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(na::vector![p.x, p.y]),
                _ => None,
            })
            .collect::<Vec<na::Vector2<f64>>>();
        assert_eq!(vertices.len(), 4);
        assert!(matches!(elements.first(), Some(PathEl::MoveTo(_))));
        assert!(matches!(elements.last(), Some(PathEl::ClosePath)));
        for (vertex, corner) in vertices.iter().zip(rect.outline().points()) {
            assert_relative_eq!(vertex, corner);
        }
    }
}
