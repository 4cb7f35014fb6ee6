// Imports
use super::{ShapeStyle, Shapeable};
use crate::ext::{AabbExt, Vector2Ext};
use crate::point_utils;
use crate::polygon::Polygon;
use kurbo::PathEl;
use na::Rotation2;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

/// All doc-comments of this file rely on the following graphic:
///
/// ```text
///          end
///          /|\
///         / | \
///        /  |  \
///    lline  |  rline
///           )
///           ) <- bend handle
///           )
///         start
/// ```
///
/// Where `lline`, `end`, `start` and `rline` represent a vector of the arrow. The stem runs from
/// `start` to `end` through the bend handle, which sits `bend * length / 2` away from the midpoint,
/// perpendicular to the chord.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "arrow")]
pub struct Arrow {
    /// The position the handles are relative to.
    #[serde(rename = "position")]
    pub position: na::Vector2<f64>,
    /// Start handle, relative to the position.
    #[serde(rename = "start")]
    pub start: na::Vector2<f64>,
    /// End handle (the tip), relative to the position.
    #[serde(rename = "end")]
    pub end: na::Vector2<f64>,
    /// The bend of the stem. Zero is straight.
    #[serde(rename = "bend")]
    pub bend: f64,
    /// The style.
    #[serde(rename = "style")]
    pub style: ShapeStyle,
}

impl Shapeable for Arrow {
    fn outline(&self) -> Polygon {
        if self.bend == 0.0 {
            return Polygon::new(vec![self.world_start(), self.world_end()]);
        }
        Polygon::new(super::flatten_path(&self.stem_path()))
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn bounds(&self) -> Aabb {
        let mut points = self.outline().points;
        points.extend([self.compute_lline(), self.compute_rline()]);

        super::points_aabb(&points)
    }

    fn expanded_outline(&self, margin: f64) -> Polygon {
        Polygon::from_aabb(&self.bounds().extend_by(na::Vector2::from_element(margin)))
    }

    fn centroid(&self) -> na::Vector2<f64> {
        self.bend_handle()
    }

    fn stroke_width(&self) -> f64 {
        self.style.stroke_width()
    }

    fn outline_path(&self) -> kurbo::BezPath {
        let mut bez_path = self.stem_path();

        bez_path.extend([
            PathEl::MoveTo(self.compute_lline().to_kurbo_point()),
            PathEl::LineTo(self.world_end().to_kurbo_point()),
            PathEl::LineTo(self.compute_rline().to_kurbo_point()),
        ]);

        bez_path
    }
}

impl Arrow {
    /// The tip lines (rline & lline) default length, is the actual length when
    /// no stroke width is associated with the arrow, if there is, it is used as
    /// the base length for the actual width calculation.
    const TIP_LINES_DEFAULT_LENGTH: f64 = 10.0;

    /// The angle for `rline` and `lline` to the stem of the arrow.
    const TIP_LINES_STEM_OBTUSE_ANGLE: f64 = (13.0 / 16.0) * std::f64::consts::PI;

    /// The default direction vector (the stem) if the stem has length 0.
    const DEFAULT_DIRECTION_VECTOR: na::Vector2<f64> = na::Vector2::new(1.0, 0.0);

    /// A new straight arrow between the handles.
    pub fn new(start: na::Vector2<f64>, end: na::Vector2<f64>) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    /// With the given bend.
    pub fn with_bend(mut self, bend: f64) -> Self {
        self.bend = bend;
        self
    }

    fn world_start(&self) -> na::Vector2<f64> {
        self.position + self.start
    }

    fn world_end(&self) -> na::Vector2<f64> {
        self.position + self.end
    }

    /// The point the bent stem passes through halfway, in world space.
    pub fn bend_handle(&self) -> na::Vector2<f64> {
        let (start, end) = (self.world_start(), self.world_end());
        let chord = end - start;

        point_utils::med(start, end) + chord.orth_unit() * (self.bend * chord.magnitude() * 0.5)
    }

    /// The control point of the quadratic stem that passes through the bend handle.
    fn control_point(&self) -> na::Vector2<f64> {
        self.bend_handle() * 2.0 - point_utils::med(self.world_start(), self.world_end())
    }

    /// The stem as path.
    fn stem_path(&self) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        path.move_to(self.world_start().to_kurbo_point());
        if self.bend == 0.0 {
            path.line_to(self.world_end().to_kurbo_point());
        } else {
            path.quad_to(
                self.control_point().to_kurbo_point(),
                self.world_end().to_kurbo_point(),
            );
        }
        path
    }

    /// Compute the `lline` of the arrow tip.
    pub fn compute_lline(&self) -> na::Vector2<f64> {
        let vec_a = self.compute_stem_direction_vector() * self.compute_tip_lines_length();
        let rotation_matrix = Rotation2::new(Self::TIP_LINES_STEM_OBTUSE_ANGLE);

        rotation_matrix * vec_a + self.world_end()
    }

    /// Compute the `rline` of the arrow tip.
    pub fn compute_rline(&self) -> na::Vector2<f64> {
        let vec_b = self.compute_stem_direction_vector() * self.compute_tip_lines_length();
        let rotation_matrix = Rotation2::new(-Self::TIP_LINES_STEM_OBTUSE_ANGLE);

        rotation_matrix * vec_b + self.world_end()
    }

    /// Compute the normalized direction of the stem where it arrives at the tip.
    fn compute_stem_direction_vector(&self) -> na::Vector2<f64> {
        let from = if self.bend == 0.0 {
            self.world_start()
        } else {
            self.control_point()
        };
        let direction_vector = self.world_end() - from;

        if direction_vector.norm() == 0.0 {
            Self::DEFAULT_DIRECTION_VECTOR
        } else {
            direction_vector / direction_vector.norm()
        }
    }

    /// Compute the length of the tip lines, growing with the stroke width.
    fn compute_tip_lines_length(&self) -> f64 {
        Self::TIP_LINES_DEFAULT_LENGTH * (1.0 + 0.18 * self.stroke_width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn straight_arrow() {
        let arrow = Arrow::new(na::vector![0.0, 0.0], na::vector![100.0, 0.0]);

        assert!(!arrow.can_bind());
        assert_eq!(arrow.outline().points.len(), 2);
        assert_relative_eq!(arrow.centroid(), na::vector![50.0, 0.0]);

        // the tip lines point backwards and widen the bounds vertically
        let bounds = arrow.bounds();
        assert_relative_eq!(bounds.mins[0], 0.0);
        assert_relative_eq!(bounds.maxs[0], 100.0);
        assert!(bounds.mins[1] < 0.0 && bounds.maxs[1] > 0.0);
    }

    #[test]
    fn bent_stem_passes_through_handle() {
        let arrow = Arrow::new(na::vector![0.0, 0.0], na::vector![100.0, 0.0]).with_bend(0.5);
        let handle = arrow.bend_handle();

        assert_relative_eq!(handle, na::vector![50.0, 25.0], epsilon = 1e-9);

        let outline = arrow.outline();
        assert!(outline.points.len() > 2);
        assert!(outline.distance_to_edges(handle, false).unwrap() < 0.2);
        assert!(arrow.bounds().maxs[1] >= 25.0 - 0.2);
    }

    #[test]
    fn expanded_bounds_contain_bounds() {
        let arrow = Arrow::new(na::vector![3.0, 4.0], na::vector![-20.0, 30.0]).with_bend(-0.3);
        assert!(arrow.expanded_bounds(5.0).contains_aabb_inclusive(&arrow.bounds()));
        assert!(arrow.expanded_bounds(0.0).approx_eq(&arrow.bounds()));
    }

    #[test]
    fn outline_path_has_stem_and_tip() {
        let arrow = Arrow::new(na::vector![0.0, 0.0], na::vector![100.0, 0.0]);
        let tip = [
            PathEl::MoveTo(arrow.compute_lline().to_kurbo_point()),
            PathEl::LineTo(kurbo::Point::new(100.0, 0.0)),
            PathEl::LineTo(arrow.compute_rline().to_kurbo_point()),
        ];

        let path = arrow.outline_path();
        let elements = path.elements();
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[0], PathEl::MoveTo(kurbo::Point::new(0.0, 0.0)));
        assert_eq!(elements[1], PathEl::LineTo(kurbo::Point::new(100.0, 0.0)));
        assert_eq!(&elements[2..], &tip);

        let bent = arrow.with_bend(0.5);
        let path = bent.outline_path();
        let elements = path.elements();
        assert_eq!(elements.len(), 5);
        assert!(matches!(
            elements[1],
            PathEl::QuadTo(_, end) if end == kurbo::Point::new(100.0, 0.0)
        ));
        assert_eq!(
            elements[2..],
            [
                PathEl::MoveTo(bent.compute_lline().to_kurbo_point()),
                PathEl::LineTo(kurbo::Point::new(100.0, 0.0)),
                PathEl::LineTo(bent.compute_rline().to_kurbo_point()),
            ]
        );
    }
}
