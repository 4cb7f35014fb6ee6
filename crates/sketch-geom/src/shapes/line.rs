// Imports
use super::{ShapeStyle, Shapeable};
use crate::ext::AabbExt;
use crate::point_utils;
use crate::polygon::Polygon;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "line")]
/// A straight line between two handles.
pub struct Line {
    /// The position the handles are relative to.
    #[serde(rename = "position")]
    pub position: na::Vector2<f64>,
    /// Start handle, relative to the position.
    #[serde(rename = "start")]
    pub start: na::Vector2<f64>,
    /// End handle, relative to the position.
    #[serde(rename = "end")]
    pub end: na::Vector2<f64>,
    /// The style.
    #[serde(rename = "style")]
    pub style: ShapeStyle,
}

impl Shapeable for Line {
    fn outline(&self) -> Polygon {
        Polygon::new(vec![self.position + self.start, self.position + self.end])
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn bounds(&self) -> Aabb {
        AabbExt::new_positive(
            (self.position + self.start).into(),
            (self.position + self.end).into(),
        )
    }

    fn expanded_outline(&self, margin: f64) -> Polygon {
        Polygon::from_aabb(&self.bounds().extend_by(na::Vector2::from_element(margin)))
    }

    fn centroid(&self) -> na::Vector2<f64> {
        self.position + point_utils::med(self.start, self.end)
    }

    fn stroke_width(&self) -> f64 {
        self.style.stroke_width()
    }
}

impl Line {
    /// A new line between the handles.
    pub fn new(start: na::Vector2<f64>, end: na::Vector2<f64>) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kurbo::PathEl;

    #[test]
    fn open_outline() {
        let line = Line {
            position: na::vector![10.0, 10.0],
            ..Line::new(na::vector![5.0, 0.0], na::vector![-5.0, 4.0])
        };

        assert!(!line.is_closed());
        assert!(!line.can_bind());
        assert_eq!(line.outline().segments(line.is_closed()).count(), 1);

        let bounds = line.bounds();
        assert_relative_eq!(bounds.mins, na::point![5.0, 10.0]);
        assert_relative_eq!(bounds.maxs, na::point![15.0, 14.0]);
        assert_relative_eq!(line.centroid(), na::vector![10.0, 12.0]);
    }

    #[test]
    fn expanded_bounds_grow_by_margin() {
        let line = Line::new(na::vector![0.0, 0.0], na::vector![10.0, 0.0]);
        let expanded = line.expanded_bounds(2.0);

        assert_relative_eq!(expanded.mins, na::point![-2.0, -2.0]);
        assert_relative_eq!(expanded.maxs, na::point![12.0, 2.0]);
        assert!(line.expanded_bounds(0.0).approx_eq(&line.bounds()));
    }

    #[test]
    fn outline_path_is_open() {
        let line = Line::new(na::vector![0.0, 0.0], na::vector![10.0, 4.0]);
        let path = line.outline_path();

        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(kurbo::Point::new(0.0, 0.0)),
                PathEl::LineTo(kurbo::Point::new(10.0, 4.0)),
            ]
        );
    }
}
