// Imports
use super::{Arrow, Ellipse, Line, Rectangle, Shapeable, Text, Triangle};
use crate::polygon::Polygon;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

/// Shape, storing shape variants. The descriptor a host hands to the kernel, tagged by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename = "shape")]
pub enum Shape {
    #[serde(rename = "rectangle")]
    /// A rectangle shape.
    Rectangle(Rectangle),
    #[serde(rename = "ellipse")]
    /// An ellipse shape.
    Ellipse(Ellipse),
    #[serde(rename = "triangle")]
    /// A triangle shape.
    Triangle(Triangle),
    #[serde(rename = "line")]
    /// A line shape.
    Line(Line),
    #[serde(rename = "arrow")]
    /// An arrow shape.
    Arrow(Arrow),
    #[serde(rename = "text")]
    /// A text shape.
    Text(Text),
}

impl Default for Shape {
    fn default() -> Self {
        Self::Rectangle(Rectangle::default())
    }
}

impl Shapeable for Shape {
    fn outline(&self) -> Polygon {
        match self {
            Self::Rectangle(rectangle) => rectangle.outline(),
            Self::Ellipse(ellipse) => ellipse.outline(),
            Self::Triangle(triangle) => triangle.outline(),
            Self::Line(line) => line.outline(),
            Self::Arrow(arrow) => arrow.outline(),
            Self::Text(text) => text.outline(),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Self::Rectangle(rectangle) => rectangle.is_closed(),
            Self::Ellipse(ellipse) => ellipse.is_closed(),
            Self::Triangle(triangle) => triangle.is_closed(),
            Self::Line(line) => line.is_closed(),
            Self::Arrow(arrow) => arrow.is_closed(),
            Self::Text(text) => text.is_closed(),
        }
    }

    fn bounds(&self) -> Aabb {
        match self {
            Self::Rectangle(rectangle) => rectangle.bounds(),
            Self::Ellipse(ellipse) => ellipse.bounds(),
            Self::Triangle(triangle) => triangle.bounds(),
            Self::Line(line) => line.bounds(),
            Self::Arrow(arrow) => arrow.bounds(),
            Self::Text(text) => text.bounds(),
        }
    }

    fn expanded_outline(&self, margin: f64) -> Polygon {
        match self {
            Self::Rectangle(rectangle) => rectangle.expanded_outline(margin),
            Self::Ellipse(ellipse) => ellipse.expanded_outline(margin),
            Self::Triangle(triangle) => triangle.expanded_outline(margin),
            Self::Line(line) => line.expanded_outline(margin),
            Self::Arrow(arrow) => arrow.expanded_outline(margin),
            Self::Text(text) => text.expanded_outline(margin),
        }
    }

    fn expanded_bounds(&self, margin: f64) -> Aabb {
        match self {
            Self::Rectangle(rectangle) => rectangle.expanded_bounds(margin),
            Self::Ellipse(ellipse) => ellipse.expanded_bounds(margin),
            Self::Triangle(triangle) => triangle.expanded_bounds(margin),
            Self::Line(line) => line.expanded_bounds(margin),
            Self::Arrow(arrow) => arrow.expanded_bounds(margin),
            Self::Text(text) => text.expanded_bounds(margin),
        }
    }

    fn centroid(&self) -> na::Vector2<f64> {
        match self {
            Self::Rectangle(rectangle) => rectangle.centroid(),
            Self::Ellipse(ellipse) => ellipse.centroid(),
            Self::Triangle(triangle) => triangle.centroid(),
            Self::Line(line) => line.centroid(),
            Self::Arrow(arrow) => arrow.centroid(),
            Self::Text(text) => text.centroid(),
        }
    }

    fn can_bind(&self) -> bool {
        match self {
            Self::Rectangle(rectangle) => rectangle.can_bind(),
            Self::Ellipse(ellipse) => ellipse.can_bind(),
            Self::Triangle(triangle) => triangle.can_bind(),
            Self::Line(line) => line.can_bind(),
            Self::Arrow(arrow) => arrow.can_bind(),
            Self::Text(text) => text.can_bind(),
        }
    }

    fn stroke_width(&self) -> f64 {
        match self {
            Self::Rectangle(rectangle) => rectangle.stroke_width(),
            Self::Ellipse(ellipse) => ellipse.stroke_width(),
            Self::Triangle(triangle) => triangle.stroke_width(),
            Self::Line(line) => line.stroke_width(),
            Self::Arrow(arrow) => arrow.stroke_width(),
            Self::Text(text) => text.stroke_width(),
        }
    }

    fn label_offset(&self) -> na::Vector2<f64> {
        match self {
            Self::Rectangle(rectangle) => rectangle.label_offset(),
            Self::Ellipse(ellipse) => ellipse.label_offset(),
            Self::Triangle(triangle) => triangle.label_offset(),
            Self::Line(line) => line.label_offset(),
            Self::Arrow(arrow) => arrow.label_offset(),
            Self::Text(text) => text.label_offset(),
        }
    }

    fn outline_path(&self) -> kurbo::BezPath {
        match self {
            Self::Rectangle(rectangle) => rectangle.outline_path(),
            Self::Ellipse(ellipse) => ellipse.outline_path(),
            Self::Triangle(triangle) => triangle.outline_path(),
            Self::Line(line) => line.outline_path(),
            Self::Arrow(arrow) => arrow.outline_path(),
            Self::Text(text) => text.outline_path(),
        }
    }
}

impl Shape {
    /// The name of the shape kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Ellipse(_) => "ellipse",
            Self::Triangle(_) => "triangle",
            Self::Line(_) => "line",
            Self::Arrow(_) => "arrow",
            Self::Text(_) => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::AabbExt;

    fn all_kinds() -> Vec<Shape> {
        vec![
            Shape::Rectangle(
                Rectangle::new(na::vector![1.0, 2.0], na::vector![30.0, 12.0]).with_rotation(0.2),
            ),
            Shape::Ellipse(
                Ellipse::new(na::vector![-5.0, 0.0], na::vector![18.0, 40.0]).with_rotation(1.3),
            ),
            Shape::Triangle(
                Triangle::new(na::vector![10.0, 10.0], na::vector![24.0, 16.0]).with_rotation(-0.7),
            ),
            Shape::Line(Line::new(na::vector![0.0, 0.0], na::vector![12.0, -7.0])),
            Shape::Arrow(
                Arrow::new(na::vector![0.0, 0.0], na::vector![40.0, 12.0]).with_bend(0.25),
            ),
            Shape::Text(Text::new(na::vector![3.0, 3.0], na::vector![50.0, 14.0], "label")),
        ]
    }

    #[test]
    fn bounds_inside_expanded_bounds() {
        for shape in all_kinds() {
            let bounds = shape.bounds();
            for margin in [0.5, 2.0, 16.0] {
                assert!(
                    shape.expanded_bounds(margin).contains_aabb_inclusive(&bounds),
                    "{} with margin {margin}",
                    shape.kind_name()
                );
            }
            assert!(
                shape.expanded_bounds(0.0).approx_eq(&bounds),
                "{}",
                shape.kind_name()
            );
        }
    }

    #[test]
    fn only_closed_shapes_bind() {
        for shape in all_kinds() {
            let expected = !matches!(shape, Shape::Line(_) | Shape::Arrow(_));
            assert_eq!(shape.can_bind(), expected, "{}", shape.kind_name());
        }
    }

    #[test]
    fn deserialize_tagged_descriptor() {
        let shape: Shape = serde_json::from_str(
            r#"{
                "kind": "triangle",
                "position": [0.0, 0.0], "size": [10.0, 10.0], "rotation": 0.5
            }"#,
        )
        .unwrap();

        let Shape::Triangle(triangle) = shape else {
            panic!("expected a triangle");
        };
        assert_eq!(triangle.size, na::vector![10.0, 10.0]);
        assert_eq!(triangle.rotation, 0.5);
        assert_eq!(triangle.style.scale, 1.0);
    }
}
