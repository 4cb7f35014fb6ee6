// Imports
use super::{Rectangle, ShapeStyle, Shapeable};
use crate::polygon::Polygon;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "text")]
/// A text box. Its geometry is the rectangle of the measured text, scaled by the style scale.
pub struct Text {
    /// The upper-left corner of the unrotated box.
    #[serde(rename = "position")]
    pub position: na::Vector2<f64>,
    /// The measured, unscaled extents of the text.
    #[serde(rename = "size")]
    pub size: na::Vector2<f64>,
    /// Rotation around the center, in radians.
    #[serde(rename = "rotation")]
    pub rotation: f64,
    /// The text content. Measuring it is up to the host.
    #[serde(rename = "text")]
    pub text: String,
    /// The style.
    #[serde(rename = "style")]
    pub style: ShapeStyle,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            position: na::Vector2::zeros(),
            size: na::vector![1.0, 1.0],
            rotation: 0.0,
            text: String::new(),
            style: ShapeStyle::default(),
        }
    }
}

impl Shapeable for Text {
    fn outline(&self) -> Polygon {
        self.as_rectangle().outline()
    }

    fn bounds(&self) -> Aabb {
        self.as_rectangle().bounds()
    }

    fn expanded_outline(&self, margin: f64) -> Polygon {
        self.as_rectangle().expanded_outline(margin)
    }

    fn centroid(&self) -> na::Vector2<f64> {
        self.as_rectangle().centroid()
    }

    fn stroke_width(&self) -> f64 {
        self.style.stroke_width()
    }
}

impl Text {
    /// A new unrotated text box.
    pub fn new(
        position: na::Vector2<f64>,
        size: na::Vector2<f64>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            position,
            size,
            text: text.into(),
            ..Default::default()
        }
    }

    /// The rectangle covered by the scaled text.
    pub fn as_rectangle(&self) -> Rectangle {
        Rectangle {
            position: self.position,
            size: self.size * self.style.scale,
            rotation: self.rotation,
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scaled_extents() {
        let mut text = Text::new(na::vector![2.0, 3.0], na::vector![20.0, 8.0], "hello");
        text.style.scale = 2.0;

        let bounds = text.bounds();
        assert_relative_eq!(bounds.mins, na::point![2.0, 3.0]);
        assert_relative_eq!(bounds.maxs, na::point![42.0, 19.0]);
        assert_relative_eq!(text.centroid(), na::vector![22.0, 11.0]);
    }
}
