// Imports
use super::{ShapeStyle, Shapeable};
use crate::ext::Vector2Ext;
use crate::polygon::Polygon;
use kurbo::Shape;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "ellipse")]
/// An Ellipse, inscribed in its box.
pub struct Ellipse {
    /// The upper-left corner of the unrotated box.
    #[serde(rename = "position")]
    pub position: na::Vector2<f64>,
    /// Width and height of the box, the diameters of the ellipse.
    #[serde(rename = "size")]
    pub size: na::Vector2<f64>,
    /// Rotation around the center, in radians.
    #[serde(rename = "rotation")]
    pub rotation: f64,
    /// The style.
    #[serde(rename = "style")]
    pub style: ShapeStyle,
}

impl Default for Ellipse {
    fn default() -> Self {
        Self {
            position: na::Vector2::zeros(),
            size: na::vector![1.0, 1.0],
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }
}

impl Shapeable for Ellipse {
    fn outline(&self) -> Polygon {
        Polygon::new(super::flatten_path(&self.curve_path(0.0)))
    }

    fn bounds(&self) -> Aabb {
        super::points_aabb(self.outline().points())
    }

    fn expanded_outline(&self, margin: f64) -> Polygon {
        Polygon::new(super::flatten_path(&self.curve_path(margin)))
    }

    fn centroid(&self) -> na::Vector2<f64> {
        self.position + self.radii()
    }

    fn stroke_width(&self) -> f64 {
        self.style.stroke_width()
    }

    fn outline_path(&self) -> kurbo::BezPath {
        self.curve_path(0.0)
    }
}

impl Ellipse {
    /// A new unrotated ellipse.
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

    /// The radii of the ellipse.
    pub fn radii(&self) -> na::Vector2<f64> {
        self.size * 0.5
    }

    /// The bezier path of the ellipse, with the radii grown by the margin.
    fn curve_path(&self, margin: f64) -> kurbo::BezPath {
        self.to_kurbo(margin).to_path(super::CURVE_PATH_ACCURACY)
    }

    /// Convert to kurbo shape, with the radii grown by the margin.
    fn to_kurbo(&self, margin: f64) -> kurbo::Ellipse {
        kurbo::Ellipse::new(
            self.centroid().to_kurbo_point(),
            (self.radii() + na::Vector2::from_element(margin)).to_kurbo_vec(),
            self.rotation,
        )
    }
}
