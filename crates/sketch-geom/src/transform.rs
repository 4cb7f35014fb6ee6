/// An affine transformation, mapping a shape's local frame into world space.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    /// The affine transform matrix
    pub affine: na::Affine2<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            affine: na::Affine2::identity(),
        }
    }
}

impl From<Transform> for kurbo::Affine {
    fn from(transform: Transform) -> Self {
        let matrix = transform.affine.to_homogeneous();

        kurbo::Affine::new([
            matrix[(0, 0)],
            matrix[(1, 0)],
            matrix[(0, 1)],
            matrix[(1, 1)],
            matrix[(0, 2)],
            matrix[(1, 2)],
        ])
    }
}

impl Transform {
    /// The placement of a shape: rotate around the pivot (given in the local frame), then translate
    /// by the position.
    pub fn from_placement(
        position: na::Vector2<f64>,
        rotation: f64,
        pivot: na::Vector2<f64>,
    ) -> Self {
        let mut transform = Self::default();
        transform.append_rotation_wrt_point_mut(rotation, pivot.into());
        transform.append_translation_mut(position);
        transform
    }

    /// Transform a point by the transform.
    pub fn transform_point(&self, point: na::Vector2<f64>) -> na::Vector2<f64> {
        (self.affine * na::Point2::from(point)).coords
    }

    /// Transform all points.
    pub fn transform_points(
        &self,
        points: impl IntoIterator<Item = na::Vector2<f64>>,
    ) -> Vec<na::Vector2<f64>> {
        points
            .into_iter()
            .map(|point| self.transform_point(point))
            .collect()
    }

    /// Append a translation to the transform.
    pub fn append_translation_mut(&mut self, offset: na::Vector2<f64>) {
        self.affine = na::Translation2::from(offset) * self.affine;
    }

    /// Append a rotation around a point to the transform.
    pub fn append_rotation_wrt_point_mut(&mut self, angle: f64, center: na::Point2<f64>) {
        if angle == 0.0 {
            return;
        }
        self.affine = na::Translation2::from(-center.coords) * self.affine;
        self.affine = na::Rotation2::new(angle) * self.affine;
        self.affine = na::Translation2::from(center.coords) * self.affine;
    }

    /// Convert to [kurbo::Affine]
    pub fn to_kurbo(&self) -> kurbo::Affine {
        kurbo::Affine::from(*self)
    }
}
