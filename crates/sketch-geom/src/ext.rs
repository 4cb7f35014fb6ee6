// Imports
use p2d::bounding_volume::Aabb;

/// Extension trait for [`na::Vector2<f64>`].
pub trait Vector2Ext
where
    Self: Sized,
{
    /// The orthogonal vector, normalized to length 1
    fn orth_unit(&self) -> Self;
    /// a new vector by taking the mins of each x and y values
    fn mins(&self, other: &Self) -> Self;
    /// a new vector by taking the maxs of each x and y values
    fn maxs(&self, other: &Self) -> Self;
    /// Divides component-wise. Zero components of `other` yield infinities or NaN.
    fn div_v(&self, other: &Self) -> Self;
    /// Clamps each component into `lo..=hi`.
    fn clamp_v(&self, lo: f64, hi: f64) -> Self;
    /// Converts to kurbo::Point
    fn to_kurbo_point(&self) -> kurbo::Point;
    /// Converts to kurbo::Vec2
    fn to_kurbo_vec(&self) -> kurbo::Vec2;
    /// Approximate equality
    fn approx_eq(&self, other: &Self) -> bool;
}

impl Vector2Ext for na::Vector2<f64> {
    fn orth_unit(&self) -> Self {
        let rot_90deg = na::Rotation2::new(std::f64::consts::PI * 0.5);

        let normalized = if self.magnitude() > 0.0 {
            self.normalize()
        } else {
            return na::Vector2::from_element(0.0);
        };

        rot_90deg * normalized
    }

    fn mins(&self, other: &Self) -> Self {
        na::vector![self[0].min(other[0]), self[1].min(other[1])]
    }

    fn maxs(&self, other: &Self) -> Self {
        na::vector![self[0].max(other[0]), self[1].max(other[1])]
    }

    fn div_v(&self, other: &Self) -> Self {
        na::vector![self[0] / other[0], self[1] / other[1]]
    }

    fn clamp_v(&self, lo: f64, hi: f64) -> Self {
        // not using f64::clamp, it panics on NaN bounds
        na::vector![self[0].max(lo).min(hi), self[1].max(lo).min(hi)]
    }

    fn to_kurbo_point(&self) -> kurbo::Point {
        kurbo::Point {
            x: self[0],
            y: self[1],
        }
    }

    fn to_kurbo_vec(&self) -> kurbo::Vec2 {
        kurbo::Vec2 {
            x: self[0],
            y: self[1],
        }
    }

    fn approx_eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self[0], other[0]) && approx::relative_eq!(self[1], other[1])
    }
}

/// Extension trait for [p2d::bounding_volume::Aabb].
pub trait AabbExt
where
    Self: Sized,
{
    /// New Aabb, ensuring its mins, maxs are valid (maxs >= mins)
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self;
    /// The width (extent along x)
    fn width(&self) -> f64;
    /// The height (extent along y)
    fn height(&self) -> f64;
    /// Whether the Aabb has no area
    fn is_degenerate(&self) -> bool;
    /// extends on every side by the given size
    fn extend_by(&self, extend_by: na::Vector2<f64>) -> Self;
    /// Whether the point lies inside the bounds, inclusive on all four sides
    fn contains_point_inclusive(&self, point: na::Vector2<f64>) -> bool;
    /// Whether other lies completely inside self, inclusive on all four sides
    fn contains_aabb_inclusive(&self, other: &Self) -> bool;
    /// The four corners in clockwise order starting at the upper-left corner
    fn corners(&self) -> [na::Vector2<f64>; 4];
    /// Approximate equality
    fn approx_eq(&self, other: &Self) -> bool;
}

impl AabbExt for Aabb {
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self {
        if start[0] <= end[0] && start[1] <= end[1] {
            Aabb::new(na::point![start[0], start[1]], na::point![end[0], end[1]])
        } else if start[0] > end[0] && start[1] <= end[1] {
            Aabb::new(na::point![end[0], start[1]], na::point![start[0], end[1]])
        } else if start[0] <= end[0] && start[1] > end[1] {
            Aabb::new(na::point![start[0], end[1]], na::point![end[0], start[1]])
        } else {
            Aabb::new(na::point![end[0], end[1]], na::point![start[0], start[1]])
        }
    }

    fn width(&self) -> f64 {
        self.maxs[0] - self.mins[0]
    }

    fn height(&self) -> f64 {
        self.maxs[1] - self.mins[1]
    }

    fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    fn extend_by(&self, extend_by: na::Vector2<f64>) -> Aabb {
        Aabb::new(
            (self.mins.coords - extend_by).into(),
            (self.maxs.coords + extend_by).into(),
        )
    }

    fn contains_point_inclusive(&self, point: na::Vector2<f64>) -> bool {
        point[0] >= self.mins[0]
            && point[0] <= self.maxs[0]
            && point[1] >= self.mins[1]
            && point[1] <= self.maxs[1]
    }

    fn contains_aabb_inclusive(&self, other: &Self) -> bool {
        other.mins[0] >= self.mins[0]
            && other.mins[1] >= self.mins[1]
            && other.maxs[0] <= self.maxs[0]
            && other.maxs[1] <= self.maxs[1]
    }

    fn corners(&self) -> [na::Vector2<f64>; 4] {
        [
            na::vector![self.mins[0], self.mins[1]],
            na::vector![self.maxs[0], self.mins[1]],
            na::vector![self.maxs[0], self.maxs[1]],
            na::vector![self.mins[0], self.maxs[1]],
        ]
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self.mins.coords.approx_eq(&other.mins.coords)
            && self.maxs.coords.approx_eq(&other.maxs.coords)
    }
}
