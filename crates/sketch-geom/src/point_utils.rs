//! Vector math on [`na::Vector2<f64>`].
//!
//! Addition, subtraction and scaling are the nalgebra operators. Component-wise division, clamping
//! and the 2D cross product live in [Vector2Ext][crate::ext::Vector2Ext].

/// Rotate the point around the center by the given angle (in radians).
pub fn rotate_about(
    point: na::Vector2<f64>,
    center: na::Vector2<f64>,
    angle: f64,
) -> na::Vector2<f64> {
    if angle == 0.0 {
        return point;
    }
    let mut isometry = na::Isometry2::identity();
    isometry.append_rotation_wrt_point_mut(&na::UnitComplex::new(angle), &center.into());

    isometry.transform_point(&point.into()).coords
}

/// The distance between two points.
pub fn dist(a: na::Vector2<f64>, b: na::Vector2<f64>) -> f64 {
    (b - a).magnitude()
}

/// The point halfway between a and b.
pub fn med(a: na::Vector2<f64>, b: na::Vector2<f64>) -> na::Vector2<f64> {
    a.lerp(&b, 0.5)
}

/// The point on the segment a-b that is closest to p.
///
/// A zero-length segment collapses to a.
pub fn nearest_point_on_line_segment(
    a: na::Vector2<f64>,
    b: na::Vector2<f64>,
    p: na::Vector2<f64>,
) -> na::Vector2<f64> {
    let ab = b - a;
    let len_sq = ab.magnitude_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(&ab) / len_sq).max(0.0).min(1.0);

    a + ab * t
}

/// The distance from p to the segment a-b.
pub fn distance_to_line_segment(
    a: na::Vector2<f64>,
    b: na::Vector2<f64>,
    p: na::Vector2<f64>,
) -> f64 {
    dist(nearest_point_on_line_segment(a, b, p), p)
}
