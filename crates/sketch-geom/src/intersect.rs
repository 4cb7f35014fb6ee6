// Imports
use crate::ext::AabbExt;
use crate::polygon::segments_from_ring;
use crate::GeomError;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

/// The result of an intersection test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "intersection_result")]
pub struct IntersectionResult {
    /// Whether anything intersected.
    #[serde(rename = "did_intersect")]
    pub did_intersect: bool,
    /// The intersection points. Possibly several for non-convex outlines.
    #[serde(rename = "points")]
    pub points: Vec<na::Vector2<f64>>,
}

impl IntersectionResult {
    /// No intersection.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single intersection point.
    pub fn single(point: na::Vector2<f64>) -> Self {
        Self {
            did_intersect: true,
            points: vec![point],
        }
    }

    /// Aggregates the intersection points.
    pub fn from_points(points: Vec<na::Vector2<f64>>) -> Self {
        Self {
            did_intersect: !points.is_empty(),
            points,
        }
    }
}

impl FromIterator<IntersectionResult> for IntersectionResult {
    fn from_iter<T: IntoIterator<Item = IntersectionResult>>(iter: T) -> Self {
        Self::from_points(iter.into_iter().flat_map(|result| result.points).collect())
    }
}

/// Intersects the ray starting at origin and heading in direction with the segment.
///
/// Returns at most one point. There is no intersection when the ray is parallel to the segment,
/// when the intersection lies behind the origin or outside of the segment.
pub fn intersect_ray_line_segment(
    origin: na::Vector2<f64>,
    direction: na::Vector2<f64>,
    seg_start: na::Vector2<f64>,
    seg_end: na::Vector2<f64>,
) -> Result<IntersectionResult, GeomError> {
    if direction.magnitude_squared() == 0.0 {
        return Err(GeomError::invalid_input(
            "ray direction must not have zero length",
        ));
    }
    let seg = seg_end - seg_start;
    let denom = direction.perp(&seg);
    if denom == 0.0 {
        return Ok(IntersectionResult::none());
    }
    let rel = seg_start - origin;
    // parameter along the ray and along the segment
    let r = rel.perp(&seg) / denom;
    let s = rel.perp(&direction) / denom;

    if r >= 0.0 && (0.0..=1.0).contains(&s) {
        Ok(IntersectionResult::single(origin + direction * r))
    } else {
        Ok(IntersectionResult::none())
    }
}

/// Intersects the segment a1-a2 with the segment b1-b2. Parallel and coincident segments don't
/// intersect.
pub fn intersect_line_segment_line_segment(
    a1: na::Vector2<f64>,
    a2: na::Vector2<f64>,
    b1: na::Vector2<f64>,
    b2: na::Vector2<f64>,
) -> IntersectionResult {
    let a = a2 - a1;
    let b = b2 - b1;
    let denom = a.perp(&b);
    if denom == 0.0 {
        return IntersectionResult::none();
    }
    let rel = b1 - a1;
    let t = rel.perp(&b) / denom;
    let u = rel.perp(&a) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        IntersectionResult::single(a1 + a * t)
    } else {
        IntersectionResult::none()
    }
}

/// Intersects the segment a-b with every edge of the open polyline.
pub fn intersect_line_segment_polyline(
    a: na::Vector2<f64>,
    b: na::Vector2<f64>,
    polyline: &[na::Vector2<f64>],
) -> IntersectionResult {
    segments_from_ring(polyline, false)
        .map(|(start, end)| intersect_line_segment_line_segment(a, b, start, end))
        .collect()
}

/// Intersects the segment a-b with every edge of the closed polygon.
pub fn intersect_line_segment_polygon(
    a: na::Vector2<f64>,
    b: na::Vector2<f64>,
    polygon: &[na::Vector2<f64>],
) -> IntersectionResult {
    segments_from_ring(polygon, true)
        .map(|(start, end)| intersect_line_segment_line_segment(a, b, start, end))
        .collect()
}

/// The intersection points between the four edges of the bounds and the edges of the ring.
pub fn intersect_bounds_polygon(
    bounds: &Aabb,
    polygon: &[na::Vector2<f64>],
    closed: bool,
) -> Vec<na::Vector2<f64>> {
    let corners = bounds.corners();

    segments_from_ring(&corners, true)
        .flat_map(|(a, b)| {
            segments_from_ring(polygon, closed)
                .map(move |(start, end)| intersect_line_segment_line_segment(a, b, start, end))
        })
        .flat_map(|result| result.points)
        .collect()
}
