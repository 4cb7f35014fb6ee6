// Imports
use crate::ext::{AabbExt, Vector2Ext};
use crate::{point_utils, GeomError};
use itertools::Itertools;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Points closer to an edge than this are considered to lie on it.
const ON_EDGE_TOLERANCE: f64 = 1e-9;

/// How points lying exactly on a polygon edge are classified.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
#[serde(rename = "boundary_policy")]
pub enum BoundaryPolicy {
    /// Points on an edge are outside.
    #[default]
    #[serde(rename = "exclusive")]
    Exclusive,
    /// Points on an edge are inside.
    #[serde(rename = "inclusive")]
    Inclusive,
}

impl std::fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BoundaryPolicy::Exclusive => "exclusive",
                BoundaryPolicy::Inclusive => "inclusive",
            }
        )
    }
}

/// The tightest bounds enclosing all points.
pub fn bounds_from_points(points: &[na::Vector2<f64>]) -> Result<Aabb, GeomError> {
    let (first, rest) = points
        .split_first()
        .ok_or_else(|| GeomError::invalid_input("can't compute bounds of zero points"))?;

    let (mins, maxs) = rest
        .iter()
        .fold((*first, *first), |(mins, maxs), p| (mins.mins(p), maxs.maxs(p)));

    Ok(Aabb::new(mins.into(), maxs.into()))
}

/// Whether the point lies inside the bounds, inclusive on all four sides.
pub fn point_in_bounds(point: na::Vector2<f64>, bounds: &Aabb) -> bool {
    bounds.contains_point_inclusive(point)
}

/// Whether inner lies completely inside outer, inclusive on all four sides.
pub fn bounds_contained(inner: &Aabb, outer: &Aabb) -> bool {
    outer.contains_aabb_inclusive(inner)
}

/// Consecutive segments of the point ring. When closed, the segment from the last back to the first
/// point is appended.
pub fn segments_from_ring(
    points: &[na::Vector2<f64>],
    closed: bool,
) -> impl Iterator<Item = (na::Vector2<f64>, na::Vector2<f64>)> + '_ {
    let wrap_around = match (closed, points.first(), points.last()) {
        (true, Some(first), Some(last)) if points.len() > 1 => Some((*last, *first)),
        _ => None,
    };

    points.iter().copied().tuple_windows().chain(wrap_around)
}

/// Ray-casting parity test over the implicitly closed ring. Points exactly on an edge are outside.
pub fn point_in_polygon(point: na::Vector2<f64>, polygon: &[na::Vector2<f64>]) -> bool {
    point_in_polygon_w_policy(point, polygon, BoundaryPolicy::Exclusive)
}

/// Ray-casting parity test over the implicitly closed ring, classifying points on an edge according
/// to the policy.
pub fn point_in_polygon_w_policy(
    point: na::Vector2<f64>,
    polygon: &[na::Vector2<f64>],
    policy: BoundaryPolicy,
) -> bool {
    if segments_from_ring(polygon, true)
        .any(|(a, b)| point_utils::distance_to_line_segment(a, b, point) <= ON_EDGE_TOLERANCE)
    {
        return policy == BoundaryPolicy::Inclusive;
    }
    if polygon.len() < 3 {
        return false;
    }

    segments_from_ring(polygon, true)
        .filter(|(a, b)| (a[1] > point[1]) != (b[1] > point[1]))
        .filter(|(a, b)| {
            let crossing_x = a[0] + (point[1] - a[1]) * (b[0] - a[0]) / (b[1] - a[1]);
            point[0] < crossing_x
        })
        .count()
        % 2
        == 1
}

/// The area centroid of the closed ring. Rings without area fall back to the mean of their
/// vertices.
pub fn polygon_centroid(points: &[na::Vector2<f64>]) -> Result<na::Vector2<f64>, GeomError> {
    if points.is_empty() {
        return Err(GeomError::invalid_input(
            "can't compute the centroid of zero points",
        ));
    }
    let signed_area = polygon_signed_area(points);

    if signed_area.abs() <= f64::EPSILON {
        let sum = points
            .iter()
            .fold(na::Vector2::<f64>::zeros(), |acc, p| acc + p);
        return Ok(sum / points.len() as f64);
    }

    let weighted = segments_from_ring(points, true)
        .fold(na::Vector2::<f64>::zeros(), |acc, (a, b)| {
            acc + (a + b) * a.perp(&b)
        });

    Ok(weighted / (6.0 * signed_area))
}

/// Signed area of the closed ring (shoelace formula). Positive for counter-clockwise rings in a
/// y-up frame.
pub fn polygon_signed_area(points: &[na::Vector2<f64>]) -> f64 {
    segments_from_ring(points, true)
        .map(|(a, b)| a.perp(&b))
        .sum::<f64>()
        * 0.5
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "polygon")]
/// An ordered point ring, implicitly closed unless an operation says otherwise.
pub struct Polygon {
    /// The vertices
    #[serde(rename = "points")]
    pub points: Vec<na::Vector2<f64>>,
}

impl From<Vec<na::Vector2<f64>>> for Polygon {
    fn from(points: Vec<na::Vector2<f64>>) -> Self {
        Self { points }
    }
}

impl Polygon {
    /// A new polygon
    pub fn new(points: Vec<na::Vector2<f64>>) -> Self {
        Self { points }
    }

    /// A polygon from the four corners of the bounds.
    pub fn from_aabb(bounds: &Aabb) -> Self {
        Self::new(bounds.corners().to_vec())
    }

    /// The vertices.
    pub fn points(&self) -> &[na::Vector2<f64>] {
        &self.points
    }

    /// The tightest bounds of the vertices.
    pub fn bounds(&self) -> Result<Aabb, GeomError> {
        bounds_from_points(&self.points)
    }

    /// The edges, including the closing edge when closed.
    pub fn segments(
        &self,
        closed: bool,
    ) -> impl Iterator<Item = (na::Vector2<f64>, na::Vector2<f64>)> + '_ {
        segments_from_ring(&self.points, closed)
    }

    /// Whether the point lies inside the closed ring. Points on an edge are outside.
    pub fn contains_point(&self, point: na::Vector2<f64>) -> bool {
        point_in_polygon(point, &self.points)
    }

    /// Whether the point lies inside the closed ring, with the given boundary policy.
    pub fn contains_point_w_policy(&self, point: na::Vector2<f64>, policy: BoundaryPolicy) -> bool {
        point_in_polygon_w_policy(point, &self.points, policy)
    }

    /// The area centroid.
    pub fn centroid(&self) -> Result<na::Vector2<f64>, GeomError> {
        polygon_centroid(&self.points)
    }

    /// The smallest distance from the point to any edge. None for an empty polygon.
    pub fn distance_to_edges(&self, point: na::Vector2<f64>, closed: bool) -> Option<f64> {
        if let [single] = self.points.as_slice() {
            return Some(point_utils::dist(*single, point));
        }
        self.segments(closed)
            .map(|(a, b)| point_utils::distance_to_line_segment(a, b, point))
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Grows the closed ring outward by the margin, moving every edge along its outward normal and
    /// joining neighbouring edges at their (mitered) intersection.
    ///
    /// Rings without area are replaced by their bounds, extended by the margin.
    pub fn offset(&self, margin: f64) -> Self {
        if margin == 0.0 {
            return self.clone();
        }
        let mut ring = self.points.clone();
        ring.dedup_by(|a, b| a.approx_eq(b));
        while ring.len() > 1 && ring[0].approx_eq(&ring[ring.len() - 1]) {
            ring.pop();
        }
        let signed_area = polygon_signed_area(&ring);

        if ring.len() < 3 || signed_area.abs() <= f64::EPSILON {
            debug!(
                "offsetting a ring without area ({} distinct vertices), \
                falling back to its extended bounds",
                ring.len()
            );
            return match bounds_from_points(&ring) {
                Ok(bounds) => Self::from_aabb(&bounds.extend_by(na::Vector2::from_element(margin))),
                Err(_) => self.clone(),
            };
        }
        let orientation = signed_area.signum();

        // each edge, moved outward: (origin, direction)
        let offset_edges = segments_from_ring(&ring, true)
            .map(|(a, b)| {
                let dir = b - a;
                let outward = na::vector![dir[1], -dir[0]].normalize() * orientation;
                (a + outward * margin, dir)
            })
            .collect::<Vec<(na::Vector2<f64>, na::Vector2<f64>)>>();

        let n = offset_edges.len();
        let points = (0..n)
            .map(|i| {
                let (prev_origin, prev_dir) = offset_edges[(i + n - 1) % n];
                let (origin, dir) = offset_edges[i];
                let denom = prev_dir.perp(&dir);

                if denom.abs() <= f64::EPSILON {
                    // collinear neighbours, the vertex only moves along the shared normal
                    origin
                } else {
                    let t = (origin - prev_origin).perp(&dir) / denom;
                    prev_origin + prev_dir * t
                }
            })
            .collect();

        Self::new(points)
    }

    /// Generate the outline as a [kurbo::BezPath].
    pub fn to_kurbo_path(&self, closed: bool) -> kurbo::BezPath {
        let mut path = kurbo::BezPath::new();
        let mut points = self.points.iter();

        if let Some(first) = points.next() {
            path.move_to(first.to_kurbo_point());
            for p in points {
                path.line_to(p.to_kurbo_point());
            }
            if closed {
                path.close_path();
            }
        }
        path
    }
}

impl Extend<na::Vector2<f64>> for Polygon {
    fn extend<T: IntoIterator<Item = na::Vector2<f64>>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon {
        Polygon::new(vec![
            na::vector![0.0, 0.0],
            na::vector![10.0, 0.0],
            na::vector![10.0, 10.0],
            na::vector![0.0, 10.0],
        ])
    }

    #[test]
    fn bounds_of_points() {
        let bounds = bounds_from_points(&[
            na::vector![3.0, -1.0],
            na::vector![-2.0, 4.0],
            na::vector![1.0, 1.0],
        ])
        .unwrap();

        assert_relative_eq!(bounds.mins, na::point![-2.0, -1.0]);
        assert_relative_eq!(bounds.maxs, na::point![3.0, 4.0]);
    }

    #[test]
    fn bounds_of_no_points_is_invalid() {
        assert!(matches!(
            bounds_from_points(&[]),
            Err(GeomError::InvalidInput(_))
        ));
    }

    #[test]
    fn ring_segments() {
        let square = square();
        assert_eq!(square.segments(false).count(), 3);

        let closed = square.segments(true).collect::<Vec<_>>();
        assert_eq!(closed.len(), 4);
        assert_relative_eq!(closed[3].0, na::vector![0.0, 10.0]);
        assert_relative_eq!(closed[3].1, na::vector![0.0, 0.0]);

        assert_eq!(segments_from_ring(&[na::vector![1.0, 1.0]], true).count(), 0);
        assert_eq!(segments_from_ring(&[], true).count(), 0);
    }

    #[test]
    fn point_in_square() {
        let square = square();
        assert!(square.contains_point(na::vector![5.0, 5.0]));
        assert!(square.contains_point(na::vector![0.1, 9.9]));
        assert!(!square.contains_point(na::vector![-0.1, 5.0]));
        assert!(!square.contains_point(na::vector![15.0, 5.0]));
    }

    #[test]
    fn point_in_concave_polygon() {
        // a "U" shape, opening upwards
        let u = Polygon::new(vec![
            na::vector![0.0, 0.0],
            na::vector![3.0, 0.0],
            na::vector![3.0, 10.0],
            na::vector![7.0, 10.0],
            na::vector![7.0, 0.0],
            na::vector![10.0, 0.0],
            na::vector![10.0, 12.0],
            na::vector![0.0, 12.0],
        ]);
        assert!(u.contains_point(na::vector![1.0, 5.0]));
        assert!(!u.contains_point(na::vector![5.0, 5.0]));
        assert!(u.contains_point(na::vector![5.0, 11.0]));
    }

    #[test]
    fn boundary_policies() {
        let square = square();
        let on_edge = na::vector![10.0, 5.0];
        let on_vertex = na::vector![0.0, 0.0];

        assert!(!square.contains_point(on_edge));
        assert!(!square.contains_point(on_vertex));
        assert!(!square.contains_point_w_policy(on_edge, BoundaryPolicy::Exclusive));

        assert!(square.contains_point_w_policy(on_edge, BoundaryPolicy::Inclusive));
        assert!(square.contains_point_w_policy(on_vertex, BoundaryPolicy::Inclusive));
        // the policy only matters on the boundary
        assert!(square.contains_point_w_policy(na::vector![5.0, 5.0], BoundaryPolicy::Inclusive));
        assert!(!square.contains_point_w_policy(na::vector![11.0, 5.0], BoundaryPolicy::Inclusive));
    }

    #[test]
    fn point_in_polygon_rigid_motion_invariant() {
        let triangle = vec![
            na::vector![0.0, 0.0],
            na::vector![8.0, 1.0],
            na::vector![3.0, 7.0],
        ];
        let samples = [
            na::vector![3.0, 2.0],
            na::vector![6.0, 5.0],
            na::vector![-1.0, 1.0],
            na::vector![4.0, 3.5],
        ];
        let offset = na::vector![-13.0, 42.5];

        for step in 0..12 {
            let angle = f64::from(step) * 0.55;
            let center = na::vector![2.0, -3.0];
            let moved = triangle
                .iter()
                .map(|p| point_utils::rotate_about(*p, center, angle) + offset)
                .collect::<Vec<_>>();

            for sample in samples {
                let moved_sample = point_utils::rotate_about(sample, center, angle) + offset;
                assert_eq!(
                    point_in_polygon(sample, &triangle),
                    point_in_polygon(moved_sample, &moved),
                    "sample {sample:?} at angle {angle}"
                );
            }
        }
    }

    #[test]
    fn centroid_of_triangle() {
        let centroid = polygon_centroid(&[
            na::vector![5.0, 0.0],
            na::vector![10.0, 10.0],
            na::vector![0.0, 10.0],
        ])
        .unwrap();
        assert_relative_eq!(centroid, na::vector![5.0, 20.0 / 3.0], epsilon = 1e-12);

        // winding doesn't matter
        let reversed = polygon_centroid(&[
            na::vector![0.0, 10.0],
            na::vector![10.0, 10.0],
            na::vector![5.0, 0.0],
        ])
        .unwrap();
        assert_relative_eq!(reversed, centroid, epsilon = 1e-12);
    }

    #[test]
    fn centroid_of_degenerate_rings() {
        let collinear = polygon_centroid(&[
            na::vector![0.0, 0.0],
            na::vector![2.0, 0.0],
            na::vector![4.0, 0.0],
        ])
        .unwrap();
        assert_relative_eq!(collinear, na::vector![2.0, 0.0]);

        assert!(polygon_centroid(&[]).is_err());
    }

    #[test]
    fn offset_square() {
        let square = square();
        let expected =
            bounds_from_points(&[na::vector![-2.0, -2.0], na::vector![12.0, 12.0]]).unwrap();

        let grown = square.offset(2.0);
        assert!(grown.bounds().unwrap().approx_eq(&expected));

        // clockwise winding grows outward as well
        let mut reversed = square.points.clone();
        reversed.reverse();
        let grown = Polygon::new(reversed).offset(2.0);
        assert!(grown.bounds().unwrap().approx_eq(&expected));

        assert_eq!(square.offset(0.0), square);
    }

    #[test]
    fn offset_degenerate_ring() {
        let point = Polygon::new(vec![na::vector![1.0, 1.0], na::vector![1.0, 1.0]]);
        let grown = point.offset(2.0);

        let bounds = grown.bounds().unwrap();
        assert_relative_eq!(bounds.mins, na::point![-1.0, -1.0]);
        assert_relative_eq!(bounds.maxs, na::point![3.0, 3.0]);
        assert!(grown.points.iter().all(|p| p[0].is_finite() && p[1].is_finite()));
    }

    #[test]
    fn distance_to_square_edges() {
        let square = square();
        assert_relative_eq!(square.distance_to_edges(na::vector![5.0, 4.0], true).unwrap(), 4.0);
        assert_relative_eq!(square.distance_to_edges(na::vector![13.0, 14.0], true).unwrap(), 5.0);
        // without the closing edge the left side is not considered
        assert_relative_eq!(square.distance_to_edges(na::vector![1.0, 5.0], false).unwrap(), 5.0);
        assert!(Polygon::default().distance_to_edges(na::vector![0.0, 0.0], true).is_none());
    }
}
