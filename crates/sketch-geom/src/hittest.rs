//! Hit-testing, written once for every [Shapeable].

// Imports
use crate::intersect::{
    intersect_bounds_polygon, intersect_line_segment_polygon, intersect_line_segment_polyline,
};
use crate::polygon::{bounds_contained, BoundaryPolicy};
use crate::shapes::Shapeable;
use p2d::bounding_volume::Aabb;

/// Whether the point hits the shape.
///
/// Closed shapes are hit strictly inside their outline. Open shapes (lines, arrows) have no inside,
/// they are hit within half their stroke width of the outline.
pub fn hit_test_point<S: Shapeable + ?Sized>(shape: &S, point: na::Vector2<f64>) -> bool {
    hit_test_point_w_policy(shape, point, BoundaryPolicy::Exclusive)
}

/// Whether the point hits the shape, classifying points exactly on the outline of closed shapes by
/// the policy.
pub fn hit_test_point_w_policy<S: Shapeable + ?Sized>(
    shape: &S,
    point: na::Vector2<f64>,
    policy: BoundaryPolicy,
) -> bool {
    let outline = shape.outline();

    if shape.is_closed() {
        outline.contains_point_w_policy(point, policy)
    } else {
        outline
            .distance_to_edges(point, false)
            .is_some_and(|distance| distance <= shape.stroke_width() * 0.5)
    }
}

/// Whether the segment a-b crosses any edge of the shape's outline.
pub fn hit_test_line_segment<S: Shapeable + ?Sized>(
    shape: &S,
    a: na::Vector2<f64>,
    b: na::Vector2<f64>,
) -> bool {
    let outline = shape.outline();

    if shape.is_closed() {
        intersect_line_segment_polygon(a, b, outline.points()).did_intersect
    } else {
        intersect_line_segment_polyline(a, b, outline.points()).did_intersect
    }
}

/// Whether the shape lies completely inside the query bounds or its outline crosses the bounds'
/// edges.
///
/// Callers that need to tell the two apart check [bounds_contained] first.
pub fn hit_test_bounds<S: Shapeable + ?Sized>(shape: &S, query: &Aabb) -> bool {
    bounds_contained(&shape.bounds(), query)
        || !intersect_bounds_polygon(query, shape.outline().points(), shape.is_closed()).is_empty()
}
