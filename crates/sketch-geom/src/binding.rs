//! Resolving where an arrow binds to a shape.
//!
//! Given the position of an arrow handle and the ray the arrow approaches on, the resolver decides
//! whether the handle binds to the shape, which point of the shape the arrow should point to (the
//! anchor, normalized to the shape's expanded bounds) and how far the arrow should stay away from
//! the shape's edge.

// Imports
use crate::ext::{AabbExt, Vector2Ext};
use crate::intersect::intersect_ray_line_segment;
use crate::point_utils;
use crate::polygon::point_in_bounds;
use crate::shapes::Shapeable;
use crate::GeomError;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The binding margin used when the host doesn't configure one.
pub const DEFAULT_BINDING_MARGIN: f64 = 16.0;

/// Configuration of the binding resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "binding_config")]
pub struct BindingConfig {
    /// The binding margin, in shape coordinate units.
    ///
    /// Grows a shape's outline into its bindable region and is the minimum stand-off of a bound
    /// arrow.
    #[serde(rename = "margin")]
    pub margin: f64,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_BINDING_MARGIN,
        }
    }
}

impl BindingConfig {
    /// Checks that the margin is finite and non-negative.
    pub fn validate(&self) -> Result<(), GeomError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(GeomError::invalid_input(format!(
                "binding margin must be finite and non-negative, is `{}`",
                self.margin
            )));
        }
        Ok(())
    }
}

/// A binding query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename = "binding_query")]
pub struct BindingQuery {
    /// The candidate anchor point, e.g. the current position of the arrow handle.
    #[serde(rename = "point")]
    pub point: na::Vector2<f64>,
    /// The origin of the ray the arrow approaches on.
    #[serde(rename = "origin")]
    pub origin: na::Vector2<f64>,
    /// The direction of the ray the arrow approaches on.
    #[serde(rename = "direction")]
    pub direction: na::Vector2<f64>,
    /// Bind regardless of the usual proximity rules, attaching directly to the point.
    #[serde(rename = "bind_anywhere", default)]
    pub bind_anywhere: bool,
}

impl BindingQuery {
    /// A query for an arrow from origin towards the handle at point.
    pub fn from_origin_to_point(origin: na::Vector2<f64>, point: na::Vector2<f64>) -> Self {
        Self {
            point,
            origin,
            direction: point - origin,
            bind_anywhere: false,
        }
    }

    /// With bind anywhere set.
    pub fn with_bind_anywhere(mut self, bind_anywhere: bool) -> Self {
        self.bind_anywhere = bind_anywhere;
        self
    }
}

/// The resolved binding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename = "binding_result")]
pub struct BindingResult {
    /// The anchor, normalized to `0.0..=1.0` within the expanded bounds of the shape.
    #[serde(rename = "anchor")]
    pub anchor: na::Vector2<f64>,
    /// The distance the arrow keeps from the shape. Zero attaches the arrow directly.
    #[serde(rename = "distance")]
    pub distance: f64,
}

/// Resolves bindings of arrows to shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindingResolver {
    config: BindingConfig,
}

impl BindingResolver {
    /// A new resolver. The margin must be finite and non-negative.
    pub fn new(config: BindingConfig) -> Result<Self, GeomError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The binding margin.
    pub fn margin(&self) -> f64 {
        self.config.margin
    }

    /// Resolves the binding of the query against the shape.
    ///
    /// Returns `Ok(None)` when the query doesn't bind, an error only when the ray direction has
    /// zero length.
    pub fn resolve<S: Shapeable + ?Sized>(
        &self,
        shape: &S,
        query: &BindingQuery,
    ) -> Result<Option<BindingResult>, GeomError> {
        let margin = self.config.margin;
        let point = query.point;

        if !shape.can_bind() {
            trace!("not binding, shape can't be bound to");
            return Ok(None);
        }

        let expanded_bounds = shape.expanded_bounds(margin);
        if !point_in_bounds(point, &expanded_bounds) {
            trace!("not binding, point {point:?} outside of the expanded bounds");
            return Ok(None);
        }
        if shape.bounds().is_degenerate() {
            trace!("not binding, shape has no area");
            return Ok(None);
        }

        let outline = shape.outline();
        let expanded_outline = shape.expanded_outline(margin);

        let Some(closest_distance_to_edge) = outline.distance_to_edges(point, true) else {
            return Ok(None);
        };
        if !(expanded_outline.contains_point(point) || closest_distance_to_edge < margin) {
            trace!(
                "not binding, point {point:?} outside of the expanded outline, \
                {closest_distance_to_edge} away from the edge"
            );
            return Ok(None);
        }

        let mut intersections = Vec::new();
        for (start, end) in expanded_outline.segments(true) {
            intersections.extend(
                intersect_ray_line_segment(query.origin, query.direction, start, end)?.points,
            );
        }

        // The furthest intersection, so the arrow anchors past the near edge of the bindable region
        let Some(intersection) = intersections.into_iter().max_by(|a, b| {
            point_utils::dist(*a, query.origin).total_cmp(&point_utils::dist(*b, query.origin))
        }) else {
            trace!("not binding, ray misses the expanded outline");
            return Ok(None);
        };

        let center = shape.centroid();
        // between the handle and the intersection
        let middle_point = point_utils::med(point, intersection);

        let (anchor, distance) = if query.bind_anywhere {
            let anchor = if point_utils::dist(point, center) < margin * 0.5 {
                center
            } else {
                point
            };
            (anchor, 0.0)
        } else {
            let center_distance =
                point_utils::distance_to_line_segment(point, middle_point, center);
            let anchor = if center_distance < margin * 0.5 {
                center
            } else {
                middle_point
            };
            let distance = if outline.contains_point(point) {
                margin
            } else {
                margin.max(closest_distance_to_edge)
            };
            (anchor, distance)
        };

        let extents = na::vector![expanded_bounds.width(), expanded_bounds.height()];
        let anchor = (anchor - expanded_bounds.mins.coords)
            .div_v(&extents)
            .clamp_v(0.0, 1.0);

        Ok(Some(BindingResult { anchor, distance }))
    }
}
