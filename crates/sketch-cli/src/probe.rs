// Imports
use crate::scene::Scene;
use anyhow::Context;
use itertools::Itertools;
use p2d::bounding_volume::{Aabb, BoundingVolume};
use serde::Serialize;
use sketch_geom::hittest::{hit_test_bounds, hit_test_line_segment, hit_test_point_w_policy};
use sketch_geom::polygon::bounds_contained;
use sketch_geom::shapes::Shapeable;
use sketch_geom::{BindingQuery, BindingResolver, BindingResult, BoundaryPolicy};
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct BoundsReport {
    pub(crate) id: String,
    pub(crate) kind: &'static str,
    pub(crate) bounds: Aabb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) expanded_bounds: Option<Aabb>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RegionHitReport {
    pub(crate) id: String,
    /// Whether the shape lies completely inside the region, as opposed to crossing its edges.
    pub(crate) contained: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct BindReport {
    pub(crate) id: String,
    pub(crate) binding: Option<BindingResult>,
}

/// The bounds of all shapes, and their expanded bounds when requested.
pub(crate) fn run_bounds(scene: &Scene, expanded: bool) -> Vec<BoundsReport> {
    let margin = scene.config.margin;

    scene
        .shapes
        .iter()
        .map(|scene_shape| BoundsReport {
            id: scene_shape.id.clone(),
            kind: scene_shape.kind_name(),
            bounds: scene_shape.shape.bounds(),
            expanded_bounds: expanded.then(|| scene_shape.shape.expanded_bounds(margin)),
        })
        .collect()
}

/// The ids of the shapes hit by the point.
pub(crate) fn run_hit_point(
    scene: &Scene,
    point: na::Vector2<f64>,
    policy: BoundaryPolicy,
) -> Vec<String> {
    let hits = scene
        .shapes
        .iter()
        .filter(|scene_shape| hit_test_point_w_policy(&scene_shape.shape, point, policy))
        .map(|scene_shape| scene_shape.id.clone())
        .collect::<Vec<String>>();

    debug!("point {point:?} hits [{}]", hits.iter().join(", "));
    hits
}

/// The ids of the shapes whose outline is crossed by the segment a-b.
pub(crate) fn run_hit_segment(
    scene: &Scene,
    a: na::Vector2<f64>,
    b: na::Vector2<f64>,
) -> Vec<String> {
    scene
        .shapes
        .iter()
        .filter(|scene_shape| hit_test_line_segment(&scene_shape.shape, a, b))
        .map(|scene_shape| scene_shape.id.clone())
        .collect()
}

/// The shapes hit by the region, skipping shapes whose bounds don't even touch it.
///
/// Each run loads the scene once and queries it once, so bounds are computed directly. Hosts that
/// query a scene repeatedly memoize them in a [sketch_geom::BoundsCache].
pub(crate) fn run_hit_bounds(scene: &Scene, region: Aabb) -> Vec<RegionHitReport> {
    scene
        .shapes
        .iter()
        .map(|scene_shape| (scene_shape, scene_shape.shape.bounds()))
        .filter(|(_, bounds)| bounds.intersects(&region))
        .filter(|(scene_shape, _)| hit_test_bounds(&scene_shape.shape, &region))
        .map(|(scene_shape, bounds)| RegionHitReport {
            id: scene_shape.id.clone(),
            contained: bounds_contained(&bounds, &region),
        })
        .collect()
}

/// Resolves the binding of the query against the shape with the given id, or against all shapes.
pub(crate) fn run_bind(
    scene: &Scene,
    query: &BindingQuery,
    id: Option<&str>,
) -> anyhow::Result<Vec<BindReport>> {
    let resolver = BindingResolver::new(scene.config).context("Invalid binding configuration.")?;

    let scene_shapes = match id {
        Some(id) => vec![scene
            .shape(id)
            .ok_or_else(|| anyhow::anyhow!("Scene has no shape with id \"{id}\"."))?],
        None => scene.shapes.iter().collect(),
    };

    scene_shapes
        .into_iter()
        .map(|scene_shape| {
            let binding = resolver
                .resolve(&scene_shape.shape, query)
                .with_context(|| {
                    format!("Resolving binding to shape \"{}\" failed.", scene_shape.id)
                })?;
            Ok(BindReport {
                id: scene_shape.id.clone(),
                binding,
            })
        })
        .collect()
}
