#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![allow(clippy::single_match)]

//! the sketch-geom crate provides the geometry kernel of the sketch whiteboard: shape outlines and
//! bounds, hit-testing and the resolution of arrow bindings against shapes.

// Modules
/// the binding resolver
pub mod binding;
/// host owned memoization of shape bounds
pub mod cache;
/// errors
pub mod error;
/// module for extension traits for foreign types
pub mod ext;
/// hit-testing shapes against points, segments and regions
pub mod hittest;
/// intersection primitives
pub mod intersect;
/// vector math helpers
pub mod point_utils;
/// point rings and polygon utilities
pub mod polygon;
/// module for shapes
pub mod shapes;
/// module for transformation
pub mod transform;

// Re-exports
pub use binding::{BindingConfig, BindingQuery, BindingResolver, BindingResult};
pub use cache::BoundsCache;
pub use error::GeomError;
pub use intersect::IntersectionResult;
pub use polygon::{BoundaryPolicy, Polygon};
pub use shapes::Shape;
pub use transform::Transform;

// Renames
extern crate nalgebra as na;
extern crate parry2d_f64 as p2d;
