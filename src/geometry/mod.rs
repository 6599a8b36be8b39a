//! 3D geometry primitives.
//!
//! This module provides an immutable point value type with Euclidean
//! distance, and a sphere type with derived measurements and pairwise
//! containment/intersection predicates. All boundary comparisons share
//! the [`TOLERANCE`] constant so that touching surfaces count as
//! containing/intersecting instead of falling to floating-point noise.

pub mod point;
pub mod sphere;

pub use point::Point3D;
pub use sphere::Sphere3D;

/// Tolerance used by all boundary predicates.
///
/// A point exactly on a sphere's surface, or two exactly tangent spheres,
/// satisfy `contains`/`intersects` within this epsilon.
pub const TOLERANCE: f64 = 1e-9;
