//! Sphere3D value object.

use super::point::Point3D;
use super::TOLERANCE;
use crate::error::{GeometryError, GeometryResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// An immutable sphere in 3D space.
///
/// The radius is validated to be strictly positive at construction.
/// Derived measurements (diameter, surface area, volume) are recomputed
/// on each access.
///
/// # Example
///
/// ```
/// use domain_utils::geometry::{Point3D, Sphere3D};
///
/// let sphere = Sphere3D::new(Point3D::new(0.0, 0.0, 0.0), 5.0).unwrap();
/// assert!(sphere.contains_point(Point3D::new(3.0, 4.0, 0.0)));
/// assert_eq!(sphere.diameter(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sphere3D {
    center: Point3D,
    radius: f64,
}

impl Sphere3D {
    /// Create a new sphere from a center and a radius.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonPositiveRadius` when `radius <= 0`
    /// (zero is rejected).
    pub fn new(center: Point3D, radius: f64) -> GeometryResult<Self> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }

        Ok(Self { center, radius })
    }

    /// The center of the sphere.
    pub fn center(&self) -> Point3D {
        self.center
    }

    /// The radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The diameter of the sphere.
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// The surface area of the sphere.
    pub fn surface_area(&self) -> f64 {
        4.0 * PI * self.radius * self.radius
    }

    /// The volume of the sphere.
    pub fn volume(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius.powi(3)
    }

    /// Distance from a point to the nearest point of the sphere's surface.
    ///
    /// Points inside or on the sphere report 0.
    pub fn distance_to_point(&self, p: Point3D) -> f64 {
        (self.center.distance_to(p) - self.radius).max(0.0)
    }

    /// Distance between the nearest surface points of two spheres.
    ///
    /// Overlapping or touching spheres report 0.
    pub fn distance_to_sphere(&self, other: &Sphere3D) -> f64 {
        let dist_centers = self.center.distance_to(other.center);
        (dist_centers - (self.radius + other.radius)).max(0.0)
    }

    /// Whether the point lies inside the sphere, boundary included.
    pub fn contains_point(&self, p: Point3D) -> bool {
        self.center.distance_to(p) <= self.radius + TOLERANCE
    }

    /// Whether the other sphere lies entirely inside this sphere.
    ///
    /// True when the other sphere's farthest extent never exceeds this
    /// sphere's radius.
    pub fn contains_sphere(&self, other: &Sphere3D) -> bool {
        let dist_centers = self.center.distance_to(other.center);
        dist_centers + other.radius <= self.radius + TOLERANCE
    }

    /// Whether the two spheres intersect, tangency included.
    ///
    /// Full containment counts as intersection.
    pub fn intersects(&self, other: &Sphere3D) -> bool {
        let dist_centers = self.center.distance_to(other.center);
        dist_centers <= self.radius + other.radius + TOLERANCE
    }
}

// Serde support - deserialize through the validating constructor
impl<'de> Deserialize<'de> for Sphere3D {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SphereRecord {
            center: Point3D,
            radius: f64,
        }

        let record = SphereRecord::deserialize(deserializer)?;
        Sphere3D::new(record.center, record.radius).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Sphere3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sphere(center={}, radius={})", self.center, self.radius)
    }
}
