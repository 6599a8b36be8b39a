//! Integration tests for the geometry primitives.
//!
//! These tests validate Point3D distance, Sphere3D construction and
//! derived measurements, and the tolerance-aware distance/containment/
//! intersection predicates, including their boundary behavior.

use domain_utils::{GeometryError, Point3D, Sphere3D, TOLERANCE};
use std::f64::consts::PI;

fn sphere(x: f64, y: f64, z: f64, radius: f64) -> Sphere3D {
    Sphere3D::new(Point3D::new(x, y, z), radius).unwrap()
}

/// Test point distance identity and symmetry.
///
/// This test validates:
/// - distance(p, p) == 0
/// - distance(a, b) == distance(b, a)
#[test]
fn test_point_distance_identity_and_symmetry() {
    let a = Point3D::new(1.0, 2.0, 3.0);
    let b = Point3D::new(4.0, 6.0, 3.0);

    assert_eq!(a.distance_to(a), 0.0);
    assert_eq!(a.distance_to(b), 5.0);
    assert_eq!(a.distance_to(b), b.distance_to(a));
}

/// Test sphere construction: radius must be strictly positive.
#[test]
fn test_sphere_construction() {
    let center = Point3D::new(1.0, 2.0, 3.0);

    assert_eq!(
        Sphere3D::new(center, 0.0),
        Err(GeometryError::NonPositiveRadius(0.0))
    );
    assert_eq!(
        Sphere3D::new(center, -0.1),
        Err(GeometryError::NonPositiveRadius(-0.1))
    );

    let s = Sphere3D::new(center, 5.0).unwrap();
    assert_eq!(s.center(), center);
    assert_eq!(s.radius(), 5.0);
}

/// Test derived measurements against the closed-form formulas.
#[test]
fn test_derived_measurements() {
    let s = sphere(0.0, 0.0, 0.0, 5.0);

    assert_eq!(s.diameter(), 10.0);
    assert_eq!(s.surface_area(), 100.0 * PI);
    assert_eq!(s.volume(), 4.0 / 3.0 * PI * 125.0);
}

/// Test surface distances are floored at zero.
///
/// This test validates:
/// - Points inside or on the sphere report 0
/// - Overlapping or touching spheres report 0
/// - Separated shapes report the surface gap
#[test]
fn test_surface_distances_floor_at_zero() {
    let s = sphere(0.0, 0.0, 0.0, 5.0);

    assert_eq!(s.distance_to_point(Point3D::new(3.0, 4.0, 0.0)), 0.0);
    assert_eq!(s.distance_to_point(Point3D::new(5.0, 0.0, 0.0)), 0.0);
    assert_eq!(s.distance_to_point(Point3D::new(10.0, 0.0, 0.0)), 5.0);

    assert_eq!(s.distance_to_sphere(&sphere(3.0, 0.0, 0.0, 1.0)), 0.0);
    assert_eq!(s.distance_to_sphere(&sphere(6.0, 0.0, 0.0, 2.0)), 0.0);
    assert_eq!(s.distance_to_sphere(&sphere(10.0, 0.0, 0.0, 3.0)), 2.0);
}

/// Test containment boundary behavior around the tolerance.
///
/// This test validates:
/// - The center and interior points are contained
/// - A point at exactly radius distance is contained
/// - A point past radius + tolerance is not
#[test]
fn test_contains_point_boundary() {
    let s = sphere(0.0, 0.0, 0.0, 5.0);

    assert!(s.contains_point(Point3D::new(0.0, 0.0, 0.0)));
    assert!(s.contains_point(Point3D::new(3.0, 4.0, 0.0)));
    assert!(s.contains_point(Point3D::new(5.0, 0.0, 0.0)));
    assert!(s.contains_point(Point3D::new(5.0 + TOLERANCE / 2.0, 0.0, 0.0)));
    assert!(!s.contains_point(Point3D::new(5.0 + TOLERANCE * 10.0, 0.0, 0.0)));
    assert!(!s.contains_point(Point3D::new(6.0, 0.0, 0.0)));
}

/// Test intersection is symmetric and includes tangency.
#[test]
fn test_intersects_symmetric() {
    let s1 = sphere(0.0, 0.0, 0.0, 5.0);
    let cases = [
        sphere(3.0, 0.0, 0.0, 2.0),
        sphere(6.0, 0.0, 0.0, 1.0),
        sphere(6.0, 0.0, 0.0, 2.0),
        sphere(10.0, 0.0, 0.0, 3.0),
    ];

    for other in &cases {
        assert_eq!(s1.intersects(other), other.intersects(&s1));
    }

    assert!(s1.intersects(&cases[0]));
    assert!(s1.intersects(&cases[1])); // exactly tangent
    assert!(s1.intersects(&cases[2]));
    assert!(!s1.intersects(&cases[3]));
}

/// Test that containment implies intersection for a spread of sphere pairs.
#[test]
fn test_containment_implies_intersection() {
    let pairs = [
        (sphere(0.0, 0.0, 0.0, 5.0), sphere(1.0, 1.0, 1.0, 3.0)),
        (sphere(0.0, 0.0, 0.0, 5.0), sphere(3.0, 1.0, 1.0, 3.0)),
        (sphere(0.0, 0.0, 0.0, 5.0), sphere(10.0, 0.0, 0.0, 1.0)),
        (sphere(-2.0, 4.0, 1.0, 7.5), sphere(-1.0, 4.5, 1.0, 2.0)),
        (sphere(0.0, 0.0, 0.0, 1.0), sphere(0.0, 0.0, 0.0, 1.0)),
    ];

    for (outer, inner) in &pairs {
        if outer.contains_sphere(inner) {
            assert!(
                outer.intersects(inner),
                "{} contains {} but does not intersect it",
                outer,
                inner
            );
        }
    }

    // And the containment cases themselves behave as expected.
    assert!(pairs[0].0.contains_sphere(&pairs[0].1));
    assert!(!pairs[1].0.contains_sphere(&pairs[1].1));
    assert!(!pairs[2].0.contains_sphere(&pairs[2].1));
}
