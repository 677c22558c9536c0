//! Tests for intersections, hulls and rotations.

use super::*;
use crate::polyhedra::{build_polyhedron, BuildOptions, PolyhedronKind};
use approx::assert_abs_diff_eq;
use glam::{DMat3, DVec2, DVec3};

fn z_plane(height: f64) -> Plane {
    Plane::from_point_normal(DVec3::new(0.0, 0.0, height), DVec3::Z).unwrap()
}

// =============================================================================
// PLANES AND INTERSECTIONS
// =============================================================================

#[test]
fn test_plane_rejects_zero_normal() {
    assert!(Plane::new(DVec3::ZERO, 1.0).is_err());
    assert!(Plane::from_point_normal(DVec3::ONE, DVec3::new(f64::NAN, 0.0, 0.0)).is_err());
}

#[test]
fn test_plane_project() {
    let plane = z_plane(2.0);
    assert_eq!(plane.project(DVec3::new(1.0, 1.0, 7.0)), DVec3::new(1.0, 1.0, 2.0));
    assert_eq!(plane.signed_distance(DVec3::new(0.0, 0.0, -1.0)), -3.0);
}

#[test]
fn test_segment_crosses_plane() {
    let hit = line_plane_intersection(DVec3::new(0.0, 0.0, -1.0), DVec3::new(2.0, 0.0, 3.0), &z_plane(1.0));
    assert_eq!(hit, Some(DVec3::new(1.0, 0.0, 1.0)));
}

#[test]
fn test_segment_same_side_misses() {
    let hit = line_plane_intersection(DVec3::new(0.0, 0.0, 2.0), DVec3::new(1.0, 0.0, 3.0), &z_plane(1.0));
    assert_eq!(hit, None);
}

#[test]
fn test_segment_parallel_misses() {
    let hit = line_plane_intersection(DVec3::new(0.0, 0.0, 1.0), DVec3::new(5.0, 0.0, 1.0), &z_plane(1.0));
    assert_eq!(hit, None);
}

#[test]
fn test_segment_endpoint_on_plane() {
    let hit = line_plane_intersection(DVec3::new(3.0, 0.0, 1.0), DVec3::new(0.0, 0.0, 4.0), &z_plane(1.0));
    assert_eq!(hit, Some(DVec3::new(3.0, 0.0, 1.0)));
}

#[test]
fn test_sphere_plane_circle() {
    let section = sphere_plane_circle_intersection(DVec3::ZERO, 5.0, &z_plane(3.0), 16).unwrap();
    assert_abs_diff_eq!(section.radius, 4.0, epsilon = 1e-12);
    assert_eq!(section.center, DVec3::new(0.0, 0.0, 3.0));
    assert_eq!(section.points.len(), 16);
    for p in &section.points {
        assert_abs_diff_eq!(p.z, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.distance_squared(section.center), 16.0, epsilon = 1e-9);
    }
}

#[test]
fn test_sphere_plane_miss() {
    assert!(sphere_plane_circle_intersection(DVec3::ZERO, 2.0, &z_plane(3.0), 16).is_none());
    assert!(sphere_plane_circle_intersection(DVec3::ZERO, 0.0, &z_plane(0.0), 16).is_none());
}

#[test]
fn test_sphere_plane_needs_three_segments() {
    for segments in [0, 1, 2] {
        assert!(sphere_plane_circle_intersection(DVec3::ZERO, 5.0, &z_plane(3.0), segments).is_none());
    }
    let triangle = sphere_plane_circle_intersection(DVec3::ZERO, 5.0, &z_plane(3.0), 3).unwrap();
    assert_eq!(triangle.points.len(), 3);
}

#[test]
fn test_plane_normal_is_unit_after_construction() {
    let plane = Plane::new(DVec3::Z * 2.0, -6.0).unwrap();
    assert_eq!(plane.normal(), DVec3::Z);
    assert_eq!(plane.constant(), -3.0);
    assert_eq!(plane.signed_distance(DVec3::new(0.0, 0.0, 5.0)), 2.0);
    assert_eq!(plane.project(DVec3::new(1.0, 0.0, 5.0)), DVec3::new(1.0, 0.0, 3.0));
}

#[test]
fn test_sphere_plane_tangent() {
    let section = sphere_plane_circle_intersection(DVec3::ZERO, 3.0, &z_plane(3.0), 16).unwrap();
    assert_eq!(section.radius, 0.0);
    assert_eq!(section.points, vec![DVec3::new(0.0, 0.0, 3.0)]);
}

#[test]
fn test_plane_basis_is_orthonormal() {
    for normal in [DVec3::Z, DVec3::Y, DVec3::new(1.0, 1.0, 1.0), DVec3::new(0.1, -1.0, 0.0)] {
        let n = normal.normalize();
        let (u, v) = plane_basis(normal);
        assert_abs_diff_eq!(u.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u.dot(n), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u.cross(v).distance(n), 0.0, epsilon = 1e-12);
    }
}

// =============================================================================
// CONVEX HULL
// =============================================================================

#[test]
fn test_hull_unit_square() {
    let square = [
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ];
    assert_eq!(convex_hull_2d(&square), square.to_vec());
}

#[test]
fn test_hull_ignores_order_and_interior() {
    let points = [
        DVec2::new(0.0, 1.0),
        DVec2::new(0.5, 0.5),
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.0, 0.0),
        DVec2::new(0.5, 0.0),
    ];
    let hull = convex_hull_2d(&points);
    assert_eq!(
        hull,
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    );
}

#[test]
fn test_hull_drops_near_duplicates() {
    let points = [
        DVec2::new(0.0, 0.0),
        DVec2::new(1e-10, -1e-10),
        DVec2::new(2.0, 0.0),
        DVec2::new(0.0, 2.0),
    ];
    assert_eq!(convex_hull_2d(&points).len(), 3);
}

#[test]
fn test_hull_small_input_unchanged() {
    let pair = [DVec2::new(3.0, 1.0), DVec2::new(-1.0, 0.0)];
    assert_eq!(convex_hull_2d(&pair), pair.to_vec());
    assert!(convex_hull_2d(&[]).is_empty());
}

#[test]
fn test_hull_is_ccw() {
    let points: Vec<DVec2> = crate::rt::ngon_vertices(7, 2.0);
    let hull = convex_hull_2d(&points);
    assert_eq!(hull.len(), 7);
    for i in 0..hull.len() {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        let c = hull[(i + 2) % hull.len()];
        assert!((b - a).perp_dot(c - b) > 0.0);
    }
}

// =============================================================================
// ROTATION
// =============================================================================

#[test]
fn test_spread_rotation_identity() {
    let m = spread_rotation(0.0, 0.0, 0.0);
    assert_eq!(m, DMat3::IDENTITY);
}

#[test]
fn test_spread_rotation_matches_euler_zyx() {
    let (s1, s2, s3) = (0.25, 0.5, 0.1);
    let angle = |s: f64| s.sqrt().asin();
    let expected = DMat3::from_rotation_z(angle(s1))
        * DMat3::from_rotation_y(angle(s2))
        * DMat3::from_rotation_x(angle(s3));
    let m = spread_rotation(s1, s2, s3);
    for (a, b) in m.to_cols_array().iter().zip(expected.to_cols_array()) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn test_spread_rotation_is_orthogonal() {
    let m = spread_rotation(0.3, 0.7, 0.45);
    let product = m * m.transpose();
    for (a, b) in product.to_cols_array().iter().zip(DMat3::IDENTITY.to_cols_array()) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_rotation_pivot_and_rotate() {
    let mut cube = build_polyhedron(PolyhedronKind::Cube, 1.0, &BuildOptions::default())
        .unwrap()
        .mesh;
    cube.translate(DVec3::new(5.0, 0.0, 0.0));
    let pivot = rotation_pivot(&cube);
    assert_abs_diff_eq!(pivot.distance(DVec3::new(5.0, 0.0, 0.0)), 0.0, epsilon = 1e-12);

    rotate_about_pivot(&mut cube, &spread_rotation(0.5, 0.0, 0.0));
    assert_abs_diff_eq!(rotation_pivot(&cube).distance(pivot), 0.0, epsilon = 1e-12);
}

// =============================================================================
// SECTIONS AND PROJECTIONS
// =============================================================================

#[test]
fn test_cube_cross_section_is_square() {
    let cube = build_polyhedron(PolyhedronKind::Cube, 1.0, &BuildOptions::default())
        .unwrap()
        .mesh;
    let section = cross_section(&cube, &z_plane(0.0)).unwrap();
    assert_eq!(section.len(), 4);
    for p in &section {
        assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.x.abs(), 1.0, epsilon = 1e-12);
    }
    // consecutive points are counter-clockwise about +Z
    let n = (section[1] - section[0]).cross(section[2] - section[1]);
    assert!(n.z > 0.0);
}

#[test]
fn test_octahedron_section_through_vertices() {
    let octa = build_polyhedron(PolyhedronKind::Octahedron, 1.0, &BuildOptions::default())
        .unwrap()
        .mesh;
    let section = cross_section(&octa, &z_plane(0.0)).unwrap();
    assert_eq!(section.len(), 4);
}

#[test]
fn test_cross_section_miss() {
    let tetra = build_polyhedron(PolyhedronKind::Tetrahedron, 1.0, &BuildOptions::default())
        .unwrap()
        .mesh;
    assert!(cross_section(&tetra, &z_plane(10.0)).is_none());
}

#[test]
fn test_cube_silhouettes() {
    let cube = build_polyhedron(PolyhedronKind::Cube, 1.0, &BuildOptions::default())
        .unwrap()
        .mesh;
    assert_eq!(count_hull_vertices(&cube, [0.0, 0.0, 0.0]), 4);
    // (-1, 1, 1) turned onto +Z: the hexagonal silhouette
    assert_eq!(count_hull_vertices(&cube, [0.0, 1.0 / 3.0, 0.5]), 6);
}

#[test]
fn test_projected_hull_is_ccw() {
    let tt = build_polyhedron(
        PolyhedronKind::TruncatedTetrahedron,
        1.0,
        &BuildOptions::default(),
    )
    .unwrap()
    .mesh;
    let hull = projected_hull(&tt, [0.2, 0.3, 0.4]);
    assert!(hull.len() >= 3);
    let area: f64 = (0..hull.len())
        .map(|i| hull[i].perp_dot(hull[(i + 1) % hull.len()]))
        .sum();
    assert!(area > 0.0);
}
