//! # Sections and Projections
//!
//! Slices a solid with a plane, and counts the silhouette vertices of a
//! rotated solid under orthographic projection.

use super::hull2d::convex_hull_2d;
use super::intersect::{line_plane_intersection, plane_basis, Plane};
use super::rotation::spread_rotation;
use crate::mesh::Mesh;
use config::constants::VERTEX_MERGE_EPSILON;
use glam::{DVec2, DVec3};

/// Polygon where `plane` cuts a convex mesh, counter-clockwise about the
/// plane normal.
///
/// `None` when the plane misses the mesh or only touches it at an edge or
/// vertex.
pub fn cross_section(mesh: &Mesh, plane: &Plane) -> Option<Vec<DVec3>> {
    let mut points: Vec<DVec3> = Vec::new();
    for &[a, b] in mesh.edges() {
        let Some(p) = line_plane_intersection(mesh.vertex(a), mesh.vertex(b), plane) else {
            continue;
        };
        if !points
            .iter()
            .any(|q| q.distance_squared(p) < VERTEX_MERGE_EPSILON * VERTEX_MERGE_EPSILON)
        {
            points.push(p);
        }
    }
    if points.len() < 3 {
        return None;
    }

    let center = points.iter().copied().sum::<DVec3>() / points.len() as f64;
    let (u, v) = plane_basis(plane.normal());
    points.sort_by(|a, b| {
        let pa = *a - center;
        let pb = *b - center;
        pa.dot(v)
            .atan2(pa.dot(u))
            .total_cmp(&pb.dot(v).atan2(pb.dot(u)))
    });
    Some(points)
}

/// Convex hull of the mesh vertices after rotating by spreads
/// `[s1, s2, s3]` and dropping Z.
pub fn projected_hull(mesh: &Mesh, spreads: [f64; 3]) -> Vec<DVec2> {
    let rotation = spread_rotation(spreads[0], spreads[1], spreads[2]);
    let projected: Vec<DVec2> = mesh
        .vertices()
        .iter()
        .map(|&v| (rotation * v).truncate())
        .collect();
    convex_hull_2d(&projected)
}

/// Number of silhouette vertices of the rotated, projected mesh.
pub fn count_hull_vertices(mesh: &Mesh, spreads: [f64; 3]) -> usize {
    projected_hull(mesh, spreads).len()
}
