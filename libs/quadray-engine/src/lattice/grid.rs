//! # Reference Grids
//!
//! Line grids emitted as independent segments: every segment owns its two
//! vertices, and the mesh has edges but no faces.

use super::spacing::{checked_distances, CumulativeDistance};
use super::GridMode;
use crate::analysis::plane_basis;
use crate::coordinates::basis_vectors;
use crate::error::{check_scale, EngineError, EngineResult};
use crate::mesh::Mesh;
use crate::rt::ngon_vertices;
use config::constants::{quadray_grid_interval, MAX_TESSELLATIONS, POLAR_RADIAL_LINES};
use glam::DVec3;
use tracing::debug;

/// The six basis-pair planes, as WXYZ index pairs.
const BASIS_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Builds grid lines for `mode`.
///
/// * Uniform: `t(t+1)/2` triangles per basis-pair plane at step
///   `scale·√6/4`, three segments each
/// * Polar: `t` rings per plane at radii `cum[1..=t]` over an outer extent of
///   `t·scale·√6/4`, plus four radial lines
/// * Cartesian: `t + 1` lines per direction spanning `[-scale, scale]`
///
/// A zero or negative `tessellations` yields an empty mesh.
///
/// # Errors
///
/// `InvalidParameter` for tessellations above `MAX_TESSELLATIONS`, a bad
/// scale, fewer than three polar segments, or a cumulative-distance function
/// that breaks its contract.
///
/// # Example
///
/// ```rust
/// use quadray_engine::lattice::{build_grid, GravitySpacing, GridMode};
///
/// let grid = build_grid(GridMode::Uniform, 3, 1.0, &GravitySpacing).unwrap();
/// // 6 planes × 6 triangles × 3 segments
/// assert_eq!(grid.edge_count(), 108);
/// ```
pub fn build_grid(
    mode: GridMode,
    tessellations: i32,
    scale: f64,
    spacing: &dyn CumulativeDistance,
) -> EngineResult<Mesh> {
    if tessellations <= 0 {
        return Ok(Mesh::new());
    }
    if tessellations > MAX_TESSELLATIONS {
        return Err(EngineError::invalid_parameter(format!(
            "tessellations {tessellations} exceeds maximum {MAX_TESSELLATIONS}"
        )));
    }
    check_scale(scale)?;
    let t = tessellations as usize;

    let mut mesh = Mesh::new();
    match mode {
        GridMode::Uniform => {
            let step = scale * quadray_grid_interval();
            let dirs = basis_vectors().map(|b| b.normalize());
            for (a, b) in BASIS_PAIRS {
                ivm_plane(&mut mesh, dirs[a], dirs[b], t, step);
            }
        }
        GridMode::Polar { segments } => {
            if segments < 3 {
                return Err(EngineError::invalid_parameter(format!(
                    "polar rings need at least 3 segments, got {segments}"
                )));
            }
            let extent = t as f64 * scale * quadray_grid_interval();
            let cum = checked_distances(spacing, t, extent)?;
            for normal in polar_normals() {
                polar_plane(&mut mesh, normal, &cum[1..], segments);
            }
        }
        GridMode::Cartesian => {
            for normal in [DVec3::Z, DVec3::Y, DVec3::X] {
                cartesian_plane(&mut mesh, normal, scale, t);
            }
        }
    }

    debug!(?mode, tessellations, segments = mesh.edge_count(), "grid built");
    Ok(mesh)
}

fn push_segment(mesh: &mut Mesh, a: DVec3, b: DVec3) {
    let i = mesh.add_vertex(a);
    let j = mesh.add_vertex(b);
    mesh.add_edge(i, j);
}

/// Triangles between two basis directions: for `i + j < t`, the triangle
/// `P(i,j), P(i+1,j), P(i,j+1)` with `P(i,j) = d1·i·step + d2·j·step`.
fn ivm_plane(mesh: &mut Mesh, d1: DVec3, d2: DVec3, t: usize, step: f64) {
    let p = |i: usize, j: usize| d1 * (i as f64 * step) + d2 * (j as f64 * step);
    for i in 0..t {
        for j in 0..(t - i) {
            let a = p(i, j);
            let b = p(i + 1, j);
            let c = p(i, j + 1);
            push_segment(mesh, a, b);
            push_segment(mesh, b, c);
            push_segment(mesh, c, a);
        }
    }
}

/// Unit normals of the four basis-orthogonal planes, then XY, XZ, YZ.
fn polar_normals() -> [DVec3; 7] {
    let b = basis_vectors().map(|v| v.normalize());
    [b[0], b[1], b[2], b[3], DVec3::Z, DVec3::Y, DVec3::X]
}

fn polar_plane(mesh: &mut Mesh, normal: DVec3, radii: &[f64], segments: u32) {
    let (u, v) = plane_basis(normal);
    let lift = |p: glam::DVec2| u * p.x + v * p.y;

    for &radius in radii {
        let ring: Vec<DVec3> = ngon_vertices(segments, radius).into_iter().map(lift).collect();
        for k in 0..ring.len() {
            push_segment(mesh, ring[k], ring[(k + 1) % ring.len()]);
        }
    }

    let outer = radii.last().copied().unwrap_or(0.0);
    for end in ngon_vertices(POLAR_RADIAL_LINES, outer) {
        push_segment(mesh, DVec3::ZERO, lift(end));
    }
}

fn cartesian_plane(mesh: &mut Mesh, normal: DVec3, half_extent: f64, divisions: usize) {
    let (u, v) = plane_basis(normal);
    let step = 2.0 * half_extent / divisions as f64;
    for i in 0..=divisions {
        let s = -half_extent + i as f64 * step;
        push_segment(mesh, u * -half_extent + v * s, u * half_extent + v * s);
        push_segment(mesh, u * s + v * -half_extent, u * s + v * half_extent);
    }
}
