//! Batched buffers for an instanced matrix.

use super::layout::build_layout;
use super::{CellPlacement, LayoutRule, SymmetryFlags};
use crate::error::{EngineError, EngineResult};
use crate::mesh::Mesh;
use config::constants::MAX_VERTICES;
use tracing::debug;

/// Every cell of a matrix merged into flat buffers.
///
/// - `positions`: `cells × vertices_per_cell × 3` coordinates
/// - `indices`: the base mesh's fan-triangulated faces, offset by
///   `cell × vertices_per_cell`
/// - `edge_positions`: two endpoints (six coordinates) per edge segment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchedMesh {
    positions: Vec<f64>,
    indices: Vec<u32>,
    edge_positions: Vec<f64>,
    layout: Vec<CellPlacement>,
    vertices_per_cell: usize,
}

impl BatchedMesh {
    #[inline]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn edge_positions(&self) -> &[f64] {
        &self.edge_positions
    }

    /// Placements the buffers were built from.
    pub fn layout(&self) -> &[CellPlacement] {
        &self.layout
    }

    pub fn cell_count(&self) -> usize {
        self.layout.len()
    }

    pub fn vertices_per_cell(&self) -> usize {
        self.vertices_per_cell
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn segment_count(&self) -> usize {
        self.edge_positions.len() / 6
    }

    /// Consumes the batch, returning `(positions, indices, edge_positions)`.
    pub fn into_buffers(self) -> (Vec<f64>, Vec<u32>, Vec<f64>) {
        (self.positions, self.indices, self.edge_positions)
    }
}

/// Instances `base` over an `n × n` layout.
///
/// # Errors
///
/// `InvalidParameter` for a bad size, half size or an oversized result;
/// `InvariantViolation` when `base` does not validate.
///
/// # Example
///
/// ```rust
/// use quadray_engine::{build_polyhedron, create_matrix, BuildOptions, PolyhedronKind};
/// use quadray_engine::matrix::{LayoutRule, SymmetryFlags};
///
/// let cube = build_polyhedron(PolyhedronKind::Cube, 1.0, &BuildOptions::default()).unwrap();
/// let batch = create_matrix(
///     3,
///     &cube.mesh,
///     LayoutRule::Grid { half_size: 1.0 },
///     SymmetryFlags::default(),
/// )
/// .unwrap();
/// assert_eq!(batch.cell_count(), 9);
/// assert_eq!(batch.triangle_count(), 9 * 12);
/// ```
pub fn create_matrix(
    n: usize,
    base: &Mesh,
    rule: LayoutRule,
    flags: SymmetryFlags,
) -> EngineResult<BatchedMesh> {
    base.validate()?;
    let layout = build_layout(n, rule, flags)?;

    let per_cell = base.vertex_count();
    let total_vertices = layout.len() * per_cell;
    if total_vertices > MAX_VERTICES {
        return Err(EngineError::invalid_parameter(format!(
            "matrix would hold {total_vertices} vertices, maximum is {MAX_VERTICES}"
        )));
    }

    let template = base.triangulate();
    let mut positions = Vec::with_capacity(total_vertices * 3);
    let mut indices = Vec::with_capacity(layout.len() * template.len() * 3);
    let mut edge_positions = Vec::with_capacity(layout.len() * base.edge_count() * 6);

    for (cell, placement) in layout.iter().enumerate() {
        for &v in base.vertices() {
            positions.extend_from_slice(&placement.place(v).to_array());
        }

        let offset = (cell * per_cell) as u32;
        for tri in &template {
            indices.extend(tri.iter().map(|&i| i + offset));
        }

        for &[a, b] in base.edges() {
            edge_positions.extend_from_slice(&placement.place(base.vertex(a)).to_array());
            edge_positions.extend_from_slice(&placement.place(base.vertex(b)).to_array());
        }
    }

    debug!(
        n,
        cells = layout.len(),
        vertices = total_vertices,
        triangles = indices.len() / 3,
        "matrix batched"
    );

    Ok(BatchedMesh {
        positions,
        indices,
        edge_positions,
        layout,
        vertices_per_cell: per_cell,
    })
}
