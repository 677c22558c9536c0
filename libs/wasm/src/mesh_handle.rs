//! # Mesh Handle
//!
//! WASM-friendly wrapper for engine buffers that can be transferred to
//! JavaScript.

use quadray_engine::{BatchedMesh, Mesh};
use wasm_bindgen::prelude::*;

/// Flat buffers for one draw call: triangles plus edge segments.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_polyhedron_buffers("cube", 1.0, true);
///
/// const positions = mesh.positions();          // Float64Array
/// const indices = mesh.indices();              // Uint32Array
/// const lines = mesh.edge_positions();         // Float64Array
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(new Float32Array(positions), 3));
/// geometry.setIndex(new THREE.BufferAttribute(indices, 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f64>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Segment endpoints as [x0, y0, z0, x1, y1, z1, ...]
    edge_positions: Vec<f64>,
    /// Generation parameters as JSON, for polyhedra only
    params_json: Option<String>,
}

#[wasm_bindgen]
impl MeshHandle {
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    #[wasm_bindgen(getter)]
    pub fn segment_count(&self) -> u32 {
        (self.edge_positions.len() / 6) as u32
    }

    /// Vertex positions, length `vertex_count * 3`.
    pub fn positions(&self) -> Vec<f64> {
        self.positions.clone()
    }

    /// Triangle indices, length `triangle_count * 3`.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Line-segment endpoints, length `segment_count * 6`.
    pub fn edge_positions(&self) -> Vec<f64> {
        self.edge_positions.clone()
    }

    /// Serialized `GenerationParams`; pass back to `regenerate_buffers`.
    pub fn params_json(&self) -> Option<String> {
        self.params_json.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.edge_positions.is_empty()
    }
}

impl MeshHandle {
    /// Fan-triangulates faces and expands edges into segment endpoints.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let positions = mesh
            .vertices()
            .iter()
            .flat_map(|v| v.to_array())
            .collect();
        let indices = mesh.triangulate().into_iter().flatten().collect();
        let edge_positions = mesh
            .edges()
            .iter()
            .flat_map(|&[a, b]| {
                let (a, b) = (mesh.vertex(a), mesh.vertex(b));
                [a.x, a.y, a.z, b.x, b.y, b.z]
            })
            .collect();

        Self {
            positions,
            indices,
            edge_positions,
            params_json: None,
        }
    }

    pub fn from_batch(batch: BatchedMesh) -> Self {
        let (positions, indices, edge_positions) = batch.into_buffers();
        Self {
            positions,
            indices,
            edge_positions,
            params_json: None,
        }
    }

    pub(crate) fn with_params(mut self, json: String) -> Self {
        self.params_json = Some(json);
        self
    }
}
