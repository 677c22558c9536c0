//! # Mesh Data Structure
//!
//! Polygon mesh representation shared by every engine component: vertex
//! positions, unique undirected edges and CCW polygon faces.

use crate::error::{EngineError, EngineResult};
use glam::{DMat3, DVec3};
use std::collections::HashSet;

/// A polygon mesh with vertices, edges and faces.
///
/// All geometry calculations use f64. Edges are stored as `[min, max]`
/// index pairs; faces are index loops wound counter-clockwise when seen from
/// outside the solid.
///
/// # Example
///
/// ```rust
/// use quadray_engine::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_edge(a, b);
/// mesh.add_edge(b, c);
/// mesh.add_edge(c, a);
/// mesh.add_face(vec![a, b, c]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    edges: Vec<[u32; 2]>,
    faces: Vec<Vec<u32>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, edge_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(edge_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Assembles a mesh from already-derived parts.
    ///
    /// Edges are normalized to `[min, max]` order. No validation is done
    /// here; call [`Mesh::validate`] when the parts come from outside.
    pub fn from_parts(vertices: Vec<DVec3>, edges: Vec<[u32; 2]>, faces: Vec<Vec<u32>>) -> Self {
        let edges = edges
            .into_iter()
            .map(|[a, b]| if a <= b { [a, b] } else { [b, a] })
            .collect();
        Self {
            vertices,
            edges,
            faces,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds an undirected edge. The caller is responsible for uniqueness.
    pub fn add_edge(&mut self, a: u32, b: u32) {
        self.edges.push(if a <= b { [a, b] } else { [b, a] });
    }

    /// Adds a polygon face.
    pub fn add_face(&mut self, face: Vec<u32>) {
        self.faces.push(face);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Number of faces with exactly `sides` vertices.
    pub fn faces_with_sides(&self, sides: usize) -> usize {
        self.faces.iter().filter(|f| f.len() == sides).count()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Largest absolute coordinate over all vertices (0 for an empty mesh).
    pub fn half_extent(&self) -> f64 {
        let (min, max) = self.bounding_box();
        min.abs().max(max.abs()).max_element()
    }

    /// Mean of all vertex positions (origin for an empty mesh).
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().copied().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Mean of the vertex positions of one face.
    pub fn face_centroid(&self, face: usize) -> DVec3 {
        let indices = &self.faces[face];
        indices.iter().map(|&i| self.vertex(i)).sum::<DVec3>() / indices.len() as f64
    }

    /// Unnormalized face normal `(v1 - v0) × (v2 - v0)`.
    pub fn face_normal(&self, face: usize) -> DVec3 {
        let f = &self.faces[face];
        let v0 = self.vertex(f[0]);
        let v1 = self.vertex(f[1]);
        let v2 = self.vertex(f[2]);
        (v1 - v0).cross(v2 - v0)
    }

    /// Quadrance (squared length) of every edge, in edge order.
    pub fn edge_quadrances(&self) -> Vec<f64> {
        self.edges
            .iter()
            .map(|&[a, b]| self.vertex(a).distance_squared(self.vertex(b)))
            .collect()
    }

    /// Fan-triangulates every face.
    ///
    /// Faces produced by the engine are convex, so a fan from the first
    /// vertex keeps the original winding.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.triangulated_len());
        for face in &self.faces {
            for i in 1..face.len().saturating_sub(1) {
                triangles.push([face[0], face[i], face[i + 1]]);
            }
        }
        triangles
    }

    /// Number of triangles [`Mesh::triangulate`] produces.
    pub fn triangulated_len(&self) -> usize {
        self.faces.iter().map(|f| f.len().saturating_sub(2)).sum()
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Applies a linear transform to every vertex.
    pub fn transform(&mut self, matrix: &DMat3) {
        for v in &mut self.vertices {
            *v = *matrix * *v;
        }
    }

    /// Merges another mesh into this one, offsetting its indices.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.edges
            .extend(other.edges.iter().map(|&[a, b]| [a + offset, b + offset]));
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|f| f.iter().map(|&i| i + offset).collect::<Vec<_>>()),
        );
    }

    /// Checks the structural invariants.
    ///
    /// - every index is below the vertex count
    /// - edges are unique and not self-loops
    /// - faces have at least three vertices
    pub fn validate(&self) -> EngineResult<()> {
        let count = self.vertices.len() as u32;
        let mut seen = HashSet::with_capacity(self.edges.len());

        for (i, &[a, b]) in self.edges.iter().enumerate() {
            if a >= count || b >= count {
                return Err(EngineError::invariant(format!(
                    "edge {i} references vertex out of range ({a}, {b}) with {count} vertices"
                )));
            }
            if a == b {
                return Err(EngineError::invariant(format!("edge {i} is a self-loop on {a}")));
            }
            let key = if a < b { [a, b] } else { [b, a] };
            if !seen.insert(key) {
                return Err(EngineError::invariant(format!("duplicate edge ({a}, {b})")));
            }
        }

        for (i, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(EngineError::invariant(format!(
                    "face {i} has {} vertices",
                    face.len()
                )));
            }
            if let Some(&bad) = face.iter().find(|&&v| v >= count) {
                return Err(EngineError::invariant(format!(
                    "face {i} references vertex {bad} with {count} vertices"
                )));
            }
        }

        Ok(())
    }
}
