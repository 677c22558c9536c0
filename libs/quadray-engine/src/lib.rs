//! # Quadray Engine
//!
//! Geometry engine for polyhedra and lattices expressed in Quadray (WXYZ)
//! coordinates, following Rational Trigonometry conventions: quadrance and
//! spread stand in for distance and angle, and square roots wait until the
//! last numeric step.
//!
//! ## Architecture
//!
//! ```text
//! coordinates ──► polyhedra ──► matrix
//!      │              │
//!      └──► rt ──► lattice      analysis
//! ```
//!
//! - [`coordinates`]: basis vectors, WXYZ ↔ Cartesian, zero-sum normalization
//! - [`rt`]: quadrance, spread, rational circle and RT n-gon corners
//! - [`polyhedra`]: named solids whose topology is derived from coordinate
//!   patterns, plus Class I geodesics of the triangle-faced ones
//! - [`lattice`]: barycentric subdivision and grid families
//! - [`matrix`]: N×N instanced layouts batched into flat buffers
//! - [`analysis`]: intersections, 2D hulls, spread rotation, cross-sections
//! - [`engine`]: configuration plus once-initialized state
//!
//! ## Example
//!
//! ```rust
//! use quadray_engine::{build_polyhedron, BuildOptions, PolyhedronKind};
//!
//! let tetra = build_polyhedron(PolyhedronKind::Tetrahedron, 1.0, &BuildOptions::default())
//!     .unwrap();
//! assert_eq!(tetra.mesh.vertex_count(), 4);
//! assert!(tetra.metadata.euler_ok);
//! ```

pub mod analysis;
pub mod coordinates;
pub mod engine;
pub mod error;
pub mod lattice;
pub mod matrix;
pub mod mesh;
pub mod polyhedra;
pub mod rt;

pub use analysis::{
    convex_hull_2d, line_plane_intersection, sphere_plane_circle_intersection, spread_rotation,
    CircleSection, Plane,
};
pub use coordinates::{basis_vectors, Quadray};
pub use engine::{EngineConfig, GeometryEngine};
pub use error::{EngineError, EngineResult};
pub use lattice::{build_grid, subdivide_polygon, BasePolygon, CumulativeDistance, GridMode};
pub use matrix::{
    build_layout, create_matrix, validate_spacing, BatchedMesh, CellLayout, CellPlacement,
    LayoutRule, SpacingReport, SymmetryFlags,
};
pub use mesh::Mesh;
pub use polyhedra::{
    build_fitted, build_polyhedron, geodesic, regenerate, BuildOptions, GenerationParams,
    Geodesic, Polyhedron, PolyhedronMetadata, PolyhedronKind, ProjectionMode,
};
