//! # Geometry Engine
//!
//! An engine instance owns its runtime configuration and the state it
//! initializes once (the Cartesian basis and its announcement in the log).
//! Every operation still delegates to the pure module functions, so two
//! engines built from the same configuration produce identical output.

use crate::analysis::{self, CircleSection, Plane};
use crate::coordinates::basis_vectors;
use crate::error::EngineResult;
use crate::lattice::{self, BasePolygon, CumulativeDistance, GravitySpacing, GridMode};
use crate::matrix::{self, BatchedMesh, CellPlacement, LayoutRule, SymmetryFlags};
use crate::mesh::Mesh;
use crate::polyhedra::{
    self, BuildOptions, GenerationParams, Geodesic, Polyhedron, PolyhedronKind, ProjectionMode,
};
use config::constants::{
    DEFAULT_CIRCLE_SEGMENTS, DEFAULT_POLAR_SEGMENTS, DEFAULT_SPACING_TOLERANCE,
    VERTEX_MERGE_EPSILON,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::info;

/// Runtime tunables for an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Quadrance tolerance used by matrix spacing validation.
    pub spacing_tolerance: f64,
    /// Duplicate threshold for 2D hull inputs.
    pub hull_epsilon: f64,
    /// Segments per ring on polar grids.
    pub polar_segments: u32,
    /// Points generated around sphere/plane circles.
    pub circle_segments: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spacing_tolerance: DEFAULT_SPACING_TOLERANCE,
            hull_epsilon: VERTEX_MERGE_EPSILON,
            polar_segments: DEFAULT_POLAR_SEGMENTS,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }
}

impl EngineConfig {
    /// Tight tolerances and dense rings.
    pub fn high_precision() -> Self {
        Self {
            spacing_tolerance: 1e-10,
            hull_epsilon: 1e-12,
            polar_segments: 128,
            circle_segments: 128,
        }
    }

    /// Loose tolerances and coarse rings for interactive previews.
    pub fn fast() -> Self {
        Self {
            spacing_tolerance: 1e-4,
            hull_epsilon: 1e-6,
            polar_segments: 32,
            circle_segments: 32,
        }
    }
}

/// Entry point bundling configuration with the geometry operations.
///
/// # Example
///
/// ```rust
/// use quadray_engine::{GeometryEngine, PolyhedronKind, BuildOptions};
///
/// let engine = GeometryEngine::default();
/// let cubo = engine
///     .build(PolyhedronKind::Cuboctahedron, 1.0, &BuildOptions::default())
///     .unwrap();
/// assert_eq!(cubo.mesh.edge_count(), 24);
/// ```
#[derive(Debug, Default)]
pub struct GeometryEngine {
    config: EngineConfig,
    basis: OnceLock<[DVec3; 4]>,
}

impl GeometryEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            basis: OnceLock::new(),
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cartesian basis of this engine, initialized and logged on first use.
    pub fn basis(&self) -> &[DVec3; 4] {
        self.basis.get_or_init(|| {
            let basis = basis_vectors();
            info!(
                w = ?basis[0],
                x = ?basis[1],
                y = ?basis[2],
                z = ?basis[3],
                "quadray basis initialized"
            );
            basis
        })
    }

    /// Whether the basis has been initialized on this instance.
    pub fn is_initialized(&self) -> bool {
        self.basis.get().is_some()
    }

    /// Builds a named polyhedron.
    pub fn build(
        &self,
        kind: PolyhedronKind,
        scale: f64,
        options: &BuildOptions,
    ) -> EngineResult<Polyhedron> {
        self.basis();
        polyhedra::build_polyhedron(kind, scale, options)
    }

    /// Builds a named polyhedron whose largest coordinate is `half_size`.
    pub fn build_fitted(
        &self,
        kind: PolyhedronKind,
        half_size: f64,
        options: &BuildOptions,
    ) -> EngineResult<Polyhedron> {
        self.basis();
        polyhedra::build_fitted(kind, half_size, options)
    }

    /// Class I geodesic of a triangle-faced solid.
    pub fn geodesic(
        &self,
        kind: PolyhedronKind,
        frequency: u32,
        mode: ProjectionMode,
        scale: f64,
    ) -> EngineResult<Geodesic> {
        self.basis();
        polyhedra::geodesic(kind, frequency, mode, scale)
    }

    /// Rebuilds a polyhedron from recorded parameters.
    pub fn regenerate(&self, params: &GenerationParams) -> EngineResult<Polyhedron> {
        self.basis();
        polyhedra::regenerate(params)
    }

    /// Barycentric subdivision of a base polygon.
    pub fn subdivide(
        &self,
        base: BasePolygon,
        generations: i32,
        scale: f64,
    ) -> EngineResult<Mesh> {
        lattice::subdivide_polygon(base, generations, scale)
    }

    /// Grid lines for the given mode, polar rings spaced by gravity.
    pub fn grid(&self, mode: GridMode, tessellations: i32, scale: f64) -> EngineResult<Mesh> {
        self.grid_with_spacing(mode, tessellations, scale, &GravitySpacing)
    }

    /// Gravity-spaced polar grid at the configured ring resolution.
    pub fn polar_grid(&self, tessellations: i32, scale: f64) -> EngineResult<Mesh> {
        let mode = GridMode::Polar {
            segments: self.config.polar_segments,
        };
        self.grid(mode, tessellations, scale)
    }

    /// Grid lines with an explicit cumulative-distance collaborator.
    pub fn grid_with_spacing(
        &self,
        mode: GridMode,
        tessellations: i32,
        scale: f64,
        spacing: &dyn CumulativeDistance,
    ) -> EngineResult<Mesh> {
        self.basis();
        lattice::build_grid(mode, tessellations, scale, spacing)
    }

    /// N×N instanced matrix of a base mesh.
    pub fn matrix(
        &self,
        n: usize,
        base: &Mesh,
        rule: LayoutRule,
        flags: SymmetryFlags,
    ) -> EngineResult<BatchedMesh> {
        matrix::create_matrix(n, base, rule, flags)
    }

    /// Spacing check using the configured tolerance.
    pub fn validate_spacing(
        &self,
        layout: &[CellPlacement],
        n: usize,
        spacing: f64,
    ) -> matrix::SpacingReport {
        matrix::validate_spacing(layout, n, spacing, self.config.spacing_tolerance)
    }

    /// Sphere/plane circle using the configured resolution.
    pub fn sphere_section(
        &self,
        center: DVec3,
        radius: f64,
        plane: &Plane,
    ) -> Option<CircleSection> {
        analysis::sphere_plane_circle_intersection(
            center,
            radius,
            plane,
            self.config.circle_segments,
        )
    }

    /// 2D hull using the configured duplicate threshold.
    pub fn hull(&self, points: &[DVec2]) -> Vec<DVec2> {
        analysis::convex_hull_2d_with_epsilon(points, self.config.hull_epsilon)
    }
}
