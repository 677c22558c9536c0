//! # Polyhedra
//!
//! Named solids built directly from Quadray coordinates.
//!
//! Each solid is a [`PolyhedronDescriptor`]: the source of its vertices
//! (WXYZ permutation patterns, or golden-rectangle points), the adjacency
//! predicate linking them, and the face rules that close the surface. A single
//! generic builder turns any descriptor into a [`Mesh`]. Triangle-faced solids
//! can be refined further into Class I geodesics (see [`geodesic()`]).
//!
//! Count mismatches against the descriptor are non-fatal: they are logged
//! and recorded in [`PolyhedronMetadata::warnings`].

mod descriptor;
mod geodesic;
mod topology;


pub use descriptor::{
    descriptor, distinct_permutations, seed_vertices, Adjacency, FaceRule,
    PolyhedronDescriptor, VertexSource,
};
pub use geodesic::{geodesic, Geodesic, ProjectionMode};
pub use topology::{orient_outward, AdjacencyGraph};

use crate::coordinates::Quadray;
use crate::error::{check_scale, EngineError, EngineResult};
use crate::mesh::Mesh;
use crate::rt::verify_euler;
use config::constants::{EPSILON, QUADRANCE_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Solids the builder knows how to derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolyhedronKind {
    Tetrahedron,
    DualTetrahedron,
    Octahedron,
    Cube,
    Cuboctahedron,
    TruncatedTetrahedron,
    RhombicDodecahedron,
    Icosahedron,
    Dodecahedron,
}

impl PolyhedronKind {
    pub const ALL: [PolyhedronKind; 9] = [
        PolyhedronKind::Tetrahedron,
        PolyhedronKind::DualTetrahedron,
        PolyhedronKind::Octahedron,
        PolyhedronKind::Cube,
        PolyhedronKind::Cuboctahedron,
        PolyhedronKind::TruncatedTetrahedron,
        PolyhedronKind::RhombicDodecahedron,
        PolyhedronKind::Icosahedron,
        PolyhedronKind::Dodecahedron,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        descriptor(self).name
    }
}

impl fmt::Display for PolyhedronKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolyhedronKind {
    type Err = EngineError;

    /// Accepts names case-insensitively, ignoring spaces, dashes and
    /// underscores (`"truncated-tetrahedron"`, `"RhombicDodecahedron"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name()
                    .chars()
                    .filter(|c| *c != ' ')
                    .flat_map(char::to_lowercase)
                    .eq(key.chars())
            })
            .ok_or_else(|| EngineError::invalid_parameter(format!("unknown polyhedron '{s}'")))
    }
}

/// Options accepted by [`build_polyhedron`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    /// Report zero-sum coordinates as the primary set.
    pub normalize: bool,
    /// Replaces the pattern coordinates one-for-one. Topology still comes
    /// from the pattern, so the count must match.
    pub custom_coordinates: Option<Vec<Quadray>>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            custom_coordinates: None,
        }
    }
}

/// Everything needed to rebuild an identical solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub kind: PolyhedronKind,
    pub scale: f64,
    pub normalize: bool,
    #[serde(default)]
    pub custom_coordinates: Option<Vec<Quadray>>,
}

/// Descriptive data attached to a built solid.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyhedronMetadata {
    pub name: &'static str,
    pub schlafli: &'static str,
    pub kind: PolyhedronKind,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub face_count: usize,
    /// Shared edge quadrance when every edge has the same one.
    pub edge_quadrance: Option<f64>,
    pub face_spread: Option<f64>,
    pub euler_ok: bool,
    /// Non-fatal findings from construction.
    pub warnings: Vec<String>,
    pub params: GenerationParams,
}

/// A built solid with both coordinate representations.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    pub mesh: Mesh,
    /// Coordinates as authored.
    pub raw: Vec<Quadray>,
    /// Coordinates projected onto `w + x + y + z = 0`.
    pub normalized: Vec<Quadray>,
    pub metadata: PolyhedronMetadata,
}

impl Polyhedron {
    /// The coordinate set selected by the `normalize` option.
    pub fn coordinates(&self) -> &[Quadray] {
        if self.metadata.params.normalize {
            &self.normalized
        } else {
            &self.raw
        }
    }

    /// Builds the solid again from its recorded parameters.
    pub fn regenerate(&self) -> EngineResult<Polyhedron> {
        regenerate(&self.metadata.params)
    }
}

/// Builds a named solid.
///
/// # Arguments
///
/// * `kind` - Which solid
/// * `scale` - Multiplier applied during projection to Cartesian space
/// * `options` - Normalization flag and optional replacement coordinates
///
/// # Errors
///
/// `InvalidParameter` for a non-positive or non-finite scale;
/// `InvalidCoordinate` for custom coordinates with a non-finite component or
/// the wrong vertex count.
///
/// # Example
///
/// ```rust
/// use quadray_engine::{build_polyhedron, BuildOptions, PolyhedronKind};
///
/// let tt = build_polyhedron(
///     PolyhedronKind::TruncatedTetrahedron,
///     1.0,
///     &BuildOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(tt.mesh.vertex_count(), 12);
/// assert_eq!(tt.mesh.edge_count(), 18);
/// assert_eq!(tt.mesh.faces_with_sides(6), 4);
/// ```
pub fn build_polyhedron(
    kind: PolyhedronKind,
    scale: f64,
    options: &BuildOptions,
) -> EngineResult<Polyhedron> {
    check_scale(scale)?;
    let desc = descriptor(kind);
    let mut warnings = Vec::new();

    let pattern = seed_vertices(desc);
    if pattern.len() != desc.expected_vertices {
        record(
            &mut warnings,
            format!(
                "{}: generated {} vertices, expected {}",
                desc.name,
                pattern.len(),
                desc.expected_vertices
            ),
        );
    }

    let raw = match &options.custom_coordinates {
        Some(custom) => {
            check_custom(custom, pattern.len())?;
            custom.clone()
        }
        None => pattern.clone(),
    };
    let normalized: Vec<Quadray> = raw.iter().map(|q| q.normalize()).collect();

    let graph = AdjacencyGraph::build(&pattern, desc.adjacency);
    let edges = graph.edges();

    let mut faces = Vec::with_capacity(desc.expected_faces);
    for rule in desc.face_rules {
        match rule {
            FaceRule::Triangles => faces.extend(graph.triangles()),
            FaceRule::Squares => faces.extend(graph.squares()),
            FaceRule::Pentagons => faces.extend(graph.pentagons()),
            FaceRule::TracedHexagons => {
                let mut found = Vec::new();
                faces.extend(graph.traced_hexagons(&pattern, &mut found));
                for message in found {
                    record(&mut warnings, format!("{}: {message}", desc.name));
                }
            }
        }
    }

    let source = if options.normalize { &normalized } else { &raw };
    let positions: Vec<_> = source.iter().map(|q| q.to_cartesian(scale)).collect();

    let mut reversed = 0;
    for face in &mut faces {
        if orient_outward(&positions, face) {
            reversed += 1;
        }
    }

    if edges.len() != desc.expected_edges {
        record(
            &mut warnings,
            format!(
                "{}: derived {} edges, expected {}",
                desc.name,
                edges.len(),
                desc.expected_edges
            ),
        );
    }
    if faces.len() != desc.expected_faces {
        record(
            &mut warnings,
            format!(
                "{}: derived {} faces, expected {}",
                desc.name,
                faces.len(),
                desc.expected_faces
            ),
        );
    }

    let mesh = Mesh::from_parts(positions, edges, faces);
    let edge_quadrance = uniform_edge_quadrance(&mesh);
    let euler_ok = verify_euler(mesh.vertex_count(), mesh.edge_count(), mesh.face_count());

    debug!(
        solid = desc.name,
        vertices = mesh.vertex_count(),
        edges = mesh.edge_count(),
        faces = mesh.face_count(),
        reversed,
        "polyhedron built"
    );

    let metadata = PolyhedronMetadata {
        name: desc.name,
        schlafli: desc.schlafli,
        kind,
        vertex_count: mesh.vertex_count(),
        edge_count: mesh.edge_count(),
        face_count: mesh.face_count(),
        edge_quadrance,
        face_spread: desc.face_spread,
        euler_ok,
        warnings,
        params: GenerationParams {
            kind,
            scale,
            normalize: options.normalize,
            custom_coordinates: options.custom_coordinates.clone(),
        },
    };

    Ok(Polyhedron {
        mesh,
        raw,
        normalized,
        metadata,
    })
}

/// Builds a solid sized so its largest absolute coordinate is `half_size`.
///
/// The unit-scale extent differs per solid (1 for the cube and tetrahedra,
/// 2 for the octahedron, 3 for the truncated tetrahedron, φ for the golden
/// solids), so cells spaced `2·half_size` apart touch without overlapping.
///
/// # Errors
///
/// As [`build_polyhedron`], with `half_size` checked like a scale.
///
/// # Example
///
/// ```rust
/// use quadray_engine::polyhedra::build_fitted;
/// use quadray_engine::{BuildOptions, PolyhedronKind};
///
/// let oct = build_fitted(PolyhedronKind::Octahedron, 1.0, &BuildOptions::default()).unwrap();
/// assert!((oct.metadata.params.scale - 0.5).abs() < 1e-12);
/// assert!((oct.mesh.half_extent() - 1.0).abs() < 1e-12);
/// ```
pub fn build_fitted(
    kind: PolyhedronKind,
    half_size: f64,
    options: &BuildOptions,
) -> EngineResult<Polyhedron> {
    check_scale(half_size)?;
    let unit = build_polyhedron(kind, 1.0, options)?;
    let extent = unit.mesh.half_extent();
    if !extent.is_finite() || extent < EPSILON {
        return Err(EngineError::invariant(format!(
            "{kind} has degenerate extent {extent}"
        )));
    }
    build_polyhedron(kind, half_size / extent, options)
}

/// Rebuilds a solid from recorded parameters.
pub fn regenerate(params: &GenerationParams) -> EngineResult<Polyhedron> {
    build_polyhedron(
        params.kind,
        params.scale,
        &BuildOptions {
            normalize: params.normalize,
            custom_coordinates: params.custom_coordinates.clone(),
        },
    )
}

fn record(warnings: &mut Vec<String>, message: String) {
    warn!("{message}");
    warnings.push(message);
}

fn check_custom(custom: &[Quadray], expected: usize) -> EngineResult<()> {
    if custom.len() != expected {
        return Err(EngineError::invalid_coordinate(
            custom.len().min(expected),
            format!("expected {expected} coordinates, got {}", custom.len()),
        ));
    }
    if let Some(index) = custom.iter().position(|q| !q.is_finite()) {
        return Err(EngineError::invalid_coordinate(
            index,
            format!("non-finite component in {}", custom[index]),
        ));
    }
    Ok(())
}

fn uniform_edge_quadrance(mesh: &Mesh) -> Option<f64> {
    let quadrances = mesh.edge_quadrances();
    let first = *quadrances.first()?;
    let tolerance = QUADRANCE_TOLERANCE * first.max(1.0);
    quadrances
        .iter()
        .all(|q| (q - first).abs() <= tolerance)
        .then_some(first)
}
