//! # Polyhedron Descriptors
//!
//! Declarative description of each named solid: where its vertices come
//! from, which predicate links them, and which face rules close the surface.
//! Topology is never authored by hand.
//!
//! Most solids are WXYZ permutation patterns. The icosahedron and
//! dodecahedron live on golden rectangles, so their seeds are Cartesian
//! points carried into WXYZ by `Quadray::from_cartesian`.

use super::PolyhedronKind;
use crate::coordinates::Quadray;
use config::constants::{GOLDEN_RATIO, TETRAHEDRAL_SPREAD};
use glam::DVec3;

/// Where a descriptor's vertices come from.
#[derive(Debug, Clone, Copy)]
pub enum VertexSource {
    /// Distinct permutations of each WXYZ multiset, patterns in order.
    Permutations(&'static [[u8; 4]]),
    /// Cartesian seed points.
    Cartesian(fn() -> Vec<DVec3>),
}

/// Pairwise predicate deciding which vertices share an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// Coordinates differ in exactly two components, each by one.
    UnitStep,
    /// Exactly two components match and the other two are not a swap of a
    /// 2-valued slot with a 0-valued slot.
    SharedPair,
    /// Cartesian quadrance equals the smallest non-zero pairwise quadrance.
    MinQuadrance,
}

/// Rule used to recover faces from the adjacency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceRule {
    /// Mutually adjacent triples.
    Triangles,
    /// Non-adjacent pairs closed by exactly two non-adjacent common
    /// neighbours.
    Squares,
    /// One fixed 6-cycle per slot holding a zero.
    TracedHexagons,
    /// Chordless 5-cycles of the adjacency graph.
    Pentagons,
}

/// Everything needed to build one named solid.
#[derive(Debug, Clone, Copy)]
pub struct PolyhedronDescriptor {
    pub name: &'static str,
    pub schlafli: &'static str,
    pub vertices: VertexSource,
    pub adjacency: Adjacency,
    pub face_rules: &'static [FaceRule],
    pub expected_vertices: usize,
    pub expected_edges: usize,
    pub expected_faces: usize,
    /// Spread between adjacent faces, when every dihedral is equal.
    pub face_spread: Option<f64>,
}

const TETRAHEDRON: PolyhedronDescriptor = PolyhedronDescriptor {
    name: "Tetrahedron",
    schlafli: "{3,3}",
    vertices: VertexSource::Permutations(&[[1, 0, 0, 0]]),
    adjacency: Adjacency::UnitStep,
    face_rules: &[FaceRule::Triangles],
    expected_vertices: 4,
    expected_edges: 6,
    expected_faces: 4,
    face_spread: Some(TETRAHEDRAL_SPREAD),
};

const DUAL_TETRAHEDRON: PolyhedronDescriptor = PolyhedronDescriptor {
    name: "Dual Tetrahedron",
    schlafli: "{3,3}",
    vertices: VertexSource::Permutations(&[[1, 1, 1, 0]]),
    adjacency: Adjacency::UnitStep,
    face_rules: &[FaceRule::Triangles],
    expected_vertices: 4,
    expected_edges: 6,
    expected_faces: 4,
    face_spread: Some(TETRAHEDRAL_SPREAD),
};

const OCTAHEDRON: PolyhedronDescriptor = PolyhedronDescriptor {
    name: "Octahedron",
    schlafli: "{3,4}",
    vertices: VertexSource::Permutations(&[[1, 1, 0, 0]]),
    adjacency: Adjacency::UnitStep,
    face_rules: &[FaceRule::Triangles],
    expected_vertices: 6,
    expected_edges: 12,
    expected_faces: 8,
    face_spread: Some(TETRAHEDRAL_SPREAD),
};

const CUBE: PolyhedronDescriptor = PolyhedronDescriptor {
    name: "Cube",
    schlafli: "{4,3}",
    vertices: VertexSource::Permutations(&[[1, 0, 0, 0], [1, 1, 1, 0]]),
    adjacency: Adjacency::MinQuadrance,
    face_rules: &[FaceRule::Squares],
    expected_vertices: 8,
    expected_edges: 12,
    expected_faces: 6,
    face_spread: Some(1.0),
};

const CUBOCTAHEDRON: PolyhedronDescriptor = PolyhedronDescriptor {
    name: "Cuboctahedron",
    schlafli: "r{4,3}",
    vertices: VertexSource::Permutations(&[[2, 1, 1, 0]]),
    adjacency: Adjacency::SharedPair,
    face_rules: &[FaceRule::Triangles, FaceRule::Squares],
    expected_vertices: 12,
    expected_edges: 24,
    expected_faces: 14,
    face_spread: None,
};

const TRUNCATED_TETRAHEDRON: PolyhedronDescriptor = PolyhedronDescriptor {
    name: "Truncated Tetrahedron",
    schlafli: "t{3,3}",
    vertices: VertexSource::Permutations(&[[2, 1, 0, 0]]),
    adjacency: Adjacency::UnitStep,
    face_rules: &[FaceRule::Triangles, FaceRule::TracedHexagons],
    expected_vertices: 12,
    expected_edges: 18,
    expected_faces: 8,
    face_spread: None,
};

const RHOMBIC_DODECAHEDRON: PolyhedronDescriptor = PolyhedronDescriptor {
    name: "Rhombic Dodecahedron",
    schlafli: "V3.4.3.4",
    vertices: VertexSource::Permutations(&[[1, 0, 0, 0], [1, 1, 1, 0], [1, 1, 0, 0]]),
    adjacency: Adjacency::MinQuadrance,
    face_rules: &[FaceRule::Squares],
    expected_vertices: 14,
    expected_edges: 24,
    expected_faces: 12,
    face_spread: Some(3.0 / 4.0),
};

const ICOSAHEDRON: PolyhedronDescriptor = PolyhedronDescriptor {
    name: "Icosahedron",
    schlafli: "{3,5}",
    vertices: VertexSource::Cartesian(icosahedron_points),
    adjacency: Adjacency::MinQuadrance,
    face_rules: &[FaceRule::Triangles],
    expected_vertices: 12,
    expected_edges: 30,
    expected_faces: 20,
    face_spread: Some(4.0 / 9.0),
};

const DODECAHEDRON: PolyhedronDescriptor = PolyhedronDescriptor {
    name: "Dodecahedron",
    schlafli: "{5,3}",
    vertices: VertexSource::Cartesian(dodecahedron_points),
    adjacency: Adjacency::MinQuadrance,
    face_rules: &[FaceRule::Pentagons],
    expected_vertices: 20,
    expected_edges: 30,
    expected_faces: 12,
    face_spread: Some(4.0 / 5.0),
};

/// Three orthogonal golden rectangles: `(0, ±1, ±φ)` and its cyclic
/// permutations.
fn icosahedron_points() -> Vec<DVec3> {
    let p = GOLDEN_RATIO;
    let mut points = Vec::with_capacity(12);
    for (a, b) in [(1.0, p), (-1.0, p), (1.0, -p), (-1.0, -p)] {
        points.push(DVec3::new(0.0, a, b));
    }
    for (a, b) in [(1.0, p), (-1.0, p), (1.0, -p), (-1.0, -p)] {
        points.push(DVec3::new(a, b, 0.0));
    }
    for (a, b) in [(p, 1.0), (-p, 1.0), (p, -1.0), (-p, -1.0)] {
        points.push(DVec3::new(a, 0.0, b));
    }
    points
}

/// Cube corners `(±1, ±1, ±1)` plus `(0, ±φ, ±1/φ)` and its cyclic
/// permutations.
fn dodecahedron_points() -> Vec<DVec3> {
    let p = GOLDEN_RATIO;
    let ip = GOLDEN_RATIO - 1.0;
    let mut points = Vec::with_capacity(20);
    for x in [1.0, -1.0] {
        for y in [1.0, -1.0] {
            for z in [1.0, -1.0] {
                points.push(DVec3::new(x, y, z));
            }
        }
    }
    for (a, b) in [(p, ip), (p, -ip), (-p, ip), (-p, -ip)] {
        points.push(DVec3::new(0.0, a, b));
    }
    for (a, b) in [(ip, p), (-ip, p), (ip, -p), (-ip, -p)] {
        points.push(DVec3::new(a, 0.0, b));
    }
    for (a, b) in [(p, ip), (p, -ip), (-p, ip), (-p, -ip)] {
        points.push(DVec3::new(a, b, 0.0));
    }
    points
}

/// Descriptor of a named solid.
pub fn descriptor(kind: PolyhedronKind) -> &'static PolyhedronDescriptor {
    match kind {
        PolyhedronKind::Tetrahedron => &TETRAHEDRON,
        PolyhedronKind::DualTetrahedron => &DUAL_TETRAHEDRON,
        PolyhedronKind::Octahedron => &OCTAHEDRON,
        PolyhedronKind::Cube => &CUBE,
        PolyhedronKind::Cuboctahedron => &CUBOCTAHEDRON,
        PolyhedronKind::TruncatedTetrahedron => &TRUNCATED_TETRAHEDRON,
        PolyhedronKind::RhombicDodecahedron => &RHOMBIC_DODECAHEDRON,
        PolyhedronKind::Icosahedron => &ICOSAHEDRON,
        PolyhedronKind::Dodecahedron => &DODECAHEDRON,
    }
}

/// All distinct permutations of a multiset, in lexicographically descending
/// order.
///
/// ```text
/// [2, 1, 0, 0] → 2100, 2010, 2001, 1200, 1020, ..., 0012   (12 tuples)
/// ```
pub fn distinct_permutations(pattern: [u8; 4]) -> Vec<[u8; 4]> {
    let mut current = pattern;
    current.sort_unstable_by(|a, b| b.cmp(a));

    let mut out = vec![current];
    while prev_permutation(&mut current) {
        out.push(current);
    }
    out
}

/// Steps to the previous permutation in lexicographic order; false once the
/// ascending arrangement has been reached.
fn prev_permutation(a: &mut [u8; 4]) -> bool {
    let Some(i) = (0..a.len() - 1).rev().find(|&i| a[i] > a[i + 1]) else {
        return false;
    };
    let Some(j) = (i + 1..a.len()).rev().find(|&j| a[j] < a[i]) else {
        return false;
    };
    a.swap(i, j);
    a[i + 1..].reverse();
    true
}

/// Seed vertices of a descriptor, in a fixed order.
pub fn seed_vertices(desc: &PolyhedronDescriptor) -> Vec<Quadray> {
    match desc.vertices {
        VertexSource::Permutations(patterns) => patterns
            .iter()
            .flat_map(|&p| distinct_permutations(p))
            .map(|p| Quadray::new(p[0] as f64, p[1] as f64, p[2] as f64, p[3] as f64))
            .collect(),
        VertexSource::Cartesian(points) => {
            points().into_iter().map(Quadray::from_cartesian).collect()
        }
    }
}
