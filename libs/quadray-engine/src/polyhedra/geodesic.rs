//! # Geodesic Subdivision
//!
//! Class I geodesics in WXYZ space. Every triangular face of a base solid is
//! split on a barycentric grid into `frequency²` triangles, then each vertex
//! is optionally pushed out (or in) to one of the base solid's three
//! characteristic radii.
//!
//! ```text
//!        v2             frequency 3
//!        /\
//!       /\/\            row 0 runs v0 → v1, column 0 runs v0 → v2
//!      /\/\/\
//!    v0──────v1
//! ```
//!
//! Points on a base edge are shared between its two faces; interior points
//! belong to one face. Termination rescales a vertex so its quadrance from
//! the centre hits the target, which costs one square root per vertex.

use super::{build_polyhedron, BuildOptions, PolyhedronKind};
use crate::coordinates::Quadray;
use crate::error::{check_scale, EngineError, EngineResult};
use crate::mesh::Mesh;
use config::constants::{EPSILON, MAX_GEODESIC_FREQUENCY};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Radius the subdivided vertices are terminated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// Flat subdivision, vertices stay on the base faces.
    Off,
    /// Distance to the face centres.
    InSphere,
    /// Distance to the edge midpoints.
    MidSphere,
    /// Distance to the vertices.
    #[default]
    OutSphere,
}

impl ProjectionMode {
    pub const ALL: [ProjectionMode; 4] = [
        ProjectionMode::Off,
        ProjectionMode::InSphere,
        ProjectionMode::MidSphere,
        ProjectionMode::OutSphere,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::InSphere => "InSphere",
            Self::MidSphere => "MidSphere",
            Self::OutSphere => "OutSphere",
        }
    }

    /// Quadrance from the centre for this mode, measured on one face of the
    /// unit-scale base. `None` for [`ProjectionMode::Off`].
    fn target_quadrance(self, coords: &[Quadray], face: [usize; 3]) -> Option<f64> {
        let [a, b, c] = face.map(|i| coords[i]);
        let point = match self {
            Self::Off => return None,
            Self::OutSphere => a,
            Self::MidSphere => (a + b) * 0.5,
            Self::InSphere => (a + b + c) * (1.0 / 3.0),
        };
        Some(point.quadrance(Quadray::ORIGIN))
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectionMode {
    type Err = EngineError;

    /// Case-insensitive, ignoring spaces, dashes and underscores
    /// (`"out-sphere"`, `"MIDSPHERE"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|mode| mode.label().to_lowercase() == key)
            .ok_or_else(|| EngineError::invalid_parameter(format!("unknown projection '{s}'")))
    }
}

/// A subdivided solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Geodesic {
    pub mesh: Mesh,
    /// Zero-sum coordinates at unit scale, one per mesh vertex.
    pub coordinates: Vec<Quadray>,
    pub base: PolyhedronKind,
    pub frequency: u32,
    pub mode: ProjectionMode,
    /// Quadrance from the centre shared by every vertex, at the built scale.
    pub target_quadrance: Option<f64>,
}

/// Class I geodesic of a triangle-faced solid.
///
/// `frequency` is the number of segments each base edge is cut into, so
/// frequency 1 keeps the base faces (still terminated at the chosen radius).
///
/// # Errors
///
/// `InvalidParameter` when `frequency` is 0 or above
/// `MAX_GEODESIC_FREQUENCY`, when the scale is invalid, or when the base has
/// a face that is not a triangle.
///
/// # Example
///
/// ```rust
/// use quadray_engine::polyhedra::{geodesic, ProjectionMode};
/// use quadray_engine::PolyhedronKind;
///
/// let dome = geodesic(PolyhedronKind::Icosahedron, 2, ProjectionMode::OutSphere, 1.0).unwrap();
/// assert_eq!(dome.mesh.vertex_count(), 42);
/// assert_eq!(dome.mesh.edge_count(), 120);
/// assert_eq!(dome.mesh.face_count(), 80);
/// ```
pub fn geodesic(
    kind: PolyhedronKind,
    frequency: u32,
    mode: ProjectionMode,
    scale: f64,
) -> EngineResult<Geodesic> {
    if frequency == 0 || frequency > MAX_GEODESIC_FREQUENCY {
        return Err(EngineError::invalid_parameter(format!(
            "geodesic frequency must be in 1..={MAX_GEODESIC_FREQUENCY}, got {frequency}"
        )));
    }
    check_scale(scale)?;

    let base = build_polyhedron(kind, 1.0, &BuildOptions::default())?;
    let mut triangles = Vec::with_capacity(base.mesh.face_count());
    for face in base.mesh.faces() {
        let &[a, b, c] = face.as_slice() else {
            return Err(EngineError::invalid_parameter(format!(
                "geodesic subdivision needs triangular faces, {kind} has a {}-gon",
                face.len()
            )));
        };
        triangles.push([a, b, c].map(|i| i as usize));
    }

    let target = triangles
        .first()
        .and_then(|&face| mode.target_quadrance(&base.normalized, face));

    let mut builder = Subdivider::new(base.normalized, frequency);
    for &face in &triangles {
        builder.face(face);
    }
    let Subdivider {
        mut coords, faces, ..
    } = builder;

    if let Some(target) = target {
        for q in &mut coords {
            let current = q.quadrance(Quadray::ORIGIN);
            if current > EPSILON {
                *q = q.scale((target / current).sqrt());
            }
        }
    }

    let edges: BTreeSet<[u32; 2]> = faces
        .iter()
        .flat_map(|f| (0..3).map(move |i| [f[i].min(f[(i + 1) % 3]), f[i].max(f[(i + 1) % 3])]))
        .collect();
    let positions = coords.iter().map(|q| q.to_cartesian(scale)).collect();
    let mesh = Mesh::from_parts(
        positions,
        edges.into_iter().collect(),
        faces.into_iter().map(|f| f.to_vec()).collect(),
    );

    debug!(
        base = %kind,
        frequency,
        mode = %mode,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "geodesic built"
    );

    Ok(Geodesic {
        mesh,
        coordinates: coords,
        base: kind,
        frequency,
        mode,
        target_quadrance: target.map(|q| q * scale * scale),
    })
}

/// Barycentric face splitter with shared edge points.
struct Subdivider {
    coords: Vec<Quadray>,
    faces: Vec<[u32; 3]>,
    /// `(low, high, steps from low)` → vertex index.
    edge_points: HashMap<(usize, usize, u32), u32>,
    frequency: u32,
}

impl Subdivider {
    fn new(coords: Vec<Quadray>, frequency: u32) -> Self {
        Self {
            coords,
            faces: Vec::new(),
            edge_points: HashMap::new(),
            frequency,
        }
    }

    fn push(&mut self, q: Quadray) -> u32 {
        self.coords.push(q);
        (self.coords.len() - 1) as u32
    }

    /// Point `step` segments along the base edge `from → to`.
    fn edge_point(&mut self, from: usize, to: usize, step: u32) -> u32 {
        let f = self.frequency;
        if step == 0 {
            return from as u32;
        }
        if step == f {
            return to as u32;
        }
        let key = if from < to {
            (from, to, step)
        } else {
            (to, from, f - step)
        };
        if let Some(&index) = self.edge_points.get(&key) {
            return index;
        }
        let (lo, hi, k) = key;
        let t = k as f64 / f as f64;
        let point = self.coords[lo] + (self.coords[hi] - self.coords[lo]) * t;
        let index = self.push(point);
        self.edge_points.insert(key, index);
        index
    }

    fn face(&mut self, [v0, v1, v2]: [usize; 3]) {
        let f = self.frequency;
        let n = f as f64;
        let (q0, q1, q2) = (self.coords[v0], self.coords[v1], self.coords[v2]);

        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(f as usize + 1);
        for row in 0..=f {
            let mut line = Vec::with_capacity((f - row) as usize + 1);
            for col in 0..=(f - row) {
                let index = if row == 0 {
                    self.edge_point(v0, v1, col)
                } else if col == 0 {
                    self.edge_point(v0, v2, row)
                } else if row + col == f {
                    self.edge_point(v1, v2, row)
                } else {
                    let w0 = (f - row - col) as f64 / n;
                    let point = q0 * w0 + q1 * (col as f64 / n) + q2 * (row as f64 / n);
                    self.push(point)
                };
                line.push(index);
            }
            grid.push(line);
        }

        // Both triangle orientations keep the winding of v0, v1, v2.
        for row in 0..f as usize {
            let width = f as usize - row;
            for col in 0..width {
                self.faces
                    .push([grid[row][col], grid[row][col + 1], grid[row + 1][col]]);
                if col + 1 < width {
                    self.faces.push([
                        grid[row][col + 1],
                        grid[row + 1][col + 1],
                        grid[row + 1][col],
                    ]);
                }
            }
        }
    }
}
