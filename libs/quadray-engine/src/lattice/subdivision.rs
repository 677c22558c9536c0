//! # Barycentric Subdivision
//!
//! Splits a base polygon lying in the XY plane into `n = 2^(g-1)` divisions
//! per edge.
//!
//! ```text
//!        C                 weights (i, j, k), i + j + k = n
//!       / \
//!      /___\               P = (i·A + j·B + k·C) / n
//!     / \  /\
//!    /___\/__\
//!   A         B
//! ```
//!
//! Vertices shared by neighbouring tiles are merged on a fixed-precision key.
//! Every face is wound counter-clockwise seen from +Z.

use super::BasePolygon;
use crate::error::{check_scale, EngineError, EngineResult};
use crate::mesh::Mesh;
use crate::rt::ngon_vertices;
use config::constants::{DEDUP_DECIMALS, MAX_GENERATIONS, MAX_PENTAGON_GENERATIONS};
use glam::{DVec2, DVec3};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Subdivides a base polygon of circumradius `scale`.
///
/// # Arguments
///
/// * `base` - Polygon to subdivide
/// * `generations` - `g ≤ 0` yields an empty mesh; `g` gives `2^(g-1)`
///   divisions per edge
/// * `scale` - Circumradius of the base polygon
///
/// # Errors
///
/// `InvalidParameter` when `generations` exceeds `MAX_GENERATIONS` or the
/// scale is not finite and positive. Pentagon arrays deeper than three
/// generations are clamped with a warning.
///
/// # Example
///
/// ```rust
/// use quadray_engine::lattice::{subdivide_polygon, BasePolygon};
///
/// let mesh = subdivide_polygon(BasePolygon::Triangle, 3, 1.0).unwrap();
/// assert_eq!(mesh.face_count(), 16);
/// assert_eq!(mesh.vertex_count(), 15);
/// ```
pub fn subdivide_polygon(base: BasePolygon, generations: i32, scale: f64) -> EngineResult<Mesh> {
    if generations <= 0 {
        return Ok(Mesh::new());
    }
    if generations > MAX_GENERATIONS {
        return Err(EngineError::invalid_parameter(format!(
            "generations {generations} exceeds maximum {MAX_GENERATIONS}"
        )));
    }
    check_scale(scale)?;

    let mut builder = TileBuilder::default();
    match base {
        BasePolygon::Triangle => {
            let n = divisions(generations);
            let [a, b, c] = corners::<3>(scale);
            subdivide_triangle(&mut builder, a, b, c, n);
        }
        BasePolygon::Square => {
            let n = divisions(generations);
            subdivide_square(&mut builder, corners::<4>(scale), n);
        }
        BasePolygon::Hexagon => {
            let n = divisions(generations);
            let hex = corners::<6>(scale);
            for k in 0..6 {
                subdivide_triangle(&mut builder, DVec3::ZERO, hex[k], hex[(k + 1) % 6], n);
            }
        }
        BasePolygon::PentagonArray => {
            let depth = if generations > MAX_PENTAGON_GENERATIONS {
                warn!(
                    requested = generations,
                    max = MAX_PENTAGON_GENERATIONS,
                    "pentagon array clamped"
                );
                MAX_PENTAGON_GENERATIONS
            } else {
                generations
            };
            pentaflake(&mut builder, scale, depth);
        }
    }

    let mesh = builder.finish();
    debug!(
        ?base,
        generations,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "polygon subdivided"
    );
    Ok(mesh)
}

fn divisions(generations: i32) -> u32 {
    1u32 << (generations - 1)
}

/// RT n-gon corners lifted to `z = 0`.
fn corners<const N: usize>(radius: f64) -> [DVec3; N] {
    let mut out = [DVec3::ZERO; N];
    for (slot, v) in out.iter_mut().zip(ngon_vertices(N as u32, radius)) {
        *slot = v.extend(0.0);
    }
    out
}

fn subdivide_triangle(builder: &mut TileBuilder, a: DVec3, b: DVec3, c: DVec3, n: u32) {
    let nf = n as f64;
    let point = |i: u32, j: u32| {
        let k = n - i - j;
        (a * k as f64 + b * i as f64 + c * j as f64) / nf
    };

    for i in 0..n {
        for j in 0..(n - i) {
            builder.add_tile(&[point(i, j), point(i + 1, j), point(i, j + 1)]);
            if i + j + 2 <= n {
                builder.add_tile(&[point(i + 1, j), point(i + 1, j + 1), point(i, j + 1)]);
            }
        }
    }
}

fn subdivide_square(builder: &mut TileBuilder, c: [DVec3; 4], n: u32) {
    let nf = n as f64;
    let point = |i: u32, j: u32| {
        let u = i as f64 / nf;
        let v = j as f64 / nf;
        c[0] * ((1.0 - u) * (1.0 - v)) + c[1] * (u * (1.0 - v)) + c[2] * (u * v) + c[3] * ((1.0 - u) * v)
    };

    for i in 0..n {
        for j in 0..n {
            builder.add_tile(&[
                point(i, j),
                point(i + 1, j),
                point(i + 1, j + 1),
                point(i, j + 1),
            ]);
        }
    }
}

/// Pentagon position and orientation; `flipped` pentagons are the base
/// pentagon turned half a revolution.
#[derive(Debug, Clone, Copy)]
struct Pentagon {
    centre: DVec2,
    radius: f64,
    flipped: bool,
}

/// Pentaflake deflation: each pentagon yields an inverted central child and
/// five outer children at ratio `1/φ²`.
fn pentaflake(builder: &mut TileBuilder, scale: f64, depth: i32) {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let unit = ngon_vertices(5, 1.0);

    let mut level = vec![Pentagon {
        centre: DVec2::ZERO,
        radius: scale,
        flipped: false,
    }];

    for _ in 1..depth {
        let mut next = Vec::with_capacity(level.len() * 6);
        for p in &level {
            let child_radius = p.radius / (phi * phi);
            let offset = p.radius / phi;
            let sign = if p.flipped { -1.0 } else { 1.0 };
            next.push(Pentagon {
                centre: p.centre,
                radius: child_radius,
                flipped: !p.flipped,
            });
            for dir in &unit {
                next.push(Pentagon {
                    centre: p.centre + *dir * (sign * offset),
                    radius: child_radius,
                    flipped: p.flipped,
                });
            }
        }
        level = next;
    }

    for p in &level {
        let sign = if p.flipped { -1.0 } else { 1.0 };
        let tile: Vec<DVec3> = unit
            .iter()
            .map(|dir| (p.centre + *dir * (sign * p.radius)).extend(0.0))
            .collect();
        builder.add_tile(&tile);
    }
}

/// Accumulates tiles, merging coincident vertices and shared edges.
#[derive(Default)]
struct TileBuilder {
    mesh: Mesh,
    index: HashMap<[i64; 3], u32>,
    edges: HashSet<[u32; 2]>,
}

impl TileBuilder {
    fn vertex(&mut self, position: DVec3) -> u32 {
        let factor = 10f64.powi(DEDUP_DECIMALS);
        let key = [
            (position.x * factor).round() as i64,
            (position.y * factor).round() as i64,
            (position.z * factor).round() as i64,
        ];
        if let Some(&existing) = self.index.get(&key) {
            return existing;
        }
        let index = self.mesh.add_vertex(position);
        self.index.insert(key, index);
        index
    }

    fn add_tile(&mut self, corners: &[DVec3]) {
        let face: Vec<u32> = corners.iter().map(|&p| self.vertex(p)).collect();
        for i in 0..face.len() {
            let a = face[i];
            let b = face[(i + 1) % face.len()];
            if self.edges.insert([a.min(b), a.max(b)]) {
                self.mesh.add_edge(a, b);
            }
        }
        self.mesh.add_face(face);
    }

    fn finish(self) -> Mesh {
        self.mesh
    }
}
