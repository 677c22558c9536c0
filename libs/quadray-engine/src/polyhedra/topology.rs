//! # Topology Derivation
//!
//! Recovers edges and faces of a solid from its vertex coordinates alone.
//!
//! ## Algorithm
//!
//! 1. Build the adjacency graph from the descriptor's pairwise predicate
//! 2. Close faces from the graph: mutually adjacent triples, squares spanned
//!    by two common neighbours, chordless pentagons, and traced hexagons
//! 3. Orient each face so its normal points away from the origin

use super::descriptor::Adjacency;
use crate::coordinates::Quadray;
use config::constants::{approx_equal, approx_zero, EPSILON, QUADRANCE_TOLERANCE};
use glam::DVec3;
use std::collections::HashSet;

/// Symmetric adjacency relation over vertex indices.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    len: usize,
    matrix: Vec<bool>,
    neighbours: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Evaluates the predicate over every unordered pair.
    pub fn build(coords: &[Quadray], adjacency: Adjacency) -> Self {
        let len = coords.len();
        let mut graph = Self {
            len,
            matrix: vec![false; len * len],
            neighbours: vec![Vec::new(); len],
        };

        let min_quadrance = match adjacency {
            Adjacency::MinQuadrance => min_nonzero_quadrance(coords),
            _ => None,
        };

        for i in 0..len {
            for j in (i + 1)..len {
                let linked = match adjacency {
                    Adjacency::UnitStep => unit_step(coords[i], coords[j]),
                    Adjacency::SharedPair => shared_pair(coords[i], coords[j]),
                    Adjacency::MinQuadrance => min_quadrance.is_some_and(|min| {
                        let q = coords[i].quadrance(coords[j]);
                        (q - min).abs() <= QUADRANCE_TOLERANCE * min.max(1.0)
                    }),
                };
                if linked {
                    graph.link(i, j);
                }
            }
        }
        graph
    }

    fn link(&mut self, a: usize, b: usize) {
        self.matrix[a * self.len + b] = true;
        self.matrix[b * self.len + a] = true;
        self.neighbours[a].push(b);
        self.neighbours[b].push(a);
    }

    #[inline]
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        self.matrix[a * self.len + b]
    }

    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.neighbours[v]
    }

    /// Edges as `[min, max]` pairs in ascending order.
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut edges = Vec::new();
        for i in 0..self.len {
            for j in (i + 1)..self.len {
                if self.adjacent(i, j) {
                    edges.push([i as u32, j as u32]);
                }
            }
        }
        edges
    }

    /// Mutually adjacent triples, each reported once.
    pub fn triangles(&self) -> Vec<Vec<u32>> {
        let mut faces = Vec::new();
        for a in 0..self.len {
            for b in (a + 1)..self.len {
                if !self.adjacent(a, b) {
                    continue;
                }
                for c in (b + 1)..self.len {
                    if self.adjacent(a, c) && self.adjacent(b, c) {
                        faces.push(vec![a as u32, b as u32, c as u32]);
                    }
                }
            }
        }
        faces
    }

    /// Quadrilaterals `a, n1, b, n2` where `a` and `b` are not adjacent and
    /// share exactly two common neighbours that are not adjacent either.
    pub fn squares(&self) -> Vec<Vec<u32>> {
        let mut seen = HashSet::new();
        let mut faces = Vec::new();
        for a in 0..self.len {
            for b in (a + 1)..self.len {
                if self.adjacent(a, b) {
                    continue;
                }
                let common: Vec<usize> = self.neighbours(a)
                    .iter()
                    .copied()
                    .filter(|&n| self.adjacent(n, b))
                    .collect();
                let &[n1, n2] = common.as_slice() else {
                    continue;
                };
                if self.adjacent(n1, n2) {
                    continue;
                }
                let mut key = [a, b, n1, n2];
                key.sort_unstable();
                if seen.insert(key) {
                    faces.push(vec![a as u32, n1 as u32, b as u32, n2 as u32]);
                }
            }
        }
        faces
    }

    /// Chordless 5-cycles, each reported once starting from its smallest
    /// vertex.
    pub fn pentagons(&self) -> Vec<Vec<u32>> {
        let mut seen = HashSet::new();
        let mut faces = Vec::new();
        for a in 0..self.len {
            for &b in self.neighbours(a).iter().filter(|&&b| b > a) {
                for &c in self.neighbours(b) {
                    if c <= a || self.adjacent(a, c) {
                        continue;
                    }
                    for &d in self.neighbours(c) {
                        if d <= a || d == b || self.adjacent(a, d) || self.adjacent(b, d) {
                            continue;
                        }
                        for &e in self.neighbours(d) {
                            if e <= a
                                || e == c
                                || !self.adjacent(e, a)
                                || self.adjacent(b, e)
                                || self.adjacent(c, e)
                            {
                                continue;
                            }
                            let mut key = [a, b, c, d, e];
                            key.sort_unstable();
                            if seen.insert(key) {
                                faces.push([a, b, c, d, e].map(|v| v as u32).to_vec());
                            }
                        }
                    }
                }
            }
        }
        faces
    }

    /// Hexagons of a truncated tetrahedron: for each slot `k`, the six
    /// vertices holding 0 there, visited in a fixed cyclic order over the
    /// remaining three slots.
    ///
    /// Each traced edge is checked against the graph; broken cycles are
    /// still returned and described in `warnings`.
    pub fn traced_hexagons(&self, coords: &[Quadray], warnings: &mut Vec<String>) -> Vec<Vec<u32>> {
        const CYCLE: [[f64; 3]; 6] = [
            [2.0, 1.0, 0.0],
            [1.0, 2.0, 0.0],
            [0.0, 2.0, 1.0],
            [0.0, 1.0, 2.0],
            [1.0, 0.0, 2.0],
            [2.0, 0.0, 1.0],
        ];

        let mut faces = Vec::with_capacity(4);
        for slot in 0..4 {
            let others: Vec<usize> = (0..4).filter(|&s| s != slot).collect();
            let mut face = Vec::with_capacity(6);
            for values in CYCLE {
                let mut target = [0.0; 4];
                for (&s, v) in others.iter().zip(values) {
                    target[s] = v;
                }
                match find_vertex(coords, target) {
                    Some(index) => face.push(index),
                    None => {
                        warnings.push(format!(
                            "hexagon {slot}: no vertex at {:?}",
                            target
                        ));
                    }
                }
            }
            if face.len() < 3 {
                continue;
            }
            for i in 0..face.len() {
                let a = face[i];
                let b = face[(i + 1) % face.len()];
                if !self.adjacent(a, b) {
                    warnings.push(format!(
                        "hexagon {slot}: traced edge ({a}, {b}) is not in the adjacency graph"
                    ));
                }
            }
            faces.push(face.into_iter().map(|i| i as u32).collect());
        }
        faces
    }
}

/// Differ in exactly two components, each by one.
fn unit_step(a: Quadray, b: Quadray) -> bool {
    let mut differing = 0;
    for (p, q) in a.to_array().into_iter().zip(b.to_array()) {
        let d = (p - q).abs();
        if approx_zero(d) {
            continue;
        }
        if !approx_equal(d, 1.0) {
            return false;
        }
        differing += 1;
    }
    differing == 2
}

/// Exactly two matching components, the mismatched pair not a {2,0} swap.
fn shared_pair(a: Quadray, b: Quadray) -> bool {
    let pa = a.to_array();
    let pb = b.to_array();
    let mismatched: Vec<usize> = (0..4).filter(|&i| !approx_equal(pa[i], pb[i])).collect();
    let &[i, j] = mismatched.as_slice() else {
        return false;
    };
    let is_two_zero = |x: f64, y: f64| {
        (approx_equal(x, 2.0) && approx_zero(y)) || (approx_zero(x) && approx_equal(y, 2.0))
    };
    !(is_two_zero(pa[i], pa[j]) && is_two_zero(pb[i], pb[j]))
}

fn min_nonzero_quadrance(coords: &[Quadray]) -> Option<f64> {
    let mut min: Option<f64> = None;
    for i in 0..coords.len() {
        for j in (i + 1)..coords.len() {
            let q = coords[i].quadrance(coords[j]);
            if q > EPSILON && min.map_or(true, |m| q < m) {
                min = Some(q);
            }
        }
    }
    min
}

fn find_vertex(coords: &[Quadray], target: [f64; 4]) -> Option<usize> {
    coords.iter().position(|c| {
        c.to_array()
            .iter()
            .zip(target)
            .all(|(&a, b)| approx_equal(a, b))
    })
}

/// Reverses `face` when its normal points toward the origin.
///
/// Assumes the solid is star-shaped about the origin.
pub fn orient_outward(positions: &[DVec3], face: &mut [u32]) -> bool {
    if face.len() < 3 {
        return false;
    }
    let v0 = positions[face[0] as usize];
    let v1 = positions[face[1] as usize];
    let v2 = positions[face[2] as usize];
    let normal = (v1 - v0).cross(v2 - v0);
    let centroid =
        face.iter().map(|&i| positions[i as usize]).sum::<DVec3>() / face.len() as f64;
    if normal.dot(centroid) < 0.0 {
        face.reverse();
        true
    } else {
        false
    }
}
