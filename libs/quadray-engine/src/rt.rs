//! # Rational Trigonometry
//!
//! Quadrance and spread replace distance and angle; square roots are deferred
//! to the final numeric step.
//!
//! Regular polygon corners come from Wildberger's reflection method: one
//! square root for the initial slope, then tangent addition and the rational
//! circle parameterization for every further vertex.

use glam::{DVec2, DVec3};

/// Quadrance between two points: the squared Euclidean distance.
#[inline]
pub fn quadrance(a: DVec3, b: DVec3) -> f64 {
    a.distance_squared(b)
}

/// Spread between two vectors: `1 − (v1·v2)² / (Q1·Q2)`.
///
/// 0 for parallel vectors, 1 for perpendicular ones, 0 when either vector is
/// zero.
///
/// ```rust
/// use quadray_engine::rt::spread;
/// use glam::DVec3;
///
/// assert_eq!(spread(DVec3::X, DVec3::Y), 1.0);
/// assert_eq!(spread(DVec3::X, DVec3::X * -2.0), 0.0);
/// ```
pub fn spread(v1: DVec3, v2: DVec3) -> f64 {
    let q1 = v1.length_squared();
    let q2 = v2.length_squared();
    if q1 == 0.0 || q2 == 0.0 {
        return 0.0;
    }
    let dot = v1.dot(v2);
    1.0 - (dot * dot) / (q1 * q2)
}

/// Rational parameterization of the unit circle:
/// `((1 − t²)/(1 + t²), 2t/(1 + t²))`.
pub fn circle_param(t: f64) -> DVec2 {
    let t2 = t * t;
    let d = 1.0 + t2;
    DVec2::new((1.0 - t2) / d, (2.0 * t) / d)
}

/// Slope of the star line for a star spread: `√(s / (1 − s))`.
pub fn slope_from_spread(s: f64) -> f64 {
    (s / (1.0 - s)).sqrt()
}

/// Converts a spread to `(sin θ, cos θ)` with θ in the first quadrant.
///
/// Out-of-range spreads are clamped into `[0, 1]`.
pub fn spread_to_sin_cos(s: f64) -> (f64, f64) {
    let s = s.clamp(0.0, 1.0);
    (s.sqrt(), (1.0 - s).sqrt())
}

/// Exact star spread `sin²(π/N)` for constructible polygons.
pub fn star_spread(n: u32) -> Option<f64> {
    let sqrt5 = 5.0_f64.sqrt();
    match n {
        3 => Some(3.0 / 4.0),
        4 => Some(1.0 / 2.0),
        5 => Some((5.0 - sqrt5) / 8.0),
        6 => Some(1.0 / 4.0),
        8 => Some((2.0 - 2.0_f64.sqrt()) / 4.0),
        10 => Some((3.0 - sqrt5) / 8.0),
        12 => Some((2.0 - 3.0_f64.sqrt()) / 4.0),
        _ => None,
    }
}

/// Corners of a regular N-gon of circumradius `r`, counter-clockwise from
/// `(r, 0)`.
///
/// Returns an empty list for `n < 3`. Polygons without a tabulated exact star
/// spread fall back to `sin²(π/N)`.
///
/// ```rust
/// use quadray_engine::rt::ngon_vertices;
///
/// let square = ngon_vertices(4, 1.0);
/// assert_eq!(square.len(), 4);
/// assert!((square[1].y - 1.0).abs() < 1e-12);
/// ```
pub fn ngon_vertices(n: u32, r: f64) -> Vec<DVec2> {
    if n < 3 {
        return Vec::new();
    }
    let s = star_spread(n).unwrap_or_else(|| {
        let sin = (std::f64::consts::PI / n as f64).sin();
        sin * sin
    });

    let count = n as usize;
    let mut vertices = vec![DVec2::ZERO; count];
    vertices[0] = DVec2::new(r, 0.0);
    if count % 2 == 0 {
        vertices[count / 2] = DVec2::new(-r, 0.0);
    }

    let m1 = slope_from_spread(s);
    let half = (count - 1) / 2;
    let mut mk = m1;
    for k in 1..=half {
        let c = circle_param(mk) * r;
        vertices[k] = c;
        vertices[count - k] = DVec2::new(c.x, -c.y);
        if k < half {
            mk = (mk + m1) / (1.0 - mk * m1);
        }
    }
    vertices
}

/// Euler's formula for convex polyhedra: `V − E + F = 2`.
pub fn verify_euler(vertices: usize, edges: usize, faces: usize) -> bool {
    vertices as i64 - edges as i64 + faces as i64 == 2
}
