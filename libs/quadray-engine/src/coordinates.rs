//! # Quadray Coordinates
//!
//! Four-valued WXYZ coordinates over a tetrahedral basis and their projection
//! to and from Cartesian space.
//!
//! The four basis vectors point from the centre of a cube to alternating
//! corners:
//!
//! ```text
//! W = (-1, -1, +1)
//! X = (+1, +1, +1)
//! Y = (-1, +1, -1)
//! Z = (+1, -1, -1)
//! ```
//!
//! They sum to zero, so adding the same amount to every component leaves the
//! Cartesian point unchanged. Zero-sum normalization picks the representative
//! with `w + x + y + z = 0`.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Raw basis vectors, one per WXYZ component.
const BASIS: [DVec3; 4] = [
    DVec3::new(-1.0, -1.0, 1.0),
    DVec3::new(1.0, 1.0, 1.0),
    DVec3::new(-1.0, 1.0, -1.0),
    DVec3::new(1.0, -1.0, -1.0),
];

/// Returns the four Quadray basis vectors in WXYZ order.
///
/// Every pair has spread 8/9 and every vector has quadrance 3.
///
/// # Example
///
/// ```rust
/// use quadray_engine::coordinates::basis_vectors;
///
/// let basis = basis_vectors();
/// let sum: glam::DVec3 = basis.iter().copied().sum();
/// assert_eq!(sum, glam::DVec3::ZERO);
/// ```
#[inline]
pub fn basis_vectors() -> [DVec3; 4] {
    BASIS
}

/// A WXYZ coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quadray {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quadray {
    pub const W: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const X: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a coordinate from its four components.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a coordinate from a `[w, x, y, z]` array.
    pub const fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Components as a `[w, x, y, z]` array.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Sum of the four components.
    #[inline]
    pub fn sum(self) -> f64 {
        self.w + self.x + self.y + self.z
    }

    /// True when every component is finite.
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// Zero-sum normalization: subtracts the mean from every component.
    ///
    /// Idempotent, and many-to-one along the (1,1,1,1) axis.
    ///
    /// ```rust
    /// use quadray_engine::Quadray;
    ///
    /// let n = Quadray::W.normalize();
    /// assert_eq!(n, Quadray::new(0.75, -0.25, -0.25, -0.25));
    /// ```
    pub fn normalize(self) -> Self {
        let mean = self.sum() / 4.0;
        Self::new(self.w - mean, self.x - mean, self.y - mean, self.z - mean)
    }

    /// Shifts the coordinate so its smallest component is zero.
    pub fn canonical(self) -> Self {
        let min = self.w.min(self.x).min(self.y).min(self.z);
        Self::new(self.w - min, self.x - min, self.y - min, self.z - min)
    }

    /// Projects to Cartesian space: `Σ basis_i · coord_i · scale`.
    pub fn to_cartesian(self, scale: f64) -> DVec3 {
        (BASIS[0] * self.w + BASIS[1] * self.x + BASIS[2] * self.y + BASIS[3] * self.z) * scale
    }

    /// Recovers the zero-sum coordinate of a Cartesian point.
    ///
    /// Dots the point against each raw basis vector, divides by 4 and
    /// normalizes. Because the basis vectors satisfy `Σ bᵢbᵢᵀ = 4I`, this is
    /// the exact inverse of [`Quadray::to_cartesian`] with unit scale.
    ///
    /// ```rust
    /// use quadray_engine::Quadray;
    ///
    /// let q = Quadray::new(2.0, 1.0, 0.0, 1.0);
    /// let back = Quadray::from_cartesian(q.to_cartesian(1.0));
    /// assert!((back.to_cartesian(1.0) - q.to_cartesian(1.0)).length() < 1e-12);
    /// ```
    pub fn from_cartesian(position: DVec3) -> Self {
        Self::new(
            position.dot(BASIS[0]) / 4.0,
            position.dot(BASIS[1]) / 4.0,
            position.dot(BASIS[2]) / 4.0,
            position.dot(BASIS[3]) / 4.0,
        )
        .normalize()
    }

    /// Scales all components by a factor.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(
            self.w * factor,
            self.x * factor,
            self.y * factor,
            self.z * factor,
        )
    }

    /// Quadrance between two Quadray points, measured in Cartesian space.
    pub fn quadrance(self, other: Self) -> f64 {
        self.to_cartesian(1.0)
            .distance_squared(other.to_cartesian(1.0))
    }

    /// Spread between two Quadray vectors from the origin.
    pub fn spread(self, other: Self) -> f64 {
        crate::rt::spread(self.to_cartesian(1.0), other.to_cartesian(1.0))
    }
}

impl Add for Quadray {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quadray {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Quadray {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl From<[f64; 4]> for Quadray {
    fn from(c: [f64; 4]) -> Self {
        Self::from_array(c)
    }
}

impl fmt::Display for Quadray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[W={:.4}, X={:.4}, Y={:.4}, Z={:.4}]",
            self.w, self.x, self.y, self.z
        )
    }
}

/// Converts a slice of coordinates to Cartesian points.
pub fn batch_to_cartesian(coords: &[Quadray], scale: f64) -> Vec<DVec3> {
    coords.iter().map(|q| q.to_cartesian(scale)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn basis_to_cartesian() {
        assert_eq!(Quadray::W.to_cartesian(1.0), DVec3::new(-1.0, -1.0, 1.0));
        assert_eq!(Quadray::X.to_cartesian(1.0), DVec3::new(1.0, 1.0, 1.0));
        assert_eq!(Quadray::Y.to_cartesian(1.0), DVec3::new(-1.0, 1.0, -1.0));
        assert_eq!(Quadray::Z.to_cartesian(1.0), DVec3::new(1.0, -1.0, -1.0));
    }

    #[test]
    fn basis_pairwise_spread_is_tetrahedral() {
        let basis = basis_vectors();
        for i in 0..4 {
            assert_abs_diff_eq!(basis[i].length_squared(), 3.0);
            for j in (i + 1)..4 {
                assert_abs_diff_eq!(crate::rt::spread(basis[i], basis[j]), 8.0 / 9.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn scale_is_linear() {
        let q = Quadray::new(2.0, 1.0, 1.0, 0.0);
        assert_eq!(q.to_cartesian(3.0), q.to_cartesian(1.0) * 3.0);
    }

    #[test]
    fn normalize_sums_to_zero() {
        let n = Quadray::new(3.0, 1.0, 2.0, 0.0).normalize();
        assert_abs_diff_eq!(n.sum(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_is_idempotent() {
        let q = Quadray::new(0.3, -7.0, 2.5, 11.0);
        let once = q.normalize().to_array();
        let twice = q.normalize().normalize().to_array();
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalize_collapses_uniform_shift() {
        let q = Quadray::new(2.0, 1.0, 0.0, 0.0);
        let shifted = q + Quadray::new(5.0, 5.0, 5.0, 5.0);
        assert_eq!(q.normalize(), shifted.normalize());
        assert_eq!(q.to_cartesian(1.0), shifted.to_cartesian(1.0));
    }

    #[test]
    fn dual_vertex_is_negated_basis() {
        let q = Quadray::new(0.0, 1.0, 1.0, 1.0);
        assert_eq!(q.to_cartesian(1.0), DVec3::new(1.0, 1.0, -1.0));
    }

    #[test]
    fn cartesian_roundtrip() {
        let p = DVec3::new(0.4, -1.7, 2.25);
        let back = Quadray::from_cartesian(p).to_cartesian(1.0);
        assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-12);
        assert_abs_diff_eq!(back.z, p.z, epsilon = 1e-12);
    }

    #[test]
    fn from_cartesian_is_normalized() {
        let q = Quadray::from_cartesian(DVec3::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(q.sum(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn canonical_has_zero_minimum() {
        let q = Quadray::from_cartesian(DVec3::new(1.0, 1.0, 1.0)).canonical();
        assert_abs_diff_eq!(q.w.min(q.x).min(q.y).min(q.z), 0.0);
        assert_abs_diff_eq!(q.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn tetrahedron_edges_have_quadrance_eight() {
        let verts = [Quadray::W, Quadray::X, Quadray::Y, Quadray::Z];
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_abs_diff_eq!(verts[i].quadrance(verts[j]), 8.0);
            }
        }
    }

    #[test]
    fn operators() {
        let sum = Quadray::W + Quadray::X;
        assert_eq!(sum, Quadray::new(1.0, 1.0, 0.0, 0.0));
        assert_eq!(sum - Quadray::X, Quadray::W);
        assert_eq!(Quadray::W * 3.0, Quadray::new(3.0, 0.0, 0.0, 0.0));
    }
}
