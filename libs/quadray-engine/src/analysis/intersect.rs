//! # Intersections
//!
//! Segment/plane and sphere/plane tests. A miss is an expected outcome and
//! comes back as `None`.

use crate::error::{EngineError, EngineResult};
use crate::rt::ngon_vertices;
use config::constants::{EPSILON, REFERENCE_AXIS_THRESHOLD};
use glam::DVec3;

/// Plane `normal · p + constant = 0` with a unit normal.
///
/// Only built through [`Plane::new`] or [`Plane::from_point_normal`], so the
/// normal is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    constant: f64,
}

impl Plane {
    /// Creates a plane, normalizing `normal` and rescaling `constant` to match.
    pub fn new(normal: DVec3, constant: f64) -> EngineResult<Self> {
        let length = normal.length();
        if !length.is_finite() || length < EPSILON || !constant.is_finite() {
            return Err(EngineError::invalid_parameter(format!(
                "degenerate plane normal {normal:?}"
            )));
        }
        Ok(Self {
            normal: normal / length,
            constant: constant / length,
        })
    }

    /// Plane through `point` with the given normal.
    ///
    /// ```rust
    /// use quadray_engine::Plane;
    /// use glam::DVec3;
    ///
    /// let plane = Plane::from_point_normal(DVec3::new(0.0, 0.0, 3.0), DVec3::Z * 2.0).unwrap();
    /// assert_eq!(plane.constant(), -3.0);
    /// assert_eq!(plane.normal(), DVec3::Z);
    /// ```
    pub fn from_point_normal(point: DVec3, normal: DVec3) -> EngineResult<Self> {
        let plane = Self::new(normal, 0.0)?;
        Ok(Self {
            constant: -plane.normal.dot(point),
            ..plane
        })
    }

    /// Unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    #[inline]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Signed distance from the plane; positive on the normal side.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.constant
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project(&self, point: DVec3) -> DVec3 {
        point - self.normal * self.signed_distance(point)
    }
}

/// Circle where a sphere meets a plane.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSection {
    pub center: DVec3,
    pub radius: f64,
    /// Points around the circle, counter-clockwise about the plane normal.
    pub points: Vec<DVec3>,
}

/// Orthonormal in-plane axes `(u, v)` with `u × v = normal`.
///
/// The reference axis is world-Y unless the normal is within the
/// `REFERENCE_AXIS_THRESHOLD` of it, then world-X.
pub fn plane_basis(normal: DVec3) -> (DVec3, DVec3) {
    let n = normal.normalize();
    let reference = if n.y.abs() >= REFERENCE_AXIS_THRESHOLD {
        DVec3::X
    } else {
        DVec3::Y
    };
    let u = reference.cross(n).normalize();
    let v = n.cross(u);
    (u, v)
}

/// Where the segment `a → b` crosses `plane`.
///
/// `None` when both ends lie strictly on the same side or the segment runs
/// parallel to the plane.
pub fn line_plane_intersection(a: DVec3, b: DVec3, plane: &Plane) -> Option<DVec3> {
    let da = plane.signed_distance(a);
    let db = plane.signed_distance(b);
    if da * db > 0.0 {
        return None;
    }
    let denom = da - db;
    if denom.abs() < EPSILON {
        return None;
    }
    let t = da / denom;
    Some(a + (b - a) * t)
}

/// Circle cut from a sphere by a plane.
///
/// The circle radius is `√(r² − d²)` for centre distance `d`, the single
/// square root of the computation. `None` when the plane misses the sphere
/// or `segments` is below 3.
pub fn sphere_plane_circle_intersection(
    center: DVec3,
    radius: f64,
    plane: &Plane,
    segments: u32,
) -> Option<CircleSection> {
    if segments < 3 || radius.is_nan() || radius <= 0.0 {
        return None;
    }
    let d = plane.signed_distance(center);
    let q = radius * radius - d * d;
    if q < -EPSILON {
        return None;
    }
    let circle_center = center - plane.normal * d;
    let circle_radius = q.max(0.0).sqrt();

    let points = if circle_radius > EPSILON {
        let (u, v) = plane_basis(plane.normal);
        ngon_vertices(segments, circle_radius)
            .into_iter()
            .map(|p| circle_center + u * p.x + v * p.y)
            .collect()
    } else {
        vec![circle_center]
    };

    Some(CircleSection {
        center: circle_center,
        radius: circle_radius,
        points,
    })
}
