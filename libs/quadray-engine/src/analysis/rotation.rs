//! Rotation from spreads.

use crate::mesh::Mesh;
use crate::rt::spread_to_sin_cos;
use glam::{DMat3, DVec3};

/// Rotation `Rz · Ry · Rx` whose angles have spreads `s1` (about Z), `s2`
/// (about Y) and `s3` (about X).
///
/// Each angle is taken in the first quadrant: `sin θ = √s`,
/// `cos θ = √(1 − s)`.
///
/// ```rust
/// use quadray_engine::spread_rotation;
/// use glam::DVec3;
///
/// let quarter_turn = spread_rotation(1.0, 0.0, 0.0);
/// let v = quarter_turn * DVec3::X;
/// assert!((v - DVec3::Y).length() < 1e-12);
/// ```
pub fn spread_rotation(s1: f64, s2: f64, s3: f64) -> DMat3 {
    let (sin1, cos1) = spread_to_sin_cos(s1);
    let (sin2, cos2) = spread_to_sin_cos(s2);
    let (sin3, cos3) = spread_to_sin_cos(s3);

    DMat3::from_cols(
        DVec3::new(cos1 * cos2, sin1 * cos2, -sin2),
        DVec3::new(
            cos1 * sin2 * sin3 - sin1 * cos3,
            sin1 * sin2 * sin3 + cos1 * cos3,
            cos2 * sin3,
        ),
        DVec3::new(
            cos1 * sin2 * cos3 + sin1 * sin3,
            sin1 * sin2 * cos3 - cos1 * sin3,
            cos2 * cos3,
        ),
    )
}

/// Point a selection rotates about: the vertex centroid.
pub fn rotation_pivot(mesh: &Mesh) -> DVec3 {
    mesh.centroid()
}

/// Rotates a mesh about its own pivot.
pub fn rotate_about_pivot(mesh: &mut Mesh, rotation: &DMat3) {
    let pivot = rotation_pivot(mesh);
    mesh.translate(-pivot);
    mesh.transform(rotation);
    mesh.translate(pivot);
}
