//! # Geometry Analysis
//!
//! Computational-geometry helpers used to inspect generated solids.
//!
//! - [`line_plane_intersection`], [`sphere_plane_circle_intersection`]
//! - [`convex_hull_2d`]: Graham scan
//! - [`spread_rotation`]: rotation matrix from three spreads
//! - [`cross_section`], [`projected_hull`], [`count_hull_vertices`]
//! - [`rotation_pivot`]
//!
//! All functions are pure.

mod hull2d;
mod intersect;
mod rotation;
mod section;

#[cfg(test)]
mod tests;

pub use hull2d::{convex_hull_2d, convex_hull_2d_with_epsilon};
pub use intersect::{
    line_plane_intersection, plane_basis, sphere_plane_circle_intersection, CircleSection, Plane,
};
pub use rotation::{rotate_about_pivot, rotation_pivot, spread_rotation};
pub use section::{count_hull_vertices, cross_section, projected_hull};
