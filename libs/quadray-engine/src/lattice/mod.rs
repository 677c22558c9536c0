//! # Lattice
//!
//! Planar tessellations and reference grids.
//!
//! - [`subdivide_polygon`]: barycentric subdivision of a base polygon, or a
//!   pentaflake for the pentagon array
//! - [`build_grid`]: line grids over the Quadray basis-pair planes (uniform),
//!   the basis-orthogonal planes (polar) or the coordinate planes
//!
//! Both return an empty mesh for a zero or negative level.

mod grid;
mod spacing;
mod subdivision;


pub use grid::build_grid;
pub use spacing::{CumulativeDistance, GravitySpacing, UniformSpacing};
pub use subdivision::subdivide_polygon;

use config::constants::DEFAULT_POLAR_SEGMENTS;
use serde::{Deserialize, Serialize};

/// Base shape for barycentric subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasePolygon {
    /// `n²` triangles.
    Triangle,
    /// `n²` quads on a bilinear grid.
    Square,
    /// Six triangular sectors about the centre, `6n²` triangles.
    Hexagon,
    /// Pentaflake: 1, 6 or 36 pentagons.
    PentagonArray,
}

/// Grid family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridMode {
    /// Triangular tiling of the six basis-pair planes at the Quadray grid
    /// interval.
    Uniform,
    /// Concentric rings on the four basis-orthogonal planes and the three
    /// coordinate planes, spaced by a cumulative-distance function.
    Polar { segments: u32 },
    /// Square line grid on the three coordinate planes.
    Cartesian,
}

impl GridMode {
    /// Polar mode with the default ring resolution.
    pub fn polar() -> Self {
        Self::Polar {
            segments: DEFAULT_POLAR_SEGMENTS,
        }
    }
}
