//! # Matrix Instancer
//!
//! Space-filling N×N arrays of one base mesh, merged into two flat draw
//! buffers (triangles and edge segments) regardless of N.
//!
//! ```text
//!   row 2   ○   ○   ○        ○ primary cell, row-major
//!             ×   ×          × interstitial cell (optional)
//!   row 1   ○   ○   ○
//!             ×   ×
//!   row 0   ○   ○   ○
//! ```

mod batch;
mod layout;


pub use batch::{create_matrix, BatchedMesh};
pub use layout::{build_layout, validate_spacing, SpacingReport, SpacingViolation};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// How primary cells are placed and oriented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LayoutRule {
    /// Every cell upright, spacing `2·half_size`.
    Grid { half_size: f64 },
    /// Cells with even `row + col` upright, odd ones flipped. Used to pack
    /// tetrahedra.
    Checkerboard { half_size: f64 },
}

impl LayoutRule {
    pub fn half_size(self) -> f64 {
        match self {
            Self::Grid { half_size } | Self::Checkerboard { half_size } => half_size,
        }
    }

    /// Distance between neighbouring primary cell centres.
    pub fn spacing(self) -> f64 {
        2.0 * self.half_size()
    }
}

/// Optional extra cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymmetryFlags {
    /// Adds `(N−1)²` cells at the centres of the primary grid squares, after
    /// the primary cells. Used by rhombic dodecahedron and octahedron
    /// packings.
    pub interstitial: bool,
}

/// Placement of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Half-turn about Z, `(x, y, z) → (−x, −y, z)`, applied before the
    /// translation.
    pub flip: bool,
}

impl CellPlacement {
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Maps a base-mesh vertex into this cell.
    #[inline]
    pub fn place(&self, v: DVec3) -> DVec3 {
        let local = if self.flip {
            DVec3::new(-v.x, -v.y, v.z)
        } else {
            v
        };
        local + self.position()
    }
}

/// Cell placements, primary cells first in row-major order.
pub type CellLayout = Vec<CellPlacement>;
