//! # Configuration Constants
//!
//! Centralized constants for the Quadray geometry engine.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Default grid and subdivision parameters
//! - **Limits**: Maximum values for safety bounds
//! - **RT Constants**: Rational Trigonometry intervals and spacing functions

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for point deduplication.
///
/// Two 2D hull inputs closer than this in both axes are treated as the same
/// point.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// let a = [0.0_f64, 0.0];
/// let b = [1e-9_f64, -1e-9];
/// let duplicate = (a[0] - b[0]).abs() < VERTEX_MERGE_EPSILON
///     && (a[1] - b[1]).abs() < VERTEX_MERGE_EPSILON;
/// assert!(duplicate);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Number of decimals kept in the vertex key used to merge subdivision
/// vertices shared between neighbouring tiles.
pub const DEDUP_DECIMALS: i32 = 6;

/// Tolerance used when checking derived edge quadrances for uniformity.
pub const QUADRANCE_TOLERANCE: f64 = 1e-9;

/// Default quadrance tolerance for matrix spacing validation.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SPACING_TOLERANCE;
///
/// let expected = 4.0_f64;
/// let measured = 4.0_f64 + 1e-9;
/// assert!((measured - expected).abs() <= DEFAULT_SPACING_TOLERANCE);
/// ```
pub const DEFAULT_SPACING_TOLERANCE: f64 = 1e-6;

/// Threshold on `|normal.y|` above which world-X replaces world-Y as the
/// reference axis when building an in-plane basis.
pub const REFERENCE_AXIS_THRESHOLD: f64 = 0.9;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Number of segments used to approximate each polar grid ring.
pub const DEFAULT_POLAR_SEGMENTS: u32 = 64;

/// Number of points generated around a sphere/plane intersection circle.
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 64;

/// Number of radial reference lines drawn on each polar grid plane.
pub const POLAR_RADIAL_LINES: u32 = 4;

/// Deepest supported pentagon-array generation.
///
/// Deflation rules past the third generation are not derived, so requests
/// beyond this value are clamped.
pub const MAX_PENTAGON_GENERATIONS: i32 = 3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum subdivision generations for the barycentric tessellator.
///
/// Generation `g` yields `2^(g-1)` divisions per edge, so 10 generations is
/// already 262,144 triangles for a single base triangle.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GENERATIONS;
///
/// let requested = 4;
/// assert!(requested <= MAX_GENERATIONS);
/// ```
pub const MAX_GENERATIONS: i32 = 10;

/// Maximum tessellation level accepted by the grid builders.
pub const MAX_TESSELLATIONS: i32 = 512;

/// Maximum Class I geodesic frequency (edge segments per base edge).
///
/// A geodesic icosahedron at frequency `f` has `10f² + 2` vertices.
pub const MAX_GEODESIC_FREQUENCY: u32 = 128;

/// Maximum edge length N of an N×N instanced matrix.
pub const MAX_MATRIX_SIZE: usize = 256;

/// Maximum number of vertices in a single mesh.
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// RT CONSTANTS
// =============================================================================

/// Edge quadrance of the unit Quadray tetrahedron ([1,0,0,0] permutations).
pub const TETRAHEDRON_EDGE_QUADRANCE: f64 = 8.0;

/// Spread between any two Quadray basis vectors (the tetrahedral spread).
pub const TETRAHEDRAL_SPREAD: f64 = 8.0 / 9.0;

/// Golden ratio φ = (1 + √5)/2, satisfying φ² = φ + 1.
///
/// Spans the golden rectangles of the icosahedron and dodecahedron.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Quadray grid interval: √6/4.
///
/// The perpendicular distance between parallel tetrahedral planes; the step
/// length of the uniform IVM grid.
///
/// # Example
///
/// ```rust
/// use config::constants::quadray_grid_interval;
///
/// let step = quadray_grid_interval();
/// assert!((step * step - 6.0 / 16.0).abs() < 1e-15);
/// ```
#[inline]
pub fn quadray_grid_interval() -> f64 {
    6.0_f64.sqrt() / 4.0
}

/// Cumulative ring distances for gravity-spaced polar grids.
///
/// Ring radii follow equal-time snapshots of a body falling from rest at
/// `max_extent` toward the centre: `cum[k] = R·(1 − ((N−k)/N)²)`.
/// The result has `count + 1` entries, starts at `0.0`, ends at `max_extent`
/// and is strictly increasing for `count > 0` and `max_extent > 0`.
///
/// # Example
///
/// ```rust
/// use config::constants::gravity_cumulative_distances;
///
/// let cum = gravity_cumulative_distances(4, 16.0);
/// assert_eq!(cum.len(), 5);
/// assert_eq!(cum[0], 0.0);
/// assert_eq!(cum[4], 16.0);
/// assert!(cum.windows(2).all(|w| w[1] > w[0]));
/// ```
pub fn gravity_cumulative_distances(count: usize, max_extent: f64) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    let n = count as f64;
    (0..=count)
        .map(|k| {
            let remaining = (n - k as f64) / n;
            max_extent * (1.0 - remaining * remaining)
        })
        .collect()
}

/// Cumulative ring distances at a uniform interval.
///
/// # Example
///
/// ```rust
/// use config::constants::uniform_cumulative_distances;
///
/// assert_eq!(uniform_cumulative_distances(2, 4.0), vec![0.0, 2.0, 4.0]);
/// ```
pub fn uniform_cumulative_distances(count: usize, max_extent: f64) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    let step = max_extent / count as f64;
    (0..=count).map(|k| k as f64 * step).collect()
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
