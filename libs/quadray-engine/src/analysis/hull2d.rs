//! # 2D Convex Hull (Graham Scan)
//!
//! ## Algorithm
//!
//! 1. Drop near-duplicate points
//! 2. Pivot on the lowest point, leftmost on ties
//! 3. Sort the rest by polar angle about the pivot, nearer first on ties
//! 4. Scan, popping while the last turn is not strictly counter-clockwise

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec2;

/// Convex hull in counter-clockwise order, starting at the pivot.
///
/// Inputs with fewer than three points are returned unchanged.
///
/// ```rust
/// use quadray_engine::convex_hull_2d;
/// use glam::DVec2;
///
/// let hull = convex_hull_2d(&[
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 0.0),
///     DVec2::new(0.5, 0.5),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(0.0, 1.0),
/// ]);
/// assert_eq!(hull.len(), 4);
/// assert_eq!(hull[0], DVec2::ZERO);
/// ```
pub fn convex_hull_2d(points: &[DVec2]) -> Vec<DVec2> {
    convex_hull_2d_with_epsilon(points, VERTEX_MERGE_EPSILON)
}

/// [`convex_hull_2d`] with an explicit duplicate threshold.
pub fn convex_hull_2d_with_epsilon(points: &[DVec2], epsilon: f64) -> Vec<DVec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut unique: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in points {
        let duplicate = unique
            .iter()
            .any(|q| (p.x - q.x).abs() < epsilon && (p.y - q.y).abs() < epsilon);
        if !duplicate {
            unique.push(p);
        }
    }
    if unique.len() < 3 {
        return unique;
    }

    let mut pivot_index = 0;
    for (i, p) in unique.iter().enumerate() {
        let best = unique[pivot_index];
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            pivot_index = i;
        }
    }
    let pivot = unique.swap_remove(pivot_index);

    unique.sort_by(|a, b| {
        let da = *a - pivot;
        let db = *b - pivot;
        da.y.atan2(da.x)
            .total_cmp(&db.y.atan2(db.x))
            .then_with(|| da.length_squared().total_cmp(&db.length_squared()))
    });

    let mut hull: Vec<DVec2> = Vec::with_capacity(unique.len() + 1);
    hull.push(pivot);
    for p in unique {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

/// Z component of `(a − o) × (b − o)`.
#[inline]
fn cross(o: DVec2, a: DVec2, b: DVec2) -> f64 {
    (a - o).perp_dot(b - o)
}
