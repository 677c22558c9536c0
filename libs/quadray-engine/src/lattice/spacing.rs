//! Cumulative ring distances for polar grids.

use crate::error::{EngineError, EngineResult};
use config::constants::{gravity_cumulative_distances, uniform_cumulative_distances, EPSILON};
use std::cmp::Ordering;

/// Maps a ring count and outer extent to `count + 1` cumulative distances.
///
/// Implementations must be deterministic in `(count, max_extent)`, start at
/// zero and increase strictly.
pub trait CumulativeDistance {
    fn cumulative(&self, count: usize, max_extent: f64) -> Vec<f64>;
}

/// Equal-time snapshots of a body falling toward the centre.
#[derive(Debug, Clone, Copy, Default)]
pub struct GravitySpacing;

impl CumulativeDistance for GravitySpacing {
    fn cumulative(&self, count: usize, max_extent: f64) -> Vec<f64> {
        gravity_cumulative_distances(count, max_extent)
    }
}

/// Evenly spaced rings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSpacing;

impl CumulativeDistance for UniformSpacing {
    fn cumulative(&self, count: usize, max_extent: f64) -> Vec<f64> {
        uniform_cumulative_distances(count, max_extent)
    }
}

impl<F> CumulativeDistance for F
where
    F: Fn(usize, f64) -> Vec<f64>,
{
    fn cumulative(&self, count: usize, max_extent: f64) -> Vec<f64> {
        self(count, max_extent)
    }
}

/// Checks the contract on a collaborator's output.
pub(crate) fn checked_distances(
    spacing: &dyn CumulativeDistance,
    count: usize,
    max_extent: f64,
) -> EngineResult<Vec<f64>> {
    let cum = spacing.cumulative(count, max_extent);
    if cum.len() != count + 1 {
        return Err(EngineError::invalid_parameter(format!(
            "cumulative distances: expected {} values, got {}",
            count + 1,
            cum.len()
        )));
    }
    if cum.first().map_or(true, |d| d.abs() > EPSILON) {
        return Err(EngineError::invalid_parameter("cumulative distances must start at 0"));
    }
    if let Some(k) = cum
        .windows(2)
        .position(|w| w[1].partial_cmp(&w[0]) != Some(Ordering::Greater))
    {
        return Err(EngineError::invalid_parameter(format!(
            "cumulative distances not increasing at ring {}",
            k + 1
        )));
    }
    Ok(cum)
}
