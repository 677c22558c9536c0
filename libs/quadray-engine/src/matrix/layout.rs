//! Cell layouts and spacing validation.

use super::{CellLayout, CellPlacement, LayoutRule, SymmetryFlags};
use crate::error::{EngineError, EngineResult};
use config::constants::MAX_MATRIX_SIZE;
use tracing::warn;

/// Places `n × n` cells centred on the origin in the XY plane.
///
/// # Errors
///
/// `InvalidParameter` when `n` is zero or above `MAX_MATRIX_SIZE`, or the
/// half size is not finite and positive.
///
/// # Example
///
/// ```rust
/// use quadray_engine::matrix::{build_layout, LayoutRule, SymmetryFlags};
///
/// let layout = build_layout(
///     3,
///     LayoutRule::Checkerboard { half_size: 1.0 },
///     SymmetryFlags { interstitial: true },
/// )
/// .unwrap();
/// assert_eq!(layout.len(), 9 + 4);
/// assert_eq!((layout[0].x, layout[0].y), (-2.0, -2.0));
/// assert!(layout[1].flip);
/// ```
pub fn build_layout(n: usize, rule: LayoutRule, flags: SymmetryFlags) -> EngineResult<CellLayout> {
    if n == 0 || n > MAX_MATRIX_SIZE {
        return Err(EngineError::invalid_parameter(format!(
            "matrix size must be in 1..={MAX_MATRIX_SIZE}, got {n}"
        )));
    }
    let half_size = rule.half_size();
    if !half_size.is_finite() || half_size <= 0.0 {
        return Err(EngineError::invalid_parameter(format!(
            "half size must be finite and positive, got {half_size}"
        )));
    }

    let spacing = rule.spacing();
    let offset = (n - 1) as f64 * spacing / 2.0;
    let interstitial = if flags.interstitial { (n - 1) * (n - 1) } else { 0 };
    let mut layout = Vec::with_capacity(n * n + interstitial);

    for row in 0..n {
        for col in 0..n {
            let flip = matches!(rule, LayoutRule::Checkerboard { .. }) && (row + col) % 2 == 1;
            layout.push(CellPlacement {
                x: col as f64 * spacing - offset,
                y: row as f64 * spacing - offset,
                z: 0.0,
                flip,
            });
        }
    }

    if flags.interstitial {
        for row in 0..n - 1 {
            for col in 0..n - 1 {
                layout.push(CellPlacement {
                    x: (col as f64 + 0.5) * spacing - offset,
                    y: (row as f64 + 0.5) * spacing - offset,
                    z: 0.0,
                    flip: false,
                });
            }
        }
    }

    Ok(layout)
}

/// One neighbouring pair whose quadrance is off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingViolation {
    pub row: usize,
    /// Column of the left cell of the pair.
    pub col: usize,
    pub expected_quadrance: f64,
    pub actual_quadrance: f64,
}

/// Outcome of [`validate_spacing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacingReport {
    /// Number of pairs compared.
    pub checked: usize,
    pub violations: Vec<SpacingViolation>,
}

impl SpacingReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Compares the quadrance between consecutive primary cells in each row with
/// `spacing²`, reporting every pair off by more than `tolerance`.
///
/// Works on quadrances only; no square root is taken. Cells beyond the
/// primary `n × n` block are ignored.
pub fn validate_spacing(
    layout: &[CellPlacement],
    n: usize,
    spacing: f64,
    tolerance: f64,
) -> SpacingReport {
    let expected = spacing * spacing;
    let mut report = SpacingReport::default();

    for row in 0..n {
        for col in 0..n.saturating_sub(1) {
            let (Some(a), Some(b)) = (layout.get(row * n + col), layout.get(row * n + col + 1))
            else {
                continue;
            };
            let actual = a.position().distance_squared(b.position());
            report.checked += 1;
            if (actual - expected).abs() > tolerance {
                report.violations.push(SpacingViolation {
                    row,
                    col,
                    expected_quadrance: expected,
                    actual_quadrance: actual,
                });
            }
        }
    }

    if !report.is_valid() {
        warn!(
            violations = report.violations.len(),
            checked = report.checked,
            "matrix spacing check failed"
        );
    }
    report
}
