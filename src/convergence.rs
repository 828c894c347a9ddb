//! Mesh convergence assessment of an extreme stress over successive refinements.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{AnalysisError, ConvergenceWarning, DataShapeError, DomainError};

/// Relative change between successive meshes below which a study is converged.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.05;

/// Result of one mesh in a refinement study.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceLevel {
    /// Characteristic element size in millimetres.
    pub element_size: f64,
    /// Number of elements in the mesh.
    pub element_count: u64,
    /// Extreme stress reported by the mesh in megapascals.
    pub extreme_stress: f64,
}

impl ConvergenceLevel {
    /// Create a mesh level.
    #[must_use]
    pub const fn new(element_size: f64, element_count: u64, extreme_stress: f64) -> Self {
        Self {
            element_size,
            element_count,
            extreme_stress,
        }
    }
}

/// Direction in which the levels of a series are refined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementOrder {
    /// The first level is the coarsest mesh.
    #[default]
    CoarseToFine,
    /// The first level is the finest mesh.
    FineToCoarse,
}

/// Mesh study results with their declared refinement direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceSeries {
    /// Levels in caller order.
    pub levels: Vec<ConvergenceLevel>,
    /// How `levels` is ordered.
    pub order: RefinementOrder,
}

impl ConvergenceSeries {
    /// Create a series. The order is taken as declared and never inferred from
    /// element sizes or counts.
    #[must_use]
    pub fn new(levels: Vec<ConvergenceLevel>, order: RefinementOrder) -> Self {
        Self { levels, order }
    }

    /// Caller indices arranged from the coarsest to the finest level.
    #[must_use]
    pub fn coarse_to_fine_indices(&self) -> Vec<usize> {
        let count = self.levels.len();
        match self.order {
            RefinementOrder::CoarseToFine => (0..count).collect(),
            RefinementOrder::FineToCoarse => (0..count).rev().collect(),
        }
    }
}

/// Verdict of a mesh convergence assessment.
///
/// `pct_changes[k]` and `signed_changes[k]` compare the `k`-th and `k+1`-th
/// levels of [`ConvergenceAssessment::coarse_to_fine`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceAssessment {
    /// Whether some pair of successive levels changed by less than the threshold.
    pub converged: bool,
    /// Caller index of the selected level.
    pub selected_index: usize,
    /// Unsigned relative changes between successive levels, coarse to fine.
    pub pct_changes: Vec<f64>,
    /// Signed relative changes between successive levels, coarse to fine.
    pub signed_changes: Vec<f64>,
    /// Caller indices from coarsest to finest.
    pub coarse_to_fine: Vec<usize>,
    /// Change that decided the verdict: the converged pair, or the finest pair.
    pub governing_change: f64,
    /// Threshold used.
    pub threshold: f64,
    /// Present when the series never met the threshold.
    pub warning: Option<ConvergenceWarning>,
}

/// Relative change from `previous` to `current`. Zero to zero is no change and
/// zero to anything else is an unbounded change.
fn relative_change(previous: f64, current: f64) -> f64 {
    if previous == current {
        0.0
    } else if previous == 0.0 {
        (current - previous).signum() * f64::INFINITY
    } else {
        (current - previous) / previous.abs()
    }
}

/// Assess convergence of a mesh series against `threshold`.
///
/// Scanning from the coarsest level, the first level whose change to the next
/// finer level is below `threshold` is selected. A series that never gets there
/// selects its finest level and carries a [`ConvergenceWarning`] instead of
/// failing. Oscillating series are treated like any other.
///
/// # Errors
///
/// Returns [`DomainError::InvalidThreshold`] for a threshold that is not positive
/// and finite, [`DataShapeError::TooFewMeshLevels`] for fewer than two levels and
/// [`DataShapeError::NonFiniteMeshStress`] for a non-finite stress.
///
/// # Examples
/// ```
/// use fatiguex::{assess, ConvergenceLevel, ConvergenceSeries, RefinementOrder};
///
/// let series = ConvergenceSeries::new(
///     vec![
///         ConvergenceLevel::new(5.0, 1_200, 150.0),
///         ConvergenceLevel::new(2.5, 9_600, 171.0),
///         ConvergenceLevel::new(1.25, 76_800, 178.0),
///         ConvergenceLevel::new(0.625, 614_400, 180.0),
///     ],
///     RefinementOrder::CoarseToFine,
/// );
/// let assessment = assess(&series, 0.05).expect("valid series");
/// assert!(assessment.converged);
/// assert_eq!(assessment.selected_index, 1);
/// ```
pub fn assess(
    series: &ConvergenceSeries,
    threshold: f64,
) -> Result<ConvergenceAssessment, AnalysisError> {
    if !(threshold > 0.0 && threshold.is_finite()) {
        return Err(DomainError::InvalidThreshold { threshold }.into());
    }
    if series.levels.len() < 2 {
        return Err(DataShapeError::TooFewMeshLevels {
            levels: series.levels.len(),
        }
        .into());
    }
    if let Some((level, entry)) = series
        .levels
        .iter()
        .enumerate()
        .find(|(_, entry)| !entry.extreme_stress.is_finite())
    {
        return Err(DataShapeError::NonFiniteMeshStress {
            level,
            stress: entry.extreme_stress,
        }
        .into());
    }

    let coarse_to_fine = series.coarse_to_fine_indices();
    let signed_changes: Vec<f64> = coarse_to_fine
        .windows(2)
        .map(|pair| {
            relative_change(
                series.levels[pair[0]].extreme_stress,
                series.levels[pair[1]].extreme_stress,
            )
        })
        .collect();
    let pct_changes: Vec<f64> = signed_changes.iter().map(|change| change.abs()).collect();

    let assessment = match pct_changes.iter().position(|&change| change < threshold) {
        Some(position) => {
            debug!(selected = coarse_to_fine[position], change = pct_changes[position], "mesh converged");
            ConvergenceAssessment {
                converged: true,
                selected_index: coarse_to_fine[position],
                governing_change: pct_changes[position],
                pct_changes,
                signed_changes,
                coarse_to_fine,
                threshold,
                warning: None,
            }
        }
        None => {
            let selected_index = coarse_to_fine[coarse_to_fine.len() - 1];
            let smallest_change = pct_changes.iter().copied().fold(f64::INFINITY, f64::min);
            let warning = ConvergenceWarning {
                threshold,
                smallest_change,
                selected_index,
            };
            warn!(%warning, "mesh study not converged");
            ConvergenceAssessment {
                converged: false,
                selected_index,
                governing_change: pct_changes[pct_changes.len() - 1],
                pct_changes,
                signed_changes,
                coarse_to_fine,
                threshold,
                warning: Some(warning),
            }
        }
    };
    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn series(stresses: &[f64], order: RefinementOrder) -> ConvergenceSeries {
        let levels = stresses
            .iter()
            .enumerate()
            .map(|(index, &stress)| {
                ConvergenceLevel::new(4.0 / (index + 1) as f64, 1_000 * (index as u64 + 1), stress)
            })
            .collect();
        ConvergenceSeries::new(levels, order)
    }

    #[test]
    fn constant_series_converges_at_first_pair() {
        for threshold in [1.0e-9, 0.05, 10.0] {
            let assessment = assess(
                &series(&[180.0, 180.0, 180.0], RefinementOrder::CoarseToFine),
                threshold,
            )
            .expect("valid series");
            assert!(assessment.converged);
            assert_eq!(assessment.selected_index, 0);
            assert_eq!(assessment.pct_changes, vec![0.0, 0.0]);
            assert!(assessment.warning.is_none());
        }
    }

    #[test]
    fn monotonic_series_converges_where_change_drops() {
        let assessment = assess(
            &series(&[120.0, 150.0, 170.0, 176.0, 178.0], RefinementOrder::CoarseToFine),
            0.05,
        )
        .expect("valid series");
        assert!(assessment.converged);
        assert_eq!(assessment.selected_index, 2);
        assert_relative_eq!(assessment.pct_changes[0], 0.25, epsilon = 1.0e-12);
        assert_relative_eq!(assessment.governing_change, 6.0 / 170.0, epsilon = 1.0e-12);
    }

    #[test]
    fn fine_to_coarse_series_reports_caller_indices() {
        let assessment = assess(
            &series(&[178.0, 176.0, 170.0, 150.0, 120.0], RefinementOrder::FineToCoarse),
            0.05,
        )
        .expect("valid series");
        assert_eq!(assessment.coarse_to_fine, vec![4, 3, 2, 1, 0]);
        assert!(assessment.converged);
        assert_eq!(assessment.selected_index, 2);
        assert_relative_eq!(assessment.signed_changes[0], 0.25, epsilon = 1.0e-12);
    }

    #[test]
    fn oscillating_series_uses_percent_change_only() {
        let assessment = assess(
            &series(&[100.0, 130.0, 95.0, 97.0], RefinementOrder::CoarseToFine),
            0.05,
        )
        .expect("valid series");
        assert!(assessment.converged);
        assert_eq!(assessment.selected_index, 2);
        assert!(assessment.signed_changes[1] < 0.0);
    }

    #[test]
    fn unconverged_series_selects_finest_with_warning() {
        let assessment = assess(
            &series(&[100.0, 130.0, 160.0], RefinementOrder::CoarseToFine),
            0.05,
        )
        .expect("valid series");
        assert!(!assessment.converged);
        assert_eq!(assessment.selected_index, 2);
        let warning = assessment.warning.expect("warning attached");
        assert_relative_eq!(warning.smallest_change, 30.0 / 130.0, epsilon = 1.0e-12);
        assert_eq!(warning.selected_index, 2);

        let reversed = assess(
            &series(&[160.0, 130.0, 100.0], RefinementOrder::FineToCoarse),
            0.05,
        )
        .expect("valid series");
        assert_eq!(reversed.selected_index, 0);
    }

    #[test]
    fn zero_stress_levels() {
        let assessment = assess(
            &series(&[0.0, 0.0], RefinementOrder::CoarseToFine),
            0.05,
        )
        .expect("valid series");
        assert!(assessment.converged);

        let assessment = assess(
            &series(&[0.0, 10.0], RefinementOrder::CoarseToFine),
            0.05,
        )
        .expect("valid series");
        assert!(!assessment.converged);
        assert_eq!(assessment.pct_changes[0], f64::INFINITY);
    }

    #[test]
    fn malformed_studies_are_rejected() {
        assert_eq!(
            assess(&series(&[180.0], RefinementOrder::CoarseToFine), 0.05),
            Err(AnalysisError::DataShape(DataShapeError::TooFewMeshLevels { levels: 1 }))
        );
        assert_eq!(
            assess(&series(&[180.0, 181.0], RefinementOrder::CoarseToFine), 0.0),
            Err(AnalysisError::Domain(DomainError::InvalidThreshold { threshold: 0.0 }))
        );
        assert!(matches!(
            assess(&series(&[180.0, f64::NAN], RefinementOrder::CoarseToFine), 0.05),
            Err(AnalysisError::DataShape(DataShapeError::NonFiniteMeshStress { level: 1, .. }))
        ));
    }
}
