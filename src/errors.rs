//! Error types produced while reducing stresses and predicting fatigue life.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mean_stress::CorrectionMethod;

/// Error returned when a stress tensor cannot be reduced.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InvalidTensorError {
    /// Returned when a tensor component is NaN or infinite.
    #[error("stress component {component} is not finite (received {value})")]
    NonFiniteComponent {
        /// Name of the offending component, e.g. `sxy`.
        component: &'static str,
        /// Rejected value in megapascals.
        value: f64,
    },
}

/// Error returned when a fatigue formula is evaluated outside its valid domain.
///
/// None of these are recoverable by clamping the input: a safety calculation that
/// quietly replaces an invalid value would understate the risk.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DomainError {
    /// Returned when an input quantity is NaN or infinite.
    #[error("{quantity} must be finite (received {value})")]
    NonFinite {
        /// Name of the rejected quantity.
        quantity: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a stress amplitude is negative.
    #[error("stress amplitude must not be negative (received {amplitude} MPa)")]
    NegativeAmplitude {
        /// Rejected amplitude in megapascals.
        amplitude: f64,
    },
    /// Returned when a strength used by a correction is zero or negative.
    #[error("{quantity} must be positive (received {value} MPa)")]
    NonPositiveStrength {
        /// Name of the rejected strength.
        quantity: &'static str,
        /// Rejected value in megapascals.
        value: f64,
    },
    /// Returned when the mean stress alone reaches the governing strength, which
    /// makes the correction denominator non-positive.
    #[error("mean stress {mean_stress} MPa is outside the {method} domain (limit {limit} MPa)")]
    MeanStressBeyondLimit {
        /// Correction that was requested.
        method: CorrectionMethod,
        /// Rejected mean stress in megapascals.
        mean_stress: f64,
        /// Ultimate or yield strength that bounds the correction.
        limit: f64,
    },
    /// Returned when Basquin's relation is evaluated at a non-positive stress.
    #[error("equivalent stress must be positive (received {equivalent_stress} MPa)")]
    NonPositiveEquivalentStress {
        /// Rejected equivalent stress in megapascals.
        equivalent_stress: f64,
    },
    /// Returned when the Basquin exponent is zero.
    #[error("fatigue strength exponent must be non-zero")]
    ZeroFatigueExponent,
    /// Returned when the Basquin coefficient is zero or negative.
    #[error("fatigue strength coefficient must be positive (received {coefficient} MPa)")]
    NonPositiveFatigueCoefficient {
        /// Rejected coefficient in megapascals.
        coefficient: f64,
    },
    /// Returned when a life in cycles is zero or negative.
    #[error("life must be a positive number of cycles (received {cycles})")]
    NonPositiveLife {
        /// Rejected number of cycles.
        cycles: f64,
    },
    /// Returned when a sensitivity baseline metric is zero.
    #[error("baseline metric must be non-zero")]
    ZeroBaselineMetric,
    /// Returned when a convergence threshold is zero, negative or not finite.
    #[error("convergence threshold must be positive and finite (received {threshold})")]
    InvalidThreshold {
        /// Rejected threshold as a fraction.
        threshold: f64,
    },
}

/// Error returned when a collection has the wrong size or content.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DataShapeError {
    /// Returned when Miner's rule is given no blocks.
    #[error("damage accumulation requires at least one block")]
    EmptyDamageBlocks,
    /// Returned when a block has a zero, negative or undefined life.
    #[error("block {block} has non-positive life {life}")]
    NonPositiveBlockLife {
        /// Position of the block in the sequence.
        block: usize,
        /// Rejected life in cycles.
        life: f64,
    },
    /// Returned when a block has a negative or undefined number of applied cycles.
    #[error("block {block} has invalid applied cycles {cycles}")]
    InvalidAppliedCycles {
        /// Position of the block in the sequence.
        block: usize,
        /// Rejected cycle count.
        cycles: f64,
    },
    /// Returned when a duty cycle has no blocks.
    #[error("duty cycle must contain at least one block")]
    EmptyDutyCycle,
    /// Returned when relative and absolute cycle shares are mixed.
    #[error("duty cycle mixes cycle fractions and cycle counts")]
    MixedDutyShares,
    /// Returned when cycle fractions do not add up to one.
    #[error("duty cycle fractions sum to {sum}, expected 1.0 within {tolerance}")]
    DutyFractionSum {
        /// Actual sum of the fractions.
        sum: f64,
        /// Accepted deviation from one.
        tolerance: f64,
    },
    /// Returned when a mesh study has fewer than two levels.
    #[error("convergence assessment requires at least two mesh levels (received {levels})")]
    TooFewMeshLevels {
        /// Number of levels supplied.
        levels: usize,
    },
    /// Returned when a mesh level reports a non-finite stress.
    #[error("mesh level {level} has non-finite extreme stress {stress}")]
    NonFiniteMeshStress {
        /// Position of the level in the series.
        level: usize,
        /// Rejected stress in megapascals.
        stress: f64,
    },
    /// Returned when an S-N curve is requested with fewer than two points.
    #[error("S-N curve requires at least two points (received {points})")]
    TooFewCurvePoints {
        /// Number of points requested.
        points: usize,
    },
    /// Returned when a stress path is sampled at fewer than two points.
    #[error("stress path requires at least two sample points (received {points})")]
    TooFewPathPoints {
        /// Number of points requested.
        points: usize,
    },
    /// Returned when a load case has no nodes.
    #[error("load case {load_case} contains no nodes")]
    EmptyLoadCase {
        /// Identifier of the load case.
        load_case: String,
    },
    /// Returned when the same parameter is declared twice in a sensitivity study.
    #[error("parameter {name} is declared more than once")]
    DuplicateParameter {
        /// Name of the repeated parameter.
        name: String,
    },
}

/// Error returned when a fatigue assessment fails.
///
/// Variants wrap the leaf errors with enough context to localise the failure.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when a nodal tensor in a load case is invalid.
    #[error("load case {load_case}, node {node_id}: {source}")]
    InvalidNode {
        /// Identifier of the load case.
        load_case: String,
        /// Identifier of the node.
        node_id: u64,
        /// Description of the invalid component.
        #[source]
        source: InvalidTensorError,
    },
    /// Returned when a duty block cannot be corrected or evaluated.
    #[error("duty block {block}: {source}")]
    DutyBlock {
        /// Position of the block in the duty cycle.
        block: usize,
        /// Underlying domain violation.
        #[source]
        source: DomainError,
    },
    /// Returned when a sensitivity parameter cannot be evaluated.
    #[error("parameter {parameter}: {source}")]
    Parameter {
        /// Name of the parameter.
        parameter: String,
        /// Underlying domain violation.
        #[source]
        source: DomainError,
    },
    /// Returned when a formula is evaluated outside its domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Returned when an input collection is malformed.
    #[error(transparent)]
    DataShape(#[from] DataShapeError),
}

/// Error returned when an [`AnalysisConfig`](crate::AnalysisConfig) cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the JSON document is malformed.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
    /// Returned when a setting is outside its accepted range.
    #[error("setting {setting} is invalid (received {value})")]
    InvalidSetting {
        /// Name of the rejected setting.
        setting: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// Non-fatal finding reported when a mesh study never meets its threshold.
///
/// # Examples
///
/// ```
/// use fatiguex::{assess, ConvergenceLevel, ConvergenceSeries, RefinementOrder};
///
/// let series = ConvergenceSeries::new(
///     vec![
///         ConvergenceLevel::new(4.0, 1_000, 100.0),
///         ConvergenceLevel::new(2.0, 8_000, 150.0),
///     ],
///     RefinementOrder::CoarseToFine,
/// );
/// let assessment = assess(&series, 0.05).expect("two levels are enough");
/// let warning = assessment.warning.expect("50% change is not converged");
/// assert_eq!(warning.selected_index, 1);
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq, Serialize, Deserialize)]
#[error(
    "mesh series did not converge: smallest change {smallest_change} exceeds threshold {threshold}; using finest level {selected_index}"
)]
pub struct ConvergenceWarning {
    /// Threshold the series was assessed against.
    pub threshold: f64,
    /// Smallest change observed between consecutive levels.
    pub smallest_change: f64,
    /// Index of the level selected in place of a converged one.
    pub selected_index: usize,
}
