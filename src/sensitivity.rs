//! One-at-a-time sensitivity ranking of design parameters.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, DataShapeError, DomainError};

/// Value of a design parameter: a number such as a thickness in millimetres or a
/// label such as a material grade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Numeric setting.
    Numeric(f64),
    /// Categorical setting.
    Label(String),
}

impl ParameterValue {
    /// Numeric value, if any.
    fn as_number(&self) -> Option<f64> {
        match self {
            ParameterValue::Numeric(value) => Some(*value),
            ParameterValue::Label(_) => None,
        }
    }
}

/// Metric obtained after changing one parameter away from its baseline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterVariation {
    /// Name of the varied parameter.
    pub parameter: String,
    /// Parameter setting in the baseline design, when known.
    pub baseline_value: Option<ParameterValue>,
    /// Parameter setting in the varied design, when known.
    pub varied_value: Option<ParameterValue>,
    /// Metric produced by the varied design, e.g. max von Mises stress.
    pub varied_metric: f64,
}

impl ParameterVariation {
    /// Create a variation without recording the parameter settings.
    pub fn new(parameter: impl Into<String>, varied_metric: f64) -> Self {
        Self {
            parameter: parameter.into(),
            baseline_value: None,
            varied_value: None,
            varied_metric,
        }
    }

    /// Create a variation of a numeric parameter.
    pub fn numeric(
        parameter: impl Into<String>,
        baseline_value: f64,
        varied_value: f64,
        varied_metric: f64,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            baseline_value: Some(ParameterValue::Numeric(baseline_value)),
            varied_value: Some(ParameterValue::Numeric(varied_value)),
            varied_metric,
        }
    }

    /// Relative change of the parameter itself, for numeric settings.
    fn relative_setting_change(&self) -> Option<f64> {
        let baseline = self.baseline_value.as_ref()?.as_number()?;
        let varied = self.varied_value.as_ref()?.as_number()?;
        let change = (varied - baseline) / baseline;
        (baseline != 0.0 && change != 0.0 && change.is_finite()).then_some(change)
    }
}

/// Signed impact of one parameter variation on the metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterImpact {
    /// Name of the varied parameter.
    pub parameter: String,
    /// `(baseline - varied) / baseline`; positive when the variation lowers the
    /// metric.
    pub pct_impact: f64,
    /// Metric produced by the varied design.
    pub varied_metric: f64,
    /// Relative metric change per relative parameter change, for numeric
    /// parameters.
    pub normalized_sensitivity: Option<f64>,
}

/// Reject baselines that cannot normalise an impact.
fn check_baseline(baseline_metric: f64) -> Result<(), DomainError> {
    if !baseline_metric.is_finite() {
        return Err(DomainError::NonFinite {
            quantity: "baseline metric",
            value: baseline_metric,
        });
    }
    if baseline_metric == 0.0 {
        return Err(DomainError::ZeroBaselineMetric);
    }
    Ok(())
}

/// Impact of one variation against the baseline.
fn impact_of(
    baseline_metric: f64,
    variation: &ParameterVariation,
) -> Result<ParameterImpact, AnalysisError> {
    if !variation.varied_metric.is_finite() {
        return Err(AnalysisError::Parameter {
            parameter: variation.parameter.clone(),
            source: DomainError::NonFinite {
                quantity: "varied metric",
                value: variation.varied_metric,
            },
        });
    }
    let pct_impact = (baseline_metric - variation.varied_metric) / baseline_metric;
    let normalized_sensitivity = variation
        .relative_setting_change()
        .map(|setting_change| -pct_impact / setting_change);
    Ok(ParameterImpact {
        parameter: variation.parameter.clone(),
        pct_impact,
        varied_metric: variation.varied_metric,
        normalized_sensitivity,
    })
}

/// Rank parameter variations by the magnitude of their impact on a metric.
///
/// The slice order is the declaration order: equal magnitudes keep it, and names
/// play no part in the ranking.
///
/// # Errors
///
/// Returns [`DomainError::ZeroBaselineMetric`] for a zero baseline,
/// [`DataShapeError::DuplicateParameter`] when a parameter appears twice and
/// [`AnalysisError::Parameter`] for a non-finite varied metric.
///
/// # Examples
/// ```
/// use fatiguex::{rank, ParameterVariation};
///
/// let ranking = rank(
///     185.2,
///     &[
///         ParameterVariation::new("thickness", 218.5),
///         ParameterVariation::new("fillet_radius", 114.8),
///     ],
/// )
/// .expect("non-zero baseline");
/// assert_eq!(ranking[0].parameter, "fillet_radius");
/// ```
pub fn rank(
    baseline_metric: f64,
    variations: &[ParameterVariation],
) -> Result<Vec<ParameterImpact>, AnalysisError> {
    check_baseline(baseline_metric)?;

    let mut seen = HashSet::new();
    for variation in variations {
        if !seen.insert(variation.parameter.as_str()) {
            return Err(DataShapeError::DuplicateParameter {
                name: variation.parameter.clone(),
            }
            .into());
        }
    }

    let mut impacts = variations
        .iter()
        .map(|variation| impact_of(baseline_metric, variation))
        .collect::<Result<Vec<_>, _>>()?;
    impacts.sort_by(|a, b| b.pct_impact.abs().total_cmp(&a.pct_impact.abs()));
    Ok(impacts)
}

/// Range of impacts produced by several settings of one parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterSwing {
    /// Name of the parameter.
    pub parameter: String,
    /// Smallest signed impact, never above zero.
    pub min_impact: f64,
    /// Largest signed impact, never below zero.
    pub max_impact: f64,
    /// `max_impact - min_impact`.
    pub swing: f64,
    /// Impacts of the individual settings in declaration order.
    pub levels: Vec<ParameterImpact>,
}

/// Group multi-level variations by parameter and rank them by swing, as drawn in
/// a tornado diagram.
///
/// The baseline counts as a zero-impact level of every parameter. Parameters are
/// grouped in order of first appearance and equal swings keep that order.
///
/// # Errors
///
/// Same as [`rank`], except that repeated parameter names are expected.
pub fn tornado(
    baseline_metric: f64,
    levels: &[ParameterVariation],
) -> Result<Vec<ParameterSwing>, AnalysisError> {
    check_baseline(baseline_metric)?;

    let mut swings: Vec<ParameterSwing> = Vec::new();
    for variation in levels {
        let impact = impact_of(baseline_metric, variation)?;
        let position = swings
            .iter()
            .position(|swing| swing.parameter == variation.parameter);
        let entry = match position {
            Some(position) => &mut swings[position],
            None => {
                swings.push(ParameterSwing {
                    parameter: variation.parameter.clone(),
                    min_impact: 0.0,
                    max_impact: 0.0,
                    swing: 0.0,
                    levels: Vec::new(),
                });
                let last = swings.len() - 1;
                &mut swings[last]
            }
        };
        entry.min_impact = entry.min_impact.min(impact.pct_impact);
        entry.max_impact = entry.max_impact.max(impact.pct_impact);
        entry.swing = entry.max_impact - entry.min_impact;
        entry.levels.push(impact);
    }

    swings.sort_by(|a, b| b.swing.total_cmp(&a.swing));
    Ok(swings)
}
