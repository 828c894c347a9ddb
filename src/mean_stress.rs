//! Mean-stress correction of alternating stresses.
//!
//! Compressive mean stresses are passed to the formulas unchanged. For Goodman
//! and Soderberg this lowers the equivalent stress; for Gerber the squared mean
//! term penalises tension and compression alike.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::DomainError;
use crate::material::MaterialModel;

/// Mean-stress correction model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionMethod {
    /// Linear line from the endurance limit to the ultimate strength.
    #[default]
    Goodman,
    /// Parabola from the endurance limit to the ultimate strength.
    Gerber,
    /// Linear line from the endurance limit to the yield strength.
    Soderberg,
}

impl CorrectionMethod {
    /// All methods, in order of decreasing conservatism for tensile mean stress.
    pub const ALL: [CorrectionMethod; 3] = [
        CorrectionMethod::Soderberg,
        CorrectionMethod::Goodman,
        CorrectionMethod::Gerber,
    ];
}

impl fmt::Display for CorrectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CorrectionMethod::Goodman => "Goodman",
            CorrectionMethod::Gerber => "Gerber",
            CorrectionMethod::Soderberg => "Soderberg",
        };
        f.write_str(name)
    }
}

/// Result of a mean-stress correction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeanStressCorrection {
    /// Method that produced the result.
    pub method: CorrectionMethod,
    /// Alternating stress amplitude Sa in megapascals.
    pub amplitude: f64,
    /// Mean stress Sm in megapascals.
    pub mean_stress: f64,
    /// Equivalent fully reversed amplitude in megapascals.
    pub equivalent_stress: f64,
    /// Factor of safety against fatigue at infinite life. Infinite when the
    /// combined demand is not positive.
    pub safety_factor: f64,
}

/// Correct an alternating stress for the effect of its mean stress.
///
/// # Errors
///
/// Returns [`DomainError`] when an input is not finite, the amplitude is negative,
/// a governing strength is not positive, or the mean stress drives the correction
/// denominator to zero or below.
///
/// # Examples
/// ```
/// use fatiguex::{correct, CorrectionMethod, MaterialModel};
///
/// let material = MaterialModel::aluminium_6061_t6();
/// let fully_reversed = correct(42.0, 0.0, &material, CorrectionMethod::Goodman)
///     .expect("zero mean stress is always valid");
/// assert_eq!(fully_reversed.equivalent_stress, 42.0);
/// ```
pub fn correct(
    amplitude: f64,
    mean_stress: f64,
    material: &MaterialModel,
    method: CorrectionMethod,
) -> Result<MeanStressCorrection, DomainError> {
    require_finite("stress amplitude", amplitude)?;
    require_finite("mean stress", mean_stress)?;
    if amplitude < 0.0 {
        return Err(DomainError::NegativeAmplitude { amplitude });
    }
    require_positive_strength("endurance limit", material.endurance_limit)?;

    let (limit, mean_term, denominator) = match method {
        CorrectionMethod::Goodman | CorrectionMethod::Gerber => {
            require_positive_strength("ultimate strength", material.ultimate_strength)?;
            let ratio = mean_stress / material.ultimate_strength;
            if method == CorrectionMethod::Gerber {
                (material.ultimate_strength, ratio * ratio, 1.0 - ratio * ratio)
            } else {
                (material.ultimate_strength, ratio, 1.0 - ratio)
            }
        }
        CorrectionMethod::Soderberg => {
            require_positive_strength("yield strength", material.yield_strength)?;
            let ratio = mean_stress / material.yield_strength;
            (material.yield_strength, ratio, 1.0 - ratio)
        }
    };

    if denominator <= 0.0 {
        return Err(DomainError::MeanStressBeyondLimit {
            method,
            mean_stress,
            limit,
        });
    }

    let equivalent_stress = amplitude / denominator;
    let demand = amplitude / material.endurance_limit + mean_term;
    let safety_factor = if demand > 0.0 {
        1.0 / demand
    } else {
        f64::INFINITY
    };

    debug!(%method, amplitude, mean_stress, equivalent_stress, safety_factor, "mean stress corrected");

    Ok(MeanStressCorrection {
        method,
        amplitude,
        mean_stress,
        equivalent_stress,
        safety_factor,
    })
}

/// Reject NaN and infinite inputs.
fn require_finite(quantity: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFinite { quantity, value })
    }
}

/// Reject strengths that cannot bound a correction.
fn require_positive_strength(quantity: &'static str, value: f64) -> Result<(), DomainError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonPositiveStrength { quantity, value })
    }
}

/// Constant-amplitude stress cycle described by its extremes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StressCycle {
    /// Maximum stress in the cycle.
    pub max: f64,
    /// Minimum stress in the cycle.
    pub min: f64,
}

impl StressCycle {
    /// Create a cycle from its maximum and minimum stress.
    #[must_use]
    pub const fn new(max: f64, min: f64) -> Self {
        Self { max, min }
    }

    /// Create a cycle from a mean stress and an amplitude.
    #[must_use]
    pub fn from_mean_and_amplitude(mean_stress: f64, amplitude: f64) -> Self {
        Self::new(mean_stress + amplitude, mean_stress - amplitude)
    }

    /// Mean stress `(max + min) / 2`.
    #[must_use]
    pub fn mean_stress(&self) -> f64 {
        0.5 * (self.max + self.min)
    }

    /// Stress amplitude `(max - min) / 2`.
    #[must_use]
    pub fn amplitude(&self) -> f64 {
        0.5 * (self.max - self.min)
    }

    /// Stress range `max - min`.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Stress ratio `R = min / max`.
    ///
    /// A cycle peaking at zero is reported as fully reversed (`-1`) when the minimum
    /// is compressive and as static (`1`) otherwise.
    #[must_use]
    pub fn r_ratio(&self) -> f64 {
        if self.max == 0.0 {
            if self.min < 0.0 {
                -1.0
            } else {
                1.0
            }
        } else {
            self.min / self.max
        }
    }

    /// Apply a mean-stress correction to this cycle.
    ///
    /// # Errors
    ///
    /// See [`correct`].
    pub fn correct(
        &self,
        material: &MaterialModel,
        method: CorrectionMethod,
    ) -> Result<MeanStressCorrection, DomainError> {
        correct(self.amplitude(), self.mean_stress(), material, method)
    }
}
