//! Settings of a fatigue assessment.

use serde::{Deserialize, Serialize};

use crate::convergence::DEFAULT_CONVERGENCE_THRESHOLD;
use crate::damage::DutyCycle;
use crate::errors::ConfigError;
use crate::mean_stress::CorrectionMethod;
use crate::tensor::LoadCaseExtremes;

/// Scalar taken from the reduced load cases to build the mean and alternating
/// stresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressMeasure {
    /// Signed maximum principal stress. The amplitude is the largest principal
    /// magnitude of the vibratory case.
    #[default]
    MaxPrincipal,
    /// Von Mises equivalent stress, which carries no sign.
    VonMises,
}

impl StressMeasure {
    /// Mean stress from the static case and amplitude from the vibratory case,
    /// returned as `(mean_stress, amplitude)`.
    #[must_use]
    pub fn mean_and_amplitude(
        self,
        static_case: &LoadCaseExtremes,
        vibratory_case: &LoadCaseExtremes,
    ) -> (f64, f64) {
        match self {
            StressMeasure::MaxPrincipal => (
                static_case.max_principal,
                vibratory_case
                    .max_principal
                    .abs()
                    .max(vibratory_case.min_principal.abs()),
            ),
            StressMeasure::VonMises => (static_case.max_von_mises, vibratory_case.max_von_mises),
        }
    }
}

/// Settings shared by every stage of an assessment.
///
/// Missing fields in a JSON document fall back to [`AnalysisConfig::default`].
///
/// # Examples
/// ```
/// use fatiguex::{AnalysisConfig, CorrectionMethod};
///
/// let config = AnalysisConfig::from_json_str(r#"{"method": "gerber"}"#).expect("valid document");
/// assert_eq!(config.method, CorrectionMethod::Gerber);
/// assert_eq!(config.design_life, 1.0e6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Mean-stress correction.
    pub method: CorrectionMethod,
    /// Scalar used for the mean and alternating stresses.
    pub stress_measure: StressMeasure,
    /// Relative change below which a mesh study is converged.
    pub convergence_threshold: f64,
    /// Accepted deviation of duty cycle fractions from one.
    pub duty_fraction_tolerance: f64,
    /// Required life in cycles. Relative duty cycles are scaled to it.
    pub design_life: f64,
    /// Minimum acceptable yield safety factor.
    pub required_fos_yield: f64,
    /// Minimum acceptable fatigue safety factor.
    pub required_fos_fatigue: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            method: CorrectionMethod::default(),
            stress_measure: StressMeasure::default(),
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            duty_fraction_tolerance: DutyCycle::DEFAULT_FRACTION_TOLERANCE,
            design_life: 1.0e6,
            required_fos_yield: 1.5,
            required_fos_fatigue: 2.0,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidSetting`] when validation fails.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric setting is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSetting`] naming the first setting that is
    /// not positive and finite. The duty fraction tolerance may be zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("convergence_threshold", self.convergence_threshold),
            ("design_life", self.design_life),
            ("required_fos_yield", self.required_fos_yield),
            ("required_fos_fatigue", self.required_fos_fatigue),
        ];
        for (setting, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::InvalidSetting { setting, value });
            }
        }
        let tolerance = self.duty_fraction_tolerance;
        if !(tolerance >= 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidSetting {
                setting: "duty_fraction_tolerance",
                value: tolerance,
            });
        }
        Ok(())
    }
}
