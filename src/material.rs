//! Linear-elastic and stress-life material constants.

use serde::{Deserialize, Serialize};

/// Material constants consumed by the fatigue chain, in megapascals.
///
/// The model is a plain value object. Relations such as `Se < Su <= σ'f` are
/// expected of real materials but are checked by the formulas that depend on
/// them, not here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialModel {
    /// Young's modulus.
    #[serde(rename = "E")]
    pub elastic_modulus: f64,
    /// Poisson's ratio.
    #[serde(rename = "nu")]
    pub poisson_ratio: f64,
    /// Yield strength.
    #[serde(rename = "Sy")]
    pub yield_strength: f64,
    /// Ultimate tensile strength.
    #[serde(rename = "Su")]
    pub ultimate_strength: f64,
    /// Corrected endurance limit.
    #[serde(rename = "Se")]
    pub endurance_limit: f64,
    /// Basquin fatigue strength coefficient σ'f.
    #[serde(rename = "sigma_f_prime")]
    pub fatigue_strength_coefficient: f64,
    /// Basquin fatigue strength exponent b, negative for real materials.
    #[serde(rename = "b")]
    pub fatigue_strength_exponent: f64,
}

impl MaterialModel {
    /// Wrought aluminium 6061-T6 with a corrected endurance limit.
    ///
    /// # Examples
    /// ```
    /// use fatiguex::MaterialModel;
    ///
    /// let material = MaterialModel::aluminium_6061_t6();
    /// assert!(material.endurance_limit < material.ultimate_strength);
    /// ```
    #[must_use]
    pub const fn aluminium_6061_t6() -> Self {
        Self {
            elastic_modulus: 68_900.0,
            poisson_ratio: 0.33,
            yield_strength: 276.0,
            ultimate_strength: 310.0,
            endurance_limit: 96.0,
            fatigue_strength_coefficient: 410.0,
            fatigue_strength_exponent: -0.085,
        }
    }

    /// Factor of safety against yielding for a von Mises stress.
    ///
    /// A stress-free part has an infinite factor of safety.
    #[must_use]
    pub fn yield_safety_factor(&self, von_mises: f64) -> f64 {
        if von_mises == 0.0 {
            f64::INFINITY
        } else {
            self.yield_strength / von_mises.abs()
        }
    }
}

/// Marin surface, size, load, temperature and reliability factors.
///
/// Every factor defaults to one, which leaves the base endurance limit unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarinFactors {
    /// Surface finish factor.
    pub ka: f64,
    /// Size factor.
    pub kb: f64,
    /// Load type factor.
    pub kc: f64,
    /// Temperature factor.
    pub kd: f64,
    /// Reliability factor.
    pub ke: f64,
}

impl Default for MarinFactors {
    fn default() -> Self {
        Self {
            ka: 1.0,
            kb: 1.0,
            kc: 1.0,
            kd: 1.0,
            ke: 1.0,
        }
    }
}

impl MarinFactors {
    /// Product of all factors.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.ka * self.kb * self.kc * self.kd * self.ke
    }

    /// Corrected endurance limit `Se = ka·kb·kc·kd·ke·Se'` with `Se' = 0.5·Su`.
    #[must_use]
    pub fn corrected_endurance_limit(&self, ultimate_strength: f64) -> f64 {
        self.product() * 0.5 * ultimate_strength
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn deserializes_external_field_names() {
        let json = r#"{"E": 200000.0, "nu": 0.3, "Sy": 250.0, "Su": 400.0,
            "Se": 160.0, "sigma_f_prime": 700.0, "b": -0.1}"#;
        let material: MaterialModel = serde_json::from_str(json).expect("valid document");
        assert_eq!(material.ultimate_strength, 400.0);
        assert_eq!(material.fatigue_strength_exponent, -0.1);
    }

    #[test]
    fn marin_factors_scale_base_endurance_limit() {
        let factors = MarinFactors {
            ka: 0.8,
            kb: 0.9,
            ..MarinFactors::default()
        };
        assert_relative_eq!(factors.corrected_endurance_limit(310.0), 111.6, epsilon = 1.0e-9);
        assert_relative_eq!(
            MarinFactors::default().corrected_endurance_limit(310.0),
            155.0,
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn yield_safety_factor_uses_absolute_stress() {
        let material = MaterialModel::aluminium_6061_t6();
        assert_relative_eq!(material.yield_safety_factor(138.0), 2.0, epsilon = 1.0e-12);
        assert_eq!(material.yield_safety_factor(0.0), f64::INFINITY);
    }
}
