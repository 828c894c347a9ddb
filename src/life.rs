//! Stress-life prediction with Basquin's relation `Seq = σ'f·(2N)^b`.

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, DataShapeError, DomainError};
use crate::material::MaterialModel;

/// Lives at or beyond this many cycles are reported as infinite.
pub const INFINITE_LIFE_CYCLES: f64 = 1.0e7;

/// Check the Basquin constants of a material.
fn basquin_constants(material: &MaterialModel) -> Result<(f64, f64), DomainError> {
    let coefficient = material.fatigue_strength_coefficient;
    let exponent = material.fatigue_strength_exponent;
    if !exponent.is_finite() {
        return Err(DomainError::NonFinite {
            quantity: "fatigue strength exponent",
            value: exponent,
        });
    }
    if exponent == 0.0 {
        return Err(DomainError::ZeroFatigueExponent);
    }
    if !(coefficient > 0.0 && coefficient.is_finite()) {
        return Err(DomainError::NonPositiveFatigueCoefficient { coefficient });
    }
    Ok((coefficient, exponent))
}

/// Cycles to failure at a fully reversed equivalent stress.
///
/// The value is the plain Basquin life: it is not capped at the endurance limit
/// or floored at a minimum number of cycles.
///
/// # Errors
///
/// Returns [`DomainError`] when the stress is not positive or the Basquin
/// constants are invalid.
///
/// # Examples
/// ```
/// use fatiguex::{cycles_to_failure, stress_for_life, MaterialModel};
///
/// let material = MaterialModel::aluminium_6061_t6();
/// let stress = stress_for_life(1.0e6, &material).expect("positive life");
/// let cycles = cycles_to_failure(stress, &material).expect("positive stress");
/// assert!((cycles - 1.0e6).abs() / 1.0e6 < 1.0e-9);
/// ```
pub fn cycles_to_failure(
    equivalent_stress: f64,
    material: &MaterialModel,
) -> Result<f64, DomainError> {
    if !equivalent_stress.is_finite() {
        return Err(DomainError::NonFinite {
            quantity: "equivalent stress",
            value: equivalent_stress,
        });
    }
    if equivalent_stress <= 0.0 {
        return Err(DomainError::NonPositiveEquivalentStress { equivalent_stress });
    }
    let (coefficient, exponent) = basquin_constants(material)?;
    Ok(0.5 * (equivalent_stress / coefficient).powf(1.0 / exponent))
}

/// Fully reversed stress amplitude that produces failure after `cycles`.
///
/// # Errors
///
/// Returns [`DomainError`] when `cycles` is not a positive finite number or the
/// Basquin constants are invalid.
pub fn stress_for_life(cycles: f64, material: &MaterialModel) -> Result<f64, DomainError> {
    if !(cycles > 0.0 && cycles.is_finite()) {
        return Err(DomainError::NonPositiveLife { cycles });
    }
    let (coefficient, exponent) = basquin_constants(material)?;
    Ok(coefficient * (2.0 * cycles).powf(exponent))
}

/// Life prediction at one equivalent stress, with the usual verdict flags.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifeEstimate {
    /// Equivalent fully reversed stress in megapascals.
    pub equivalent_stress: f64,
    /// Predicted cycles to failure.
    pub cycles: f64,
    /// Base ten logarithm of the predicted cycles.
    pub log10_cycles: f64,
    /// Ratio of predicted life to the design life.
    pub life_safety_factor: f64,
    /// Whether the stress lies at or below the endurance limit.
    pub below_endurance_limit: bool,
    /// Whether the life reaches [`INFINITE_LIFE_CYCLES`].
    pub infinite_life: bool,
}

/// Predict life at `equivalent_stress` and compare it with `design_life`.
///
/// # Errors
///
/// Returns [`DomainError`] under the same conditions as [`cycles_to_failure`], or
/// when `design_life` is not positive.
pub fn estimate_life(
    equivalent_stress: f64,
    material: &MaterialModel,
    design_life: f64,
) -> Result<LifeEstimate, DomainError> {
    if !(design_life > 0.0 && design_life.is_finite()) {
        return Err(DomainError::NonPositiveLife {
            cycles: design_life,
        });
    }
    let cycles = cycles_to_failure(equivalent_stress, material)?;
    Ok(LifeEstimate {
        equivalent_stress,
        cycles,
        log10_cycles: cycles.log10(),
        life_safety_factor: cycles / design_life,
        below_endurance_limit: equivalent_stress <= material.endurance_limit,
        infinite_life: cycles >= INFINITE_LIFE_CYCLES,
    })
}

/// One point on a stress-life curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnPoint {
    /// Cycles to failure.
    pub cycles: f64,
    /// Fully reversed (`R = -1`) amplitude in megapascals.
    pub fully_reversed: f64,
    /// Pulsating tension (`R = 0`) amplitude from the Goodman line, in megapascals.
    pub pulsating: f64,
}

/// Log-spaced S-N curve data between `min_cycles` and `max_cycles`.
///
/// For pulsating tension the amplitude equals the mean stress, so the Goodman
/// line gives `Sa = Seq / (1 + Seq/Su)`.
///
/// # Errors
///
/// Returns [`DataShapeError::TooFewCurvePoints`] for fewer than two points and a
/// [`DomainError`] for invalid cycle bounds or material constants.
pub fn sn_curve(
    material: &MaterialModel,
    points: usize,
    min_cycles: f64,
    max_cycles: f64,
) -> Result<Vec<SnPoint>, AnalysisError> {
    if points < 2 {
        return Err(DataShapeError::TooFewCurvePoints { points }.into());
    }
    for cycles in [min_cycles, max_cycles] {
        if !(cycles > 0.0 && cycles.is_finite()) {
            return Err(DomainError::NonPositiveLife { cycles }.into());
        }
    }
    if material.ultimate_strength.is_nan() || material.ultimate_strength <= 0.0 {
        return Err(DomainError::NonPositiveStrength {
            quantity: "ultimate strength",
            value: material.ultimate_strength,
        }
        .into());
    }

    let start = min_cycles.log10();
    let step = (max_cycles.log10() - start) / (points - 1) as f64;
    (0..points)
        .map(|index| -> Result<SnPoint, AnalysisError> {
            let cycles = 10.0_f64.powf(start + step * index as f64);
            let fully_reversed = stress_for_life(cycles, material)?;
            let pulsating =
                fully_reversed / (1.0 + fully_reversed / material.ultimate_strength);
            Ok(SnPoint {
                cycles,
                fully_reversed,
                pulsating,
            })
        })
        .collect()
}
